mod keys;
mod pagination;
mod selection;
mod state;

pub use keys::Key;
pub use state::{App, Command, Screen, HEADER_HEIGHT};
