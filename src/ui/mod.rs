mod content_view;
mod list_view;
mod profile_view;
mod prompt;
mod status_bar;
mod styles;
mod utils;

use crate::app::{App, Screen};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::widgets::Block;
use ratatui::Frame;

/// Render the entire UI
pub fn draw(f: &mut Frame, app: &App) {
    f.render_widget(Block::default().style(styles::default_style()), f.area());

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // top bar
            Constraint::Min(1),    // main content
            Constraint::Length(1), // bottom bar
        ])
        .split(f.area());

    status_bar::render_top_bar(f, outer[0], app);

    match &app.screen {
        Screen::Input => prompt::render_input(f, outer[1], app),
        Screen::Profile | Screen::Repositories => profile_view::render(f, outer[1], app),
        Screen::Files => list_view::render_files(f, outer[1], app),
        Screen::FileContent => content_view::render(f, outer[1], app),
        Screen::Search => {
            // Keep the repository list visible underneath the prompt
            list_view::render_repositories(f, outer[1], app);
            prompt::render_search(f, outer[1], app);
        }
        Screen::Error(msg) => prompt::render_error(f, outer[1], msg),
    }

    status_bar::render_bottom_bar(f, outer[2], app);
}
