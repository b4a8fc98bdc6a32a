use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

/// Directory holding the log file (`~/.cache/ghx` on Linux).
pub fn log_dir() -> Option<PathBuf> {
    dirs::cache_dir().map(|d| d.join("ghx"))
}

/// Route `tracing` output to `<cache dir>/ghx/ghx.log`.
///
/// The terminal is owned by the UI, so nothing is ever written to stdout or
/// stderr. `RUST_LOG` takes precedence over `[log] level`. Calling this more
/// than once keeps the first subscriber.
pub fn init(config: &LogConfig) -> Result<PathBuf> {
    let dir = log_dir().context("Could not determine cache directory")?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    let path = dir.join("ghx.log");

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init();

    Ok(path)
}
