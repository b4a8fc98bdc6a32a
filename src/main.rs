mod app;
mod clipboard;
mod config;
mod fetch;
mod github;
mod logging;
mod ui;

use anyhow::Result;
use app::{App, Command, Key};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use fetch::FetchOutcome;
use github::GitHubClient;
use ratatui::prelude::*;
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

/// Terminal UI for browsing a GitHub profile, its repositories and files
#[derive(Parser)]
#[command(name = "ghx", version, about)]
struct Cli {
    /// Profile id to pre-fill in the prompt
    profile: Option<String>,

    /// Extra config file merged over the global one
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = config::load_config(cli.config.as_deref());

    // Logging is best-effort; the TUI owns stdout/stderr
    if let Ok(path) = logging::init(&config.log) {
        tracing::info!(log = %path.display(), "ghx starting");
    }

    let client = GitHubClient::new(&config.api)?;
    let mut app = App::new(cli.profile, config.display.clone());

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let size = terminal.size()?;
    app.resize(size.width, size.height);

    // Run event loop
    let result = run_app(&mut terminal, &mut app, &client);

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        tracing::error!(error = ?err, "event loop failed");
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    client: &GitHubClient,
) -> Result<()> {
    // Channel for completed fetches
    let (fetch_tx, fetch_rx) = mpsc::channel::<FetchOutcome>();

    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        // Poll for events with a timeout (lets us pick up fetch results too)
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if let Some(key) = Key::from_event(key) {
                        let command = app.handle_key(key);
                        dispatch(app, command, client, &fetch_tx);
                    }
                }
                Event::Resize(width, height) => app.resize(width, height),
                _ => {}
            }
        }

        // Apply every result that arrived since the last frame
        while let Ok(outcome) = fetch_rx.try_recv() {
            let command = app.apply(outcome);
            dispatch(app, command, client, &fetch_tx);
        }

        // Advance the spinner, expire notifications
        app.tick();

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Run the side effect a transition asked for
fn dispatch(
    app: &mut App,
    command: Option<Command>,
    client: &GitHubClient,
    tx: &mpsc::Sender<FetchOutcome>,
) {
    match command {
        Some(Command::Fetch(request)) => fetch::spawn(client.clone(), request, tx.clone()),
        Some(Command::Copy(text)) => match clipboard::copy(&text) {
            Ok(()) => app.copied(&text),
            Err(err) => {
                tracing::warn!(error = %err, "clipboard copy failed");
                app.notify("Clipboard unavailable");
            }
        },
        None => {}
    }
}
