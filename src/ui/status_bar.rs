use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::styles;
use crate::app::{App, Screen};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Compute the display width of a list of spans
fn spans_width(spans: &[Span]) -> usize {
    spans.iter().map(|s| s.content.chars().count()).sum()
}

/// Breadcrumb for the top bar: login › repo › path › file
fn breadcrumb(app: &App) -> Vec<String> {
    let mut parts = Vec::new();
    let login = app
        .profile
        .as_ref()
        .map(|p| p.login.clone())
        .unwrap_or_else(|| app.profile_id.trim().to_string());
    if login.is_empty() || app.screen == Screen::Input {
        return parts;
    }
    parts.push(login);
    if matches!(app.screen, Screen::Files | Screen::FileContent) {
        if let Some(repo) = &app.selected_repository {
            parts.push(repo.clone());
        }
        parts.extend(app.directory_stack.iter().cloned());
        if app.screen == Screen::FileContent {
            if let Some(file) = &app.selected_file {
                parts.push(file.clone());
            }
        }
    }
    parts
}

/// Render the top bar
///
///   ghx  octocat › Hello-World › src › main.rs
pub fn render_top_bar(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(" ghx ", styles::active_tab_style()), Span::raw(" ")];
    for (i, part) in breadcrumb(app).into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" › ", Style::default().fg(styles::BORDER)));
        }
        let style = if i == 0 {
            Style::default().fg(styles::CYAN)
        } else {
            Style::default().fg(styles::TEXT)
        };
        spans.push(Span::styled(part, style));
    }
    let bar = Paragraph::new(Line::from(spans)).style(Style::default().bg(styles::PANEL));
    f.render_widget(bar, area);
}

fn hints(screen: &Screen, selecting: bool) -> Vec<(&'static str, &'static str)> {
    match screen {
        Screen::Input => vec![("Enter", "load profile"), ("q", "quit")],
        Screen::Profile => vec![("Tab", "repositories"), ("q", "quit")],
        Screen::Repositories => vec![
            ("↑/↓", "move"),
            ("Enter", "view files"),
            ("/", "search"),
            ("Tab", "overview"),
            ("q", "quit"),
        ],
        Screen::Files => vec![
            ("↑/↓", "move"),
            ("Enter", "open"),
            ("Esc", "back"),
            ("q", "quit"),
        ],
        Screen::FileContent if selecting => vec![
            ("←/→ ↑/↓", "adjust"),
            ("Ctrl+C", "copy"),
            ("Ctrl+D", "deselect"),
            ("Esc", "cancel"),
        ],
        Screen::FileContent => vec![
            ("↑/↓ PgUp/PgDn", "scroll"),
            ("Ctrl+A", "select all"),
            ("Esc", "back"),
            ("q", "quit"),
        ],
        Screen::Search => vec![("Enter", "search"), ("Esc", "cancel")],
        Screen::Error(_) => vec![("q", "quit")],
    }
}

/// Render the bottom bar: key hints on the left, loading spinner or the
/// latest notification on the right
pub fn render_bottom_bar(f: &mut Frame, area: Rect, app: &App) {
    let mut left: Vec<Span> = vec![Span::raw(" ")];
    for (key, action) in hints(&app.screen, app.selection.is_selecting()) {
        left.push(Span::styled(key, styles::key_hint_style()));
        left.push(Span::styled(format!(" {}  ", action), styles::dim_style()));
    }

    let mut right: Vec<Span> = Vec::new();
    if let Some(msg) = &app.notification {
        right.push(Span::styled("● ", Style::default().fg(styles::GREEN)));
        right.push(Span::styled(msg.clone(), Style::default().fg(styles::TEXT)));
        right.push(Span::raw("  "));
    }
    if app.in_flight > 0 {
        let frame = SPINNER[app.spinner_tick % SPINNER.len()];
        right.push(Span::styled(frame, styles::spinner_style()));
        right.push(Span::styled(" Loading… ", styles::dim_style()));
    }

    let width = area.width as usize;
    let used = spans_width(&left) + spans_width(&right);
    let mut spans = left;
    if !right.is_empty() {
        spans.push(Span::raw(" ".repeat(width.saturating_sub(used))));
        spans.extend(right);
    }

    let bar = Paragraph::new(Line::from(spans)).style(Style::default().bg(styles::PANEL));
    f.render_widget(bar, area);
}
