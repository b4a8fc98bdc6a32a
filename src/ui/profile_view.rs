use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Tabs, Wrap},
    Frame,
};

use super::list_view;
use super::styles;
use super::utils::or_na;
use crate::app::App;
use crate::github::Profile;

const TAB_TITLES: [&str; 2] = ["Overview", "Repositories"];

/// Render the tabbed profile view (Overview | Repositories)
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(area);

    let tabs = Tabs::new(TAB_TITLES.iter().map(|t| Line::from(*t)))
        .select(app.screen.active_tab().unwrap_or(0))
        .style(styles::tab_style())
        .highlight_style(styles::active_tab_style())
        .divider(Span::styled("│", styles::border_style()))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(styles::border_style()),
        );
    f.render_widget(tabs, chunks[0]);

    match app.screen.active_tab() {
        Some(1) => list_view::render_repositories(f, chunks[1], app),
        _ => render_overview(f, chunks[1], app),
    }
}

fn field<'a>(label: &'a str, value: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{:<10}", label), styles::label_style()),
        Span::styled(value, styles::value_style()),
    ])
}

fn overview_lines(profile: &Profile) -> Vec<Line<'_>> {
    vec![
        field("Name", or_na(profile.name.as_deref())),
        field("Username", or_na(Some(profile.login.as_str()))),
        field("Bio", or_na(profile.bio.as_deref())),
        Line::from(""),
        Line::from(vec![
            Span::styled(profile.followers.to_string(), styles::value_style()),
            Span::styled(" followers • ", styles::label_style()),
            Span::styled(profile.following.to_string(), styles::value_style()),
            Span::styled(" following", styles::label_style()),
        ]),
    ]
}

fn render_overview(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(Span::styled(" PROFILE ", styles::header_style()))
        .borders(Borders::ALL)
        .border_style(styles::border_style())
        .padding(Padding::new(2, 2, 1, 0));

    let lines = match &app.profile {
        Some(profile) => overview_lines(profile),
        None => vec![Line::from(Span::styled(
            "Loading profile…",
            Style::default().fg(styles::MUTED),
        ))],
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}
