use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
    Frame,
};

use super::styles;
use super::utils::centered_rect;
use crate::app::App;

const PROMPT_WIDTH: u16 = 60;

/// Single-line text field with a block cursor at the end
fn field<'a>(value: &'a str, placeholder: &'a str) -> Line<'a> {
    if value.is_empty() {
        Line::from(vec![
            Span::styled("█", Style::default().fg(styles::CYAN)),
            Span::styled(placeholder, styles::dim_style()),
        ])
    } else {
        Line::from(vec![
            Span::styled(value, styles::value_style()),
            Span::styled("█", Style::default().fg(styles::CYAN)),
        ])
    }
}

/// Render the profile-id prompt
pub fn render_input(f: &mut Frame, area: Rect, app: &App) {
    let popup = centered_rect(PROMPT_WIDTH, 7, area);

    let block = Block::default()
        .title(Span::styled(" GitHub Explorer ", styles::header_style()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(styles::BLUE))
        .padding(Padding::horizontal(1));

    let lines = vec![
        Line::from(Span::styled("Profile", styles::label_style())),
        field(&app.profile_id, "Enter GitHub profile ID"),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to load the profile",
            styles::dim_style(),
        )),
    ];

    f.render_widget(Clear, popup);
    f.render_widget(Paragraph::new(lines).block(block), popup);
}

/// Render the repository search prompt
pub fn render_search(f: &mut Frame, area: Rect, app: &App) {
    let popup = centered_rect(PROMPT_WIDTH, 5, area);

    let login = app.profile.as_ref().map(|p| p.login.as_str()).unwrap_or("");
    let title = if login.is_empty() {
        " Search repositories ".to_string()
    } else {
        format!(" Search {}'s repositories ", login)
    };

    let block = Block::default()
        .title(Span::styled(title, styles::header_style()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(styles::BLUE))
        .padding(Padding::horizontal(1));

    let lines = vec![
        Line::from(vec![
            Span::styled("/ ", Style::default().fg(styles::CYAN)),
            Span::styled(app.search_query.as_str(), styles::value_style()),
            Span::styled("█", Style::default().fg(styles::CYAN)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Enter to search, Esc to cancel",
            styles::dim_style(),
        )),
    ];

    f.render_widget(Clear, popup);
    f.render_widget(Paragraph::new(lines).block(block), popup);
}

/// Render the error screen. Only `q` leaves it.
pub fn render_error(f: &mut Frame, area: Rect, message: &str) {
    let popup = centered_rect(PROMPT_WIDTH, 8, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(styles::RED))
        .padding(Padding::horizontal(1));

    let lines = vec![
        Line::from(Span::styled("Error Occurred", styles::error_style())),
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(styles::TEXT))),
        Line::from(""),
        Line::from(Span::styled("Press 'q' to quit", styles::dim_style())),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, popup);
    f.render_widget(paragraph, popup);
}
