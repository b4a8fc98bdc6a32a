use std::ops::Range;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use super::styles;
use super::utils::expand_tabs;
use crate::app::{App, HEADER_HEIGHT};

/// Render the file viewer: a header card with the file's path, then the
/// scrollable content with the selection highlighted.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(HEADER_HEIGHT), Constraint::Min(1)])
        .split(area);

    render_header(f, chunks[0], app);
    render_body(f, chunks[1], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let repo = app.selected_repository.as_deref().unwrap_or("");
    let file = app.selected_file.as_deref().unwrap_or("");

    let mut spans = vec![
        Span::styled(repo, styles::repository_style()),
        Span::styled(" / ", styles::dim_style()),
        Span::styled(file, styles::file_style()),
    ];
    if let Some(sel) = app.selection.active_range() {
        spans.push(Span::styled(
            format!("   {} bytes selected", sel.len()),
            Style::default().fg(styles::PINK),
        ));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style())
        .padding(Padding::horizontal(1));
    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_body(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::LEFT | Borders::RIGHT | Borders::BOTTOM)
        .border_style(styles::border_style())
        .padding(Padding::horizontal(1));

    let Some(content) = app.file_content.as_deref() else {
        let loading = Paragraph::new(Span::styled(
            "Loading file…",
            Style::default().fg(styles::MUTED),
        ))
        .block(block);
        f.render_widget(loading, area);
        return;
    };

    let lines = content_lines(
        content,
        app.selection.active_range(),
        app.display.line_numbers,
        app.display.tab_width,
    );
    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().fg(styles::TEXT))
        .scroll((app.content_scroll, 0));
    f.render_widget(paragraph, area);
}

/// Split `content` into display lines, highlighting the bytes inside
/// `selection` and prefixing a line-number gutter when asked.
pub(crate) fn content_lines(
    content: &str,
    selection: Option<Range<usize>>,
    line_numbers: bool,
    tab_width: u8,
) -> Vec<Line<'static>> {
    let total = content.lines().count().max(1);
    let gutter = total.to_string().len();

    let mut lines = Vec::new();
    let mut offset = 0;
    for (idx, raw) in content.split_inclusive('\n').enumerate() {
        let start = offset;
        offset += raw.len();
        let text = raw.strip_suffix('\n').unwrap_or(raw);
        let text = text.strip_suffix('\r').unwrap_or(text);

        let mut spans = Vec::new();
        if line_numbers {
            spans.push(Span::styled(
                format!("{:>width$} ", idx + 1, width = gutter),
                styles::dim_style(),
            ));
        }
        spans.extend(highlight(text, start, selection.as_ref(), tab_width));
        lines.push(Line::from(spans));
    }
    lines
}

/// Spans for one line that starts at byte `start` of the content
fn highlight(
    text: &str,
    start: usize,
    selection: Option<&Range<usize>>,
    tab_width: u8,
) -> Vec<Span<'static>> {
    let plain = |s: &str| Span::raw(expand_tabs(s, tab_width));
    let end = start + text.len();

    let Some(sel) = selection.filter(|s| s.start < end && s.end > start) else {
        return vec![plain(text)];
    };

    // Selection ends always sit on char boundaries of the content
    let from = sel.start.saturating_sub(start).min(text.len());
    let to = sel.end.saturating_sub(start).min(text.len());

    let mut spans = Vec::new();
    if from > 0 {
        spans.push(plain(&text[..from]));
    }
    spans.push(Span::styled(
        expand_tabs(&text[from..to], tab_width),
        styles::text_selection_style(),
    ));
    if to < text.len() {
        spans.push(plain(&text[to..]));
    }
    spans
}
