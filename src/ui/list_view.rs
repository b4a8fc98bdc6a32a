use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

use super::styles;
use super::utils::or_na;
use crate::app::{App, HEADER_HEIGHT};
use crate::github::Entry;

fn marker(is_sel: bool) -> Span<'static> {
    if is_sel {
        Span::styled("> ", Style::default().fg(styles::CYAN))
    } else {
        Span::raw("  ")
    }
}

/// Block with a title on top and the page indicator on the bottom border
fn list_block(title: String, indicator: Option<String>) -> Block<'static> {
    let mut block = Block::default()
        .title(Span::styled(title, styles::header_style()))
        .borders(Borders::ALL)
        .border_style(styles::border_style())
        .padding(Padding::horizontal(1));
    if let Some(ind) = indicator {
        block = block.title_bottom(Line::from(Span::styled(ind, styles::dim_style())).centered());
    }
    block
}

fn empty_item(text: &str) -> ListItem<'_> {
    ListItem::new(Line::from(Span::styled(text, styles::dim_style())))
}

/// Render one page of repositories, two lines per row
pub fn render_repositories(f: &mut Frame, area: Rect, app: &App) {
    let repos = &app.repositories;
    let page = app.page();

    let items: Vec<ListItem> = if repos.is_empty() {
        let text = if app.in_flight > 0 {
            "Loading repositories…"
        } else {
            "No repositories"
        };
        vec![empty_item(text)]
    } else {
        repos[page.range()]
            .iter()
            .enumerate()
            .map(|(offset, repo)| {
                let is_sel = page.start + offset == app.cursor;
                let name_style = if is_sel {
                    styles::selected_style()
                } else {
                    styles::repository_style()
                };
                ListItem::new(vec![
                    Line::from(vec![marker(is_sel), Span::styled(repo.name.as_str(), name_style)]),
                    Line::from(vec![
                        Span::raw("  "),
                        Span::styled(or_na(repo.description.as_deref()), styles::dim_style()),
                    ]),
                ])
            })
            .collect()
    };

    let block = list_block(format!(" REPOSITORIES ({}) ", repos.len()), page.indicator());
    f.render_widget(List::new(items).block(block), area);
}

fn entry_line(entry: &Entry, is_sel: bool) -> Line<'_> {
    let (icon, style) = if entry.is_dir() {
        ("▸ ", styles::folder_style())
    } else {
        ("  ", styles::file_style())
    };
    let style = if is_sel { styles::selected_style() } else { style };
    let suffix = if entry.is_dir() { "/" } else { "" };
    Line::from(vec![
        marker(is_sel),
        Span::styled(icon, style),
        Span::styled(format!("{}{}", entry.name, suffix), style),
    ])
}

/// Render one page of the current directory listing
pub fn render_files(f: &mut Frame, area: Rect, app: &App) {
    let entries = &app.directory_listing;
    let page = app.page();

    let items: Vec<ListItem> = if entries.is_empty() {
        let text = if app.in_flight > 0 {
            "Loading…"
        } else {
            "Empty directory"
        };
        vec![empty_item(text)]
    } else {
        entries[page.range()]
            .iter()
            .enumerate()
            .map(|(offset, entry)| {
                ListItem::new(entry_line(entry, page.start + offset == app.cursor))
            })
            .collect()
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(HEADER_HEIGHT), Constraint::Min(1)])
        .split(area);

    render_location(f, chunks[0], app);
    let title = format!(" FILES ({}) ", entries.len());
    f.render_widget(List::new(items).block(list_block(title, page.indicator())), chunks[1]);
}

/// Header card: Repository and Path of the current folder
fn render_location(f: &mut Frame, area: Rect, app: &App) {
    let path = format!("/{}", app.current_path());
    let line = Line::from(vec![
        Span::styled("Repository ", styles::label_style()),
        Span::styled(
            app.selected_repository.as_deref().unwrap_or(""),
            styles::repository_style(),
        ),
        Span::styled("   Path ", styles::label_style()),
        Span::styled(path, styles::value_style()),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style())
        .padding(Padding::horizontal(1));
    f.render_widget(Paragraph::new(line).block(block), area);
}
