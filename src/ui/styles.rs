use ratatui::style::{Color, Modifier, Style};

// ── Background colors ──
pub const BG: Color = Color::Rgb(12, 12, 12);
pub const PANEL: Color = Color::Rgb(26, 26, 26);
pub const BORDER: Color = Color::Rgb(42, 42, 42);

// ── Text colors ──
pub const TEXT: Color = Color::Rgb(200, 200, 200);
pub const DIM: Color = Color::Rgb(102, 102, 102);
pub const MUTED: Color = Color::Rgb(136, 136, 136);
pub const BRIGHT: Color = Color::Rgb(232, 232, 232);

// ── Accent colors ──
pub const BLUE: Color = Color::Rgb(96, 165, 250);
pub const CYAN: Color = Color::Rgb(34, 211, 238);
pub const GREEN: Color = Color::Rgb(74, 222, 128);
pub const RED: Color = Color::Rgb(248, 113, 113);
pub const PINK: Color = Color::Rgb(244, 114, 182);

// ── Composed styles ──

pub fn default_style() -> Style {
    Style::default().fg(TEXT).bg(BG)
}

pub fn border_style() -> Style {
    Style::default().fg(BORDER)
}

pub fn header_style() -> Style {
    Style::default().fg(CYAN).add_modifier(Modifier::BOLD)
}

pub fn label_style() -> Style {
    Style::default().fg(MUTED)
}

pub fn value_style() -> Style {
    Style::default().fg(BRIGHT)
}

pub fn dim_style() -> Style {
    Style::default().fg(DIM)
}

pub fn selected_style() -> Style {
    Style::default().fg(BLUE).bg(Color::Rgb(26, 42, 58))
}

/// Highlight for the text-selection range in the file viewer
pub fn text_selection_style() -> Style {
    Style::default().fg(BG).bg(PINK)
}

pub fn repository_style() -> Style {
    Style::default().fg(CYAN).add_modifier(Modifier::BOLD)
}

pub fn folder_style() -> Style {
    Style::default().fg(BLUE).add_modifier(Modifier::BOLD)
}

pub fn file_style() -> Style {
    Style::default().fg(GREEN)
}

pub fn error_style() -> Style {
    Style::default().fg(RED).add_modifier(Modifier::BOLD)
}

pub fn key_hint_style() -> Style {
    Style::default().fg(MUTED).add_modifier(Modifier::BOLD)
}

pub fn active_tab_style() -> Style {
    Style::default()
        .fg(BG)
        .bg(BLUE)
        .add_modifier(Modifier::BOLD)
}

pub fn tab_style() -> Style {
    Style::default().fg(MUTED)
}

pub fn spinner_style() -> Style {
    Style::default().fg(PINK)
}
