use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// `N/A` for missing or blank strings
pub(crate) fn or_na(s: Option<&str>) -> &str {
    match s {
        Some(v) if !v.trim().is_empty() => v,
        _ => "N/A",
    }
}

/// Replace tabs with `width` spaces (at least one)
pub(crate) fn expand_tabs(s: &str, width: u8) -> String {
    if !s.contains('\t') {
        return s.to_string();
    }
    s.replace('\t', &" ".repeat(width.max(1) as usize))
}

/// Fixed-size rect centered inside `r`, shrunk to fit
pub(crate) fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(r.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(r.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn or_na_blank_and_missing() {
        assert_eq!(or_na(None), "N/A");
        assert_eq!(or_na(Some("")), "N/A");
        assert_eq!(or_na(Some("   ")), "N/A");
        assert_eq!(or_na(Some("hi")), "hi");
    }

    #[test]
    fn expand_tabs_uses_width() {
        assert_eq!(expand_tabs("\tx", 4), "    x");
        assert_eq!(expand_tabs("a\tb", 0), "a b");
        assert_eq!(expand_tabs("plain", 4), "plain");
    }

    #[test]
    fn centered_rect_fits_inside() {
        let outer = Rect::new(0, 0, 100, 40);
        let inner = centered_rect(60, 10, outer);
        assert_eq!(inner, Rect::new(20, 15, 60, 10));

        let tiny = centered_rect(60, 10, Rect::new(0, 0, 20, 5));
        assert!(tiny.width <= 20 && tiny.height <= 5);
    }
}
