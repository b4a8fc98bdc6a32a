use std::ops::Range;

/// Text-range selection over the open file.
///
/// The range is a half-open byte interval whose ends always sit on UTF-8
/// character boundaries inside the content. `start` never moves after
/// select-all; only `end` is extended or shrunk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextSelection {
    selecting: bool,
    range: Option<Range<usize>>,
}

impl TextSelection {
    pub fn is_selecting(&self) -> bool {
        self.selecting
    }

    pub fn range(&self) -> Option<Range<usize>> {
        self.range.clone()
    }

    /// Range to highlight: only while selecting
    pub fn active_range(&self) -> Option<Range<usize>> {
        if self.selecting {
            self.range()
        } else {
            None
        }
    }

    /// ctrl+a
    pub fn select_all(&mut self, text: &str) {
        self.selecting = true;
        self.range = Some(0..text.len());
    }

    /// ctrl+d: leaves selection mode but re-sets the range to the whole text
    pub fn release(&mut self, text: &str) {
        self.selecting = false;
        self.range = Some(0..text.len());
    }

    pub fn clear(&mut self) {
        self.selecting = false;
        self.range = None;
    }

    /// Move `end` by `delta` bytes, snapping outward to the next character
    /// boundary in the direction of travel and clamping to `[start, len]`.
    pub fn extend(&mut self, text: &str, delta: isize) {
        if !self.selecting {
            return;
        }
        let Some(range) = self.range.as_mut() else {
            return;
        };
        let target = if delta < 0 {
            range.end.saturating_sub(delta.unsigned_abs())
        } else {
            range.end.saturating_add(delta as usize)
        };
        let mut end = target.clamp(range.start, text.len());
        if delta < 0 {
            while !text.is_char_boundary(end) {
                end -= 1;
            }
        } else {
            while !text.is_char_boundary(end) {
                end += 1;
            }
        }
        range.end = end.max(range.start);
    }

    /// Selected substring, when a valid range exists
    pub fn selected<'a>(&self, text: &'a str) -> Option<&'a str> {
        let range = self.range.as_ref()?;
        text.get(range.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_all_covers_text() {
        let mut sel = TextSelection::default();
        sel.select_all("hello");
        assert!(sel.is_selecting());
        assert_eq!(sel.range(), Some(0..5));
        assert_eq!(sel.active_range(), Some(0..5));
    }

    #[test]
    fn shrink_by_one_char() {
        let text = "a".repeat(100);
        let mut sel = TextSelection::default();
        sel.select_all(&text);
        sel.extend(&text, -1);
        assert_eq!(sel.range(), Some(0..99));
        assert_eq!(sel.selected(&text).map(str::len), Some(99));
    }

    #[test]
    fn end_clamped_at_both_ends() {
        let text = "abc";
        let mut sel = TextSelection::default();
        sel.select_all(text);
        for _ in 0..10 {
            sel.extend(text, 1);
        }
        assert_eq!(sel.range(), Some(0..3));
        for _ in 0..10 {
            sel.extend(text, -80);
        }
        assert_eq!(sel.range(), Some(0..0));
        sel.extend(text, 80);
        assert_eq!(sel.range(), Some(0..3));
    }

    #[test]
    fn multibyte_chars_not_split() {
        let text = "aé€";
        let mut sel = TextSelection::default();
        sel.select_all(text);
        assert_eq!(sel.range(), Some(0..6));
        sel.extend(text, -1);
        assert_eq!(sel.selected(text), Some("aé"));
        sel.extend(text, -1);
        assert_eq!(sel.selected(text), Some("a"));
        sel.extend(text, 1);
        assert_eq!(sel.selected(text), Some("aé"));
    }

    #[test]
    fn extend_ignored_when_not_selecting() {
        let mut sel = TextSelection::default();
        sel.extend("abc", 1);
        assert_eq!(sel.range(), None);

        sel.release("abc");
        sel.extend("abc", -1);
        assert_eq!(sel.range(), Some(0..3));
    }

    #[test]
    fn release_keeps_full_range_but_hides_it() {
        let mut sel = TextSelection::default();
        sel.select_all("abcdef");
        sel.extend("abcdef", -3);
        sel.release("abcdef");
        assert!(!sel.is_selecting());
        assert_eq!(sel.range(), Some(0..6));
        assert_eq!(sel.active_range(), None);
    }

    #[test]
    fn clear_drops_everything() {
        let mut sel = TextSelection::default();
        sel.select_all("abc");
        sel.clear();
        assert_eq!(sel, TextSelection::default());
    }

    #[test]
    fn empty_text() {
        let mut sel = TextSelection::default();
        sel.select_all("");
        sel.extend("", -1);
        sel.extend("", 1);
        assert_eq!(sel.range(), Some(0..0));
        assert_eq!(sel.selected(""), Some(""));
    }
}
