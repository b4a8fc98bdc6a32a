use std::ops::Range;

/// Which slice of a list is on screen, derived from the cursor every render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// 1-based
    pub current: usize,
    pub total: usize,
    pub start: usize,
    pub end: usize,
}

impl Page {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// `• 2/3 •`, or nothing when everything fits on one page
    pub fn indicator(&self) -> Option<String> {
        if self.total <= 1 {
            None
        } else {
            Some(format!("• {}/{} •", self.current, self.total))
        }
    }
}

/// The cursor is never clamped to a page: moving past the last row of a page
/// simply lands on the next one. A cursor beyond `total_items` (stale list)
/// yields an empty slice instead of an out-of-bounds one.
pub fn paginate(cursor: usize, total_items: usize, page_size: usize) -> Page {
    let page_size = page_size.max(1);
    let current = cursor / page_size + 1;
    let total = total_items.div_ceil(page_size);
    let start = ((current - 1) * page_size).min(total_items);
    let end = (current * page_size).min(total_items);
    Page {
        current,
        total,
        start,
        end,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn third_page_of_twenty_five() {
        let page = paginate(23, 25, 10);
        assert_eq!(page.current, 3);
        assert_eq!(page.total, 3);
        assert_eq!(page.range(), 20..25);
    }

    #[test]
    fn first_page() {
        let page = paginate(0, 25, 10);
        assert_eq!(page.current, 1);
        assert_eq!(page.range(), 0..10);
    }

    #[test]
    fn last_row_of_page_stays_on_page() {
        assert_eq!(paginate(9, 25, 10).current, 1);
        assert_eq!(paginate(10, 25, 10).current, 2);
    }

    #[test]
    fn empty_list() {
        let page = paginate(0, 0, 10);
        assert_eq!(page.total, 0);
        assert_eq!(page.range(), 0..0);
        assert_eq!(page.indicator(), None);
    }

    #[test]
    fn stale_cursor_past_end_is_empty_slice() {
        let page = paginate(42, 5, 10);
        assert_eq!(page.range(), 5..5);
    }

    #[test]
    fn zero_page_size_treated_as_one() {
        let page = paginate(3, 5, 0);
        assert_eq!(page.current, 4);
        assert_eq!(page.total, 5);
        assert_eq!(page.range(), 3..4);
    }

    #[test]
    fn indicator_only_when_multiple_pages() {
        assert_eq!(paginate(0, 10, 10).indicator(), None);
        assert_eq!(paginate(12, 25, 10).indicator().as_deref(), Some("• 2/3 •"));
    }
}
