//! Page number state with portion windowing.
//!
//! Page buttons are shown a "portion" at a time: with a portion size of 10,
//! portion 1 shows pages 1-10, portion 2 shows 11-20 and so on. The portion
//! can be moved independently of the current page, the same way the arrows of
//! a paginator scroll its buttons without loading anything.

use std::ops::RangeInclusive;

/// Default number of page buttons in one portion.
pub const DEFAULT_PORTION_SIZE: u32 = 10;

/// Current page, known page count and the visible portion of page buttons.
///
/// # Examples
///
/// ```
/// use character_browser::app::Pager;
///
/// let mut pager = Pager::new(10);
/// pager.set_page_count(42);
/// assert_eq!(pager.visible_pages(), 1..=10);
///
/// assert!(pager.go_to(17));
/// assert_eq!(pager.portion(), 2);
/// assert_eq!(pager.visible_pages(), 11..=20);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    current_page: u32,
    page_count: u32,
    portion: u32,
    portion_size: u32,
}

impl Pager {
    /// Creates a pager on page 1 with no known pages yet.
    ///
    /// A `portion_size` of zero is treated as one.
    #[must_use]
    pub fn new(portion_size: u32) -> Self {
        Self {
            current_page: 1,
            page_count: 0,
            portion: 1,
            portion_size: portion_size.max(1),
        }
    }

    #[must_use]
    pub const fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Total pages reported by the last successful fetch (0 before any).
    #[must_use]
    pub const fn page_count(&self) -> u32 {
        self.page_count
    }

    /// 1-based number of the visible portion.
    #[must_use]
    pub const fn portion(&self) -> u32 {
        self.portion
    }

    #[must_use]
    pub const fn portion_size(&self) -> u32 {
        self.portion_size
    }

    /// Number of portions needed to cover every page.
    #[must_use]
    pub const fn portion_total(&self) -> u32 {
        self.page_count.div_ceil(self.portion_size)
    }

    const fn portion_of(&self, page: u32) -> u32 {
        (page.saturating_sub(1) / self.portion_size) + 1
    }

    /// Page numbers shown in the current portion.
    ///
    /// Empty while the page count is unknown.
    #[must_use]
    pub fn visible_pages(&self) -> RangeInclusive<u32> {
        let left = (self.portion - 1) * self.portion_size + 1;
        let right = (self.portion * self.portion_size).min(self.page_count);
        left..=right
    }

    #[must_use]
    pub const fn has_prev_portion(&self) -> bool {
        self.portion > 1
    }

    #[must_use]
    pub const fn has_next_portion(&self) -> bool {
        self.portion < self.portion_total()
    }

    /// Shows the next portion of page buttons. Returns `false` at the end.
    pub fn next_portion(&mut self) -> bool {
        if !self.has_next_portion() {
            return false;
        }
        self.portion += 1;
        true
    }

    /// Shows the previous portion of page buttons. Returns `false` at the start.
    pub fn prev_portion(&mut self) -> bool {
        if !self.has_prev_portion() {
            return false;
        }
        self.portion -= 1;
        true
    }

    /// Moves to `page`, bringing its portion into view.
    ///
    /// Returns `true` only if the current page changed; pages outside
    /// `1..=page_count` are rejected.
    pub fn go_to(&mut self, page: u32) -> bool {
        if page == 0 || page > self.page_count || page == self.current_page {
            return false;
        }
        self.current_page = page;
        self.portion = self.portion_of(page);
        true
    }

    /// Moves to the `index`-th (0-based) page button of the visible portion.
    pub fn go_to_visible(&mut self, index: u32) -> bool {
        let visible = self.visible_pages();
        let page = visible.start().saturating_add(index);
        if !visible.contains(&page) {
            return false;
        }
        self.go_to(page)
    }

    pub fn next_page(&mut self) -> bool {
        self.go_to(self.current_page.saturating_add(1))
    }

    pub fn prev_page(&mut self) -> bool {
        self.go_to(self.current_page.saturating_sub(1))
    }

    /// Returns to page 1 and the first portion.
    ///
    /// Returns `true` if the current page changed.
    pub fn reset(&mut self) -> bool {
        let changed = self.current_page != 1;
        self.current_page = 1;
        self.portion = 1;
        changed
    }

    /// Records the page count from a fetch and clamps the portion into range.
    pub fn set_page_count(&mut self, pages: u32) {
        self.page_count = pages;
        let last_portion = self.portion_total().max(1);
        self.portion = self.portion.clamp(1, last_portion);
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(DEFAULT_PORTION_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pager_with(pages: u32) -> Pager {
        let mut pager = Pager::new(10);
        pager.set_page_count(pages);
        pager
    }

    #[test]
    fn starts_on_first_page_with_no_buttons() {
        let pager = Pager::default();
        assert_eq!(pager.current_page(), 1);
        assert_eq!(pager.page_count(), 0);
        assert!(pager.visible_pages().is_empty());
        assert!(!pager.has_next_portion());
        assert!(!pager.has_prev_portion());
    }

    #[test]
    fn last_portion_is_truncated_to_page_count() {
        let mut pager = pager_with(42);
        assert_eq!(pager.portion_total(), 5);
        while pager.next_portion() {}
        assert_eq!(pager.portion(), 5);
        assert_eq!(pager.visible_pages(), 41..=42);
        assert!(!pager.next_portion());
    }

    #[test]
    fn moving_portion_keeps_current_page() {
        let mut pager = pager_with(42);
        assert!(pager.next_portion());
        assert_eq!(pager.current_page(), 1);
        assert!(pager.prev_portion());
        assert!(!pager.prev_portion());
    }

    #[test]
    fn out_of_range_pages_are_rejected() {
        let mut pager = pager_with(3);
        assert!(!pager.go_to(0));
        assert!(!pager.go_to(4));
        assert!(!pager.go_to(1));
        assert!(pager.go_to(3));
        assert!(!pager.next_page());
        assert_eq!(pager.current_page(), 3);
    }

    #[test]
    fn crossing_a_portion_boundary_moves_the_portion() {
        let mut pager = pager_with(42);
        assert!(pager.go_to(10));
        assert!(pager.next_page());
        assert_eq!(pager.current_page(), 11);
        assert_eq!(pager.portion(), 2);
        assert!(pager.prev_page());
        assert_eq!(pager.portion(), 1);
    }

    #[test]
    fn visible_index_selects_within_portion() {
        let mut pager = pager_with(42);
        pager.next_portion();
        assert!(pager.go_to_visible(4));
        assert_eq!(pager.current_page(), 15);
        assert!(!pager.go_to_visible(10));
    }

    #[test]
    fn shrinking_page_count_clamps_portion() {
        let mut pager = pager_with(42);
        pager.go_to(35);
        pager.reset();
        pager.next_portion();
        pager.next_portion();
        pager.set_page_count(2);
        assert_eq!(pager.portion(), 1);
        assert_eq!(pager.visible_pages(), 1..=2);
    }

    #[test]
    fn reset_reports_whether_page_changed() {
        let mut pager = pager_with(5);
        assert!(!pager.reset());
        pager.go_to(4);
        assert!(pager.reset());
        assert_eq!(pager.current_page(), 1);
    }

    #[test]
    fn zero_portion_size_is_clamped() {
        let mut pager = Pager::new(0);
        pager.set_page_count(3);
        assert_eq!(pager.portion_size(), 1);
        assert_eq!(pager.visible_pages(), 1..=1);
    }
}
