//! Incremental "load more" pagination over a filtered sequence.

use serde::{Deserialize, Serialize};

/// How many items are currently revealed, and the step used to reveal more.
///
/// `visible_count` starts at `page_size`, grows by `page_size` on each
/// [`load_more`](Self::load_more), and snaps back on [`reset`](Self::reset).
/// There is no upper cap; slicing truncates naturally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationState {
    visible_count: usize,
    page_size: usize,
}

impl PaginationState {
    /// Creates a window showing one page. A zero page size is bumped to 1.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            visible_count: page_size,
            page_size,
        }
    }

    #[must_use]
    pub const fn visible_count(&self) -> usize {
        self.visible_count
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Reveals one more page.
    pub fn load_more(&mut self) {
        self.visible_count = self.visible_count.saturating_add(self.page_size);
    }

    /// Returns to a single page.
    pub fn reset(&mut self) {
        self.visible_count = self.page_size;
    }
}

/// Result of slicing a sequence to the visible window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSlice<'a, T> {
    pub displayed: &'a [T],
    pub has_more: bool,
}

/// Takes the first `visible_count` items, preserving order.
///
/// ```
/// use brandfolio::content::slice;
///
/// let items = [1, 2, 3, 4, 5, 6];
/// let page = slice(&items, 4);
/// assert_eq!(page.displayed, &[1, 2, 3, 4]);
/// assert!(page.has_more);
///
/// let page = slice(&items, 8);
/// assert_eq!(page.displayed.len(), 6);
/// assert!(!page.has_more);
/// ```
#[must_use]
pub fn slice<T>(items: &[T], visible_count: usize) -> PageSlice<'_, T> {
    let end = visible_count.min(items.len());
    PageSlice {
        displayed: &items[..end],
        has_more: items.len() > visible_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_more_grows_by_page_size() {
        let mut state = PaginationState::new(4);
        let items: Vec<u32> = (0..10).collect();

        let mut previous = state.visible_count();
        for _ in 0..5 {
            state.load_more();
            assert_eq!(state.visible_count(), previous + 4);
            previous = state.visible_count();
            assert!(slice(&items, state.visible_count()).displayed.len() <= items.len());
        }
    }

    #[test]
    fn reset_returns_to_page_size() {
        let mut state = PaginationState::new(6);
        state.load_more();
        state.load_more();
        assert_eq!(state.visible_count(), 18);
        state.reset();
        assert_eq!(state.visible_count(), 6);
    }

    #[test]
    fn zero_page_size_is_clamped() {
        let state = PaginationState::new(0);
        assert_eq!(state.visible_count(), 1);
        assert_eq!(state.page_size(), 1);
    }

    #[test]
    fn exact_fit_has_no_more() {
        let items = [1, 2, 3, 4];
        let page = slice(&items, 4);
        assert_eq!(page.displayed.len(), 4);
        assert!(!page.has_more);
    }

    #[test]
    fn empty_input() {
        let items: [u8; 0] = [];
        let page = slice(&items, 6);
        assert!(page.displayed.is_empty());
        assert!(!page.has_more);
    }
}
