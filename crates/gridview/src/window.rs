//! Page-window generation for pagination controls.
//!
//! The window always shows the first and last page, a radius of
//! [`PAGE_RANGE`] pages around the current one, and ellipses whose
//! thresholds come from [`VISIBLE_PAGES`]. The two constants are independent:
//!
//! ```text
//! [1] [...]? [max(c-2, 2) ..= min(c+2, n-1)] [...]? [n]
//!      c > 5                                  c < n - 5 + 1
//! ```
//!
//! With few pages this gives windows such as `1 ... 4 5 6 7` for page 6 of
//! 7, where the ellipsis stands in for pages 2 and 3 only.

use serde::Serialize;

use crate::paginate::{ItemsPerPage, PageState};

/// Pages shown on either side of the current page.
pub const PAGE_RANGE: usize = 2;

/// Threshold for the leading and trailing ellipsis.
pub const VISIBLE_PAGES: usize = 5;

/// One entry of the pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PageMarker {
    /// A page that can be selected.
    Page(usize),
    /// A gap of skipped pages.
    Ellipsis,
}

impl PageMarker {
    /// The page number, unless this is an ellipsis.
    pub fn page(self) -> Option<usize> {
        match self {
            PageMarker::Page(n) => Some(n),
            PageMarker::Ellipsis => None,
        }
    }
}

impl std::fmt::Display for PageMarker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PageMarker::Page(n) => write!(f, "{}", n),
            PageMarker::Ellipsis => f.write_str("..."),
        }
    }
}

/// Computes the pagination bar for page `current` of `total_pages`.
///
/// # Example
///
/// ```
/// use gridview::{page_window, PageMarker::{Ellipsis, Page}};
///
/// assert_eq!(
///     page_window(10, 12),
///     vec![Page(1), Ellipsis, Page(8), Page(9), Page(10), Page(11), Page(12)]
/// );
/// assert!(page_window(1, 0).is_empty());
/// ```
pub fn page_window(current: usize, total_pages: usize) -> Vec<PageMarker> {
    let mut markers = Vec::new();

    if total_pages >= 1 {
        markers.push(PageMarker::Page(1));
    }

    if current > VISIBLE_PAGES {
        markers.push(PageMarker::Ellipsis);
    }

    let low = current.saturating_sub(PAGE_RANGE).max(2);
    let high = current
        .saturating_add(PAGE_RANGE)
        .min(total_pages.saturating_sub(1));
    markers.extend((low..=high).map(PageMarker::Page));

    // current < total - VISIBLE + 1, kept free of underflow
    if current.saturating_add(VISIBLE_PAGES) < total_pages.saturating_add(1) {
        markers.push(PageMarker::Ellipsis);
    }

    if total_pages > 1 {
        markers.push(PageMarker::Page(total_pages));
    }

    markers
}

/// The "Showing start to end of total entries" figures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct EntriesInfo {
    /// 1-based index of the first entry on the page.
    pub start: usize,
    /// 1-based index of the last entry on the page.
    pub end: usize,
    /// Number of entries after filtering.
    pub total: usize,
}

impl EntriesInfo {
    /// Figures for page `current` of size `size` over `total` entries.
    ///
    /// All zero when there are no entries.
    pub fn new(current: usize, size: ItemsPerPage, total: usize) -> Self {
        if total == 0 {
            return EntriesInfo::default();
        }
        let size = size.get();
        EntriesInfo {
            start: current.saturating_sub(1).saturating_mul(size).saturating_add(1),
            end: current.saturating_mul(size).min(total),
            total,
        }
    }

    /// The entries line is only shown when something matched.
    pub fn is_displayed(&self) -> bool {
        self.total > 0
    }
}

impl std::fmt::Display for EntriesInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Showing {} to {} of {} entries",
            self.start, self.end, self.total
        )
    }
}

/// Everything a pagination control needs to draw itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageNavigation {
    /// Current page.
    pub current: usize,
    /// Number of pages after filtering.
    pub total_pages: usize,
    /// Page numbers and ellipses to show.
    pub markers: Vec<PageMarker>,
    /// Target of the "Prev" control.
    pub prev: usize,
    /// Target of the "Next" control.
    pub next: usize,
    /// Entry counts for the current page.
    pub entries: EntriesInfo,
}

impl PageNavigation {
    /// Navigation for `page` over `total_filtered` rows.
    pub fn new(page: &PageState, total_filtered: usize) -> Self {
        let total_pages = crate::paginate::total_pages(total_filtered, page.size);
        let current = page.current;
        PageNavigation {
            current,
            total_pages,
            markers: page_window(current, total_pages),
            prev: current.saturating_sub(1).max(1),
            next: current.saturating_add(1).min(total_pages.max(1)),
            entries: EntriesInfo::new(current, page.size, total_filtered),
        }
    }

    /// Returns `true` if `page` is the current page.
    pub fn is_current(&self, page: usize) -> bool {
        self.current == page
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageMarker::{Ellipsis, Page};

    #[test]
    fn empty_table_has_no_window() {
        assert!(page_window(1, 0).is_empty());
        assert!(page_window(5, 0).is_empty());
    }

    #[test]
    fn stale_page_on_empty_table_keeps_leading_ellipsis() {
        assert_eq!(page_window(9, 0), vec![Ellipsis]);
        assert_eq!(page_window(6, 0), vec![Ellipsis]);
    }

    #[test]
    fn single_page() {
        assert_eq!(page_window(1, 1), vec![Page(1)]);
    }

    #[test]
    fn two_pages() {
        assert_eq!(page_window(1, 2), vec![Page(1), Page(2)]);
        assert_eq!(page_window(2, 2), vec![Page(1), Page(2)]);
    }

    #[test]
    fn trailing_ellipsis_only_near_start() {
        assert_eq!(
            page_window(1, 12),
            vec![Page(1), Page(2), Page(3), Ellipsis, Page(12)]
        );
        assert_eq!(
            page_window(5, 12),
            vec![Page(1), Page(3), Page(4), Page(5), Page(6), Page(7), Ellipsis, Page(12)]
        );
    }

    #[test]
    fn leading_ellipsis_past_visible_pages() {
        assert_eq!(
            page_window(10, 12),
            vec![Page(1), Ellipsis, Page(8), Page(9), Page(10), Page(11), Page(12)]
        );
        assert_eq!(
            page_window(6, 12),
            vec![
                Page(1),
                Ellipsis,
                Page(4),
                Page(5),
                Page(6),
                Page(7),
                Page(8),
                Ellipsis,
                Page(12)
            ]
        );
    }

    #[test]
    fn asymmetric_thresholds_with_few_pages() {
        // Page 7 of 7 shows an ellipsis although only pages 2..=4 are skipped
        assert_eq!(page_window(7, 7), vec![Page(1), Ellipsis, Page(5), Page(6), Page(7)]);
        // Page 3 of 7 has no trailing ellipsis: 3 < 7 - 5 + 1 is false
        assert_eq!(
            page_window(3, 7),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Page(7)]
        );
        // Page 2 of 7 does: 2 < 3
        assert_eq!(
            page_window(2, 7),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(7)]
        );
    }

    #[test]
    fn current_past_the_end_still_bounded() {
        let window = page_window(20, 3);
        assert_eq!(window, vec![Page(1), Ellipsis, Page(3)]);
    }

    #[test]
    fn marker_display() {
        assert_eq!(Page(4).to_string(), "4");
        assert_eq!(Ellipsis.to_string(), "...");
        assert_eq!(Page(4).page(), Some(4));
        assert_eq!(Ellipsis.page(), None);
    }

    #[test]
    fn entries_info_figures() {
        let info = EntriesInfo::new(1, ItemsPerPage::Eight, 10);
        assert_eq!(info, EntriesInfo { start: 1, end: 8, total: 10 });
        assert_eq!(info.to_string(), "Showing 1 to 8 of 10 entries");

        let last = EntriesInfo::new(2, ItemsPerPage::Eight, 10);
        assert_eq!(last, EntriesInfo { start: 9, end: 10, total: 10 });

        let empty = EntriesInfo::new(1, ItemsPerPage::Eight, 0);
        assert_eq!(empty, EntriesInfo::default());
        assert!(!empty.is_displayed());
    }

    #[test]
    fn navigation_targets_are_clamped() {
        let nav = PageNavigation::new(&PageState::default(), 10);
        assert_eq!(nav.total_pages, 2);
        assert_eq!(nav.prev, 1);
        assert_eq!(nav.next, 2);
        assert!(nav.is_current(1));

        let last = PageNavigation::new(&PageState::default().with_current(2), 10);
        assert_eq!(last.next, 2);
        assert_eq!(last.prev, 1);

        let empty = PageNavigation::new(&PageState::default(), 0);
        assert_eq!(empty.total_pages, 0);
        assert_eq!(empty.next, 1);
        assert!(empty.markers.is_empty());
    }
}
