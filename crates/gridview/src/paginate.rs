//! Paginator: page size choices, page state and slicing.

use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};

/// Selectable number of rows per page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum ItemsPerPage {
    /// 8 rows.
    #[default]
    Eight,
    /// 10 rows.
    Ten,
    /// 20 rows.
    Twenty,
    /// 30 rows.
    Thirty,
    /// 40 rows.
    Forty,
    /// 50 rows.
    Fifty,
    /// 100 rows.
    Hundred,
    /// 500 rows.
    FiveHundred,
}

impl ItemsPerPage {
    /// Every selectable size, smallest first.
    pub const ALL: [ItemsPerPage; 8] = [
        ItemsPerPage::Eight,
        ItemsPerPage::Ten,
        ItemsPerPage::Twenty,
        ItemsPerPage::Thirty,
        ItemsPerPage::Forty,
        ItemsPerPage::Fifty,
        ItemsPerPage::Hundred,
        ItemsPerPage::FiveHundred,
    ];

    /// Number of rows per page.
    pub fn get(self) -> usize {
        match self {
            ItemsPerPage::Eight => 8,
            ItemsPerPage::Ten => 10,
            ItemsPerPage::Twenty => 20,
            ItemsPerPage::Thirty => 30,
            ItemsPerPage::Forty => 40,
            ItemsPerPage::Fifty => 50,
            ItemsPerPage::Hundred => 100,
            ItemsPerPage::FiveHundred => 500,
        }
    }
}

impl TryFrom<usize> for ItemsPerPage {
    type Error = GridError;

    fn try_from(n: usize) -> Result<Self> {
        ItemsPerPage::ALL
            .into_iter()
            .find(|size| size.get() == n)
            .ok_or(GridError::UnsupportedPageSize(n))
    }
}

impl From<ItemsPerPage> for usize {
    fn from(size: ItemsPerPage) -> usize {
        size.get()
    }
}

impl std::fmt::Display for ItemsPerPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Current page (1-based) and page size.
///
/// `current` is never clamped against the number of pages here: a page past
/// the end simply slices to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageState {
    /// Current page, starting at 1.
    pub current: usize,
    /// Rows per page.
    pub size: ItemsPerPage,
}

impl Default for PageState {
    fn default() -> Self {
        PageState {
            current: 1,
            size: ItemsPerPage::default(),
        }
    }
}

impl PageState {
    /// Page 1 with the given size.
    pub fn new(size: ItemsPerPage) -> Self {
        PageState { current: 1, size }
    }

    /// Same size, another page. Page `0` becomes page 1.
    pub fn with_current(self, page: usize) -> Self {
        PageState {
            current: page.max(1),
            ..self
        }
    }

    /// Another size; always resets to page 1.
    pub fn with_size(self, size: ItemsPerPage) -> Self {
        PageState::new(size)
    }

    /// Index range of this page within a sequence of `len` items.
    pub fn range(&self, len: usize) -> std::ops::Range<usize> {
        let size = self.size.get();
        let start = self.current.saturating_sub(1).saturating_mul(size).min(len);
        let end = start.saturating_add(size).min(len);
        start..end
    }
}

/// Number of pages needed for `len` items; zero for an empty sequence.
pub fn total_pages(len: usize, size: ItemsPerPage) -> usize {
    len.div_ceil(size.get())
}

/// The items on the current page.
///
/// Returns an empty slice when `page.current` is past the last page.
pub fn paginate<'s, T>(items: &'s [T], page: &PageState) -> &'s [T] {
    &items[page.range(items.len())]
}
