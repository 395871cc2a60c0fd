//! View state and its transitions.

use serde::{Deserialize, Serialize};

use crate::paginate::{ItemsPerPage, PageState};
use crate::sort::SortState;

/// The transient state of a table view: sort, filter text and page.
///
/// State is an immutable record. Each user event maps to a method that
/// returns the next state; the derived view is recomputed from it.
///
/// # Example
///
/// ```
/// use gridview::{Dir, ItemsPerPage, ViewState};
///
/// let state = ViewState::default()
///     .header_clicked("Name")
///     .page_changed(3)
///     .filter_changed("kumar");
///
/// assert_eq!(state.sort.dir, Dir::Asc);
/// assert_eq!(state.page.current, 1);
/// assert_eq!(state.page.size, ItemsPerPage::Eight);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewState {
    /// Sort column and direction.
    pub sort: SortState,
    /// Free-text filter.
    pub filter: String,
    /// Current page and page size.
    pub page: PageState,
}

impl ViewState {
    /// Unsorted, unfiltered, first page of `size` rows.
    pub fn new(size: ItemsPerPage) -> Self {
        ViewState {
            page: PageState::new(size),
            ..ViewState::default()
        }
    }

    /// A header was clicked. Filter and page are left alone.
    pub fn header_clicked(&self, column: &str) -> ViewState {
        ViewState {
            sort: self.sort.clicked(column),
            ..self.clone()
        }
    }

    /// The filter text changed; a different text returns to page 1.
    pub fn filter_changed(&self, text: impl Into<String>) -> ViewState {
        let text = text.into();
        if text == self.filter {
            return self.clone();
        }
        ViewState {
            sort: self.sort.clone(),
            filter: text,
            page: self.page.with_current(1),
        }
    }

    /// A page was selected. Nothing else changes.
    pub fn page_changed(&self, page: usize) -> ViewState {
        ViewState {
            page: self.page.with_current(page),
            ..self.clone()
        }
    }

    /// The page size changed; always returns to page 1.
    pub fn items_per_page_changed(&self, size: ItemsPerPage) -> ViewState {
        ViewState {
            page: self.page.with_size(size),
            ..self.clone()
        }
    }
}
