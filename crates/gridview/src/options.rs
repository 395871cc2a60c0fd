//! Table configuration.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::ordering::Dir;
use crate::paginate::ItemsPerPage;
use crate::sort::SortState;
use crate::state::ViewState;

/// Initial settings of a table.
///
/// Every field has a default, so partial documents are accepted:
///
/// ```
/// use gridview::{Dir, ItemsPerPage, TableOptions};
///
/// let options = TableOptions::from_json(r#"{ "items_per_page": 20, "sort_column": "Division" }"#)?;
/// assert_eq!(options.items_per_page, ItemsPerPage::Twenty);
/// assert_eq!(options.sort_dir, Dir::Asc);
/// # Ok::<(), gridview::GridError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableOptions {
    /// Rows per page; one of the selectable sizes.
    pub items_per_page: ItemsPerPage,
    /// Column to sort by initially.
    pub sort_column: Option<String>,
    /// Initial sort direction, used with `sort_column`.
    pub sort_dir: Dir,
}

impl TableOptions {
    /// Parses options from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The view state these options start from.
    pub fn initial_state(&self) -> ViewState {
        let mut state = ViewState::new(self.items_per_page);
        if let Some(column) = &self.sort_column {
            state.sort = SortState::by(column.clone(), self.sort_dir);
        }
        state
    }
}
