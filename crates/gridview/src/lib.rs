//! Gridview - In-memory tabular view engine.
//!
//! Gridview turns an ordered collection of rows and a list of columns into
//! what a data table displays. It supports:
//!
//! - Single-column sorting, toggled by header clicks
//! - Case-insensitive free-text filtering across every column
//! - Pagination with a fixed set of page sizes
//! - A pagination bar with ellipses and an entries line
//! - Nested inner tables with vertically merged cells
//!
//! # Quick Start
//!
//! ```rust
//! use gridview::{Column, DataTable, PageMarker, Value};
//!
//! struct Employee {
//!     name: String,
//!     division: &'static str,
//! }
//!
//! let staff: Vec<Employee> = (1..=20)
//!     .map(|i| Employee {
//!         name: format!("Staff {:02}", i),
//!         division: if i % 2 == 0 { "Finance" } else { "Audit" },
//!     })
//!     .collect();
//!
//! let mut table = DataTable::new(
//!     vec![
//!         Column::new("Full Name", |e: &Employee| Value::from(&e.name)),
//!         Column::new("Division", |e: &Employee| Value::from(e.division)),
//!     ],
//!     staff,
//! );
//!
//! table.on_filter_text_change("finance");
//! table.on_page_change(2);
//!
//! let view = table.view();
//! assert_eq!(view.total_filtered, 10);
//! assert_eq!(view.rows.len(), 2);
//! assert_eq!(view.navigation.markers, vec![PageMarker::Page(1), PageMarker::Page(2)]);
//! assert_eq!(view.navigation.entries.to_string(), "Showing 9 to 10 of 10 entries");
//! ```
//!
//! # Pipeline
//!
//! Every view is derived in a fixed order:
//!
//! ```text
//! data ─ sort(key, dir) ─ filter(text) ─ paginate(current, size) ─ window
//! ```
//!
//! [`derive`] computes a view from scratch. [`DataTable`] owns the state and
//! caches the sorted and filtered orders between views.
//!
//! # Value Semantics
//!
//! | Kind | Falsy | Sorts |
//! |------|-------|-------|
//! | Bool | `false` | first |
//! | Number | `0`, `NaN` | after bools; `NaN` last among numbers |
//! | String | `""` | after numbers, by code point |
//! | None | always | last |
//!
//! Falsy values never match the filter, not even the empty filter.

mod column;
mod error;
mod filter;
mod nested;
mod options;
mod ordering;
mod paginate;
mod sort;
mod state;
mod table;
mod value;
mod view;
mod window;

// Re-export public API
pub use column::{find_column, Align, CellColor, Column};
pub use error::{GridError, Result};
pub use filter::{filter_order, filter_rows, row_matches};
pub use nested::{project_nested, InnerCell, InnerHeader, NestedSpec, NestedTable, ProjectedCell};
pub use options::TableOptions;
pub use ordering::{compare_values, Dir};
pub use paginate::{paginate, total_pages, ItemsPerPage, PageState};
pub use sort::{sort_order, sort_rows, SortState};
pub use state::ViewState;
pub use table::DataTable;
pub use value::{Number, Value};
pub use view::{derive, Body, DerivedView, HeaderCell, Parity, RenderedCell, VisibleRow};
pub use window::{page_window, EntriesInfo, PageMarker, PageNavigation, PAGE_RANGE, VISIBLE_PAGES};
