//! Error types for the gridview crate.
//!
//! The view engine itself never fails: sorting, filtering, paging and
//! window generation are total over their inputs. Errors only arise at the
//! configuration boundary.

use thiserror::Error;

/// Errors that can occur when configuring a table.
#[derive(Debug, Error)]
pub enum GridError {
    /// Page size outside the selectable set.
    #[error("unsupported page size {0}; expected one of 8, 10, 20, 30, 40, 50, 100, 500")]
    UnsupportedPageSize(usize),

    /// Table options could not be parsed.
    #[error("invalid table options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}

/// Result type for gridview operations.
pub type Result<T> = std::result::Result<T, GridError>;
