//! Nested-row projection: an inner table per row, with vertical cell merges.
//!
//! The producer of the inner rows decides the merges. For a column flagged
//! with [`Column::row_span`], each inner row reports a count: `N > 0` starts
//! a merged cell spanning `N` rows, `0` means the row sits under an earlier
//! merge and gets no cell in that column. The projector does no grouping of
//! its own.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::column::{Align, Column};

type InnerRowsFn<R, I> = Arc<dyn Fn(&R) -> Option<&[I]> + Send + Sync>;
type RowSpanFn<I> = Arc<dyn Fn(&I) -> usize + Send + Sync>;

/// A rendered inner cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectedCell {
    /// Cell text.
    pub text: String,
    /// Alignment from the inner column.
    pub align: Align,
    /// Background colour from the inner column.
    pub bg_color: Option<String>,
    /// Number of inner rows this cell covers, for merged cells.
    pub row_span: Option<usize>,
}

/// One position of an inner row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum InnerCell {
    /// A cell to draw.
    Cell(ProjectedCell),
    /// Covered by a merged cell from an earlier row; draw nothing.
    Absorbed,
}

impl InnerCell {
    /// The cell, unless absorbed.
    pub fn as_cell(&self) -> Option<&ProjectedCell> {
        match self {
            InnerCell::Cell(cell) => Some(cell),
            InnerCell::Absorbed => None,
        }
    }

    /// Returns `true` for an absorbed position.
    pub fn is_absorbed(&self) -> bool {
        matches!(self, InnerCell::Absorbed)
    }
}

/// Header of an inner column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InnerHeader {
    /// Column label.
    pub name: String,
    /// Alignment.
    pub align: Align,
    /// Preferred width.
    pub width: Option<usize>,
}

/// The projected inner table of one row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NestedTable {
    /// Inner column headers.
    pub headers: Vec<InnerHeader>,
    /// One entry per inner row, one cell position per inner column.
    pub rows: Vec<Vec<InnerCell>>,
}

/// Projects inner rows through inner columns.
///
/// `row_span` reports the merge count of an inner row; pass `None` when the
/// inner rows carry no merges, and row-span columns render as plain cells.
pub fn project_nested<I>(
    inner_rows: &[I],
    columns: &[Column<I>],
    row_span: Option<&dyn Fn(&I) -> usize>,
) -> NestedTable {
    let headers = columns
        .iter()
        .map(|c| InnerHeader {
            name: c.name().to_string(),
            align: c.get_align(),
            width: c.get_width(),
        })
        .collect();

    let rows = inner_rows
        .iter()
        .map(|inner| {
            let span = row_span.map(|f| f(inner));
            columns
                .iter()
                .map(|column| {
                    let merged = match span {
                        Some(0) if column.is_row_span() => return InnerCell::Absorbed,
                        Some(n) if column.is_row_span() => Some(n),
                        _ => None,
                    };
                    InnerCell::Cell(ProjectedCell {
                        text: column.value(inner).to_text().into_owned(),
                        align: column.get_align(),
                        bg_color: column.background(inner),
                        row_span: merged,
                    })
                })
                .collect()
        })
        .collect();

    NestedTable { headers, rows }
}

/// How to find and project the inner rows of an outer row.
///
/// # Example
///
/// ```
/// use gridview::{Column, InnerCell, NestedSpec, Value};
///
/// struct Session { trainer: &'static str, topic: &'static str, span: usize }
/// struct Course { sessions: Vec<Session> }
///
/// let spec = NestedSpec::new(
///     vec![
///         Column::new("Trainer", |s: &Session| Value::from(s.trainer)).row_span(true),
///         Column::new("Topic", |s: &Session| Value::from(s.topic)),
///     ],
///     |c: &Course| Some(c.sessions.as_slice()),
/// )
/// .with_row_span(|s: &Session| s.span);
///
/// let course = Course {
///     sessions: vec![
///         Session { trainer: "Nair", topic: "Safety", span: 2 },
///         Session { trainer: "Nair", topic: "Audit", span: 0 },
///     ],
/// };
///
/// let table = spec.project(&course).unwrap();
/// assert_eq!(table.rows[0][0].as_cell().unwrap().row_span, Some(2));
/// assert_eq!(table.rows[1][0], InnerCell::Absorbed);
/// ```
pub struct NestedSpec<R, I> {
    columns: Vec<Column<I>>,
    rows: InnerRowsFn<R, I>,
    row_span: Option<RowSpanFn<I>>,
}

impl<R, I> NestedSpec<R, I> {
    /// Inner columns plus an accessor returning a row's inner rows, if any.
    pub fn new<F>(columns: Vec<Column<I>>, rows: F) -> Self
    where
        F: Fn(&R) -> Option<&[I]> + Send + Sync + 'static,
    {
        NestedSpec {
            columns,
            rows: Arc::new(rows),
            row_span: None,
        }
    }

    /// Sets the merge count accessor for inner rows.
    pub fn with_row_span<S>(mut self, row_span: S) -> Self
    where
        S: Fn(&I) -> usize + Send + Sync + 'static,
    {
        self.row_span = Some(Arc::new(row_span));
        self
    }

    /// The inner columns.
    pub fn columns(&self) -> &[Column<I>] {
        &self.columns
    }

    /// Projects the inner table of `row`, or `None` if it has no inner rows.
    pub fn project(&self, row: &R) -> Option<NestedTable> {
        let inner = (self.rows)(row)?;
        let span: Option<&dyn Fn(&I) -> usize> = match &self.row_span {
            Some(f) => Some(f.as_ref()),
            None => None,
        };
        Some(project_nested(inner, &self.columns, span))
    }
}

impl<R, I> Clone for NestedSpec<R, I> {
    fn clone(&self) -> Self {
        NestedSpec {
            columns: self.columns.clone(),
            rows: Arc::clone(&self.rows),
            row_span: self.row_span.clone(),
        }
    }
}

impl<R, I> fmt::Debug for NestedSpec<R, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NestedSpec")
            .field("columns", &self.columns)
            .field("row_span", &self.row_span.is_some())
            .finish_non_exhaustive()
    }
}
