//! Column schema: label, selector and presentation hints.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::value::Value;

type Selector<R> = Arc<dyn Fn(&R) -> Value<'_> + Send + Sync>;
type ColorFn<R> = Arc<dyn Fn(&R) -> Option<String> + Send + Sync>;

/// Horizontal alignment of a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Align to the start of the cell (pad at the end).
    #[default]
    Start,
    /// Center within the cell.
    Center,
    /// Align to the end of the cell (pad at the start).
    End,
}

/// Background colour for the cells of a column.
pub enum CellColor<R> {
    /// Same colour for every row.
    Fixed(String),
    /// Colour computed from the row; `None` leaves the cell undecorated.
    Computed(ColorFn<R>),
}

impl<R> CellColor<R> {
    /// Resolves the colour for one row.
    pub fn resolve(&self, row: &R) -> Option<String> {
        match self {
            CellColor::Fixed(color) => Some(color.clone()),
            CellColor::Computed(f) => f(row),
        }
    }
}

impl<R> Clone for CellColor<R> {
    fn clone(&self) -> Self {
        match self {
            CellColor::Fixed(color) => CellColor::Fixed(color.clone()),
            CellColor::Computed(f) => CellColor::Computed(Arc::clone(f)),
        }
    }
}

impl<R> fmt::Debug for CellColor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellColor::Fixed(color) => f.debug_tuple("Fixed").field(color).finish(),
            CellColor::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// One column of a table over rows of type `R`.
///
/// The `name` is both the header label and the column's identity: sort state
/// refers to columns by name, so names should be unique within a table.
///
/// # Example
///
/// ```
/// use gridview::{Align, Column, Value};
///
/// struct Employee {
///     pis_no: u32,
///     name: String,
/// }
///
/// let columns = vec![
///     Column::new("PIS No", |e: &Employee| Value::from(e.pis_no)).align(Align::Center),
///     Column::new("Full Name", |e: &Employee| Value::from(&e.name)).width(24),
/// ];
///
/// let e = Employee { pis_no: 1042, name: "Ravi Kumar".into() };
/// assert_eq!(columns[0].value(&e).to_text(), "1042");
/// assert_eq!(columns[1].name(), "Full Name");
/// ```
pub struct Column<R> {
    name: String,
    selector: Selector<R>,
    sortable: bool,
    align: Align,
    width: Option<usize>,
    bg_color: Option<CellColor<R>>,
    row_span: bool,
}

impl<R> Column<R> {
    /// Creates a column with the given label and selector.
    pub fn new<F>(name: impl Into<String>, selector: F) -> Self
    where
        F: Fn(&R) -> Value<'_> + Send + Sync + 'static,
    {
        Column {
            name: name.into(),
            selector: Arc::new(selector),
            sortable: true,
            align: Align::Start,
            width: None,
            bg_color: None,
            row_span: false,
        }
    }

    /// Marks the column as sortable or not.
    ///
    /// This is a presentation hint only; a header click sorts any column.
    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Sets the cell alignment.
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Sets a preferred width in display columns.
    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Sets a fixed background colour for every cell of the column.
    pub fn bg_color(mut self, color: impl Into<String>) -> Self {
        self.bg_color = Some(CellColor::Fixed(color.into()));
        self
    }

    /// Sets a per-row background colour.
    pub fn bg_color_with<F>(mut self, color: F) -> Self
    where
        F: Fn(&R) -> Option<String> + Send + Sync + 'static,
    {
        self.bg_color = Some(CellColor::Computed(Arc::new(color)));
        self
    }

    /// Lets cells of this column merge vertically in a nested table.
    pub fn row_span(mut self, row_span: bool) -> Self {
        self.row_span = row_span;
        self
    }

    /// The column label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Extracts this column's value from a row.
    pub fn value<'r>(&self, row: &'r R) -> Value<'r> {
        (self.selector)(row)
    }

    /// Background colour of this column's cell for a row.
    pub fn background(&self, row: &R) -> Option<String> {
        self.bg_color.as_ref().and_then(|c| c.resolve(row))
    }

    /// Whether the column is flagged sortable.
    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    /// Get the cell alignment.
    pub fn get_align(&self) -> Align {
        self.align
    }

    /// Get the preferred width.
    pub fn get_width(&self) -> Option<usize> {
        self.width
    }

    /// Whether cells of this column merge across inner rows.
    pub fn is_row_span(&self) -> bool {
        self.row_span
    }
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        Column {
            name: self.name.clone(),
            selector: Arc::clone(&self.selector),
            sortable: self.sortable,
            align: self.align,
            width: self.width,
            bg_color: self.bg_color.clone(),
            row_span: self.row_span,
        }
    }
}

impl<R> fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("name", &self.name)
            .field("sortable", &self.sortable)
            .field("align", &self.align)
            .field("width", &self.width)
            .field("bg_color", &self.bg_color)
            .field("row_span", &self.row_span)
            .finish_non_exhaustive()
    }
}

/// Finds a column by name.
pub fn find_column<'c, R>(columns: &'c [Column<R>], name: &str) -> Option<&'c Column<R>> {
    columns.iter().find(|c| c.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Shift {
        label: &'static str,
        hours: u32,
    }

    fn shift() -> Shift {
        Shift {
            label: "Night",
            hours: 8,
        }
    }

    #[test]
    fn column_defaults() {
        let col = Column::new("Label", |s: &Shift| Value::from(s.label));
        assert_eq!(col.name(), "Label");
        assert!(col.is_sortable());
        assert_eq!(col.get_align(), Align::Start);
        assert_eq!(col.get_width(), None);
        assert!(!col.is_row_span());
        assert_eq!(col.background(&shift()), None);
    }

    #[test]
    fn column_builder_chain() {
        let col = Column::new("Hours", |s: &Shift| Value::from(s.hours))
            .sortable(false)
            .align(Align::End)
            .width(6)
            .row_span(true);

        assert!(!col.is_sortable());
        assert_eq!(col.get_align(), Align::End);
        assert_eq!(col.get_width(), Some(6));
        assert!(col.is_row_span());
        assert_eq!(col.value(&shift()).to_text(), "8");
    }

    #[test]
    fn fixed_and_computed_backgrounds() {
        let fixed = Column::new("Label", |s: &Shift| Value::from(s.label)).bg_color("#eef");
        assert_eq!(fixed.background(&shift()).as_deref(), Some("#eef"));

        let computed = Column::new("Hours", |s: &Shift| Value::from(s.hours))
            .bg_color_with(|s: &Shift| (s.hours > 6).then(|| "#fdd".to_string()));
        assert_eq!(computed.background(&shift()).as_deref(), Some("#fdd"));
    }

    #[test]
    fn clone_shares_selector() {
        let col = Column::new("Label", |s: &Shift| Value::from(s.label));
        let copy = col.clone();
        assert_eq!(copy.value(&shift()), col.value(&shift()));
    }

    #[test]
    fn find_column_by_name() {
        let columns = vec![
            Column::new("Label", |s: &Shift| Value::from(s.label)),
            Column::new("Hours", |s: &Shift| Value::from(s.hours)),
        ];
        assert_eq!(find_column(&columns, "Hours").map(|c| c.name()), Some("Hours"));
        assert!(find_column(&columns, "Missing").is_none());
    }

    #[test]
    fn align_serde_names() {
        assert_eq!(serde_json::to_string(&Align::Center).unwrap(), "\"center\"");
        let parsed: Align = serde_json::from_str("\"end\"").unwrap();
        assert_eq!(parsed, Align::End);
    }
}
