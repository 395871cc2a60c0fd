//! The derived view: what a table shows for a given state.

use serde::Serialize;

use crate::column::{Align, CellColor, Column};
use crate::filter::filter_order;
use crate::nested::{NestedSpec, NestedTable};
use crate::ordering::Dir;
use crate::paginate::{paginate, ItemsPerPage};
use crate::sort::sort_order;
use crate::state::ViewState;
use crate::window::PageNavigation;

/// A column header as displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderCell<'a> {
    /// Column label.
    pub name: &'a str,
    /// Alignment.
    pub align: Align,
    /// Preferred width.
    pub width: Option<usize>,
    /// Whether the column is flagged sortable.
    pub sortable: bool,
    /// Sort direction, if this is the sorted column.
    pub sort: Option<Dir>,
}

/// A body cell as displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedCell {
    /// Cell text.
    pub text: String,
    /// Alignment.
    pub align: Align,
    /// Preferred width.
    pub width: Option<usize>,
    /// Background colour.
    pub bg_color: Option<String>,
}

/// Row striping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Parity {
    /// First, third, ... row of the page.
    Even,
    /// Second, fourth, ... row of the page.
    Odd,
}

/// A row on the current page.
#[derive(Debug, Clone)]
pub struct VisibleRow<'a, R> {
    /// The source row.
    pub row: &'a R,
    /// 0-based position on the page.
    pub position: usize,
    /// Striping class.
    pub parity: Parity,
    /// One cell per column.
    pub cells: Vec<RenderedCell>,
    /// Background colour of the whole row.
    pub bg_color: Option<String>,
    /// Inner table, for rows with nested data.
    pub nested: Option<NestedTable>,
}

/// What the table body shows.
#[derive(Debug)]
pub enum Body<'v, 'a, R> {
    /// Rows of the current page.
    Rows(&'v [VisibleRow<'a, R>]),
    /// Nothing to show, either because there is no data or because nothing
    /// matched the filter. The two cases are not distinguished.
    NoRecords,
}

impl<R> Clone for Body<'_, '_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Body<'_, '_, R> {}

/// The derived view of a table.
#[derive(Debug, Clone)]
pub struct DerivedView<'a, R> {
    /// Column headers.
    pub headers: Vec<HeaderCell<'a>>,
    /// Rows of the current page, after sorting and filtering.
    pub rows: Vec<VisibleRow<'a, R>>,
    /// Pagination controls.
    pub navigation: PageNavigation,
    /// Number of rows that passed the filter.
    pub total_filtered: usize,
    /// The state this view was derived from.
    pub state: ViewState,
}

impl<'a, R> DerivedView<'a, R> {
    /// The body: the visible rows, or the "no records" sentinel.
    pub fn body(&self) -> Body<'_, 'a, R> {
        if self.rows.is_empty() {
            Body::NoRecords
        } else {
            Body::Rows(&self.rows)
        }
    }

    /// The source rows on the current page.
    pub fn visible_rows(&self) -> Vec<&'a R> {
        self.rows.iter().map(|r| r.row).collect()
    }

    /// Current page size.
    pub fn page_size(&self) -> ItemsPerPage {
        self.state.page.size
    }

    /// The page sizes a size selector offers.
    pub fn available_items_per_page(&self) -> &'static [ItemsPerPage] {
        &ItemsPerPage::ALL
    }
}

/// Optional per-row decoration applied to the visible rows.
pub(crate) struct Decor<'d, R, I> {
    pub(crate) nested: Option<&'d NestedSpec<R, I>>,
    pub(crate) row_color: Option<&'d CellColor<R>>,
}

impl<R, I> Default for Decor<'_, R, I> {
    fn default() -> Self {
        Decor {
            nested: None,
            row_color: None,
        }
    }
}

/// Builds the view from the filtered row order.
pub(crate) fn assemble<'a, R, I>(
    rows: &'a [R],
    columns: &'a [Column<R>],
    filtered: &[usize],
    state: &ViewState,
    decor: Decor<'_, R, I>,
) -> DerivedView<'a, R> {
    let headers = columns
        .iter()
        .map(|c| HeaderCell {
            name: c.name(),
            align: c.get_align(),
            width: c.get_width(),
            sortable: c.is_sortable(),
            sort: state.sort.direction_of(c.name()),
        })
        .collect();

    let visible = paginate(filtered, &state.page)
        .iter()
        .enumerate()
        .map(|(position, &index)| {
            let row = &rows[index];
            VisibleRow {
                row,
                position,
                parity: if position % 2 == 0 {
                    Parity::Even
                } else {
                    Parity::Odd
                },
                cells: columns
                    .iter()
                    .map(|c| RenderedCell {
                        text: c.value(row).to_text().into_owned(),
                        align: c.get_align(),
                        width: c.get_width(),
                        bg_color: c.background(row),
                    })
                    .collect(),
                bg_color: decor.row_color.and_then(|color| color.resolve(row)),
                nested: decor.nested.and_then(|spec| spec.project(row)),
            }
        })
        .collect();

    DerivedView {
        headers,
        rows: visible,
        navigation: PageNavigation::new(&state.page, filtered.len()),
        total_filtered: filtered.len(),
        state: state.clone(),
    }
}

/// Derives the view of `rows` for `state`, from scratch.
///
/// Rows are sorted, then filtered, then paginated. This is a pure function of
/// its inputs; [`DataTable`](crate::DataTable) wraps it with caching.
///
/// # Example
///
/// ```
/// use gridview::{derive, Column, ViewState, Value};
///
/// let rows: Vec<String> = ('A'..='J').map(String::from).collect();
/// let columns = vec![Column::new("Name", |r: &String| Value::from(r))];
///
/// let view = derive(&rows, &columns, &ViewState::default());
/// assert_eq!(view.rows.len(), 8);
/// assert_eq!(view.navigation.entries.to_string(), "Showing 1 to 8 of 10 entries");
/// ```
pub fn derive<'a, R>(
    rows: &'a [R],
    columns: &'a [Column<R>],
    state: &ViewState,
) -> DerivedView<'a, R> {
    let sorted = sort_order(rows, columns, &state.sort);
    let filtered = filter_order(rows, &sorted, columns, &state.filter);
    assemble::<R, ()>(rows, columns, &filtered, state, Decor::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    fn letters(n: usize) -> Vec<String> {
        ('A'..='Z').take(n).map(String::from).collect()
    }

    fn columns() -> Vec<Column<String>> {
        vec![Column::new("Name", |r: &String| Value::from(r)).align(Align::Center)]
    }

    #[test]
    fn headers_reflect_sort_state() {
        let rows = letters(3);
        let cols = columns();
        let state = ViewState::default().header_clicked("Name");
        let view = derive(&rows, &cols, &state);

        assert_eq!(view.headers.len(), 1);
        assert_eq!(view.headers[0].name, "Name");
        assert_eq!(view.headers[0].sort, Some(Dir::Asc));
        assert_eq!(view.headers[0].align, Align::Center);
    }

    #[test]
    fn rows_are_striped_by_page_position() {
        let rows = letters(10);
        let cols = columns();
        let view = derive(&rows, &cols, &ViewState::default().page_changed(2));

        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.rows[0].position, 0);
        assert_eq!(view.rows[0].parity, Parity::Even);
        assert_eq!(view.rows[1].parity, Parity::Odd);
        assert_eq!(view.rows[1].cells[0].text, "J");
    }

    #[test]
    fn empty_result_is_no_records() {
        let rows = letters(5);
        let cols = columns();
        let view = derive(&rows, &cols, &ViewState::default().filter_changed("zzz"));

        assert!(matches!(view.body(), Body::NoRecords));
        assert_eq!(view.total_filtered, 0);
        assert!(view.navigation.markers.is_empty());
    }

    #[test]
    fn page_past_end_is_no_records_but_keeps_totals() {
        let rows = letters(10);
        let cols = columns();
        let view = derive(&rows, &cols, &ViewState::default().page_changed(5));

        assert!(matches!(view.body(), Body::NoRecords));
        assert_eq!(view.total_filtered, 10);
        assert_eq!(view.navigation.total_pages, 2);
    }

    #[test]
    fn offers_every_page_size() {
        let rows = letters(1);
        let cols = columns();
        let view = derive(&rows, &cols, &ViewState::default());
        let sizes: Vec<usize> = view
            .available_items_per_page()
            .iter()
            .map(|s| s.get())
            .collect();
        assert_eq!(sizes, vec![8, 10, 20, 30, 40, 50, 100, 500]);
        assert_eq!(view.page_size(), ItemsPerPage::Eight);
    }
}
