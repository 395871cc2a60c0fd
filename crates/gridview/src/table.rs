//! The table engine: owns data, columns and view state, and derives views.

use crate::column::{CellColor, Column};
use crate::filter::filter_order;
use crate::nested::NestedSpec;
use crate::options::TableOptions;
use crate::paginate::{total_pages, ItemsPerPage};
use crate::sort::sort_order;
use crate::state::ViewState;
use crate::view::{assemble, Decor, DerivedView};

/// Cached row orders.
///
/// `sorted` depends on data, columns and sort state. `filtered` depends on
/// those plus the filter text. Page state is applied on every view.
#[derive(Debug, Default)]
struct Memo {
    sorted: Vec<usize>,
    sorted_fresh: bool,
    filtered: Vec<usize>,
    filtered_fresh: bool,
    sort_runs: usize,
    filter_runs: usize,
}

impl Memo {
    fn invalidate_all(&mut self) {
        self.sorted_fresh = false;
        self.filtered_fresh = false;
    }

    fn invalidate_filter(&mut self) {
        self.filtered_fresh = false;
    }
}

/// A sortable, filterable, paginated table over rows of type `R`.
///
/// Rows may carry an inner table of `I` rows, configured with
/// [`DataTable::with_nested`].
///
/// # Example
///
/// ```
/// use gridview::{Column, DataTable, Dir, Value};
///
/// struct Person { name: &'static str, age: u32 }
///
/// let mut table = DataTable::new(
///     vec![
///         Column::new("Name", |p: &Person| Value::from(p.name)),
///         Column::new("Age", |p: &Person| Value::from(p.age)),
///     ],
///     vec![
///         Person { name: "Bob", age: 41 },
///         Person { name: "Alice", age: 29 },
///     ],
/// );
///
/// table.on_header_click("Age");
/// table.on_header_click("Age");
///
/// let view = table.view();
/// assert_eq!(view.headers[1].sort, Some(Dir::Desc));
/// assert_eq!(view.rows[0].row.name, "Bob");
/// ```
#[derive(Debug)]
pub struct DataTable<R, I = ()> {
    columns: Vec<Column<R>>,
    data: Vec<R>,
    nested: Option<NestedSpec<R, I>>,
    row_color: Option<CellColor<R>>,
    state: ViewState,
    memo: Memo,
}

impl<R> DataTable<R> {
    /// A table with the default state: unsorted, unfiltered, page 1 of 8.
    pub fn new(columns: Vec<Column<R>>, data: Vec<R>) -> Self {
        DataTable {
            columns,
            data,
            nested: None,
            row_color: None,
            state: ViewState::default(),
            memo: Memo::default(),
        }
    }

    /// Adds inner tables to rows that carry nested data.
    pub fn with_nested<J>(self, nested: NestedSpec<R, J>) -> DataTable<R, J> {
        DataTable {
            columns: self.columns,
            data: self.data,
            nested: Some(nested),
            row_color: self.row_color,
            state: self.state,
            memo: self.memo,
        }
    }
}

impl<R, I> DataTable<R, I> {
    /// Sets a background colour for whole rows.
    pub fn with_row_color(mut self, color: CellColor<R>) -> Self {
        self.row_color = Some(color);
        self
    }

    /// Starts from the state described by `options`.
    pub fn with_options(self, options: &TableOptions) -> Self {
        self.with_state(options.initial_state())
    }

    /// Starts from `state`.
    pub fn with_state(mut self, state: ViewState) -> Self {
        self.state = state;
        self.memo.invalidate_all();
        self
    }

    /// The columns.
    pub fn columns(&self) -> &[Column<R>] {
        &self.columns
    }

    /// The rows, in input order.
    pub fn data(&self) -> &[R] {
        &self.data
    }

    /// The current view state.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// The nested-row configuration, if any.
    pub fn nested(&self) -> Option<&NestedSpec<R, I>> {
        self.nested.as_ref()
    }

    /// Replaces the rows.
    ///
    /// The current page is kept as is, even if it is now past the end. Call
    /// [`clamp_current_page`](Self::clamp_current_page) to pull it back.
    pub fn set_data(&mut self, data: Vec<R>) {
        log::debug!("data replaced: {} rows", data.len());
        self.data = data;
        self.memo.invalidate_all();
    }

    /// Replaces the columns.
    pub fn set_columns(&mut self, columns: Vec<Column<R>>) {
        log::debug!("columns replaced: {} columns", columns.len());
        self.columns = columns;
        self.memo.invalidate_all();
    }

    /// A column header was clicked.
    pub fn on_header_click(&mut self, column: &str) {
        self.state = self.state.header_clicked(column);
        log::debug!(
            "header {:?} clicked, sorting {}",
            column,
            self.state.sort.dir
        );
        self.memo.invalidate_all();
    }

    /// The filter text changed.
    pub fn on_filter_text_change(&mut self, text: &str) {
        if text == self.state.filter {
            return;
        }
        self.state = self.state.filter_changed(text);
        log::debug!("filter set to {:?}, back to page 1", text);
        self.memo.invalidate_filter();
    }

    /// A page was selected.
    pub fn on_page_change(&mut self, page: usize) {
        if page == 0 {
            log::warn!("page 0 requested, showing page 1");
        }
        self.state = self.state.page_changed(page);
        log::debug!("page {}", self.state.page.current);
    }

    /// The page size changed.
    pub fn on_items_per_page_change(&mut self, size: ItemsPerPage) {
        self.state = self.state.items_per_page_changed(size);
        log::debug!("page size {}, back to page 1", size);
    }

    /// Number of pages over the filtered rows.
    pub fn total_pages(&mut self) -> usize {
        self.refresh();
        total_pages(self.memo.filtered.len(), self.state.page.size)
    }

    /// Pulls the current page back to `[1, max(total_pages, 1)]`.
    ///
    /// Returns `true` if the page changed.
    pub fn clamp_current_page(&mut self) -> bool {
        let last = self.total_pages().max(1);
        if self.state.page.current <= last {
            return false;
        }
        log::debug!(
            "page {} past the end, clamped to {}",
            self.state.page.current,
            last
        );
        self.state = self.state.page_changed(last);
        true
    }

    /// The view for the current state.
    pub fn view(&mut self) -> DerivedView<'_, R> {
        self.refresh();
        let decor = Decor {
            nested: self.nested.as_ref(),
            row_color: self.row_color.as_ref(),
        };
        assemble(
            &self.data,
            &self.columns,
            &self.memo.filtered,
            &self.state,
            decor,
        )
    }

    fn refresh(&mut self) {
        if !self.memo.sorted_fresh {
            self.memo.sorted = sort_order(&self.data, &self.columns, &self.state.sort);
            self.memo.sorted_fresh = true;
            self.memo.filtered_fresh = false;
            self.memo.sort_runs += 1;
            log::trace!(
                "sorted {} rows (sort #{})",
                self.memo.sorted.len(),
                self.memo.sort_runs
            );
        }
        if !self.memo.filtered_fresh {
            self.memo.filtered = filter_order(
                &self.data,
                &self.memo.sorted,
                &self.columns,
                &self.state.filter,
            );
            self.memo.filtered_fresh = true;
            self.memo.filter_runs += 1;
            log::trace!(
                "{} of {} rows match {:?} (filter #{})",
                self.memo.filtered.len(),
                self.memo.sorted.len(),
                self.state.filter,
                self.memo.filter_runs
            );
        }
    }
}
