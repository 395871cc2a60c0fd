//! Plain-text table renderer.

use std::iter::repeat_n;

use gridview::{Align, Body, DerivedView, InnerCell, NestedTable, PageMarker, PageNavigation};

use crate::border::{BorderChars, LineType};
use crate::options::RenderOptions;
use crate::text::{display_width, fit};

/// Indentation of nested tables under their row.
const NESTED_INDENT: &str = "    ";

/// Column widths plus the border they are drawn with.
struct Grid {
    widths: Vec<usize>,
    chars: Option<BorderChars>,
}

impl Grid {
    /// Width between the outer borders, excluding their padding.
    fn inner_width(&self) -> usize {
        let sum: usize = self.widths.iter().sum();
        let gaps = self.widths.len().saturating_sub(1);
        let gap = if self.chars.is_some() { 3 } else { 2 };
        sum + gaps * gap
    }

    /// Widens the last column until the inner width reaches `width`.
    fn ensure_inner_width(&mut self, width: usize) {
        let missing = width.saturating_sub(self.inner_width());
        if missing == 0 {
            return;
        }
        match self.widths.last_mut() {
            Some(last) => *last += missing,
            None => self.widths.push(width),
        }
    }

    fn line(&self, line_type: LineType, joints: bool) -> Option<String> {
        let chars = self.chars?;
        let (left, joint, right) = chars.ends(line_type);
        let mut line = String::new();
        line.push(left);
        if joints {
            for (i, &width) in self.widths.iter().enumerate() {
                if i > 0 {
                    line.push(joint);
                }
                line.extend(repeat_n(chars.horizontal, width + 2));
            }
        } else {
            line.extend(repeat_n(chars.horizontal, self.inner_width() + 2));
        }
        line.push(right);
        Some(line)
    }

    fn row(&self, cells: &[(String, Align)]) -> String {
        let fitted: Vec<String> = self
            .widths
            .iter()
            .enumerate()
            .map(|(i, &width)| match cells.get(i) {
                Some((text, align)) => fit(text, width, *align),
                None => " ".repeat(width),
            })
            .collect();
        self.wrap(&fitted)
    }

    /// A row spanning every column.
    fn span_row(&self, text: &str, align: Align) -> String {
        let fitted = fit(text, self.inner_width(), align);
        self.wrap(&[fitted])
    }

    fn wrap(&self, fitted: &[String]) -> String {
        match self.chars {
            Some(chars) => {
                let sep = format!(" {} ", chars.vertical);
                format!("{v} {} {v}", fitted.join(&sep), v = chars.vertical)
            }
            None => fitted.join("  ").trim_end().to_string(),
        }
    }
}

/// Renders derived views as plain text.
///
/// # Example
///
/// ```rust
/// use gridview::{Column, DataTable, Value};
/// use gridview_render::{BorderStyle, RenderOptions, TextRenderer};
///
/// let mut table = DataTable::new(
///     vec![Column::new("Name", |n: &&str| Value::from(*n))],
///     vec!["Bob", "Alice"],
/// );
/// table.on_header_click("Name");
///
/// let renderer = TextRenderer::new(
///     RenderOptions::default().border(BorderStyle::Ascii).show_toolbar(false),
/// );
/// let text = renderer.render(&table.view());
/// assert_eq!(
///     text,
///     "+--------+\n\
///      | Name ^ |\n\
///      +--------+\n\
///      | Alice  |\n\
///      | Bob    |\n\
///      +--------+\n\
///      Showing 1 to 2 of 2 entries\n\
///      Prev [1] Next"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct TextRenderer {
    options: RenderOptions,
}

impl TextRenderer {
    /// A renderer with the given options.
    pub fn new(options: RenderOptions) -> Self {
        TextRenderer { options }
    }

    /// The options in use.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Renders toolbar, table and footer.
    pub fn render<R>(&self, view: &DerivedView<'_, R>) -> String {
        log::trace!(
            "rendering {} of {} rows",
            view.rows.len(),
            view.total_filtered
        );

        let mut out = Vec::new();
        if self.options.show_toolbar {
            out.push(toolbar(view));
        }
        out.extend(self.table_lines(view));
        out.extend(footer(&view.navigation));
        out.join("\n")
    }

    fn table_lines<R>(&self, view: &DerivedView<'_, R>) -> Vec<String> {
        let (asc, desc) = self.options.border.sort_markers();
        let header: Vec<(String, Align)> = view
            .headers
            .iter()
            .map(|h| {
                let label = match h.sort {
                    Some(dir) if dir.is_desc() => format!("{} {}", h.name, desc),
                    Some(_) => format!("{} {}", h.name, asc),
                    None => h.name.to_string(),
                };
                (label, h.align)
            })
            .collect();

        let body = view.body();
        let mut widths: Vec<usize> = header
            .iter()
            .map(|(label, _)| display_width(label))
            .collect();
        if let Body::Rows(rows) = body {
            for row in rows {
                for (width, cell) in widths.iter_mut().zip(&row.cells) {
                    *width = (*width).max(display_width(&cell.text));
                }
            }
        }
        for (width, h) in widths.iter_mut().zip(&view.headers) {
            *width = match h.width {
                Some(preferred) => preferred,
                None => (*width).min(self.options.max_column_width),
            }
            .max(1);
        }

        // Nested tables are drawn inside a full-width row
        let nested: Vec<Vec<String>> = match body {
            Body::Rows(rows) => rows
                .iter()
                .map(|row| match &row.nested {
                    Some(table) => self.nested_lines(table),
                    None => Vec::new(),
                })
                .collect(),
            Body::NoRecords => Vec::new(),
        };

        let mut grid = Grid {
            widths,
            chars: self.options.border.chars(),
        };
        let span_needed = match body {
            Body::NoRecords => display_width(&self.options.no_records_message),
            Body::Rows(_) => nested
                .iter()
                .flatten()
                .map(|line| NESTED_INDENT.len() + display_width(line))
                .max()
                .unwrap_or(0),
        };
        grid.ensure_inner_width(span_needed);

        let mut lines = Vec::new();
        lines.extend(grid.line(LineType::Top, true));
        if !header.is_empty() {
            lines.push(grid.row(&header));
            lines.extend(grid.line(LineType::Middle, true));
        }

        match body {
            Body::Rows(rows) => {
                for (row, inner) in rows.iter().zip(&nested) {
                    let cells: Vec<(String, Align)> = row
                        .cells
                        .iter()
                        .map(|c| (c.text.clone(), c.align))
                        .collect();
                    lines.push(grid.row(&cells));
                    for line in inner {
                        let indented = format!("{}{}", NESTED_INDENT, line);
                        lines.push(grid.span_row(&indented, Align::Start));
                    }
                }
                lines.extend(grid.line(LineType::Bottom, true));
            }
            Body::NoRecords => {
                lines.push(grid.span_row(&self.options.no_records_message, Align::Center));
                lines.extend(grid.line(LineType::Bottom, false));
            }
        }
        lines
    }

    /// Lines of an inner table; absorbed row-span cells are left blank.
    fn nested_lines(&self, table: &NestedTable) -> Vec<String> {
        let header: Vec<(String, Align)> = table
            .headers
            .iter()
            .map(|h| (h.name.clone(), h.align))
            .collect();
        let rows: Vec<Vec<(String, Align)>> = table
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        InnerCell::Cell(c) => (c.text.clone(), c.align),
                        InnerCell::Absorbed => (String::new(), Align::Start),
                    })
                    .collect()
            })
            .collect();

        let widths = table
            .headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                let natural = rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|(text, _)| display_width(text))
                    .fold(display_width(&h.name), usize::max);
                h.width
                    .unwrap_or_else(|| natural.min(self.options.max_column_width))
                    .max(1)
            })
            .collect();

        let grid = Grid {
            widths,
            chars: self.options.border.chars(),
        };
        let mut lines = Vec::new();
        lines.extend(grid.line(LineType::Top, true));
        lines.push(grid.row(&header));
        lines.extend(grid.line(LineType::Middle, true));
        lines.extend(rows.iter().map(|row| grid.row(row)));
        lines.extend(grid.line(LineType::Bottom, true));
        lines
    }
}

fn toolbar<R>(view: &DerivedView<'_, R>) -> String {
    format!("Show: {}  Search: {}", view.page_size(), view.state.filter)
        .trim_end()
        .to_string()
}

/// Entries line and pagination bar.
fn footer(navigation: &PageNavigation) -> Vec<String> {
    let mut lines = Vec::new();
    if navigation.entries.is_displayed() {
        lines.push(navigation.entries.to_string());
    }
    if !navigation.markers.is_empty() {
        let mut bar = vec!["Prev".to_string()];
        bar.extend(navigation.markers.iter().map(|marker| match *marker {
            PageMarker::Page(n) if navigation.is_current(n) => format!("[{}]", n),
            other => other.to_string(),
        }));
        bar.push("Next".to_string());
        lines.push(bar.join(" "));
    }
    lines
}
