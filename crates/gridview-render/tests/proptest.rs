//! Property-based tests for text layout using proptest.

use gridview::{Align, Column, DataTable, Value};
use gridview_render::{display_width, fit, BorderStyle, RenderOptions, TextRenderer};
use proptest::prelude::*;

fn align_strategy() -> impl Strategy<Value = Align> {
    prop::sample::select(vec![Align::Start, Align::Center, Align::End])
}

proptest! {
    /// A fitted cell always occupies exactly the requested width.
    #[test]
    fn fit_is_exact(text in "[a-zA-Z 日本語]{0,20}", width in 0usize..30, align in align_strategy()) {
        prop_assert_eq!(display_width(&fit(&text, width, align)), width);
    }

    /// Bordered tables are rectangular whatever the cell contents.
    #[test]
    fn bordered_table_is_rectangular(
        rows in prop::collection::vec("[a-z日本 ]{0,12}", 1..20),
        max_width in 1usize..15,
    ) {
        let columns = vec![Column::new("Text", |s: &String| Value::from(s))];
        let mut table = DataTable::new(columns, rows);
        let options = RenderOptions::default()
            .border(BorderStyle::Light)
            .max_column_width(max_width)
            .show_toolbar(false);
        let text = TextRenderer::new(options).render(&table.view());

        let widths: Vec<usize> = text
            .lines()
            .take_while(|l| !l.starts_with("Showing"))
            .map(display_width)
            .collect();
        prop_assert!(widths.windows(2).all(|w| w[0] == w[1]), "{:?}", widths);
    }
}
