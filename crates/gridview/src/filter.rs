//! Filter engine: free-text search across every column.

use crate::column::Column;

/// Returns `true` if any column of `row` matches the lowercased `needle`.
///
/// A column matches when its value is truthy and the lowercased string
/// form contains `needle`. Falsy values (`""`, `0`, `false`, missing) never
/// match, so a row whose every value is falsy is rejected even by an empty
/// needle.
pub fn row_matches<R>(row: &R, columns: &[Column<R>], needle: &str) -> bool {
    columns.iter().any(|column| {
        let value = column.value(row);
        value.is_truthy() && value.to_text().to_lowercase().contains(needle)
    })
}

/// Keeps the indices in `order` whose rows match `text`.
///
/// Order is preserved. `text` is lowercased once per call.
pub fn filter_order<R>(rows: &[R], order: &[usize], columns: &[Column<R>], text: &str) -> Vec<usize> {
    let needle = text.to_lowercase();
    order
        .iter()
        .copied()
        .filter(|&i| row_matches(&rows[i], columns, &needle))
        .collect()
}

/// Keeps the rows that match `text`, preserving their order.
///
/// # Example
///
/// ```
/// use gridview::{filter_rows, Column, Value};
///
/// let rows = vec!["Bob", "Alice", "Carl"];
/// let columns = vec![Column::new("Name", |r: &&str| Value::from(*r))];
/// let refs: Vec<&&str> = rows.iter().collect();
///
/// assert_eq!(filter_rows(&refs, &columns, "b"), vec![&"Bob"]);
/// ```
pub fn filter_rows<'a, R>(rows: &[&'a R], columns: &[Column<R>], text: &str) -> Vec<&'a R> {
    let needle = text.to_lowercase();
    rows.iter()
        .copied()
        .filter(|row| row_matches(*row, columns, &needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    #[derive(Debug, PartialEq)]
    struct Division {
        code: &'static str,
        head: Option<&'static str>,
        strength: u32,
    }

    fn divisions() -> Vec<Division> {
        vec![
            Division {
                code: "ENG",
                head: Some("Meera Iyer"),
                strength: 42,
            },
            Division {
                code: "FIN",
                head: None,
                strength: 0,
            },
            Division {
                code: "",
                head: None,
                strength: 0,
            },
            Division {
                code: "HR",
                head: Some("Kabir Shah"),
                strength: 7,
            },
        ]
    }

    fn columns() -> Vec<Column<Division>> {
        vec![
            Column::new("Code", |d: &Division| Value::from(d.code)),
            Column::new("Head", |d: &Division| Value::from(d.head)),
            Column::new("Strength", |d: &Division| Value::from(d.strength)),
        ]
    }

    fn codes(rows: Vec<&Division>) -> Vec<&'static str> {
        rows.into_iter().map(|d| d.code).collect()
    }

    fn run(text: &str) -> Vec<&'static str> {
        let rows = divisions();
        let refs: Vec<&Division> = rows.iter().collect();
        codes(filter_rows(&refs, &columns(), text))
    }

    #[test]
    fn matches_case_insensitively() {
        assert_eq!(run("iyer"), vec!["ENG"]);
        assert_eq!(run("KABIR"), vec!["HR"]);
        assert_eq!(run("fin"), vec!["FIN"]);
    }

    #[test]
    fn numbers_match_by_string_form() {
        assert_eq!(run("42"), vec!["ENG"]);
        assert_eq!(run("7"), vec!["HR"]);
    }

    #[test]
    fn falsy_values_never_match() {
        // FIN has strength 0, but "0" is falsy and is not searched
        assert_eq!(run("0"), Vec::<&str>::new());
    }

    #[test]
    fn empty_text_drops_rows_with_only_falsy_values() {
        // The third division has "", None and 0: nothing to match against
        assert_eq!(run(""), vec!["ENG", "FIN", "HR"]);
    }

    #[test]
    fn filter_order_preserves_given_order() {
        let rows = divisions();
        let order = vec![3, 1, 0];
        assert_eq!(filter_order(&rows, &order, &columns(), "e"), vec![0]);
        assert_eq!(filter_order(&rows, &order, &columns(), ""), vec![3, 1, 0]);
    }

    #[test]
    fn no_columns_matches_nothing() {
        let rows = divisions();
        let refs: Vec<&Division> = rows.iter().collect();
        assert!(filter_rows(&refs, &[], "").is_empty());
    }
}
