//! Sort engine: orders rows by the value of one column.

use serde::{Deserialize, Serialize};

use crate::column::{find_column, Column};
use crate::ordering::{compare_values, Dir};

/// Which column the table is sorted by, and in which direction.
///
/// The key is the column name. A fresh state has no key and passes rows
/// through in their original order. Once a header has been clicked there is
/// always some sort key; clicking never clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortState {
    /// Name of the sorted column, if any.
    pub key: Option<String>,
    /// Sort direction.
    pub dir: Dir,
}

impl SortState {
    /// Unsorted state: no key, ascending.
    pub fn new() -> Self {
        SortState::default()
    }

    /// Sorted by `column` in direction `dir`.
    pub fn by(column: impl Into<String>, dir: Dir) -> Self {
        SortState {
            key: Some(column.into()),
            dir,
        }
    }

    /// State after a click on the header of `column`.
    ///
    /// Clicking the sorted column while ascending switches to descending.
    /// Any other click sorts by the clicked column, ascending.
    pub fn clicked(&self, column: &str) -> SortState {
        let dir = if self.is_sorted_by(column) && self.dir.is_asc() {
            Dir::Desc
        } else {
            Dir::Asc
        };
        SortState::by(column, dir)
    }

    /// Returns `true` if sorted by the named column.
    pub fn is_sorted_by(&self, column: &str) -> bool {
        self.key.as_deref() == Some(column)
    }

    /// Direction for the named column, if it is the sort key.
    pub fn direction_of(&self, column: &str) -> Option<Dir> {
        self.is_sorted_by(column).then_some(self.dir)
    }
}

/// Orders row indices of `rows` according to `sort`.
///
/// Without a key, or when no column carries the key name, returns
/// `0..rows.len()`. The sort is stable, so equal values keep their relative
/// order in both directions.
pub fn sort_order<R>(rows: &[R], columns: &[Column<R>], sort: &SortState) -> Vec<usize> {
    let mut order: Vec<usize> = (0..rows.len()).collect();

    let Some(key) = sort.key.as_deref() else {
        return order;
    };
    let Some(column) = find_column(columns, key) else {
        log::debug!("sort key {:?} matches no column, keeping input order", key);
        return order;
    };

    order.sort_by(|&a, &b| {
        let va = column.value(&rows[a]);
        let vb = column.value(&rows[b]);
        sort.dir.apply(compare_values(&va, &vb))
    });
    order
}

/// Returns the rows in sorted order.
///
/// # Example
///
/// ```
/// use gridview::{sort_rows, Column, Dir, SortState, Value};
///
/// let rows = vec!["Carl", "alice", "Bob"];
/// let columns = vec![Column::new("Name", |r: &&str| Value::from(*r))];
///
/// let asc = sort_rows(&rows, &columns, &SortState::by("Name", Dir::Asc));
/// assert_eq!(asc, vec![&"Bob", &"Carl", &"alice"]);
/// ```
pub fn sort_rows<'a, R>(rows: &'a [R], columns: &[Column<R>], sort: &SortState) -> Vec<&'a R> {
    sort_order(rows, columns, sort)
        .into_iter()
        .map(|i| &rows[i])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    #[derive(Debug, PartialEq)]
    struct Member {
        name: &'static str,
        age: u32,
    }

    fn members() -> Vec<Member> {
        vec![
            Member { name: "Dina", age: 41 },
            Member { name: "Arun", age: 29 },
            Member { name: "Chen", age: 41 },
            Member { name: "Bela", age: 35 },
        ]
    }

    fn columns() -> Vec<Column<Member>> {
        vec![
            Column::new("Name", |m: &Member| Value::from(m.name)),
            Column::new("Age", |m: &Member| Value::from(m.age)),
        ]
    }

    fn names(rows: Vec<&Member>) -> Vec<&'static str> {
        rows.into_iter().map(|m| m.name).collect()
    }

    #[test]
    fn no_key_is_passthrough() {
        let rows = members();
        let sorted = sort_rows(&rows, &columns(), &SortState::new());
        assert_eq!(names(sorted), vec!["Dina", "Arun", "Chen", "Bela"]);
    }

    #[test]
    fn unknown_key_is_passthrough() {
        let rows = members();
        let sorted = sort_rows(&rows, &columns(), &SortState::by("Salary", Dir::Desc));
        assert_eq!(names(sorted), vec!["Dina", "Arun", "Chen", "Bela"]);
    }

    #[test]
    fn ascending_and_descending() {
        let rows = members();
        let asc = sort_rows(&rows, &columns(), &SortState::by("Name", Dir::Asc));
        assert_eq!(names(asc), vec!["Arun", "Bela", "Chen", "Dina"]);

        let desc = sort_rows(&rows, &columns(), &SortState::by("Name", Dir::Desc));
        assert_eq!(names(desc), vec!["Dina", "Chen", "Bela", "Arun"]);
    }

    #[test]
    fn ties_keep_input_order_both_ways() {
        let rows = members();
        let asc = sort_rows(&rows, &columns(), &SortState::by("Age", Dir::Asc));
        assert_eq!(names(asc), vec!["Arun", "Bela", "Dina", "Chen"]);

        // Dina still precedes Chen: ties are not reversed
        let desc = sort_rows(&rows, &columns(), &SortState::by("Age", Dir::Desc));
        assert_eq!(names(desc), vec!["Dina", "Chen", "Bela", "Arun"]);
    }

    #[test]
    fn repeated_sort_is_stable() {
        let rows = members();
        let state = SortState::by("Age", Dir::Asc);
        let once = sort_order(&rows, &columns(), &state);
        let reordered: Vec<Member> = once
            .iter()
            .map(|&i| Member {
                name: rows[i].name,
                age: rows[i].age,
            })
            .collect();
        let twice = sort_order(&reordered, &columns(), &state);
        assert_eq!(twice, vec![0, 1, 2, 3]);
    }

    #[test]
    fn header_clicks_toggle_and_switch() {
        let initial = SortState::new();
        assert_eq!(initial.key, None);
        assert_eq!(initial.dir, Dir::Asc);

        let first = initial.clicked("Name");
        assert_eq!(first, SortState::by("Name", Dir::Asc));

        let second = first.clicked("Name");
        assert_eq!(second, SortState::by("Name", Dir::Desc));

        let third = second.clicked("Name");
        assert_eq!(third, SortState::by("Name", Dir::Asc));

        // A different column always starts ascending
        let other = second.clicked("Age");
        assert_eq!(other, SortState::by("Age", Dir::Asc));
    }

    #[test]
    fn direction_of_reports_only_the_key() {
        let state = SortState::by("Age", Dir::Desc);
        assert_eq!(state.direction_of("Age"), Some(Dir::Desc));
        assert_eq!(state.direction_of("Name"), None);
        assert!(!SortState::new().is_sorted_by("Age"));
    }
}
