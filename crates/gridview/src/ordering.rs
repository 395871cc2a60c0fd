//! Sort direction and the value ordering used by the sort engine.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::value::{Number, Value};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    /// Returns `true` if this is ascending order.
    pub fn is_asc(self) -> bool {
        matches!(self, Dir::Asc)
    }

    /// Returns `true` if this is descending order.
    pub fn is_desc(self) -> bool {
        matches!(self, Dir::Desc)
    }

    /// The opposite direction.
    pub fn toggle(self) -> Dir {
        match self {
            Dir::Asc => Dir::Desc,
            Dir::Desc => Dir::Asc,
        }
    }

    /// Applies this direction to an ordering.
    ///
    /// For `Asc`, returns the ordering unchanged.
    /// For `Desc`, reverses the ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Compares two cell values.
///
/// Values of the same kind compare naturally: strings by code point (case
/// sensitive, no locale collation), numbers numerically, `false < true`.
/// NaN sorts after every other number. Code point order differs from UTF-16
/// code unit order when U+E000..=U+FFFF meets characters above U+FFFF.
///
/// Values of different kinds compare by kind, `Bool < Number < String <
/// None`, so that missing cells collect at the end of an ascending sort.
/// This keeps the order total, which a stable sort requires; it does not
/// attempt string-to-number coercion between kinds.
pub fn compare_values(a: &Value<'_>, b: &Value<'_>) -> Ordering {
    match (a, b) {
        (Value::String(a), Value::String(b)) => a.cmp(b),
        (Value::Number(a), Value::Number(b)) => compare_numbers(*a, *b),
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::None, Value::None) => Ordering::Equal,
        _ => kind_rank(a).cmp(&kind_rank(b)),
    }
}

fn compare_numbers(a: Number, b: Number) -> Ordering {
    match a.compare(b) {
        Some(ordering) => ordering,
        None => a.is_nan().cmp(&b.is_nan()),
    }
}

fn kind_rank(value: &Value<'_>) -> u8 {
    match value {
        Value::Bool(_) => 0,
        Value::Number(_) => 1,
        Value::String(_) => 2,
        Value::None => 3,
    }
}
