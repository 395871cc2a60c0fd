//! Runtime values produced by column selectors.
//!
//! The [`Value`] enum is what a [`Column`](crate::Column) selector returns for
//! a row. The engine needs exactly two things from it: an ordering for the
//! sort engine and a truthiness/string coercion for the filter engine.

use std::borrow::Cow;
use std::cmp::Ordering;

/// Runtime value of a cell, usually borrowed from the source row.
///
/// # Example
///
/// ```
/// use gridview::{Value, Number};
///
/// struct Employee {
///     name: String,
///     grade: u8,
/// }
///
/// fn name<'a>(e: &'a Employee) -> Value<'a> {
///     Value::from(e.name.as_str())
/// }
///
/// let e = Employee { name: "Asha".into(), grade: 4 };
/// assert_eq!(name(&e).to_text(), "Asha");
/// assert_eq!(Value::from(e.grade), Value::Number(Number::U64(4)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    /// String value, borrowed or computed.
    String(Cow<'a, str>),
    /// Numeric value.
    Number(Number),
    /// Boolean value.
    Bool(bool),
    /// Missing, null or empty cell.
    None,
}

impl<'a> Value<'a> {
    /// Whether the value counts as present for filtering.
    ///
    /// Empty strings, zero, NaN, `false` and `None` are falsy. A falsy cell
    /// never matches a filter, not even an empty one.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::String(s) => !s.is_empty(),
            Value::Number(n) => n.is_truthy(),
            Value::Bool(b) => *b,
            Value::None => false,
        }
    }

    /// String form of the value, as displayed in a cell and searched by the
    /// filter engine.
    pub fn to_text(&self) -> Cow<'_, str> {
        match self {
            Value::String(s) => Cow::Borrowed(&**s),
            Value::Number(n) => Cow::Owned(n.to_string()),
            Value::Bool(true) => Cow::Borrowed("true"),
            Value::Bool(false) => Cow::Borrowed("false"),
            Value::None => Cow::Borrowed(""),
        }
    }

    /// Converts into a value that owns its string data.
    pub fn into_owned(self) -> Value<'static> {
        match self {
            Value::String(s) => Value::String(Cow::Owned(s.into_owned())),
            Value::Number(n) => Value::Number(n),
            Value::Bool(b) => Value::Bool(b),
            Value::None => Value::None,
        }
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::String(Cow::Borrowed(s))
    }
}

impl<'a> From<&'a String> for Value<'a> {
    fn from(s: &'a String) -> Self {
        Value::String(Cow::Borrowed(s.as_str()))
    }
}

impl From<String> for Value<'_> {
    fn from(s: String) -> Self {
        Value::String(Cow::Owned(s))
    }
}

impl<'a> From<Cow<'a, str>> for Value<'a> {
    fn from(s: Cow<'a, str>) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value<'_> {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Number> for Value<'_> {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

impl<'a, T> From<Option<T>> for Value<'a>
where
    T: Into<Value<'a>>,
{
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::None, Into::into)
    }
}

macro_rules! value_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value<'_> {
                fn from(n: $ty) -> Self {
                    Value::Number(Number::from(n))
                }
            }
        )*
    };
}

value_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// Numeric value supporting all common numeric types.
///
/// Integers compare exactly against each other, including signed against
/// unsigned. Any comparison involving a float goes through `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Signed 64-bit integer.
    I64(i64),
    /// Unsigned 64-bit integer.
    U64(u64),
    /// 64-bit floating point.
    F64(f64),
}

impl Number {
    /// Converts the number to f64.
    pub fn to_f64(self) -> f64 {
        match self {
            Number::I64(n) => n as f64,
            Number::U64(n) => n as f64,
            Number::F64(n) => n,
        }
    }

    /// Returns `true` for a float NaN.
    pub fn is_nan(self) -> bool {
        matches!(self, Number::F64(n) if n.is_nan())
    }

    /// Zero and NaN are falsy.
    pub fn is_truthy(self) -> bool {
        match self {
            Number::I64(n) => n != 0,
            Number::U64(n) => n != 0,
            Number::F64(n) => n != 0.0 && !n.is_nan(),
        }
    }

    /// Compares two numbers, handling mixed types.
    ///
    /// Returns `None` when either side is NaN.
    pub fn compare(self, other: Number) -> Option<Ordering> {
        match (self, other) {
            (Number::I64(a), Number::I64(b)) => Some(a.cmp(&b)),
            (Number::U64(a), Number::U64(b)) => Some(a.cmp(&b)),
            (Number::I64(a), Number::U64(b)) => Some(cmp_signed_unsigned(a, b)),
            (Number::U64(a), Number::I64(b)) => Some(cmp_signed_unsigned(b, a).reverse()),
            _ => self.to_f64().partial_cmp(&other.to_f64()),
        }
    }
}

fn cmp_signed_unsigned(a: i64, b: u64) -> Ordering {
    if a < 0 {
        Ordering::Less
    } else {
        (a as u64).cmp(&b)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(*other)
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Number::I64(n) => write!(f, "{}", n),
            Number::U64(n) => write!(f, "{}", n),
            Number::F64(n) if n.is_nan() => f.write_str("NaN"),
            Number::F64(n) if n.is_infinite() => {
                f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
            }
            // -0 prints as 0
            Number::F64(n) if n == 0.0 => f.write_str("0"),
            Number::F64(n) => write!(f, "{}", n),
        }
    }
}

impl From<i8> for Number {
    fn from(n: i8) -> Self {
        Number::I64(n as i64)
    }
}

impl From<i16> for Number {
    fn from(n: i16) -> Self {
        Number::I64(n as i64)
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Number::I64(n as i64)
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::I64(n)
    }
}

impl From<isize> for Number {
    fn from(n: isize) -> Self {
        Number::I64(n as i64)
    }
}

impl From<u8> for Number {
    fn from(n: u8) -> Self {
        Number::U64(n as u64)
    }
}

impl From<u16> for Number {
    fn from(n: u16) -> Self {
        Number::U64(n as u64)
    }
}

impl From<u32> for Number {
    fn from(n: u32) -> Self {
        Number::U64(n as u64)
    }
}

impl From<u64> for Number {
    fn from(n: u64) -> Self {
        Number::U64(n)
    }
}

impl From<usize> for Number {
    fn from(n: usize) -> Self {
        Number::U64(n as u64)
    }
}

impl From<f32> for Number {
    fn from(n: f32) -> Self {
        Number::F64(n as f64)
    }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Number::F64(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthiness_follows_falsy_set() {
        assert!(!Value::from("").is_truthy());
        assert!(!Value::from(0i32).is_truthy());
        assert!(!Value::from(0.0f64).is_truthy());
        assert!(!Value::from(f64::NAN).is_truthy());
        assert!(!Value::Bool(false).is_truthy());
        assert!(!Value::None.is_truthy());

        assert!(Value::from("0").is_truthy());
        assert!(Value::from(-1i32).is_truthy());
        assert!(Value::Bool(true).is_truthy());
    }

    #[test]
    fn text_coercion() {
        assert_eq!(Value::from("Bob").to_text(), "Bob");
        assert_eq!(Value::from(42u32).to_text(), "42");
        assert_eq!(Value::from(-7i64).to_text(), "-7");
        assert_eq!(Value::from(3.0f64).to_text(), "3");
        assert_eq!(Value::from(2.5f64).to_text(), "2.5");
        assert_eq!(Value::from(-0.0f64).to_text(), "0");
        assert_eq!(Value::from(f64::INFINITY).to_text(), "Infinity");
        assert_eq!(Value::from(f64::NAN).to_text(), "NaN");
        assert_eq!(Value::Bool(false).to_text(), "false");
        assert_eq!(Value::None.to_text(), "");
    }

    #[test]
    fn option_conversion() {
        let missing: Option<&str> = None;
        assert_eq!(Value::from(missing), Value::None);
        assert_eq!(Value::from(Some(5u8)), Value::Number(Number::U64(5)));
    }

    #[test]
    fn owned_values_outlive_source() {
        let owned = {
            let s = String::from("temporary");
            Value::from(&s).into_owned()
        };
        assert_eq!(owned, Value::from("temporary"));
    }

    #[test]
    fn number_comparisons_same_type() {
        assert_eq!(
            Number::I64(5).compare(Number::I64(10)),
            Some(Ordering::Less)
        );
        assert_eq!(
            Number::U64(10).compare(Number::U64(5)),
            Some(Ordering::Greater)
        );
        assert_eq!(
            Number::F64(5.0).compare(Number::F64(5.0)),
            Some(Ordering::Equal)
        );
    }

    #[test]
    fn number_comparisons_mixed_types() {
        assert_eq!(
            Number::I64(-1).compare(Number::U64(0)),
            Some(Ordering::Less)
        );
        assert_eq!(
            Number::U64(u64::MAX).compare(Number::I64(i64::MAX)),
            Some(Ordering::Greater)
        );
        assert_eq!(
            Number::I64(5).compare(Number::F64(5.0)),
            Some(Ordering::Equal)
        );
        assert_eq!(
            Number::U64(10).compare(Number::F64(5.5)),
            Some(Ordering::Greater)
        );
    }

    #[test]
    fn number_nan_comparison() {
        assert_eq!(Number::F64(f64::NAN).compare(Number::F64(1.0)), None);
        assert!(Number::F64(f64::NAN).is_nan());
        assert!(!Number::I64(0).is_nan());
    }
}
