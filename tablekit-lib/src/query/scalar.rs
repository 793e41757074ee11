//! Type-aware coercion of cell values.
//!
//! Every comparison the engine makes goes through a [`Scalar`]: the value of a
//! cell (or of a filter operand) coerced to the comparison kind of its column.

use std::cmp::Ordering;

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::NaiveDateTime;
use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::prelude::ToPrimitive;

use crate::model::Value;
use crate::model::ValueKind;

/// A value coerced to one comparison kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Scalar {
    Number(Number),
    Date(DateTime<Utc>),
    Bool(bool),
    Text(String),
}

impl Scalar {
    /// Coerces a value to the given kind.
    ///
    /// Returns `None` for null values and for values that have no
    /// representation in that kind.
    pub(crate) fn coerce(value: &Value, kind: ValueKind) -> Option<Scalar> {
        if value.is_null() {
            return None;
        }
        match kind {
            ValueKind::Numeric => to_number(value).map(Scalar::Number),
            ValueKind::Temporal => to_date(value).map(Scalar::Date),
            ValueKind::Boolean => to_bool(value).map(Scalar::Bool),
            ValueKind::Text => Some(Scalar::Text(value.to_string())),
        }
    }

    /// Compares two scalars of the same kind.
    pub(crate) fn compare(&self, other: &Scalar) -> Option<Ordering> {
        match (self, other) {
            (Scalar::Number(a), Scalar::Number(b)) => Some(a.cmp(b)),
            (Scalar::Date(a), Scalar::Date(b)) => Some(a.cmp(b)),
            (Scalar::Bool(a), Scalar::Bool(b)) => Some(a.cmp(b)),
            (Scalar::Text(a), Scalar::Text(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

/// A numeric value.
///
/// Values `Decimal` can hold without loss stay exact. Anything outside its
/// range or precision, such as `1e30` or `1e-30`, is kept as an `f64`.
/// Two exact numbers compare as decimals; any other pair compares as `f64`
/// with [`f64::total_cmp`].
#[derive(Debug, Clone, Copy)]
pub(crate) enum Number {
    Exact(Decimal),
    Float(f64),
}

impl Number {
    fn from_f64(n: f64) -> Number {
        match Decimal::from_f64(n) {
            Some(d) if d.to_f64() == Some(n) => Number::Exact(d),
            _ => Number::Float(n),
        }
    }

    fn parse(s: &str) -> Option<Number> {
        let n = s.parse::<f64>().ok().filter(|n| n.is_finite())?;
        let exact = s
            .parse::<Decimal>()
            .ok()
            .or_else(|| Decimal::from_scientific(s).ok());
        match exact {
            Some(d) if d.to_f64() == Some(n) => Some(Number::Exact(d)),
            _ => Some(Number::from_f64(n)),
        }
    }

    fn as_f64(&self) -> f64 {
        match self {
            Number::Exact(d) => d.to_f64().unwrap_or(f64::NAN),
            Number::Float(n) => *n,
        }
    }
}

impl From<Decimal> for Number {
    fn from(d: Decimal) -> Self {
        Number::Exact(d)
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Number::Exact(a), Number::Exact(b)) => a.cmp(b),
            _ => self.as_f64().total_cmp(&other.as_f64()),
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Number {}

/// Compares two raw values as numbers, falling back to dates.
///
/// Used by ordering operators on columns whose data type is not itself
/// ordered numerically or chronologically.
pub(crate) fn loose_compare(left: &Value, right: &Value) -> Option<Ordering> {
    if let (Some(a), Some(b)) = (to_number(left), to_number(right)) {
        return Some(a.cmp(&b));
    }
    if let (Some(a), Some(b)) = (to_date(left), to_date(right)) {
        return Some(a.cmp(&b));
    }
    None
}

fn to_number(value: &Value) -> Option<Number> {
    match value {
        Value::Int(n) => Some(Number::Exact(Decimal::from(*n))),
        Value::Float(n) if n.is_finite() => Some(Number::from_f64(*n)),
        Value::Decimal(d) => Some(Number::Exact(*d)),
        Value::String(s) => Number::parse(s.trim()),
        _ => None,
    }
}

fn to_date(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::DateTime(dt) => Some(*dt),
        // Epoch milliseconds
        Value::Int(ms) => DateTime::from_timestamp_millis(*ms),
        Value::String(s) => parse_date(s.trim()),
        _ => None,
    }
}

/// Parses RFC 3339 timestamps, naive `YYYY-MM-DDTHH:MM:SS` (taken as UTC) and
/// plain `YYYY-MM-DD` dates (midnight UTC).
pub(crate) fn parse_date(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.and_utc());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

fn to_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) if s.eq_ignore_ascii_case("true") => Some(true),
        Value::String(s) if s.eq_ignore_ascii_case("false") => Some(false),
        _ => None,
    }
}
