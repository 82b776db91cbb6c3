//! The [`Value`] enum and its accessors.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use indexmap::IndexMap;

use crate::ValueKind;

/// Ordered mapping of field names to values.
///
/// Insertion order is preserved so validated records and error reports
/// list fields in the order the schema declared them.
pub type Record = IndexMap<String, Value>;

/// A loosely-typed datum, as produced by JSON decoding or form submission.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Explicit null; treated the same as an absent field by validation.
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    /// A calendar date and wall-clock time without a timezone.
    DateTime(NaiveDateTime),
    List(Vec<Value>),
    Map(Record),
}

impl Value {
    /// Returns the kind of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Bool,
            Self::Int(_) => ValueKind::Int,
            Self::Float(_) => ValueKind::Float,
            Self::Text(_) => ValueKind::Text,
            Self::DateTime(_) => ValueKind::DateTime,
            Self::List(_) => ValueKind::List,
            Self::Map(_) => ValueKind::Map,
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the numeric value of an `Int` or `Float`.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(n) => Some(*n as f64),
            Self::Float(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_datetime(&self) -> Option<&NaiveDateTime> {
        match self {
            Self::DateTime(dt) => Some(dt),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_map(&self) -> Option<&Record> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Consumes the value, returning the record if it is a map.
    #[must_use]
    pub fn into_map(self) -> Option<Record> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Looks up a field when this value is a map.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_map().and_then(|map| map.get(key))
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(v: NaiveDateTime) -> Self {
        Self::DateTime(v)
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Self::DateTime(v.and_time(chrono::NaiveTime::MIN))
    }
}

impl From<Record> for Value {
    fn from(v: Record) -> Self {
        Self::Map(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

// ============================================================================
// DISPLAY
// ============================================================================

/// Renders the value the way it is quoted inside error messages:
/// text without quotes, floats always with a fractional part,
/// datetimes as `YYYY-MM-DD HH:MM:SS`, collections as JSON.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n:?}"),
            Self::Text(s) => f.write_str(s),
            Self::DateTime(dt) => write!(f, "{}", dt.format(crate::DATETIME_DISPLAY_FORMAT)),
            Self::List(_) | Self::Map(_) => write!(f, "{}", self.to_json()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn kinds_match_variants() {
        assert_eq!(Value::Null.kind(), ValueKind::Null);
        assert_eq!(Value::from(3).kind(), ValueKind::Int);
        assert_eq!(Value::from(3.5).kind(), ValueKind::Float);
        assert_eq!(Value::from("x").kind(), ValueKind::Text);
        assert_eq!(Value::from(vec![1, 2]).kind(), ValueKind::List);
        assert_eq!(Value::from(Record::new()).kind(), ValueKind::Map);
    }

    #[test]
    fn naive_date_becomes_midnight() {
        let date = NaiveDate::from_ymd_opt(2021, 2, 7).unwrap();
        let value = Value::from(date);
        assert_eq!(
            value.as_datetime().map(|dt| dt.date()),
            Some(date),
        );
        assert_eq!(value.to_string(), "2021-02-07 00:00:00");
    }

    #[test]
    fn float_display_keeps_fraction() {
        assert_eq!(Value::from(8.0).to_string(), "8.0");
        assert_eq!(Value::from(0.18).to_string(), "0.18");
        assert_eq!(Value::from(-2).to_string(), "-2");
    }

    #[test]
    fn as_f64_widens_integers() {
        assert_eq!(Value::from(4).as_f64(), Some(4.0));
        assert_eq!(Value::from("4").as_f64(), None);
    }

    #[test]
    fn option_none_is_null() {
        assert!(Value::from(None::<i64>).is_null());
        assert_eq!(Value::from(Some("a")), Value::from("a"));
    }

    #[test]
    fn get_on_map() {
        let mut record = Record::new();
        record.insert("phone".into(), Value::from("+233"));
        let value = Value::Map(record);
        assert_eq!(value.get("phone").and_then(Value::as_str), Some("+233"));
        assert!(value.get("missing").is_none());
        assert!(Value::from(1).get("phone").is_none());
    }
}
