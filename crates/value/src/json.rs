//! Conversions between [`Value`] and `serde_json`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Record, Value};

/// Format used when a datetime is emitted as a JSON string.
const DATETIME_JSON_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Int(i),
                // u64 beyond i64::MAX and every non-integral number
                None => n.as_f64().map_or(Self::Null, Self::Float),
            },
            serde_json::Value::String(s) => Self::Text(s),
            serde_json::Value::Array(items) => {
                Self::List(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(map) => {
                Self::Map(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

impl Value {
    /// Converts the value into JSON.
    ///
    /// Datetimes become ISO 8601 strings; non-finite floats become `null`
    /// since JSON cannot represent them.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Null => serde_json::Value::Null,
            Self::Bool(b) => serde_json::Value::Bool(*b),
            Self::Int(n) => serde_json::Value::from(*n),
            Self::Float(n) => serde_json::Number::from_f64(*n)
                .map_or(serde_json::Value::Null, serde_json::Value::Number),
            Self::Text(s) => serde_json::Value::String(s.clone()),
            Self::DateTime(dt) => {
                serde_json::Value::String(dt.format(DATETIME_JSON_FORMAT).to_string())
            }
            Self::List(items) => serde_json::Value::Array(items.iter().map(Self::to_json).collect()),
            Self::Map(map) => serde_json::Value::Object(record_to_json(map)),
        }
    }
}

/// Converts a record into a JSON object, preserving field order.
#[must_use]
pub fn record_to_json(record: &Record) -> serde_json::Map<String, serde_json::Value> {
    record
        .iter()
        .map(|(k, v)| (k.clone(), v.to_json()))
        .collect()
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn json_numbers_split_into_int_and_float() {
        assert_eq!(Value::from(json!(2000)), Value::Int(2000));
        assert_eq!(Value::from(json!(12.159)), Value::Float(12.159));
        assert_eq!(Value::from(json!(u64::MAX)), Value::Float(u64::MAX as f64));
    }

    #[test]
    fn nested_objects_keep_field_order() {
        let value = Value::from(json!({"b": 1, "a": {"z": [true, null]}}));
        let map = value.as_map().unwrap();
        assert_eq!(map.keys().collect::<Vec<_>>(), ["b", "a"]);
        assert_eq!(
            map["a"].get("z"),
            Some(&Value::List(vec![Value::Bool(true), Value::Null])),
        );
    }

    #[test]
    fn datetime_serializes_as_iso_string() {
        let dt = chrono::NaiveDate::from_ymd_opt(2020, 12, 20)
            .unwrap()
            .and_hms_opt(13, 5, 0)
            .unwrap();
        assert_eq!(Value::from(dt).to_json(), json!("2020-12-20T13:05:00"));
    }

    #[test]
    fn non_finite_float_serializes_as_null() {
        assert_eq!(Value::Float(f64::NAN).to_json(), json!(null));
    }

    #[test]
    fn serde_round_trip_through_json_text() {
        let value: Value = serde_json::from_str(r#"{"name": "finicky", "stars": 3}"#).unwrap();
        assert_eq!(value.get("stars"), Some(&Value::Int(3)));
        let text = serde_json::to_string(&value).unwrap();
        assert!(text.contains("\"name\":\"finicky\""));
    }
}
