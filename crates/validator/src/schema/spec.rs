//! Declarative schemas loaded from JSON.
//!
//! A [`SchemaSpec`] is plain data: an ordered map of field name to
//! [`FieldSpec`], each naming its `type` and the options the matching
//! factory accepts.
//!
//! ```
//! use finicky_validator::{Schema, Value, record};
//!
//! let schema = Schema::from_json_str(r#"{
//!     "name":    {"type": "string", "min_len": 1},
//!     "version": {"type": "string", "pattern": "\\d+\\.\\d+\\.\\d+"},
//!     "price":   {"type": "float", "min": 0.01, "round_to": 2},
//!     "tags":    {"type": "list", "items": {"type": "string"}, "all": false, "default": []}
//! }"#).unwrap();
//!
//! let record = schema
//!     .validate(&record! { "name" => "finicky", "version" => "0.0.1", "price" => 8.489 })
//!     .unwrap();
//! assert_eq!(record["price"], Value::from(8.49));
//! assert_eq!(record["tags"], Value::List(vec![]));
//! ```

use finicky_value::Value;
use indexmap::IndexMap;
use serde::Deserialize;

use crate::schema::{Field, Presence, Schema, SchemaError, TypedField};
use crate::validators::{self, parse_datetime};

// ============================================================================
// CONFIG TYPES
// ============================================================================

/// Ordered map of field name to field configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct SchemaSpec {
    pub fields: IndexMap<String, FieldSpec>,
}

/// Configuration of one field.
///
/// `type` is one of `string`, `integer`, `float`, `date`, `list` or `dict`.
/// Options that do not apply to the type are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldSpec {
    #[serde(rename = "type")]
    pub kind: String,
    /// Defaults to `true` unless a default is given.
    pub required: Option<bool>,
    pub default: Option<serde_json::Value>,

    pub min_len: Option<usize>,
    pub max_len: Option<usize>,
    pub pattern: Option<String>,
    pub trim: Option<bool>,

    /// Numbers for `integer` and `float`, text in `format` for `date`.
    pub min: Option<serde_json::Value>,
    pub max: Option<serde_json::Value>,
    pub round_to: Option<u32>,
    pub format: Option<String>,

    pub items: Option<Box<FieldSpec>>,
    pub all: Option<bool>,
    pub schema: Option<SchemaSpec>,
}

// ============================================================================
// SCHEMA CONSTRUCTION
// ============================================================================

impl Schema {
    /// Builds a schema from its declarative form.
    ///
    /// # Errors
    ///
    /// Returns a [`SchemaError`] for unknown types, bad patterns or date
    /// formats, unusable bounds or defaults, and required fields with a
    /// default.
    pub fn from_spec(spec: &SchemaSpec) -> Result<Self, SchemaError> {
        build_schema(spec, "")
    }

    /// Parses and builds a schema from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Config`] for malformed JSON, otherwise as
    /// [`from_spec`](Self::from_spec).
    pub fn from_json_str(json: &str) -> Result<Self, SchemaError> {
        let spec: SchemaSpec = serde_json::from_str(json)?;
        Self::from_spec(&spec)
    }
}

fn build_schema(spec: &SchemaSpec, prefix: &str) -> Result<Schema, SchemaError> {
    spec.fields
        .iter()
        .try_fold(Schema::builder(), |builder, (name, field)| {
            let path = if prefix.is_empty() {
                name.clone()
            } else {
                format!("{prefix}.{name}")
            };
            Ok::<_, SchemaError>(builder.field(name.clone(), build_field(field, &path)?))
        })?
        .build()
}

fn build_field(spec: &FieldSpec, path: &str) -> Result<Field, SchemaError> {
    let presence = presence(spec, path)?;
    match spec.kind.as_str() {
        "string" => {
            let mut field = validators::string();
            if let Some(len) = spec.min_len {
                field = field.min_len(len);
            }
            if let Some(len) = spec.max_len {
                field = field.max_len(len);
            }
            if let Some(trim) = spec.trim {
                field = field.trim(trim);
            }
            if let Some(pattern) = &spec.pattern {
                field = field.pattern(pattern)?;
            }
            check_order(spec.min_len, spec.max_len, path)?;
            Ok(with_presence(field, presence))
        }
        "integer" => {
            let mut field = validators::integer();
            let min = bound(spec.min.as_ref(), path, serde_json::Value::as_i64)?;
            let max = bound(spec.max.as_ref(), path, serde_json::Value::as_i64)?;
            check_order(min, max, path)?;
            if let Some(min) = min {
                field = field.min(min);
            }
            if let Some(max) = max {
                field = field.max(max);
            }
            Ok(with_presence(field, presence))
        }
        "float" => {
            let mut field = validators::float();
            let min = bound(spec.min.as_ref(), path, serde_json::Value::as_f64)?;
            let max = bound(spec.max.as_ref(), path, serde_json::Value::as_f64)?;
            check_order(min, max, path)?;
            if let Some(min) = min {
                field = field.min(min);
            }
            if let Some(max) = max {
                field = field.max(max);
            }
            if spec.round_to.is_some() {
                field = field.round_to(spec.round_to);
            }
            Ok(with_presence(field, presence))
        }
        "date" => {
            let format = spec
                .format
                .as_deref()
                .unwrap_or(validators::DEFAULT_DATE_FORMAT);
            let mut field = validators::date().format(format)?;
            let as_date = |json: &serde_json::Value| {
                json.as_str().and_then(|s| parse_datetime(s.trim(), format))
            };
            let min = bound(spec.min.as_ref(), path, as_date)?;
            let max = bound(spec.max.as_ref(), path, as_date)?;
            check_order(min, max, path)?;
            if let Some(min) = min {
                field = field.min(min);
            }
            if let Some(max) = max {
                field = field.max(max);
            }
            let presence = match presence {
                Presence::Optional {
                    default: Some(Value::Text(text)),
                } => {
                    let parsed = parse_datetime(text.trim(), format).ok_or_else(|| {
                        SchemaError::InvalidDefault {
                            field: path.to_owned(),
                            reason: format!("'{text}' does not match format {format}"),
                        }
                    })?;
                    Presence::Optional {
                        default: Some(Value::DateTime(parsed)),
                    }
                }
                other => other,
            };
            Ok(with_presence(field, presence))
        }
        "list" => {
            let items = spec.items.as_deref().ok_or_else(|| missing(spec, path, "items"))?;
            if let Some(default) = presence.default_value()
                && default.as_list().is_none()
            {
                return Err(SchemaError::InvalidDefault {
                    field: path.to_owned(),
                    reason: format!("expected a list but got {}", default.kind()),
                });
            }
            let mut field = validators::list(build_field(items, &format!("{path}[]"))?);
            if let Some(len) = spec.min_len {
                field = field.min_len(len);
            }
            if let Some(len) = spec.max_len {
                field = field.max_len(len);
            }
            if let Some(all) = spec.all {
                field = field.all(all);
            }
            check_order(spec.min_len, spec.max_len, path)?;
            Ok(with_presence(field, presence))
        }
        "dict" => {
            let schema = spec.schema.as_ref().ok_or_else(|| missing(spec, path, "schema"))?;
            if let Some(default) = presence.default_value()
                && default.as_map().is_none()
            {
                return Err(SchemaError::InvalidDefault {
                    field: path.to_owned(),
                    reason: format!("expected a dictionary but got {}", default.kind()),
                });
            }
            let field = validators::dict(build_schema(schema, path)?);
            Ok(with_presence(field, presence))
        }
        other => Err(SchemaError::UnknownKind(other.to_owned())),
    }
}

fn presence(spec: &FieldSpec, path: &str) -> Result<Presence, SchemaError> {
    match (spec.required, &spec.default) {
        (Some(true), Some(_)) => Err(SchemaError::RequiredWithDefault {
            field: path.to_owned(),
        }),
        (_, Some(default)) => Ok(Presence::Optional {
            default: Some(Value::from(default.clone())),
        }),
        (Some(false), None) => Ok(Presence::Optional { default: None }),
        (Some(true) | None, None) => Ok(Presence::Required),
    }
}

fn with_presence<R>(mut field: TypedField<R>, presence: Presence) -> Field
where
    Field: From<TypedField<R>>,
{
    field.presence = presence;
    field.into()
}

fn bound<T>(
    json: Option<&serde_json::Value>,
    path: &str,
    convert: impl Fn(&serde_json::Value) -> Option<T>,
) -> Result<Option<T>, SchemaError> {
    json.map(|json| {
        convert(json).ok_or_else(|| SchemaError::InvalidBounds {
            field: path.to_owned(),
            detail: format!("unusable bound {json}"),
        })
    })
    .transpose()
}

fn check_order<T: PartialOrd + std::fmt::Debug>(
    min: Option<T>,
    max: Option<T>,
    path: &str,
) -> Result<(), SchemaError> {
    match (min, max) {
        (Some(min), Some(max)) if min > max => Err(SchemaError::InvalidBounds {
            field: path.to_owned(),
            detail: format!("minimum {min:?} exceeds maximum {max:?}"),
        }),
        _ => Ok(()),
    }
}

fn missing(spec: &FieldSpec, path: &str, option: &'static str) -> SchemaError {
    SchemaError::MissingOption {
        field: path.to_owned(),
        kind: spec.kind.clone(),
        option,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldError;
    use chrono::NaiveDate;
    use finicky_value::record;
    use pretty_assertions::assert_eq;

    #[test]
    fn field_order_follows_config() {
        let schema = Schema::from_json_str(
            r#"{"b": {"type": "integer"}, "a": {"type": "string"}}"#,
        )
        .unwrap();
        assert_eq!(schema.names().collect::<Vec<_>>(), ["b", "a"]);
    }

    #[test]
    fn unknown_type_is_rejected() {
        let error = Schema::from_json_str(r#"{"id": {"type": "uuid"}}"#).unwrap_err();
        assert!(matches!(error, SchemaError::UnknownKind(kind) if kind == "uuid"));
    }

    #[test]
    fn unknown_option_is_a_config_error() {
        let error = Schema::from_json_str(r#"{"id": {"type": "integer", "minimum": 1}}"#)
            .unwrap_err();
        assert!(matches!(error, SchemaError::Config(_)));
    }

    #[test]
    fn required_with_default_is_rejected() {
        let error = Schema::from_json_str(
            r#"{"id": {"type": "integer", "required": true, "default": 1}}"#,
        )
        .unwrap_err();
        assert!(matches!(error, SchemaError::RequiredWithDefault { field } if field == "id"));
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let error =
            Schema::from_json_str(r#"{"n": {"type": "float", "min": 2, "max": 1}}"#).unwrap_err();
        assert!(matches!(error, SchemaError::InvalidBounds { field, .. } if field == "n"));
    }

    #[test]
    fn list_needs_items() {
        let error = Schema::from_json_str(r#"{"tags": {"type": "list"}}"#).unwrap_err();
        assert_eq!(error.to_string(), "field `tags` of type `list` needs `items`");
    }

    #[test]
    fn date_bounds_and_defaults_use_the_format() {
        let schema = Schema::from_json_str(
            r#"{"day": {
                "type": "date", "format": "%d/%m/%Y",
                "min": "01/01/2020", "default": "15/06/2020"
            }}"#,
        )
        .unwrap();

        let record = schema.validate(&record! {}).unwrap();
        assert_eq!(
            record["day"],
            Value::from(NaiveDate::from_ymd_opt(2020, 6, 15).unwrap()),
        );

        let report = schema.validate(&record! { "day" => "31/12/2019" }).unwrap_err();
        assert_eq!(
            report["day"].message(),
            Some("'31/12/2019' occurs before minimum date(01/01/2020)"),
        );
    }

    #[test]
    fn bad_date_default_names_the_field() {
        let error = Schema::from_json_str(
            r#"{"when": {"type": "dict", "schema": {"day": {"type": "date", "default": "soon"}}}}"#,
        )
        .unwrap_err();
        assert!(matches!(error, SchemaError::InvalidDefault { field, .. } if field == "when.day"));
    }

    #[test]
    fn nested_config_validates_structurally() {
        let schema = Schema::from_json_str(
            r#"{"address": {"type": "dict", "schema": {
                "city": {"type": "string", "min_len": 1},
                "zip": {"type": "integer", "required": false}
            }}}"#,
        )
        .unwrap();

        let report = schema
            .validate(&record! { "address" => record! { "city" => " " } })
            .unwrap_err();
        let FieldError::Nested(nested) = &report["address"] else {
            panic!("expected a nested report");
        };
        assert_eq!(nested.len(), 1);
        assert!(nested.contains("city"));
    }
}
