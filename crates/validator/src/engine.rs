//! The validation engine.
//!
//! Walks a schema over a record, resolving presence, applying each field's
//! rule and collecting every failure before deciding the outcome. A hook,
//! if given, sees the record only once every field has passed.

use finicky_value::Record;
use tracing::{debug, debug_span, trace};

use crate::foundation::{Hook, ValidationError};
use crate::report::{ErrorReport, FieldError};
use crate::schema::{Presence, Schema};

/// Validates `data` against `schema`, then runs `hook` on the result.
///
/// Every field is attempted exactly once, in declaration order; one failing
/// field never hides another. Fields in `data` that the schema does not
/// declare are dropped. `data` itself is never modified.
///
/// The hook runs at most once and only when no field failed. Its return
/// value replaces the validated record; its rejection produces a report
/// holding nothing but the hook error.
///
/// # Errors
///
/// Returns a non-empty [`ErrorReport`] when any field or the hook rejects.
///
/// # Examples
///
/// ```
/// use finicky_validator::{Record, ValidationError, float, record, validate, Schema};
///
/// let schema = Schema::builder()
///     .field("cost_price", float())
///     .field("selling_price", float())
///     .build()
///     .unwrap();
///
/// let not_below_cost = |record: Record| {
///     if record["selling_price"].as_f64() >= record["cost_price"].as_f64() {
///         Ok(record)
///     } else {
///         Err(ValidationError::custom("selling price cannot be below cost price"))
///     }
/// };
///
/// let data = record! { "cost_price" => 12.159, "selling_price" => 8.489 };
/// let report = validate(&schema, &data, Some(&not_below_cost)).unwrap_err();
/// assert_eq!(
///     report.hook().map(|e| e.message.as_ref()),
///     Some("selling price cannot be below cost price"),
/// );
/// ```
pub fn validate(
    schema: &Schema,
    data: &Record,
    hook: Option<&dyn Hook>,
) -> Result<Record, ErrorReport> {
    let span = debug_span!("validate", fields = schema.len());
    let _enter = span.enter();

    let record = match validate_fields(schema, data) {
        Ok(record) => record,
        Err(report) => {
            debug!(errors = report.len(), "validation failed");
            return Err(report);
        }
    };

    let Some(hook) = hook else {
        debug!(fields = record.len(), "validation passed");
        return Ok(record);
    };

    match hook.check(record) {
        Ok(record) => {
            debug!(fields = record.len(), "validation passed");
            Ok(record)
        }
        Err(error) => {
            debug!(code = %error.code, "hook rejected record");
            Err(ErrorReport::from_hook(error))
        }
    }
}

/// Runs every field of `schema` over `data` without a hook.
///
/// Shared by top-level validation and nested dictionary rules.
pub(crate) fn validate_fields(schema: &Schema, data: &Record) -> Result<Record, ErrorReport> {
    let mut record = Record::with_capacity(schema.len());
    let mut report = ErrorReport::new();

    for (name, field) in schema.fields() {
        match data.get(name).filter(|value| !value.is_null()) {
            Some(value) => match field.rule.apply(value) {
                Ok(value) => {
                    record.insert(name.to_owned(), value);
                }
                Err(error) => {
                    log_rejection(name, &error);
                    report.insert(name, error);
                }
            },
            None => match &field.presence {
                Presence::Required => {
                    debug!(field = name, code = "required", "field rejected");
                    report.insert(name, ValidationError::required());
                }
                Presence::Optional {
                    default: Some(default),
                } => {
                    trace!(field = name, "default applied");
                    record.insert(name.to_owned(), default.clone());
                }
                Presence::Optional { default: None } => {
                    trace!(field = name, "optional field omitted");
                }
            },
        }
    }

    if report.is_empty() {
        Ok(record)
    } else {
        Err(report)
    }
}

fn log_rejection(name: &str, error: &FieldError) {
    match error {
        FieldError::Invalid(error) => debug!(field = name, code = %error.code, "field rejected"),
        FieldError::Nested(report) => {
            debug!(field = name, errors = report.len(), "nested record rejected");
        }
        FieldError::Items(items) => debug!(field = name, items = items.len(), "list entries rejected"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{integer, string};
    use finicky_value::{Value, record};
    use pretty_assertions::assert_eq;

    fn schema() -> Schema {
        Schema::builder()
            .field("name", string())
            .field("stars", integer().default(0))
            .field("topic", string().optional())
            .build()
            .unwrap()
    }

    #[test]
    fn null_counts_as_missing() {
        let report = schema()
            .validate(&record! { "name" => Value::Null })
            .unwrap_err();
        assert!(report["name"].is_required());
    }

    #[test]
    fn defaults_fill_and_optionals_drop() {
        let record = schema().validate(&record! { "name" => "finicky" }).unwrap();
        assert_eq!(record, record! { "name" => "finicky", "stars" => 0 });
    }

    #[test]
    fn undeclared_fields_are_dropped() {
        let record = schema()
            .validate(&record! { "name" => "finicky", "extra" => true })
            .unwrap();
        assert!(!record.contains_key("extra"));
    }

    #[test]
    fn output_follows_schema_order() {
        let record = schema()
            .validate(&record! { "topic" => "rust", "stars" => 3, "name" => "x" })
            .unwrap();
        assert_eq!(record.keys().collect::<Vec<_>>(), ["name", "stars", "topic"]);
    }

    #[test]
    fn hook_is_skipped_when_fields_fail() {
        let hook = |_: Record| -> Result<Record, ValidationError> {
            panic!("hook must not run on invalid data")
        };
        let report = validate(&schema(), &Record::new(), Some(&hook)).unwrap_err();
        assert_eq!(report.hook(), None);
        assert!(report.contains("name"));
    }
}
