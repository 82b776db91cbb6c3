//! Schemas: ordered, immutable maps of field name to [`Field`].
//!
//! A schema is built once and shared freely; clones share the same
//! field table.
//!
//! ```
//! use finicky_validator::{Schema, float, integer, string};
//!
//! let schema = Schema::builder()
//!     .field("name", string().min_len(1))
//!     .field("stars", integer().min(0))
//!     .field("score", float().default(0.0))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(schema.len(), 3);
//! assert_eq!(schema.names().collect::<Vec<_>>(), ["name", "stars", "score"]);
//! ```

mod error;
mod field;
mod spec;

use std::fmt;
use std::sync::Arc;

use finicky_value::{Record, Value};
use indexmap::IndexMap;

use crate::engine;
use crate::foundation::{Hook, ValidationError};
use crate::report::ErrorReport;

pub use error::SchemaError;
pub use field::{Field, IntoRule, Presence, Rule, TypedField};
pub use spec::{FieldSpec, SchemaSpec};

// ============================================================================
// SCHEMA
// ============================================================================

/// Ordered mapping of field names to fields.
///
/// Field names are case-sensitive and unique. Declaration order is the
/// order fields are validated in and the order they appear in validated
/// records and error reports.
#[derive(Clone)]
pub struct Schema {
    fields: Arc<IndexMap<String, Field>>,
}

impl Schema {
    /// Starts building a schema.
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    /// Number of declared fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Looks up a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    /// Iterates over fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Field)> {
        self.fields.iter().map(|(name, field)| (name.as_str(), field))
    }

    /// Iterates over field names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Validates `data` against this schema without a hook.
    ///
    /// # Errors
    ///
    /// Returns the [`ErrorReport`] describing every rejected field.
    pub fn validate(&self, data: &Record) -> Result<Record, ErrorReport> {
        engine::validate(self, data, None)
    }

    /// Validates `data` and runs `hook` on the result if every field passed.
    ///
    /// # Errors
    ///
    /// Returns the field errors, or a report holding only the hook's
    /// rejection.
    pub fn validate_with(&self, data: &Record, hook: &dyn Hook) -> Result<Record, ErrorReport> {
        engine::validate(self, data, Some(hook))
    }

    /// Validates a decoded JSON document.
    ///
    /// Top-level input that is not an object is reported as an input
    /// error rather than treated as an empty record.
    ///
    /// # Errors
    ///
    /// Returns the [`ErrorReport`] for rejected fields or rejected input.
    pub fn validate_json(&self, json: &serde_json::Value) -> Result<Record, ErrorReport> {
        match Value::from(json.clone()) {
            Value::Map(record) => self.validate(&record),
            other => Err(ErrorReport::from_input(ValidationError::type_mismatch(
                "dictionary",
                other.kind(),
            ))),
        }
    }
}

impl fmt::Debug for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.fields.iter()).finish()
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Builder for [`Schema`].
///
/// Field insertion never fails on its own; duplicates are remembered and
/// reported by [`build`](Self::build).
#[derive(Debug, Default)]
#[must_use = "builder methods must be chained or built"]
pub struct SchemaBuilder {
    fields: IndexMap<String, Field>,
    duplicate: Option<String>,
}

impl SchemaBuilder {
    /// Declares a field.
    pub fn field(mut self, name: impl Into<String>, field: impl Into<Field>) -> Self {
        let name = name.into();
        if self.fields.contains_key(&name) {
            if self.duplicate.is_none() {
                self.duplicate = Some(name);
            }
        } else {
            self.fields.insert(name, field.into());
        }
        self
    }

    /// Finishes the schema.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::DuplicateField`] if a name was declared twice.
    pub fn build(self) -> Result<Schema, SchemaError> {
        if let Some(name) = self.duplicate {
            return Err(SchemaError::DuplicateField(name));
        }
        Ok(Schema {
            fields: Arc::new(self.fields),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{integer, string};

    #[test]
    fn duplicate_names_are_rejected() {
        let result = Schema::builder()
            .field("id", integer())
            .field("id", string())
            .build();
        assert!(matches!(result, Err(SchemaError::DuplicateField(name)) if name == "id"));
    }

    #[test]
    fn names_are_case_sensitive() {
        let schema = Schema::builder()
            .field("id", integer())
            .field("ID", integer())
            .build()
            .unwrap();
        assert_eq!(schema.len(), 2);
    }

    #[test]
    fn clones_share_fields() {
        let schema = Schema::builder().field("id", integer()).build().unwrap();
        let clone = schema.clone();
        assert!(Arc::ptr_eq(&schema.fields, &clone.fields));
    }

    #[test]
    fn empty_schema_accepts_anything_and_keeps_nothing() {
        let schema = Schema::builder().build().unwrap();
        assert!(schema.is_empty());
        let record = finicky_value::record! { "extra" => 1 };
        assert_eq!(schema.validate(&record).unwrap(), Record::new());
    }

    #[test]
    fn schema_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Schema>();
    }
}
