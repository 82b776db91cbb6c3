//! Errors raised while building a schema.
//!
//! These describe a broken schema, never broken input. Input problems are
//! reported through [`ErrorReport`](crate::ErrorReport).

use thiserror::Error;

/// A schema could not be constructed.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A string pattern is not a valid regular expression.
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A date format contains an unknown or malformed specifier.
    #[error("invalid date format `{0}`")]
    InvalidDateFormat(String),

    /// The same field name was declared twice.
    #[error("field `{0}` is declared more than once")]
    DuplicateField(String),

    /// A bound could not be interpreted, or the lower bound exceeds the upper.
    #[error("invalid bounds for field `{field}`: {detail}")]
    InvalidBounds { field: String, detail: String },

    /// A field was configured as required and given a default at once.
    #[error("field `{field}` is required and cannot have a default")]
    RequiredWithDefault { field: String },

    /// A configured default cannot be converted for the field's type.
    #[error("invalid default for field `{field}`: {reason}")]
    InvalidDefault { field: String, reason: String },

    /// A declarative field lacks an option its type cannot do without.
    #[error("field `{field}` of type `{kind}` needs `{option}`")]
    MissingOption {
        field: String,
        kind: String,
        option: &'static str,
    },

    /// A declarative field names a type that does not exist.
    #[error("unknown field type `{0}`")]
    UnknownKind(String),

    /// A declarative schema is not well-formed JSON or has the wrong shape.
    #[error("malformed schema config: {0}")]
    Config(#[from] serde_json::Error),
}
