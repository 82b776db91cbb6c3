//! Prelude module for convenient imports.
//!
//! `use finicky_validator::prelude::*;` brings in the traits, the schema
//! types, every factory and the `record!` macro.
//!
//! # Examples
//!
//! ```
//! use finicky_validator::prelude::*;
//!
//! let schema = Schema::builder()
//!     .field("tags", list(string()).all(false))
//!     .build()
//!     .unwrap();
//! assert!(schema.validate(&record! { "tags" => vec!["a", "b"] }).is_ok());
//! ```

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::foundation::{Hook, Validate, ValidationError};

// ============================================================================
// SCHEMA: Construction, engine and report
// ============================================================================

pub use crate::engine::validate;
pub use crate::report::{ErrorReport, FieldError};
pub use crate::schema::{Field, Schema, SchemaError};

// ============================================================================
// VALIDATORS: Built-in factories
// ============================================================================

pub use crate::validators::{custom, date, dict, float, integer, list, string};

// ============================================================================
// VALUES
// ============================================================================

pub use finicky_value::{Record, Value, record};
