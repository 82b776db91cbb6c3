//! # finicky-validator
//!
//! Schema-driven validation and coercion of loosely typed records.
//!
//! A [`Schema`] maps field names to validator units. [`validate`] walks the
//! schema over an input [`Record`], coercing what it can, collecting every
//! rejection without stopping at the first, and finally handing the clean
//! record to an optional cross-field [`Hook`].
//!
//! ## Quick Start
//!
//! ```
//! use finicky_validator::prelude::*;
//!
//! let schema = Schema::builder()
//!     .field("name", string().min_len(1))
//!     .field("stars", integer().min(0))
//!     .field("price", float().min(0.01))
//!     .field("topic", string().optional())
//!     .build()
//!     .unwrap();
//!
//! let record = schema
//!     .validate(&record! { "name" => " finicky ", "stars" => "2000", "price" => 12.159 })
//!     .unwrap();
//! assert_eq!(record, record! { "name" => "finicky", "stars" => 2000, "price" => 12.16 });
//!
//! let report = schema.validate(&record! { "stars" => "many", "price" => 0 }).unwrap_err();
//! assert_eq!(report.len(), 3);
//! ```
//!
//! ## Validator Units
//!
//! Built-ins come from factories: [`string`], [`integer`], [`float`],
//! [`date`], [`list`], [`dict`]. Any closure
//! `Fn(&Value) -> Result<Value, ValidationError>` is a unit too and takes a
//! schema position through [`custom`].
//!
//! ## Declarative Schemas
//!
//! [`Schema::from_json_str`] builds the same schemas from JSON config; see
//! [`SchemaSpec`].

// ErrorReport holds its hook and input slots inline.
#![allow(clippy::result_large_err)]

mod engine;
pub mod foundation;
pub mod prelude;
pub mod report;
pub mod schema;
pub mod validators;

pub use engine::validate;
pub use foundation::{Hook, Validate, ValidationError};
pub use report::{ErrorReport, FieldError};
pub use schema::{Field, FieldSpec, Presence, Rule, Schema, SchemaBuilder, SchemaError, SchemaSpec};
pub use validators::{custom, date, dict, float, integer, list, string};

pub use finicky_value::{Record, Value, ValueKind, record};
