//! Core validation types and traits
//!
//! - **Traits**: [`Validate`] for validator units, [`Hook`] for whole-record checks
//! - **Errors**: [`ValidationError`], the single rejection kind
//!
//! Every schema position holds something that implements [`Validate`].
//! Built-in units and user closures are indistinguishable to the engine:
//!
//! ```
//! use finicky_validator::foundation::{Validate, ValidationError};
//! use finicky_validator::{Value, integer};
//!
//! let builtin = integer().min(1);
//! let custom = |value: &Value| match value.as_i64() {
//!     Some(n) if n >= 1 => Ok(value.clone()),
//!     _ => Err(ValidationError::custom("must be a positive integer")),
//! };
//!
//! assert!(builtin.validate(&Value::from(0)).is_err());
//! assert!(custom.validate(&Value::from(0)).is_err());
//! ```

pub mod error;
pub mod traits;

pub use error::ValidationError;
pub use traits::{Hook, Validate};
