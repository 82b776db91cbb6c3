//! The validator unit and hook contracts.

use finicky_value::{Record, Value};

use crate::foundation::ValidationError;

// ============================================================================
// VALIDATOR UNIT
// ============================================================================

/// A validator unit: accepts one value and returns the accepted, possibly
/// transformed value, or rejects it.
///
/// The output may have a different kind than the input: an integer unit
/// turns the text `"2000"` into the integer `2000`. Units receive a shared
/// reference and build fresh values, so they never mutate the caller's data.
///
/// Built-in factories ([`string`](crate::string), [`integer`](crate::integer), ...)
/// are configured implementations of this trait. Any closure with the
/// signature `Fn(&Value) -> Result<Value, ValidationError>` implements it
/// too, which makes user-written units interchangeable with built-ins.
///
/// Implementations must be free of shared mutable state: a schema is
/// shared across threads and every unit in it may run concurrently.
///
/// # Examples
///
/// ```
/// use finicky_validator::{Validate, ValidationError, Value};
///
/// let batch_no = |value: &Value| match value.as_str() {
///     Some(s) if s.starts_with("prefix_") => Ok(Value::from(s.trim())),
///     _ => Err(ValidationError::custom("must start with `prefix_`")),
/// };
///
/// assert_eq!(batch_no.validate(&Value::from("prefix_42")).unwrap(), Value::from("prefix_42"));
/// assert!(batch_no.validate(&Value::from("42")).is_err());
/// ```
pub trait Validate: Send + Sync {
    /// Validates one value.
    fn validate(&self, value: &Value) -> Result<Value, ValidationError>;

    /// Returns the name of this validator.
    ///
    /// Used for debugging and log output.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<F> Validate for F
where
    F: Fn(&Value) -> Result<Value, ValidationError> + Send + Sync,
{
    fn validate(&self, value: &Value) -> Result<Value, ValidationError> {
        self(value)
    }
}

// ============================================================================
// HOOK
// ============================================================================

/// A whole-record check run after every field has passed.
///
/// Hooks carry the cross-field invariants a per-field unit cannot express,
/// such as "selling price must not be below cost price". A hook may return
/// a transformed record; its rejection is reported apart from field errors.
///
/// Closures `Fn(Record) -> Result<Record, ValidationError>` implement this
/// trait.
pub trait Hook: Send + Sync {
    /// Checks the validated record.
    fn check(&self, record: Record) -> Result<Record, ValidationError>;
}

impl<F> Hook for F
where
    F: Fn(Record) -> Result<Record, ValidationError> + Send + Sync,
{
    fn check(&self, record: Record) -> Result<Record, ValidationError> {
        self(record)
    }
}

// ============================================================================
// TESTS
// ============================================================================
