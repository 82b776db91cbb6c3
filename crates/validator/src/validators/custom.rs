//! User-written units in schema positions.

use std::fmt;

use finicky_value::Value;

use crate::foundation::{Validate, ValidationError};
use crate::schema::{IntoRule, Rule, TypedField};

/// Wrapper giving any [`Validate`] implementation a presence policy.
#[derive(Clone)]
pub struct Custom<V>(V);

impl<V: Validate> Validate for Custom<V> {
    fn validate(&self, value: &Value) -> Result<Value, ValidationError> {
        self.0.validate(value)
    }

    fn name(&self) -> &str {
        self.0.name()
    }
}

impl<V: Validate + 'static> IntoRule for Custom<V> {
    fn into_rule(self) -> Rule {
        Rule::unit(self.0)
    }
}

impl<V: Validate> fmt::Debug for Custom<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Custom").field(&self.0.name()).finish()
    }
}

/// A required field checked by a user-supplied unit.
///
/// The unit is any closure `Fn(&Value) -> Result<Value, ValidationError>`
/// or type implementing [`Validate`]. It only sees present, non-null values.
///
/// # Examples
///
/// ```
/// use finicky_validator::{Schema, ValidationError, Value, custom, record};
///
/// let batch_no = |value: &Value| match value.as_str() {
///     Some(s) if s.starts_with("prefix_") => Ok(value.clone()),
///     _ => Err(ValidationError::custom("batch number must start with `prefix_`")),
/// };
/// let schema = Schema::builder()
///     .field("batch_no", custom(batch_no).default("prefix_0"))
///     .build()
///     .unwrap();
///
/// assert_eq!(schema.validate(&record! {}).unwrap()["batch_no"], Value::from("prefix_0"));
/// assert!(schema.validate(&record! { "batch_no" => "42" }).is_err());
/// ```
pub fn custom<V: Validate + 'static>(unit: V) -> TypedField<Custom<V>> {
    TypedField::required(Custom(unit))
}
