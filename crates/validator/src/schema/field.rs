//! Schema entries: a presence policy plus a tagged rule.

use std::fmt;
use std::sync::Arc;

use finicky_value::Value;

use crate::foundation::{Validate, ValidationError};
use crate::report::FieldError;
use crate::schema::Schema;
use crate::validators::ListRule;

// ============================================================================
// PRESENCE
// ============================================================================

/// What happens when a field is absent or null.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Presence {
    /// Absence is a `required` error.
    #[default]
    Required,
    /// Absence is accepted. A default, when set, is stored as-is without
    /// running the rule on it.
    Optional { default: Option<Value> },
}

impl Presence {
    #[must_use]
    pub const fn is_required(&self) -> bool {
        matches!(self, Self::Required)
    }

    /// The default value, if one is configured.
    #[must_use]
    pub const fn default_value(&self) -> Option<&Value> {
        match self {
            Self::Optional { default } => default.as_ref(),
            Self::Required => None,
        }
    }
}

// ============================================================================
// RULE
// ============================================================================

/// How a present value is checked.
///
/// The engine dispatches on this tag and never inspects the value's shape
/// to decide whether it is looking at a nested schema or a list.
#[derive(Clone)]
pub enum Rule {
    /// A single validator unit.
    Unit(Arc<dyn Validate>),
    /// A nested schema; the value must be a dictionary.
    Nested(Schema),
    /// An element rule applied to every entry of a list.
    List(ListRule),
}

impl Rule {
    /// Wraps a validator unit.
    pub fn unit(unit: impl Validate + 'static) -> Self {
        Self::Unit(Arc::new(unit))
    }

    /// Checks one present value.
    pub(crate) fn apply(&self, value: &Value) -> Result<Value, FieldError> {
        match self {
            Self::Unit(unit) => unit.validate(value).map_err(FieldError::Invalid),
            Self::Nested(schema) => {
                let Some(record) = value.as_map() else {
                    return Err(FieldError::Invalid(ValidationError::type_mismatch(
                        "dictionary",
                        value.kind(),
                    )));
                };
                crate::engine::validate_fields(schema, record)
                    .map(Value::Map)
                    .map_err(FieldError::Nested)
            }
            Self::List(list) => list.check(value).map(Value::List),
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unit(unit) => f.debug_tuple("Unit").field(&unit.name()).finish(),
            Self::Nested(schema) => f.debug_tuple("Nested").field(schema).finish(),
            Self::List(list) => f.debug_tuple("List").field(list).finish(),
        }
    }
}

// ============================================================================
// FIELD
// ============================================================================

/// One schema position: presence policy and rule.
#[derive(Debug, Clone)]
pub struct Field {
    pub presence: Presence,
    pub rule: Rule,
}

impl Field {
    /// A required field checked by `rule`.
    #[must_use]
    pub const fn new(rule: Rule) -> Self {
        Self {
            presence: Presence::Required,
            rule,
        }
    }

    #[must_use]
    pub const fn is_required(&self) -> bool {
        self.presence.is_required()
    }
}

// ============================================================================
// TYPED FIELD BUILDER
// ============================================================================

/// Conversion of a configured rule into the engine's tagged form.
pub trait IntoRule {
    fn into_rule(self) -> Rule;
}

/// A field under construction, returned by every factory.
///
/// `R` is the factory's configuration; type-specific builder methods
/// (`min_len`, `round_to`, ...) live on `TypedField<R>` for each `R`, while
/// the presence methods below are shared.
#[derive(Debug, Clone)]
#[must_use = "builder methods must be chained or built"]
pub struct TypedField<R> {
    pub(crate) rule: R,
    pub(crate) presence: Presence,
}

impl<R> TypedField<R> {
    pub(crate) const fn required(rule: R) -> Self {
        Self {
            rule,
            presence: Presence::Required,
        }
    }

    /// Accepts absence; the field is left out of the validated record.
    pub fn optional(mut self) -> Self {
        if self.presence.is_required() {
            self.presence = Presence::Optional { default: None };
        }
        self
    }

    /// Substitutes `value` when the field is absent. Implies [`optional`](Self::optional).
    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.presence = Presence::Optional {
            default: Some(value.into()),
        };
        self
    }

    /// Returns the configured rule.
    pub const fn rule(&self) -> &R {
        &self.rule
    }
}

impl<R: IntoRule> From<TypedField<R>> for Field {
    fn from(field: TypedField<R>) -> Self {
        Self {
            presence: field.presence,
            rule: field.rule.into_rule(),
        }
    }
}

/// A typed field can be run directly against a value, which is handy for
/// checking a single unit outside a schema. Presence is not consulted.
impl<R: Validate> Validate for TypedField<R> {
    fn validate(&self, value: &Value) -> Result<Value, ValidationError> {
        self.rule.validate(value)
    }

    fn name(&self) -> &str {
        self.rule.name()
    }
}

impl IntoRule for Schema {
    fn into_rule(self) -> Rule {
        Rule::Nested(self)
    }
}

impl IntoRule for ListRule {
    fn into_rule(self) -> Rule {
        Rule::List(self)
    }
}

impl From<Schema> for Field {
    fn from(schema: Schema) -> Self {
        Self::new(Rule::Nested(schema))
    }
}
