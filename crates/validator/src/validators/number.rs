//! Integer and floating point fields.

use std::fmt::Display;

use finicky_value::Value;

use crate::foundation::{Validate, ValidationError};
use crate::schema::{IntoRule, Rule, TypedField};

/// Default number of decimal places floats are rounded to.
pub const DEFAULT_ROUND_TO: u32 = 2;

// ============================================================================
// BOUNDS
// ============================================================================

fn below_min(value: impl Display, min: impl Display) -> ValidationError {
    ValidationError::new(
        "min",
        format!("'{value}' is less than minimum allowed ({min})"),
    )
    .with_param("min", min.to_string())
    .with_param("actual", value.to_string())
}

fn above_max(value: impl Display, max: impl Display) -> ValidationError {
    ValidationError::new(
        "max",
        format!("'{value}' is greater than maximum allowed ({max})"),
    )
    .with_param("max", max.to_string())
    .with_param("actual", value.to_string())
}

// ============================================================================
// INTEGER
// ============================================================================

/// Configuration for [`integer`] fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntegerRule {
    min: Option<i64>,
    max: Option<i64>,
}

impl IntegerRule {
    fn parse(value: &Value) -> Result<i64, ValidationError> {
        let parsed = match value {
            Value::Int(n) => Some(*n),
            Value::Text(s) => s.trim().parse().ok(),
            _ => None,
        };
        parsed.ok_or_else(|| {
            ValidationError::new("invalid_integer", format!("'{value}' is not a valid integer"))
        })
    }
}

impl Validate for IntegerRule {
    fn validate(&self, value: &Value) -> Result<Value, ValidationError> {
        let n = Self::parse(value)?;
        if let Some(min) = self.min
            && n < min
        {
            return Err(below_min(n, min));
        }
        if let Some(max) = self.max
            && n > max
        {
            return Err(above_max(n, max));
        }
        Ok(Value::Int(n))
    }

    fn name(&self) -> &'static str {
        "integer"
    }
}

impl IntoRule for IntegerRule {
    fn into_rule(self) -> Rule {
        Rule::unit(self)
    }
}

/// A required integer field.
///
/// Accepts integers and text holding an integer. Floats are rejected even
/// when integral, as are booleans.
///
/// # Examples
///
/// ```
/// use finicky_validator::{Validate, Value, integer};
///
/// let stars = integer().min(0);
/// assert_eq!(stars.validate(&Value::from(" 2000 ")).unwrap(), Value::from(2000));
/// assert!(stars.validate(&Value::from(3.0)).is_err());
/// ```
pub fn integer() -> TypedField<IntegerRule> {
    TypedField::required(IntegerRule::default())
}

impl TypedField<IntegerRule> {
    /// Inclusive lower bound.
    pub const fn min(mut self, min: i64) -> Self {
        self.rule.min = Some(min);
        self
    }

    /// Inclusive upper bound.
    pub const fn max(mut self, max: i64) -> Self {
        self.rule.max = Some(max);
        self
    }
}

// ============================================================================
// FLOAT
// ============================================================================

/// Configuration for [`float`] fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatRule {
    min: Option<f64>,
    max: Option<f64>,
    round_to: Option<u32>,
}

impl Default for FloatRule {
    fn default() -> Self {
        Self {
            min: None,
            max: None,
            round_to: Some(DEFAULT_ROUND_TO),
        }
    }
}

impl FloatRule {
    fn parse(value: &Value) -> Result<f64, ValidationError> {
        let parsed = match value {
            Value::Int(n) => Some(*n as f64),
            Value::Float(n) => Some(*n),
            Value::Text(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        parsed.filter(|n| n.is_finite()).ok_or_else(|| {
            ValidationError::new(
                "invalid_float",
                format!("'{value}' is not a valid floating number"),
            )
        })
    }

    fn check_range(&self, n: f64) -> Result<(), ValidationError> {
        if let Some(min) = self.min
            && n < min
        {
            return Err(below_min(Value::Float(n), Value::Float(min)));
        }
        if let Some(max) = self.max
            && n > max
        {
            return Err(above_max(Value::Float(n), Value::Float(max)));
        }
        Ok(())
    }
}

impl Validate for FloatRule {
    // Rounding can cross a bound finer than `round_to`.
    fn validate(&self, value: &Value) -> Result<Value, ValidationError> {
        let n = Self::parse(value)?;
        self.check_range(n)?;
        let Some(places) = self.round_to else {
            return Ok(Value::Float(n));
        };
        let rounded = round(n, places);
        self.check_range(rounded)?;
        Ok(Value::Float(rounded))
    }

    fn name(&self) -> &'static str {
        "float"
    }
}

impl IntoRule for FloatRule {
    fn into_rule(self) -> Rule {
        Rule::unit(self)
    }
}

/// Rounds half away from zero to `places` decimal places.
///
/// Values too large to scale are returned unchanged; they have no
/// fractional digits left to round.
#[must_use]
pub fn round(n: f64, places: u32) -> f64 {
    let factor = 10f64.powi(i32::try_from(places).unwrap_or(i32::MAX));
    let scaled = n * factor;
    if !scaled.is_finite() {
        return n;
    }
    scaled.round() / factor
}

/// A required floating point field.
///
/// Accepts integers, floats and numeric text; NaN and infinities are
/// rejected. Bounds are checked on the value as given, then the result is
/// rounded to two decimal places unless configured otherwise. A rounded
/// value that lands outside the bounds is rejected.
///
/// # Examples
///
/// ```
/// use finicky_validator::{Validate, Value, float};
///
/// let price = float().min(0.01);
/// assert_eq!(price.validate(&Value::from(12.159)).unwrap(), Value::from(12.16));
/// assert!(price.validate(&Value::from(0)).is_err());
/// ```
pub fn float() -> TypedField<FloatRule> {
    TypedField::required(FloatRule::default())
}

impl TypedField<FloatRule> {
    /// Inclusive lower bound.
    pub const fn min(mut self, min: f64) -> Self {
        self.rule.min = Some(min);
        self
    }

    /// Inclusive upper bound.
    pub const fn max(mut self, max: f64) -> Self {
        self.rule.max = Some(max);
        self
    }

    /// Decimal places to round accepted values to. `None` keeps full precision.
    pub const fn round_to(mut self, places: Option<u32>) -> Self {
        self.rule.round_to = places;
        self
    }
}
