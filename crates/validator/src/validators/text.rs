//! Text fields.

use finicky_value::Value;
use regex::Regex;

use crate::foundation::{Validate, ValidationError};
use crate::schema::{IntoRule, Rule, SchemaError, TypedField};

// ============================================================================
// TEXT RULE
// ============================================================================

/// Configuration for [`string`] fields.
#[derive(Debug, Clone)]
pub struct TextRule {
    min_len: Option<usize>,
    max_len: Option<usize>,
    pattern: Option<TextPattern>,
    trim: bool,
}

/// A compiled pattern alongside the text it was written as, which is what
/// error messages quote.
#[derive(Debug, Clone)]
struct TextPattern {
    source: String,
    regex: Regex,
}

impl Default for TextRule {
    fn default() -> Self {
        Self {
            min_len: None,
            max_len: None,
            pattern: None,
            trim: true,
        }
    }
}

impl Validate for TextRule {
    fn validate(&self, value: &Value) -> Result<Value, ValidationError> {
        let text = match value {
            Value::Text(s) => s.clone(),
            Value::Int(_) | Value::Float(_) | Value::Bool(_) => value.to_string(),
            other => return Err(ValidationError::type_mismatch("string", other.kind())),
        };
        let text = if self.trim {
            text.trim().to_owned()
        } else {
            text
        };

        let len = text.chars().count();
        if let Some(min) = self.min_len
            && len < min
        {
            return Err(ValidationError::new(
                "min_length",
                format!("'{text}' is shorter than minimum required length({min})"),
            )
            .with_param("min", min.to_string())
            .with_param("actual", len.to_string()));
        }
        if let Some(max) = self.max_len
            && len > max
        {
            return Err(ValidationError::new(
                "max_length",
                format!("'{text}' is longer than maximum required length({max})"),
            )
            .with_param("max", max.to_string())
            .with_param("actual", len.to_string()));
        }
        if let Some(pattern) = &self.pattern
            && !pattern.regex.is_match(&text)
        {
            return Err(ValidationError::new(
                "pattern",
                format!(
                    "'{text}' does not match expected pattern({})",
                    pattern.source
                ),
            )
            .with_param("pattern", pattern.source.clone()));
        }

        Ok(Value::Text(text))
    }

    fn name(&self) -> &'static str {
        "string"
    }
}

impl IntoRule for TextRule {
    fn into_rule(self) -> Rule {
        Rule::unit(self)
    }
}

// ============================================================================
// FACTORY
// ============================================================================

/// A required text field.
///
/// Accepts text and coerces numbers and booleans to their text form.
/// Surrounding whitespace is trimmed unless [`trim(false)`](TypedField::trim)
/// is set. Lengths count Unicode scalar values.
///
/// # Examples
///
/// ```
/// use finicky_validator::{Validate, Value, string};
///
/// let version = string().pattern(r"\d+\.\d+\.\d+").unwrap();
/// assert_eq!(version.validate(&Value::from(" 0.0.1 ")).unwrap(), Value::from("0.0.1"));
/// assert!(version.validate(&Value::from("v1")).is_err());
/// ```
pub fn string() -> TypedField<TextRule> {
    TypedField::required(TextRule::default())
}

impl TypedField<TextRule> {
    /// Rejects text shorter than `len` characters.
    pub const fn min_len(mut self, len: usize) -> Self {
        self.rule.min_len = Some(len);
        self
    }

    /// Rejects text longer than `len` characters.
    pub const fn max_len(mut self, len: usize) -> Self {
        self.rule.max_len = Some(len);
        self
    }

    /// Requires the whole text to match `pattern`.
    ///
    /// The match is anchored at both ends, so `\d+` rejects `"12a"`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::InvalidPattern`] if `pattern` does not compile.
    pub fn pattern(mut self, pattern: &str) -> Result<Self, SchemaError> {
        let regex = Regex::new(&format!("^(?:{pattern})$")).map_err(|source| {
            SchemaError::InvalidPattern {
                pattern: pattern.to_owned(),
                source,
            }
        })?;
        self.rule.pattern = Some(TextPattern {
            source: pattern.to_owned(),
            regex,
        });
        Ok(self)
    }

    /// Whether to strip surrounding whitespace before checking. On by default.
    pub const fn trim(mut self, trim: bool) -> Self {
        self.rule.trim = trim;
        self
    }
}
