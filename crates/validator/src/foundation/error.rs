//! The failure type shared by validator units and hooks.
//!
//! String fields use `Cow<'static, str>` so static error codes and
//! messages never allocate.

use std::borrow::Cow;
use std::fmt;

use finicky_value::ValueKind;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// Rejection of a single value by a validator unit, or of a whole record
/// by a hook.
///
/// Returning `Err(ValidationError)` is the only way a unit signals
/// rejection. The engine catches it where it occurs and files it under the
/// field name in the [`ErrorReport`](crate::ErrorReport).
///
/// # Examples
///
/// ```
/// use finicky_validator::ValidationError;
///
/// let error = ValidationError::new("batch_prefix", "batch number must start with `prefix_`")
///     .with_param("prefix", "prefix_");
///
/// assert_eq!(error.param("prefix"), Some("prefix_"));
/// assert_eq!(error.message, "batch number must start with `prefix_`");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error code for programmatic handling and i18n.
    ///
    /// Examples: "required", "min_length", "invalid_integer"
    pub code: Cow<'static, str>,

    /// Human-readable message, the text shown to whoever submitted the input.
    pub message: Cow<'static, str>,

    /// Ordered key-value parameters for message templating (typically 0-3).
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            params: Vec::new(),
        }
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// A required field was absent or null.
    #[must_use]
    pub fn required() -> Self {
        Self::new("required", "required but was missing")
    }

    /// The value has the wrong shape for the unit, e.g. a string where a
    /// list was expected.
    #[must_use]
    pub fn type_mismatch(expected: &'static str, actual: ValueKind) -> Self {
        Self::new(
            "type_mismatch",
            format!("expected a {expected} but got {actual}"),
        )
        .with_param("expected", expected)
        .with_param("actual", actual.as_str())
    }

    /// A free-form rejection, the usual choice for custom units and hooks.
    pub fn custom(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new("custom", message)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_error() {
        let error = ValidationError::new("test", "Test error");
        assert_eq!(error.code, "test");
        assert_eq!(error.message, "Test error");
        assert_eq!(error.to_string(), "test: Test error");
    }

    #[test]
    fn test_error_with_params() {
        let error = ValidationError::new("min", "Too small")
            .with_param("min", "5")
            .with_param("actual", "3");

        assert_eq!(error.param("min"), Some("5"));
        assert_eq!(error.param("actual"), Some("3"));
        assert_eq!(error.param("max"), None);
    }

    #[test]
    fn test_required_message() {
        let error = ValidationError::required();
        assert_eq!(error.code, "required");
        assert_eq!(error.message, "required but was missing");
    }

    #[test]
    fn test_type_mismatch() {
        let error = ValidationError::type_mismatch("list", ValueKind::Text);
        assert_eq!(error.message, "expected a list but got string");
        assert_eq!(error.param("actual"), Some("string"));
    }

    #[test]
    fn test_zero_alloc_static_strings() {
        let error = ValidationError::custom("selling price is below cost");
        assert!(matches!(error.code, Cow::Borrowed(_)));
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }
}
