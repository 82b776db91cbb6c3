//! Date and datetime fields.

use chrono::format::{Item, ParseErrorKind, StrftimeItems};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use finicky_value::Value;

use crate::foundation::{Validate, ValidationError};
use crate::schema::{IntoRule, Rule, SchemaError, TypedField};

/// Format used when none is configured.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

// ============================================================================
// DATE RULE
// ============================================================================

/// Configuration for [`date`] fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRule {
    format: String,
    min: Option<NaiveDateTime>,
    max: Option<NaiveDateTime>,
}

impl Default for DateRule {
    fn default() -> Self {
        Self {
            format: DEFAULT_DATE_FORMAT.to_owned(),
            min: None,
            max: None,
        }
    }
}

impl DateRule {
    fn parse(&self, value: &Value) -> Result<NaiveDateTime, ValidationError> {
        match value {
            Value::DateTime(dt) => Ok(*dt),
            Value::Text(s) => parse_datetime(s.trim(), &self.format).ok_or_else(|| {
                ValidationError::new(
                    "invalid_format",
                    format!("'{value}' does not match expected format({})", self.format),
                )
                .with_param("format", self.format.clone())
            }),
            other => Err(ValidationError::new(
                "invalid_format",
                format!("'{other}' does not match expected format({})", self.format),
            )
            .with_param("format", self.format.clone())),
        }
    }

    fn render(&self, dt: &NaiveDateTime) -> String {
        dt.format(&self.format).to_string()
    }
}

/// Parses `input` with `format`, treating date-only formats as midnight.
///
/// Every specifier in `format` must be matched and no input may be left
/// over.
pub fn parse_datetime(input: &str, format: &str) -> Option<NaiveDateTime> {
    match NaiveDateTime::parse_from_str(input, format) {
        Ok(dt) => Some(dt),
        Err(e) if e.kind() == ParseErrorKind::NotEnough => NaiveDate::parse_from_str(input, format)
            .ok()
            .map(|date| date.and_time(NaiveTime::MIN)),
        Err(_) => None,
    }
}

/// Checks that every specifier in `format` is known to chrono.
///
/// # Errors
///
/// Returns [`SchemaError::InvalidDateFormat`] otherwise.
pub fn check_format(format: &str) -> Result<(), SchemaError> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(SchemaError::InvalidDateFormat(format.to_owned()));
    }
    Ok(())
}

impl Validate for DateRule {
    fn validate(&self, value: &Value) -> Result<Value, ValidationError> {
        let dt = self.parse(value)?;
        if let Some(min) = &self.min
            && dt < *min
        {
            return Err(ValidationError::new(
                "min_date",
                format!(
                    "'{}' occurs before minimum date({})",
                    self.render(&dt),
                    self.render(min)
                ),
            )
            .with_param("min", self.render(min)));
        }
        if let Some(max) = &self.max
            && dt > *max
        {
            return Err(ValidationError::new(
                "max_date",
                format!(
                    "'{}' occurs after maximum date({})",
                    self.render(&dt),
                    self.render(max)
                ),
            )
            .with_param("max", self.render(max)));
        }
        Ok(Value::DateTime(dt))
    }

    fn name(&self) -> &'static str {
        "date"
    }
}

impl IntoRule for DateRule {
    fn into_rule(self) -> Rule {
        Rule::unit(self)
    }
}

// ============================================================================
// FACTORY
// ============================================================================

/// A required date field.
///
/// Accepts datetimes as they are and parses text strictly with the
/// configured chrono format (`%Y-%m-%d` unless set). Date-only formats yield
/// midnight. Bounds are inclusive.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use finicky_validator::{Validate, Value, date};
///
/// let field = date().format("%d/%m/%Y").unwrap();
/// let parsed = field.validate(&Value::from(" 07/02/2021 ")).unwrap();
/// assert_eq!(parsed, Value::from(NaiveDate::from_ymd_opt(2021, 2, 7).unwrap()));
/// assert!(field.validate(&Value::from("2021-02-07")).is_err());
/// ```
pub fn date() -> TypedField<DateRule> {
    TypedField::required(DateRule::default())
}

impl TypedField<DateRule> {
    /// Sets the chrono format text is parsed with.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::InvalidDateFormat`] for an unknown specifier.
    pub fn format(mut self, format: &str) -> Result<Self, SchemaError> {
        check_format(format)?;
        format.clone_into(&mut self.rule.format);
        Ok(self)
    }

    /// Inclusive lower bound.
    pub const fn min(mut self, min: NaiveDateTime) -> Self {
        self.rule.min = Some(min);
        self
    }

    /// Inclusive upper bound.
    pub const fn max(mut self, max: NaiveDateTime) -> Self {
        self.rule.max = Some(max);
        self
    }
}
