//! The structured result of a failed validation.
//!
//! An [`ErrorReport`] mirrors the schema: one entry per rejected field,
//! where nested dictionaries carry their own report and lists carry
//! per-index errors. A hook rejection lives in its own slot so it can never
//! collide with a field name.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Index;

use indexmap::IndexMap;
use serde_json::json;

use crate::foundation::ValidationError;

/// Path segment used by [`ErrorReport::flatten`] for the hook slot.
pub const HOOK_PATH: &str = "<hook>";

/// Path segment used by [`ErrorReport::flatten`] for a rejected top-level input.
pub const INPUT_PATH: &str = "<input>";

// ============================================================================
// FIELD ERROR
// ============================================================================

/// Why a single field was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The field's unit rejected the value, or the field was missing.
    Invalid(ValidationError),
    /// A nested dictionary failed; its report is embedded verbatim.
    Nested(ErrorReport),
    /// List elements failed, keyed by their index in the input list.
    Items(BTreeMap<usize, FieldError>),
}

impl FieldError {
    /// The leaf error, when this is not a structural failure.
    #[must_use]
    pub const fn error(&self) -> Option<&ValidationError> {
        match self {
            Self::Invalid(error) => Some(error),
            Self::Nested(_) | Self::Items(_) => None,
        }
    }

    /// The leaf message, when this is not a structural failure.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.error().map(|error| error.message.as_ref())
    }

    /// Whether this is the missing-required-field error.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.error().is_some_and(|error| error.code == "required")
    }

    fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Invalid(error) => serde_json::Value::String(error.message.to_string()),
            Self::Nested(report) => report.fields_to_json(),
            Self::Items(items) => items
                .iter()
                .map(|(index, error)| (index.to_string(), error.to_json()))
                .collect::<serde_json::Map<_, _>>()
                .into(),
        }
    }

    fn flatten_into<'a>(&'a self, path: String, out: &mut Vec<(String, &'a ValidationError)>) {
        match self {
            Self::Invalid(error) => out.push((path, error)),
            Self::Nested(report) => report.flatten_into(&path, out),
            Self::Items(items) => {
                for (index, error) in items {
                    error.flatten_into(format!("{path}[{index}]"), out);
                }
            }
        }
    }
}

impl From<ValidationError> for FieldError {
    fn from(error: ValidationError) -> Self {
        Self::Invalid(error)
    }
}

// ============================================================================
// ERROR REPORT
// ============================================================================

/// Every failure found by one validation run.
///
/// A report returned from validation is never empty: it holds at least one
/// field error, a hook error, or an input error.
///
/// # Examples
///
/// ```
/// use finicky_validator::{Schema, integer, record, string};
///
/// let schema = Schema::builder()
///     .field("name", string())
///     .field("stars", integer().min(0))
///     .build()
///     .unwrap();
///
/// let report = schema.validate(&record! { "stars" => -1 }).unwrap_err();
/// assert_eq!(report.len(), 2);
/// assert_eq!(report["name"].message(), Some("required but was missing"));
/// assert_eq!(
///     report["stars"].message(),
///     Some("'-1' is less than minimum allowed (0)"),
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorReport {
    fields: IndexMap<String, FieldError>,
    hook: Option<ValidationError>,
    input: Option<ValidationError>,
}

impl ErrorReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A report carrying only a hook rejection.
    #[must_use]
    pub fn from_hook(error: ValidationError) -> Self {
        Self {
            hook: Some(error),
            ..Self::default()
        }
    }

    /// A report for input that could not be treated as a record at all.
    #[must_use]
    pub fn from_input(error: ValidationError) -> Self {
        Self {
            input: Some(error),
            ..Self::default()
        }
    }

    /// Records a rejected field.
    pub fn insert(&mut self, field: impl Into<String>, error: impl Into<FieldError>) {
        self.fields.insert(field.into(), error.into());
    }

    /// Whether nothing was rejected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.hook.is_none() && self.input.is_none()
    }

    /// Number of rejected fields. The hook and input slots are not counted.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.fields.get(field)
    }

    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Iterates over rejected fields in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldError)> {
        self.fields.iter().map(|(name, error)| (name.as_str(), error))
    }

    /// The hook's rejection, if the hook ran and failed.
    #[must_use]
    pub const fn hook(&self) -> Option<&ValidationError> {
        self.hook.as_ref()
    }

    /// The top-level input rejection, if the input was not a record.
    #[must_use]
    pub const fn input(&self) -> Option<&ValidationError> {
        self.input.as_ref()
    }

    /// Lists every leaf error with its path.
    ///
    /// Nested fields are joined with `.` and list entries use `[index]`:
    /// `address.city`, `tags[2]`, `orders[0].total`. The hook and input
    /// slots appear as [`HOOK_PATH`] and [`INPUT_PATH`].
    #[must_use]
    pub fn flatten(&self) -> Vec<(String, &ValidationError)> {
        let mut out = Vec::new();
        if let Some(error) = &self.input {
            out.push((INPUT_PATH.to_owned(), error));
        }
        self.flatten_into("", &mut out);
        if let Some(error) = &self.hook {
            out.push((HOOK_PATH.to_owned(), error));
        }
        out
    }

    fn flatten_into<'a>(&'a self, prefix: &str, out: &mut Vec<(String, &'a ValidationError)>) {
        for (name, error) in &self.fields {
            let path = if prefix.is_empty() {
                name.clone()
            } else {
                format!("{prefix}.{name}")
            };
            error.flatten_into(path, out);
        }
    }

    /// Renders the report as JSON.
    ///
    /// Shape: `{"fields": {...}, "hook": "message"}`. Leaf errors become
    /// their message, nested reports recurse, list failures become objects
    /// keyed by index. `hook` and `input` keys are present only when set.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        let mut out = json!({ "fields": self.fields_to_json() });
        if let Some(error) = &self.input {
            out["input"] = json!(error.message);
        }
        if let Some(error) = &self.hook {
            out["hook"] = json!(error.message);
        }
        out
    }

    fn fields_to_json(&self) -> serde_json::Value {
        self.fields
            .iter()
            .map(|(name, error)| (name.clone(), error.to_json()))
            .collect::<serde_json::Map<_, _>>()
            .into()
    }
}

impl Index<&str> for ErrorReport {
    type Output = FieldError;

    /// # Panics
    ///
    /// Panics if `field` was not rejected.
    fn index(&self, field: &str) -> &FieldError {
        self.fields
            .get(field)
            .unwrap_or_else(|| panic!("no error recorded for field `{field}`"))
    }
}

impl<'a> IntoIterator for &'a ErrorReport {
    type Item = (&'a String, &'a FieldError);
    type IntoIter = indexmap::map::Iter<'a, String, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries = self.flatten();
        write!(f, "validation failed")?;
        for (index, (path, error)) in entries.iter().enumerate() {
            let sep = if index == 0 { ": " } else { "; " };
            write!(f, "{sep}{path}: {}", error.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ErrorReport {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> ErrorReport {
        let mut address = ErrorReport::new();
        address.insert("city", ValidationError::required());

        let mut tags = BTreeMap::new();
        tags.insert(2, FieldError::Invalid(ValidationError::custom("bad tag")));

        let mut report = ErrorReport::new();
        report.insert("address", FieldError::Nested(address));
        report.insert("tags", FieldError::Items(tags));
        report
    }

    #[test]
    fn flatten_builds_paths() {
        let report = sample();
        let paths: Vec<_> = report
            .flatten()
            .into_iter()
            .map(|(path, error)| (path, error.message.to_string()))
            .collect();
        assert_eq!(
            paths,
            vec![
                ("address.city".to_owned(), "required but was missing".to_owned()),
                ("tags[2]".to_owned(), "bad tag".to_owned()),
            ],
        );
    }

    #[test]
    fn to_json_mirrors_structure() {
        let report = sample();
        assert_eq!(
            report.to_json(),
            json!({
                "fields": {
                    "address": {"city": "required but was missing"},
                    "tags": {"2": "bad tag"},
                }
            }),
        );
    }

    #[test]
    fn hook_slot_is_separate_from_fields() {
        let report = ErrorReport::from_hook(ValidationError::custom("price below cost"));
        assert!(!report.is_empty());
        assert_eq!(report.len(), 0);
        assert_eq!(report.hook().map(|e| e.message.as_ref()), Some("price below cost"));
        assert_eq!(report.to_json(), json!({"fields": {}, "hook": "price below cost"}));
        assert_eq!(report.flatten()[0].0, HOOK_PATH);
    }

    #[test]
    fn display_lists_every_leaf() {
        let report = sample();
        assert_eq!(
            report.to_string(),
            "validation failed: address.city: required but was missing; tags[2]: bad tag",
        );
    }

    #[test]
    fn required_errors_are_recognized() {
        let report = sample();
        let FieldError::Nested(address) = &report["address"] else {
            panic!("expected a nested report");
        };
        assert!(address["city"].is_required());
        assert!(!report["tags"].is_required());
    }

    #[test]
    fn new_report_is_empty() {
        assert!(ErrorReport::new().is_empty());
    }
}
