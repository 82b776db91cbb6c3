//! List fields.

use std::collections::BTreeMap;

use finicky_value::Value;

use crate::foundation::ValidationError;
use crate::report::FieldError;
use crate::schema::{Field, Presence, TypedField};

/// Configuration for [`list`] fields.
#[derive(Debug, Clone)]
pub struct ListRule {
    element: Box<Field>,
    min_len: Option<usize>,
    max_len: Option<usize>,
    all: bool,
}

impl ListRule {
    /// Checks every element against the element rule.
    ///
    /// With `all` set, one bad element fails the list. Without it, bad
    /// elements are dropped and the list fails unless at least one element
    /// survived, so an empty list is rejected. Length bounds apply to the
    /// surviving elements.
    pub(crate) fn check(&self, value: &Value) -> Result<Vec<Value>, FieldError> {
        let Some(items) = value.as_list() else {
            return Err(ValidationError::type_mismatch("list", value.kind()).into());
        };

        let mut passed = Vec::with_capacity(items.len());
        let mut failed = BTreeMap::new();
        for (index, item) in items.iter().enumerate() {
            match self.check_item(item) {
                Ok(value) => passed.push(value),
                Err(error) => {
                    failed.insert(index, error);
                }
            }
        }

        if self.all && !failed.is_empty() {
            return Err(FieldError::Items(failed));
        }
        if !self.all && passed.is_empty() {
            if failed.is_empty() {
                return Err(ValidationError::new(
                    "no_valid_items",
                    "expected at least one valid entry but got none",
                )
                .into());
            }
            return Err(FieldError::Items(failed));
        }

        let count = passed.len();
        if let Some(min) = self.min_len
            && count < min
        {
            return Err(ValidationError::new(
                "min_items",
                format!("expected at least {min} valid entries but got {count}"),
            )
            .with_param("min", min.to_string())
            .with_param("actual", count.to_string())
            .into());
        }
        if let Some(max) = self.max_len
            && count > max
        {
            return Err(ValidationError::new(
                "max_items",
                format!("expected at most {max} valid entries but got {count}"),
            )
            .with_param("max", max.to_string())
            .with_param("actual", count.to_string())
            .into());
        }

        Ok(passed)
    }

    /// A null entry under an optional element becomes its default, or stays
    /// null without one.
    fn check_item(&self, item: &Value) -> Result<Value, FieldError> {
        match &self.element.presence {
            Presence::Optional { default } if item.is_null() => {
                Ok(default.clone().unwrap_or(Value::Null))
            }
            _ => self.element.rule.apply(item),
        }
    }
}

/// A required list whose entries are checked by `element`.
///
/// The element's presence policy applies to null entries: an optional
/// element keeps them (or substitutes its default), a required one hands
/// them to the rule like any other value.
///
/// # Examples
///
/// ```
/// use finicky_validator::{Schema, Value, integer, list, record};
///
/// let schema = Schema::builder()
///     .field("ids", list(integer()).all(false))
///     .build()
///     .unwrap();
///
/// let record = schema.validate(&record! { "ids" => vec!["1", "x", "3"] }).unwrap();
/// assert_eq!(record["ids"], Value::from(vec![1, 3]));
/// ```
pub fn list(element: impl Into<Field>) -> TypedField<ListRule> {
    TypedField::required(ListRule {
        element: Box::new(element.into()),
        min_len: None,
        max_len: None,
        all: true,
    })
}

impl TypedField<ListRule> {
    /// Minimum number of accepted entries.
    pub const fn min_len(mut self, len: usize) -> Self {
        self.rule.min_len = Some(len);
        self
    }

    /// Maximum number of accepted entries.
    pub const fn max_len(mut self, len: usize) -> Self {
        self.rule.max_len = Some(len);
        self
    }

    /// Whether every entry must pass. On by default; when off, failing
    /// entries are dropped from the output.
    pub const fn all(mut self, all: bool) -> Self {
        self.rule.all = all;
        self
    }
}
