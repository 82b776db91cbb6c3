//! Nested dictionary fields.

use crate::schema::{Schema, TypedField};

/// A required dictionary checked field by field against `schema`.
///
/// A failure embeds the nested report verbatim, so errors keep the shape
/// of the data. Keys the nested schema does not declare are dropped.
///
/// # Examples
///
/// ```
/// use finicky_validator::{FieldError, Schema, dict, record, string};
///
/// let address = Schema::builder().field("city", string()).build().unwrap();
/// let schema = Schema::builder().field("address", dict(address)).build().unwrap();
///
/// let report = schema
///     .validate(&record! { "address" => record! { "zip" => "00100" } })
///     .unwrap_err();
/// let FieldError::Nested(nested) = &report["address"] else { unreachable!() };
/// assert!(nested["city"].is_required());
/// ```
pub fn dict(schema: Schema) -> TypedField<Schema> {
    TypedField::required(schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FieldError, integer};
    use finicky_value::{Value, record};
    use pretty_assertions::assert_eq;

    fn outer() -> Schema {
        let inner = Schema::builder()
            .field("id", integer())
            .field("count", integer().default(1))
            .build()
            .unwrap();
        Schema::builder()
            .field("item", dict(inner))
            .build()
            .unwrap()
    }

    #[test]
    fn validated_dict_is_normalized() {
        let record = outer()
            .validate(&record! { "item" => record! { "id" => "7", "junk" => 1 } })
            .unwrap();
        assert_eq!(
            record["item"],
            Value::from(record! { "id" => 7, "count" => 1 }),
        );
    }

    #[test]
    fn non_dict_is_a_type_error() {
        let report = outer().validate(&record! { "item" => vec![1] }).unwrap_err();
        assert_eq!(
            report["item"].message(),
            Some("expected a dictionary but got list"),
        );
    }

    #[test]
    fn dict_can_be_optional() {
        let inner = Schema::builder().field("id", integer()).build().unwrap();
        let schema = Schema::builder()
            .field("item", dict(inner).optional())
            .build()
            .unwrap();
        assert!(schema.validate(&record! {}).unwrap().is_empty());
        assert!(matches!(
            schema.validate(&record! { "item" => record! {} }).unwrap_err()["item"],
            FieldError::Nested(_)
        ));
    }
}
