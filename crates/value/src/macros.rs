//! Construction macros.

/// Builds a [`Record`](crate::Record) from `key => value` pairs.
///
/// Values go through `Value::from`, so literals, strings, vectors and
/// nested records can be mixed freely.
///
/// ```
/// use finicky_value::{Value, record};
///
/// let address = record! { "city" => "Accra" };
/// let user = record! {
///     "name" => "Ama",
///     "age" => 31,
///     "address" => address,
/// };
/// assert_eq!(user["age"], Value::Int(31));
/// assert_eq!(user["address"].get("city"), Some(&Value::from("Accra")));
/// ```
#[macro_export]
macro_rules! record {
    () => {
        $crate::Record::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut record = $crate::Record::new();
        $(
            record.insert(::std::string::String::from($key), $crate::Value::from($value));
        )+
        record
    }};
}

#[cfg(test)]
mod tests {
    use crate::{Record, Value};

    #[test]
    fn empty_record() {
        let record: Record = record! {};
        assert!(record.is_empty());
    }

    #[test]
    fn later_keys_overwrite_earlier_ones() {
        let record = record! { "a" => 1, "a" => 2 };
        assert_eq!(record.len(), 1);
        assert_eq!(record["a"], Value::Int(2));
    }
}
