//! Property-based tests for finicky-validator.

use finicky_validator::prelude::*;
use proptest::prelude::*;

fn profile_schema() -> Schema {
    Schema::builder()
        .field("name", string().min_len(1).max_len(20))
        .field("age", integer().min(0).max(150))
        .field("score", float().min(0.0).default(0.0))
        .field("tags", list(string()).all(false).optional())
        .build()
        .unwrap()
}

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        (-1.0e6..1.0e6f64).prop_map(Value::from),
        "[ a-z0-9.]{0,24}".prop_map(Value::from),
    ]
}

// ============================================================================
// IDEMPOTENCE: validate(validate(x)) == validate(x)
// ============================================================================

proptest! {
    #[test]
    fn revalidation_is_idempotent(
        name in arb_scalar(),
        age in arb_scalar(),
        score in arb_scalar(),
        tags in prop::collection::vec(arb_scalar(), 0..6),
    ) {
        let schema = profile_schema();
        let data = record! { "name" => name, "age" => age, "score" => score, "tags" => tags };

        if let Ok(first) = schema.validate(&data) {
            let second = schema.validate(&first);
            prop_assert_eq!(second, Ok(first));
        }
    }

    #[test]
    fn validation_is_deterministic(name in arb_scalar(), age in arb_scalar()) {
        let schema = profile_schema();
        let data = record! { "name" => name, "age" => age };
        prop_assert_eq!(schema.validate(&data), schema.validate(&data));
    }

    #[test]
    fn float_rounding_is_stable(n in -1.0e9..1.0e9f64) {
        let field = float();
        let once = field.validate(&Value::from(n)).unwrap();
        let twice = field.validate(&once).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn float_with_fine_bounds_revalidates(
        lo in -100.0..0.0f64,
        hi in 0.0..100.0f64,
        n in -150.0..150.0f64,
    ) {
        let field = float().min(lo).max(hi);
        if let Ok(once) = field.validate(&Value::from(n)) {
            prop_assert_eq!(field.validate(&once), Ok(once));
        }
    }

    #[test]
    fn float_just_inside_a_fine_bound_revalidates(hi in 0.0..10.0f64, offset in 0.0..0.01f64) {
        let field = float().max(hi);
        if let Ok(once) = field.validate(&Value::from(hi - offset)) {
            prop_assert_eq!(field.validate(&once), Ok(once));
        }
    }
}

// ============================================================================
// REPORT SHAPE: exactly one outcome, never an empty report
// ============================================================================

proptest! {
    #[test]
    fn failure_reports_are_never_empty(name in arb_scalar(), age in arb_scalar()) {
        let schema = profile_schema();
        if let Err(report) = schema.validate(&record! { "name" => name, "age" => age }) {
            prop_assert!(!report.is_empty());
            prop_assert!(report.iter().all(|(field, _)| schema.field(field).is_some()));
        }
    }

    #[test]
    fn output_keys_are_declared_fields(name in arb_scalar(), extra in arb_scalar()) {
        let schema = profile_schema();
        if let Ok(record) = schema.validate(&record! { "name" => name, "age" => 30, "extra" => extra }) {
            prop_assert!(record.keys().all(|key| schema.field(key).is_some()));
        }
    }
}

// ============================================================================
// LIST RETENTION: lenient lists keep passing entries in order
// ============================================================================

proptest! {
    #[test]
    fn lenient_list_keeps_exactly_the_passing_entries(
        entries in prop::collection::vec(prop_oneof![
            any::<i32>().prop_map(|n| n.to_string()),
            "[a-z]{1,4}",
        ], 0..12),
    ) {
        let schema = Schema::builder()
            .field("ids", list(integer()).all(false))
            .build()
            .unwrap();
        let expected: Vec<Value> = entries
            .iter()
            .filter_map(|s| s.parse::<i64>().ok())
            .map(Value::from)
            .collect();

        let result = schema.validate(&record! { "ids" => entries.clone() });

        if expected.is_empty() {
            prop_assert!(result.is_err());
        } else {
            let record = result.unwrap();
            prop_assert_eq!(&record["ids"], &Value::List(expected));
        }
    }

    #[test]
    fn strict_list_fails_iff_any_entry_fails(
        entries in prop::collection::vec(prop_oneof![
            any::<i32>().prop_map(|n| n.to_string()),
            "[a-z]{1,4}",
        ], 0..12),
    ) {
        let schema = Schema::builder()
            .field("ids", list(integer()))
            .build()
            .unwrap();
        let any_bad = entries.iter().any(|s| s.parse::<i64>().is_err());

        let result = schema.validate(&record! { "ids" => entries.clone() });

        prop_assert_eq!(result.is_err(), any_bad);
    }
}
