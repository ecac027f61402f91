//! Property-based tests for filtering and generation.
//!
//! Filters are conjunctions of exact matches, the empty filter is the
//! identity, and every generated record carries every column its schema
//! names, whatever the seed.

use chrono::{TimeZone, Utc};
use counsel_drilldown::catalog::{self, GenerationContext};
use counsel_drilldown::filter::{self, FilterMap};
use counsel_drilldown::model::{Category, Record, Value};
use proptest::prelude::*;

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-5i64..5).prop_map(Value::Int),
        (-5i64..5).prop_map(|i| Value::Float(i as f64)),
        "[a-c0-4]{0,2}".prop_map(Value::Text),
    ]
}

fn record() -> impl Strategy<Value = Record> {
    proptest::collection::vec(("[a-d]", scalar()), 0..5)
        .prop_map(|fields| fields.into_iter().collect::<Record>())
}

fn filters() -> impl Strategy<Value = FilterMap> {
    proptest::collection::vec(("[a-d]", scalar()), 0..4)
        .prop_map(|entries| entries.into_iter().collect::<FilterMap>())
}

fn known_category() -> impl Strategy<Value = Category> {
    proptest::sample::select(Category::known().to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn filter_is_conjunction_of_exact_matches(record in record(), filters in filters()) {
        let expected = filters.iter().all(|(key, value)| record.get(key) == Some(value));
        prop_assert_eq!(filter::matches(&record, Some(&filters)), expected);
    }

    #[test]
    fn empty_or_absent_filter_matches_everything(record in record()) {
        prop_assert!(filter::matches(&record, None));
        prop_assert!(filter::matches(&record, Some(&FilterMap::new())));
    }

    #[test]
    fn apply_keeps_exactly_the_matching_records_in_order(
        records in proptest::collection::vec(record(), 0..12),
        filters in filters(),
    ) {
        let expected: Vec<_> = records
            .iter()
            .filter(|r| filters.matches(r))
            .cloned()
            .collect();
        prop_assert_eq!(filter::apply(records, Some(&filters)), expected);
    }

    #[test]
    fn numbers_never_coerce_to_text_or_bool(n in -1000i64..1000) {
        let record = Record::new().with("n", n);
        prop_assert!(!filter::matches(&record, Some(&FilterMap::new().with("n", n.to_string()))));
        prop_assert!(!filter::matches(&record, Some(&FilterMap::new().with("n", n != 0))));
        prop_assert!(filter::matches(&record, Some(&FilterMap::new().with("n", n))));
    }

    #[test]
    fn int_field_matches_float_filter_of_same_number(n in -1_000_000i64..1_000_000) {
        let record = Record::new().with("n", n);
        prop_assert!(filter::matches(&record, Some(&FilterMap::new().with("n", n as f64))));
        prop_assert!(!filter::matches(&record, Some(&FilterMap::new().with("n", n as f64 + 0.5))));
    }

    #[test]
    fn parsed_filter_args_never_panic(arg in "\\PC{0,40}") {
        let _ = filter::parse_filter_arg(&arg);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn generated_records_cover_their_schema(seed in any::<u64>(), category in known_category()) {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap();
        let records = catalog::generate(&category, None, &mut GenerationContext::seeded(seed, now));
        prop_assert!(!records.is_empty());
        for column in catalog::get_columns(&category) {
            for record in &records {
                prop_assert!(record.contains_key(&column.key), "{} missing {}", category, column.key);
            }
        }
    }

    #[test]
    fn generation_with_filters_equals_generation_then_filter(
        seed in any::<u64>(),
        category in known_category(),
        status in "(active|executed|open|pending|compliant|draft)",
    ) {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap();
        let filters = FilterMap::new().with("status", status.as_str());
        let direct = catalog::generate(&category, Some(&filters), &mut GenerationContext::seeded(seed, now));
        let manual = filter::apply(
            catalog::generate(&category, None, &mut GenerationContext::seeded(seed, now)),
            Some(&filters),
        );
        prop_assert_eq!(direct, manual);
    }
}
