//! Property-based tests for the encoder's core guarantees.
//!
//! These complement the integration tests by checking the invariants that
//! must hold for arbitrary inputs: scalar round-trips, keyed last-write-wins,
//! array order preservation, and the unsigned integer range check.

use graft::{to_string, to_value, Encoder, Value, ValueMap};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_i64_roundtrip(n in any::<i64>()) {
        let value = to_value(&n).unwrap();
        prop_assert_eq!(value.as_i64(), Some(n));
    }

    #[test]
    fn prop_u64_in_range_or_error(n in any::<u64>()) {
        match to_value(&n) {
            Ok(value) => {
                prop_assert!(n <= i64::MAX as u64);
                prop_assert_eq!(value.as_i64(), Some(n as i64));
            }
            Err(err) => {
                prop_assert!(n > i64::MAX as u64);
                let is_overflow = matches!(err, graft::Error::IntegerOverflow { .. });
                prop_assert!(is_overflow);
            }
        }
    }

    #[test]
    fn prop_f64_bits_roundtrip(n in any::<f64>()) {
        let value = to_value(&n).unwrap();
        let out = value.as_f64().unwrap();
        prop_assert_eq!(out.to_bits(), n.to_bits());
    }

    #[test]
    fn prop_bool_roundtrip(b in any::<bool>()) {
        prop_assert_eq!(to_value(&b).unwrap(), Value::Bool(b));
    }

    #[test]
    fn prop_string_roundtrip(s in ".*") {
        let value = to_value(s.as_str()).unwrap();
        prop_assert_eq!(value.as_str(), Some(s.as_str()));
    }

    #[test]
    fn prop_rendered_strings_parse_back(s in ".*") {
        // The rendered form is real JSON, byte escapes included.
        let rendered = to_string(s.as_str()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        prop_assert_eq!(parsed, serde_json::Value::String(s));
    }

    #[test]
    fn prop_array_preserves_order_and_length(v in prop::collection::vec(any::<i32>(), 0..20)) {
        let value = to_value(&v).unwrap();
        let arr = value.as_array().unwrap();
        prop_assert_eq!(arr.len(), v.len());
        for (element, expected) in arr.iter().zip(&v) {
            prop_assert_eq!(element.as_i64(), Some(*expected as i64));
        }
    }

    #[test]
    fn prop_keyed_last_write_wins(
        entries in prop::collection::vec(("[a-d]", any::<i32>()), 0..16)
    ) {
        let mut encoder = Encoder::new();
        let mut obj = encoder.object();
        let mut expected = ValueMap::new();
        for (key, value) in &entries {
            obj.encode_i64(key.clone(), *value as i64);
            expected.insert(key.clone(), Value::from(*value as i64));
        }
        // Keys repeat often with a 4-letter alphabet; the resolved object
        // must hold exactly the last value written for each distinct key.
        let resolved = encoder.finish().unwrap();
        prop_assert_eq!(resolved, Value::Object(expected));
    }

    #[test]
    fn prop_distinct_keys_order_insensitive(values in prop::collection::vec(any::<i32>(), 1..10)) {
        let keys: Vec<String> = (0..values.len()).map(|i| format!("k{}", i)).collect();

        let forward = {
            let mut encoder = Encoder::new();
            let mut obj = encoder.object();
            for (key, value) in keys.iter().zip(&values) {
                obj.encode_i64(key.clone(), *value as i64);
            }
            encoder.finish().unwrap()
        };

        let reverse = {
            let mut encoder = Encoder::new();
            let mut obj = encoder.object();
            for (key, value) in keys.iter().zip(&values).rev() {
                obj.encode_i64(key.clone(), *value as i64);
            }
            encoder.finish().unwrap()
        };

        prop_assert_eq!(forward, reverse);
    }
}
