//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the adapter contract against arbitrary inputs.

use proptest::prelude::*;

use crate::cache::{CacheAdapter, CacheValue, MemoryAdapter};
use crate::error::CacheError;

// == Strategies ==
/// Generates cache keys
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_]{1,64}"
}

/// Generates values of every kind the cache can hold
fn value_strategy() -> impl Strategy<Value = CacheValue> {
    prop_oneof![
        any::<i8>().prop_map(CacheValue::from),
        any::<i16>().prop_map(CacheValue::from),
        any::<i32>().prop_map(CacheValue::from),
        any::<i64>().prop_map(CacheValue::from),
        any::<u8>().prop_map(CacheValue::from),
        any::<u16>().prop_map(CacheValue::from),
        any::<u32>().prop_map(CacheValue::from),
        any::<u64>().prop_map(CacheValue::from),
        (-1.0e6f64..1.0e6).prop_map(CacheValue::from),
        any::<bool>().prop_map(CacheValue::from),
        "[a-zA-Z0-9 ]{0,128}".prop_map(CacheValue::from),
        prop::collection::vec(any::<u8>(), 0..64).prop_map(CacheValue::from),
    ]
}

/// Zero of each numeric kind
fn numeric_zero_strategy() -> impl Strategy<Value = CacheValue> {
    prop_oneof![
        Just(CacheValue::I8(0)),
        Just(CacheValue::I16(0)),
        Just(CacheValue::I32(0)),
        Just(CacheValue::I64(0)),
        Just(CacheValue::U8(0)),
        Just(CacheValue::U16(0)),
        Just(CacheValue::U32(0)),
        Just(CacheValue::U64(0)),
        Just(CacheValue::F32(0.0)),
        Just(CacheValue::F64(0.0)),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Put with no TTL then Get returns the value unchanged
    #[test]
    fn prop_roundtrip_storage(key in key_strategy(), value in value_strategy()) {
        let adapter = MemoryAdapter::new();

        adapter.put(&key, value.clone(), 0).unwrap();

        prop_assert_eq!(adapter.get(&key), Some(value));
        prop_assert!(adapter.is_exist(&key));
    }

    // A second Put replaces the first
    #[test]
    fn prop_overwrite_semantics(
        key in key_strategy(),
        value1 in value_strategy(),
        value2 in value_strategy()
    ) {
        let adapter = MemoryAdapter::new();

        adapter.put(&key, value1, 0).unwrap();
        adapter.put(&key, value2.clone(), 0).unwrap();

        prop_assert_eq!(adapter.get(&key), Some(value2));
        prop_assert_eq!(adapter.len(), 1);
    }

    // Delete makes the key absent and is safe to repeat
    #[test]
    fn prop_delete_removes_entry(key in key_strategy(), value in value_strategy()) {
        let adapter = MemoryAdapter::new();

        adapter.put(&key, value, 0).unwrap();
        adapter.delete(&key).unwrap();
        adapter.delete(&key).unwrap();

        prop_assert!(adapter.get(&key).is_none());
        prop_assert!(!adapter.is_exist(&key));
    }

    // n increments followed by n decrements restore a numeric zero
    #[test]
    fn prop_incr_decr_symmetry(zero in numeric_zero_strategy(), steps in 1usize..50) {
        let adapter = MemoryAdapter::new();
        adapter.put("n", zero.clone(), 0).unwrap();

        for _ in 0..steps {
            adapter.incr("n").unwrap();
        }
        for _ in 0..steps {
            adapter.decr("n").unwrap();
        }

        prop_assert_eq!(adapter.get("n"), Some(zero));
    }

    // Incr/Decr only ever succeed on numeric kinds, and failures change nothing
    #[test]
    fn prop_incr_failure_leaves_value(value in value_strategy()) {
        let adapter = MemoryAdapter::new();
        adapter.put("v", value.clone(), 0).unwrap();

        match adapter.incr("v") {
            Ok(()) => prop_assert!(value.is_numeric()),
            Err(CacheError::TypeMismatch { .. }) => {
                prop_assert!(!value.is_numeric());
                prop_assert_eq!(adapter.get("v"), Some(value));
            }
            Err(CacheError::Overflow { .. }) => {
                prop_assert_eq!(adapter.get("v"), Some(value));
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }
}
