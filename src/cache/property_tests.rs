//! Property-Based Tests for Cache Module
//!
//! Uses proptest to verify key derivation and store invariants.

use proptest::prelude::*;
use std::collections::HashSet;
use std::thread::sleep;
use std::time::Duration;

use serde_json::{json, Value};

use crate::cache::{derive_key, CacheStore};

// == Test Configuration ==
const TEST_MAX_ENTRIES: usize = 100;
const TEST_DEFAULT_TTL: u64 = 300;

// == Strategies ==
/// Generates cache keys
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_]{1,64}"
}

/// Generates operation names
fn operation_strategy() -> impl Strategy<Value = String> {
    "[a-z]{3,10}"
}

/// Generates small payload trees
fn payload_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        "[a-zA-Z0-9]{0,8}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 16, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::hash_map("[a-zA-Z0-9_]{1,6}", inner, 0..4)
                .prop_map(|entries| Value::Object(entries.into_iter().collect())),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // The same operation and payload always derive the same key, and
    // the key is a 64 character lowercase hex digest.
    #[test]
    fn prop_key_derivation_deterministic(
        operation in operation_strategy(),
        payload in payload_strategy()
    ) {
        let first = derive_key(&operation, &payload);
        let second = derive_key(&operation, &payload);

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.len(), 64);
        prop_assert!(first.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    // Structurally equal mappings derive the same key no matter the
    // order their entries were inserted in.
    #[test]
    fn prop_key_derivation_order_independent(
        operation in operation_strategy(),
        entries in prop::collection::hash_map("[a-zA-Z0-9_]{1,6}", payload_strategy(), 0..6)
            .prop_map(|map| map.into_iter().collect::<Vec<_>>())
    ) {
        let forward: Value = Value::Object(entries.iter().cloned().collect());
        let backward: Value = Value::Object(entries.iter().rev().cloned().collect());

        prop_assert_eq!(
            derive_key(&operation, &forward),
            derive_key(&operation, &backward)
        );
    }

    // Different operations never share a key for the same payload.
    #[test]
    fn prop_key_distinguishes_operation(
        op1 in operation_strategy(),
        op2 in operation_strategy(),
        payload in payload_strategy()
    ) {
        prop_assume!(op1 != op2);
        prop_assert_ne!(derive_key(&op1, &payload), derive_key(&op2, &payload));
    }

    // Different payloads never share a key under the same operation.
    #[test]
    fn prop_key_distinguishes_payload(
        operation in operation_strategy(),
        payload1 in payload_strategy(),
        payload2 in payload_strategy()
    ) {
        prop_assume!(payload1 != payload2);
        prop_assert_ne!(
            derive_key(&operation, &payload1),
            derive_key(&operation, &payload2)
        );
    }

    // The store never grows beyond its configured capacity.
    #[test]
    fn prop_capacity_enforcement(
        entries in prop::collection::vec(
            (key_strategy(), payload_strategy()),
            1..200
        )
    ) {
        let max_entries = 50;
        let mut store = CacheStore::new(max_entries, TEST_DEFAULT_TTL);

        for (key, value) in entries {
            store.insert(key, value);
            prop_assert!(
                store.len() <= max_entries,
                "Cache size {} exceeds max {}",
                store.len(),
                max_entries
            );
        }
    }

    // Overwriting a key replaces its value without changing the size.
    #[test]
    fn prop_overwrite_no_size_change(
        key in key_strategy(),
        value1 in payload_strategy(),
        value2 in payload_strategy()
    ) {
        let mut store = CacheStore::new(TEST_MAX_ENTRIES, TEST_DEFAULT_TTL);

        store.insert(key.clone(), value1);
        store.insert(key.clone(), value2.clone());

        prop_assert_eq!(store.len(), 1);
        prop_assert_eq!(store.lookup(&key), Some(value2));
    }

    // When a full store takes a new key, the first-inserted entry is
    // the one that goes, never a newer one.
    #[test]
    fn prop_eviction_removes_oldest(
        initial_keys in prop::collection::vec(key_strategy(), 3..10),
        new_key in key_strategy(),
        new_value in payload_strategy()
    ) {
        // Deduplicate keys to ensure we have unique entries
        let unique_keys: Vec<String> = initial_keys
            .into_iter()
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        prop_assume!(unique_keys.len() >= 2);
        prop_assume!(!unique_keys.contains(&new_key));

        let capacity = unique_keys.len();
        let mut store = CacheStore::new(capacity, TEST_DEFAULT_TTL);

        let oldest_key = unique_keys[0].clone();
        for key in &unique_keys {
            store.insert(key.clone(), json!(format!("value_{}", key)));
        }

        prop_assert_eq!(store.len(), capacity);

        store.insert(new_key.clone(), new_value);

        prop_assert_eq!(store.len(), capacity);
        prop_assert!(
            store.lookup(&oldest_key).is_none(),
            "Oldest key '{}' should have been evicted",
            oldest_key
        );
        prop_assert!(store.lookup(&new_key).is_some());

        for key in unique_keys.iter().skip(1) {
            prop_assert!(
                store.lookup(key).is_some(),
                "Key '{}' should still exist (not the oldest)",
                key
            );
        }
    }
}

// Separate proptest block with fewer cases for time-sensitive TTL tests
proptest! {
    #![proptest_config(ProptestConfig::with_cases(5))]

    // An entry is servable until its TTL elapses, then a lookup misses
    // and removes it.
    #[test]
    fn prop_ttl_expiration_behavior(
        key in key_strategy(),
        value in payload_strategy()
    ) {
        let mut store = CacheStore::new(TEST_MAX_ENTRIES, 1);

        store.insert(key.clone(), value.clone());

        let result_before = store.lookup(&key);
        prop_assert_eq!(result_before, Some(value));

        // Wait for TTL to expire (add small buffer for timing)
        sleep(Duration::from_millis(1100));

        prop_assert!(store.lookup(&key).is_none());
        prop_assert_eq!(store.len(), 0);
    }
}
