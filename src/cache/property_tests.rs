//! Property-Based Tests for Cache Module
//!
//! Uses proptest to verify the store behaves as a plain map under arbitrary
//! operation sequences.

use proptest::prelude::*;
use std::collections::HashMap;

use bytes::Bytes;
use http::{HeaderMap, HeaderValue, StatusCode};

use crate::cache::{CacheStore, CachedResponse};

// == Strategies ==
/// Generates cache keys shaped like real request fingerprints
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9/=?._-]{1,40}".prop_map(|path| format!("GET:http://origin.test/{}", path))
}

/// Generates captured responses with arbitrary status and body
fn response_strategy() -> impl Strategy<Value = CachedResponse> {
    (200u16..=599u16, prop::collection::vec(any::<u8>(), 0..128)).prop_map(|(status, body)| {
        let mut headers = HeaderMap::new();
        headers.insert(
            "content-type",
            HeaderValue::from_static("application/octet-stream"),
        );
        CachedResponse::new(
            StatusCode::from_u16(status).unwrap(),
            &headers,
            Bytes::from(body),
        )
    })
}

/// Generates a sequence of store operations for testing
#[derive(Debug, Clone)]
enum StoreOp {
    Set { key: String, response: CachedResponse },
    Get { key: String },
    Clear,
}

fn store_op_strategy() -> impl Strategy<Value = StoreOp> {
    prop_oneof![
        4 => (key_strategy(), response_strategy())
            .prop_map(|(key, response)| StoreOp::Set { key, response }),
        4 => key_strategy().prop_map(|key| StoreOp::Get { key }),
        1 => Just(StoreOp::Clear),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // For any sequence of set/get/clear operations, the store returns
    // exactly what a plain map would: the latest value written under a key,
    // or nothing after a clear.
    #[test]
    fn prop_store_matches_model(ops in prop::collection::vec(store_op_strategy(), 1..50)) {
        let mut store = CacheStore::new();
        let mut model: HashMap<String, (StatusCode, Bytes)> = HashMap::new();

        for op in ops {
            match op {
                StoreOp::Set { key, response } => {
                    model.insert(key.clone(), (response.status, response.body.clone()));
                    store.set(key, response);
                }
                StoreOp::Get { key } => {
                    let cached = store.get(&key);
                    let expected = model.get(&key);
                    prop_assert_eq!(
                        cached.is_some(),
                        expected.is_some(),
                        "Presence mismatch for {}",
                        key
                    );
                    if let (Some(cached), Some((status, body))) = (cached, expected) {
                        prop_assert_eq!(cached.status, *status, "Status mismatch");
                        prop_assert_eq!(&cached.body, body, "Body mismatch");
                    }
                }
                StoreOp::Clear => {
                    model.clear();
                    store.clear();
                }
            }
        }

        prop_assert_eq!(store.len(), model.len(), "Entry count mismatch");
    }

    // Repeated writes under one key always leave the last snapshot in place.
    #[test]
    fn prop_last_writer_wins(
        key in key_strategy(),
        responses in prop::collection::vec(response_strategy(), 1..10),
    ) {
        let mut store = CacheStore::new();

        for response in &responses {
            store.set(key.clone(), response.clone());
        }

        let last = responses.last().unwrap();
        let cached = store.get(&key).unwrap();
        prop_assert_eq!(cached.status, last.status);
        prop_assert_eq!(&cached.body, &last.body);
        prop_assert_eq!(store.len(), 1);
    }

    // Clearing discards every entry previously written.
    #[test]
    fn prop_clear_empties_store(
        entries in prop::collection::vec((key_strategy(), response_strategy()), 1..20),
    ) {
        let mut store = CacheStore::new();

        for (key, response) in &entries {
            store.set(key.clone(), response.clone());
        }
        store.clear();

        prop_assert!(store.is_empty());
        for (key, _) in &entries {
            prop_assert!(store.get(key).is_none());
        }
    }
}
