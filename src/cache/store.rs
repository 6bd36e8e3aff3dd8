//! Cache Store Module
//!
//! In-memory mapping from request fingerprint to captured origin response.

use std::collections::HashMap;

use crate::cache::CachedResponse;

// == Cache Store ==
/// Key-value store of cached origin responses.
///
/// Keys are request fingerprints of the form `<METHOD>:<target URL>`.
/// Entries are created lazily on the first successful origin fetch and live
/// for the process lifetime: there is no TTL, no capacity bound, and no
/// eviction. The store exclusively owns its entries; readers get cloned
/// snapshots, never references into the map.
///
/// The store itself holds no lock. Shared access goes through a single
/// `Arc<RwLock<CacheStore>>` in the application state, so reads proceed in
/// parallel and a writer excludes other access only for its own mutation.
#[derive(Debug, Default)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CachedResponse>,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty CacheStore.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    // == Get ==
    /// Retrieves a cached response by key.
    ///
    /// Returns a cloned snapshot, or `None` when the key is absent.
    pub fn get(&self, key: &str) -> Option<CachedResponse> {
        self.entries.get(key).cloned()
    }

    // == Set ==
    /// Stores a response under the given key.
    ///
    /// An existing entry is replaced wholesale; the last writer wins.
    pub fn set(&mut self, key: String, response: CachedResponse) {
        self.entries.insert(key, response);
    }

    // == Clear ==
    /// Discards all entries by replacing the backing map.
    pub fn clear(&mut self) {
        self.entries = HashMap::new();
    }

    // == Contains ==
    /// Returns true if an entry exists for the given key.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    // == Length ==
    /// Returns the current number of entries in the store.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
