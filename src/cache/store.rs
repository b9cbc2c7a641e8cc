//! Cache Store Module
//!
//! Bounded result store with lazy TTL expiry and oldest-first eviction.

use std::collections::HashMap;

use serde_json::Value;
use tracing::debug;

use crate::cache::{CacheEntry, CacheStats};

// == Cache Store ==
/// Bounded mapping from cache key to memoized result.
///
/// Expired entries are reclaimed lazily: a lookup that finds an expired
/// entry removes it, and eviction removes the oldest entry, which may
/// itself already be expired. There is no background sweep.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-result storage
    entries: HashMap<String, CacheEntry>,
    /// Maximum number of entries allowed
    max_entries: usize,
    /// Time-to-live in seconds applied to every entry at lookup
    ttl_seconds: u64,
    /// Monotonic insertion counter, the deterministic eviction tie-break
    next_seq: u64,
}

impl CacheStore {
    // == Constructor ==
    /// Creates a new CacheStore with the given capacity and TTL.
    ///
    /// # Arguments
    /// * `max_entries` - Maximum number of entries the cache can hold (clamped to at least 1)
    /// * `ttl_seconds` - Time-to-live in seconds for cached results
    pub fn new(max_entries: usize, ttl_seconds: u64) -> Self {
        Self {
            entries: HashMap::new(),
            max_entries: max_entries.max(1),
            ttl_seconds,
            next_seq: 0,
        }
    }

    // == Lookup ==
    /// Returns a copy of the cached result for `key` if it is still fresh.
    ///
    /// An entry whose age has reached the TTL is removed as a side effect
    /// of the lookup and reported as a miss. Lookups do not refresh an
    /// entry's age or its eviction rank.
    pub fn lookup(&mut self, key: &str) -> Option<Value> {
        if let Some(entry) = self.entries.get(key) {
            if entry.is_expired(self.ttl_seconds) {
                // Reclaim the expired entry as a side effect of the lookup
                self.entries.remove(key);
                return None;
            }
            return Some(entry.result.clone());
        }
        None
    }

    // == Insert ==
    /// Stores a result under `key`.
    ///
    /// If the key already exists, the entry is overwritten in place with a
    /// fresh timestamp and the size does not change. Otherwise, when the
    /// store is at capacity, the entry with the smallest creation time is
    /// evicted first (ties broken by insertion order).
    pub fn insert(&mut self, key: String, result: Value) {
        let is_overwrite = self.entries.contains_key(&key);

        if !is_overwrite && self.entries.len() >= self.max_entries {
            self.evict_oldest();
        }

        let entry = CacheEntry::new(result, self.next_seq);
        self.next_seq += 1;
        self.entries.insert(key, entry);
    }

    // == Evict Oldest ==
    /// Removes the entry with the smallest `(created_at, seq)` pair.
    fn evict_oldest(&mut self) {
        let oldest_key = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| (entry.created_at, entry.seq))
            .map(|(key, _)| key.clone());

        if let Some(key) = oldest_key {
            self.entries.remove(&key);
            debug!("Evicted oldest cache entry: {}", key);
        }
    }

    // == Clear ==
    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    // == Stats ==
    /// Returns a read-only snapshot of the cache state.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            size: self.entries.len(),
            max_size: self.max_entries,
            ttl_seconds: self.ttl_seconds,
            keys: self.entries.keys().cloned().collect(),
        }
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
