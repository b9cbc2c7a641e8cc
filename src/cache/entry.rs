//! Cache Entry Module
//!
//! Defines the structure for individual memoized results.

use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::Value;

// == Cache Entry ==
/// A single memoized transformation result.
///
/// Entries carry no TTL of their own; the store compares their age against
/// the configured TTL at lookup time.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The cached result payload
    pub result: Value,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Store-assigned insertion counter, used as the eviction tie-break
    pub seq: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry stamped with the current time.
    ///
    /// # Arguments
    /// * `result` - The result payload to cache
    /// * `seq` - Insertion counter assigned by the store
    pub fn new(result: Value, seq: u64) -> Self {
        Self {
            result,
            created_at: current_timestamp_ms(),
            seq,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has outlived the given TTL.
    ///
    /// Boundary condition: an entry is expired once its age is greater than
    /// or equal to the TTL, so a result is never served at or past the
    /// moment the TTL fully elapses.
    pub fn is_expired(&self, ttl_seconds: u64) -> bool {
        self.age_ms() >= ttl_seconds.saturating_mul(1000)
    }

    // == Age ==
    /// Returns the entry's age in milliseconds.
    pub fn age_ms(&self) -> u64 {
        current_timestamp_ms().saturating_sub(self.created_at)
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new(json!({"a": 1}), 7);

        assert_eq!(entry.result, json!({"a": 1}));
        assert_eq!(entry.seq, 7);
        assert!(!entry.is_expired(300));
    }

    #[test]
    fn test_entry_age_starts_near_zero() {
        let entry = CacheEntry::new(json!(null), 0);
        assert!(entry.age_ms() < 1000);
    }

    #[test]
    fn test_entry_expiration() {
        // Create entry that must expire after 1 second
        let entry = CacheEntry::new(json!("value"), 0);

        assert!(!entry.is_expired(1));

        // Wait for expiration
        sleep(Duration::from_millis(1100));

        assert!(entry.is_expired(1));
    }

    #[test]
    fn test_expiration_boundary_condition() {
        // Entry created exactly one TTL ago
        let entry = CacheEntry {
            result: json!("value"),
            created_at: current_timestamp_ms() - 1000,
            seq: 0,
        };

        // Age >= TTL means expired
        assert!(entry.is_expired(1), "Entry should be expired at boundary");
        assert!(!entry.is_expired(2));
    }
}
