//! Cache Statistics Module
//!
//! Read-only snapshot of the cache contents and configuration.

use serde::Serialize;

// == Cache Stats ==
/// Point-in-time snapshot of the cache state.
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    /// Current number of entries in the cache
    pub size: usize,
    /// Maximum number of entries the cache can hold
    pub max_size: usize,
    /// Time-to-live in seconds for cached results
    pub ttl_seconds: u64,
    /// Keys currently held, in unspecified order
    pub keys: Vec<String>,
}
