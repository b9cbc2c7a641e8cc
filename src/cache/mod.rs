//! Cache Module
//!
//! Provides content-keyed in-memory caching with TTL expiration and
//! oldest-first eviction.

mod entry;
mod key;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::CacheEntry;
pub use key::derive_key;
pub use stats::CacheStats;
pub use store::CacheStore;
