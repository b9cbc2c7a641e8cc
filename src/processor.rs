//! Processor Module
//!
//! The dispatch engine: routes a payload through the routine named by
//! the operation, memoizing results in the cache store under a
//! content-derived key.

use serde_json::Value;
use tracing::{error, info, warn};

use crate::cache::{derive_key, CacheStats, CacheStore};
use crate::error::{ProcessError, Result};
use crate::ops::{aggregate, filter, normalize, transform};

// == Processor ==
/// Cache-augmented payload processor.
///
/// Each call derives a key from the operation and payload, serves a
/// fresh cached result when one exists, and otherwise runs the routine
/// and stores its result. Callers needing concurrent access wrap the
/// whole processor in their own lock, a `process` call is one critical
/// section from lookup through insert.
pub struct Processor {
    cache: CacheStore,
}

impl Processor {
    // == Constructor ==
    /// Creates a processor with the given cache capacity and TTL.
    ///
    /// # Arguments
    /// * `max_cache_size` - Maximum number of memoized results to keep
    /// * `cache_ttl_seconds` - Seconds a memoized result stays servable
    pub fn new(max_cache_size: usize, cache_ttl_seconds: u64) -> Self {
        Self {
            cache: CacheStore::new(max_cache_size, cache_ttl_seconds),
        }
    }

    // == Process ==
    /// Processes a payload under the named operation.
    ///
    /// Empty payloads and unparseable string payloads yield `Ok(None)`
    /// rather than an error, both are logged. String payloads are parsed
    /// into structured form first and processed as what they contain.
    /// Unknown operations, including `"default"`, pass the payload
    /// through unchanged.
    ///
    /// # Arguments
    /// * `data` - The payload, or a string holding a JSON-encoded payload
    /// * `operation` - One of `normalize`, `aggregate`, `filter`,
    ///   `transform`, or anything else for passthrough
    ///
    /// # Returns
    /// The processed result, `None` for empty or unparseable input, or
    /// an error when nesting exceeds the depth limit
    pub fn process(&mut self, data: Value, operation: &str) -> Result<Option<Value>> {
        let data = match coerce_input(data) {
            Ok(data) => data,
            Err(ProcessError::EmptyInput) => {
                warn!("No data provided for processing");
                return Ok(None);
            }
            Err(ProcessError::MalformedInput(detail)) => {
                error!("Invalid JSON string provided: {}", detail);
                return Ok(None);
            }
            Err(err) => return Err(err),
        };

        let key = derive_key(operation, &data);
        if let Some(cached) = self.cache.lookup(&key) {
            info!("Returning cached result for key: {}", key);
            return Ok(Some(cached));
        }

        let result = match operation {
            "normalize" => normalize(&data)?,
            "aggregate" => aggregate(&data),
            "filter" => filter(&data),
            "transform" => transform(&data)?,
            _ => data,
        };

        self.cache.insert(key, result.clone());
        Ok(Some(result))
    }

    // == Cache Management ==
    /// Empties the result cache.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
        info!("Cache cleared");
    }

    /// Returns a snapshot of the result cache.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

// == Input Coercion ==
/// Validates the raw input and parses string payloads.
///
/// Emptiness is judged on the value as given, before any parsing: null,
/// the empty string, and empty containers are empty. A non-empty string
/// is then parsed as JSON, so the string `"[]"` is processable even
/// though a bare empty sequence is not.
fn coerce_input(data: Value) -> Result<Value> {
    if is_empty_payload(&data) {
        return Err(ProcessError::EmptyInput);
    }

    match data {
        Value::String(text) => serde_json::from_str(&text)
            .map_err(|err| ProcessError::MalformedInput(err.to_string())),
        other => Ok(other),
    }
}

/// Structural emptiness check. Zero and false are values, not absence.
fn is_empty_payload(data: &Value) -> bool {
    match data {
        Value::Null => true,
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}
