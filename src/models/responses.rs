//! Response DTOs for the processing API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;
use serde_json::Value;

use crate::cache::CacheStats;

/// Response body for the process operation (POST /process)
#[derive(Debug, Clone, Serialize)]
pub struct ProcessResponse {
    /// The operation that was applied
    pub operation: String,
    /// The processing result, null when the input was empty or unparseable
    pub result: Value,
}

impl ProcessResponse {
    /// Creates a new ProcessResponse
    pub fn new(operation: impl Into<String>, result: Value) -> Self {
        Self {
            operation: operation.into(),
            result,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Current number of entries in the cache
    pub size: usize,
    /// Maximum number of entries the cache can hold
    pub max_size: usize,
    /// Time-to-live applied to cached results, in seconds
    pub ttl_seconds: u64,
    /// Keys currently present in the cache
    pub keys: Vec<String>,
}

impl StatsResponse {
    /// Creates a new StatsResponse from a cache snapshot
    pub fn new(stats: CacheStats) -> Self {
        Self {
            size: stats.size,
            max_size: stats.max_size,
            ttl_seconds: stats.ttl_seconds,
            keys: stats.keys,
        }
    }
}

/// Response body for the cache clear operation (DELETE /cache)
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    /// Success message
    pub message: String,
}

impl ClearResponse {
    /// Creates a ClearResponse confirming the cache was emptied
    pub fn cleared() -> Self {
        Self {
            message: "Cache cleared successfully".to_string(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_process_response_serialize() {
        let resp = ProcessResponse::new("normalize", json!({"a": true}));
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("normalize"));
        assert!(json.contains("result"));
    }

    #[test]
    fn test_process_response_null_result() {
        let resp = ProcessResponse::new("normalize", Value::Null);
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"result\":null"));
    }

    #[test]
    fn test_stats_response_from_snapshot() {
        let stats = CacheStats {
            size: 2,
            max_size: 100,
            ttl_seconds: 300,
            keys: vec!["k1".to_string(), "k2".to_string()],
        };
        let resp = StatsResponse::new(stats);
        assert_eq!(resp.size, 2);
        assert_eq!(resp.max_size, 100);
        assert_eq!(resp.ttl_seconds, 300);
        assert_eq!(resp.keys.len(), 2);
    }

    #[test]
    fn test_clear_response_serialize() {
        let resp = ClearResponse::cleared();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("cleared"));
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }
}
