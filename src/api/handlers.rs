//! API Handlers
//!
//! HTTP request handlers for each processing endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{extract::State, Json};
use serde_json::Value;

use crate::error::Result;
use crate::models::{
    ClearResponse, HealthResponse, ProcessRequest, ProcessResponse, StatsResponse,
};
use crate::processor::Processor;

/// Application state shared across all handlers.
///
/// Contains the processor wrapped in Arc<RwLock<>> for thread-safe access.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe processor
    pub processor: Arc<RwLock<Processor>>,
}

impl AppState {
    /// Creates a new AppState with the given processor.
    pub fn new(processor: Processor) -> Self {
        Self {
            processor: Arc::new(RwLock::new(processor)),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Initializes the processor with cache parameters from the Config.
    pub fn from_config(config: &crate::config::Config) -> Self {
        let processor = Processor::new(config.max_cache_size, config.cache_ttl_seconds);
        Self::new(processor)
    }
}

/// Handler for POST /process
///
/// Runs the requested operation over the payload, serving memoized
/// results where available. A null result means the input was empty or
/// unparseable.
pub async fn process_handler(
    State(state): State<AppState>,
    Json(req): Json<ProcessRequest>,
) -> Result<Json<ProcessResponse>> {
    // Hold the write lock across the whole lookup-compute-insert sequence
    let mut processor = state.processor.write().await;
    let result = processor.process(req.data, &req.operation)?;

    Ok(Json(ProcessResponse::new(
        req.operation,
        result.unwrap_or(Value::Null),
    )))
}

/// Handler for GET /stats
///
/// Returns a snapshot of the result cache.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    // Acquire read lock for stats
    let processor = state.processor.read().await;
    let stats = processor.cache_stats();

    Json(StatsResponse::new(stats))
}

/// Handler for DELETE /cache
///
/// Empties the result cache.
pub async fn clear_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    // Acquire write lock to clear
    let mut processor = state.processor.write().await;
    processor.clear_cache();

    Json(ClearResponse::cleared())
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
