//! Error types for the normalization service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Process Error Enum ==
/// Unified error type for the normalization service.
#[derive(Error, Debug)]
pub enum ProcessError {
    /// No data was provided for processing
    #[error("No data provided for processing")]
    EmptyInput,

    /// String payload failed to parse as structured data
    #[error("Invalid JSON payload: {0}")]
    MalformedInput(String),

    /// Payload nesting exceeded the recursion guard
    #[error("Payload nesting exceeds the maximum depth of {0}")]
    DepthExceeded(usize),
}

// == IntoResponse Implementation ==
impl IntoResponse for ProcessError {
    fn into_response(self) -> Response {
        let status = match &self {
            ProcessError::EmptyInput => StatusCode::BAD_REQUEST,
            ProcessError::MalformedInput(_) => StatusCode::BAD_REQUEST,
            ProcessError::DepthExceeded(_) => StatusCode::UNPROCESSABLE_ENTITY,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the normalization service.
pub type Result<T> = std::result::Result<T, ProcessError>;
