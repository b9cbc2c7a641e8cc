//! Request DTOs for the processing API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;
use serde_json::Value;

/// Request body for the process operation (POST /process)
///
/// # Fields
/// - `data`: The payload to process, or a string holding a JSON-encoded payload
/// - `operation`: The routine to apply (passthrough if not specified)
#[derive(Debug, Clone, Deserialize)]
pub struct ProcessRequest {
    /// The payload to process
    #[serde(default)]
    pub data: Value,
    /// The operation to apply
    #[serde(default = "default_operation")]
    pub operation: String,
}

fn default_operation() -> String {
    "default".to_string()
}
