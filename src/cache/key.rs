//! Cache Key Module
//!
//! Derives deterministic, content-addressed cache keys from an
//! (operation, payload) pair.

use serde_json::Value;
use sha2::{Digest, Sha256};

// == Key Derivation ==
/// Derives the cache key for a payload processed under an operation.
///
/// The payload is serialized to a canonical JSON form with object keys
/// sorted lexicographically at every nesting level, so two structurally
/// equal payloads produce the same key regardless of key insertion order.
/// The key is the hex-encoded SHA-256 digest of `operation:canonical`.
pub fn derive_key(operation: &str, payload: &Value) -> String {
    let mut canonical = String::new();
    write_canonical(payload, &mut canonical);

    let preimage = format!("{}:{}", operation, canonical);
    hex::encode(Sha256::digest(preimage.as_bytes()))
}

/// Writes the canonical JSON serialization of a payload into `out`.
///
/// Scalars use their standard JSON rendering; arrays keep element order;
/// object keys are emitted in sorted order at every level.
fn write_canonical(value: &Value, out: &mut String) {
    match value {
        Value::Array(items) => {
            out.push('[');
            for (index, item) in items.iter().enumerate() {
                if index > 0 {
                    out.push(',');
                }
                write_canonical(item, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            // Sort keys for deterministic ordering
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));

            out.push('{');
            for (index, (key, item)) in entries.into_iter().enumerate() {
                if index > 0 {
                    out.push(',');
                }
                out.push_str(&Value::String(key.clone()).to_string());
                out.push(':');
                write_canonical(item, out);
            }
            out.push('}');
        }
        // Null, Bool, Number and String render to valid JSON via Display
        _ => out.push_str(&value.to_string()),
    }
}
