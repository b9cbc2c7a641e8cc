//! Normalize Module
//!
//! Recursive cleanup of raw payloads: lowercases mapping keys and
//! coerces string-typed mapping values into typed scalars.

use serde_json::{Map, Value};

use crate::error::{ProcessError, Result};
use crate::ops::coerce::{try_parse_bool, try_parse_number};
use crate::ops::MAX_DEPTH;

// == Normalize ==
/// Normalizes a payload tree.
///
/// Mapping keys are lowercased and string-typed mapping values are
/// coerced to booleans or numbers where they spell one, falling back to
/// a trimmed lowercase string. Containers are walked recursively.
/// Strings that are not mapping values pass through untouched, as do
/// non-string scalars.
///
/// # Arguments
/// * `data` - The payload to normalize
///
/// # Returns
/// The normalized payload, or an error if nesting exceeds the depth limit
pub fn normalize(data: &Value) -> Result<Value> {
    normalize_at(data, 0)
}

fn normalize_at(data: &Value, depth: usize) -> Result<Value> {
    if depth > MAX_DEPTH {
        return Err(ProcessError::DepthExceeded(MAX_DEPTH));
    }

    match data {
        Value::Object(map) => {
            let mut normalized = Map::new();
            for (key, value) in map {
                let value = match value {
                    Value::String(text) => normalize_string(text),
                    Value::Object(_) | Value::Array(_) => normalize_at(value, depth + 1)?,
                    _ => value.clone(),
                };
                normalized.insert(key.to_lowercase(), value);
            }
            Ok(Value::Object(normalized))
        }
        Value::Array(items) => {
            let normalized = items
                .iter()
                .map(|item| normalize_at(item, depth + 1))
                .collect::<Result<Vec<_>>>()?;
            Ok(Value::Array(normalized))
        }
        _ => Ok(data.clone()),
    }
}

// == String Coercion ==
/// Trims a string value and coerces it to the most specific scalar it
/// spells.
///
/// Boolean tokens win over digits (so `"1"` becomes `true`, not `1`)
/// and anything unrecognized becomes a trimmed lowercase string.
/// Trimming happens before token matching, which makes a second pass
/// over the output a no-op.
fn normalize_string(text: &str) -> Value {
    let trimmed = text.trim();

    if let Some(flag) = try_parse_bool(trimmed) {
        return Value::Bool(flag);
    }
    if let Some(number) = try_parse_number(trimmed) {
        return Value::Number(number);
    }
    Value::String(trimmed.to_lowercase())
}
