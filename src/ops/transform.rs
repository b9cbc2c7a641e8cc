//! Transform Module
//!
//! Recursive key and value rewriting: camelCase mapping keys become
//! snake_case, date-like string values are canonicalized, and URL
//! string values expand into url/domain mappings.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{json, Map, Value};
use url::Url;

use crate::error::{ProcessError, Result};
use crate::ops::coerce::try_parse_timestamp;
use crate::ops::MAX_DEPTH;

/// Boundary before a capitalized run, as in `XMLHttp` -> `XML_Http`
static CAMEL_RUN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.)([A-Z][a-z]+)").expect("Invalid camel run regex"));

/// Boundary between a lowercase letter or digit and a capital
static LOWER_UPPER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("Invalid lower-upper regex"));

/// Leading shapes a string must have to be treated as date-like
static DATE_SHAPE_REGEXES: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r"^\d{4}-\d{2}-\d{2}").expect("Invalid date shape regex"),
        Regex::new(r"^\d{2}/\d{2}/\d{4}").expect("Invalid date shape regex"),
        Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}").expect("Invalid date shape regex"),
    ]
});

// == Transform ==
/// Rewrites a payload tree.
///
/// Mapping keys are rewritten from camelCase to snake_case and
/// string-typed mapping values are rewritten by content: date-like
/// strings are re-emitted in canonical ISO 8601 form when they parse,
/// URL strings become `{url, domain}` mappings. Sequences recurse
/// element-wise, so strings sitting directly in a sequence pass
/// through untouched, as do non-string scalars.
///
/// # Arguments
/// * `data` - The payload to transform
///
/// # Returns
/// The transformed payload, or an error if nesting exceeds the depth limit
pub fn transform(data: &Value) -> Result<Value> {
    transform_at(data, 0)
}

fn transform_at(data: &Value, depth: usize) -> Result<Value> {
    if depth > MAX_DEPTH {
        return Err(ProcessError::DepthExceeded(MAX_DEPTH));
    }

    match data {
        Value::Object(map) => {
            let mut transformed = Map::new();
            for (key, value) in map {
                transformed.insert(transform_key(key), transform_value(value, depth)?);
            }
            Ok(Value::Object(transformed))
        }
        Value::Array(items) => {
            let transformed = items
                .iter()
                .map(|item| transform_at(item, depth + 1))
                .collect::<Result<Vec<_>>>()?;
            Ok(Value::Array(transformed))
        }
        _ => Ok(data.clone()),
    }
}

// == Key Rewriting ==
/// Converts a camelCase key to snake_case.
///
/// An underscore is inserted before each capitalized run and before a
/// capital that follows a lowercase letter or digit, then the whole key
/// is lowercased. Keys already in snake_case come back unchanged.
fn transform_key(key: &str) -> String {
    let with_runs = CAMEL_RUN_REGEX.replace_all(key, "${1}_${2}");
    LOWER_UPPER_REGEX
        .replace_all(&with_runs, "${1}_${2}")
        .to_lowercase()
}

// == Value Rewriting ==
fn transform_value(value: &Value, depth: usize) -> Result<Value> {
    match value {
        Value::String(text) => Ok(transform_string(text)),
        Value::Object(_) | Value::Array(_) => transform_at(value, depth + 1),
        _ => Ok(value.clone()),
    }
}

/// Rewrites a string mapping value by content.
///
/// Date-like strings that parse are canonicalized, date-like strings
/// that do not parse stay as they are. URL strings expand into a
/// `{url, domain}` mapping with an empty domain when the URL does not
/// parse. Everything else passes through.
fn transform_string(text: &str) -> Value {
    if is_date_like(text) {
        return match try_parse_timestamp(text) {
            Some(timestamp) => Value::String(timestamp.canonical()),
            None => Value::String(text.to_string()),
        };
    }

    if text.starts_with("http://") || text.starts_with("https://") {
        return json!({
            "url": text,
            "domain": extract_domain(text),
        });
    }

    Value::String(text.to_string())
}

/// Tests whether a string starts with one of the date shapes.
fn is_date_like(text: &str) -> bool {
    DATE_SHAPE_REGEXES.iter().any(|regex| regex.is_match(text))
}

/// Pulls the host out of a URL, or an empty string when it has none.
fn extract_domain(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(str::to_string))
        .unwrap_or_default()
}
