//! Filter Module
//!
//! Drops unwanted elements from a sequence payload based on per-type
//! rules and a mapping inclusion cascade.

use chrono::{Duration, Utc};
use serde_json::{Map, Value};

use crate::ops::coerce::try_parse_timestamp;

/// Status values that force inclusion
const ACTIVE_STATUSES: [&str; 3] = ["active", "enabled", "valid"];

/// Status values that force exclusion
const INACTIVE_STATUSES: [&str; 3] = ["inactive", "disabled", "invalid"];

// == Filter ==
/// Filters the elements of a sequence payload.
///
/// Non-sequence payloads pass through unchanged. Per element: mappings
/// are kept when the inclusion cascade says so, strings are kept when
/// they contain something other than whitespace, numbers are kept when
/// strictly positive, and every other type is always kept. Elements are
/// not filtered recursively, a nested sequence is kept whole.
pub fn filter(data: &Value) -> Value {
    let items = match data {
        Value::Array(items) => items,
        _ => return data.clone(),
    };

    let filtered: Vec<Value> = items
        .iter()
        .filter(|item| should_keep(item))
        .cloned()
        .collect();
    Value::Array(filtered)
}

fn should_keep(item: &Value) -> bool {
    match item {
        Value::Object(map) => should_include_dict(map),
        Value::String(text) => !text.trim().is_empty(),
        Value::Number(n) => n.as_f64().unwrap_or(0.0) > 0.0,
        _ => true,
    }
}

// == Inclusion Cascade ==
/// Decides whether a mapping element stays in the output.
///
/// Rules are tried in order and each one either decides or falls
/// through: a recognized `status` value decides directly, a numerically
/// parseable `score` decides against a 0.5 threshold, a parseable
/// `created_at` timestamp decides by age under 365 days. When no rule
/// decides, the element is included.
fn should_include_dict(item: &Map<String, Value>) -> bool {
    if let Some(status) = item.get("status") {
        if let Some(text) = status.as_str() {
            if ACTIVE_STATUSES.contains(&text) {
                return true;
            }
            if INACTIVE_STATUSES.contains(&text) {
                return false;
            }
        }
    }

    if let Some(score) = item.get("score") {
        if let Some(score) = parse_score(score) {
            return score >= 0.5;
        }
    }

    if let Some(created) = item.get("created_at") {
        if let Some(text) = created.as_str() {
            if let Some(timestamp) = try_parse_timestamp(text) {
                let age = Utc::now().naive_utc().signed_duration_since(timestamp.naive_utc());
                return age < Duration::days(365);
            }
        }
    }

    true
}

/// Reads a score as a float from either a number or a numeric string.
fn parse_score(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_filter_mixed_sequence() {
        let data = json!([{"status": "active"}, {"status": "disabled"}, 5, -3, ""]);
        let result = filter(&data);
        assert_eq!(result, json!([{"status": "active"}, 5]));
    }

    #[test]
    fn test_filter_non_sequence_passes_through() {
        assert_eq!(filter(&json!({"a": 1})), json!({"a": 1}));
        assert_eq!(filter(&json!("text")), json!("text"));
        assert_eq!(filter(&json!(42)), json!(42));
    }

    #[test]
    fn test_filter_strings_drop_empty_and_whitespace() {
        let data = json!(["keep", "", "   ", "\t\n", "also keep"]);
        let result = filter(&data);
        assert_eq!(result, json!(["keep", "also keep"]));
    }

    #[test]
    fn test_filter_numbers_keep_strictly_positive() {
        let data = json!([5, 0.5, 0, 0.0, -3, -0.1]);
        let result = filter(&data);
        assert_eq!(result, json!([5, 0.5]));
    }

    #[test]
    fn test_filter_other_types_always_kept() {
        let data = json!([null, true, false, [-5, 0]]);
        let result = filter(&data);
        assert_eq!(result, json!([null, true, false, [-5, 0]]));
    }

    #[test]
    fn test_filter_status_values_decide() {
        let keep = json!([
            {"status": "active"},
            {"status": "enabled"},
            {"status": "valid"}
        ]);
        assert_eq!(filter(&keep), keep);

        let drop = json!([
            {"status": "inactive"},
            {"status": "disabled"},
            {"status": "invalid"}
        ]);
        assert_eq!(filter(&drop), json!([]));
    }

    #[test]
    fn test_filter_unrecognized_status_falls_through() {
        // No other fields, so the cascade ends at the default include
        let data = json!([{"status": "pending"}, {"status": 5}]);
        let result = filter(&data);
        assert_eq!(result, data);
    }

    #[test]
    fn test_filter_status_falls_through_to_score() {
        let data = json!([{"status": "pending", "score": 0.1}]);
        assert_eq!(filter(&data), json!([]));
    }

    #[test]
    fn test_filter_score_threshold() {
        let data = json!([{"score": 0.5}, {"score": 0.49}, {"score": "0.7"}, {"score": " 2 "}]);
        let result = filter(&data);
        assert_eq!(result, json!([{"score": 0.5}, {"score": "0.7"}, {"score": " 2 "}]));
    }

    #[test]
    fn test_filter_unparseable_score_falls_through() {
        let data = json!([{"score": "high"}, {"score": null}]);
        let result = filter(&data);
        assert_eq!(result, data);
    }

    #[test]
    fn test_filter_status_decides_before_score() {
        let data = json!([{"status": "active", "score": 0.1}]);
        assert_eq!(filter(&data), data);
    }

    #[test]
    fn test_filter_created_at_recency() {
        let recent = (Utc::now() - Duration::days(10)).format("%Y-%m-%d").to_string();
        let old = (Utc::now() - Duration::days(400)).format("%Y-%m-%d").to_string();
        let future = (Utc::now() + Duration::days(10)).format("%Y-%m-%d").to_string();

        let data = json!([
            {"created_at": recent},
            {"created_at": old},
            {"created_at": future}
        ]);
        let result = filter(&data);
        assert_eq!(
            result,
            json!([{"created_at": recent}, {"created_at": future}])
        );
    }

    #[test]
    fn test_filter_unparseable_created_at_falls_through() {
        let data = json!([{"created_at": "not a date"}, {"created_at": 12345}]);
        let result = filter(&data);
        assert_eq!(result, data);
    }

    #[test]
    fn test_filter_score_decides_before_created_at() {
        let old = (Utc::now() - Duration::days(400)).format("%Y-%m-%d").to_string();
        let data = json!([{"score": 0.9, "created_at": old}]);
        assert_eq!(filter(&data), data);
    }
}
