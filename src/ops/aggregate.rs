//! Aggregate Module
//!
//! Summarizes a sequence payload: per-type histogram plus numeric and
//! string statistics.

use std::collections::{HashMap, HashSet};

use serde_json::{json, Map, Number, Value};

// == Aggregate ==
/// Aggregates a sequence into count, type histogram, and statistics.
///
/// Non-sequence payloads produce an error-shaped object rather than a
/// failure. Numeric statistics cover number elements only (booleans do
/// not count), string statistics cover string elements only, and each
/// block stays an empty object when it has no inputs.
pub fn aggregate(data: &Value) -> Value {
    let items = match data {
        Value::Array(items) => items,
        _ => return json!({"error": "Data must be a list for aggregation"}),
    };

    let mut types: HashMap<&'static str, u64> = HashMap::new();
    let mut numbers: Vec<&Number> = Vec::new();
    let mut strings: Vec<&str> = Vec::new();

    for item in items {
        *types.entry(type_name_of(item)).or_insert(0) += 1;

        match item {
            Value::Number(n) => numbers.push(n),
            Value::String(s) => strings.push(s),
            _ => {}
        }
    }

    json!({
        "count": items.len(),
        "types": types,
        "numeric_stats": numeric_stats(&numbers),
        "string_stats": string_stats(&strings),
    })
}

/// Maps a value to its histogram bucket name.
fn type_name_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "int"
            } else {
                "float"
            }
        }
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}

// == Numeric Statistics ==
/// Computes min, max, avg, and sum over the number elements.
///
/// Min and max return the original elements, so integers stay integers.
/// The sum stays an integer while every element fits one and the total
/// does not overflow, otherwise it degrades to a float. Totals that do
/// not fit a finite JSON number are omitted.
fn numeric_stats(numbers: &[&Number]) -> Value {
    if numbers.is_empty() {
        return json!({});
    }

    let mut min = numbers[0];
    let mut max = numbers[0];
    for &n in &numbers[1..] {
        if as_f64(n) < as_f64(min) {
            min = n;
        }
        if as_f64(n) > as_f64(max) {
            max = n;
        }
    }

    let mut int_sum: Option<i64> = Some(0);
    for &n in numbers {
        int_sum = match (int_sum, n.as_i64()) {
            (Some(acc), Some(v)) => acc.checked_add(v),
            _ => None,
        };
        if int_sum.is_none() {
            break;
        }
    }

    let mut stats = Map::new();
    stats.insert("min".to_string(), Value::Number(min.clone()));
    stats.insert("max".to_string(), Value::Number(max.clone()));

    let float_sum = match int_sum {
        Some(total) => {
            stats.insert("sum".to_string(), json!(total));
            total as f64
        }
        None => {
            let total: f64 = numbers.iter().map(|n| as_f64(n)).sum();
            if let Some(number) = Number::from_f64(total) {
                stats.insert("sum".to_string(), Value::Number(number));
            }
            total
        }
    };

    let avg = float_sum / numbers.len() as f64;
    if let Some(number) = Number::from_f64(avg) {
        stats.insert("avg".to_string(), Value::Number(number));
    }

    Value::Object(stats)
}

fn as_f64(n: &Number) -> f64 {
    n.as_f64().unwrap_or(0.0)
}

// == String Statistics ==
/// Computes total length, average length, and distinct count over the
/// string elements. Lengths are in characters, not bytes.
fn string_stats(strings: &[&str]) -> Value {
    if strings.is_empty() {
        return json!({});
    }

    let total_length: usize = strings.iter().map(|s| s.chars().count()).sum();
    let unique: HashSet<&str> = strings.iter().copied().collect();

    json!({
        "total_length": total_length,
        "avg_length": total_length as f64 / strings.len() as f64,
        "unique_count": unique.len(),
    })
}
