use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Topic used when the caller supplies none.
pub const DEFAULT_TOPIC: &str = "general";

/// One entry of a multi-topic response.
///
/// `topic` is echoed back exactly as the caller sent it, which is usually a
/// string but not necessarily.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TopicResult {
    pub topic: Value,
    pub data: Value,
}

impl TopicResult {
    pub fn new(topic: Value, data: Value) -> TopicResult {
        TopicResult { topic, data }
    }

    /// Number of hits reported by the upstream, 0 when absent.
    pub fn total_items(&self) -> u64 {
        self.data
            .get("totalItems")
            .and_then(Value::as_u64)
            .unwrap_or(0)
    }
}

/// Text form of a topic value, the way it is spliced into the upstream URL.
///
/// Follows JavaScript string conversion: whole numbers drop their fraction,
/// arrays join their items with commas (nulls become empty) and objects
/// collapse to `[object Object]`.
pub fn topic_text(topic: &Value) -> String {
    match topic {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_text(n),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => topic_text(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn number_text(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f == 0.0 => "0".to_string(),
        Some(f) if f.fract() == 0.0 && f.abs() < 1e21 => format!("{f:.0}"),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

/// JavaScript-style truthiness, used to decide whether `topics` was supplied.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
