/// Input validation utilities
use serde_json::Value;

/// Whether a JSON value counts as "not provided"
///
/// `null`, `false`, zero and `""` are falsy. Everything else, including
/// whitespace-only strings, arrays and objects, counts as provided.
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_none_or(|f| f == 0.0 || f.is_nan()),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Returns the field verbatim when it is present and not falsy
pub fn required_field(body: &Value, key: &str) -> Option<Value> {
    body.get(key).filter(|v| !is_falsy(v)).cloned()
}

/// Returns the value when it is set and non-empty
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
