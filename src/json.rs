//! Lenient JSON unwrapping for response bodies that embed JSON as strings.

use serde_json::Value;

fn looks_wrapped(text: &str) -> bool {
    (text.starts_with('{') && text.ends_with('}'))
        || (text.starts_with('[') && text.ends_with(']'))
        || (text.len() >= 2 && text.starts_with('"') && text.ends_with('"'))
}

/// Parse `text` as JSON if it looks like JSON, then keep unwrapping any string
/// inside it that does too. Anything that fails to parse stays a (trimmed)
/// string.
pub fn loose_parse_str(text: &str) -> Value {
    let trimmed = text.trim();
    if looks_wrapped(trimmed) {
        if let Ok(parsed) = serde_json::from_str::<Value>(trimmed) {
            return loose_parse(parsed);
        }
    }
    Value::String(trimmed.to_string())
}

pub fn loose_parse(value: Value) -> Value {
    match value {
        Value::String(s) => loose_parse_str(&s),
        Value::Array(items) => Value::Array(items.into_iter().map(loose_parse).collect()),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, v)| (key, loose_parse(v)))
                .collect(),
        ),
        other => other,
    }
}
