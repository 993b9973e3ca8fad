//! Request-body normalization.
//!
//! The create/delete payload reaches the handler in three observed shapes
//! depending on the transport: a structured JSON object, a JSON string whose
//! contents are themselves JSON (double-encoded), or raw unparsed bytes.
//! `normalize` is the single deserialization step at the handler edge: it
//! always yields a JSON object, collapsing anything unusable to `{}` so that
//! the decision to reject lives entirely in field validation.

use serde_json::{Map, Value};

fn empty() -> Value {
    Value::Object(Map::new())
}

/// Normalize a raw request body into a JSON object. Never fails: empty,
/// non-UTF-8, unparseable, and non-object payloads all become `{}`.
pub fn normalize(raw: &[u8]) -> Value {
    let text = match std::str::from_utf8(raw) {
        Ok(t) => t.trim(),
        Err(_) => return empty(),
    };
    if text.is_empty() {
        return empty();
    }

    let mut parsed: Value = match serde_json::from_str(text) {
        Ok(v) => v,
        Err(_) => return empty(),
    };

    // Double-encoded body: a JSON string holding the real object.
    if let Value::String(inner) = &parsed {
        parsed = serde_json::from_str(inner).unwrap_or(Value::Null);
    }

    if parsed.is_object() {
        parsed
    } else {
        empty()
    }
}

/// A required string field: present, a string, and non-empty after trimming.
pub fn field<'a>(body: &'a Value, name: &str) -> Option<&'a str> {
    body.get(name)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// The `id` field of a delete body. Revisions of the client sent it both as
/// a JSON string and as a bare number, so accept either.
pub fn id_field(body: &Value) -> Option<String> {
    match body.get("id") {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}
