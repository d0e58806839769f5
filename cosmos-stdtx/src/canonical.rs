//! Canonical (sorted, compact) JSON serialization of sign bytes.
//!
//! Signature verification on-chain recomputes these bytes from the decoded
//! transaction, so the output must match byte-for-byte: object keys are sorted
//! by their raw byte value at every depth, array order is preserved, and no
//! insignificant whitespace is emitted.
//!
//! Like Go's `encoding/json`, the characters `<`, `>`, `&`, U+2028 and U+2029
//! are written as `\uXXXX` escapes.

use crate::type_name::TypeName;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Recursively sort the keys of every object in the given value
pub fn sort_value(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            // `String` ordering is byte-wise, which is what Amino JSON expects
            let sorted = map
                .into_iter()
                .map(|(k, v)| (k, sort_value(v)))
                .collect::<BTreeMap<_, _>>();

            Value::Object(sorted.into_iter().collect::<Map<_, _>>())
        }
        Value::Array(values) => Value::Array(values.into_iter().map(sort_value).collect()),
        other => other,
    }
}

/// Serialize a value to canonical JSON bytes
pub fn to_bytes(value: &Value) -> Vec<u8> {
    to_string(value).into_bytes()
}

/// Serialize a value to a canonical JSON string
pub fn to_string(value: &Value) -> String {
    escape_html(&sort_value(value.clone()).to_string())
}

/// These characters only occur inside string literals of serialized JSON,
/// so they can be escaped in a single pass over the output
fn escape_html(json: &str) -> String {
    let mut escaped = String::with_capacity(json.len());

    for c in json.chars() {
        match c {
            '<' => escaped.push_str("\\u003c"),
            '>' => escaped.push_str("\\u003e"),
            '&' => escaped.push_str("\\u0026"),
            '\u{2028}' => escaped.push_str("\\u2028"),
            '\u{2029}' => escaped.push_str("\\u2029"),
            c => escaped.push(c),
        }
    }

    escaped
}

/// Wrap a message in its registered Amino JSON type envelope:
/// `{"type": <type name>, "value": <sorted fields>}`
pub fn type_wrap(type_name: &TypeName, value: Value) -> Value {
    let mut map = Map::new();
    map.insert("type".to_owned(), Value::String(type_name.to_string()));
    map.insert("value".to_owned(), sort_value(value));
    Value::Object(map)
}

/// Check whether every object in the value has strictly ascending keys
pub fn is_sorted(value: &Value) -> bool {
    match value {
        Value::Object(map) => {
            let keys = map.keys().collect::<Vec<_>>();
            keys.windows(2).all(|w| w[0].as_bytes() < w[1].as_bytes())
                && map.values().all(is_sorted)
        }
        Value::Array(values) => values.iter().all(is_sorted),
        _ => true,
    }
}
