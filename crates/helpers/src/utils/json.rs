//! Helpers for building normalized JSON objects.

use serde_json::{Map, Value};

/// Build `{ "type": tag, ...fields }`.
///
/// Keys from `fields` are applied after `type`, so a `type` inside `fields`
/// replaces the outer tag while keeping the first position in the object.
/// Non-object `fields` contribute nothing.
pub fn tagged(tag: &str, fields: Value) -> Value {
    let mut object = Map::new();
    object.insert("type".to_string(), Value::String(tag.to_string()));

    if let Value::Object(fields) = fields {
        for (key, value) in fields {
            object.insert(key, value);
        }
    }

    Value::Object(object)
}

/// Insert `key` only when a value is present
pub fn insert_some(object: &mut Map<String, Value>, key: &str, value: Option<Value>) {
    if let Some(value) = value {
        object.insert(key.to_string(), value);
    }
}
