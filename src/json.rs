//! Building [`Value`]s from JSON documents.

use super::model::{Array, Object, Value};

/// Convert a parsed JSON document into a [`Value`].
///
/// Every JSON array and object becomes a fresh container, so nothing in the
/// result is shared.
pub fn from_json(json: &serde_json::Value) -> Value {
    use serde_json::Value as Json;
    match json {
        Json::Null => Value::Null,
        Json::Bool(b) => Value::Bool(*b),
        Json::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
        Json::String(s) => Value::Str(s.as_str().into()),
        Json::Array(elements) => Array::new(elements.iter().map(from_json)).into(),
        Json::Object(members) => {
            let object = Object::new();
            for (name, member) in members {
                object.set(name.as_str(), from_json(member));
            }
            object.into()
        },
    }
}

/// Parse `text` as JSON and convert it into a [`Value`].
pub fn parse(text: &str) -> Result<Value, serde_json::Error> {
    Ok(from_json(&serde_json::from_str(text)?))
}

// ----------------------------------------------------------------------------
