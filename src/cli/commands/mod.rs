pub mod auth;
pub mod clients;
pub mod contacts;
pub mod newsletter;
pub mod projects;

use serde_json::{Map, Value};

/// Collect the flags a user actually passed into a JSON object, skipping unset ones
pub(crate) fn fields_from(pairs: &[(&str, Option<String>)]) -> Value {
    let map: Map<String, Value> = pairs
        .iter()
        .filter_map(|(key, value)| value.as_ref().map(|v| (key.to_string(), Value::String(v.clone()))))
        .collect();
    Value::Object(map)
}
