use serde_json::{Map, Value};

/// Removes keys whose value is null, an empty string or an empty list.
///
/// Nested objects are pruned as well. List elements are never removed, so
/// the positions inside lists stay stable.
#[must_use]
pub fn prune(bag: Map<String, Value>) -> Map<String, Value> {
    bag.into_iter()
        .map(|(key, value)| (key, prune_value(value)))
        .filter(|(_, value)| !is_empty(value))
        .collect()
}

fn prune_value(value: Value) -> Value {
    match value {
        Value::Object(object) => Value::Object(prune(object)),
        Value::Array(values) => Value::Array(values.into_iter().map(prune_value).collect()),
        value => value,
    }
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(values) => values.is_empty(),
        Value::Bool(_) | Value::Number(_) | Value::Object(_) => false,
    }
}
