use serde_json::{json, Map, Value};

/// Unwrap a JSON object literal into its mapping
///
/// Panics if `value` is not an object; only used on fixtures.
#[allow(dead_code)]
pub fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("fixture is not an object: {}", other),
    }
}

/// The record used by the projection scenarios
#[allow(dead_code)]
pub fn test_record() -> Map<String, Value> {
    object(json!({
        "id": 1,
        "name": "My Test",
        "secret": "bacon",
    }))
}

/// A configuration-style tree with nested mappings, sequences and falsy leaves
#[allow(dead_code)]
pub fn nested_config() -> Value {
    json!({
        "server": {
            "host": "localhost",
            "port": 0,
            "tls": null,
            "debug": false,
            "banner": "",
        },
        "items": [
            {"id": 2, "tags": ["a", "b"]},
            {"id": 3, "tags": []},
        ],
    })
}
