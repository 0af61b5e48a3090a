//! Serialization boundary tests: JSON surface, plain-structure round trips
//! and the binary wire form.

use keywalk::Container;
use serde_json::json;

use crate::helpers::*;

#[test]
fn test_plain_round_trip_ignores_cursor_position() {
    let plain = json!({"a": [1, 2], "b": {"x": true}, "c": null});
    let mut c = Container::from_plain(&plain).unwrap();
    c.next().next();
    assert_eq!(c.to_plain(), plain);
}

#[test]
fn test_json_text_round_trip() {
    let mut fields = setup_field_map();
    fields.remove("active");

    let text = fields.to_json().unwrap();
    assert_eq!(text, r#"{"id":"integer","name":"text","created_at":"timestamp"}"#);

    let parsed = Container::from_json(&text).unwrap();
    assert_eq!(parsed, fields);
}

#[test]
fn test_from_json_rejects_scalars() {
    let err = Container::from_json("42").unwrap_err();
    assert!(err.is_invalid_input());

    let err = Container::from_json("not even json").unwrap_err();
    assert!(err.is_serialization_error());
}

#[test]
fn test_wire_round_trip_survives_a_sort() {
    let mut c = setup_field_map();
    c.sort_by_key_desc();
    let order_before: Vec<String> = c.iter().map(|(k, _)| k.to_string()).collect();

    let decoded = Container::from_bytes(&c.to_bytes().unwrap()).unwrap();
    let order_after: Vec<String> = decoded.iter().map(|(k, _)| k.to_string()).collect();

    assert_eq!(order_before, order_after);
    assert_eq!(decoded.pos(), Some(0));
    assert_eq!(decoded.to_plain(), c.to_plain());
}

#[test]
fn test_nested_wire_round_trip() {
    let mut c = setup_mixed_values();
    c.set("deep", json!({"list": ["a", {"k": 1}]}));

    let decoded = Container::from_bytes(&c.to_bytes().unwrap()).unwrap();
    assert_eq!(decoded, c);

    let deep = decoded.get("deep").and_then(|v| v.as_container()).unwrap();
    let list = deep.get("list").and_then(|v| v.as_container()).unwrap();
    assert_eq!(list.len(), 2);
}

#[test]
fn test_pretty_json_is_parseable() {
    let c = setup_field_map();
    let pretty = c.to_json_pretty().unwrap();
    assert_eq!(Container::from_json(&pretty).unwrap(), c);
}
