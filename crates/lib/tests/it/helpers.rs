use keywalk::{Container, Value};

/// Create a test container resembling a field-name → column-type mapping.
pub fn setup_field_map() -> Container {
    Container::from_entries([
        ("id", "integer"),
        ("name", "text"),
        ("created_at", "timestamp"),
        ("active", "boolean"),
    ])
}

/// Create a test container with every value type, including a nested child.
pub fn setup_mixed_values() -> Container {
    let mut c = Container::new();
    c.set("null", Value::Null);
    c.set("flag", true);
    c.set("count", 3);
    c.set("ratio", 0.5);
    c.set("label", "x");
    c.set("child", Container::from_values([1, 2]));
    c
}

/// Assert that a container enumerates exactly the given keys, in order.
pub fn assert_key_order(container: &Container, expected: &[&str]) {
    let actual: Vec<String> = container.iter().map(|(k, _)| k.to_string()).collect();
    assert_eq!(actual, expected, "enumeration order mismatch");
}
