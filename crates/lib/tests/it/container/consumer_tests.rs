//! Consumer-level workflows: the container as an ordered field map and as a
//! growable result set, which is all a persistence layer ever needs.

use keywalk::{Container, Value};

use crate::helpers::*;

#[test]
fn test_field_map_walk_emits_columns_in_declaration_order() {
    let mut fields = setup_field_map();

    let mut columns = Vec::new();
    fields.rewind();
    while let Some(key) = fields.current_key().cloned() {
        let column_type = fields
            .current()
            .and_then(|v| v.as_text())
            .expect("field map values are type names");
        columns.push(format!("{key} {column_type}"));
        fields.next();
    }

    assert_eq!(
        columns,
        [
            "id integer",
            "name text",
            "created_at timestamp",
            "active boolean",
        ]
    );
}

#[test]
fn test_result_set_accumulation() {
    let mut rows = Container::new();
    for i in 0..3 {
        let mut row = Container::new();
        row.set("id", i);
        row.set("name", format!("row-{i}"));
        rows.append(row);
    }

    assert_eq!(rows.len(), 3);
    assert_key_order(&rows, &["0", "1", "2"]);

    let names: Vec<String> = rows
        .iter()
        .filter_map(|(_, row)| row.as_container())
        .filter_map(|row| row.get("name").and_then(|v| v.as_text().map(String::from)))
        .collect();
    assert_eq!(names, ["row-0", "row-1", "row-2"]);
}

#[test]
fn test_filter_and_map_leave_the_walk_undisturbed() {
    let mut fields = setup_field_map();
    fields.seek_key("created_at").unwrap();

    // A consumer mid-walk asks for derived views...
    let textual = fields.filter(|v| v.as_text() == Some("text"));
    let upper = fields.map(|v| match v.as_text() {
        Some(s) => Value::Text(s.to_uppercase()),
        None => v.clone(),
    });

    // ...and its own position is untouched.
    assert_eq!(fields.current_key().map(ToString::to_string), Some("created_at".into()));
    assert_eq!(textual.len(), 1);
    assert_eq!(upper.get("id").and_then(|v| v.as_text()), Some("INTEGER"));
}

#[test]
fn test_keys_and_values_views() {
    let fields = setup_field_map();
    assert_eq!(
        fields.keys().to_plain(),
        serde_json::json!(["id", "name", "created_at", "active"])
    );
    assert_eq!(
        fields.values().to_plain(),
        serde_json::json!(["integer", "text", "timestamp", "boolean"])
    );
}

#[test]
fn test_try_get_reports_missing_field() {
    let fields = setup_field_map();
    let err = fields.try_get("missing").unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "container key not found: missing");
}

#[test]
fn test_mixed_value_types_survive_scans() {
    let mut c = setup_mixed_values();
    let kept = c.compact();
    // null and nothing else is dropped: false, 0 and "" are absent here
    assert!(kept.contains_key("flag"));
    assert!(kept.contains_key("child"));
    assert!(!kept.contains_key("null"));
    assert_eq!(kept.len(), 5);
}

#[test]
fn test_loose_contains_across_types() {
    let mut c = setup_mixed_values();
    assert!(c.contains(&Value::Text("3".into()), false));
    assert!(!c.contains(&Value::Text("3".into()), true));
    assert!(c.contains(&Value::Float(3.0), false));
}
