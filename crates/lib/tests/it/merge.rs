//! MergeList integration tests: accumulating values from several sources
//! and handing the result back as a container.

use keywalk::{Container, MergeList, Value};

use crate::helpers::*;

#[test]
fn test_merging_several_sources_in_order() {
    let mut merged = MergeList::new();
    merged.merge(&setup_field_map().values());
    merged.push(Value::Null);
    merged.merge(&vec![1, 2]);

    assert_eq!(merged.len(), 7);
    assert_eq!(merged.get(0).and_then(|v| v.as_text()), Some("integer"));
    assert_eq!(merged.get(5).and_then(|v| v.as_int()), Some(1));
}

#[test]
fn test_into_container_supports_further_growth() {
    let merged: MergeList = ["a", "b"].into_iter().collect();
    let mut c = merged.into_container();
    c.append("c");
    assert_eq!(c.keys().to_plain(), serde_json::json!([0, 1, 2]));
}

#[test]
fn test_merge_list_is_array_like() {
    let mut merged = MergeList::new();
    merged.extend([10, 20]);

    let c = Container::from_array_like(&merged);
    assert_eq!(c.to_plain(), serde_json::json!([10, 20]));
}
