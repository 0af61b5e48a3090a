//! Cursor behavior across mutation: the laws consumers rely on when a
//! long-lived walk overlaps structural changes.

use keywalk::{Container, Key};

use crate::helpers::*;

#[test]
fn test_wrap_cycle_visits_every_element_backwards() {
    let mut c = Container::from_values([10, 20, 30]);
    let mut seen = Vec::new();
    // prev from the first position wraps to the last, so three prev calls
    // starting at 0 walk the whole container backwards from the end
    for _ in 0..3 {
        c.prev();
        seen.push(c.current().and_then(|v| v.as_int()).unwrap());
    }
    assert_eq!(seen, [30, 20, 10]);
}

#[test]
fn test_position_self_corrects_after_removal_before_cursor() {
    let mut c = setup_field_map();
    c.seek_key("created_at").unwrap();
    assert_eq!(c.pos(), Some(2));

    c.remove("id");
    // Same key under the cursor, renumbered position
    assert_eq!(c.current_key(), Some(&Key::from("created_at")));
    assert_eq!(c.pos(), Some(1));
}

#[test]
fn test_save_restore_across_sort() {
    let mut c = Container::from_entries([("b", 2), ("a", 1), ("c", 3)]);
    c.seek_key("a").unwrap();
    c.save_cursor();
    c.sort_by_key();
    c.restore_cursor().unwrap();
    assert_eq!(c.pos(), Some(0), "restore lands on the key's new position");
}

#[test]
fn test_save_restore_tolerates_no_op() {
    let mut c = setup_field_map();
    c.next();
    let before = c.pos();
    // restore with nothing saved leaves the cursor alone
    c.restore_cursor().unwrap();
    assert_eq!(c.pos(), before);
}

#[test]
fn test_chained_navigation_expressions() {
    let mut c = Container::from_values(["a", "b", "c", "d"]);
    let value = c
        .last()
        .prev()
        .prev()
        .current()
        .and_then(|v| v.as_text())
        .map(String::from);
    assert_eq!(value.as_deref(), Some("b"));
}

#[test]
fn test_seek_bounds_error_carries_context() {
    let mut c = Container::from_values([1]);
    let err = c.seek(5).unwrap_err();
    assert_eq!(
        err.to_string(),
        "position 5 out of range for container of length 1"
    );
}
