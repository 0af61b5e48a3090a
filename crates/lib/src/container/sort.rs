//! Sorting for containers.
//!
//! Every sort computes a new key order and installs it in the position
//! index; the hash storage itself never moves. The cursor keeps tracking its
//! key, so its derived position reflects the post-sort order.
//!
//! Descending by-value order is ascending with the operands swapped, so ties
//! break identically to the ascending case reversed. The underlying
//! `slice::sort_by` is stable.

use std::cmp::Ordering;

use rand::seq::SliceRandom;

use super::key::Key;
use super::value::Value;
use super::Container;

impl Container {
    /// Sorts entries by value, ascending.
    ///
    /// Child containers compare by their flattened content, so two children
    /// with equal exported form compare equal; numbers compare numerically
    /// across `Int`/`Float`; otherwise values order by type, then within
    /// type.
    pub fn sort_by_value(&mut self) -> &mut Self {
        self.reorder_entries(|_, a, _, b| value_order(a, b))
    }

    /// Sorts entries by value, descending (ascending with operands
    /// swapped).
    pub fn sort_by_value_desc(&mut self) -> &mut Self {
        self.reorder_entries(|_, a, _, b| value_order(b, a))
    }

    /// Sorts entries by key in natural key order: integer keys numerically
    /// first, then string keys lexically.
    pub fn sort_by_key(&mut self) -> &mut Self {
        self.reorder_entries(|a, _, b, _| a.cmp(b))
    }

    /// Sorts entries by key, descending.
    ///
    /// When the key types differ, integer keys still order before string
    /// keys; within a type the comparison is reversed.
    pub fn sort_by_key_desc(&mut self) -> &mut Self {
        self.reorder_entries(|a, _, b, _| key_order_desc(a, b))
    }

    /// Sorts entries by the natural ("human") ordering of their values'
    /// text renditions: digit runs compare numerically, so `"item2"` sorts
    /// before `"item10"`. Case-sensitive.
    pub fn sort_natural(&mut self) -> &mut Self {
        self.reorder_entries(|_, a, _, b| natural_order(&a.to_string(), &b.to_string(), false))
    }

    /// Case-insensitive variant of [`sort_natural`](Self::sort_natural).
    pub fn sort_natural_ci(&mut self) -> &mut Self {
        self.reorder_entries(|_, a, _, b| natural_order(&a.to_string(), &b.to_string(), true))
    }

    /// Sorts entries by value with a caller-supplied total order.
    pub fn sort_by(&mut self, mut compare: impl FnMut(&Value, &Value) -> Ordering) -> &mut Self {
        self.reorder_entries(|_, a, _, b| compare(a, b))
    }

    /// Sorts entries by key with a caller-supplied total order.
    pub fn sort_keys_by(&mut self, mut compare: impl FnMut(&Key, &Key) -> Ordering) -> &mut Self {
        self.reorder_entries(|a, _, b, _| compare(a, b))
    }

    /// Scrambles the enumeration order.
    ///
    /// Only "the order is scrambled" is guaranteed; callers must not depend
    /// on the distribution.
    pub fn shuffle(&mut self) -> &mut Self {
        let mut keys = self.positions.to_vec();
        keys.shuffle(&mut rand::thread_rng());
        tracing::trace!(len = keys.len(), "shuffled container order");
        self.positions.reorder(keys);
        self
    }

    fn reorder_entries(
        &mut self,
        mut compare: impl FnMut(&Key, &Value, &Key, &Value) -> Ordering,
    ) -> &mut Self {
        let mut keys = self.positions.to_vec();
        keys.sort_by(|a, b| compare(a, &self.entries[a], b, &self.entries[b]));
        self.positions.reorder(keys);
        self
    }
}

/// Total order over values used by the default by-value sorts.
///
/// Cross-type comparisons order by type (null, bool, number, text,
/// container); numbers merge `Int` and `Float` into one numeric type.
pub(crate) fn value_order(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Text(x), Value::Text(y)) => x.cmp(y),
        (Value::Container(x), Value::Container(y)) => container_order(x, y),
        (x, y) => match (x.as_float(), y.as_float()) {
            (Some(fx), Some(fy)) => fx.partial_cmp(&fy).unwrap_or(Ordering::Equal),
            _ => type_rank(a).cmp(&type_rank(b)),
        },
    }
}

/// Flattened comparison of child containers: entry-by-entry over
/// `(key, value)` pairs in enumeration order, shorter container first on a
/// common prefix. Equal flattened content compares equal.
fn container_order(a: &Container, b: &Container) -> Ordering {
    for ((ka, va), (kb, vb)) in a.iter().zip(b.iter()) {
        match ka.cmp(kb) {
            Ordering::Equal => {}
            other => return other,
        }
        match value_order(va, vb) {
            Ordering::Equal => {}
            other => return other,
        }
    }
    a.len().cmp(&b.len())
}

fn type_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Int(_) | Value::Float(_) => 2,
        Value::Text(_) => 3,
        Value::Container(_) => 4,
    }
}

/// Descending key order: integer keys keep priority over string keys when
/// the types differ, otherwise the natural order reversed.
pub(crate) fn key_order_desc(a: &Key, b: &Key) -> Ordering {
    match (a, b) {
        (Key::Index(_), Key::Name(_)) => Ordering::Less,
        (Key::Name(_), Key::Index(_)) => Ordering::Greater,
        _ => b.cmp(a),
    }
}

/// Natural ("human") string comparison: runs of ASCII digits compare as
/// numbers, everything else compares character by character.
pub(crate) fn natural_order(a: &str, b: &str, case_insensitive: bool) -> Ordering {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        if a[i].is_ascii_digit() && b[j].is_ascii_digit() {
            let (a_run, a_next) = digit_run(&a, i);
            let (b_run, b_next) = digit_run(&b, j);
            match compare_digit_runs(a_run, b_run) {
                Ordering::Equal => {
                    i = a_next;
                    j = b_next;
                }
                other => return other,
            }
        } else {
            let (ca, cb) = if case_insensitive {
                (
                    a[i].to_lowercase().next().unwrap_or(a[i]),
                    b[j].to_lowercase().next().unwrap_or(b[j]),
                )
            } else {
                (a[i], b[j])
            };
            match ca.cmp(&cb) {
                Ordering::Equal => {
                    i += 1;
                    j += 1;
                }
                other => return other,
            }
        }
    }

    (a.len() - i).cmp(&(b.len() - j))
}

/// Slice of the digit run starting at `start`, and the index just past it.
fn digit_run(chars: &[char], start: usize) -> (&[char], usize) {
    let mut end = start;
    while end < chars.len() && chars[end].is_ascii_digit() {
        end += 1;
    }
    (&chars[start..end], end)
}

/// Numeric comparison of two digit runs; ties between equal values with
/// different zero-padding break toward the shorter run.
fn compare_digit_runs(a: &[char], b: &[char]) -> Ordering {
    let a_digits = trim_leading_zeros(a);
    let b_digits = trim_leading_zeros(b);
    a_digits
        .len()
        .cmp(&b_digits.len())
        .then_with(|| a_digits.cmp(b_digits))
        .then_with(|| a.len().cmp(&b.len()))
}

fn trim_leading_zeros(digits: &[char]) -> &[char] {
    let start = digits
        .iter()
        .position(|c| *c != '0')
        .unwrap_or(digits.len().saturating_sub(1));
    &digits[start..]
}
