//! Append-only accumulator for merging value streams.
//!
//! [`MergeList`] is the lightweight companion to [`Container`]: an ordered
//! bag of values with no keys, no cursor and no position index. Merge-style
//! code appends the values of several sources into one flat list and, when
//! done, converts the result into a container with integer keys.

use crate::container::{ArrayLike, Container, Key, Value};

/// Ordered, append-only sequence of heterogeneous values.
///
/// ```
/// use keywalk::{Container, MergeList};
///
/// let mut merged = MergeList::new();
/// merged.push(1);
/// merged.merge(&Container::from_values(["a", "b"]));
///
/// let c = merged.into_container();
/// assert_eq!(c.len(), 3);
/// assert_eq!(c.get(2u64).and_then(|v| v.as_text()), Some("b"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergeList {
    items: Vec<Value>,
}

impl MergeList {
    /// Creates a new empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of accumulated values.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if nothing has been accumulated.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends a single value.
    pub fn push(&mut self, value: impl Into<Value>) {
        self.items.push(value.into());
    }

    /// Appends every value of an array-like source, in its enumeration
    /// order. Keys are dropped; this is a flat accumulator.
    pub fn merge<A: ArrayLike + ?Sized>(&mut self, source: &A) {
        for (_, value) in source.entries() {
            self.items.push(value);
        }
    }

    /// Value at an index.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    /// Iterates the accumulated values in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    /// Converts into a container keyed `0..n-1`.
    pub fn into_container(self) -> Container {
        Container::from_values(self.items)
    }
}

impl ArrayLike for MergeList {
    fn entries(&self) -> Vec<(Key, Value)> {
        self.items
            .iter()
            .enumerate()
            .map(|(i, value)| (Key::Index(i as u64), value.clone()))
            .collect()
    }
}

impl<V: Into<Value>> Extend<V> for MergeList {
    fn extend<T: IntoIterator<Item = V>>(&mut self, iter: T) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<V: Into<Value>> FromIterator<V> for MergeList {
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl IntoIterator for MergeList {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a MergeList {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<MergeList> for Container {
    fn from(list: MergeList) -> Self {
        list.into_container()
    }
}
