//! Ordered key index kept in lock-step with container storage.
//!
//! The backing storage is a hash map whose native iteration order is
//! meaningless; the [`PositionMap`] is the single authority for external
//! enumeration order. It is a private field of the container with a narrow
//! API, mutated only by the handful of structural operations.

use std::collections::HashMap;

use super::key::Key;

/// Ordered sequence of keys defining enumeration order.
///
/// Invariant: always a permutation of the owning container's key set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct PositionMap {
    keys: Vec<Key>,
}

impl PositionMap {
    pub(crate) fn new() -> Self {
        Self { keys: Vec::new() }
    }

    pub(crate) fn len(&self) -> usize {
        self.keys.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Key at a numeric position.
    pub(crate) fn key_at(&self, position: usize) -> Option<&Key> {
        self.keys.get(position)
    }

    /// Numeric position of a key, scanning in enumeration order.
    pub(crate) fn position_of(&self, key: &Key) -> Option<usize> {
        self.keys.iter().position(|k| k == key)
    }

    /// Extends the order with a newly inserted key.
    ///
    /// The caller guarantees the key is not already present; first-insertion
    /// order is what enumeration order is built from.
    pub(crate) fn append_key(&mut self, key: Key) {
        debug_assert!(!self.keys.contains(&key));
        self.keys.push(key);
    }

    /// Full rebuild after a removal: drops every key no longer present in
    /// storage, preserving the relative order of the survivors.
    pub(crate) fn retain_present<V>(&mut self, storage: &HashMap<Key, V>) {
        self.keys.retain(|k| storage.contains_key(k));
        debug_assert_eq!(self.keys.len(), storage.len());
    }

    /// Installs a post-sort order. Must be a permutation of the current keys.
    pub(crate) fn reorder(&mut self, keys: Vec<Key>) {
        debug_assert_eq!(keys.len(), self.keys.len());
        self.keys = keys;
    }

    pub(crate) fn iter(&self) -> std::slice::Iter<'_, Key> {
        self.keys.iter()
    }

    pub(crate) fn to_vec(&self) -> Vec<Key> {
        self.keys.clone()
    }

    pub(crate) fn clear(&mut self) {
        self.keys.clear();
    }
}
