//! Ordered key/value container with an independent traversal cursor.
//!
//! This module provides the main public interface of the crate. The
//! [`Container`] type behaves simultaneously like a list and a
//! string-or-integer-keyed map: entries enumerate in first-insertion order
//! regardless of how the backing storage iterates, a long-lived cursor walks
//! that order and survives mutation, and nested array-like inputs are
//! recursively wrapped so every sub-structure obeys the same contract.
//!
//! # Design
//!
//! A `Container` owns three things and nothing shares them:
//!
//! - a `HashMap` from [`Key`] to [`Value`] (native iteration order never
//!   observable),
//! - a position index that is the single authority for enumeration order,
//! - a cursor that tracks the current key, with a one-slot save/restore.
//!
//! The position index and the cursor are private; only the structural
//! operations in this module touch them, and every mutation leaves both
//! consistent before returning.

use std::collections::HashMap;
use std::fmt;

pub mod array_like;
pub mod errors;
pub mod key;
pub mod value;

mod cursor;
mod plain;
mod position;
mod sort;

pub use array_like::ArrayLike;
pub use errors::ContainerError;
pub use key::Key;
pub use value::Value;

use cursor::Cursor;
use position::PositionMap;

/// Ordered associative container with a mutable traversal cursor.
///
/// # Core Operations
///
/// - **Data access**: [`get`](Self::get), [`try_get`](Self::try_get),
///   [`current`](Self::current), [`keys`](Self::keys), [`values`](Self::values)
/// - **Data modification**: [`set`](Self::set), [`remove`](Self::remove),
///   [`append`](Self::append)
/// - **Navigation**: [`rewind`](Self::rewind), [`next`](Self::next),
///   [`prev`](Self::prev), [`seek`](Self::seek), [`seek_key`](Self::seek_key),
///   [`save_cursor`](Self::save_cursor) / [`restore_cursor`](Self::restore_cursor)
/// - **Scans**: [`map`](Self::map), [`filter`](Self::filter),
///   [`compact`](Self::compact), [`contains`](Self::contains)
/// - **Sorting**: `sort_by_value`, `sort_by_key`, `sort_natural`,
///   `sort_by`, `shuffle` (see the sorting impl block)
/// - **Interop**: [`to_plain`](Self::to_plain) / [`from_plain`](Self::from_plain),
///   [`to_json`](Self::to_json) / [`from_json`](Self::from_json),
///   [`to_bytes`](Self::to_bytes) / [`from_bytes`](Self::from_bytes)
///
/// # Enumeration order
///
/// A key's position is fixed at first insertion: updating an existing key
/// never moves it, and only an explicit sort or a removal disturbs the
/// order.
///
/// ```
/// use keywalk::Container;
///
/// let mut c = Container::new();
/// c.set("b", 1);
/// c.set("a", 2);
/// c.set("b", 3); // update in place, position unchanged
///
/// let keys: Vec<String> = c.iter().map(|(k, _)| k.to_string()).collect();
/// assert_eq!(keys, ["b", "a"]);
/// ```
///
/// # Cursor
///
/// ```
/// use keywalk::Container;
///
/// let mut c = Container::from_values(["x", "y", "z"]);
/// assert_eq!(c.pos(), Some(0));
/// c.next();
/// assert_eq!(c.current().and_then(|v| v.as_text()), Some("y"));
/// c.prev().prev(); // wraps from the first position to the last
/// assert_eq!(c.pos(), Some(2));
/// ```
#[derive(Debug, Clone)]
pub struct Container {
    entries: HashMap<Key, Value>,
    positions: PositionMap,
    cursor: Cursor,
}

impl Container {
    /// Creates a new empty container.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            positions: PositionMap::new(),
            cursor: Cursor::new(),
        }
    }

    /// Builds a container from a flat sequence of values, keyed `0..n-1`.
    ///
    /// ```
    /// use keywalk::{Container, Key};
    ///
    /// let c = Container::from_values([10, 20]);
    /// assert_eq!(c.get(Key::Index(1)).and_then(|v| v.as_int()), Some(20));
    /// ```
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let mut container = Self::new();
        for value in values {
            container.append(value);
        }
        container
    }

    /// Builds a container from keyed entries.
    ///
    /// A key that repeats updates the earlier entry in place, keeping its
    /// first-insertion position.
    pub fn from_entries<K, V, I>(entries: I) -> Self
    where
        K: Into<Key>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut container = Self::new();
        for (key, value) in entries {
            container.set(key, value);
        }
        container
    }

    /// Copy-constructs from anything satisfying the [`ArrayLike`]
    /// capability, including another `Container`.
    pub fn from_array_like<A: ArrayLike + ?Sized>(source: &A) -> Self {
        Self::from_entries(source.entries())
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the container has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if the container holds the given key.
    pub fn contains_key(&self, key: impl Into<Key>) -> bool {
        self.entries.contains_key(&key.into())
    }

    /// Gets a value by key.
    pub fn get(&self, key: impl Into<Key>) -> Option<&Value> {
        self.entries.get(&key.into())
    }

    /// Gets a mutable reference to a value by key.
    ///
    /// Mutating a nested child container through this reference is fine:
    /// the child maintains its own order index and cursor.
    pub fn get_mut(&mut self, key: impl Into<Key>) -> Option<&mut Value> {
        self.entries.get_mut(&key.into())
    }

    /// Gets a value by key, failing with [`ContainerError::KeyNotFound`]
    /// when absent. Callers that prefer probing use [`get`](Self::get).
    pub fn try_get(&self, key: impl Into<Key>) -> crate::Result<&Value> {
        let key = key.into();
        self.entries.get(&key).ok_or_else(|| {
            ContainerError::KeyNotFound {
                key: key.to_string(),
            }
            .into()
        })
    }

    /// Sets a value, returning the old value if the key already existed.
    ///
    /// A new key is appended to the enumeration order; an existing key is
    /// updated in place without moving. Array-like inputs (via the `Into`
    /// conversions, e.g. from `serde_json::Value`) arrive here already
    /// wrapped as child containers.
    pub fn set(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let was_empty = self.entries.is_empty();
        match self.entries.insert(key.clone(), value.into()) {
            Some(old) => Some(old),
            None => {
                self.positions.append_key(key);
                if was_empty {
                    self.cursor.first(&self.positions);
                }
                None
            }
        }
    }

    /// Removes an entry by key, returning the old value if present.
    ///
    /// The position index is rebuilt from the surviving entries. A cursor
    /// that pointed at the removed key reads as past-end afterwards.
    pub fn remove(&mut self, key: impl Into<Key>) -> Option<Value> {
        let key = key.into();
        let old = self.entries.remove(&key)?;
        self.positions.retain_present(&self.entries);
        Some(old)
    }

    /// Appends a value under the next available integer key (max existing
    /// integer key + 1, or 0), returning the assigned key.
    ///
    /// ```
    /// use keywalk::{Container, Key};
    ///
    /// let mut c = Container::new();
    /// c.set(7u64, "seven");
    /// assert_eq!(c.append("eight"), Key::Index(8));
    /// ```
    pub fn append(&mut self, value: impl Into<Value>) -> Key {
        let next = self
            .entries
            .keys()
            .filter_map(|k| k.as_index())
            .max()
            .map_or(0, |n| n + 1);
        let key = Key::Index(next);
        self.set(key.clone(), value);
        key
    }

    /// Removes every entry and resets the cursor.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.positions.clear();
        self.cursor.reset();
    }

    /// Returns a fresh container of the keys, in enumeration order, keyed
    /// `0..n-1`.
    pub fn keys(&self) -> Container {
        Self::from_values(self.positions.iter().map(|key| match key {
            Key::Index(n) => Value::Int(*n as i64),
            Key::Name(s) => Value::Text(s.clone()),
        }))
    }

    /// Returns a fresh container of the values, renumbered `0..n-1`, in
    /// enumeration order.
    pub fn values(&self) -> Container {
        Self::from_values(self.iter().map(|(_, value)| value.clone()))
    }

    /// Borrowing iterator over `(key, value)` pairs in enumeration order.
    ///
    /// This walks the position index directly and never touches the live
    /// cursor, so external loops can nest freely.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            container: self,
            position: 0,
        }
    }
}

// Navigation surface: the cursor state machine over the position index.
// Every method returns the container for chaining.
impl Container {
    /// Moves the cursor to the first position. No-op (stays past-end) when
    /// empty.
    pub fn rewind(&mut self) -> &mut Self {
        self.cursor.first(&self.positions);
        self
    }

    /// Alias for [`rewind`](Self::rewind).
    pub fn first(&mut self) -> &mut Self {
        self.rewind()
    }

    /// Moves the cursor to the last position. No-op when empty.
    pub fn last(&mut self) -> &mut Self {
        self.cursor.last(&self.positions);
        self
    }

    /// Alias for [`last`](Self::last).
    pub fn end(&mut self) -> &mut Self {
        self.last()
    }

    /// Advances the cursor one position; moving past the last element goes
    /// past-end and stays there.
    pub fn next(&mut self) -> &mut Self {
        self.cursor.next(&self.positions);
        self
    }

    /// Retreats the cursor one position.
    ///
    /// From the first position (and from past-end) this wraps to the last
    /// position rather than clamping:
    ///
    /// ```
    /// use keywalk::Container;
    ///
    /// let mut c = Container::from_values([1, 2, 3]);
    /// c.prev();
    /// assert_eq!(c.pos(), Some(2));
    /// ```
    pub fn prev(&mut self) -> &mut Self {
        self.cursor.prev(&self.positions);
        self
    }

    /// Absolute jump to a numeric position; positions at or beyond
    /// [`len`](Self::len) fail with [`ContainerError::IndexOutOfRange`].
    pub fn seek(&mut self, position: usize) -> crate::Result<&mut Self> {
        self.cursor.seek(&self.positions, position)?;
        Ok(self)
    }

    /// Jump to the position of a key; fails with
    /// [`ContainerError::KeyNotFound`] when the key is absent.
    pub fn seek_key(&mut self, key: impl Into<Key>) -> crate::Result<&mut Self> {
        self.cursor.seek_key(&self.positions, &key.into())?;
        Ok(self)
    }

    /// Derived numeric position of the cursor, or `None` when past-end.
    ///
    /// The position is computed from the current key on every call, so it
    /// self-corrects after sorts and removals rebuild the order.
    pub fn pos(&self) -> Option<usize> {
        self.cursor.pos(&self.positions)
    }

    /// The key under the cursor, if the cursor is on an element.
    pub fn current_key(&self) -> Option<&Key> {
        let key = self.cursor.current_key()?;
        self.entries.contains_key(key).then_some(key)
    }

    /// The value under the cursor, or `None` when past-end or empty.
    pub fn current(&self) -> Option<&Value> {
        self.entries.get(self.cursor.current_key()?)
    }

    /// Alias for [`current`](Self::current).
    pub fn element(&self) -> Option<&Value> {
        self.current()
    }

    /// Remembers the current *key* (not the numeric position, which can
    /// renumber under mutation) for a later [`restore_cursor`](Self::restore_cursor).
    pub fn save_cursor(&mut self) -> &mut Self {
        self.cursor.save();
        self
    }

    /// Re-seeks the key remembered by [`save_cursor`](Self::save_cursor).
    ///
    /// Fails with [`ContainerError::KeyNotFound`] if that key was removed in
    /// between; callers that wrap save/restore around mutation must tolerate
    /// this.
    pub fn restore_cursor(&mut self) -> crate::Result<&mut Self> {
        self.cursor.restore(&self.positions)?;
        Ok(self)
    }
}

// Higher-order scans. Each one iterates the receiver through its own cursor
// under the save/restore discipline, so a caller's external loop position is
// never disturbed by the internal traversal.
impl Container {
    /// Produces a new container with the same keys and `f` applied to every
    /// value, in enumeration order.
    pub fn map(&mut self, mut f: impl FnMut(&Value) -> Value) -> Container {
        self.save_cursor();
        self.rewind();
        let mut result = Container::new();
        while let Some(key) = self.current_key().cloned() {
            if let Some(value) = self.entries.get(&key) {
                result.set(key, f(value));
            }
            self.next();
        }
        if self.restore_cursor().is_err() {
            self.cursor.reset();
        }
        result
    }

    /// Produces a new container with only the entries whose value satisfies
    /// the predicate. Survivors keep their original keys; nothing is
    /// renumbered.
    pub fn filter(&mut self, mut predicate: impl FnMut(&Value) -> bool) -> Container {
        self.save_cursor();
        self.rewind();
        let mut result = Container::new();
        while let Some(key) = self.current_key().cloned() {
            if let Some(value) = self.entries.get(&key) {
                if predicate(value) {
                    result.set(key, value.clone());
                }
            }
            self.next();
        }
        if self.restore_cursor().is_err() {
            self.cursor.reset();
        }
        result
    }

    /// [`filter`](Self::filter) with the default predicate: drops entries
    /// whose value is empty/falsy (see [`Value::is_empty`]).
    ///
    /// ```
    /// use keywalk::Container;
    ///
    /// let mut c = Container::from_entries([("a", 1), ("b", 0)]);
    /// c.set("c", "x");
    /// c.set("d", keywalk::Value::Null);
    /// let kept = c.compact();
    /// assert!(kept.contains_key("a") && kept.contains_key("c"));
    /// assert_eq!(kept.len(), 2);
    /// ```
    pub fn compact(&mut self) -> Container {
        self.filter(|value| !value.is_empty())
    }

    /// Linear scan for a value. `strict` compares type and value exactly;
    /// loose comparison coerces structurally (see [`Value::loose_eq`]), so
    /// `"1"` matches `1`.
    pub fn contains(&mut self, needle: &Value, strict: bool) -> bool {
        self.save_cursor();
        self.rewind();
        let mut found = false;
        while let Some(key) = self.current_key().cloned() {
            if let Some(value) = self.entries.get(&key) {
                if (strict && value == needle) || (!strict && value.loose_eq(needle)) {
                    found = true;
                    break;
                }
            }
            self.next();
        }
        if self.restore_cursor().is_err() {
            self.cursor.reset();
        }
        found
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

/// Entry equality in enumeration order. The cursor is traversal state, not
/// content, and does not participate.
impl PartialEq for Container {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|((ka, va), (kb, vb))| ka == kb && va == vb)
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut first = true;
        for (key, value) in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
            first = false;
        }
        write!(f, "}}")
    }
}

impl FromIterator<(Key, Value)> for Container {
    fn from_iter<T: IntoIterator<Item = (Key, Value)>>(iter: T) -> Self {
        Self::from_entries(iter)
    }
}

impl Extend<(Key, Value)> for Container {
    fn extend<T: IntoIterator<Item = (Key, Value)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

/// Borrowing iterator over entries in enumeration order.
///
/// The standard "produces a sequence" adapter over the position index;
/// independent of the container's live cursor.
pub struct Iter<'a> {
    container: &'a Container,
    position: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a Key, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.container.positions.key_at(self.position)?;
        let value = self.container.entries.get(key)?;
        self.position += 1;
        Some((key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.container.len().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Container {
    type Item = (&'a Key, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Container {
    type Item = (Key, Value);
    type IntoIter = std::vec::IntoIter<(Key, Value)>;

    fn into_iter(mut self) -> Self::IntoIter {
        let ordered: Vec<(Key, Value)> = self
            .positions
            .to_vec()
            .into_iter()
            .filter_map(|key| {
                let value = self.entries.remove(&key)?;
                Some((key, value))
            })
            .collect();
        ordered.into_iter()
    }
}
