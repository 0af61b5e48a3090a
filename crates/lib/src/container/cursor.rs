//! Traversal cursor over the position index.
//!
//! The cursor tracks the *current key* rather than a raw offset, so its
//! numeric position is derived from the [`PositionMap`] on demand and
//! self-corrects whenever the index is rebuilt (sorting, removal). A cursor
//! whose key has been removed from the container simply reads as past-end
//! until the next absolute navigation.
//!
//! `prev()` deliberately wraps: from the first position (or from past-end)
//! it lands on the last position instead of clamping at zero. Consumers
//! rely on that cycle, so it is part of the contract.

use super::errors::ContainerError;
use super::key::Key;
use super::position::PositionMap;

/// Mutable position pointer into a container's enumeration order.
///
/// `current == None` is the past-end state: the container is empty, the
/// cursor advanced beyond the last element, or the key under it was removed.
#[derive(Debug, Clone, Default)]
pub(crate) struct Cursor {
    current: Option<Key>,
    saved: Option<Option<Key>>,
}

impl Cursor {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// The key under the cursor, if any.
    pub(crate) fn current_key(&self) -> Option<&Key> {
        self.current.as_ref()
    }

    /// Derived numeric position of the current key. `None` when past-end or
    /// when the key is no longer in the index.
    pub(crate) fn pos(&self, positions: &PositionMap) -> Option<usize> {
        self.current
            .as_ref()
            .and_then(|key| positions.position_of(key))
    }

    pub(crate) fn first(&mut self, positions: &PositionMap) {
        self.current = positions.key_at(0).cloned();
    }

    pub(crate) fn last(&mut self, positions: &PositionMap) {
        self.current = match positions.len() {
            0 => None,
            len => positions.key_at(len - 1).cloned(),
        };
    }

    /// Advance one position; moving past the last element goes past-end.
    pub(crate) fn next(&mut self, positions: &PositionMap) {
        self.current = match self.pos(positions) {
            Some(p) => positions.key_at(p + 1).cloned(),
            None => None,
        };
    }

    /// Retreat one position, wrapping from the first position (and from
    /// past-end) to the last.
    pub(crate) fn prev(&mut self, positions: &PositionMap) {
        self.current = match self.pos(positions) {
            Some(p) if p > 0 => positions.key_at(p - 1).cloned(),
            _ => match positions.len() {
                0 => None,
                len => positions.key_at(len - 1).cloned(),
            },
        };
    }

    /// Absolute jump to a numeric position.
    pub(crate) fn seek(
        &mut self,
        positions: &PositionMap,
        position: usize,
    ) -> Result<(), ContainerError> {
        match positions.key_at(position) {
            Some(key) => {
                self.current = Some(key.clone());
                Ok(())
            }
            None => Err(ContainerError::IndexOutOfRange {
                index: position,
                len: positions.len(),
            }),
        }
    }

    /// Jump to the position of a key.
    pub(crate) fn seek_key(
        &mut self,
        positions: &PositionMap,
        key: &Key,
    ) -> Result<(), ContainerError> {
        match positions.position_of(key) {
            Some(_) => {
                self.current = Some(key.clone());
                Ok(())
            }
            None => Err(ContainerError::KeyNotFound {
                key: key.to_string(),
            }),
        }
    }

    /// Remembers the current key (not the numeric position, which can
    /// renumber under mutation). Overwrites any previous save.
    pub(crate) fn save(&mut self) {
        self.saved = Some(self.current.clone());
    }

    /// Re-seeks the saved key. Fails with [`ContainerError::KeyNotFound`] if
    /// the key was removed in the meantime. A no-op when nothing was saved;
    /// the save slot is consumed either way.
    pub(crate) fn restore(&mut self, positions: &PositionMap) -> Result<(), ContainerError> {
        match self.saved.take() {
            Some(Some(key)) => self.seek_key(positions, &key),
            Some(None) => {
                self.current = None;
                Ok(())
            }
            None => Ok(()),
        }
    }

    pub(crate) fn reset(&mut self) {
        self.current = None;
        self.saved = None;
    }
}
