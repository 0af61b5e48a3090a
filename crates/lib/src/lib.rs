//! Keywalk: an ordered key/value container with a stable traversal cursor.
//!
//! This library provides a container that behaves simultaneously like a
//! list and a string-or-integer-keyed map, with enumeration order that is
//! always recoverable independent of the backing storage's native iteration
//! order.
//!
//! ## Core Concepts
//!
//! * **Container (`container::Container`)**: the ordered associative
//!   container. Entries enumerate in first-insertion order; updating a key
//!   never moves it; only sorts and removals disturb the order.
//! * **Keys (`container::Key`)**: non-negative integers or strings, unified
//!   in one key space ("7" and 7 are the same key).
//! * **Values (`container::Value`)**: scalars or nested child containers.
//!   Array-like inputs are recursively wrapped on the way in and unwrapped
//!   by `to_plain`, so every sub-structure obeys the same contract.
//! * **Cursor**: each container carries one mutable position pointer with
//!   `first`/`last`/`next`/`prev`/`seek` navigation and save/restore by key.
//!   Scanning operations (`map`, `filter`, `contains`) use the save/restore
//!   discipline internally and never disturb a caller's traversal position.
//! * **Sorting**: stable by-value and by-key sorts in both directions,
//!   natural ("human") ordering, caller-supplied comparators, and shuffle.
//! * **MergeList (`merge::MergeList`)**: a flat append-only accumulator for
//!   merging value streams, convertible into a container.
//!
//! ## Usage
//!
//! ```
//! use keywalk::Container;
//! use serde_json::json;
//!
//! let mut c = Container::from_plain(&json!({
//!     "one": 1,
//!     "nested": {"a": "x", "b": "y"},
//! }))?;
//!
//! c.append("tail");
//! assert_eq!(c.keys().to_plain(), json!(["one", "nested", 0]));
//!
//! // Walk with the cursor
//! c.rewind();
//! while let Some(value) = c.current() {
//!     let _ = value;
//!     c.next();
//! }
//! # Ok::<(), keywalk::Error>(())
//! ```

pub mod container;
pub mod merge;

pub use container::{ArrayLike, Container, ContainerError, Key, Value};
pub use merge::MergeList;

/// Result type used throughout the keywalk library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the keywalk library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured container errors from the container module
    #[error(transparent)]
    Container(#[from] container::ContainerError),
}

impl Error {
    /// Check if this error indicates a key or element was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Container(e) => e.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error rejected a non-array-like construction input.
    pub fn is_invalid_input(&self) -> bool {
        match self {
            Error::Container(e) => e.is_invalid_input(),
            _ => false,
        }
    }

    /// Check if this error is an out-of-bounds cursor seek.
    pub fn is_out_of_range(&self) -> bool {
        match self {
            Error::Container(e) => e.is_out_of_range(),
            _ => false,
        }
    }

    /// Check if this error is serialization-related.
    pub fn is_serialization_error(&self) -> bool {
        match self {
            Error::Serialize(_) => true,
            Error::Container(e) => e.is_serialization_error(),
        }
    }
}
