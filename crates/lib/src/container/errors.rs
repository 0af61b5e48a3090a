//! Error types for container operations.
//!
//! This module defines structured error types for container construction,
//! key lookup, cursor positioning, and the serialization surface, providing
//! enough context for callers to react without string matching.

use thiserror::Error;

/// Structured error types for container operations.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ContainerError {
    /// Construction was given a value that is neither empty nor array-like
    #[error("invalid container input: {reason}")]
    InvalidInput { reason: String },

    /// A key lookup or seek referenced a key that is not in the container
    #[error("container key not found: {key}")]
    KeyNotFound { key: String },

    /// An absolute seek went past the container bounds
    #[error("position {index} out of range for container of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Encoding the container to JSON or wire bytes failed
    #[error("container serialization failed: {reason}")]
    SerializationFailed { reason: String },

    /// Decoding a container from JSON or wire bytes failed
    #[error("container deserialization failed: {reason}")]
    DeserializationFailed { reason: String },
}

impl ContainerError {
    /// Check if this error rejects a non-array-like construction input
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, ContainerError::InvalidInput { .. })
    }

    /// Check if this error is a missing-key lookup
    pub fn is_not_found(&self) -> bool {
        matches!(self, ContainerError::KeyNotFound { .. })
    }

    /// Check if this error is an out-of-bounds seek
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, ContainerError::IndexOutOfRange { .. })
    }

    /// Check if this error is related to serialization in either direction
    pub fn is_serialization_error(&self) -> bool {
        matches!(
            self,
            ContainerError::SerializationFailed { .. }
                | ContainerError::DeserializationFailed { .. }
        )
    }

    /// Get the key if this is a key-related error
    pub fn key(&self) -> Option<&str> {
        match self {
            ContainerError::KeyNotFound { key } => Some(key),
            _ => None,
        }
    }
}
