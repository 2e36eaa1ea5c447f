//! Persistence error types.
//!
//! None of these reach the user during normal operation: loads fall back to
//! defaults and saves are logged. They exist for diagnostics and for
//! callers of [`crate::try_save`] / [`crate::try_load`].

use std::path::PathBuf;
use thiserror::Error;

/// Persistence operation error.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// File I/O error.
    #[error("Failed to {operation} file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Atomic write failed (temp file couldn't be renamed).
    #[error("Failed to complete save operation")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Document could not be encoded.
    #[error("Failed to serialize document '{key}'")]
    Serialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Stored document is not valid JSON or does not match the expected shape.
    #[error("Failed to deserialize document '{key}'")]
    Deserialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// The store refused the write because it would exceed its quota.
    #[error("Storage quota exceeded writing '{key}' ({needed} bytes, quota {quota})")]
    QuotaExceeded {
        key: String,
        needed: usize,
        quota: usize,
    },

    /// Key would escape the storage directory or is empty.
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),
}

impl PersistenceError {
    /// Get a user-friendly message for this error.
    ///
    /// Attached to the warning logged when a save is swallowed.
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                operation, path, ..
            } => {
                format!("Could not {} the file at {}", operation, path.display())
            }
            Self::AtomicWriteFailed { target_path, .. } => {
                format!(
                    "Could not save {}. Check disk space and permissions.",
                    target_path.display()
                )
            }
            Self::Serialization { key, .. } => {
                format!("Could not encode '{key}'; the change was not saved.")
            }
            Self::Deserialization { key, .. } => {
                format!("Saved '{key}' could not be read and was reset to defaults.")
            }
            Self::QuotaExceeded { key, .. } => {
                format!("Storage is full; the latest change to '{key}' was not saved.")
            }
            Self::InvalidKey(key) => format!("'{key}' is not a valid storage key"),
        }
    }
}

/// Result type alias for persistence operations.
pub type Result<T> = std::result::Result<T, PersistenceError>;
