//! Persistence error types.
//!
//! All persistence operations return structured errors that provide
//! user-friendly messages and optional remediation hints.

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

    /// Storage key that cannot be mapped onto the backing store.
    #[error("Invalid storage key: {key:?}")]
    InvalidKey { key: String },

    /// Serialization error.
    #[error("Failed to serialize saved entries")]
    Serialization {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Stored value under `key` is not a valid entry collection.
    #[error("Failed to deserialize saved entries under '{key}'")]
    Deserialization {
        key: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Atomic write failed (temp file couldn't be renamed).
    #[error("Failed to complete save operation")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No entry with id '{id}'")]
    EntryNotFound { id: String },

    #[error("Id prefix '{prefix}' matches {matches} entries")]
    AmbiguousId { prefix: String, matches: usize },

    /// Refused to save text that is empty or only whitespace.
    #[error("Cannot save empty text")]
    EmptyText,
}

impl PersistenceError {
    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                operation, path, ..
            } => {
                format!("Could not {} the file at {}", operation, path.display())
            }
            Self::InvalidKey { key } => {
                format!("'{key}' cannot be used as a storage name.")
            }
            Self::Serialization { .. } => "Failed to save your text.".to_string(),
            Self::Deserialization { .. } => "Failed to load your saved entries.".to_string(),
            Self::AtomicWriteFailed { target_path, .. } => {
                format!(
                    "Could not save the file to {}. Please check disk space and permissions.",
                    target_path.display()
                )
            }
            Self::EntryNotFound { id } => format!("No saved entry matches '{id}'."),
            Self::AmbiguousId { prefix, matches } => {
                format!("'{prefix}' matches {matches} saved entries.")
            }
            Self::EmptyText => "There is no text to save.".to_string(),
        }
    }

    /// Get a suggestion for how to resolve this error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::Io { operation, .. } => {
                if *operation == "read" {
                    Some("Check that the file exists and you have permission to read it.".into())
                } else {
                    Some("Check that you have permission to write to this location.".into())
                }
            }
            Self::InvalidKey { .. } => {
                Some("Use only letters, digits, '.', '-' and '_' in the namespace.".into())
            }
            Self::Serialization { .. } => None,
            Self::Deserialization { .. } => Some(
                "The store file may be corrupted. Move it aside to start with an empty vault."
                    .into(),
            ),
            Self::AtomicWriteFailed { .. } => {
                Some("Free up disk space or try saving to a different location.".into())
            }
            Self::EntryNotFound { .. } => {
                Some("Run `text-vault list` to see the saved entries.".into())
            }
            Self::AmbiguousId { .. } => Some("Type more characters of the id.".into()),
            Self::EmptyText => Some("Enter some text before saving.".into()),
        }
    }
}

/// Result type alias for persistence operations.
pub type Result<T> = std::result::Result<T, PersistenceError>;
