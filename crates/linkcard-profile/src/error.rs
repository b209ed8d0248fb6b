//! Error types for the profile store
//!
//! Storage errors never escape the store's public operations; they are
//! logged and the store keeps serving its in-memory record. They do escape
//! the [`KeyValueStore`](crate::storage::KeyValueStore) seam itself.

use std::path::PathBuf;

/// Errors raised by a key/value backend
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// IO error while reading or writing the backing file
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Backing file exists but is not a JSON string map
    #[error("corrupt store at {path}: {message}")]
    Corrupt { path: PathBuf, message: String },

    /// Value could not be (de)serialized
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Backend refused the operation (quota, disabled storage, ...)
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

impl StorageError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create corrupt-store error for path
    pub fn corrupt(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Corrupt {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Invalid store configuration
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A storage key is blank
    #[error("storage key '{name}' must not be empty")]
    EmptyKey { name: &'static str },

    /// Two logical keys map to the same storage key
    #[error("storage key '{key}' is used more than once")]
    DuplicateKey { key: String },

    /// An exclusion rule would match every link
    #[error("exclusion rule #{index} has an empty needle")]
    EmptyExclusion { index: usize },

    /// The canonical link has no URL
    #[error("canonical link url must not be empty")]
    EmptyCanonicalUrl,
}
