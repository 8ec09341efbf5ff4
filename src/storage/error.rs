//! Storage error types

use std::fmt;

/// Errors returned by storage backends
#[derive(Debug)]
pub enum StorageError {
    /// Collection name has never been written to
    CollectionNotFound(String),

    /// Collection exists but currently holds no keys
    CollectionEmpty(String),

    /// Key absent within an existing collection
    KeyNotFound {
        collection: String,
        key: String,
    },

    /// Value could not be serialized to its stored form
    Serialization(serde_json::Error),

    /// Stored bytes could not be decoded into the requested shape
    Deserialization(serde_json::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::CollectionNotFound(name) => {
                write!(f, "Collection '{}' not found", name)
            }
            StorageError::CollectionEmpty(name) => {
                write!(f, "Collection '{}' is empty", name)
            }
            StorageError::KeyNotFound { collection, key } => {
                write!(f, "Key '{}' not found in collection '{}'", key, collection)
            }
            StorageError::Serialization(e) => write!(f, "Serialization failed: {}", e),
            StorageError::Deserialization(e) => write!(f, "Deserialization failed: {}", e),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Serialization(e) | StorageError::Deserialization(e) => Some(e),
            _ => None,
        }
    }
}
