//! In-memory storage backend

use super::{Storage, StorageError};
use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::debug;

/// Type alias for one collection: item keys to serialized values
type Collection = HashMap<String, Bytes>;

/// In-memory storage backend
///
/// Keeps every value as its JSON bytes, grouped into named collections.
/// The whole nested mapping sits behind a single exclusive lock; every
/// operation takes it, reads and writes alike. The guard scope releases
/// the lock on all exit paths, error returns included.
pub struct MemoryStorage {
    /// Collections by name
    collections: Mutex<HashMap<String, Collection>>,
}

impl MemoryStorage {
    /// Create a new, empty store
    pub fn new() -> Self {
        MemoryStorage {
            collections: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for MemoryStorage {
    fn write<T: Serialize>(
        &self,
        collection: &str,
        key: &str,
        value: &T,
    ) -> Result<(), StorageError> {
        // Serialize before touching the map: a value that cannot be
        // encoded must not leave behind a newly created empty collection.
        let data = Bytes::from(serde_json::to_vec(value).map_err(StorageError::Serialization)?);
        let size = data.len();

        let mut collections = self.collections.lock().expect("Storage lock poisoned");
        let entries = collections.entry(collection.to_string()).or_default();
        entries.insert(key.to_string(), data);

        debug!("Stored {} bytes at {}/{}", size, collection, key);
        Ok(())
    }

    fn read<T: DeserializeOwned>(&self, collection: &str, key: &str) -> Result<T, StorageError> {
        // Copy the bytes out under the lock, decode after releasing it
        let data = {
            let collections = self.collections.lock().expect("Storage lock poisoned");
            let entries = collections
                .get(collection)
                .ok_or_else(|| StorageError::CollectionNotFound(collection.to_string()))?;

            entries
                .get(key)
                .cloned()
                .ok_or_else(|| StorageError::KeyNotFound {
                    collection: collection.to_string(),
                    key: key.to_string(),
                })?
        };

        serde_json::from_slice(&data).map_err(StorageError::Deserialization)
    }

    fn get_keys(&self, collection: &str) -> Result<Vec<String>, StorageError> {
        let collections = self.collections.lock().expect("Storage lock poisoned");
        let entries = collections
            .get(collection)
            .ok_or_else(|| StorageError::CollectionNotFound(collection.to_string()))?;

        if entries.is_empty() {
            return Err(StorageError::CollectionEmpty(collection.to_string()));
        }

        Ok(entries.keys().cloned().collect())
    }

    fn delete(&self, collection: &str, key: &str) -> Result<(), StorageError> {
        let mut collections = self.collections.lock().expect("Storage lock poisoned");

        if let Some(entries) = collections.get_mut(collection) {
            if entries.remove(key).is_some() {
                debug!("Deleted {}/{}", collection, key);
            }
        }

        Ok(())
    }
}
