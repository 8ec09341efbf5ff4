//! Storage capability module
//!
//! Defines the backend contract and the in-memory implementation.
//! The store is independent of how the bot uses the values it keeps
//! (loose coupling): callers get typed reads and writes, the backend
//! only ever sees serialized bytes.

mod error;
mod memory;

pub use error::StorageError;
pub use memory::MemoryStorage;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Storage backend trait
///
/// All backends implement this trait with the same four operations.
/// This keeps the bot decoupled from the backend it runs against: an
/// in-memory store for tests and small deployments, a persistent one
/// later, without touching call sites.
pub trait Storage: Send + Sync {
    /// Store a value under (collection, key), replacing any prior value
    ///
    /// The collection is created on first successful write to it. If the
    /// value cannot be serialized, the store is left untouched.
    fn write<T: Serialize>(&self, collection: &str, key: &str, value: &T)
        -> Result<(), StorageError>;

    /// Read the value stored under (collection, key), decoded as `T`
    ///
    /// Fails with `CollectionNotFound` / `KeyNotFound` when the location
    /// is absent, and with `Deserialization` when the stored bytes do not
    /// match the requested shape.
    fn read<T: DeserializeOwned>(&self, collection: &str, key: &str)
        -> Result<T, StorageError>;

    /// List all keys of a collection, in no particular order
    ///
    /// Fails with `CollectionNotFound` if the collection was never
    /// written to, and with `CollectionEmpty` if it exists but currently
    /// holds no keys.
    fn get_keys(&self, collection: &str) -> Result<Vec<String>, StorageError>;

    /// Remove a key from a collection
    ///
    /// Silently does nothing when the collection or key is absent; never
    /// fails. The emptied collection itself stays in place.
    fn delete(&self, collection: &str, key: &str) -> Result<(), StorageError>;
}
