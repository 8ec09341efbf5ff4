//! Coffre - An in-memory, collection-organized key-value store
//!
//! Coffre is the in-memory backend of the bot's storage capability:
//! - Values are grouped into named collections and stored as JSON bytes
//! - A single exclusive lock serializes every operation on the store
//! - Backends stay interchangeable behind the `Storage` trait

pub mod storage;

/// Re-export commonly used types
pub use storage::{MemoryStorage, Storage, StorageError};
