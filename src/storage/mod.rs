//! Durable key-value persistence.
//!
//! The cart survives across sessions in a single named slot. The backing
//! store sits behind [`KeyValueStore`] so the slot can live in a file, an
//! embedded database, or plain memory for tests.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when accessing a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read slot '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write slot '{path}': {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to clear slot '{path}': {source}")]
    ClearError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Minimal get/set/clear interface over named string slots.
///
/// Values are opaque strings; serialization belongs to the caller.
pub trait KeyValueStore {
    /// Read the value stored under `key`. `Ok(None)` when the slot is absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key` entirely. Clearing an absent key is not an error.
    fn clear(&mut self, key: &str) -> Result<(), StorageError>;
}
