use std::collections::HashMap;

use super::{KeyValueStore, StorageError};

/// In-memory store. Slots live for the session only; useful for tests and
/// anywhere durability is not wanted.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a slot, e.g. to simulate state left by a prior session.
    pub fn with_slot(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut store = Self::new();
        store.slots.insert(key.into(), value.into());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&mut self, key: &str) -> Result<(), StorageError> {
        self.slots.remove(key);
        Ok(())
    }
}
