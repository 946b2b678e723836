//! # Memory Storage
//!
//! In-memory [`Storage`] fake for tests. Never fails, keeps everything in
//! a map, and lets tests inspect exactly what the store persisted.

use std::collections::HashMap;

use crate::error::StoreResult;
use crate::storage::Storage;

/// In-memory storage backend.
///
/// ## Usage
/// ```rust
/// use grocer_store::{MemoryStorage, Storage};
///
/// let mut storage = MemoryStorage::new();
/// storage.save("groceryInventory", "[]").unwrap();
/// assert_eq!(storage.load("groceryInventory").unwrap().as_deref(), Some("[]"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    /// Creates an empty in-memory storage.
    pub fn new() -> Self {
        MemoryStorage::default()
    }

    /// Creates a storage pre-seeded with one raw value.
    ///
    /// Useful for exercising the load path against arbitrary stored data,
    /// including data that is not valid JSON.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut storage = MemoryStorage::new();
        storage.entries.insert(key.into(), value.into());
        storage
    }

    /// Returns the raw value currently held under a key, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl Storage for MemoryStorage {
    fn load(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
