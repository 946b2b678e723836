//! # Storage Trait
//!
//! The storage abstraction the inventory store persists through.
//!
//! ## Design
//! The store never touches the file system directly. It holds an injected
//! `Storage` implementation and reads/writes whole documents by key, which
//! keeps the store testable against an in-memory fake:
//!
//! ```text
//! InventoryStore ──► Storage (trait)
//!                      ├── FileStorage    production
//!                      └── MemoryStorage  tests
//! ```

use crate::error::StoreResult;

/// Persistent key-value storage for whole documents.
///
/// Values are opaque strings; the inventory store is the only party that
/// interprets them (as a JSON array of product records). A `save` replaces
/// the prior value of the key in full; there are no partial writes.
pub trait Storage {
    /// Loads the value for a key. Returns `Ok(None)` if the key has never
    /// been written.
    fn load(&self, key: &str) -> StoreResult<Option<String>>;

    /// Saves a value under a key, overwriting any prior value.
    fn save(&mut self, key: &str, value: &str) -> StoreResult<()>;
}
