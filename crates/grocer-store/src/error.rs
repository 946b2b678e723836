//! # Store Error Types
//!
//! Error types for inventory store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                            │
//! │                                                                 │
//! │  ValidationError (grocer-core)                                  │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  StoreError (this module) ← adds persistence failures           │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  CliError (in app) ← rendered for the terminal                  │
//! │                                                                 │
//! │  Load-time failures never take this path: a missing or          │
//! │  unparsable document degrades silently to an empty inventory.   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use std::io;
use thiserror::Error;

use grocer_core::ValidationError;

/// Inventory store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The record failed validation; the inventory is unchanged.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Reading a key from the storage backend failed.
    ///
    /// A key that simply does not exist is not an error; backends report
    /// that as `None`.
    #[error("failed to read key '{key}' from storage: {source}")]
    Read {
        key: String,
        #[source]
        source: io::Error,
    },

    /// Writing a key to the storage backend failed (permissions, disk
    /// full). The in-memory collection has already mutated when this is
    /// raised; the caller decides whether to retry or give up.
    #[error("failed to write key '{key}' to storage: {source}")]
    Write {
        key: String,
        #[source]
        source: io::Error,
    },

    /// Serializing the inventory to JSON failed.
    #[error("failed to encode inventory: {0}")]
    Encode(#[from] serde_json::Error),
}

impl StoreError {
    /// Creates a `Read` error for the given storage key.
    pub fn read(key: impl Into<String>, source: io::Error) -> Self {
        StoreError::Read {
            key: key.into(),
            source,
        }
    }

    /// Creates a `Write` error for the given storage key.
    pub fn write(key: impl Into<String>, source: io::Error) -> Self {
        StoreError::Write {
            key: key.into(),
            source,
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
