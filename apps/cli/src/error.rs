//! # CLI Error Type
//!
//! Unified error type for the `grocer` binary.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Grocer                         │
//! │                                                                 │
//! │  ValidationError ──► StoreError ──► CliError ──► stderr, exit 1 │
//! │                                                                 │
//! │  Validation messages pass through verbatim, so the user sees    │
//! │  "sellingPrice must not be negative", not a wrapped chain.      │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use grocer_store::StoreError;

/// Errors surfaced to the terminal.
#[derive(Debug, Error)]
pub enum CliError {
    /// An inventory operation failed (validation or persistence).
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The platform data directory could not be determined.
    #[error("could not determine the data directory: {0}")]
    DataDir(String),

    /// Reading the confirmation prompt or writing output failed.
    #[error("terminal input/output failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// =============================================================================
// Unit Tests
// =============================================================================
