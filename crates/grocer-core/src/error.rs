//! # Error Types
//!
//! Validation error types for grocer-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         Error Types                             │
//! │                                                                 │
//! │  grocer-core errors (this file)                                 │
//! │  └── ValidationError  - Record validation failures              │
//! │                                                                 │
//! │  grocer-store errors (separate crate)                           │
//! │  └── StoreError       - Persistence failures                    │
//! │                                                                 │
//! │  CLI errors (in app)                                            │
//! │  └── CliError         - What the user sees                      │
//! │                                                                 │
//! │  Flow: ValidationError → StoreError → CliError → terminal       │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Record validation errors.
///
/// These errors occur when a product record doesn't meet requirements.
/// They are raised before any mutation touches the inventory, so a rejected
/// record leaves the collection unchanged.
///
/// Field names in messages are the wire names (`productId`, `productName`,
/// `quantity`, `mrp`, `sellingPrice`) so they line up with what the user
/// typed into the form.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// A numeric field is negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },
}

impl ValidationError {
    /// Creates a `Required` error for the given wire field name.
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
