//! # grocer-core: Pure Domain Logic for Grocer
//!
//! This crate is the heart of Grocer. It contains the product record types
//! and the rules that gate them, as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      Grocer Architecture                        │
//! │                                                                 │
//! │  ┌───────────────────────────────────────────────────────────┐  │
//! │  │                  CLI (apps/cli)                           │  │
//! │  │    list view ──► add/edit form ──► delete confirmation   │  │
//! │  └────────────────────────────┬──────────────────────────────┘  │
//! │                               │                                 │
//! │  ┌────────────────────────────▼──────────────────────────────┐  │
//! │  │              ★ grocer-core (THIS CRATE) ★                 │  │
//! │  │                                                           │  │
//! │  │   ┌──────────┐  ┌──────────┐  ┌────────────┐             │  │
//! │  │   │  types   │  │  money   │  │ validation │             │  │
//! │  │   │ Product  │  │  Money   │  │   rules    │             │  │
//! │  │   │ Category │  │          │  │   checks   │             │  │
//! │  │   └──────────┘  └──────────┘  └────────────┘             │  │
//! │  │                                                           │  │
//! │  │   NO I/O • NO STORAGE • PURE FUNCTIONS                   │  │
//! │  └────────────────────────────┬──────────────────────────────┘  │
//! │                               │                                 │
//! │  ┌────────────────────────────▼──────────────────────────────┐  │
//! │  │              grocer-store (Persistence Layer)             │  │
//! │  └───────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types ([`Product`], [`Category`])
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Validation error types
//! - [`validation`] - Record validation rules

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use grocer_core::Money` instead of
// `use grocer_core::money::Money`

pub use error::{ValidationError, ValidationResult};
pub use money::Money;
pub use types::{Category, Product};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a product id.
pub const MAX_PRODUCT_ID_LEN: usize = 50;

/// Maximum length of a product name.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;
