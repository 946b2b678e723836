//! # Validation Module
//!
//! Record validation rules for Grocer.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                          │
//! │                                                                 │
//! │  Layer 1: CLI argument parsing                                  │
//! │  ├── Type checks (quantity is a number, prices parse)           │
//! │  └── Required flags present                                     │
//! │           │                                                     │
//! │           ▼                                                     │
//! │  Layer 2: THIS MODULE, called by the store on add/update        │
//! │  ├── Presence (trimmed-empty strings rejected)                  │
//! │  ├── Length caps on id and name                                 │
//! │  └── Numeric fields non-negative                                │
//! │                                                                 │
//! │  A record rejected here never reaches the inventory, so the     │
//! │  collection and the persisted document stay unchanged.          │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is deliberately no uniqueness check: duplicate `productId`s are
//! not guarded against anywhere, and update/delete act on every match.

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::types::Product;
use crate::{MAX_PRODUCT_ID_LEN, MAX_PRODUCT_NAME_LEN};

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a product id.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 50 characters
///
/// ## Example
/// ```rust
/// use grocer_core::validation::validate_product_id;
///
/// assert!(validate_product_id("P1").is_ok());
/// assert!(validate_product_id("").is_err());
/// assert!(validate_product_id(&"X".repeat(100)).is_err());
/// ```
pub fn validate_product_id(id: &str) -> ValidationResult<()> {
    let id = id.trim();

    if id.is_empty() {
        return Err(ValidationError::required("productId"));
    }

    if id.len() > MAX_PRODUCT_ID_LEN {
        return Err(ValidationError::TooLong {
            field: "productId".to_string(),
            max: MAX_PRODUCT_ID_LEN,
        });
    }

    Ok(())
}

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::required("productName"));
    }

    if name.len() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "productName".to_string(),
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a quantity value.
///
/// ## Rules
/// - Must be non-negative (>= 0); zero means out of stock
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a price field.
///
/// ## Rules
/// - Must be non-negative; zero is allowed (free items)
///
/// ## Arguments
/// * `field` - Wire name of the field being checked (`mrp`, `sellingPrice`)
/// * `price` - The price to check
pub fn validate_price(field: &str, price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: field.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Record Validator
// =============================================================================

/// Validates a complete product record.
///
/// Every field must pass its individual check before the record may enter
/// the inventory. The first failing field wins, in form order.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_product_id(&product.product_id)?;
    validate_product_name(&product.product_name)?;
    validate_quantity(product.quantity)?;
    validate_price("mrp", product.mrp)?;
    validate_price("sellingPrice", product.selling_price)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
