//! # Domain Types
//!
//! Core domain types used throughout Grocer.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                            │
//! │                                                                 │
//! │  ┌──────────────────┐         ┌──────────────────┐              │
//! │  │     Product      │         │     Category     │              │
//! │  │  ──────────────  │         │  ──────────────  │              │
//! │  │  product_id      │────────►│  Fruits          │              │
//! │  │  category        │         │  Vegetables      │              │
//! │  │  product_name    │         │  Dairy           │              │
//! │  │  quantity        │         └──────────────────┘              │
//! │  │  mrp             │                                           │
//! │  │  selling_price   │                                           │
//! │  └──────────────────┘                                           │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Format
//! A persisted product is a JSON object with exactly six camelCase fields:
//!
//! ```json
//! {
//!   "productId": "P1",
//!   "category": "Fruits",
//!   "productName": "Apple",
//!   "quantity": 10,
//!   "mrp": 5000,
//!   "sellingPrice": 4500
//! }
//! ```
//!
//! Prices are integer cents (see [`Money`]); the full inventory is a JSON
//! array of these objects, in insertion order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Category
// =============================================================================

/// The product category.
///
/// Serialized variant names are the wire names (`"Fruits"`, `"Vegetables"`,
/// `"Dairy"`). The default is `Fruits`, matching the pre-selected option of
/// the add form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Category {
    #[default]
    Fruits,
    Vegetables,
    Dairy,
}

impl Category {
    /// All categories, in form order.
    pub const ALL: [Category; 3] = [Category::Fruits, Category::Vegetables, Category::Dairy];

    /// Returns the wire name of the category.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Fruits => "Fruits",
            Category::Vegetables => "Vegetables",
            Category::Dairy => "Dairy",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known category.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category '{0}', expected one of: Fruits, Vegetables, Dairy")]
pub struct ParseCategoryError(String);

/// Case-insensitive parsing of the wire names, for CLI input.
impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fruits" => Ok(Category::Fruits),
            "vegetables" => Ok(Category::Vegetables),
            "dairy" => Ok(Category::Dairy),
            _ => Err(ParseCategoryError(s.to_string())),
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product record: one inventory line item.
///
/// `product_id` is the lookup key. It is supplied by the user, immutable
/// once created, and assumed unique across the inventory (the store does
/// not enforce uniqueness; see the store documentation).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier, used as the lookup key for update and delete.
    pub product_id: String,

    /// Product category. Absent in stored data means `Fruits`.
    #[serde(default)]
    pub category: Category,

    /// Display name shown in the inventory list.
    pub product_name: String,

    /// Units on hand. Non-negative.
    pub quantity: i64,

    /// Maximum retail price, in cents.
    pub mrp: Money,

    /// Actual selling price, in cents.
    pub selling_price: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn apple() -> Product {
        Product {
            product_id: "P1".to_string(),
            category: Category::Fruits,
            product_name: "Apple".to_string(),
            quantity: 10,
            mrp: Money::from_cents(5000),
            selling_price: Money::from_cents(4500),
        }
    }

    #[test]
    fn test_category_default() {
        assert_eq!(Category::default(), Category::Fruits);
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("Fruits".parse::<Category>().unwrap(), Category::Fruits);
        assert_eq!("dairy".parse::<Category>().unwrap(), Category::Dairy);
        assert_eq!(
            " VEGETABLES ".parse::<Category>().unwrap(),
            Category::Vegetables
        );
        assert!("meat".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_display_matches_wire_name() {
        for category in Category::ALL {
            assert_eq!(
                serde_json::to_string(&category).unwrap(),
                format!("\"{category}\"")
            );
        }
    }

    #[test]
    fn test_product_wire_format() {
        let json = serde_json::to_value(apple()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "productId": "P1",
                "category": "Fruits",
                "productName": "Apple",
                "quantity": 10,
                "mrp": 5000,
                "sellingPrice": 4500,
            })
        );
    }

    #[test]
    fn test_product_round_trip() {
        let product = apple();
        let json = serde_json::to_string(&product).unwrap();
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(back, product);
    }

    #[test]
    fn test_missing_category_defaults_to_fruits() {
        let raw = r#"{
            "productId": "P2",
            "productName": "Milk",
            "quantity": 3,
            "mrp": 300,
            "sellingPrice": 250
        }"#;
        let product: Product = serde_json::from_str(raw).unwrap();
        assert_eq!(product.category, Category::Fruits);
    }
}
