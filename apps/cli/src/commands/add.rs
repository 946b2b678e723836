//! # Add Command
//!
//! Appends a new product to the inventory. The record is assembled from
//! the form flags by the argument layer; validation happens in the store.

use grocer_core::Product;
use grocer_store::{InventoryStore, Storage};

use crate::error::CliResult;

/// Adds a product and reports the result.
pub fn run<S: Storage>(store: &mut InventoryStore<S>, product: Product) -> CliResult<()> {
    let label = format!("{} ({})", product.product_name, product.product_id);
    store.add(product)?;
    println!("Added {label} to the inventory");
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use grocer_core::{Category, Money};
    use grocer_store::MemoryStorage;

    #[test]
    fn test_add_appends_to_store() {
        let mut store = InventoryStore::open(MemoryStorage::new());
        let product = Product {
            product_id: "P1".to_string(),
            category: Category::Fruits,
            product_name: "Apple".to_string(),
            quantity: 10,
            mrp: Money::from_cents(5000),
            selling_price: Money::from_cents(4500),
        };

        run(&mut store, product).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.items()[0].product_id, "P1");
    }

    #[test]
    fn test_add_surfaces_validation_errors() {
        let mut store = InventoryStore::open(MemoryStorage::new());
        let product = Product {
            product_id: "P1".to_string(),
            category: Category::Fruits,
            product_name: "".to_string(),
            quantity: 10,
            mrp: Money::from_cents(5000),
            selling_price: Money::from_cents(4500),
        };

        let err = run(&mut store, product).unwrap_err();
        assert_eq!(err.to_string(), "productName is required");
        assert!(store.is_empty());
    }
}
