//! # Update Command
//!
//! The edit form: the stored record pre-fills every field, the provided
//! flags overlay it, and the merged record replaces the stored one
//! wholesale through the store.

use grocer_core::{Category, Money};
use grocer_store::{InventoryStore, Storage};

use crate::error::CliResult;

/// Field edits collected from the command line. `None` keeps the stored
/// value.
#[derive(Debug, Default)]
pub struct Edits {
    pub category: Option<Category>,
    pub product_name: Option<String>,
    pub quantity: Option<i64>,
    pub mrp: Option<Money>,
    pub selling_price: Option<Money>,
}

/// Edits an existing product.
///
/// An unknown id is reported but is not an error: the store treats
/// updates against missing records as a no-op, and so does the CLI.
pub fn run<S: Storage>(
    store: &mut InventoryStore<S>,
    product_id: &str,
    edits: Edits,
) -> CliResult<()> {
    let Some(existing) = store.get(product_id) else {
        println!("No product with id '{product_id}'; nothing to update");
        return Ok(());
    };

    // Pre-fill from the stored record, then overlay the provided edits.
    // The id itself is immutable; there is no flag to change it.
    let mut record = existing.clone();
    if let Some(category) = edits.category {
        record.category = category;
    }
    if let Some(product_name) = edits.product_name {
        record.product_name = product_name;
    }
    if let Some(quantity) = edits.quantity {
        record.quantity = quantity;
    }
    if let Some(mrp) = edits.mrp {
        record.mrp = mrp;
    }
    if let Some(selling_price) = edits.selling_price {
        record.selling_price = selling_price;
    }

    store.update(record)?;
    println!("Updated {product_id}");
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use grocer_core::Product;
    use grocer_store::MemoryStorage;

    fn store_with_apple() -> InventoryStore<MemoryStorage> {
        let mut store = InventoryStore::open(MemoryStorage::new());
        store
            .add(Product {
                product_id: "P1".to_string(),
                category: Category::Fruits,
                product_name: "Apple".to_string(),
                quantity: 10,
                mrp: Money::from_cents(5000),
                selling_price: Money::from_cents(4500),
            })
            .unwrap();
        store
    }

    #[test]
    fn test_update_overlays_only_provided_fields() {
        let mut store = store_with_apple();

        let edits = Edits {
            selling_price: Some(Money::from_cents(4000)),
            ..Edits::default()
        };
        run(&mut store, "P1", edits).unwrap();

        let product = store.get("P1").unwrap();
        assert_eq!(product.selling_price, Money::from_cents(4000));
        // Everything else kept its stored value.
        assert_eq!(product.product_name, "Apple");
        assert_eq!(product.quantity, 10);
        assert_eq!(product.mrp, Money::from_cents(5000));
        assert_eq!(product.category, Category::Fruits);
    }

    #[test]
    fn test_update_can_change_every_editable_field() {
        let mut store = store_with_apple();

        let edits = Edits {
            category: Some(Category::Dairy),
            product_name: Some("Cheese".to_string()),
            quantity: Some(2),
            mrp: Some(Money::from_cents(900)),
            selling_price: Some(Money::from_cents(800)),
        };
        run(&mut store, "P1", edits).unwrap();

        let product = store.get("P1").unwrap();
        assert_eq!(product.product_id, "P1");
        assert_eq!(product.category, Category::Dairy);
        assert_eq!(product.product_name, "Cheese");
        assert_eq!(product.quantity, 2);
        assert_eq!(product.mrp, Money::from_cents(900));
        assert_eq!(product.selling_price, Money::from_cents(800));
    }

    #[test]
    fn test_update_unknown_id_is_not_an_error() {
        let mut store = store_with_apple();
        let result = run(&mut store, "P9", Edits::default());

        assert!(result.is_ok());
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("P1").unwrap().product_name, "Apple");
    }

    #[test]
    fn test_update_surfaces_validation_errors() {
        let mut store = store_with_apple();

        let edits = Edits {
            quantity: Some(-5),
            ..Edits::default()
        };
        let err = run(&mut store, "P1", edits).unwrap_err();

        assert_eq!(err.to_string(), "quantity must not be negative");
        assert_eq!(store.get("P1").unwrap().quantity, 10);
    }
}
