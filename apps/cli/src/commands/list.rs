//! # List Command
//!
//! Renders the inventory list view: one row per product with name,
//! category, quantity, and selling price.

use grocer_core::Product;
use grocer_store::{InventoryStore, Storage};

use crate::error::CliResult;

const NAME_HEADER: &str = "Product Name";
const CATEGORY_WIDTH: usize = 10;
const QUANTITY_WIDTH: usize = 8;
const PRICE_WIDTH: usize = 13;

/// Prints the inventory list.
pub fn run<S: Storage>(store: &InventoryStore<S>) -> CliResult<()> {
    print!("{}", render(store.items()));
    Ok(())
}

/// Renders the table; split out from [`run`] so it can be tested as a
/// plain string.
fn render(items: &[Product]) -> String {
    if items.is_empty() {
        return "No products in inventory\n".to_string();
    }

    // The name column grows with the data; the rest are fixed-width.
    let name_width = items
        .iter()
        .map(|p| p.product_name.len())
        .chain(std::iter::once(NAME_HEADER.len()))
        .max()
        .unwrap_or(NAME_HEADER.len());

    let mut out = String::new();
    out.push_str(&format!(
        "{NAME_HEADER:<name_width$}  {:<CATEGORY_WIDTH$}  {:>QUANTITY_WIDTH$}  {:>PRICE_WIDTH$}\n",
        "Category", "Quantity", "Selling Price",
    ));
    out.push_str(&format!(
        "{}  {}  {}  {}\n",
        "-".repeat(name_width),
        "-".repeat(CATEGORY_WIDTH),
        "-".repeat(QUANTITY_WIDTH),
        "-".repeat(PRICE_WIDTH),
    ));

    for product in items {
        out.push_str(&format!(
            "{:<name_width$}  {:<CATEGORY_WIDTH$}  {:>QUANTITY_WIDTH$}  {:>PRICE_WIDTH$}\n",
            product.product_name,
            product.category.to_string(),
            product.quantity,
            product.selling_price.to_string(),
        ));
    }

    out
}

// =============================================================================
// Unit Tests
// =============================================================================
