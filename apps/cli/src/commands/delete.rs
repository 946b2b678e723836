//! # Delete Command
//!
//! Removes a product after interactive confirmation. The prompt is the
//! CLI's responsibility; the store deletes unconditionally once asked.

use std::io::{self, BufRead, Write};

use grocer_store::{InventoryStore, Storage};

use crate::error::CliResult;

/// Deletes a product, asking for confirmation first unless `yes` is set.
pub fn run<S: Storage>(store: &mut InventoryStore<S>, product_id: &str, yes: bool) -> CliResult<()> {
    if !yes && !confirm("Are you sure you want to delete this item?")? {
        println!("Delete cancelled");
        return Ok(());
    }

    if store.delete(product_id)? {
        println!("Deleted {product_id}");
    } else {
        println!("No product with id '{product_id}'; nothing deleted");
    }
    Ok(())
}

/// Asks a yes/no question on the terminal. Defaults to no.
fn confirm(prompt: &str) -> CliResult<bool> {
    print!("{prompt} [y/N] ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes" | "Yes"))
}

// =============================================================================
// Unit Tests
// =============================================================================
