//! # Inventory Store
//!
//! The ordered collection of product records and its mirror in persistent
//! storage.
//!
//! ## Mutation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Read-Modify-Write Cycle                      │
//! │                                                                 │
//! │  open(storage)                                                  │
//! │       │  load "groceryInventory", parse JSON array              │
//! │       │  (missing or unparsable → empty inventory, warn log)    │
//! │       ▼                                                         │
//! │  Vec<Product>  ◄── add / update / delete                        │
//! │       │                                                         │
//! │       ▼  after EVERY mutation                                   │
//! │  persist()  ── serialize the FULL collection, overwrite the key │
//! │                                                                 │
//! │  Single consumer, synchronous, no partial writes.               │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! `product_id` is the lookup key. Nothing enforces its uniqueness, so
//! `update` and `delete` act on every matching record rather than the
//! first one.

use tracing::{debug, warn};

use grocer_core::validation::validate_product;
use grocer_core::Product;

use crate::error::StoreResult;
use crate::storage::Storage;

/// Fixed storage key for the inventory document.
pub const STORAGE_KEY: &str = "groceryInventory";

/// The inventory store.
///
/// Holds the ordered product collection in memory and re-serializes it to
/// the injected [`Storage`] backend after every mutation.
///
/// ## Usage
/// ```rust,no_run
/// use grocer_store::{FileStorage, InventoryStore};
///
/// let mut store = InventoryStore::open(FileStorage::new("/var/lib/grocer"));
/// for product in store.items() {
///     println!("{}", product.product_name);
/// }
/// ```
#[derive(Debug)]
pub struct InventoryStore<S> {
    storage: S,
    items: Vec<Product>,
}

impl<S: Storage> InventoryStore<S> {
    /// Opens the store, loading the persisted inventory.
    ///
    /// Loading never fails: a missing key, an unreadable backend, or an
    /// unparsable document all degrade to the empty inventory. The failure
    /// is logged and otherwise swallowed; the next successful mutation
    /// overwrites whatever was stored.
    pub fn open(storage: S) -> Self {
        let items = match storage.load(STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Product>>(&raw) {
                Ok(items) => items,
                Err(err) => {
                    warn!(%err, "stored inventory is unreadable, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(%err, "storage read failed, starting empty");
                Vec::new()
            }
        };

        debug!(count = items.len(), "inventory loaded");
        InventoryStore { storage, items }
    }

    /// Returns the products in insertion order.
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Returns the first product with the given id, if any.
    pub fn get(&self, product_id: &str) -> Option<&Product> {
        self.items.iter().find(|p| p.product_id == product_id)
    }

    /// Returns the number of products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks whether the inventory is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds a product to the end of the inventory and persists.
    ///
    /// ## Errors
    /// Rejects the record with a validation error if any field fails the
    /// presence gate; the inventory and the stored document are unchanged.
    /// Duplicate ids are not checked.
    pub fn add(&mut self, product: Product) -> StoreResult<()> {
        validate_product(&product)?;

        debug!(product_id = %product.product_id, "adding product");
        self.items.push(product);
        self.persist()
    }

    /// Replaces every record matching the incoming record's id, in place.
    ///
    /// Positions and overall length are preserved. No match leaves the
    /// collection unchanged; the document is persisted either way.
    ///
    /// ## Returns
    /// Whether any record was replaced.
    pub fn update(&mut self, product: Product) -> StoreResult<bool> {
        validate_product(&product)?;

        let mut replaced = false;
        for slot in self
            .items
            .iter_mut()
            .filter(|p| p.product_id == product.product_id)
        {
            *slot = product.clone();
            replaced = true;
        }

        if replaced {
            debug!(product_id = %product.product_id, "product updated");
        } else {
            debug!(product_id = %product.product_id, "no matching product, update is a no-op");
        }
        self.persist()?;
        Ok(replaced)
    }

    /// Removes every record with the given id.
    ///
    /// Confirmation is the caller's job; the store deletes unconditionally.
    /// No match leaves the collection unchanged; the document is persisted
    /// either way.
    ///
    /// ## Returns
    /// Whether any record was removed.
    pub fn delete(&mut self, product_id: &str) -> StoreResult<bool> {
        let before = self.items.len();
        self.items.retain(|p| p.product_id != product_id);
        let removed = self.items.len() != before;

        if removed {
            debug!(product_id = %product_id, "product deleted");
        } else {
            debug!(product_id = %product_id, "no matching product, delete is a no-op");
        }
        self.persist()?;
        Ok(removed)
    }

    /// Serializes the full collection to storage under [`STORAGE_KEY`],
    /// overwriting the prior document.
    pub fn persist(&mut self) -> StoreResult<()> {
        let raw = serde_json::to_string(&self.items)?;
        self.storage.save(STORAGE_KEY, &raw)
    }

    /// Consumes the store, returning the storage backend.
    pub fn into_storage(self) -> S {
        self.storage
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStorage;
    use grocer_core::{Category, Money};

    fn product(id: &str, name: &str) -> Product {
        Product {
            product_id: id.to_string(),
            category: Category::Fruits,
            product_name: name.to_string(),
            quantity: 10,
            mrp: Money::from_cents(5000),
            selling_price: Money::from_cents(4500),
        }
    }

    fn empty_store() -> InventoryStore<MemoryStorage> {
        InventoryStore::open(MemoryStorage::new())
    }

    #[test]
    fn test_open_with_no_stored_data_is_empty() {
        let store = empty_store();
        assert!(store.is_empty());
    }

    #[test]
    fn test_open_with_unparsable_data_degrades_to_empty() {
        let storage = MemoryStorage::with_entry(STORAGE_KEY, "definitely not json");
        let store = InventoryStore::open(storage);
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_appends_at_end_and_survives_reopen() {
        let mut store = empty_store();
        store.add(product("P1", "Apple")).unwrap();
        store.add(product("P2", "Banana")).unwrap();

        let reopened = InventoryStore::open(store.into_storage());
        let ids: Vec<_> = reopened
            .items()
            .iter()
            .map(|p| p.product_id.as_str())
            .collect();
        assert_eq!(ids, ["P1", "P2"]);
    }

    #[test]
    fn test_add_persists_field_for_field() {
        let mut store = empty_store();
        store.add(product("P1", "Apple")).unwrap();
        let in_memory = store.items().to_vec();

        let storage = store.into_storage();
        let raw = storage.get(STORAGE_KEY).unwrap();
        let stored: Vec<Product> = serde_json::from_str(raw).unwrap();
        assert_eq!(stored, in_memory);
    }

    #[test]
    fn test_add_rejects_invalid_record_and_does_not_persist() {
        let mut store = empty_store();
        let bad = product("", "Apple");

        assert!(store.add(bad).is_err());
        assert!(store.is_empty());
        // Nothing was written, not even an empty array.
        assert!(store.into_storage().get(STORAGE_KEY).is_none());
    }

    #[test]
    fn test_update_replaces_in_place() {
        let mut store = empty_store();
        store.add(product("P1", "Apple")).unwrap();
        store.add(product("P2", "Banana")).unwrap();

        let mut changed = product("P1", "Green Apple");
        changed.selling_price = Money::from_cents(4000);
        assert!(store.update(changed).unwrap());

        assert_eq!(store.len(), 2);
        assert_eq!(store.items()[0].product_name, "Green Apple");
        assert_eq!(store.items()[0].selling_price, Money::from_cents(4000));
        assert_eq!(store.items()[1].product_name, "Banana");
    }

    #[test]
    fn test_update_unknown_id_is_a_noop() {
        let mut store = empty_store();
        store.add(product("P1", "Apple")).unwrap();

        let before = store.items().to_vec();
        assert!(!store.update(product("P9", "Ghost")).unwrap());
        assert_eq!(store.items(), &before[..]);
    }

    #[test]
    fn test_update_rejects_invalid_record() {
        let mut store = empty_store();
        store.add(product("P1", "Apple")).unwrap();

        let mut bad = product("P1", "Apple");
        bad.quantity = -1;
        assert!(store.update(bad).is_err());
        assert_eq!(store.items()[0].quantity, 10);
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let mut store = empty_store();
        store.add(product("P1", "Apple")).unwrap();
        store.add(product("P2", "Banana")).unwrap();

        assert!(store.delete("P1").unwrap());
        assert_eq!(store.len(), 1);
        assert!(store.get("P1").is_none());
        assert!(store.get("P2").is_some());
    }

    #[test]
    fn test_delete_unknown_id_is_a_noop() {
        let mut store = empty_store();
        store.add(product("P1", "Apple")).unwrap();

        assert!(!store.delete("P9").unwrap());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_duplicate_ids_are_updated_and_deleted_together() {
        // Uniqueness is never enforced, so both operations hit every match.
        let mut store = empty_store();
        store.add(product("P1", "Apple")).unwrap();
        store.add(product("P1", "Apple Again")).unwrap();
        store.add(product("P2", "Banana")).unwrap();

        assert!(store.update(product("P1", "Renamed")).unwrap());
        assert_eq!(store.items()[0].product_name, "Renamed");
        assert_eq!(store.items()[1].product_name, "Renamed");

        assert!(store.delete("P1").unwrap());
        assert_eq!(store.len(), 1);
        assert_eq!(store.items()[0].product_id, "P2");
    }

    /// The full lifecycle: add, reload, edit one field, delete, reload.
    #[test]
    fn test_add_update_delete_scenario() {
        let mut store = empty_store();
        store.add(product("P1", "Apple")).unwrap();

        let storage = store.into_storage();
        let mut store = InventoryStore::open(storage);
        assert_eq!(store.len(), 1);
        assert_eq!(store.items()[0], product("P1", "Apple"));

        let mut edited = product("P1", "Apple");
        edited.selling_price = Money::from_cents(4000);
        assert!(store.update(edited).unwrap());
        assert_eq!(store.items()[0].selling_price, Money::from_cents(4000));
        assert_eq!(store.items()[0].product_id, "P1");

        assert!(store.delete("P1").unwrap());
        let reopened = InventoryStore::open(store.into_storage());
        assert!(reopened.is_empty());
    }
}
