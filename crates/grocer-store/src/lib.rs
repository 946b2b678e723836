//! # grocer-store: Persistence Layer for Grocer
//!
//! This crate provides the inventory store: an ordered, in-memory collection
//! of product records mirrored to persistent local key-value storage after
//! every mutation.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                       Grocer Data Flow                          │
//! │                                                                 │
//! │  CLI command (add / update / delete / list)                     │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  ┌───────────────────────────────────────────────────────────┐  │
//! │  │                 grocer-store (THIS CRATE)                 │  │
//! │  │                                                           │  │
//! │  │   ┌────────────────┐        ┌───────────────────────┐    │  │
//! │  │   │ InventoryStore │        │  Storage (trait)      │    │  │
//! │  │   │ (inventory.rs) │───────►│  ├── FileStorage      │    │  │
//! │  │   │                │        │  └── MemoryStorage    │    │  │
//! │  │   │ Vec<Product>   │        │      (tests)          │    │  │
//! │  │   └────────────────┘        └───────────────────────┘    │  │
//! │  │                                                           │  │
//! │  └───────────────────────────────────────────────────────────┘  │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  ~/.local/share/grocer/groceryInventory.json                    │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`storage`] - The `Storage` trait (load/save by key)
//! - [`file`] - File-backed storage, one JSON document per key
//! - [`memory`] - In-memory storage for tests
//! - [`inventory`] - The `InventoryStore` itself
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust
//! use grocer_store::{InventoryStore, MemoryStorage};
//! use grocer_core::{Category, Money, Product};
//!
//! let mut store = InventoryStore::open(MemoryStorage::new());
//! store.add(Product {
//!     product_id: "P1".to_string(),
//!     category: Category::Fruits,
//!     product_name: "Apple".to_string(),
//!     quantity: 10,
//!     mrp: Money::from_cents(5000),
//!     selling_price: Money::from_cents(4500),
//! })?;
//! assert_eq!(store.len(), 1);
//! # Ok::<(), grocer_store::StoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod file;
pub mod inventory;
pub mod memory;
pub mod storage;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use file::FileStorage;
pub use inventory::{InventoryStore, STORAGE_KEY};
pub use memory::MemoryStorage;
pub use storage::Storage;
