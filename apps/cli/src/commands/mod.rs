//! # CLI Commands Module
//!
//! One module per subcommand, each a thin handler over the inventory
//! store.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── list.rs     ◄─── The inventory list view
//! ├── add.rs      ◄─── Add a product
//! ├── update.rs   ◄─── Edit a product (pre-fill + overlay)
//! └── delete.rs   ◄─── Delete with confirmation prompt
//! ```
//!
//! Handlers are generic over the [`Storage`](grocer_store::Storage)
//! backend, so tests drive them against `MemoryStorage` while the binary
//! runs them against `FileStorage`.

pub mod add;
pub mod delete;
pub mod list;
pub mod update;
