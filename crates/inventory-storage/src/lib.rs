//! # inventory-storage: Category-Indexed Item Storage
//!
//! Owns the index from category name to the items filed under it, and keeps
//! that index consistent with each item's id and category.
//!
//! ## Module Structure
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      inventory-storage                                  │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    storage      │   │     config      │   │     error       │       │
//! │  │  ItemStorage    │   │  StorageConfig  │   │  StorageError   │       │
//! │  │  add / remove   │   │  prune/retain   │   │  NotFound       │       │
//! │  │  move / lookup  │   │  duplicates     │   │  DuplicateId    │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Single-threaded by contract. An integrating layer that shares one
//! storage between threads wraps it in its own lock.
//!
//! ## Example Usage
//!
//! ```rust
//! use inventory_core::Item;
//! use inventory_storage::ItemStorage;
//! use uuid::Uuid;
//!
//! let mut storage = ItemStorage::new();
//! let widget = Item::new("Widget", "Tools", Uuid::new_v4(), "Ahandle", 9.99).unwrap();
//!
//! storage.add_item(widget.clone()).unwrap();
//! assert_eq!(storage.items_in_category("Tools").count(), 1);
//!
//! storage.remove_item(&widget).unwrap();
//! assert_eq!(storage.items_in_category("Tools").count(), 0);
//! ```

pub mod config;
pub mod error;
pub mod storage;

pub use config::{EmptyCategoryPolicy, StorageConfig};
pub use error::{StorageError, StorageResult};
pub use storage::ItemStorage;
