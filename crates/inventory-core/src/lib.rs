//! # inventory-core: Item Record & Validation
//!
//! Pure domain types for the inventory catalog. No I/O, no global state.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Inventory Catalog Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │          Integrating layer (persistence, UI, network)           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ add / remove / lookup                  │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              inventory-storage (category index)                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ owns validated Items                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ inventory-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐   ┌─────────────┐   ┌───────────────────┐      │   │
//! │  │   │   item    │   │ validation  │   │      error        │      │   │
//! │  │   │   Item    │   │ letters-only│   │  ValidationError  │      │   │
//! │  │   │  Builder  │   │   checks    │   │                   │      │   │
//! │  │   └───────────┘   └─────────────┘   └───────────────────┘      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`item`] - The [`Item`] record and its builder
//! - [`validation`] - The shared string validator
//! - [`error`] - [`ValidationError`]
//!
//! ## Example Usage
//!
//! ```rust
//! use inventory_core::Item;
//! use uuid::Uuid;
//!
//! let mut item = Item::new("Widget", "Tools", Uuid::new_v4(), "Ahandle", 9.99).unwrap();
//!
//! // Setters validate before assigning
//! assert!(item.set_name("Widget Pro").is_err());
//! assert_eq!(item.name(), "Widget");
//! ```

pub mod error;
pub mod item;
pub mod validation;

pub use error::{ValidationError, ValidationResult};
pub use item::{Item, ItemBuilder};
