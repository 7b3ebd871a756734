//! # Item Storage
//!
//! The category index: category name → items filed under it, in insertion
//! order.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    ItemStorage Operations                               │
//! │                                                                         │
//! │  Operation                 Index Change                Failure          │
//! │  ─────────────────────     ─────────────────────────   ──────────────   │
//! │                                                                         │
//! │  add_item(item) ─────────► index[cat].push(item)       None → Invalid   │
//! │                            (bucket created on demand)  dup id (opt-in)  │
//! │                                                                         │
//! │  remove_item(&item) ─────► index[item.cat] minus the   NotFound         │
//! │                            first entry with item.id                     │
//! │                                                                         │
//! │  move_item(&item, cat) ──► remove from old bucket,     Invalid cat,     │
//! │                            append to new bucket        NotFound         │
//! │                                                                         │
//! │  items_in_category(cat) ─► (read only, lazy)           never fails      │
//! │                                                                         │
//! │  NOTE: Any failure leaves the index exactly as it was.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Every stored item sits in the bucket keyed by its own category.
//! - Storage owns its items. Callers get `&Item` back, so nothing outside
//!   this module can change a stored item's category under the index.
//! - Under [`EmptyCategoryPolicy::Prune`] no empty bucket is ever kept.
//!
//! ## Caller Hazard
//! Removal looks in the bucket named by the *passed* item's category. If the
//! caller changed the category on their own copy after adding it, the stored
//! item is not found there and removal fails with
//! [`StorageError::NotFound`]. Use [`ItemStorage::move_item`] to refile.

use std::collections::HashMap;

use inventory_core::validation::validate_category;
use inventory_core::{Item, ValidationError};
use tracing::debug;
use uuid::Uuid;

use crate::config::{EmptyCategoryPolicy, StorageConfig};
use crate::error::{StorageError, StorageResult};

/// Field name reported when `add_item` receives no item.
pub const ITEM_FIELD: &str = "item";

/// In-memory, category-indexed item collection.
#[derive(Debug, Clone, Default)]
pub struct ItemStorage {
    index: HashMap<String, Vec<Item>>,
    config: StorageConfig,
}

impl ItemStorage {
    /// Creates an empty storage with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty storage with the given configuration.
    pub fn with_config(config: StorageConfig) -> Self {
        ItemStorage {
            index: HashMap::new(),
            config,
        }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &StorageConfig {
        &self.config
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Files an item under its category.
    ///
    /// Accepts an `Item` or an `Option<Item>`; `None` is rejected with
    /// [`ValidationError::Required`] and the index is left unchanged.
    ///
    /// The same item (or another item with the same id) may be added more than
    /// once unless [`StorageConfig::reject_duplicate_ids`] is set, in which
    /// case [`StorageError::DuplicateId`] is returned.
    pub fn add_item(&mut self, item: impl Into<Option<Item>>) -> StorageResult<()> {
        let item = item.into().ok_or_else(|| ValidationError::Required {
            field: ITEM_FIELD.to_string(),
        })?;

        if self.config.reject_duplicate_ids {
            if let Some(existing) = self.get(item.id()) {
                return Err(StorageError::DuplicateId {
                    id: item.id(),
                    category: existing.category().to_string(),
                });
            }
        }

        debug!(id = %item.id(), category = %item.category(), "Adding item");
        self.file(item);
        Ok(())
    }

    /// Removes the stored item with `item`'s id from the bucket named by
    /// `item`'s category, and returns it.
    ///
    /// Matching is by id only, so any `Item` value carrying the same id and
    /// category works. If the id was added more than once, only the earliest
    /// entry is removed.
    ///
    /// ## Errors
    /// [`StorageError::NotFound`] if no such entry exists; nothing is removed.
    pub fn remove_item(&mut self, item: &Item) -> StorageResult<Item> {
        self.remove_by_id(item.category(), item.id())
    }

    /// Removes the earliest item with `id` from `category`'s bucket.
    pub fn remove_by_id(&mut self, category: &str, id: Uuid) -> StorageResult<Item> {
        let not_found = || StorageError::NotFound {
            id,
            category: category.to_string(),
        };

        let bucket = self.index.get_mut(category).ok_or_else(not_found)?;
        let position = bucket
            .iter()
            .position(|stored| stored.id() == id)
            .ok_or_else(not_found)?;
        let removed = bucket.remove(position);

        if bucket.is_empty() && self.config.empty_categories == EmptyCategoryPolicy::Prune {
            self.index.remove(category);
            debug!(category = %category, "Pruned empty category");
        }

        debug!(id = %id, category = %category, "Removed item");
        Ok(removed)
    }

    /// Refiles a stored item under `new_category`.
    ///
    /// The item is located by `item`'s id in `item`'s category bucket, taken
    /// out, given the new category and appended to the end of the new bucket.
    /// Moving to the current category moves the item to the end of its bucket.
    ///
    /// ## Errors
    /// - [`StorageError::Validation`] if `new_category` is not a valid category
    /// - [`StorageError::NotFound`] if the item is not where `item` says it is
    ///
    /// In both cases the index is unchanged.
    pub fn move_item(&mut self, item: &Item, new_category: &str) -> StorageResult<&Item> {
        validate_category(new_category)?;

        let mut moved = self.remove_by_id(item.category(), item.id())?;
        let old_category = moved.category().to_string();
        moved.set_category(new_category)?;

        debug!(
            id = %moved.id(),
            from = %old_category,
            to = %new_category,
            "Moved item"
        );

        let bucket = self.index.entry(new_category.to_string()).or_default();
        bucket.push(moved);
        Ok(&bucket[bucket.len() - 1])
    }

    /// Removes every item and every category.
    pub fn clear(&mut self) {
        self.index.clear();
    }

    /// Appends without checks. Callers guarantee the item is acceptable.
    fn file(&mut self, item: Item) {
        self.index
            .entry(item.category().to_string())
            .or_default()
            .push(item);
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    /// Lazily yields the items filed under `category`, in insertion order.
    ///
    /// Unknown and empty categories both yield nothing.
    pub fn items_in_category(&self, category: &str) -> impl Iterator<Item = &Item> + '_ {
        self.index.get(category).into_iter().flatten()
    }

    /// Number of entries filed under `category`.
    pub fn count_in_category(&self, category: &str) -> usize {
        self.index.get(category).map_or(0, Vec::len)
    }

    /// Category keys currently in the index, sorted.
    ///
    /// Includes emptied categories only under [`EmptyCategoryPolicy::Retain`].
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = self.index.keys().map(String::as_str).collect();
        categories.sort_unstable();
        categories
    }

    /// Finds an item with `id` in any category.
    ///
    /// If the id was stored more than once, which entry is returned is
    /// unspecified.
    pub fn get(&self, id: Uuid) -> Option<&Item> {
        self.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.get(id).is_some()
    }

    /// All stored items. Order within a category is insertion order; order
    /// across categories is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = &Item> + '_ {
        self.index.values().flatten()
    }

    /// Total number of entries across all categories.
    pub fn len(&self) -> usize {
        self.index.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.index.values().all(Vec::is_empty)
    }
}

impl FromIterator<Item> for ItemStorage {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        let mut storage = ItemStorage::new();
        for item in iter {
            storage.file(item);
        }
        storage
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
