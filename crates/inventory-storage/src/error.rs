//! # Storage Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  ValidationError (inventory-core)                                      │
//! │       │   absent item, bad category in move_item                        │
//! │       ▼                                                                 │
//! │  StorageError (this module) ← adds NotFound / DuplicateId / config     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Integrating layer decides what the user sees                          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use inventory_core::ValidationError;
use thiserror::Error;
use uuid::Uuid;

/// Storage operation errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Input was rejected before the index was touched.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// No item with this id is filed under this category.
    ///
    /// ## When This Occurs
    /// - The item was never added, or was already removed
    /// - The caller's copy names a different category than the one the
    ///   stored item is filed under
    #[error("Item {id} not found in category '{category}'")]
    NotFound { id: Uuid, category: String },

    /// An item with this id is already stored.
    ///
    /// Only raised when `reject_duplicate_ids` is enabled.
    #[error("Item {id} already exists in category '{category}'")]
    DuplicateId { id: Uuid, category: String },

    /// Configuration values are inconsistent or unknown.
    #[error("Invalid storage configuration: {0}")]
    InvalidConfig(String),

    /// Configuration could not be read or parsed.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for StorageError {
    fn from(err: toml::de::Error) -> Self {
        StorageError::ConfigLoadFailed(err.to_string())
    }
}

impl StorageError {
    /// Returns true for [`StorageError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::NotFound { .. })
    }

    /// Returns true if the error came from input validation.
    pub fn is_validation(&self) -> bool {
        matches!(self, StorageError::Validation(_))
    }
}

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
