//! # Storage Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     INVENTORY_EMPTY_CATEGORIES=retain                                  │
//! │     INVENTORY_REJECT_DUPLICATE_IDS=true                                │
//! │                                                                         │
//! │  2. TOML Config File ([storage] table)                                 │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     empty_categories = prune, reject_duplicate_ids = false             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [storage]
//! empty_categories = "prune"   # prune | retain
//! reject_duplicate_ids = false
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{StorageError, StorageResult};

/// Environment variable overriding [`StorageConfig::empty_categories`].
pub const ENV_EMPTY_CATEGORIES: &str = "INVENTORY_EMPTY_CATEGORIES";

/// Environment variable overriding [`StorageConfig::reject_duplicate_ids`].
pub const ENV_REJECT_DUPLICATE_IDS: &str = "INVENTORY_REJECT_DUPLICATE_IDS";

// =============================================================================
// Empty Category Policy
// =============================================================================

/// What happens to a category bucket once its last item is removed.
///
/// Category listings behave the same under both policies: an unknown
/// category and an empty one both list no items. Only
/// `ItemStorage::categories` tells them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyCategoryPolicy {
    /// Drop the bucket; the category disappears from `categories()`.
    #[default]
    Prune,

    /// Keep the empty bucket; the category stays listed.
    Retain,
}

impl std::fmt::Display for EmptyCategoryPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmptyCategoryPolicy::Prune => write!(f, "prune"),
            EmptyCategoryPolicy::Retain => write!(f, "retain"),
        }
    }
}

impl std::str::FromStr for EmptyCategoryPolicy {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "prune" | "drop" => Ok(EmptyCategoryPolicy::Prune),
            "retain" | "keep" => Ok(EmptyCategoryPolicy::Retain),
            other => Err(StorageError::InvalidConfig(format!(
                "Unknown empty category policy: '{}'. Valid options: prune, retain",
                other
            ))),
        }
    }
}

// =============================================================================
// Storage Configuration
// =============================================================================

/// Behaviour switches for `ItemStorage`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Bucket handling after the last item of a category is removed.
    #[serde(default)]
    pub empty_categories: EmptyCategoryPolicy,

    /// Refuse to add an item whose id is already stored in any category.
    /// Off by default: the same item may be added more than once.
    #[serde(default)]
    pub reject_duplicate_ids: bool,
}

/// On-disk layout; other sections are ignored.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    storage: StorageConfig,
}

impl StorageConfig {
    /// Parses the `[storage]` table of a TOML document.
    ///
    /// A document without the table yields the defaults.
    pub fn from_toml_str(contents: &str) -> StorageResult<Self> {
        let file: ConfigFile = toml::from_str(contents)?;
        Ok(file.storage)
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file, if `config_path` is given and exists
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> StorageResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path {
            if path.exists() {
                info!(?path, "Loading storage config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = Self::from_toml_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok());

        Ok(config)
    }

    /// Applies overrides from a key lookup (the process environment in
    /// [`load`](Self::load)). Unparseable values are logged and skipped.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_EMPTY_CATEGORIES) {
            match value.parse::<EmptyCategoryPolicy>() {
                Ok(policy) => {
                    debug!(policy = %policy, "Overriding empty category policy from environment");
                    self.empty_categories = policy;
                }
                Err(e) => warn!(value = %value, error = %e, "Ignoring empty category override"),
            }
        }

        if let Some(value) = lookup(ENV_REJECT_DUPLICATE_IDS) {
            match value.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => self.reject_duplicate_ids = true,
                "0" | "false" | "no" | "off" => self.reject_duplicate_ids = false,
                _ => warn!(value = %value, "Ignoring duplicate id override"),
            }
        }
    }
}
