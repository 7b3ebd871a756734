//! # Validation Module
//!
//! The single string validator shared by every text field of an
//! [`Item`](crate::Item).
//!
//! ## Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   validate_alphabetic(field, value)                     │
//! │                                                                         │
//! │  value                                                                  │
//! │    │                                                                    │
//! │    ├── None?                    → Required      "name is required"     │
//! │    │                                                                    │
//! │    ├── empty / whitespace only? → Blank         "name cannot be ..."   │
//! │    │                                                                    │
//! │    ├── any non-letter char?     → NotAlphabetic "name must contain..." │
//! │    │                                                                    │
//! │    └── OK                                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! "Letter" follows [`char::is_alphabetic`], so `"Café"` and `"Ähre"` pass
//! while digits, punctuation and spaces anywhere in the string fail. Multi-word
//! names are therefore rejected.
//!
//! ## Usage
//! ```rust
//! use inventory_core::validation::{validate_alphabetic, validate_category};
//!
//! assert!(validate_category("Tools").is_ok());
//! assert!(validate_category("Tool5").is_err());
//! assert!(validate_alphabetic("name", None).is_err());
//! ```

pub use crate::error::ValidationResult;
use crate::error::ValidationError;

/// Field name reported for item names.
pub const NAME_FIELD: &str = "name";

/// Field name reported for item categories.
pub const CATEGORY_FIELD: &str = "category";

/// Field name reported for item descriptions.
pub const DESCRIPTION_FIELD: &str = "description";

/// Validates that `value` is present, not blank, and made of letters only.
///
/// `field` is only used to label the error.
pub fn validate_alphabetic(field: &str, value: Option<&str>) -> ValidationResult<()> {
    let value = value.ok_or_else(|| ValidationError::Required {
        field: field.to_string(),
    })?;

    if value.trim().is_empty() {
        return Err(ValidationError::Blank {
            field: field.to_string(),
        });
    }

    if !value.chars().all(char::is_alphabetic) {
        return Err(ValidationError::NotAlphabetic {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates an item name.
pub fn validate_name(name: &str) -> ValidationResult<()> {
    validate_alphabetic(NAME_FIELD, Some(name))
}

/// Validates an item category.
pub fn validate_category(category: &str) -> ValidationResult<()> {
    validate_alphabetic(CATEGORY_FIELD, Some(category))
}

/// Validates an item description.
pub fn validate_description(description: &str) -> ValidationResult<()> {
    validate_alphabetic(DESCRIPTION_FIELD, Some(description))
}

// =============================================================================
// Unit Tests
// =============================================================================
