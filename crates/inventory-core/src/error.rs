//! # Error Types
//!
//! Validation errors raised while building or mutating an [`Item`](crate::Item).
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  inventory-core errors (this file)                                     │
//! │  └── ValidationError  - String field absent, blank or non-alphabetic   │
//! │                                                                         │
//! │  inventory-storage errors (separate crate)                             │
//! │  └── StorageError     - Missing items, duplicates, config failures     │
//! │                                                                         │
//! │  Flow: ValidationError → StorageError → caller                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All three variants are one error *kind* for callers that only need to
//! know "the input was rejected"; the variant tells them why.

use thiserror::Error;

/// Input validation errors.
///
/// Every variant names the offending field so the caller can point the user
/// at it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required value was not supplied at all.
    #[error("{field} is required")]
    Required { field: String },

    /// The value is empty or consists only of whitespace.
    #[error("{field} cannot be empty or blank")]
    Blank { field: String },

    /// The value contains a character that is not a letter.
    ///
    /// ## When This Occurs
    /// - Digits: `"Tool5"`
    /// - Punctuation: `"Coca-Cola"`
    /// - Inner whitespace: `"Power Drill"`
    #[error("{field} must contain only letters")]
    NotAlphabetic { field: String },
}

impl ValidationError {
    /// Returns the name of the field that failed validation.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::Blank { field }
            | ValidationError::NotAlphabetic { field } => field,
        }
    }
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
