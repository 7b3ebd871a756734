//! # Item
//!
//! One inventory entry: identity, name, category, description and price.
//!
//! ## Field Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                             Item                                        │
//! │                                                                         │
//! │  Field         Type     Set by       Validation                         │
//! │  ───────────   ──────   ──────────   ───────────────────────────────    │
//! │  id            Uuid     caller       none (immutable after new)         │
//! │  name          String   new / set    letters only, not blank            │
//! │  category      String   new / set    letters only, not blank            │
//! │  description   String   new / set    letters only, not blank            │
//! │  price         f64      new / set    none                               │
//! │                                                                         │
//! │  Every write validates BEFORE assigning: a failed setter leaves the     │
//! │  previous value in place, and an invalid Item is never constructed.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Two items are the *same inventory entry* when their ids match, regardless
//! of the other fields. `PartialEq` compares every field; use
//! [`Item::same_identity`] for identity.
//!
//! ## Price
//! Price is stored as given. Negative, NaN and infinite values are accepted.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ValidationError, ValidationResult};
use crate::validation::{
    validate_alphabetic, validate_category, validate_description, validate_name, CATEGORY_FIELD,
    DESCRIPTION_FIELD, NAME_FIELD,
};

/// Field name reported when an id is missing from a builder or record.
pub const ID_FIELD: &str = "id";

// =============================================================================
// Item
// =============================================================================

/// A validated inventory entry.
///
/// Deserialization runs through [`ItemBuilder`], so an `Item` read from JSON,
/// TOML or any other serde format has passed the same checks as
/// [`Item::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ItemBuilder")]
pub struct Item {
    id: Uuid,
    name: String,
    category: String,
    description: String,
    price: f64,
}

impl Item {
    /// Creates a new item.
    ///
    /// ## Errors
    /// [`ValidationError`] if `name`, `category` or `description` is blank or
    /// contains anything other than letters. `id` and `price` are not checked.
    ///
    /// ## Example
    /// ```rust
    /// use inventory_core::Item;
    /// use uuid::Uuid;
    ///
    /// let item = Item::new("Widget", "Tools", Uuid::new_v4(), "Ahandle", 9.99).unwrap();
    /// assert_eq!(item.category(), "Tools");
    ///
    /// assert!(Item::new("Widget", "Tool5", Uuid::new_v4(), "desc", 5.0).is_err());
    /// ```
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        id: Uuid,
        description: impl Into<String>,
        price: f64,
    ) -> ValidationResult<Self> {
        let name = name.into();
        let category = category.into();
        let description = description.into();

        validate_name(&name)?;
        validate_category(&category)?;
        validate_description(&description)?;

        Ok(Item {
            id,
            name,
            category,
            description,
            price,
        })
    }

    /// Starts building an item field by field.
    pub fn builder() -> ItemBuilder {
        ItemBuilder::default()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns the identifier.
    #[inline]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[inline]
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Returns true if both items carry the same id.
    #[inline]
    pub fn same_identity(&self, other: &Item) -> bool {
        self.id == other.id
    }

    // =========================================================================
    // Mutators
    // =========================================================================

    /// Replaces the name. On error the old name is kept.
    pub fn set_name(&mut self, name: impl Into<String>) -> ValidationResult<()> {
        let name = name.into();
        validate_name(&name)?;
        self.name = name;
        Ok(())
    }

    /// Replaces the category. On error the old category is kept.
    ///
    /// Items held by an `ItemStorage` are only reachable through shared
    /// references, so this can only touch items the caller still owns. To
    /// refile a stored item use `ItemStorage::move_item`.
    pub fn set_category(&mut self, category: impl Into<String>) -> ValidationResult<()> {
        let category = category.into();
        validate_category(&category)?;
        self.category = category;
        Ok(())
    }

    /// Replaces the description. On error the old description is kept.
    pub fn set_description(&mut self, description: impl Into<String>) -> ValidationResult<()> {
        let description = description.into();
        validate_description(&description)?;
        self.description = description;
        Ok(())
    }

    /// Replaces the price. Any value is accepted.
    pub fn set_price(&mut self, price: f64) {
        self.price = price;
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) {}", self.name, self.category, self.id)
    }
}

// =============================================================================
// Item Builder
// =============================================================================

/// Field-by-field construction of an [`Item`].
///
/// Unlike [`Item::new`], every field may be left out; [`build`](Self::build)
/// then reports which one is missing. A missing price defaults to `0.0`.
///
/// Also the raw shape used when deserializing an `Item`.
///
/// ```rust
/// use inventory_core::{Item, ValidationError};
/// use uuid::Uuid;
///
/// let item = Item::builder()
///     .id(Uuid::new_v4())
///     .name("Hammer")
///     .category("Tools")
///     .description("Steel")
///     .price(12.5)
///     .build()
///     .unwrap();
/// assert_eq!(item.name(), "Hammer");
///
/// let err = Item::builder().name("Hammer").build().unwrap_err();
/// assert!(matches!(err, ValidationError::Required { .. }));
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ItemBuilder {
    id: Option<Uuid>,
    name: Option<String>,
    category: Option<String>,
    description: Option<String>,
    price: Option<f64>,
}

impl ItemBuilder {
    pub fn id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Validates the collected fields and produces the item.
    ///
    /// Fields are checked in the order name, category, id, description; the
    /// first failure is returned.
    pub fn build(self) -> ValidationResult<Item> {
        let name = take_alphabetic(NAME_FIELD, self.name)?;
        let category = take_alphabetic(CATEGORY_FIELD, self.category)?;
        let id = self.id.ok_or_else(|| ValidationError::Required {
            field: ID_FIELD.to_string(),
        })?;
        let description = take_alphabetic(DESCRIPTION_FIELD, self.description)?;

        Ok(Item {
            id,
            name,
            category,
            description,
            price: self.price.unwrap_or(0.0),
        })
    }
}

fn take_alphabetic(field: &str, value: Option<String>) -> ValidationResult<String> {
    let value = value.ok_or_else(|| ValidationError::Required {
        field: field.to_string(),
    })?;
    validate_alphabetic(field, Some(&value))?;
    Ok(value)
}

impl TryFrom<ItemBuilder> for Item {
    type Error = ValidationError;

    fn try_from(builder: ItemBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn widget() -> Item {
        Item::new("Widget", "Tools", Uuid::new_v4(), "Ahandle", 9.99).unwrap()
    }

    #[test]
    fn test_new_keeps_fields() {
        let id = Uuid::new_v4();
        let item = Item::new("Widget", "Tools", id, "Ahandle", 9.99).unwrap();

        assert_eq!(item.id(), id);
        assert_eq!(item.name(), "Widget");
        assert_eq!(item.category(), "Tools");
        assert_eq!(item.description(), "Ahandle");
        assert!((item.price() - 9.99).abs() < f64::EPSILON);
    }

    #[test]
    fn test_new_rejects_digit_in_category() {
        let err = Item::new("Widget", "Tool5", Uuid::new_v4(), "desc", 5.0).unwrap_err();
        assert_eq!(
            err,
            ValidationError::NotAlphabetic {
                field: "category".to_string()
            }
        );

        // Name is checked first, so a bad name is reported before the category
        let err = Item::new("Widget2", "Tool5", Uuid::new_v4(), "desc", 5.0).unwrap_err();
        assert_eq!(err.field(), "name");
    }

    #[test]
    fn test_new_rejects_each_string_field() {
        let id = Uuid::new_v4();
        assert_eq!(
            Item::new("", "Tools", id, "desc", 1.0).unwrap_err().field(),
            "name"
        );
        assert_eq!(
            Item::new("Widget", "  ", id, "desc", 1.0)
                .unwrap_err()
                .field(),
            "category"
        );
        assert_eq!(
            Item::new("Widget", "Tools", id, "two words", 1.0)
                .unwrap_err()
                .field(),
            "description"
        );
    }

    #[test]
    fn test_price_is_unchecked() {
        let id = Uuid::new_v4();
        assert!(Item::new("Widget", "Tools", id, "desc", -3.0).is_ok());
        assert!(Item::new("Widget", "Tools", id, "desc", f64::NAN).is_ok());
        assert!(Item::new("Widget", "Tools", id, "desc", f64::INFINITY).is_ok());
    }

    #[test]
    fn test_setters_are_atomic() {
        let mut item = widget();

        assert!(item.set_name("Bad Name").is_err());
        assert_eq!(item.name(), "Widget");

        assert!(item.set_category("").is_err());
        assert_eq!(item.category(), "Tools");

        assert!(item.set_description("x1").is_err());
        assert_eq!(item.description(), "Ahandle");
    }

    #[test]
    fn test_setters_apply_valid_values() {
        let mut item = widget();
        item.set_name("Gadget").unwrap();
        item.set_category("Electronics").unwrap();
        item.set_description("Shiny").unwrap();
        item.set_price(-1.5);

        assert_eq!(item.name(), "Gadget");
        assert_eq!(item.category(), "Electronics");
        assert_eq!(item.description(), "Shiny");
        assert_eq!(item.price(), -1.5);
    }

    #[test]
    fn test_same_identity_ignores_other_fields() {
        let a = widget();
        let b = Item::new("Other", "Garden", a.id(), "Different", 0.0).unwrap();
        assert!(a.same_identity(&b));
        assert_ne!(a, b);
        assert!(!a.same_identity(&widget()));
    }

    #[test]
    fn test_display() {
        let id = Uuid::nil();
        let item = Item::new("Widget", "Tools", id, "Ahandle", 1.0).unwrap();
        assert_eq!(
            item.to_string(),
            "Widget (Tools) 00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn test_builder_reports_missing_fields() {
        let err = Item::builder().build().unwrap_err();
        assert_eq!(
            err,
            ValidationError::Required {
                field: "name".to_string()
            }
        );

        let err = Item::builder()
            .name("Widget")
            .category("Tools")
            .description("desc")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::Required {
                field: "id".to_string()
            }
        );
    }

    #[test]
    fn test_builder_defaults_price() {
        let item = Item::builder()
            .id(Uuid::new_v4())
            .name("Widget")
            .category("Tools")
            .description("desc")
            .build()
            .unwrap();
        assert_eq!(item.price(), 0.0);
    }

    #[test]
    fn test_deserialize_validates() {
        let id = Uuid::new_v4();
        let json = format!(
            r#"{{"id":"{id}","name":"Widget","category":"Tools","description":"Ahandle","price":9.99}}"#
        );
        let item: Item = serde_json::from_str(&json).unwrap();
        assert_eq!(item.id(), id);
        assert_eq!(item.category(), "Tools");

        let bad = format!(
            r#"{{"id":"{id}","name":"Widget","category":"Tool5","description":"Ahandle","price":9.99}}"#
        );
        let err = serde_json::from_str::<Item>(&bad).unwrap_err();
        assert!(err.to_string().contains("category must contain only letters"));

        let missing = r#"{"name":"Widget","category":"Tools","description":"Ahandle"}"#;
        assert!(serde_json::from_str::<Item>(missing).is_err());
    }

    #[test]
    fn test_serialize_shape() {
        let item = Item::new("Widget", "Tools", Uuid::nil(), "Ahandle", 2.0).unwrap();
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["name"], "Widget");
        assert_eq!(value["category"], "Tools");
        assert_eq!(value["id"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(value["price"], 2.0);
    }

    proptest! {
        #[test]
        fn prop_valid_name_round_trips_through_accessor(name in "[A-Za-z]{1,30}") {
            let item = Item::new(name.clone(), "Tools", Uuid::nil(), "desc", 0.0).unwrap();
            prop_assert_eq!(item.name(), name.as_str());
        }

        #[test]
        fn prop_invalid_string_rejected_in_any_field(
            bad in prop_oneof![
                Just(String::new()),
                "[ \t]{1,5}",
                "[A-Za-z]{0,5}[0-9 ,.-][A-Za-z]{0,5}",
            ],
            slot in 0usize..3,
        ) {
            let (name, category, description) = match slot {
                0 => (bad.as_str(), "Tools", "desc"),
                1 => ("Widget", bad.as_str(), "desc"),
                _ => ("Widget", "Tools", bad.as_str()),
            };
            prop_assert!(Item::new(name, category, Uuid::nil(), description, 1.0).is_err());
        }
    }
}
