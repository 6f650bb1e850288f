//! # Domain Types
//!
//! Core domain types for the Shelf product catalog.
//!
//! ## Entity Lifecycle
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Product lifecycle                                           │
//! │                                                              │
//! │  in memory (id = None)                                       │
//! │       │ create()  ← storage assigns id                       │
//! │       ▼                                                      │
//! │  saved (id = Some(n)) ──► update() × N  ← id never changes   │
//! │       │ delete()                                             │
//! │       ▼                                                      │
//! │  stale (row gone, id no longer resolvable)                   │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Persistence itself lives in shelf-db; this module only defines the data
//! and the (de)serialization rules for the plain-mapping boundary.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::DataValidationError;
use crate::price::Price;

// =============================================================================
// Category
// =============================================================================

/// The fixed set of product categories.
///
/// Symbolic names (wire and storage representation) are the UPPERCASE
/// forms, e.g. `Category::Cloths` ⇔ `"CLOTHS"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "UPPERCASE"))]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    /// Fallback for products without a meaningful category.
    Unknown,
    Cloths,
    Electronics,
    Food,
    Housewares,
    Automotive,
    Tools,
}

impl Category {
    /// Looks up a category by its symbolic name.
    ///
    /// This is an explicit lookup table, not reflection: only the exact
    /// UPPERCASE names listed here resolve. Anything else fails with
    /// `Invalid attribute: <bad value>`.
    ///
    /// ## Example
    /// ```rust
    /// use shelf_core::types::Category;
    ///
    /// assert_eq!(Category::from_name("CLOTHS").unwrap(), Category::Cloths);
    /// assert!(Category::from_name("INVALID_CATEGORY").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Self, DataValidationError> {
        match name {
            "UNKNOWN" => Ok(Category::Unknown),
            "CLOTHS" => Ok(Category::Cloths),
            "ELECTRONICS" => Ok(Category::Electronics),
            "FOOD" => Ok(Category::Food),
            "HOUSEWARES" => Ok(Category::Housewares),
            "AUTOMOTIVE" => Ok(Category::Automotive),
            "TOOLS" => Ok(Category::Tools),
            other => Err(DataValidationError::InvalidAttribute(other.to_string())),
        }
    }

    /// Returns the symbolic name of this category.
    pub const fn name(&self) -> &'static str {
        match self {
            Category::Unknown => "UNKNOWN",
            Category::Cloths => "CLOTHS",
            Category::Electronics => "ELECTRONICS",
            Category::Food => "FOOD",
            Category::Housewares => "HOUSEWARES",
            Category::Automotive => "AUTOMOTIVE",
            Category::Tools => "TOOLS",
        }
    }
}

/// Products default to the Unknown category.
impl Default for Category {
    fn default() -> Self {
        Category::Unknown
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Product
// =============================================================================

/// A sellable item in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Storage-assigned identifier. None until the product is created.
    pub id: Option<i64>,

    /// Display name. Required.
    pub name: String,

    /// Optional free-form description.
    pub description: Option<String>,

    /// Price with fixed-point semantics.
    #[cfg_attr(feature = "sqlx", sqlx(rename = "price_cents"))]
    pub price: Price,

    /// Whether the product is currently available for purchase.
    pub available: bool,

    /// Product category. Defaults to Unknown.
    pub category: Category,
}

impl Product {
    /// Produces the plain-mapping representation of this product.
    ///
    /// `category` is rendered as its symbolic name and `price` as the exact
    /// decimal string.
    ///
    /// ## Example
    /// ```rust
    /// use shelf_core::price::Price;
    /// use shelf_core::types::{Category, Product};
    ///
    /// let product = Product {
    ///     id: None,
    ///     name: "Fedora".into(),
    ///     description: Some("A red hat".into()),
    ///     price: Price::from_cents(1250),
    ///     available: true,
    ///     category: Category::Cloths,
    /// };
    /// let data = product.serialize();
    /// assert_eq!(data["price"], "12.50");
    /// assert_eq!(data["category"], "CLOTHS");
    /// ```
    pub fn serialize(&self) -> Value {
        json!({
            "id": self.id,
            "name": self.name,
            "description": self.description,
            "price": self.price.to_string(),
            "available": self.available,
            "category": self.category.name(),
        })
    }

    /// Populates a Product from a plain mapping, validating as it goes.
    ///
    /// ## Validation Policy
    /// - input that is not a mapping at all → `BadPayload`
    /// - missing required key → `MissingField` naming the key
    /// - `available` of any non-boolean type → `InvalidBoolean` with the
    ///   actual type name
    /// - `category` not matching a known symbolic name → `InvalidAttribute`
    /// - `price` accepted as a decimal string or bare number; anything
    ///   malformed → `InvalidPrice`
    ///
    /// The deserialized product is returned by value; the caller decides
    /// whether and when to persist it.
    pub fn deserialize(data: &Value) -> Result<Self, DataValidationError> {
        let map = data.as_object().ok_or(DataValidationError::BadPayload)?;

        let name = match map.get("name") {
            Some(Value::String(name)) => name.clone(),
            Some(_) => return Err(DataValidationError::BadPayload),
            None => return Err(DataValidationError::missing("name")),
        };

        let description = match map.get("description") {
            Some(Value::String(description)) => Some(description.clone()),
            Some(Value::Null) | None => None,
            Some(_) => return Err(DataValidationError::BadPayload),
        };

        let price = match map.get("price") {
            Some(Value::String(raw)) => Price::parse(raw)?,
            Some(Value::Number(n)) => Price::parse(&n.to_string())?,
            Some(other) => return Err(DataValidationError::InvalidPrice(other.to_string())),
            None => return Err(DataValidationError::missing("price")),
        };

        let available = match map.get("available") {
            Some(Value::Bool(available)) => *available,
            Some(other) => {
                return Err(DataValidationError::invalid_boolean(
                    "available",
                    json_type_name(other),
                ))
            }
            None => return Err(DataValidationError::missing("available")),
        };

        let category = match map.get("category") {
            Some(Value::String(name)) => Category::from_name(name)?,
            Some(other) => return Err(DataValidationError::InvalidAttribute(other.to_string())),
            None => return Err(DataValidationError::missing("category")),
        };

        Ok(Product {
            id: None,
            name,
            description,
            price,
            available,
            category,
        })
    }
}

/// Debug-friendly representation, e.g. `<Product Fedora id=[3]>`.
impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "<Product {} id=[{}]>", self.name, id),
            None => write!(f, "<Product {} id=[None]>", self.name),
        }
    }
}

/// Names a JSON value's type for error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
