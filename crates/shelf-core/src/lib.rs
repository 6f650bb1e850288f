//! # shelf-core: Pure Domain Types for Shelf
//!
//! This crate is the I/O-free half of Shelf. It defines the Product entity,
//! its Category enumeration, the fixed-point Price type, and the validation
//! rules applied when populating a product from an untrusted plain mapping.
//!
//! ## Architecture Position
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Web layer (external collaborator)                           │
//! │       │ serde_json::Value in / out                           │
//! │       ▼                                                      │
//! │  ★ shelf-core (THIS CRATE) ★                                 │
//! │    types: Product, Category │ price: Price │ error           │
//! │    NO I/O • NO DATABASE • PURE FUNCTIONS                     │
//! │       │                                                      │
//! │       ▼                                                      │
//! │  shelf-db (storage layer)                                    │
//! │    SQLite queries, migrations, ProductRepository             │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Category)
//! - [`price`] - Fixed-point price type (integer cents, no floats)
//! - [`error`] - The data-validation error
//!
//! ## Example Usage
//!
//! ```rust
//! use serde_json::json;
//! use shelf_core::Product;
//!
//! let product = Product::deserialize(&json!({
//!     "name": "Fedora",
//!     "description": "A red hat",
//!     "price": "12.50",
//!     "available": true,
//!     "category": "CLOTHS",
//! }))
//! .unwrap();
//!
//! assert_eq!(product.id, None);
//! assert_eq!(product.serialize()["price"], "12.50");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod price;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use shelf_core::Product` instead of
// `use shelf_core::types::Product`

pub use error::{DataValidationError, ValidationResult};
pub use price::Price;
pub use types::{Category, Product};
