//! # Error Types
//!
//! Domain error types for shelf-core.
//!
//! ## Error Flow
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │  DataValidationError (this file)                               │
//! │       │                                                        │
//! │       ▼                                                        │
//! │  DbError::Validation (shelf-db) ← surfaced by the storage API  │
//! │       │                                                        │
//! │       ▼                                                        │
//! │  Web layer translates to a client-facing status                │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. One flat error kind for all validation failures - no sub-kinds,
//!    no error codes
//! 3. Errors are enum variants, never bare Strings

use thiserror::Error;

// =============================================================================
// Data Validation Error
// =============================================================================

/// The single error kind raised for malformed or structurally invalid
/// input to the Product entity.
///
/// Raised synchronously for: non-mapping deserialize input, wrong type for
/// a boolean field, unknown category name, missing required field, a price
/// that fails to parse, and an update attempted without an identifier.
/// Storage failures are never wrapped in this type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DataValidationError {
    /// Deserialize input was not a mapping at all.
    #[error("Invalid product: body of request contained bad or no data")]
    BadPayload,

    /// A required key was absent from the mapping.
    #[error("Invalid product: missing {0}")]
    MissingField(String),

    /// A boolean field held a value of some other type.
    #[error("Invalid type for boolean [{field}]: {actual}")]
    InvalidBoolean { field: String, actual: String },

    /// A category name did not match any known Category.
    #[error("Invalid attribute: {0}")]
    InvalidAttribute(String),

    /// A price value could not be parsed as a fixed-point decimal.
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    /// Update was attempted on an instance that was never persisted.
    #[error("Update called with empty ID field")]
    MissingId,
}

impl DataValidationError {
    /// Creates a MissingField error for the given key.
    pub fn missing(field: impl Into<String>) -> Self {
        DataValidationError::MissingField(field.into())
    }

    /// Creates an InvalidBoolean error for a field and the actual JSON type.
    pub fn invalid_boolean(field: impl Into<String>, actual: impl Into<String>) -> Self {
        DataValidationError::InvalidBoolean {
            field: field.into(),
            actual: actual.into(),
        }
    }
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, DataValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
