//! # Database Error Types
//!
//! Error types for storage operations.
//!
//! ## Error Flow
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  sqlx::Error ──────────────► DbError::Sqlx (transparent)     │
//! │  DataValidationError ─────► DbError::Validation (transparent)│
//! │  zero rows on update ─────► DbError::NotFound                │
//! │                                                              │
//! │  Storage failures are passed through unchanged; only the     │
//! │  validation error carries catalog semantics.                 │
//! └──────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use shelf_core::DataValidationError;

/// Database operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// Entity not found in the database.
    ///
    /// Returned when an update targets an id whose row no longer exists.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Input failed validation before any SQL ran.
    #[error(transparent)]
    Validation(#[from] DataValidationError),

    /// Migration failed.
    #[error("Migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Underlying storage failure, propagated unchanged.
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

impl DbError {
    /// Creates a NotFound error for a given entity type and id.
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        DbError::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = DbError::not_found("Product", 42);
        assert_eq!(err.to_string(), "Product not found: 42");
    }

    #[test]
    fn test_validation_passes_through_unchanged() {
        let err: DbError = DataValidationError::MissingId.into();
        assert_eq!(err.to_string(), "Update called with empty ID field");
    }
}
