//! # shelf-db: Database Layer for Shelf
//!
//! This crate provides storage access for the Shelf product catalog.
//! It uses SQLite with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Application / web layer                                     │
//! │       │                                                      │
//! │       ▼                                                      │
//! │  ┌────────────────────────────────────────────────────────┐  │
//! │  │                 shelf-db (THIS CRATE)                  │  │
//! │  │                                                        │  │
//! │  │  Database (pool.rs) │ ProductRepository │ Migrations   │  │
//! │  │  SqlitePool         │ CRUD + finders    │ (embedded)   │  │
//! │  └────────────────────────────────────────────────────────┘  │
//! │       │                                                      │
//! │       ▼                                                      │
//! │  SQLite database (file or in-memory)                         │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shelf_db::{Database, DbConfig};
//!
//! // One-time setup at process startup
//! let db = Database::new(DbConfig::from_env()).await?;
//!
//! // Per unit of work
//! let repo = db.products();
//! let mut product = Product::deserialize(&payload)?;
//! repo.create(&mut product).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use repository::product::ProductRepository;

// Domain types surface for callers that only depend on shelf-db
pub use shelf_core::{Category, DataValidationError, Price, Product};
