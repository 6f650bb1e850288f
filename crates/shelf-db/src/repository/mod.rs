//! # Repository Module
//!
//! Database repository implementations for Shelf.
//!
//! ## Repository Pattern
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Caller                                                      │
//! │       │  db.products().find_by_name("Fedora")                │
//! │       ▼                                                      │
//! │  ProductRepository                                           │
//! │  ├── create / update / delete                                │
//! │  └── all / find / find_by_*                                  │
//! │       │  SQL (one equality predicate per finder)             │
//! │       ▼                                                      │
//! │  SQLite database                                             │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`product::ProductRepository`] - Product CRUD and finders

pub mod product;
