//! # portfolio-adapter-storage-sqlite-sqlx
//!
//! Embedded `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the `ProjetRepository` port defined in `portfolio-app`
//! - Manage the `SQLite` connection pool lifecycle (file created on demand)
//! - Create the schema, run the duplicate-column-tolerant `statut`
//!   migration, and seed default data on first-ever startup
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `portfolio-app` (for the port trait) and `portfolio-domain`
//! (for domain types). The `app` and `domain` crates must never reference
//! this adapter.

pub mod error;
pub mod pool;
pub mod projet_repo;

pub use error::StorageError;
pub use pool::{Config, Database};
pub use projet_repo::SqliteProjetRepository;
