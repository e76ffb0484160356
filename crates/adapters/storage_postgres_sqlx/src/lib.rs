//! # portfolio-adapter-storage-postgres-sqlx
//!
//! Managed `PostgreSQL` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the `ProjetRepository` port defined in `portfolio-app`
//! - Build the connection pool **lazily**: a misconfigured or unreachable
//!   server surfaces on the first real query, not at selection time
//! - Create the schema, run the idempotent `statut` migration, and seed
//!   default data on first-ever startup
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
pub use pool::Config;
pub use projet_repo::PostgresProjetRepository;
