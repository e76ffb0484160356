//! # portfolio-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **`ProjetRepository`** port trait that both storage
//!   adapters implement (driven/outbound port)
//! - Provide the **`ProjetService`** use-case layer: validate drafts
//!   before they reach a store, map empty lookups to typed not-found
//!   errors
//! - Own the default seed data inserted on first-ever startup
//!
//! ## Dependency rule
//! Depends on `portfolio-domain` only. Never imports adapter crates.
//! Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod seed;
pub mod services;
