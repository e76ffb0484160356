//! # portfolio-domain
//!
//! Pure domain model for the portfolio backend.
//!
//! ## Responsibilities
//! - Define the **Projet** entry (the sole persisted entity) and the
//!   **`ProjetDraft`** payload used for inserts and full-row updates
//! - Contain all invariant enforcement (required fields must be non-empty)
//! - Define the error conventions shared by every layer
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod projet;
