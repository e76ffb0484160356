//! # portfolio-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON API for the project catalogue
//!   (`/api/projets`, `/api/projets/{id}`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses
//!
//! HTML rendering, static assets, and image upload are not part of this
//! adapter.
//!
//! ## Dependency rule
//! Depends on `portfolio-app` (for the port trait and service) and
//! `portfolio-domain` (for the types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
