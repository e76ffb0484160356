//! Application services — use-case orchestration over the ports.

pub mod projet_service;

pub use projet_service::ProjetService;
