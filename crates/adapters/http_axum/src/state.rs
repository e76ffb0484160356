//! Shared application state for axum handlers.

use std::sync::Arc;

use portfolio_app::ports::ProjetRepository;
use portfolio_app::services::ProjetService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch. `Clone` is
/// implemented manually so the repository itself does not need to be
/// `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<R> {
    /// Projet CRUD service.
    pub projet_service: Arc<ProjetService<R>>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            projet_service: Arc::clone(&self.projet_service),
        }
    }
}

impl<R> AppState<R>
where
    R: ProjetRepository + Send + Sync + 'static,
{
    /// Create a new application state from the service instance.
    pub fn new(projet_service: ProjetService<R>) -> Self {
        Self {
            projet_service: Arc::new(projet_service),
        }
    }
}
