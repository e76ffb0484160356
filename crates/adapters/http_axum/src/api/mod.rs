//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod projets;

use axum::Router;
use axum::routing::get;

use portfolio_app::ports::ProjetRepository;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: ProjetRepository + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/projets",
            get(projets::list::<R>).post(projets::create::<R>),
        )
        .route(
            "/projets/{id}",
            get(projets::get::<R>)
                .put(projets::update::<R>)
                .delete(projets::delete::<R>),
        )
}
