//! # portfoliod — portfolio daemon
//!
//! Composition root that selects the database backend, wires the adapters
//! together, and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Detect the deployment environment and resolve the store exactly once
//!   (the selector creates the schema and seeds default data)
//! - Construct the application service, injecting the store via its port
//! - Build the axum router and serve
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;
mod store;

use portfolio_adapter_http_axum::router;
use portfolio_adapter_http_axum::state::AppState;
use portfolio_app::services::ProjetService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::store::{Backend, StoreSelector};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Backend detection happens once, from a startup snapshot of the
    // environment; it is never re-evaluated per request.
    let backend = Backend::detect(
        std::env::var("VERCEL").ok().as_deref(),
        config.database.postgres_url.as_deref(),
    );
    let selector = StoreSelector::new(backend, config.database.clone());
    let store = selector.get().await?.clone();

    let state = AppState::new(ProjetService::new(store));
    let app = router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!(%bind_addr, "portfoliod listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
