//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`PortfolioError`] via `#[from]` or an explicit `From` impl. Storage
//! adapters box their driver errors so this crate stays IO-free.

/// Top-level error type returned by services and repositories.
#[derive(Debug, thiserror::Error)]
pub enum PortfolioError {
    /// A domain invariant was violated before the store was reached.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A lookup required a row that does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// A storage backend fault, captured and returned as data.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A required field was empty.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("annee must not be empty")]
    EmptyAnnee,
    #[error("titre must not be empty")]
    EmptyTitre,
    #[error("description must not be empty")]
    EmptyDescription,
    #[error("competences must not be empty")]
    EmptyCompetences,
}

/// A row lookup came back empty where a caller required one.
#[derive(Debug, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Entity kind, e.g. `"Projet"`.
    pub entity: &'static str,
    /// The identifier that was looked up.
    pub id: String,
}
