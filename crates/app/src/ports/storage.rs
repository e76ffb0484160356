//! Storage port — the repository trait both database backends implement.

use std::future::Future;

use portfolio_domain::error::PortfolioError;
use portfolio_domain::projet::{Projet, ProjetDraft};

/// Persistence contract for project entries.
///
/// Implemented by the embedded (SQLite) and managed (PostgreSQL) storage
/// adapters. Every operation returns its fault as a value; implementations
/// must not panic across this boundary.
///
/// Drafts passed to [`insert`](Self::insert) and [`update`](Self::update)
/// are assumed valid — required-field checks happen above the store, in the
/// service layer.
pub trait ProjetRepository {
    /// Create the `projets` table if absent, add the `statut` column to
    /// pre-existing tables, and seed the default entries when the table is
    /// empty. Safe to call repeatedly; never destroys existing data.
    fn initialize(&self) -> impl Future<Output = Result<(), PortfolioError>> + Send;

    /// All projects, ordered by `annee` descending then `id` descending.
    fn list_all(&self) -> impl Future<Output = Result<Vec<Projet>, PortfolioError>> + Send;

    /// Look up a single project. A missing row is `Ok(None)`, not an error.
    fn get_by_id(
        &self,
        id: i64,
    ) -> impl Future<Output = Result<Option<Projet>, PortfolioError>> + Send;

    /// Insert a new project and return its store-assigned id.
    ///
    /// Applies the default status when the draft carries none and stamps
    /// both timestamps at the moment of insertion.
    fn insert(&self, draft: ProjetDraft)
    -> impl Future<Output = Result<i64, PortfolioError>> + Send;

    /// Overwrite every mutable field of an existing project and refresh
    /// `updated_at`. Updating an id that matches no row affects zero rows
    /// and is still `Ok(())`.
    fn update(
        &self,
        id: i64,
        draft: ProjetDraft,
    ) -> impl Future<Output = Result<(), PortfolioError>> + Send;

    /// Delete a project. Deleting an id that matches no row is `Ok(())`.
    fn delete(&self, id: i64) -> impl Future<Output = Result<(), PortfolioError>> + Send;
}
