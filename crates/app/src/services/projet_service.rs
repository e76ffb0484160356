//! Projet service — use-cases for managing portfolio entries.

use portfolio_domain::error::{NotFoundError, PortfolioError};
use portfolio_domain::projet::{Projet, ProjetDraft};

use crate::ports::ProjetRepository;

/// Application service for project CRUD operations.
///
/// Enforces the rule that invalid drafts never reach a storage adapter:
/// every write validates first and rejects with a typed error.
pub struct ProjetService<R> {
    repo: R,
}

impl<R: ProjetRepository> ProjetService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all projects, ordered by year then id, both descending.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_projets(&self) -> Result<Vec<Projet>, PortfolioError> {
        self.repo.list_all().await
    }

    /// Look up a project by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::NotFound`] when no project with `id`
    /// exists, or a storage error from the repository.
    pub async fn get_projet(&self, id: i64) -> Result<Projet, PortfolioError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Projet",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Create a new project after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::Validation`] if a required field is empty,
    /// or a storage error propagated from the repository.
    pub async fn create_projet(&self, draft: ProjetDraft) -> Result<i64, PortfolioError> {
        draft.validate()?;
        self.repo.insert(draft).await
    }

    /// Overwrite an existing project.
    ///
    /// The repository does not report whether `id` matched a row; updating
    /// a missing project succeeds and affects nothing.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::Validation`] if a required field is empty,
    /// or a storage error from the repository.
    pub async fn update_projet(&self, id: i64, draft: ProjetDraft) -> Result<(), PortfolioError> {
        draft.validate()?;
        self.repo.update(id, draft).await
    }

    /// Delete a project by id. Deleting twice is not an error.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn delete_projet(&self, id: i64) -> Result<(), PortfolioError> {
        self.repo.delete(id).await
    }
}
