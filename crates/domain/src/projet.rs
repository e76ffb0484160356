//! Projet — a portfolio project entry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{PortfolioError, ValidationError};

/// Status value substituted by the store when a draft carries none.
pub const STATUT_TERMINE: &str = "Terminé";

/// A persisted project entry.
///
/// `id` and both timestamps are assigned by the store and never by callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projet {
    pub id: i64,
    pub annee: String,
    pub titre: String,
    pub description: String,
    pub competences: String,
    pub image: Option<String>,
    pub statut: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for inserting a new project or fully overwriting an existing one.
///
/// Updates are full-row replacements: every field here is rewritten on every
/// update, so an absent `image` clears the stored one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjetDraft {
    pub annee: String,
    pub titre: String,
    pub description: String,
    pub competences: String,
    pub image: Option<String>,
    pub statut: Option<String>,
}

impl ProjetDraft {
    /// Create a builder for constructing a [`ProjetDraft`].
    #[must_use]
    pub fn builder() -> ProjetDraftBuilder {
        ProjetDraftBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::Validation`] when any required field is
    /// empty.
    pub fn validate(&self) -> Result<(), PortfolioError> {
        if self.annee.is_empty() {
            return Err(ValidationError::EmptyAnnee.into());
        }
        if self.titre.is_empty() {
            return Err(ValidationError::EmptyTitre.into());
        }
        if self.description.is_empty() {
            return Err(ValidationError::EmptyDescription.into());
        }
        if self.competences.is_empty() {
            return Err(ValidationError::EmptyCompetences.into());
        }
        Ok(())
    }

    /// The status to persist: the draft's own, or [`STATUT_TERMINE`].
    ///
    /// An empty string counts as absent. Called by the storage adapters so
    /// a persisted row always carries a non-null status.
    #[must_use]
    pub fn statut_or_default(&self) -> &str {
        match self.statut.as_deref() {
            Some(s) if !s.is_empty() => s,
            _ => STATUT_TERMINE,
        }
    }
}

/// Step-by-step builder for [`ProjetDraft`].
#[derive(Debug, Default)]
pub struct ProjetDraftBuilder {
    annee: Option<String>,
    titre: Option<String>,
    description: Option<String>,
    competences: Option<String>,
    image: Option<String>,
    statut: Option<String>,
}

impl ProjetDraftBuilder {
    #[must_use]
    pub fn annee(mut self, annee: impl Into<String>) -> Self {
        self.annee = Some(annee.into());
        self
    }

    #[must_use]
    pub fn titre(mut self, titre: impl Into<String>) -> Self {
        self.titre = Some(titre.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn competences(mut self, competences: impl Into<String>) -> Self {
        self.competences = Some(competences.into());
        self
    }

    #[must_use]
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    #[must_use]
    pub fn statut(mut self, statut: impl Into<String>) -> Self {
        self.statut = Some(statut.into());
        self
    }

    /// Consume the builder, validate, and return a [`ProjetDraft`].
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::Validation`] if a required field is missing
    /// or empty.
    pub fn build(self) -> Result<ProjetDraft, PortfolioError> {
        let draft = ProjetDraft {
            annee: self.annee.unwrap_or_default(),
            titre: self.titre.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            competences: self.competences.unwrap_or_default(),
            image: self.image,
            statut: self.statut,
        };
        draft.validate()?;
        Ok(draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_builder() -> ProjetDraftBuilder {
        ProjetDraft::builder()
            .annee("2025")
            .titre("Test")
            .description("D")
            .competences("C")
    }

    #[test]
    fn should_build_valid_draft_when_required_fields_provided() {
        let draft = valid_builder().build().unwrap();
        assert_eq!(draft.annee, "2025");
        assert_eq!(draft.titre, "Test");
        assert!(draft.image.is_none());
        assert!(draft.statut.is_none());
    }

    #[test]
    fn should_return_validation_error_when_titre_is_empty() {
        let result = ProjetDraft::builder()
            .annee("2025")
            .titre("")
            .description("D")
            .competences("C")
            .build();
        assert!(matches!(
            result,
            Err(PortfolioError::Validation(ValidationError::EmptyTitre))
        ));
    }

    #[test]
    fn should_return_validation_error_when_annee_is_missing() {
        let result = ProjetDraft::builder()
            .titre("Test")
            .description("D")
            .competences("C")
            .build();
        assert!(matches!(
            result,
            Err(PortfolioError::Validation(ValidationError::EmptyAnnee))
        ));
    }

    #[test]
    fn should_default_statut_when_absent_or_empty() {
        let draft = valid_builder().build().unwrap();
        assert_eq!(draft.statut_or_default(), STATUT_TERMINE);

        let draft = valid_builder().statut("").build().unwrap();
        assert_eq!(draft.statut_or_default(), STATUT_TERMINE);
    }

    #[test]
    fn should_keep_explicit_statut() {
        let draft = valid_builder().statut("En cours").build().unwrap();
        assert_eq!(draft.statut_or_default(), "En cours");
    }

    #[test]
    fn should_roundtrip_draft_through_serde_json() {
        let draft = valid_builder().image("/img/test.png").build().unwrap();
        let json = serde_json::to_string(&draft).unwrap();
        let parsed: ProjetDraft = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, draft);
    }
}
