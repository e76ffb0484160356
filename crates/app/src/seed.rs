//! Default seed data inserted by `initialize()` on first-ever startup.

use portfolio_domain::projet::ProjetDraft;

/// The default portfolio entries, seeded only when the table is empty.
///
/// The rows themselves are content, not behavior: adapters insert them
/// through the same code path as any other draft, so they pick up the
/// default status and server-assigned timestamps.
#[must_use]
pub fn default_projets() -> Vec<ProjetDraft> {
    vec![
        ProjetDraft {
            annee: "2024".to_string(),
            titre: "Shirt".to_string(),
            description: "Création d'un compte Instagram et d'un magazine spécialisé autour \
                          des sneakers et des vêtements."
                .to_string(),
            competences: "Définition de l'identité visuelle - choix du nom - conception du \
                          logo - charte graphique - élaboration de la ligne éditoriale - \
                          rédaction d'articles - recherches documentaires - mise en page."
                .to_string(),
            image: None,
            statut: None,
        },
        ProjetDraft {
            annee: "2024".to_string(),
            titre: "Recommandation de communication".to_string(),
            description: "Conception d'une recommandation marketing et d'un plan de \
                          communication pour accompagner la sortie et le repositionnement \
                          d'un nouveau service."
                .to_string(),
            competences: "Audit de positionnement - analyse de concurrence - SWOT - PESTEL - \
                          plan/objectifs/moyens de communication - teaser - communiqué de \
                          presse."
                .to_string(),
            image: None,
            statut: None,
        },
        ProjetDraft {
            annee: "2024".to_string(),
            titre: "Mix & Match (projet personnel)".to_string(),
            description: "Jeu de société pour animer les étudiants. Il mélange chance, \
                          endurance et convivialité."
                .to_string(),
            competences: "Création de visuels - charte éditoriale - audit de positionnement - \
                          recommandation de communication numérique."
                .to_string(),
            image: None,
            statut: None,
        },
    ]
}
