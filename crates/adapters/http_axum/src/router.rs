//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use portfolio_app::ports::ProjetRepository;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Mounts the JSON API under `/api` and includes a [`TraceLayer`] that logs
/// each HTTP request/response at the `DEBUG` level using the `tracing`
/// ecosystem.
pub fn build<R>(state: AppState<R>) -> Router
where
    R: ProjetRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use portfolio_app::services::ProjetService;
    use portfolio_domain::error::PortfolioError;
    use portfolio_domain::projet::{Projet, ProjetDraft};
    use tower::ServiceExt;

    struct StubProjetRepo;

    impl ProjetRepository for StubProjetRepo {
        async fn initialize(&self) -> Result<(), PortfolioError> {
            Ok(())
        }
        async fn list_all(&self) -> Result<Vec<Projet>, PortfolioError> {
            Ok(vec![])
        }
        async fn get_by_id(&self, _id: i64) -> Result<Option<Projet>, PortfolioError> {
            Ok(None)
        }
        async fn insert(&self, _draft: ProjetDraft) -> Result<i64, PortfolioError> {
            Ok(1)
        }
        async fn update(&self, _id: i64, _draft: ProjetDraft) -> Result<(), PortfolioError> {
            Ok(())
        }
        async fn delete(&self, _id: i64) -> Result<(), PortfolioError> {
            Ok(())
        }
    }

    /// Repository whose reads always fail, for the degrade path.
    struct BrokenProjetRepo;

    fn storage_error() -> PortfolioError {
        PortfolioError::Storage(Box::new(std::io::Error::other("connection lost")))
    }

    impl ProjetRepository for BrokenProjetRepo {
        async fn initialize(&self) -> Result<(), PortfolioError> {
            Err(storage_error())
        }
        async fn list_all(&self) -> Result<Vec<Projet>, PortfolioError> {
            Err(storage_error())
        }
        async fn get_by_id(&self, _id: i64) -> Result<Option<Projet>, PortfolioError> {
            Err(storage_error())
        }
        async fn insert(&self, _draft: ProjetDraft) -> Result<i64, PortfolioError> {
            Err(storage_error())
        }
        async fn update(&self, _id: i64, _draft: ProjetDraft) -> Result<(), PortfolioError> {
            Err(storage_error())
        }
        async fn delete(&self, _id: i64) -> Result<(), PortfolioError> {
            Err(storage_error())
        }
    }

    fn app<R: ProjetRepository + Send + Sync + 'static>(repo: R) -> Router {
        build(AppState::new(ProjetService::new(repo)))
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let response = app(StubProjetRepo)
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_return_not_found_for_missing_projet() {
        let response = app(StubProjetRepo)
            .oneshot(
                Request::builder()
                    .uri("/api/projets/42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_reject_create_with_empty_required_field() {
        let response = app(StubProjetRepo)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/projets")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        r#"{"annee":"2025","titre":"","description":"D","competences":"C"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_serve_empty_list_when_storage_fails() {
        let response = app(BrokenProjetRepo)
            .oneshot(
                Request::builder()
                    .uri("/api/projets")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: Vec<serde_json::Value> =
            serde_json::from_slice(&response.into_body().collect().await.unwrap().to_bytes())
                .unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn should_return_internal_error_when_create_hits_storage_fault() {
        let response = app(BrokenProjetRepo)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/projets")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        r#"{"annee":"2025","titre":"T","description":"D","competences":"C"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
