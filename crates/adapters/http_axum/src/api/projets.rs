//! JSON REST handlers for the project catalogue.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use portfolio_app::ports::ProjetRepository;
use portfolio_domain::projet::{Projet, ProjetDraft};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating or overwriting a project.
///
/// Required fields default to empty strings so that an omitted field is
/// rejected by validation (HTTP 400) rather than by deserialization.
#[derive(Deserialize)]
pub struct ProjetPayload {
    #[serde(default)]
    pub annee: String,
    #[serde(default)]
    pub titre: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub competences: String,
    pub image: Option<String>,
    pub statut: Option<String>,
}

impl ProjetPayload {
    fn into_draft(self) -> ProjetDraft {
        ProjetDraft {
            annee: self.annee,
            titre: self.titre,
            description: self.description,
            competences: self.competences,
            image: self.image,
            statut: self.statut,
        }
    }
}

/// Body returned after a successful create.
#[derive(Serialize)]
pub struct CreatedBody {
    pub id: i64,
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Projet>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<CreatedBody>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    Ok,
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok => StatusCode::OK.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `GET /api/projets`
///
/// A storage fault degrades to an empty catalogue instead of failing the
/// request; the fault is logged.
pub async fn list<R>(State(state): State<AppState<R>>) -> Json<Vec<Projet>>
where
    R: ProjetRepository + Send + Sync + 'static,
{
    match state.projet_service.list_projets().await {
        Ok(projets) => Json(projets),
        Err(err) => {
            tracing::error!(error = %err, "failed to list projets, serving an empty catalogue");
            Json(Vec::new())
        }
    }
}

/// `GET /api/projets/{id}`
pub async fn get<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<i64>,
) -> Result<GetResponse, ApiError>
where
    R: ProjetRepository + Send + Sync + 'static,
{
    let projet = state.projet_service.get_projet(id).await?;
    Ok(GetResponse::Ok(Json(projet)))
}

/// `POST /api/projets`
pub async fn create<R>(
    State(state): State<AppState<R>>,
    Json(payload): Json<ProjetPayload>,
) -> Result<CreateResponse, ApiError>
where
    R: ProjetRepository + Send + Sync + 'static,
{
    let id = state
        .projet_service
        .create_projet(payload.into_draft())
        .await?;
    Ok(CreateResponse::Created(Json(CreatedBody { id })))
}

/// `PUT /api/projets/{id}`
///
/// Full-row overwrite. The store does not report whether `id` matched a
/// row, so updating a missing project still answers 200.
pub async fn update<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<i64>,
    Json(payload): Json<ProjetPayload>,
) -> Result<UpdateResponse, ApiError>
where
    R: ProjetRepository + Send + Sync + 'static,
{
    state
        .projet_service
        .update_projet(id, payload.into_draft())
        .await?;
    Ok(UpdateResponse::Ok)
}

/// `DELETE /api/projets/{id}`
pub async fn delete<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<i64>,
) -> Result<DeleteResponse, ApiError>
where
    R: ProjetRepository + Send + Sync + 'static,
{
    state.projet_service.delete_projet(id).await?;
    Ok(DeleteResponse::NoContent)
}
