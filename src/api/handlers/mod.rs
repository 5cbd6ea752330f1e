use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{DocumentKind, ReviseDocumentInput, SubmitIdeaInput};
use crate::service::{DocumentService, ServiceError};

// ============================================================
// Error Handling
// ============================================================

type ErrorResponse = (StatusCode, Json<serde_json::Value>);

fn error_body(message: impl Into<String>) -> Json<serde_json::Value> {
    Json(serde_json::json!({ "error": message.into() }))
}

/// Map a service error to a response status.
///
/// Lookup failures are the client's fault (404/400); provider failures are an
/// upstream problem (502); store failures stay an opaque 500. Provider and
/// store details are logged server-side and not leaked to the client.
fn service_error(e: ServiceError) -> ErrorResponse {
    match e {
        ServiceError::SubmissionNotFound | ServiceError::DocumentNotFound => {
            tracing::warn!("lookup failed: {}", e);
            (StatusCode::NOT_FOUND, error_body(e.to_string()))
        }
        ServiceError::InvalidTemplate => {
            tracing::warn!("template lookup failed: {}", e);
            (StatusCode::BAD_REQUEST, error_body(e.to_string()))
        }
        ServiceError::Generation(err) => {
            tracing::error!("provider call failed: {}", err);
            (
                StatusCode::BAD_GATEWAY,
                error_body("Document generation failed"),
            )
        }
        ServiceError::Store(err) => {
            tracing::error!("store operation failed: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                error_body("Internal server error"),
            )
        }
    }
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Intake
// ============================================================

#[derive(Debug, Serialize)]
pub struct SubmitIdeaResponse {
    pub message: &'static str,
    pub id: Uuid,
}

pub async fn submit_idea(
    State(service): State<DocumentService>,
    Json(input): Json<SubmitIdeaInput>,
) -> Result<(StatusCode, Json<SubmitIdeaResponse>), ErrorResponse> {
    let submission = service.db().insert_submission(input).map_err(|e| {
        tracing::error!("failed to save submission: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            error_body("Error saving user input"),
        )
    })?;

    Ok((
        StatusCode::CREATED,
        Json(SubmitIdeaResponse {
            message: "User input saved",
            id: submission.id,
        }),
    ))
}

// ============================================================
// Generation
// ============================================================

#[derive(Debug, Serialize)]
pub struct DocumentResponse {
    pub document: String,
}

pub async fn generate_document(
    State(service): State<DocumentService>,
    Path((kind, id)): Path<(DocumentKind, Uuid)>,
) -> Result<Json<DocumentResponse>, ErrorResponse> {
    let document = service.generate(id, kind).await.map_err(service_error)?;
    Ok(Json(DocumentResponse {
        document: document.content,
    }))
}

pub async fn generate_requirements(
    state: State<DocumentService>,
    Path(id): Path<Uuid>,
) -> Result<Json<DocumentResponse>, ErrorResponse> {
    generate_document(state, Path((DocumentKind::Requirements, id))).await
}

pub async fn generate_technical(
    state: State<DocumentService>,
    Path(id): Path<Uuid>,
) -> Result<Json<DocumentResponse>, ErrorResponse> {
    generate_document(state, Path((DocumentKind::Technical, id))).await
}

pub async fn generate_lifecycle(
    state: State<DocumentService>,
    Path(id): Path<Uuid>,
) -> Result<Json<DocumentResponse>, ErrorResponse> {
    generate_document(state, Path((DocumentKind::Lifecycle, id))).await
}

// ============================================================
// Revision
// ============================================================

pub async fn revise_document(
    State(service): State<DocumentService>,
    Path((kind, id)): Path<(DocumentKind, Uuid)>,
    Json(input): Json<ReviseDocumentInput>,
) -> Result<Json<DocumentResponse>, ErrorResponse> {
    let document = service
        .revise(id, kind, &input.revision_prompt)
        .await
        .map_err(service_error)?;
    Ok(Json(DocumentResponse {
        document: document.content,
    }))
}
