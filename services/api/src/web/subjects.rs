//! services/api/src/web/subjects.rs
//!
//! Handlers for the subject collection.

use crate::error::ApiError;
use crate::web::rest::{ErrorResponse, MessageResponse};
use crate::web::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
};
use serde_json::Value;
use std::sync::Arc;
use study_planner_core::{PortError, SubjectRecord};
use tracing::{debug, info, warn};

/// List every stored subject in insertion order.
#[utoipa::path(
    get,
    path = "/api/subjects",
    responses(
        (status = 200, description = "All subjects", body = [SubjectRecord])
    )
)]
pub async fn list_subjects_handler(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<Vec<SubjectRecord>>, ApiError> {
    let subjects = app_state.subjects.list_subjects().await?;
    debug!(count = subjects.len(), "Listing subjects");
    Ok(Json(subjects))
}

/// Store a subject exactly as sent. Only a string `id` is required; it is
/// supplied by the caller and not checked for uniqueness.
#[utoipa::path(
    post,
    path = "/api/subjects",
    request_body = SubjectRecord,
    responses(
        (status = 201, description = "Subject stored", body = SubjectRecord),
        (status = 400, description = "Body is not an object with a string id", body = ErrorResponse)
    )
)]
pub async fn create_subject_handler(
    State(app_state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<SubjectRecord>), ApiError> {
    let Json(body) = payload?;
    let subject = SubjectRecord::from_value(body).map_err(ApiError::InvalidBody)?;
    let stored = app_state.subjects.add_subject(subject).await?;
    Ok((StatusCode::CREATED, Json(stored)))
}

/// Delete every subject carrying the given id.
#[utoipa::path(
    delete,
    path = "/api/subjects/{id}",
    params(
        ("id" = String, Path, description = "The caller-supplied subject id.")
    ),
    responses(
        (status = 200, description = "Subject deleted", body = MessageResponse),
        (status = 404, description = "No subject has this id", body = MessageResponse)
    )
)]
pub async fn delete_subject_handler(
    State(app_state): State<Arc<AppState>>,
    Path(subject_id): Path<String>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    match app_state.subjects.delete_subject(&subject_id).await {
        Ok(removed) => {
            info!(%subject_id, removed, "Subject deleted");
            Ok((
                StatusCode::OK,
                Json(MessageResponse::new("Subject deleted successfully")),
            ))
        }
        Err(PortError::NotFound(_)) => {
            warn!(%subject_id, "Delete requested for unknown subject");
            Ok((
                StatusCode::NOT_FOUND,
                Json(MessageResponse::new("Subject not found")),
            ))
        }
        Err(e) => Err(e.into()),
    }
}
