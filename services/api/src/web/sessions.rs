//! services/api/src/web/sessions.rs
//!
//! Partial updates to sessions inside stored plans.

use crate::error::ApiError;
use crate::web::rest::ErrorResponse;
use crate::web::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::Json,
};
use serde_json::Value;
use std::sync::Arc;
use study_planner_core::SessionRecord;
use tracing::{info, warn};

/// Overwrite any subset of a session's fields. Values are stored as sent,
/// whatever their type, and unknown keys are added.
///
/// Session ids repeat across plans; the session in the oldest plan wins.
#[utoipa::path(
    patch,
    path = "/api/study-sessions/{id}",
    request_body(content_type = "application/json", description = "Any subset of session fields to overwrite."),
    params(
        ("id" = String, Path, description = "The session id, e.g. `session_0`.")
    ),
    responses(
        (status = 200, description = "The updated session", body = SessionRecord),
        (status = 400, description = "Body is not a JSON object", body = ErrorResponse),
        (status = 404, description = "Session not found", body = ErrorResponse)
    )
)]
pub async fn update_session_handler(
    State(app_state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<SessionRecord>, ApiError> {
    let Json(body) = payload?;
    let Value::Object(patch) = body else {
        return Err(ApiError::InvalidBody(
            "Session update must be a JSON object".to_string(),
        ));
    };

    match app_state.plans.update_session(&session_id, &patch).await {
        Ok(session) => {
            info!(%session_id, "Session updated");
            Ok(Json(session))
        }
        Err(e) => {
            warn!(%session_id, "Session update failed: {}", e);
            Err(e.into())
        }
    }
}
