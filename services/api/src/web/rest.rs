//! services/api/src/web/rest.rs
//!
//! Shared response payloads and the master definition for the OpenAPI
//! specification.

use crate::web::{plans, sessions, subjects};
use serde::Serialize;
use study_planner_core::domain::{
    AvailableTime, Chapter, SessionRecord, StoredPlan, Subject, SubjectRecord,
};
use study_planner_core::planner::PlanRequest;
use utoipa::{OpenApi, ToSchema};

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        subjects::list_subjects_handler,
        subjects::create_subject_handler,
        subjects::delete_subject_handler,
        plans::generate_plan_handler,
        plans::list_plans_handler,
        sessions::update_session_handler,
    ),
    components(
        schemas(
            SubjectRecord,
            Subject,
            Chapter,
            AvailableTime,
            SessionRecord,
            StoredPlan,
            PlanRequest,
            MessageResponse,
            ErrorResponse
        )
    ),
    tags(
        (name = "Study Planner API", description = "Subjects, generated study plans and their sessions.")
    )
)]
pub struct ApiDoc;

//=========================================================================================
// API Response Structs
//=========================================================================================

/// `{"message": ...}`, used by subject deletion.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `{"error": ...}`, the body of every `ApiError` response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
