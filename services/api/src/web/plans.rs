//! services/api/src/web/plans.rs
//!
//! Handlers for generating study plans and reading back the stored ones.

use crate::error::ApiError;
use crate::web::rest::ErrorResponse;
use crate::web::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use std::sync::Arc;
use study_planner_core::planner::{generate_plan, PlanRequest};
use study_planner_core::StoredPlan;
use tracing::{debug, info};

/// Generate a study plan and keep it for later session updates.
#[utoipa::path(
    post,
    path = "/api/study-plan",
    request_body = PlanRequest,
    responses(
        (status = 200, description = "The generated plan", body = StoredPlan),
        (status = 400, description = "Missing required data", body = ErrorResponse),
        (status = 500, description = "A date could not be parsed or compared", body = ErrorResponse)
    )
)]
pub async fn generate_plan_handler(
    State(app_state): State<Arc<AppState>>,
    payload: Result<Json<PlanRequest>, JsonRejection>,
) -> Result<Json<StoredPlan>, ApiError> {
    let Json(request) = payload?;
    let plan = generate_plan(&request)?;
    info!(
        sessions = plan.sessions.len(),
        start = %plan.start_date,
        end = %plan.end_date,
        "Generated study plan"
    );
    let stored = app_state.plans.save_plan(plan).await?;
    Ok(Json(stored))
}

/// List every generated plan in the order it was created.
#[utoipa::path(
    get,
    path = "/api/study-plans",
    responses(
        (status = 200, description = "All stored plans", body = [StoredPlan])
    )
)]
pub async fn list_plans_handler(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<Vec<StoredPlan>>, ApiError> {
    let plans = app_state.plans.list_plans().await?;
    debug!(count = plans.len(), "Listing study plans");
    Ok(Json(plans))
}
