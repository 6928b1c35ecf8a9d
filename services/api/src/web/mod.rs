pub mod plans;
pub mod rest;
pub mod sessions;
pub mod state;
pub mod subjects;

pub use plans::{generate_plan_handler, list_plans_handler};
pub use sessions::update_session_handler;
pub use subjects::{create_subject_handler, delete_subject_handler, list_subjects_handler};

use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use rest::ApiDoc;
use state::AppState;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Builds the complete application: the JSON API plus the Swagger UI.
pub fn build_router(app_state: Arc<AppState>) -> Router {
    // Any origin may call the API.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_router = Router::new()
        .route(
            "/api/subjects",
            get(list_subjects_handler).post(create_subject_handler),
        )
        .route("/api/subjects/{id}", delete(delete_subject_handler))
        .route("/api/study-plan", post(generate_plan_handler))
        .route("/api/study-plans", get(list_plans_handler))
        .route("/api/study-sessions/{id}", patch(update_session_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state);

    Router::new()
        .merge(api_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
