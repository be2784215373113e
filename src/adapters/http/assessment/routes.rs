//! HTTP routes for assessment endpoints.

use axum::{
    routing::{get, post, put},
    Router,
};

use super::handlers::{
    get_assessment, submit_assessment, update_assessment, AssessmentHandlers,
};

/// Creates the assessment router with all endpoints.
pub fn assessment_routes(handlers: AssessmentHandlers) -> Router {
    Router::new()
        .route("/", post(submit_assessment))
        .route("/:email", get(get_assessment))
        .route("/:email", put(update_assessment))
        .with_state(handlers)
}
