//! HTTP handlers for assessment endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::assessment::{
    GetAssessmentHandler, GetAssessmentQuery, SubmitAssessmentCommand, SubmitAssessmentHandler,
    UpdateAssessmentCommand, UpdateAssessmentHandler,
};
use crate::domain::foundation::{DomainError, EmailAddress, ErrorCode};

use super::dto::{
    AssessmentCommandResponse, AssessmentResponse, ErrorResponse, RiskResultResponse,
    SubmitAssessmentRequest, UpdateAssessmentRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AssessmentHandlers {
    submit_handler: Arc<SubmitAssessmentHandler>,
    get_handler: Arc<GetAssessmentHandler>,
    update_handler: Arc<UpdateAssessmentHandler>,
}

impl AssessmentHandlers {
    pub fn new(
        submit_handler: Arc<SubmitAssessmentHandler>,
        get_handler: Arc<GetAssessmentHandler>,
        update_handler: Arc<UpdateAssessmentHandler>,
    ) -> Self {
        Self {
            submit_handler,
            get_handler,
            update_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/assessments - Submit questionnaire answers
pub async fn submit_assessment(
    State(handlers): State<AssessmentHandlers>,
    Json(req): Json<SubmitAssessmentRequest>,
) -> Response {
    let email = match EmailAddress::new(req.email) {
        Ok(email) => email,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request(e.to_string())),
            )
                .into_response()
        }
    };

    let cmd = SubmitAssessmentCommand {
        email,
        answers: req.answers,
    };

    match handlers.submit_handler.handle(cmd).await {
        Ok(result) => {
            let response = AssessmentCommandResponse {
                message: "Assessment saved".to_string(),
                risk: RiskResultResponse::from(&result.assessment),
                data: AssessmentResponse::from(result.record),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_assessment_error(e),
    }
}

/// GET /api/assessments/:email - Fetch a stored assessment
pub async fn get_assessment(
    State(handlers): State<AssessmentHandlers>,
    Path(email): Path<String>,
) -> Response {
    let email = match EmailAddress::new(email) {
        Ok(email) => email,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request(e.to_string())),
            )
                .into_response()
        }
    };

    let query = GetAssessmentQuery {
        email: email.clone(),
    };

    match handlers.get_handler.handle(query).await {
        Ok(Some(record)) => {
            (StatusCode::OK, Json(AssessmentResponse::from(record))).into_response()
        }
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Assessment", email.as_str())),
        )
            .into_response(),
        Err(e) => handle_assessment_error(e),
    }
}

/// PUT /api/assessments/:email - Replace stored answers
pub async fn update_assessment(
    State(handlers): State<AssessmentHandlers>,
    Path(email): Path<String>,
    Json(req): Json<UpdateAssessmentRequest>,
) -> Response {
    let email = match EmailAddress::new(email) {
        Ok(email) => email,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request(e.to_string())),
            )
                .into_response()
        }
    };

    let cmd = UpdateAssessmentCommand {
        email,
        answers: req.answers,
    };

    match handlers.update_handler.handle(cmd).await {
        Ok(result) => {
            let response = AssessmentCommandResponse {
                message: "Assessment updated".to_string(),
                risk: RiskResultResponse::from(&result.assessment),
                data: AssessmentResponse::from(result.record),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_assessment_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_assessment_error(error: DomainError) -> Response {
    match error.code() {
        ErrorCode::ValidationFailed => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(error.message())),
        )
            .into_response(),
        ErrorCode::NotFound => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Assessment", "unknown")),
        )
            .into_response(),
        ErrorCode::Conflict => (
            StatusCode::CONFLICT,
            Json(ErrorResponse::conflict(error.message())),
        )
            .into_response(),
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::internal("An unexpected error occurred")),
        )
            .into_response(),
    }
}
