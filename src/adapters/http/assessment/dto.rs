//! HTTP DTOs for assessment endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::domain::assessment::{AnswerBundle, AssessmentRecord, RiskAssessment, RiskProfile};
use crate::domain::foundation::Timestamp;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to submit questionnaire answers.
///
/// Answer fields arrive flattened alongside `email`, exactly as the survey
/// front-end posts them; unknown extras are carried into the bundle.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitAssessmentRequest {
    pub email: String,
    #[serde(flatten)]
    pub answers: AnswerBundle,
}

/// Request to replace a stored set of answers.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAssessmentRequest {
    #[serde(flatten)]
    pub answers: AnswerBundle,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// The computed risk result.
#[derive(Debug, Clone, Serialize)]
pub struct RiskResultResponse {
    pub score: u32,
    pub profile: RiskProfile,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unrecognized_fields: Vec<String>,
}

impl From<&RiskAssessment> for RiskResultResponse {
    fn from(assessment: &RiskAssessment) -> Self {
        Self {
            score: assessment.score,
            profile: assessment.profile,
            unrecognized_fields: assessment
                .unrecognized
                .iter()
                .map(|f| f.as_str().to_string())
                .collect(),
        }
    }
}

/// A stored assessment record.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentResponse {
    pub id: String,
    pub email: String,
    pub score: u32,
    pub profile: RiskProfile,
    pub answers: AnswerBundle,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<AssessmentRecord> for AssessmentResponse {
    fn from(record: AssessmentRecord) -> Self {
        Self {
            id: record.id().to_string(),
            email: record.email().to_string(),
            score: record.score(),
            profile: record.profile(),
            answers: record.answers().clone(),
            created_at: record.created_at(),
            updated_at: record.updated_at(),
        }
    }
}

/// Response for submit and update operations.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentCommandResponse {
    pub message: String,
    pub data: AssessmentResponse,
    pub risk: RiskResultResponse,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource_type, id),
            details: None,
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            code: "CONFLICT".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::QuestionField;

    #[test]
    fn submit_request_flattens_answer_fields() {
        let json = r#"{
            "email": "user@example.com",
            "age": 45,
            "investmentHorizon": "10+ years (generational wealth)",
            "majorEvents": ["Business expansion"]
        }"#;
        let req: SubmitAssessmentRequest = serde_json::from_str(json).unwrap();

        assert_eq!(req.email, "user@example.com");
        assert_eq!(req.answers.number(QuestionField::Age), Some(45.0));
        assert_eq!(
            req.answers.normalized(QuestionField::MajorEvents).unwrap(),
            "business expansion"
        );
    }

    #[test]
    fn risk_result_omits_empty_unrecognized_list() {
        let assessment = RiskAssessment {
            score: 40,
            profile: RiskProfile::Balanced,
            unrecognized: vec![],
        };
        let json = serde_json::to_string(&RiskResultResponse::from(&assessment)).unwrap();
        assert!(!json.contains("unrecognized_fields"));
        assert!(json.contains("\"profile\":\"Balanced\""));
    }

    #[test]
    fn risk_result_lists_unrecognized_wire_names() {
        let assessment = RiskAssessment {
            score: 10,
            profile: RiskProfile::Conservative,
            unrecognized: vec![QuestionField::MoneyView],
        };
        let json = serde_json::to_string(&RiskResultResponse::from(&assessment)).unwrap();
        assert!(json.contains("\"moneyView\""));
    }

    #[test]
    fn error_response_bad_request_creates_correctly() {
        let error = ErrorResponse::bad_request("Invalid input");
        assert_eq!(error.code, "BAD_REQUEST");
        assert_eq!(error.message, "Invalid input");
    }
}
