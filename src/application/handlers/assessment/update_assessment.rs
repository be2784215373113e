//! UpdateAssessment - Command handler for revising a stored submission.
//!
//! An update re-runs validation and always recomputes the score and
//! profile from the new answers before persisting, so a stored result can
//! never describe answers it was not derived from.

use std::sync::Arc;

use crate::domain::assessment::{
    score_answers, validate_answers, AnswerBundle, AssessmentRecord, RiskAssessment,
};
use crate::domain::foundation::{DomainError, EmailAddress};
use crate::ports::AssessmentRepository;

/// Command to replace a subject's stored answers.
#[derive(Debug, Clone)]
pub struct UpdateAssessmentCommand {
    pub email: EmailAddress,
    pub answers: AnswerBundle,
}

/// Result of a successful update.
#[derive(Debug, Clone)]
pub struct UpdateAssessmentResult {
    pub record: AssessmentRecord,
    pub assessment: RiskAssessment,
}

/// Handler for assessment updates.
pub struct UpdateAssessmentHandler {
    repository: Arc<dyn AssessmentRepository>,
}

impl UpdateAssessmentHandler {
    pub fn new(repository: Arc<dyn AssessmentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: UpdateAssessmentCommand,
    ) -> Result<UpdateAssessmentResult, DomainError> {
        validate_answers(&cmd.answers)?;

        let mut record = self
            .repository
            .find_by_email(&cmd.email)
            .await?
            .ok_or_else(|| DomainError::not_found("Assessment", &cmd.email))?;

        let assessment = score_answers(&cmd.answers);
        if !assessment.is_fully_recognized() {
            tracing::warn!(
                email = %cmd.email,
                fields = ?assessment.unrecognized,
                "unclassified answers contributed zero to the risk score"
            );
        }

        record.apply_update(cmd.answers, &assessment);
        self.repository.update(&record).await?;

        Ok(UpdateAssessmentResult { record, assessment })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::assessment::testing::{
        complete_answers, MockAssessmentRepository,
    };
    use crate::domain::foundation::ErrorCode;

    fn test_email() -> EmailAddress {
        EmailAddress::new("subject@example.com").unwrap()
    }

    fn seeded_repo() -> Arc<MockAssessmentRepository> {
        let answers = complete_answers();
        let assessment = score_answers(&answers);
        let record = AssessmentRecord::new(test_email(), answers, &assessment);
        Arc::new(MockAssessmentRepository::with_record(record))
    }

    #[tokio::test]
    async fn update_recomputes_score_and_profile() {
        let repo = seeded_repo();
        let handler = UpdateAssessmentHandler::new(repo.clone());

        // Shift several answers toward the aggressive end.
        let mut answers = complete_answers();
        answers.insert("age", 19.0);
        answers.insert("maxDeclineTolerance", "30% or more");
        answers.insert("expectedReturn", "Above 15% per annum");
        let expected = score_answers(&answers);

        let result = handler
            .handle(UpdateAssessmentCommand {
                email: test_email(),
                answers,
            })
            .await
            .unwrap();

        assert_eq!(result.assessment, expected);
        assert_eq!(result.record.score(), expected.score);

        let stored = repo.find(&test_email()).unwrap();
        assert_eq!(stored.score(), expected.score);
        assert_eq!(stored.profile(), expected.profile);
    }

    #[tokio::test]
    async fn update_rejects_unknown_email() {
        let repo = Arc::new(MockAssessmentRepository::new());
        let handler = UpdateAssessmentHandler::new(repo);

        let err = handler
            .handle(UpdateAssessmentCommand {
                email: test_email(),
                answers: complete_answers(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn update_rejects_invalid_answers_before_touching_storage() {
        let repo = seeded_repo();
        let handler = UpdateAssessmentHandler::new(repo.clone());
        let before = repo.find(&test_email()).unwrap();

        let mut answers = complete_answers();
        answers.insert("investmentGoal", "");

        let err = handler
            .handle(UpdateAssessmentCommand {
                email: test_email(),
                answers,
            })
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::ValidationFailed);
        assert_eq!(repo.find(&test_email()).unwrap(), before);
    }
}
