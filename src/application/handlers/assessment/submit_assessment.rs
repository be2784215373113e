//! SubmitAssessment - Command handler for first-time questionnaire submissions.

use std::sync::Arc;

use crate::domain::assessment::{
    score_answers, validate_answers, AnswerBundle, AssessmentRecord, RiskAssessment, RiskProfile,
};
use crate::domain::foundation::{DomainError, EmailAddress};
use crate::ports::{AssessmentRepository, NotificationMessage, Notifier};

/// Command to submit a new set of questionnaire answers.
#[derive(Debug, Clone)]
pub struct SubmitAssessmentCommand {
    pub email: EmailAddress,
    pub answers: AnswerBundle,
}

/// Result of a successful submission.
#[derive(Debug, Clone)]
pub struct SubmitAssessmentResult {
    pub record: AssessmentRecord,
    pub assessment: RiskAssessment,
}

/// Handler for questionnaire submissions.
pub struct SubmitAssessmentHandler {
    repository: Arc<dyn AssessmentRepository>,
    notifier: Arc<dyn Notifier>,
}

impl SubmitAssessmentHandler {
    pub fn new(repository: Arc<dyn AssessmentRepository>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            repository,
            notifier,
        }
    }

    pub async fn handle(
        &self,
        cmd: SubmitAssessmentCommand,
    ) -> Result<SubmitAssessmentResult, DomainError> {
        // 1. Reject malformed submissions before any work
        validate_answers(&cmd.answers)?;

        // 2. One active submission per email
        if self.repository.exists_for_email(&cmd.email).await? {
            return Err(DomainError::conflict(
                "Answers already submitted for this email",
            ));
        }

        // 3. Score
        let assessment = score_answers(&cmd.answers);
        if !assessment.is_fully_recognized() {
            tracing::warn!(
                email = %cmd.email,
                fields = ?assessment.unrecognized,
                "unclassified answers contributed zero to the risk score"
            );
        }

        // 4. Persist
        let record = AssessmentRecord::new(cmd.email.clone(), cmd.answers, &assessment);
        self.repository.create(&record).await?;

        // 5. Notify; delivery failure must not undo a stored submission
        let message = profile_notification(&cmd.email, assessment.profile);
        if let Err(e) = self.notifier.send(message).await {
            tracing::warn!(email = %cmd.email, error = %e, "failed to send assessment notification");
        }

        Ok(SubmitAssessmentResult { record, assessment })
    }
}

/// Templated result email carrying the computed profile label.
fn profile_notification(to: &EmailAddress, profile: RiskProfile) -> NotificationMessage {
    NotificationMessage::new(
        to.clone(),
        "Your risk profile assessment",
        format!(
            "<p>Hello,</p>\
             <p>Based on your answers to the investment profile questionnaire, \
             your risk profile is <strong>{}</strong>. We will be in touch with \
             the next steps shortly.</p>\
             <p>Best regards,<br/>The Advisory Team</p>",
            profile
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::assessment::testing::{
        complete_answers, MockAssessmentRepository, RecordingNotifier,
    };
    use crate::domain::foundation::ErrorCode;

    fn test_email() -> EmailAddress {
        EmailAddress::new("subject@example.com").unwrap()
    }

    fn handler(
        repo: Arc<MockAssessmentRepository>,
        notifier: Arc<RecordingNotifier>,
    ) -> SubmitAssessmentHandler {
        SubmitAssessmentHandler::new(repo, notifier)
    }

    #[tokio::test]
    async fn submit_scores_persists_and_notifies() {
        let repo = Arc::new(MockAssessmentRepository::new());
        let notifier = Arc::new(RecordingNotifier::new());
        let handler = handler(repo.clone(), notifier.clone());

        let result = handler
            .handle(SubmitAssessmentCommand {
                email: test_email(),
                answers: complete_answers(),
            })
            .await
            .unwrap();

        assert_eq!(repo.record_count(), 1);
        assert_eq!(result.record.score(), result.assessment.score);

        let sent = notifier.sent_messages();
        assert_eq!(sent.len(), 1);
        assert!(sent[0]
            .html_body
            .contains(result.assessment.profile.as_str()));
    }

    #[tokio::test]
    async fn submit_rejects_invalid_answers_without_persisting() {
        let repo = Arc::new(MockAssessmentRepository::new());
        let notifier = Arc::new(RecordingNotifier::new());
        let handler = handler(repo.clone(), notifier.clone());

        let mut answers = complete_answers();
        answers.insert("age", 0.0);

        let err = handler
            .handle(SubmitAssessmentCommand {
                email: test_email(),
                answers,
            })
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::ValidationFailed);
        assert_eq!(repo.record_count(), 0);
        assert!(notifier.sent_messages().is_empty());
    }

    #[tokio::test]
    async fn submit_rejects_duplicate_email() {
        let repo = Arc::new(MockAssessmentRepository::new());
        let notifier = Arc::new(RecordingNotifier::new());
        let handler = handler(repo.clone(), notifier.clone());

        let cmd = SubmitAssessmentCommand {
            email: test_email(),
            answers: complete_answers(),
        };
        handler.handle(cmd.clone()).await.unwrap();

        let err = handler.handle(cmd).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::Conflict);
        assert_eq!(repo.record_count(), 1);
    }

    #[tokio::test]
    async fn notification_failure_does_not_fail_submission() {
        let repo = Arc::new(MockAssessmentRepository::new());
        let notifier = Arc::new(RecordingNotifier::failing());
        let handler = handler(repo.clone(), notifier);

        let result = handler
            .handle(SubmitAssessmentCommand {
                email: test_email(),
                answers: complete_answers(),
            })
            .await;

        assert!(result.is_ok());
        assert_eq!(repo.record_count(), 1);
    }
}
