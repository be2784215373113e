//! GetAssessment - Query handler for fetching a stored submission.

use std::sync::Arc;

use crate::domain::assessment::AssessmentRecord;
use crate::domain::foundation::{DomainError, EmailAddress};
use crate::ports::AssessmentRepository;

/// Query for one subject's assessment.
#[derive(Debug, Clone)]
pub struct GetAssessmentQuery {
    pub email: EmailAddress,
}

/// Handler for assessment lookups.
pub struct GetAssessmentHandler {
    repository: Arc<dyn AssessmentRepository>,
}

impl GetAssessmentHandler {
    pub fn new(repository: Arc<dyn AssessmentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: GetAssessmentQuery,
    ) -> Result<Option<AssessmentRecord>, DomainError> {
        self.repository.find_by_email(&query.email).await
    }
}
