//! Shared test doubles for the assessment handlers.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::assessment::{AnswerBundle, AssessmentRecord};
use crate::domain::foundation::{DomainError, EmailAddress, ErrorCode};
use crate::ports::{AssessmentRepository, NotificationMessage, Notifier};

/// In-process repository double backed by a Vec.
pub(crate) struct MockAssessmentRepository {
    records: Mutex<Vec<AssessmentRecord>>,
}

impl MockAssessmentRepository {
    pub(crate) fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn with_record(record: AssessmentRecord) -> Self {
        let repo = Self::new();
        repo.records.lock().unwrap().push(record);
        repo
    }

    pub(crate) fn record_count(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub(crate) fn find(&self, email: &EmailAddress) -> Option<AssessmentRecord> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.email() == email)
            .cloned()
    }
}

#[async_trait]
impl AssessmentRepository for MockAssessmentRepository {
    async fn create(&self, record: &AssessmentRecord) -> Result<(), DomainError> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }

    async fn update(&self, record: &AssessmentRecord) -> Result<(), DomainError> {
        let mut records = self.records.lock().unwrap();
        if let Some(pos) = records.iter().position(|r| r.id() == record.id()) {
            records[pos] = record.clone();
            Ok(())
        } else {
            Err(DomainError::new(ErrorCode::NotFound, "Record not found"))
        }
    }

    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<AssessmentRecord>, DomainError> {
        Ok(self.find(email))
    }

    async fn exists_for_email(&self, email: &EmailAddress) -> Result<bool, DomainError> {
        Ok(self.find(email).is_some())
    }
}

/// Notifier double that records sent messages, optionally failing instead.
pub(crate) struct RecordingNotifier {
    sent: Mutex<Vec<NotificationMessage>>,
    fail: bool,
}

impl RecordingNotifier {
    pub(crate) fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub(crate) fn sent_messages(&self) -> Vec<NotificationMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, message: NotificationMessage) -> Result<(), DomainError> {
        if self.fail {
            return Err(DomainError::new(
                ErrorCode::NotificationFailed,
                "Simulated delivery failure",
            ));
        }
        self.sent.lock().unwrap().push(message);
        Ok(())
    }
}

/// A bundle that passes validation with mid-range answers.
pub(crate) fn complete_answers() -> AnswerBundle {
    AnswerBundle::new()
        .with("age", 32.0)
        .with("investmentHorizon", "3–5 years (medium-term goals)")
        .with("primaryIncome", "Business ownership")
        .with("incomeStability", "Moderately stable (occasional fluctuations)")
        .with("savingPercentage", "10–25%")
        .with("dependents", "1–2")
        .with("cashReserves", "Reserves covering 3–6 months of expenses")
        .with("experience", "Moderate (some exposure and understanding)")
        .with("reactionToLoss", "Remain invested with patience")
        .with("maxDeclineTolerance", "Up to 20%")
        .with("moneyView", "Primarily as security and stability")
        .with("investmentGoal", "Retirement planning")
        .with("expectedReturn", "6–10% per annum")
        .with("majorEvents", "None of the above")
}
