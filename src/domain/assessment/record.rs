//! Stored assessment aggregate.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AssessmentId, EmailAddress, Timestamp};

use super::answers::AnswerBundle;
use super::profile::{RiskAssessment, RiskProfile};

/// One subject's questionnaire submission with its computed risk result.
///
/// The raw answers are retained alongside the derived score so the result
/// can be re-derived or audited later. One active record per email.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    id: AssessmentId,
    email: EmailAddress,
    answers: AnswerBundle,
    score: u32,
    profile: RiskProfile,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl AssessmentRecord {
    /// Creates a record from a scored submission.
    pub fn new(email: EmailAddress, answers: AnswerBundle, assessment: &RiskAssessment) -> Self {
        let now = Timestamp::now();
        Self {
            id: AssessmentId::new(),
            email,
            answers,
            score: assessment.score,
            profile: assessment.profile,
            created_at: now,
            updated_at: now,
        }
    }

    /// Reconstructs a record from stored parts (persistence adapters).
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        id: AssessmentId,
        email: EmailAddress,
        answers: AnswerBundle,
        score: u32,
        profile: RiskProfile,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            email,
            answers,
            score,
            profile,
            created_at,
            updated_at,
        }
    }

    /// Replaces the answers and the derived risk result.
    ///
    /// Updates always carry a freshly computed assessment so the stored
    /// score can never drift from the stored answers.
    pub fn apply_update(&mut self, answers: AnswerBundle, assessment: &RiskAssessment) {
        self.answers = answers;
        self.score = assessment.score;
        self.profile = assessment.profile;
        self.updated_at = Timestamp::now();
    }

    pub fn id(&self) -> AssessmentId {
        self.id
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn answers(&self) -> &AnswerBundle {
        &self.answers
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn profile(&self) -> RiskProfile {
        self.profile
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }
}
