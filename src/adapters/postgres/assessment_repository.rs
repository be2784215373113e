//! PostgreSQL adapter for AssessmentRepository.
//!
//! Answers are stored as a JSONB document next to the derived score and
//! profile columns, so the raw submission stays auditable.

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::assessment::{AnswerBundle, AssessmentRecord, RiskProfile};
use crate::domain::foundation::{
    AssessmentId, DomainError, EmailAddress, ErrorCode, Timestamp,
};
use crate::ports::AssessmentRepository;

/// PostgreSQL implementation of AssessmentRepository.
pub struct PgAssessmentRepository {
    pool: PgPool,
}

impl PgAssessmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Build a record from a database row.
    fn from_db_row(row: &sqlx::postgres::PgRow) -> Result<AssessmentRecord, DomainError> {
        let id: Uuid = row.get("id");
        let email: String = row.get("email");
        let score: i32 = row.get("risk_score");
        let profile_str: String = row.get("risk_profile");

        let answers: AnswerBundle = serde_json::from_value(row.get("answers")).map_err(|e| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Failed to deserialize answers: {}", e),
            )
        })?;

        let profile = match profile_str.as_str() {
            "Conservative" => RiskProfile::Conservative,
            "Balanced" => RiskProfile::Balanced,
            "Growth" => RiskProfile::Growth,
            "Aggressive" => RiskProfile::Aggressive,
            other => {
                return Err(DomainError::new(
                    ErrorCode::InternalError,
                    format!("Invalid stored risk profile: {}", other),
                ))
            }
        };

        let email = EmailAddress::new(email)
            .map_err(|e| DomainError::new(ErrorCode::InternalError, e.to_string()))?;

        let created_at: chrono::DateTime<chrono::Utc> = row.get("created_at");
        let updated_at: chrono::DateTime<chrono::Utc> = row.get("updated_at");

        Ok(AssessmentRecord::from_parts(
            AssessmentId::from_uuid(id),
            email,
            answers,
            score as u32,
            profile,
            Timestamp::from_datetime(created_at),
            Timestamp::from_datetime(updated_at),
        ))
    }
}

fn db_error(e: sqlx::Error) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, format!("Database error: {}", e))
}

#[async_trait]
impl AssessmentRepository for PgAssessmentRepository {
    async fn create(&self, record: &AssessmentRecord) -> Result<(), DomainError> {
        let answers = serde_json::to_value(record.answers()).map_err(|e| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Failed to serialize answers: {}", e),
            )
        })?;

        sqlx::query(
            r#"
            INSERT INTO assessments (
                id, email, answers, risk_score, risk_profile,
                created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(record.id().as_uuid())
        .bind(record.email().as_str())
        .bind(answers)
        .bind(record.score() as i32)
        .bind(record.profile().as_str())
        .bind(record.created_at().as_datetime())
        .bind(record.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(())
    }

    async fn update(&self, record: &AssessmentRecord) -> Result<(), DomainError> {
        let answers = serde_json::to_value(record.answers()).map_err(|e| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Failed to serialize answers: {}", e),
            )
        })?;

        let result = sqlx::query(
            r#"
            UPDATE assessments
            SET answers = $2,
                risk_score = $3,
                risk_profile = $4,
                updated_at = $5
            WHERE id = $1
            "#,
        )
        .bind(record.id().as_uuid())
        .bind(answers)
        .bind(record.score() as i32)
        .bind(record.profile().as_str())
        .bind(record.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::NotFound,
                "Record not found for update",
            ));
        }

        Ok(())
    }

    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<AssessmentRecord>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, email, answers, risk_score, risk_profile,
                   created_at, updated_at
            FROM assessments
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?;

        row.as_ref().map(Self::from_db_row).transpose()
    }

    async fn exists_for_email(&self, email: &EmailAddress) -> Result<bool, DomainError> {
        let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM assessments WHERE email = $1)")
            .bind(email.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(row.get::<bool, _>(0))
    }
}
