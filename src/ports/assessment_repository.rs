//! AssessmentRepository port - persistence interface for assessment records.

use async_trait::async_trait;

use crate::domain::assessment::AssessmentRecord;
use crate::domain::foundation::{DomainError, EmailAddress};

/// Port for storing and retrieving assessment records.
///
/// One active record per email address; `create` on an existing email is
/// the adapter's prerogative to reject, but handlers check
/// `exists_for_email` first to return a proper conflict.
#[async_trait]
pub trait AssessmentRepository: Send + Sync {
    /// Persists a new record.
    async fn create(&self, record: &AssessmentRecord) -> Result<(), DomainError>;

    /// Replaces the stored record with the same id.
    async fn update(&self, record: &AssessmentRecord) -> Result<(), DomainError>;

    /// Looks up the record for an email address.
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<AssessmentRecord>, DomainError>;

    /// True when a record exists for the email address.
    async fn exists_for_email(&self, email: &EmailAddress) -> Result<bool, DomainError>;
}
