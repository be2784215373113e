//! In-memory assessment repository for testing and local development.
//!
//! # Security Note
//!
//! This adapter is for **testing only** and should not be used in
//! production. It uses `.expect()` on lock operations which will panic if
//! locks are poisoned. Production deployments use the PostgreSQL adapter.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::assessment::AssessmentRecord;
use crate::domain::foundation::{DomainError, EmailAddress, ErrorCode};
use crate::ports::AssessmentRepository;

/// In-memory assessment store.
///
/// Deterministic and synchronous under the hood, convenient for wiring
/// tests and demos without a database.
pub struct InMemoryAssessmentRepository {
    records: RwLock<Vec<AssessmentRecord>>,
}

impl InMemoryAssessmentRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Number of stored records (for test assertions).
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn record_count(&self) -> usize {
        self.records
            .read()
            .expect("InMemoryAssessmentRepository: records lock poisoned")
            .len()
    }
}

impl Default for InMemoryAssessmentRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AssessmentRepository for InMemoryAssessmentRepository {
    async fn create(&self, record: &AssessmentRecord) -> Result<(), DomainError> {
        let mut records = self
            .records
            .write()
            .expect("InMemoryAssessmentRepository: records lock poisoned");
        if records.iter().any(|r| r.email() == record.email()) {
            return Err(DomainError::conflict(
                "Record already exists for this email",
            ));
        }
        records.push(record.clone());
        Ok(())
    }

    async fn update(&self, record: &AssessmentRecord) -> Result<(), DomainError> {
        let mut records = self
            .records
            .write()
            .expect("InMemoryAssessmentRepository: records lock poisoned");
        match records.iter().position(|r| r.id() == record.id()) {
            Some(pos) => {
                records[pos] = record.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::NotFound,
                "Record not found for update",
            )),
        }
    }

    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<AssessmentRecord>, DomainError> {
        Ok(self
            .records
            .read()
            .expect("InMemoryAssessmentRepository: records lock poisoned")
            .iter()
            .find(|r| r.email() == email)
            .cloned())
    }

    async fn exists_for_email(&self, email: &EmailAddress) -> Result<bool, DomainError> {
        Ok(self
            .records
            .read()
            .expect("InMemoryAssessmentRepository: records lock poisoned")
            .iter()
            .any(|r| r.email() == email))
    }
}
