//! PostgreSQL adapters.

mod assessment_repository;

pub use assessment_repository::PgAssessmentRepository;
