//! In-memory adapters for testing and local development.

mod assessment_repository;

pub use assessment_repository::InMemoryAssessmentRepository;
