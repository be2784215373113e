//! HTTP adapters - REST API implementations.

pub mod assessment;

// Re-export key types for convenience
pub use assessment::{assessment_routes, AssessmentHandlers};
