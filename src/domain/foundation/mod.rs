//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types that form the
//! vocabulary of the RiskGauge domain.

mod email;
mod errors;
mod ids;
mod timestamp;

pub use email::EmailAddress;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::AssessmentId;
pub use timestamp::Timestamp;
