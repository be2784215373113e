//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AssessmentRepository` - Persistence for assessment records
//! - `Notifier` - Outbound notification delivery

mod assessment_repository;
mod notifier;

pub use assessment_repository::AssessmentRepository;
pub use notifier::{NotificationMessage, Notifier};
