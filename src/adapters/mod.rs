//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - REST API surface (axum)
//! - `email` - Resend notifier
//! - `postgres` - Database-backed persistence
//! - `memory` - In-memory persistence for tests and demos

pub mod email;
pub mod http;
pub mod memory;
pub mod postgres;

pub use email::ResendNotifier;
pub use memory::InMemoryAssessmentRepository;
pub use postgres::PgAssessmentRepository;
