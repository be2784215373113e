//! Assessment domain - questionnaire scoring and risk classification.
//!
//! The scoring engine is a pure function over loosely-typed answer
//! bundles. Controlled vocabularies carry exhaustive contribution tables;
//! free-text fallback rules catch everything else; validation guards the
//! submission boundary.

mod answers;
mod engine;
mod fallback;
mod profile;
mod question;
mod record;
mod validation;
mod vocabulary;

pub use answers::{AnswerBundle, AnswerValue};
pub use engine::score_answers;
pub use profile::{RiskAssessment, RiskProfile};
pub use question::QuestionField;
pub use record::AssessmentRecord;
pub use validation::validate_answers;
