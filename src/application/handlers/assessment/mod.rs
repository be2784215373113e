//! Assessment command and query handlers.

mod get_assessment;
mod submit_assessment;
mod update_assessment;

#[cfg(test)]
pub(crate) mod testing;

pub use get_assessment::{GetAssessmentHandler, GetAssessmentQuery};
pub use submit_assessment::{
    SubmitAssessmentCommand, SubmitAssessmentHandler, SubmitAssessmentResult,
};
pub use update_assessment::{
    UpdateAssessmentCommand, UpdateAssessmentHandler, UpdateAssessmentResult,
};
