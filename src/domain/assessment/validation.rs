//! Submission validation.
//!
//! The engine itself is total and never rejects input; hard failures for
//! user mistakes belong here, before scoring runs.

use crate::domain::foundation::DomainError;

use super::answers::AnswerBundle;
use super::question::QuestionField;

/// Validates an answer bundle ahead of scoring.
///
/// Requires a positive numeric age and presence of every field except
/// `majorEvents`. An empty string or empty selection counts as missing.
pub fn validate_answers(answers: &AnswerBundle) -> Result<(), DomainError> {
    match answers.number(QuestionField::Age) {
        Some(age) if age > 0.0 => {}
        _ => {
            return Err(DomainError::validation(
                "age",
                "Age must be greater than 0",
            ))
        }
    }

    for field in QuestionField::REQUIRED {
        let present = answers
            .normalized(field)
            .map_or(false, |s| !s.is_empty());
        if !present {
            return Err(DomainError::validation(
                field.as_str(),
                format!("{} is required", field),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    fn complete_bundle() -> AnswerBundle {
        AnswerBundle::new()
            .with("age", 32.0)
            .with("investmentHorizon", "3–5 years (medium-term goals)")
            .with("primaryIncome", "Business ownership")
            .with("incomeStability", "Moderately stable (occasional fluctuations)")
            .with("savingPercentage", "10–25%")
            .with("dependents", "1–2")
            .with("cashReserves", "Reserves covering 3–6 months of expenses")
            .with("experience", "Moderate (some exposure and understanding)")
            .with("reactionToLoss", "Remain invested with patience")
            .with("maxDeclineTolerance", "Up to 20%")
            .with("moneyView", "Primarily as security and stability")
            .with("investmentGoal", "Retirement planning")
            .with("expectedReturn", "6–10% per annum")
    }

    #[test]
    fn complete_bundle_passes() {
        assert!(validate_answers(&complete_bundle()).is_ok());
    }

    #[test]
    fn major_events_is_optional() {
        // complete_bundle has no majorEvents entry at all.
        assert!(validate_answers(&complete_bundle()).is_ok());
    }

    #[test]
    fn missing_age_is_rejected() {
        let bundle =
            AnswerBundle::new().with("investmentHorizon", "3–5 years (medium-term goals)");

        let err = validate_answers(&bundle).unwrap_err();
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
        assert_eq!(err.details().get("field"), Some(&"age".to_string()));
    }

    #[test]
    fn non_positive_age_is_rejected() {
        let bundle = complete_bundle().with("age", 0.0);
        let err = validate_answers(&bundle).unwrap_err();
        assert!(err.message().contains("greater than 0"));

        let bundle = complete_bundle().with("age", -4.0);
        assert!(validate_answers(&bundle).is_err());
    }

    #[test]
    fn non_numeric_age_is_rejected() {
        let bundle = complete_bundle().with("age", "old enough");
        assert!(validate_answers(&bundle).is_err());
    }

    #[test]
    fn missing_required_field_names_the_field() {
        let mut bundle = complete_bundle();
        bundle.insert("expectedReturn", "");

        let err = validate_answers(&bundle).unwrap_err();
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
        assert!(err.message().contains("expectedReturn is required"));
    }

    #[test]
    fn empty_selection_counts_as_missing() {
        let mut bundle = complete_bundle();
        bundle.insert(
            "moneyView",
            crate::domain::assessment::AnswerValue::Selection(vec![]),
        );
        assert!(validate_answers(&bundle).is_err());
    }

    #[test]
    fn free_text_answers_still_validate() {
        // Presence is checked, not vocabulary membership.
        let bundle = complete_bundle().with("experience", "dabbled in the nineties");
        assert!(validate_answers(&bundle).is_ok());
    }
}
