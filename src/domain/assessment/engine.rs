//! Risk scoring engine.
//!
//! A pure, total function over answer bundles: every field is classified
//! independently, contributions are summed, and the rounded total is
//! bucketed into a profile label. Unrecognized or missing answers degrade
//! to a zero contribution; the engine never fails.
//!
//! Classification is two-stage per field: an exact lookup against the
//! controlled vocabulary first, then the free-text fallback rules.

use super::answers::AnswerBundle;
use super::fallback;
use super::profile::{RiskAssessment, RiskProfile};
use super::question::QuestionField;
use super::vocabulary::{
    CashReserves, Dependents, ExpectedReturn, Experience, IncomeStability, InvestmentGoal,
    InvestmentHorizon, MajorEvents, MaxDeclineTolerance, MoneyView, PrimaryIncome, ReactionToLoss,
    SavingPercentage,
};

/// Scores an answer bundle into a risk assessment.
///
/// Deterministic and side-effect free; safe to call concurrently.
pub fn score_answers(answers: &AnswerBundle) -> RiskAssessment {
    let mut total = 0.0;
    let mut unrecognized = Vec::new();

    for field in QuestionField::ALL {
        match field_contribution(answers, field) {
            Contribution::Scored(value) => total += value,
            Contribution::Absent => {}
            Contribution::Unrecognized => unrecognized.push(field),
        }
    }

    // Half points (1.5, 3.5) make the sum fractional; round half-up.
    let score = total.round() as u32;

    RiskAssessment {
        score,
        profile: RiskProfile::from_score(score),
        unrecognized,
    }
}

enum Contribution {
    Scored(f64),
    Absent,
    Unrecognized,
}

fn field_contribution(answers: &AnswerBundle, field: QuestionField) -> Contribution {
    if field == QuestionField::Age {
        return match answers.get(field) {
            None => Contribution::Absent,
            Some(value) => match value.as_number() {
                Some(age) => Contribution::Scored(fallback::age(age)),
                None => Contribution::Unrecognized,
            },
        };
    }

    let normalized = match answers.normalized(field) {
        Some(s) if !s.is_empty() => s,
        _ => return Contribution::Absent,
    };

    match classify(field, &normalized) {
        Some(value) => Contribution::Scored(value),
        None => Contribution::Unrecognized,
    }
}

/// Vocabulary table first, fallback rules second.
fn classify(field: QuestionField, s: &str) -> Option<f64> {
    match field {
        QuestionField::Age => unreachable!("age is scored numerically"),
        QuestionField::InvestmentHorizon => InvestmentHorizon::from_normalized(s)
            .map(InvestmentHorizon::contribution)
            .or_else(|| fallback::horizon(s)),
        QuestionField::PrimaryIncome => PrimaryIncome::from_normalized(s)
            .map(PrimaryIncome::contribution)
            .or_else(|| fallback::primary_income(s)),
        QuestionField::IncomeStability => IncomeStability::from_normalized(s)
            .map(IncomeStability::contribution)
            .or_else(|| fallback::income_stability(s)),
        QuestionField::SavingPercentage => SavingPercentage::from_normalized(s)
            .map(SavingPercentage::contribution)
            .or_else(|| fallback::saving_percentage(s)),
        QuestionField::Dependents => Dependents::from_normalized(s)
            .map(Dependents::contribution)
            .or_else(|| fallback::dependents(s)),
        QuestionField::CashReserves => CashReserves::from_normalized(s)
            .map(CashReserves::contribution)
            .or_else(|| fallback::cash_reserves(s)),
        QuestionField::Experience => Experience::from_normalized(s)
            .map(Experience::contribution)
            .or_else(|| fallback::experience(s)),
        QuestionField::ReactionToLoss => ReactionToLoss::from_normalized(s)
            .map(ReactionToLoss::contribution)
            .or_else(|| fallback::reaction_to_loss(s)),
        QuestionField::MaxDeclineTolerance => MaxDeclineTolerance::from_normalized(s)
            .map(MaxDeclineTolerance::contribution)
            .or_else(|| fallback::max_decline_tolerance(s)),
        QuestionField::MoneyView => MoneyView::from_normalized(s)
            .map(MoneyView::contribution)
            .or_else(|| fallback::money_view(s)),
        QuestionField::InvestmentGoal => InvestmentGoal::from_normalized(s)
            .map(InvestmentGoal::contribution)
            .or_else(|| fallback::investment_goal(s)),
        QuestionField::ExpectedReturn => ExpectedReturn::from_normalized(s)
            .map(ExpectedReturn::contribution)
            .or_else(|| fallback::expected_return(s)),
        QuestionField::MajorEvents => MajorEvents::from_normalized(s)
            .map(MajorEvents::contribution)
            .or_else(|| fallback::major_events(s)),
    }
}
