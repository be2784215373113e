//! The questionnaire fields scored by the engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the fourteen questionnaire fields.
///
/// Serialized names match the wire names used by submission clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuestionField {
    Age,
    InvestmentHorizon,
    PrimaryIncome,
    IncomeStability,
    SavingPercentage,
    Dependents,
    CashReserves,
    Experience,
    ReactionToLoss,
    MaxDeclineTolerance,
    MoneyView,
    InvestmentGoal,
    ExpectedReturn,
    MajorEvents,
}

impl QuestionField {
    /// Every field, in scoring order.
    pub const ALL: [QuestionField; 14] = [
        QuestionField::Age,
        QuestionField::InvestmentHorizon,
        QuestionField::PrimaryIncome,
        QuestionField::IncomeStability,
        QuestionField::SavingPercentage,
        QuestionField::Dependents,
        QuestionField::CashReserves,
        QuestionField::Experience,
        QuestionField::ReactionToLoss,
        QuestionField::MaxDeclineTolerance,
        QuestionField::MoneyView,
        QuestionField::InvestmentGoal,
        QuestionField::ExpectedReturn,
        QuestionField::MajorEvents,
    ];

    /// Fields the submission validator requires, besides `age` which gets
    /// its own numeric check. `majorEvents` is optional.
    pub const REQUIRED: [QuestionField; 12] = [
        QuestionField::InvestmentHorizon,
        QuestionField::PrimaryIncome,
        QuestionField::IncomeStability,
        QuestionField::SavingPercentage,
        QuestionField::Dependents,
        QuestionField::CashReserves,
        QuestionField::Experience,
        QuestionField::ReactionToLoss,
        QuestionField::MaxDeclineTolerance,
        QuestionField::MoneyView,
        QuestionField::InvestmentGoal,
        QuestionField::ExpectedReturn,
    ];

    /// The wire name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionField::Age => "age",
            QuestionField::InvestmentHorizon => "investmentHorizon",
            QuestionField::PrimaryIncome => "primaryIncome",
            QuestionField::IncomeStability => "incomeStability",
            QuestionField::SavingPercentage => "savingPercentage",
            QuestionField::Dependents => "dependents",
            QuestionField::CashReserves => "cashReserves",
            QuestionField::Experience => "experience",
            QuestionField::ReactionToLoss => "reactionToLoss",
            QuestionField::MaxDeclineTolerance => "maxDeclineTolerance",
            QuestionField::MoneyView => "moneyView",
            QuestionField::InvestmentGoal => "investmentGoal",
            QuestionField::ExpectedReturn => "expectedReturn",
            QuestionField::MajorEvents => "majorEvents",
        }
    }
}

impl fmt::Display for QuestionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
