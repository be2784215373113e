//! Controlled vocabularies for the questionnaire fields.
//!
//! Each field's official answer options form a small closed enum carrying
//! an exhaustive contribution table. Lookup is an exact match on the
//! normalized (lowercase, trimmed) option text; anything outside the
//! vocabulary falls through to the free-text classifiers in [`fallback`].
//!
//! The tables agree with the fallback heuristics on every vocabulary
//! string, so an answer scores the same whichever path classifies it.
//!
//! [`fallback`]: super::fallback

/// How long the subject intends to stay invested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvestmentHorizon {
    UnderOneYear,
    OneToThreeYears,
    ThreeToFiveYears,
    FiveToTenYears,
    TenPlusYears,
}

impl InvestmentHorizon {
    pub fn from_normalized(s: &str) -> Option<Self> {
        match s {
            "less than 1 year (short-term positioning)" => Some(Self::UnderOneYear),
            "1–3 years (near-term planning)" => Some(Self::OneToThreeYears),
            "3–5 years (medium-term goals)" => Some(Self::ThreeToFiveYears),
            "5–10 years (long-term growth)" => Some(Self::FiveToTenYears),
            "10+ years (generational wealth)" => Some(Self::TenPlusYears),
            _ => None,
        }
    }

    pub fn contribution(self) -> f64 {
        match self {
            Self::UnderOneYear => 1.0,
            Self::OneToThreeYears => 2.0,
            Self::ThreeToFiveYears => 3.0,
            Self::FiveToTenYears => 4.0,
            Self::TenPlusYears => 5.0,
        }
    }
}

/// Where the subject's income comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryIncome {
    FixedSalary,
    BusinessOwnership,
    SelfEmployed,
    PassiveIncome,
    Retired,
    Other,
}

impl PrimaryIncome {
    pub fn from_normalized(s: &str) -> Option<Self> {
        match s {
            "fixed salary (government / corporate)" => Some(Self::FixedSalary),
            "business ownership" => Some(Self::BusinessOwnership),
            "self-employed / professional services" => Some(Self::SelfEmployed),
            "passive income (rental, dividends)" => Some(Self::PassiveIncome),
            "retired" => Some(Self::Retired),
            "other (inheritance, trust, family office, etc.)" => Some(Self::Other),
            _ => None,
        }
    }

    pub fn contribution(self) -> f64 {
        match self {
            Self::FixedSalary => 5.0,
            Self::BusinessOwnership => 3.0,
            Self::SelfEmployed => 4.0,
            Self::PassiveIncome => 3.5,
            Self::Retired => 4.0,
            Self::Other => 2.0,
        }
    }
}

/// How predictable that income is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncomeStability {
    VeryStable,
    ModeratelyStable,
    HighlyVariable,
}

impl IncomeStability {
    pub fn from_normalized(s: &str) -> Option<Self> {
        match s {
            "very stable and predictable" => Some(Self::VeryStable),
            "moderately stable (occasional fluctuations)" => Some(Self::ModeratelyStable),
            "highly variable (uncertain or cyclical)" => Some(Self::HighlyVariable),
            _ => None,
        }
    }

    pub fn contribution(self) -> f64 {
        match self {
            Self::VeryStable => 5.0,
            Self::ModeratelyStable => 3.0,
            Self::HighlyVariable => 1.5,
        }
    }
}

/// Share of income saved or invested.
///
/// The two middle buckets score 4 and 5 rather than 2 and 5: the table
/// mirrors the ordered keyword rules, which check "40" and "25" before
/// "10", so both paths classify every vocabulary string identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SavingPercentage {
    UnderTenPercent,
    TenToTwentyFive,
    TwentyFiveToForty,
    OverFortyPercent,
}

impl SavingPercentage {
    pub fn from_normalized(s: &str) -> Option<Self> {
        match s {
            "less than 10%" => Some(Self::UnderTenPercent),
            "10–25%" => Some(Self::TenToTwentyFive),
            "25–40%" => Some(Self::TwentyFiveToForty),
            "more than 40%" => Some(Self::OverFortyPercent),
            _ => None,
        }
    }

    pub fn contribution(self) -> f64 {
        match self {
            Self::UnderTenPercent => 1.0,
            Self::TenToTwentyFive => 4.0,
            Self::TwentyFiveToForty => 5.0,
            Self::OverFortyPercent => 5.0,
        }
    }
}

/// Number of financial dependents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dependents {
    None,
    OneToTwo,
    ThreeToFour,
    FiveOrMore,
}

impl Dependents {
    pub fn from_normalized(s: &str) -> Option<Self> {
        match s {
            "none" | "0" => Some(Self::None),
            "1–2" => Some(Self::OneToTwo),
            "3–4" => Some(Self::ThreeToFour),
            "5 or more" => Some(Self::FiveOrMore),
            _ => None,
        }
    }

    pub fn contribution(self) -> f64 {
        match self {
            Self::None => 5.0,
            Self::OneToTwo => 3.0,
            Self::ThreeToFour => 2.0,
            Self::FiveOrMore => 1.0,
        }
    }
}

/// Emergency cash reserves, in months of expenses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CashReserves {
    NoReserves,
    UpToThreeMonths,
    ThreeToSixMonths,
    OverSixMonths,
}

impl CashReserves {
    pub fn from_normalized(s: &str) -> Option<Self> {
        match s {
            "no reserves at present" => Some(Self::NoReserves),
            "reserves covering up to 3 months of expenses" => Some(Self::UpToThreeMonths),
            "reserves covering 3–6 months of expenses" => Some(Self::ThreeToSixMonths),
            "reserves covering more than 6 months" => Some(Self::OverSixMonths),
            _ => None,
        }
    }

    pub fn contribution(self) -> f64 {
        match self {
            Self::NoReserves => 1.0,
            Self::UpToThreeMonths => 2.0,
            Self::ThreeToSixMonths => 3.0,
            Self::OverSixMonths => 5.0,
        }
    }
}

/// Prior investment experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Experience {
    Beginner,
    Moderate,
    Experienced,
}

impl Experience {
    pub fn from_normalized(s: &str) -> Option<Self> {
        match s {
            "beginner (limited experience)" => Some(Self::Beginner),
            "moderate (some exposure and understanding)" => Some(Self::Moderate),
            "experienced (actively manage or follow markets)" => Some(Self::Experienced),
            _ => None,
        }
    }

    pub fn contribution(self) -> f64 {
        match self {
            Self::Beginner => 1.0,
            Self::Moderate => 3.0,
            Self::Experienced => 5.0,
        }
    }
}

/// Behavioral response to a significant market drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionToLoss {
    ExitInvestments,
    ReduceExposure,
    RemainInvested,
    AllocateMore,
}

impl ReactionToLoss {
    pub fn from_normalized(s: &str) -> Option<Self> {
        match s {
            "exit investments to avoid further loss" => Some(Self::ExitInvestments),
            "reduce exposure and wait cautiously" => Some(Self::ReduceExposure),
            "remain invested with patience" => Some(Self::RemainInvested),
            "allocate more capital to benefit from lower valuations" => Some(Self::AllocateMore),
            _ => None,
        }
    }

    pub fn contribution(self) -> f64 {
        match self {
            Self::ExitInvestments => 1.0,
            Self::ReduceExposure => 2.0,
            Self::RemainInvested => 4.0,
            Self::AllocateMore => 5.0,
        }
    }
}

/// Largest portfolio decline the subject claims to tolerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaxDeclineTolerance {
    UpToFivePercent,
    UpToTenPercent,
    UpToTwentyPercent,
    ThirtyPercentOrMore,
}

impl MaxDeclineTolerance {
    pub fn from_normalized(s: &str) -> Option<Self> {
        match s {
            "up to 5%" => Some(Self::UpToFivePercent),
            "up to 10%" => Some(Self::UpToTenPercent),
            "up to 20%" => Some(Self::UpToTwentyPercent),
            "30% or more" => Some(Self::ThirtyPercentOrMore),
            _ => None,
        }
    }

    pub fn contribution(self) -> f64 {
        match self {
            Self::UpToFivePercent => 1.0,
            Self::UpToTenPercent => 2.0,
            Self::UpToTwentyPercent => 3.0,
            Self::ThirtyPercentOrMore => 5.0,
        }
    }
}

/// What money primarily represents to the subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoneyView {
    Security,
    AggressiveGrowth,
    Balance,
}

impl MoneyView {
    pub fn from_normalized(s: &str) -> Option<Self> {
        match s {
            "primarily as security and stability" => Some(Self::Security),
            "as a tool for aggressive growth and opportunity" => Some(Self::AggressiveGrowth),
            "as a balance between safety and appreciation" => Some(Self::Balance),
            _ => None,
        }
    }

    pub fn contribution(self) -> f64 {
        match self {
            Self::Security => 1.0,
            Self::AggressiveGrowth => 3.0,
            Self::Balance => 5.0,
        }
    }
}

/// The subject's main investment goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvestmentGoal {
    WealthCreation,
    RetirementPlanning,
    ChildEducation,
    TaxOptimization,
    LegacyPlanning,
}

impl InvestmentGoal {
    pub fn from_normalized(s: &str) -> Option<Self> {
        match s {
            "wealth creation and growth" => Some(Self::WealthCreation),
            "retirement planning" => Some(Self::RetirementPlanning),
            "child’s education and future planning" | "child's education and future planning" => {
                Some(Self::ChildEducation)
            }
            "tax optimization" => Some(Self::TaxOptimization),
            "legacy and succession planning" => Some(Self::LegacyPlanning),
            _ => None,
        }
    }

    pub fn contribution(self) -> f64 {
        match self {
            Self::WealthCreation => 1.0,
            Self::RetirementPlanning => 2.0,
            Self::ChildEducation => 3.0,
            Self::TaxOptimization => 4.0,
            Self::LegacyPlanning => 5.0,
        }
    }
}

/// Annual return the subject expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectedReturn {
    BelowSixPercent,
    SixToTenPercent,
    TenToFifteenPercent,
    AboveFifteenPercent,
}

impl ExpectedReturn {
    pub fn from_normalized(s: &str) -> Option<Self> {
        match s {
            "below 6% per annum" => Some(Self::BelowSixPercent),
            "6–10% per annum" => Some(Self::SixToTenPercent),
            "10–15% per annum" => Some(Self::TenToFifteenPercent),
            "above 15% per annum" => Some(Self::AboveFifteenPercent),
            _ => None,
        }
    }

    pub fn contribution(self) -> f64 {
        match self {
            Self::BelowSixPercent => 1.0,
            Self::SixToTenPercent => 2.0,
            Self::TenToFifteenPercent => 3.0,
            Self::AboveFifteenPercent => 5.0,
        }
    }
}

/// Major life events expected in the next few years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MajorEvents {
    PropertyPurchase,
    ChildEducation,
    Marriage,
    RetirementTransition,
    BusinessExpansion,
    NoneOfTheAbove,
}

impl MajorEvents {
    pub fn from_normalized(s: &str) -> Option<Self> {
        match s {
            "purchase of property" => Some(Self::PropertyPurchase),
            "child’s higher education" | "child's higher education" => Some(Self::ChildEducation),
            "marriage-related expenses" => Some(Self::Marriage),
            "retirement transition" => Some(Self::RetirementTransition),
            "business expansion" => Some(Self::BusinessExpansion),
            "none of the above" => Some(Self::NoneOfTheAbove),
            _ => None,
        }
    }

    pub fn contribution(self) -> f64 {
        match self {
            Self::PropertyPurchase => 1.0,
            Self::ChildEducation => 2.0,
            Self::Marriage => 3.0,
            Self::RetirementTransition => 3.0,
            Self::BusinessExpansion => 4.0,
            Self::NoneOfTheAbove => 5.0,
        }
    }
}
