//! Risk profile labels and the scored assessment result.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::question::QuestionField;

/// Ordinal risk tolerance label derived from the aggregate score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskProfile {
    Conservative,
    Balanced,
    Growth,
    Aggressive,
}

impl RiskProfile {
    /// Buckets a rounded total score into a profile.
    ///
    /// Degenerate totals below the first threshold (all-unmatched bundles
    /// score 0) fall back to Conservative rather than erroring.
    pub fn from_score(score: u32) -> Self {
        match score {
            0..=25 => RiskProfile::Conservative,
            26..=40 => RiskProfile::Balanced,
            41..=55 => RiskProfile::Growth,
            _ => RiskProfile::Aggressive,
        }
    }

    /// The display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskProfile::Conservative => "Conservative",
            RiskProfile::Balanced => "Balanced",
            RiskProfile::Growth => "Growth",
            RiskProfile::Aggressive => "Aggressive",
        }
    }
}

impl Default for RiskProfile {
    fn default() -> Self {
        RiskProfile::Conservative
    }
}

impl fmt::Display for RiskProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of scoring one answer bundle.
///
/// `unrecognized` lists fields that were present but matched neither the
/// controlled vocabulary nor any fallback rule. They contributed zero; the
/// list is a diagnostic for callers wanting stricter data-quality checks,
/// not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub score: u32,
    pub profile: RiskProfile,
    pub unrecognized: Vec<QuestionField>,
}

impl RiskAssessment {
    /// True when every present field matched a rule.
    pub fn is_fully_recognized(&self) -> bool {
        self.unrecognized.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_boundaries_are_exact() {
        assert_eq!(RiskProfile::from_score(0), RiskProfile::Conservative);
        assert_eq!(RiskProfile::from_score(14), RiskProfile::Conservative);
        assert_eq!(RiskProfile::from_score(15), RiskProfile::Conservative);
        assert_eq!(RiskProfile::from_score(25), RiskProfile::Conservative);
        assert_eq!(RiskProfile::from_score(26), RiskProfile::Balanced);
        assert_eq!(RiskProfile::from_score(40), RiskProfile::Balanced);
        assert_eq!(RiskProfile::from_score(41), RiskProfile::Growth);
        assert_eq!(RiskProfile::from_score(55), RiskProfile::Growth);
        assert_eq!(RiskProfile::from_score(56), RiskProfile::Aggressive);
        assert_eq!(RiskProfile::from_score(70), RiskProfile::Aggressive);
    }

    #[test]
    fn profile_displays_its_label() {
        assert_eq!(RiskProfile::Growth.to_string(), "Growth");
    }

    #[test]
    fn profile_serializes_as_label() {
        let json = serde_json::to_string(&RiskProfile::Aggressive).unwrap();
        assert_eq!(json, "\"Aggressive\"");
    }
}
