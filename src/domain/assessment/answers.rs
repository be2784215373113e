//! Answer bundle model for questionnaire submissions.
//!
//! Answers arrive loosely typed: a field may carry a number, a free-form
//! string, a controlled-vocabulary string, or an array of selections when a
//! question allows multiple choices. The bundle preserves the raw shape;
//! normalization happens at scoring time.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::question::QuestionField;

/// A single questionnaire answer as it arrives off the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Number(f64),
    Text(String),
    Selection(Vec<String>),
}

impl AnswerValue {
    /// The answer as a lowercase, trimmed string for keyword matching.
    ///
    /// Multi-selects contribute only their first entry. Returns `None` for
    /// an empty selection list.
    pub fn normalized(&self) -> Option<String> {
        match self {
            AnswerValue::Number(n) => Some(format_number(*n)),
            AnswerValue::Text(s) => Some(s.trim().to_lowercase()),
            AnswerValue::Selection(items) => {
                items.first().map(|s| s.trim().to_lowercase())
            }
        }
    }

    /// The answer as a number, if it parses as one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AnswerValue::Number(n) => Some(*n),
            AnswerValue::Text(s) => s.trim().parse().ok(),
            AnswerValue::Selection(items) => {
                items.first().and_then(|s| s.trim().parse().ok())
            }
        }
    }
}

impl From<&str> for AnswerValue {
    fn from(s: &str) -> Self {
        AnswerValue::Text(s.to_string())
    }
}

impl From<f64> for AnswerValue {
    fn from(n: f64) -> Self {
        AnswerValue::Number(n)
    }
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// The full set of questionnaire responses for one subject.
///
/// Keyed by wire field name; unknown extra fields are carried but ignored
/// by the scoring engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerBundle(BTreeMap<String, AnswerValue>);

impl AnswerBundle {
    /// Creates an empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an answer under a raw field name.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<AnswerValue>) {
        self.0.insert(field.into(), value.into());
    }

    /// Builder-style insert, convenient in tests.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<AnswerValue>) -> Self {
        self.insert(field, value);
        self
    }

    /// The raw answer for a known field.
    pub fn get(&self, field: QuestionField) -> Option<&AnswerValue> {
        self.0.get(field.as_str())
    }

    /// The normalized string form of a field's answer.
    pub fn normalized(&self, field: QuestionField) -> Option<String> {
        self.get(field).and_then(AnswerValue::normalized)
    }

    /// The numeric form of a field's answer.
    pub fn number(&self, field: QuestionField) -> Option<f64> {
        self.get(field).and_then(AnswerValue::as_number)
    }

    /// True when the bundle has no answers at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of answers in the bundle, including unscored extras.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_answers_normalize_to_lowercase_trimmed() {
        let value = AnswerValue::Text("  Very Stable and Predictable ".to_string());
        assert_eq!(
            value.normalized().unwrap(),
            "very stable and predictable"
        );
    }

    #[test]
    fn numeric_answers_normalize_without_trailing_zeroes() {
        assert_eq!(AnswerValue::Number(45.0).normalized().unwrap(), "45");
        assert_eq!(AnswerValue::Number(12.5).normalized().unwrap(), "12.5");
    }

    #[test]
    fn selections_use_only_the_first_entry() {
        let value = AnswerValue::Selection(vec![
            "Business expansion".to_string(),
            "Retirement transition".to_string(),
        ]);
        assert_eq!(value.normalized().unwrap(), "business expansion");
    }

    #[test]
    fn empty_selection_normalizes_to_none() {
        assert_eq!(AnswerValue::Selection(vec![]).normalized(), None);
    }

    #[test]
    fn numeric_strings_parse_as_numbers() {
        assert_eq!(AnswerValue::Text(" 45 ".to_string()).as_number(), Some(45.0));
        assert_eq!(AnswerValue::Text("45 years".to_string()).as_number(), None);
    }

    #[test]
    fn bundle_lookups_use_wire_names() {
        let bundle = AnswerBundle::new().with("investmentHorizon", "7 years");
        assert_eq!(
            bundle.normalized(QuestionField::InvestmentHorizon).unwrap(),
            "7 years"
        );
        assert_eq!(bundle.normalized(QuestionField::Age), None);
    }

    #[test]
    fn bundle_deserializes_mixed_value_shapes() {
        let json = r#"{
            "age": 45,
            "investmentHorizon": "10+ years (generational wealth)",
            "majorEvents": ["Business expansion", "Retirement transition"]
        }"#;
        let bundle: AnswerBundle = serde_json::from_str(json).unwrap();

        assert_eq!(bundle.number(QuestionField::Age), Some(45.0));
        assert_eq!(
            bundle.normalized(QuestionField::MajorEvents).unwrap(),
            "business expansion"
        );
        assert_eq!(bundle.len(), 3);
    }
}
