//! Free-text fallback classifiers.
//!
//! Answers can arrive as raw text or numbers from alternate input surfaces
//! instead of the controlled vocabulary. These ordered keyword and pattern
//! rules classify whatever the vocabulary tables miss. First matching rule
//! wins; `None` means the answer stays unclassified and contributes zero.
//!
//! Range patterns accept both a plain hyphen and an en dash, since survey
//! front-ends emit either.

use once_cell::sync::Lazy;
use regex::Regex;

static RANGE_1_3: Lazy<Regex> = Lazy::new(|| Regex::new(r"1\s*[-–]\s*3").unwrap());
static RANGE_3_5: Lazy<Regex> = Lazy::new(|| Regex::new(r"3\s*[-–]\s*5").unwrap());
static RANGE_5_10: Lazy<Regex> = Lazy::new(|| Regex::new(r"5\s*[-–]\s*10").unwrap());
static RANGE_0_3: Lazy<Regex> = Lazy::new(|| Regex::new(r"0\s*[-–]\s*3").unwrap());
static RANGE_3_6: Lazy<Regex> = Lazy::new(|| Regex::new(r"3\s*[-–]\s*6").unwrap());
static RANGE_6_10: Lazy<Regex> = Lazy::new(|| Regex::new(r"6\s*[-–]\s*10").unwrap());
static RANGE_10_15: Lazy<Regex> = Lazy::new(|| Regex::new(r"10\s*[-–]\s*15").unwrap());
static UNDER_TEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"<\s*10|less.*10|below.*10").unwrap());
static FIRST_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

/// First integer appearing anywhere in the text.
fn leading_number(s: &str) -> Option<f64> {
    FIRST_NUMBER.find(s).and_then(|m| m.as_str().parse().ok())
}

fn contains_any(s: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| s.contains(n))
}

/// Age thresholds. Total over all numbers; younger scores higher.
pub(crate) fn age(age: f64) -> f64 {
    if age >= 50.0 {
        1.0
    } else if age >= 35.0 {
        2.0
    } else if age >= 26.0 {
        3.0
    } else if age >= 18.0 {
        4.0
    } else {
        5.0
    }
}

pub(crate) fn horizon(s: &str) -> Option<f64> {
    if contains_any(s, &["<1", "less than 1", "short"]) {
        return Some(1.0);
    }
    if (s.contains('1') && s.contains('3')) || RANGE_1_3.is_match(s) {
        return Some(2.0);
    }
    if (s.contains('3') && s.contains('5')) || RANGE_3_5.is_match(s) {
        return Some(3.0);
    }
    if (s.contains('5') && s.contains("10")) || RANGE_5_10.is_match(s) {
        return Some(4.0);
    }
    if s.contains("10") {
        return Some(5.0);
    }
    // Free text like "7 years": bucket the first number found.
    leading_number(s).map(|n| {
        if n <= 1.0 {
            1.0
        } else if n <= 3.0 {
            2.0
        } else if n <= 5.0 {
            3.0
        } else if n <= 10.0 {
            4.0
        } else {
            5.0
        }
    })
}

pub(crate) fn primary_income(s: &str) -> Option<f64> {
    if contains_any(s, &["fixed", "govt", "government", "corporate"]) {
        return Some(5.0);
    }
    if s.contains("business") {
        return Some(3.0);
    }
    if contains_any(s, &["self", "freelance", "professional"]) {
        return Some(4.0);
    }
    if contains_any(s, &["passive", "rental", "dividend"]) {
        return Some(3.5);
    }
    if s.contains("retired") {
        return Some(4.0);
    }
    if contains_any(s, &["other", "inheritance", "trust", "family office"]) {
        return Some(2.0);
    }
    None
}

pub(crate) fn income_stability(s: &str) -> Option<f64> {
    if s.contains("very") {
        return Some(5.0);
    }
    if s.contains("moderate") {
        return Some(3.0);
    }
    if contains_any(s, &["high", "variable", "uncertain"]) {
        return Some(1.5);
    }
    None
}

pub(crate) fn saving_percentage(s: &str) -> Option<f64> {
    // "<10" and friends outrank the plain "10" rule below.
    if contains_any(s, &["<", "less", "below"]) && UNDER_TEN.is_match(s) {
        return Some(1.0);
    }
    if contains_any(s, &["40", "50"]) {
        return Some(5.0);
    }
    if s.contains("25") {
        return Some(4.0);
    }
    if s.contains("10") {
        return Some(2.0);
    }
    leading_number(s).map(|n| {
        if n < 10.0 {
            1.0
        } else if n < 25.0 {
            2.0
        } else if n < 40.0 {
            4.0
        } else {
            5.0
        }
    })
}

pub(crate) fn dependents(s: &str) -> Option<f64> {
    if contains_any(s, &["5", "more"]) {
        return Some(1.0);
    }
    if s.contains('3') {
        return Some(2.0);
    }
    if s.contains('1') {
        return Some(3.0);
    }
    if s.contains("none") || s == "0" {
        return Some(5.0);
    }
    None
}

pub(crate) fn cash_reserves(s: &str) -> Option<f64> {
    if contains_any(s, &["no", "none"]) {
        return Some(1.0);
    }
    if (s.contains('0') && s.contains('3')) || RANGE_0_3.is_match(s) || s.contains("up to 3") {
        return Some(2.0);
    }
    if (s.contains('3') && s.contains('6')) || RANGE_3_6.is_match(s) {
        return Some(3.0);
    }
    if s.contains('6') {
        return Some(5.0);
    }
    None
}

pub(crate) fn experience(s: &str) -> Option<f64> {
    if s.contains("beginner") {
        return Some(1.0);
    }
    if contains_any(s, &["moderate", "intermediate"]) {
        return Some(3.0);
    }
    if contains_any(s, &["experienced", "advanced"]) {
        return Some(5.0);
    }
    None
}

pub(crate) fn reaction_to_loss(s: &str) -> Option<f64> {
    if contains_any(s, &["exit", "withdraw"]) {
        return Some(1.0);
    }
    if contains_any(s, &["reduce", "wait"]) {
        return Some(2.0);
    }
    if contains_any(s, &["remain", "hold"]) {
        return Some(4.0);
    }
    if contains_any(s, &["allocate", "buy more", "invest more"]) {
        return Some(5.0);
    }
    None
}

pub(crate) fn max_decline_tolerance(s: &str) -> Option<f64> {
    if contains_any(s, &["5%", "up to 5"]) {
        return Some(1.0);
    }
    if contains_any(s, &["10%", "up to 10"]) {
        return Some(2.0);
    }
    if contains_any(s, &["20%", "up to 20"]) {
        return Some(3.0);
    }
    if contains_any(s, &["30", "more"]) {
        return Some(5.0);
    }
    None
}

pub(crate) fn money_view(s: &str) -> Option<f64> {
    if s.contains("security") {
        return Some(1.0);
    }
    if contains_any(s, &["aggressive", "opportunity"]) {
        return Some(3.0);
    }
    if s.contains("balanced") {
        return Some(5.0);
    }
    None
}

pub(crate) fn investment_goal(s: &str) -> Option<f64> {
    if s.contains("wealth") && s.contains("creation") {
        return Some(1.0);
    }
    if s.contains("retirement") {
        return Some(2.0);
    }
    if s.contains("child") {
        return Some(3.0);
    }
    if s.contains("tax") {
        return Some(4.0);
    }
    if contains_any(s, &["legacy", "succession"]) {
        return Some(5.0);
    }
    None
}

pub(crate) fn expected_return(s: &str) -> Option<f64> {
    if contains_any(s, &["below", "<6", "< 6"]) {
        return Some(1.0);
    }
    if (s.contains('6') && s.contains("10")) || RANGE_6_10.is_match(s) {
        return Some(2.0);
    }
    if (s.contains("10") && s.contains("15")) || RANGE_10_15.is_match(s) {
        return Some(3.0);
    }
    if s.contains("15") {
        return Some(5.0);
    }
    leading_number(s).map(|n| {
        if n < 6.0 {
            1.0
        } else if n < 10.0 {
            2.0
        } else if n < 15.0 {
            3.0
        } else {
            5.0
        }
    })
}

pub(crate) fn major_events(s: &str) -> Option<f64> {
    if contains_any(s, &["purchase", "property", "house"]) {
        return Some(1.0);
    }
    if contains_any(s, &["child", "education"]) {
        return Some(2.0);
    }
    if s.contains("marriage") {
        return Some(3.0);
    }
    if s.contains("retire") {
        return Some(3.0);
    }
    if s.contains("business") {
        return Some(4.0);
    }
    if contains_any(s, &["none", "no"]) {
        return Some(5.0);
    }
    None
}
