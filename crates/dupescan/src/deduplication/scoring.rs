//! Pairwise duplicate scoring
//!
//! Four independent signals are evaluated in a fixed order (email, phone,
//! name, company). Each one is gated on both sides having the field; a
//! missing field contributes nothing and is never treated as a match.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::normalization::NormalizedFields;
use super::similarity::{similarity, similarity_percent};
use crate::config::DetectionConfig;
use crate::contact::Contact;

/// Verdict for one pair of contacts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    /// Sum of the weights of every signal that fired
    pub score: u32,
    /// One human-readable entry per contributing signal, in evaluation order
    pub reasons: Vec<String>,
    /// Whether `score` reaches the duplicate threshold
    pub is_duplicate: bool,
}

/// A signal that contributed to a match
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchSignal {
    EmailExact,
    PhoneExact,
    NameFuzzy(f64),
    CompanyFuzzy(f64),
}

impl fmt::Display for MatchSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchSignal::EmailExact => write!(f, "Email exact match"),
            MatchSignal::PhoneExact => write!(f, "Phone exact match"),
            MatchSignal::NameFuzzy(sim) => write!(f, "Name match ({}%)", similarity_percent(*sim)),
            MatchSignal::CompanyFuzzy(sim) => {
                write!(f, "Company match ({}%)", similarity_percent(*sim))
            }
        }
    }
}

/// Score two contacts with the default rules
pub fn score(a: &Contact, b: &Contact) -> MatchResult {
    score_with_config(a, b, &DetectionConfig::default())
}

/// Score two contacts with custom rules
pub fn score_with_config(a: &Contact, b: &Contact, config: &DetectionConfig) -> MatchResult {
    score_normalized(
        &NormalizedFields::from_contact(a),
        &NormalizedFields::from_contact(b),
        config,
    )
}

pub(crate) fn score_normalized(
    a: &NormalizedFields,
    b: &NormalizedFields,
    config: &DetectionConfig,
) -> MatchResult {
    let mut score: u32 = 0;
    let mut signals = Vec::new();

    if !a.email.is_empty() && a.email == b.email {
        score = score.saturating_add(config.weights.email);
        signals.push(MatchSignal::EmailExact);
    }

    // Phones shorter than the minimum are too ambiguous to count
    if !a.phone.is_empty() && a.phone == b.phone && a.phone.len() >= config.min_phone_digits {
        score = score.saturating_add(config.weights.phone);
        signals.push(MatchSignal::PhoneExact);
    }

    if !a.name.is_empty() && !b.name.is_empty() {
        let name_similarity = similarity(&a.name, &b.name);
        if name_similarity >= config.name_similarity_threshold {
            score = score.saturating_add(config.weights.name);
            signals.push(MatchSignal::NameFuzzy(name_similarity));
        }
    }

    if long_enough(&a.company, config.min_company_chars)
        && long_enough(&b.company, config.min_company_chars)
    {
        let company_similarity = similarity(&a.company, &b.company);
        if company_similarity >= config.company_similarity_threshold {
            score = score.saturating_add(config.weights.company);
            signals.push(MatchSignal::CompanyFuzzy(company_similarity));
        }
    }

    MatchResult {
        score,
        reasons: signals.iter().map(ToString::to_string).collect(),
        is_duplicate: score >= config.duplicate_threshold,
    }
}

fn long_enough(value: &str, min_chars: usize) -> bool {
    !value.is_empty() && value.chars().count() >= min_chars
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane(id: &str) -> Contact {
        Contact::new(id)
            .with_email("jane@acme.com")
            .with_name("Jane", "Doe")
            .with_phone("555-123-4567")
            .with_company("Acme Inc")
    }

    #[test]
    fn test_all_signals() {
        let mut b = jane("2");
        b.email = Some("JANE@ACME.COM".to_string());
        b.phone = Some("(555) 123-4567".to_string());
        b.company = Some("ACME INC.".to_string());

        let result = score(&jane("1"), &b);
        assert_eq!(result.score, 100);
        assert!(result.is_duplicate);
        assert_eq!(
            result.reasons,
            vec![
                "Email exact match",
                "Phone exact match",
                "Name match (100%)",
                "Company match (100%)",
            ]
        );
    }

    #[test]
    fn test_short_phone_does_not_count() {
        let a = jane("1").with_phone("555-1234");
        let b = jane("2").with_phone("(555) 1234");

        let result = score(&a, &b);
        assert_eq!(result.score, 70);
        assert!(result.is_duplicate);
        assert!(!result.reasons.iter().any(|r| r.contains("Phone")));
    }

    #[test]
    fn test_empty_contacts_score_zero() {
        let result = score(&Contact::new("1"), &Contact::new("2"));
        assert_eq!(result.score, 0);
        assert!(result.reasons.is_empty());
        assert!(!result.is_duplicate);
    }

    #[test]
    fn test_empty_contact_against_full_contact() {
        let result = score(&Contact::new("1"), &jane("2"));
        assert_eq!(result, score(&jane("2"), &Contact::new("1")));
        assert_eq!(result.score, 0);
        assert!(result.reasons.is_empty());
    }

    #[test]
    fn test_blank_strings_are_missing() {
        let a = Contact::new("1")
            .with_email("  ")
            .with_name(" ", "")
            .with_phone("--")
            .with_company("..");
        let result = score(&a, &a.clone());
        assert_eq!(result.score, 0);
        assert!(result.reasons.is_empty());
    }

    #[test]
    fn test_short_company_is_ignored() {
        let a = Contact::new("1").with_company("AB");
        let b = Contact::new("2").with_company("ab");
        assert_eq!(score(&a, &b).score, 0);

        let a = Contact::new("1").with_company("ABC");
        let b = Contact::new("2").with_company("abc");
        assert_eq!(score(&a, &b).reasons, vec!["Company match (100%)"]);
    }

    #[test]
    fn test_fuzzy_name_reason_percentage() {
        let a = Contact::new("1").with_name("Jane", "Smith");
        let b = Contact::new("2").with_name("Jane", "Smyth");
        let result = score(&a, &b);
        assert_eq!(result.score, 20);
        assert_eq!(result.reasons, vec!["Name match (90%)"]);
    }

    #[test]
    fn test_custom_weights_are_not_clamped() {
        let mut config = DetectionConfig::default();
        config.weights.email = 90;
        let result = score_with_config(&jane("1"), &jane("2"), &config);
        assert_eq!(result.score, 150);
    }

    #[test]
    fn test_huge_weights_saturate() {
        let mut config = DetectionConfig::default();
        config.weights.email = u32::MAX;
        let a = Contact::new("1")
            .with_email("jane@acme.com")
            .with_phone("555-123-4567");

        let result = score_with_config(&a, &a.clone(), &config);
        assert_eq!(result.score, u32::MAX);
        assert!(result.is_duplicate);
        assert_eq!(result.reasons, vec!["Email exact match", "Phone exact match"]);
    }

    #[test]
    fn test_signal_display() {
        assert_eq!(MatchSignal::EmailExact.to_string(), "Email exact match");
        assert_eq!(MatchSignal::CompanyFuzzy(0.8).to_string(), "Company match (80%)");
    }
}
