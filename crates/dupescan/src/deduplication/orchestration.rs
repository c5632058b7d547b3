//! Duplicate pair enumeration
//!
//! Normalizes every contact once, compares every unordered pair by index
//! and materializes the pairs that clear the duplicate threshold. Each run
//! keeps its own set of emitted pair keys, so a given pair of contact ids
//! is reported at most once even when the input repeats records.
//!
//! # Parallel Processing
//!
//! With the `parallel` feature, pair scoring is spread across the outer
//! index range with rayon. Pair-key deduplication then runs as a sequential
//! merge in `(i, j)` order so the output matches the sequential path.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::normalization::NormalizedFields;
use super::scoring::{score_normalized, MatchResult};
use crate::config::DetectionConfig;
use crate::contact::{Contact, ContactId, ContactSummary};

/// A pair of contacts that likely describe the same person
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicatePair {
    pub contact_a: ContactSummary,
    pub contact_b: ContactSummary,
    pub confidence_score: u32,
    pub match_reasons: Vec<String>,
    pub detected_at: DateTime<Utc>,
}

impl DuplicatePair {
    fn new(a: &Contact, b: &Contact, result: MatchResult, detected_at: DateTime<Utc>) -> Self {
        Self {
            contact_a: a.summary(),
            contact_b: b.summary(),
            confidence_score: result.score,
            match_reasons: result.reasons,
            detected_at,
        }
    }

    /// Sorted pair of contact ids
    pub fn pair_key(&self) -> (&ContactId, &ContactId) {
        canonical_pair(&self.contact_a.id, &self.contact_b.id)
    }

    /// Equal apart from the detection timestamp
    pub fn same_match(&self, other: &DuplicatePair) -> bool {
        self.contact_a == other.contact_a
            && self.contact_b == other.contact_b
            && self.confidence_score == other.confidence_score
            && self.match_reasons == other.match_reasons
    }
}

/// Order-independent key for a pair of ids
pub(crate) fn canonical_pair<'a>(
    a: &'a ContactId,
    b: &'a ContactId,
) -> (&'a ContactId, &'a ContactId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Find duplicate pairs with the default rules
pub fn find_duplicates(contacts: &[Contact]) -> Vec<DuplicatePair> {
    find_duplicates_with_config(contacts, &DetectionConfig::default())
}

/// Find duplicate pairs with custom rules
pub fn find_duplicates_with_config(
    contacts: &[Contact],
    config: &DetectionConfig,
) -> Vec<DuplicatePair> {
    find_duplicates_at(contacts, config, Utc::now())
}

/// Find duplicate pairs, stamping every pair with `detected_at`
pub fn find_duplicates_at(
    contacts: &[Contact],
    config: &DetectionConfig,
    detected_at: DateTime<Utc>,
) -> Vec<DuplicatePair> {
    if contacts.len() < 2 {
        return Vec::new();
    }

    let normalized: Vec<NormalizedFields> =
        contacts.iter().map(NormalizedFields::from_contact).collect();

    #[cfg(feature = "parallel")]
    let found = collect_parallel(contacts, &normalized, config);
    #[cfg(not(feature = "parallel"))]
    let found = collect_sequential(contacts, &normalized, config);

    let duplicates: Vec<DuplicatePair> = found
        .into_iter()
        .map(|(i, j, result)| DuplicatePair::new(&contacts[i], &contacts[j], result, detected_at))
        .collect();

    let n = contacts.len();
    tracing::debug!(
        "Compared {} pairs across {} contacts, found {} duplicates",
        n * (n - 1) / 2,
        n,
        duplicates.len()
    );

    duplicates
}

#[cfg_attr(feature = "parallel", allow(dead_code))]
fn collect_sequential(
    contacts: &[Contact],
    normalized: &[NormalizedFields],
    config: &DetectionConfig,
) -> Vec<(usize, usize, MatchResult)> {
    let mut emitted: HashSet<(&ContactId, &ContactId)> = HashSet::new();
    let mut found = Vec::new();

    for i in 0..contacts.len() {
        for j in (i + 1)..contacts.len() {
            let (a, b) = (&contacts[i], &contacts[j]);
            if a.id == b.id {
                continue;
            }

            let key = canonical_pair(&a.id, &b.id);
            if emitted.contains(&key) {
                continue;
            }

            let result = score_normalized(&normalized[i], &normalized[j], config);
            if result.is_duplicate {
                emitted.insert(key);
                found.push((i, j, result));
            }
        }
    }

    found
}

#[cfg(feature = "parallel")]
fn collect_parallel(
    contacts: &[Contact],
    normalized: &[NormalizedFields],
    config: &DetectionConfig,
) -> Vec<(usize, usize, MatchResult)> {
    let n = contacts.len();

    let scored: Vec<(usize, usize, MatchResult)> = (0..n)
        .into_par_iter()
        .flat_map_iter(move |i| {
            ((i + 1)..n).filter_map(move |j| {
                if contacts[i].id == contacts[j].id {
                    return None;
                }
                let result = score_normalized(&normalized[i], &normalized[j], config);
                result.is_duplicate.then_some((i, j, result))
            })
        })
        .collect();

    // First occurrence of each pair key wins
    let mut emitted: HashSet<(&ContactId, &ContactId)> = HashSet::new();
    scored
        .into_iter()
        .filter(|(i, j, _)| emitted.insert(canonical_pair(&contacts[*i].id, &contacts[*j].id)))
        .collect()
}
