//! Merge planning for detected duplicates
//!
//! Detection takes no position on which record survives a merge. This
//! module holds the policy used by the merge layer: the contact with the
//! lower id (usually the older record) is kept as primary. It performs no
//! CRM calls; callers execute each plan and record the outcome in a
//! [`MergeReport`].

use std::cmp::Ordering;
use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::contact::ContactId;
use crate::deduplication::DuplicatePair;

/// Which contact survives and which is merged into it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergePlan {
    pub primary_id: ContactId,
    pub secondary_id: ContactId,
}

impl MergePlan {
    pub fn from_ids(a: &ContactId, b: &ContactId) -> Self {
        let (primary, secondary) = match compare_ids(a, b) {
            Ordering::Greater => (b, a),
            _ => (a, b),
        };

        Self {
            primary_id: primary.clone(),
            secondary_id: secondary.clone(),
        }
    }

    pub fn from_pair(pair: &DuplicatePair) -> Self {
        Self::from_ids(&pair.contact_a.id, &pair.contact_b.id)
    }
}

/// Numeric ids compare numerically, anything else as text
fn compare_ids(a: &ContactId, b: &ContactId) -> Ordering {
    match (a.as_str().parse::<u64>(), b.as_str().parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        _ => a.cmp(b),
    }
}

/// Plan merges for a list of pairs.
///
/// A contact that has already been merged away by an earlier plan no
/// longer exists in the CRM, so later plans touching it are dropped.
pub fn plan_merges(pairs: &[DuplicatePair]) -> Vec<MergePlan> {
    let mut retired: HashSet<ContactId> = HashSet::new();
    let mut plans = Vec::new();

    for pair in pairs {
        let plan = MergePlan::from_pair(pair);
        if retired.contains(&plan.primary_id) || retired.contains(&plan.secondary_id) {
            tracing::debug!(
                "Skipping merge of {} into {}: contact already merged",
                plan.secondary_id,
                plan.primary_id
            );
            continue;
        }
        retired.insert(plan.secondary_id.clone());
        plans.push(plan);
    }

    plans
}

/// A merge the CRM accepted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeSuccess {
    pub primary_id: ContactId,
    pub secondary_id: ContactId,
    pub merged_at: DateTime<Utc>,
}

/// A merge the CRM rejected
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeFailure {
    pub plan: MergePlan,
    pub error: String,
}

/// Totals for a batch of merges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeSummary {
    pub total: usize,
    pub merged: usize,
    pub failed: usize,
}

/// Outcome of executing a batch of merge plans
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeReport {
    pub success: Vec<MergeSuccess>,
    pub failed: Vec<MergeFailure>,
}

impl MergeReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_success(&mut self, plan: MergePlan, merged_at: DateTime<Utc>) {
        tracing::info!(
            "Merged {} into {}",
            plan.secondary_id,
            plan.primary_id
        );
        self.success.push(MergeSuccess {
            primary_id: plan.primary_id,
            secondary_id: plan.secondary_id,
            merged_at,
        });
    }

    pub fn record_failure(&mut self, plan: MergePlan, error: impl Into<String>) {
        let error = error.into();
        tracing::warn!(
            "Merge of {} into {} failed: {}",
            plan.secondary_id,
            plan.primary_id,
            error
        );
        self.failed.push(MergeFailure { plan, error });
    }

    pub fn summary(&self) -> MergeSummary {
        MergeSummary {
            total: self.success.len() + self.failed.len(),
            merged: self.success.len(),
            failed: self.failed.len(),
        }
    }
}
