//! dupescan: duplicate contact detection for CRM record exports
//!
//! This library provides:
//! - Field normalization and fuzzy string similarity for contacts
//! - Pairwise duplicate scoring with human-readable match reasons
//! - Duplicate pair enumeration over an in-memory contact list
//! - Contact loading from flat JSON arrays and CRM list pages
//! - Scan reports, CRM health scores and merge planning
//!
//! Detection is pure and synchronous: it performs no I/O and keeps no
//! state between calls.

pub mod config;
pub mod contact;
pub mod deduplication;
pub mod error;
pub mod health;
pub mod merge;
pub mod report;
pub mod source;

// Re-export main types for convenience
pub use config::{
    ConfigError, DetectionConfig, DupescanConfig, ScanConfig, SignalWeights, DEFAULT_PAGE_SIZE,
    DUPLICATE_THRESHOLD,
};
pub use contact::{Contact, ContactId, ContactSummary};
pub use deduplication::{
    find_duplicates, find_duplicates_at, find_duplicates_with_config, score, score_with_config,
    similarity, DuplicatePair, MatchResult,
};
pub use error::{DupescanError, Result};
pub use health::{calculate_health_score, HealthMetrics, HealthScore, HealthStatus};
pub use merge::{plan_merges, MergePlan, MergeReport, MergeSummary};
pub use report::{ScanReport, ScanStats};
pub use source::{load_contacts, parse_contacts};

/// Returns the version of dupescan
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
