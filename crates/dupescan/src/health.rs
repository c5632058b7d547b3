//! CRM health score
//!
//! Turns scan statistics into a 0-100 data quality score. Active duplicates
//! are penalized heavily (up to 40 points); missing emails and phones cost a
//! few points each below their target coverage.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::report::ScanStats;

/// Maximum points lost to duplicates
const MAX_DUPLICATE_PENALTY: f64 = 40.0;
/// Points lost per percent of active duplicates
const DUPLICATE_PENALTY_FACTOR: f64 = 5.0;
/// Email coverage (percent) below which a penalty applies
const EMAIL_TARGET_RATE: f64 = 70.0;
/// Phone coverage (percent) below which a penalty applies
const PHONE_TARGET_RATE: f64 = 50.0;

/// Health classification of a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Excellent,
    Good,
    Fair,
    Poor,
    Critical,
}

impl HealthStatus {
    pub fn from_score(score: u8) -> Self {
        match score {
            90..=u8::MAX => HealthStatus::Excellent,
            75..=89 => HealthStatus::Good,
            60..=74 => HealthStatus::Fair,
            40..=59 => HealthStatus::Poor,
            _ => HealthStatus::Critical,
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            HealthStatus::Excellent => "excellent",
            HealthStatus::Good => "good",
            HealthStatus::Fair => "fair",
            HealthStatus::Poor => "poor",
            HealthStatus::Critical => "critical",
        };
        f.write_str(label)
    }
}

/// Rates (percent of all contacts) behind a health score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthMetrics {
    pub duplicate_rate: f64,
    pub email_rate: f64,
    pub phone_rate: f64,
}

/// Data quality score for a contact base
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthScore {
    pub score: u8,
    pub status: HealthStatus,
    /// Absent when there are no contacts to measure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<HealthMetrics>,
}

/// Compute the health score for a scan
pub fn calculate_health_score(stats: &ScanStats) -> HealthScore {
    if stats.total_contacts == 0 {
        return HealthScore {
            score: 100,
            status: HealthStatus::Excellent,
            metrics: None,
        };
    }

    let total = stats.total_contacts as f64;
    let active_duplicates = stats.duplicates_found as f64 - stats.duplicates_merged as f64;
    let metrics = HealthMetrics {
        duplicate_rate: active_duplicates / total * 100.0,
        email_rate: stats.contacts_with_email as f64 / total * 100.0,
        phone_rate: stats.contacts_with_phone as f64 / total * 100.0,
    };

    let mut score: f64 = 100.0;

    if metrics.duplicate_rate > 0.0 {
        score -= (metrics.duplicate_rate * DUPLICATE_PENALTY_FACTOR).min(MAX_DUPLICATE_PENALTY);
    }
    if metrics.email_rate < EMAIL_TARGET_RATE {
        score -= (EMAIL_TARGET_RATE - metrics.email_rate) / 2.0;
    }
    if metrics.phone_rate < PHONE_TARGET_RATE {
        score -= (PHONE_TARGET_RATE - metrics.phone_rate) / 3.0;
    }

    let score = score.round().clamp(0.0, 100.0) as u8;

    HealthScore {
        score,
        status: HealthStatus::from_score(score),
        metrics: Some(metrics),
    }
}
