//! Configuration for dupescan
//!
//! Centralized configuration for the signal weights, similarity thresholds
//! and the duplicate cut-off used by the detection engine, plus the
//! presentation settings of a scan report.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum confidence score for a pair to be flagged as a duplicate.
pub const DUPLICATE_THRESHOLD: u32 = 70;

/// Default number of pairs kept in a scan report.
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DupescanConfig {
    /// Scoring rules for the detection engine
    pub detection: DetectionConfig,
    /// Scan report settings
    pub scan: ScanConfig,
}

/// Scoring rules for pairwise comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Score at or above which a pair is a duplicate
    pub duplicate_threshold: u32,
    /// Weight contributed by each signal
    pub weights: SignalWeights,
    /// Minimum full-name similarity for the name signal
    pub name_similarity_threshold: f64,
    /// Minimum company similarity for the company signal
    pub company_similarity_threshold: f64,
    /// Minimum digits in a normalized phone for the phone signal
    pub min_phone_digits: usize,
    /// Minimum characters in a normalized company for the company signal
    pub min_company_chars: usize,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            duplicate_threshold: DUPLICATE_THRESHOLD,
            weights: SignalWeights::default(),
            name_similarity_threshold: 0.85,
            company_similarity_threshold: 0.75,
            min_phone_digits: 8,
            min_company_chars: 3,
        }
    }
}

/// Additive weight of each match signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalWeights {
    pub email: u32,
    pub phone: u32,
    pub name: u32,
    pub company: u32,
}

impl Default for SignalWeights {
    fn default() -> Self {
        Self {
            email: 40,
            phone: 30,
            name: 20,
            company: 10,
        }
    }
}

impl SignalWeights {
    /// Highest score a pair can reach with these weights, or `None` when
    /// the sum does not fit in a `u32`
    pub fn total(&self) -> Option<u32> {
        self.email
            .checked_add(self.phone)?
            .checked_add(self.name)?
            .checked_add(self.company)
    }
}

/// Scan report settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Maximum number of pairs returned in a report
    pub page_size: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl DupescanConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Read and validate a config file. `.json` files are parsed as JSON,
    /// anything else as TOML.
    pub fn load(path: impl AsRef<Path>) -> crate::Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json(&contents)?,
            _ => Self::from_toml(&contents)?,
        };
        config.validate()?;
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.detection.validate()?;

        if self.scan.page_size == 0 {
            return Err(ConfigError::OutOfRange(
                "page_size must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

impl DetectionConfig {
    /// Validate scoring values
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("name_similarity_threshold", self.name_similarity_threshold),
            (
                "company_similarity_threshold",
                self.company_similarity_threshold,
            ),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::OutOfRange(format!(
                    "{} must be between 0.0 and 1.0",
                    name
                )));
            }
        }

        if self.duplicate_threshold == 0 {
            return Err(ConfigError::InvalidThreshold(
                "duplicate_threshold must be positive".to_string(),
            ));
        }

        let total = self.weights.total().ok_or_else(|| {
            ConfigError::OutOfRange(format!("signal weights must sum to at most {}", u32::MAX))
        })?;

        // Unreachable cut-off would silently disable detection
        if self.duplicate_threshold > total {
            return Err(ConfigError::InvalidThreshold(format!(
                "duplicate_threshold {} exceeds the maximum reachable score {}",
                self.duplicate_threshold, total
            )));
        }

        Ok(())
    }
}

/// Configuration validation error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Threshold cannot produce meaningful results
    #[error("Invalid threshold: {0}")]
    InvalidThreshold(String),
    /// Value is out of valid range
    #[error("Value out of range: {0}")]
    OutOfRange(String),
    /// File contents could not be parsed
    #[error("Malformed config: {0}")]
    Malformed(String),
}
