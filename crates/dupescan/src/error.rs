//! Error types for dupescan
//!
//! The detection engine itself is total and never fails. These errors
//! belong to the layers around it: loading contacts, reading config files
//! and looking records up by id.

use thiserror::Error;

use crate::config::ConfigError;

/// Result type alias for dupescan operations
pub type Result<T> = std::result::Result<T, DupescanError>;

/// Main error type for dupescan operations
#[derive(Error, Debug)]
pub enum DupescanError {
    /// Input could not be parsed as contacts, stats or pairs
    #[error("Parse error: {0}")]
    Parse(String),

    /// Reading an input or config file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is malformed or out of range
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// A contact id was not present in the input
    #[error("Contact not found: {0}")]
    NotFound(String),
}

impl From<serde_json::Error> for DupescanError {
    fn from(err: serde_json::Error) -> Self {
        DupescanError::Parse(err.to_string())
    }
}

impl From<toml::de::Error> for DupescanError {
    fn from(err: toml::de::Error) -> Self {
        DupescanError::Config(ConfigError::Malformed(err.to_string()))
    }
}
