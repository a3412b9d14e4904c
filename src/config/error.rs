//! Configuration error types.

use crate::builder::RuleError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or saving rule-set configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serialization to JSON failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Configuration version is not supported by this version
    #[error("Unsupported config version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Configuration parsed but describes an unusable rule set
    #[error("Invalid rule set: {0}")]
    InvalidRules(#[from] RuleError),
}
