//! Error types for laggard operations.
//!
//! This module defines [`LaggardError`], the error type used when building
//! detector tables or writing command output, and a [`Result`] type alias.
//!
//! # Error Handling Strategy
//!
//! - Classification and lookups never fail: they return `bool` or `Option`
//! - Only table construction from caller-supplied sources can fail
//! - The binary wraps these in `anyhow::Error` with context (see [`crate::cli::run`])

use thiserror::Error;

/// Core error type for laggard operations.
#[derive(Debug, Error)]
pub enum LaggardError {
    /// A laggard pattern failed to compile.
    #[error("Invalid pattern for laggard '{id}': {source}")]
    InvalidPattern {
        id: String,
        #[source]
        source: regex::Error,
    },

    /// The same laggard identifier was registered twice.
    #[error("Duplicate laggard identifier: {id}")]
    DuplicateLaggard { id: String },

    /// A browser name outside the known set.
    #[error("Unknown browser: {name}")]
    UnknownBrowser { name: String },

    /// Failed to render tables or verdicts as JSON/YAML.
    #[error("Serialization failed: {message}")]
    Serialization { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for LaggardError {
    fn from(err: serde_json::Error) -> Self {
        LaggardError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for LaggardError {
    fn from(err: serde_yaml::Error) -> Self {
        LaggardError::Serialization {
            message: err.to_string(),
        }
    }
}

/// Result type alias for laggard operations.
pub type Result<T> = std::result::Result<T, LaggardError>;
