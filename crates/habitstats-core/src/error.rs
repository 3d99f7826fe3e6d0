//! Core error types for habitstats-core.
//!
//! This module defines the error hierarchy using thiserror. Color and
//! opacity errors are raised at the point of detection and propagate to the
//! caller unchanged; aggregation never fails on missing data.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for habitstats-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Color-related errors
    #[error("Color error: {0}")]
    Color(#[from] ColorError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Color and opacity errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    /// The input is neither a hex string nor a well-formed RGB triple
    #[error("Color ({input}) not recognized: {reason}")]
    InvalidColorFormat { input: String, reason: String },

    /// The opacity is outside both [0, 1] and [0, 100]
    #[error("Opacity ({0}) should be a value between 0 and 1 or a percentage")]
    InvalidOpacity(f64),
}

impl ColorError {
    pub(crate) fn format(input: impl Into<String>, reason: impl Into<String>) -> Self {
        ColorError::InvalidColorFormat {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("Failed to load configuration from {path}: {source}")]
    LoadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(#[from] toml::de::Error),

    /// Failed to serialize configuration
    #[error("Failed to serialize configuration: {0}")]
    SerializeFailed(#[from] toml::ser::Error),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Grouping other than "week" or "month"
    #[error("Unknown grouping '{0}': expected \"week\" or \"month\"")]
    UnknownGrouping(String),

    /// Orientation other than "v" or "h"
    #[error("Unknown orientation '{0}': expected \"v\" or \"h\"")]
    UnknownOrientation(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
