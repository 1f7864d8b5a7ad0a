//! Configuration errors and the violations validation can report.

use thiserror::Error;

/// A single problem found while validating a [`SessionConfig`](super::SessionConfig).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigViolation {
    #[error("PIN must not be empty")]
    EmptyPin,

    #[error("PIN must contain only digits")]
    NonDigitPin,

    #[error("PIN length {length} is outside {min}..={max}")]
    PinLength {
        length: usize,
        min: usize,
        max: usize,
    },
}

/// Errors that can occur while loading a session configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid session config ({} violation(s))", .0.len())]
    Invalid(Vec<ConfigViolation>),
}

impl ConfigError {
    /// Violations carried by an `Invalid` error, empty otherwise.
    pub fn violations(&self) -> &[ConfigViolation] {
        match self {
            Self::Invalid(violations) => violations,
            _ => &[],
        }
    }
}
