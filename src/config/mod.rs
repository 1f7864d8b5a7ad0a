//! Session configuration: the customer's PIN and the starting balances.
//!
//! # Example
//!
//! ```rust
//! use atm_session::config::SessionConfig;
//!
//! let config = SessionConfig::from_json(r#"{ "pin": "2468", "machine_cash": 500 }"#).unwrap();
//! assert_eq!(config.pin, "2468");
//! assert_eq!(config.machine_cash, 500);
//! assert_eq!(config.account_balance, 20_000); // default
//!
//! let err = SessionConfig::from_json(r#"{ "pin": "x" }"#).unwrap_err();
//! assert_eq!(err.violations().len(), 2);
//! ```

pub mod error;
pub mod rules;

pub use error::{ConfigError, ConfigViolation};

use serde::{Deserialize, Serialize};
use std::path::Path;
use stillwater::validation::Validation;

/// Everything needed to start a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub pin: String,
    pub machine_cash: u64,
    pub account_balance: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            pin: crate::atm::DEFAULT_PIN.to_string(),
            machine_cash: 10_000,
            account_balance: 20_000,
        }
    }
}

impl SessionConfig {
    /// Parse and validate a JSON document. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "Loaded session config");
        Self::from_json(&json)
    }

    /// Run every rule and return all violations at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match rules::validate_pin(&self.pin) {
            Validation::Success(_) => Ok(()),
            Validation::Failure(violations) => {
                let violations: Vec<ConfigViolation> = violations.iter().cloned().collect();
                tracing::warn!(count = violations.len(), "Session config rejected");
                Err(ConfigError::Invalid(violations))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = SessionConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.pin, "1234");
    }

    #[test]
    fn json_fields_override_defaults() {
        let config = SessionConfig::from_json(
            r#"{ "pin": "9876", "machine_cash": 4000, "account_balance": 250 }"#,
        )
        .unwrap();
        assert_eq!(
            config,
            SessionConfig {
                pin: "9876".to_string(),
                machine_cash: 4_000,
                account_balance: 250,
            }
        );
    }

    #[test]
    fn negative_balance_fails_to_parse() {
        let err = SessionConfig::from_json(r#"{ "account_balance": -5 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn invalid_pin_lists_violations() {
        let err = SessionConfig::from_json(r#"{ "pin": "" }"#).unwrap_err();
        assert_eq!(err.violations(), &[ConfigViolation::EmptyPin]);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = SessionConfig::load("/nonexistent/atm-session.json").unwrap_err();
        match err {
            ConfigError::Io { path, .. } => assert!(path.ends_with("atm-session.json")),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn load_reads_json_file() {
        let path =
            std::env::temp_dir().join(format!("atm-session-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(&path, r#"{ "pin": "55555" }"#).unwrap();

        let config = SessionConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.pin, "55555");
        assert_eq!(config.machine_cash, 10_000);
    }
}
