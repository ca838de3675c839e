//! Model — ReportConfig and config errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Run configuration, loaded once from YAML and read-only afterwards.
///
/// `pattern` drives the field extractor (a regex with exactly three capture
/// groups: date, method, user-agent). `os` and `bots` are the classifier's
/// token lists; either may be empty, but not both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub pattern: String,
    #[serde(default)]
    pub os: Vec<String>,
    #[serde(default)]
    pub bots: Vec<String>,
}

impl ReportConfig {
    /// Sanity-check configuration values before any processing starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pattern.is_empty() {
            return Err(ConfigError::Invalid("pattern must not be empty".to_string()));
        }
        if self.os.is_empty() && self.bots.is_empty() {
            return Err(ConfigError::Invalid(
                "at least one of 'os' or 'bots' token lists is required".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration failures are fatal: the run halts before any log file is
/// touched.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unable to read configuration file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("unable to parse configuration file {path}: {source}")]
    Parse {
        path: String,
        source: serde_yaml::Error,
    },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}
