//! Load — config loading from a YAML file.

use std::fs;
use std::path::Path;

use super::model::{ConfigError, ReportConfig};

impl ReportConfig {
    /// Load and validate configuration from a YAML file.
    ///
    /// Any failure here is fatal to the run; there is no fallback to a
    /// partial or empty configuration.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        tracing::info!("Loading configuration from: {}", path.display());

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let config: ReportConfig =
            serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.display().to_string(),
                source,
            })?;

        config.validate()?;
        Ok(config)
    }
}

// ── Tests ───────────────────────────────────────────────────────
