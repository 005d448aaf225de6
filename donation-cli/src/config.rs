//! `donate.toml` configuration.
//!
//! Every section and key is optional:
//!
//! ```toml
//! [submission]
//! backend = "mock"
//! delay_ms = 0
//! timeout_secs = 30
//!
//! [catalog]
//! charities = "charities.csv"
//! referral_sources = "referral_sources.csv"
//!
//! [logging]
//! level = "info"
//! file = "donate.log"
//! stdout = true
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use donation_core::submission::GatewayConfig;
use serde::Deserialize;
use thiserror::Error;

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "donate.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SubmissionSection {
    pub backend: String,
    pub delay_ms: u64,
    pub timeout_secs: u64,
}

impl Default for SubmissionSection {
    fn default() -> Self {
        Self {
            backend: "mock".to_string(),
            delay_ms: 0,
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CatalogSection {
    /// Charities CSV. The built-in catalog is used when unset.
    pub charities: Option<PathBuf>,
    /// Referral sources CSV. The built-in list is used when unset.
    pub referral_sources: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Bare level or full `EnvFilter` directive. `RUST_LOG` wins when set.
    pub level: String,
    pub file: Option<PathBuf>,
    pub stdout: bool,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
            stdout: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub submission: SubmissionSection,
    pub catalog: CatalogSection,
    pub logging: LoggingSection,
}

impl AppConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    /// Reads `path`, which must exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Reads the explicit `path` if given, otherwise [`DEFAULT_CONFIG_FILE`]
    /// if present, otherwise returns the defaults.
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::load(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn gateway_config(&self) -> GatewayConfig {
        GatewayConfig {
            backend: self.submission.backend.clone(),
            simulated_delay: Duration::from_millis(self.submission.delay_ms),
            timeout: Duration::from_secs(self.submission.timeout_secs),
        }
    }
}
