use serde::{Deserialize, Serialize};
#[cfg(not(target_arch = "wasm32"))]
use std::{env, fs, path::PathBuf};
use thiserror::Error;

/// Origin of the CodeAstra backend when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding [`ClientConfig::api_base_url`].
pub const API_URL_ENV: &str = "CODEASTRA_API_URL";

/// Environment variable overriding [`ClientConfig::log_level`].
pub const LOG_LEVEL_ENV: &str = "CODEASTRA_LOG_LEVEL";

/// Errors raised while loading a [`ClientConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),
    /// The file extension is neither YAML nor JSON.
    #[error("unsupported configuration format `{0}`; use 'yaml' or 'json'")]
    UnsupportedFormat(String),
    /// The file contents did not parse as the expected format.
    #[error("invalid configuration: {0}")]
    Parse(String),
}

/// Settings for clients talking to the CodeAstra backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Origin requests are issued against, e.g. `http://localhost:8080`.
    pub api_base_url: String,
    /// Default log level when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Resolve the configuration from defaults, an optional file, the
    /// environment, and finally an explicit base URL override.
    ///
    /// Environment variables only apply to values the file left at their
    /// defaults.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the file cannot be read or parsed, or has
    /// an unsupported extension.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_config(
        config_path: Option<PathBuf>,
        base_url_override: Option<String>,
    ) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let mut config = match config_path {
            Some(path) => Self::from_file(&path)?,
            None => defaults.clone(),
        };

        if config.api_base_url == defaults.api_base_url {
            if let Ok(url) = env::var(API_URL_ENV) {
                config.api_base_url = url;
            }
        }
        if config.log_level == defaults.log_level {
            if let Ok(level) = env::var(LOG_LEVEL_ENV) {
                config.log_level = level;
            }
        }

        if let Some(url) = base_url_override {
            config.api_base_url = url;
        }

        Ok(config)
    }

    /// Reads a configuration file without applying environment overrides.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the file cannot be read or parsed, or has
    /// an unsupported extension.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        let content = fs::read_to_string(path)?;
        match extension.as_str() {
            "yaml" | "yml" => {
                serde_yml::from_str(&content).map_err(|err| ConfigError::Parse(err.to_string()))
            }
            "json" => {
                serde_json::from_str(&content).map_err(|err| ConfigError::Parse(err.to_string()))
            }
            other => Err(ConfigError::UnsupportedFormat(other.to_string())),
        }
    }
}
