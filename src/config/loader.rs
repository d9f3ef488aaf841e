use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::PreflightConfig;

/// Why a preflight config file could not be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read preflight config '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML in preflight config '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid preflight config: {message}")]
    ValidationError { message: String },
}

impl PreflightConfig {
    /// `preflight/config.toml` under the user config directory
    /// (`./preflight/config.toml` when there is none).
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("preflight").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing file yields `PreflightConfig::default()`.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(PreflightConfig::default());
        }

        Self::load_from(&path)
    }

    /// Loads configuration from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config = Self::parse(&content, path)?;

        tracing::debug!(
            "Loaded config from {} ({} extra options)",
            path.display(),
            config.options.len()
        );
        Ok(config)
    }

    /// Parses and validates the text of the config file at `path`.
    fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: PreflightConfig =
            toml::from_str(content).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                source: e,
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Empty option keys are rejected. Keys not starting with `-` are
    /// allowed but can never match, so they are only warned about.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for option in &self.options {
            if option.key.is_empty() {
                return Err(ConfigError::ValidationError {
                    message: "Option key must not be empty".to_string(),
                });
            }
            if !option.key.starts_with('-') {
                tracing::warn!(
                    "Option key '{}' does not start with '-' and will never match",
                    option.key
                );
            }
            if option.key.ends_with('=') != option.handler.takes_value() {
                tracing::warn!(
                    "Option key '{}' arity differs from handler {:?}",
                    option.key,
                    option.handler
                );
            }
        }

        Ok(())
    }
}
