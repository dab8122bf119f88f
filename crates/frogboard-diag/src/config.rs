//! Configuration file loading for the diagnostics tool.

use frogboard_bitboard::RenderOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Settings read from `frogboard.toml`.
///
/// ```toml
/// [render]
/// orientation = "rank-one-first"
/// labels = true
/// ```
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
pub struct DiagConfig {
    /// Defaults for the `render` and `square` commands.
    #[serde(default)]
    pub render: RenderOptions,
}

impl DiagConfig {
    /// Loads the configuration.
    ///
    /// An explicit `path` must exist. Without one, [`Self::default_path`]
    /// is read when present and defaults are used otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (config_path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (Self::default_path(), false),
        };
        if !required && !config_path.exists() {
            tracing::debug!("No config at {:?}, using defaults", config_path);
            return Ok(Self::default());
        }
        let content =
            std::fs::read_to_string(&config_path).map_err(|source| ConfigError::ReadError {
                path: config_path.clone(),
                source,
            })?;
        tracing::debug!("Loaded config from {:?}", config_path);
        Self::parse(&content)
    }

    /// Parses configuration text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Returns the path to the configuration file.
    ///
    /// Currently returns `frogboard.toml` in the current working directory.
    pub fn default_path() -> PathBuf {
        PathBuf::from("frogboard.toml")
    }
}
