//! TOML-based application configuration.
//!
//! Stores scoring weights and suggestion settings at
//! `~/.config/taskrank/config.toml`. Missing file or missing sections
//! fall back to the built-in defaults, so the engine behaves the same
//! whether or not a config file exists.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::error::{ConfigError, Result};
use crate::scoring::ScoreWeights;

/// Suggestion settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestConfig {
    /// How many top tasks a suggestion returns
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    /// How many recent stored tasks the fallback loads
    #[serde(default = "default_store_limit")]
    pub store_limit: u32,
}

fn default_top_n() -> usize {
    3
}

fn default_store_limit() -> u32 {
    50
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            store_limit: default_store_limit(),
        }
    }
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/taskrank/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub weights: ScoreWeights,
    #[serde(default)]
    pub suggest: SuggestConfig,
}

impl Config {
    /// Path to the configuration file.
    pub fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load the configuration, falling back to defaults when the file
    /// does not exist.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path).map_err(|e| ConfigError::LoadFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        let config = toml::from_str(&raw).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        Ok(config)
    }

    /// Save the configuration as pretty TOML.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;
        let raw = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, raw).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })?;
        Ok(())
    }
}
