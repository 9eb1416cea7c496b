//! Configuration handling for format-docs
//!
//! User preferences live in `~/.config/format-docs/config.toml` (global).
//! The registry file is found via `--registry`, `$FORMAT_DOCS_REGISTRY`, or
//! by walking up from the current directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable naming the registry file
pub const REGISTRY_ENV: &str = "FORMAT_DOCS_REGISTRY";

/// Registry file name searched for during discovery
pub const REGISTRY_FILE_NAME: &str = "format-docs.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    #[error("Registry not found: {}", .0.display())]
    NotFound(PathBuf),
}

/// Output format for commands
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Global user configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GlobalConfig {
    /// Default output format (text or json)
    pub default_format: OutputFormat,

    /// Registry to use when none is given and none is found nearby
    pub registry: Option<PathBuf>,
}

/// Combined configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub global: GlobalConfig,
}

impl Config {
    /// Loads configuration from default locations
    pub fn load() -> Result<Self> {
        Ok(Self {
            global: Self::load_global()?,
        })
    }

    /// Returns the global config directory
    pub fn global_config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "format-docs", "format-docs")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Loads global configuration
    fn load_global() -> Result<GlobalConfig> {
        let config_dir = match Self::global_config_dir() {
            Some(dir) => dir,
            None => return Ok(GlobalConfig::default()),
        };

        let config_path = config_dir.join("config.toml");
        if !config_path.exists() {
            return Ok(GlobalConfig::default());
        }

        Self::load_global_from(&config_path)
    }

    /// Loads global configuration from a specific file
    pub fn load_global_from(config_path: &Path) -> Result<GlobalConfig> {
        let content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read global config: {}", config_path.display()))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .context("Failed to parse global config")
    }

    /// Resolves the registry file.
    ///
    /// An explicit path (flag or environment) must exist. Otherwise the
    /// current directory and its ancestors are searched, then the global
    /// config's `registry` setting is used.
    pub fn resolve_registry(&self, explicit: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(ConfigError::NotFound(path.to_path_buf()).into());
            }
            return Ok(path.to_path_buf());
        }

        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        if let Some(found) = Self::find_registry_from(&cwd) {
            return Ok(found);
        }

        match &self.global.registry {
            Some(path) if path.is_file() => Ok(path.clone()),
            Some(path) => Err(ConfigError::NotFound(path.clone()).into()),
            None => Err(ConfigError::Invalid(format!(
                "No registry found. Pass --registry, set ${}, or add docs/{}",
                REGISTRY_ENV, REGISTRY_FILE_NAME
            ))
            .into()),
        }
    }

    /// Walks up from `start` looking for `format-docs.toml` or
    /// `docs/format-docs.toml`
    pub fn find_registry_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();

        loop {
            for candidate in [
                current.join(REGISTRY_FILE_NAME),
                current.join("docs").join(REGISTRY_FILE_NAME),
            ] {
                if candidate.is_file() {
                    return Some(candidate);
                }
            }

            if !current.pop() {
                return None;
            }
        }
    }
}
