//! Configuration management for vaultgate.
//!
//! Loads configuration from ${VAULTGATE_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::identity::Identity;
use crate::providers::ProviderKind;

/// Returns the default config template with comments.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for vaultgate configuration and data directories.
    //!
    //! VAULTGATE_HOME resolution order:
    //! 1. VAULTGATE_HOME environment variable (if set)
    //! 2. ~/.config/vaultgate (default)
    //! 3. ./.vaultgate when no home directory can be determined

    use std::path::PathBuf;

    pub fn vaultgate_home() -> PathBuf {
        if let Ok(home) = std::env::var("VAULTGATE_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".vaultgate"),
            |h| h.join(".config").join("vaultgate"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        vaultgate_home().join("config.toml")
    }

    /// Returns the directory log files are written to.
    pub fn logs_dir() -> PathBuf {
        vaultgate_home().join("logs")
    }
}

/// Identity provider settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    pub provider: ProviderKind,
    /// Delay before the first determination, in milliseconds.
    pub latency_ms: u64,
    /// Identity reported by the local provider on launch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cached: Option<Identity>,
}

impl IdentityConfig {
    pub const DEFAULT_LATENCY_MS: u64 = 250;

    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::default(),
            latency_ms: Self::DEFAULT_LATENCY_MS,
            cached: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default `tracing` filter directive.
    pub filter: String,
    /// File name under `paths::logs_dir()`.
    pub file: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            file: "vaultgate.log".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub identity: IdentityConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Loads configuration from the default path.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Writes the commented default config to `path`.
    ///
    /// # Errors
    /// Fails if a file already exists at `path` or it cannot be written.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, default_config_template())
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }
}
