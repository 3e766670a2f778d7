use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// CLI configuration, loaded from `config.toml`
///
/// Command-line flags override file values; a missing file yields defaults.
/// This is the only persisted setting surface - event state itself is never
/// written to disk.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub vault: VaultConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct VaultConfig {
    /// Vault root directory
    pub root: Option<PathBuf>,
    /// Vault name used in navigation links
    pub name: Option<String>,
}

impl Config {
    /// Load from an explicit path, or the default location when `None`
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match default_config_path() {
                Some(path) => path,
                None => return Ok(Self::default()),
            },
        };
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config = toml::from_str(&text)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        Ok(config)
    }
}

/// `<config-dir>/notedays/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("notedays").join("config.toml"))
}
