//! Configuration management
//!
//! Handles loading and saving the console's defaults: domain validation
//! options, random fixture bounds and the initial values of the setup-key
//! form.
//!
//! Configuration files are stored in platform-specific directories:
//! - macOS: `~/Library/Application Support/netconsole/config.yaml`
//! - Linux: `~/.config/netconsole/config.yaml`
//! - Windows: `%APPDATA%\netconsole\config.yaml`

use crate::setup_key::SetupKeyForm;
use crate::utils::random::RandomStringOptions;
use crate::utils::validation::DomainOptions;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Initial values for a new setup key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetupKeyDefaults {
    /// Days until expiry, `None` for keys that never expire
    pub expires_in_days: Option<u32>,
    pub reusable: bool,
    pub ephemeral: bool,
    pub allow_extra_dns_labels: bool,
}

impl Default for SetupKeyDefaults {
    fn default() -> Self {
        Self {
            expires_in_days: Some(7),
            reusable: false,
            ephemeral: false,
            allow_extra_dns_labels: false,
        }
    }
}

impl SetupKeyDefaults {
    /// Builds a pre-filled form for a key called `name`
    pub fn form(&self, name: impl Into<String>) -> SetupKeyForm {
        SetupKeyForm {
            name: name.into(),
            reusable: self.reusable,
            expires_in_days: self
                .expires_in_days
                .map(|days| days.to_string())
                .unwrap_or_default(),
            ephemeral: self.ephemeral,
            allow_extra_dns_labels: self.allow_extra_dns_labels,
            ..SetupKeyForm::default()
        }
    }
}

/// Application configuration
///
/// Every section falls back to its defaults when missing, so a partial or
/// empty file is valid. Persisted as YAML in the user's config directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Options used when validating DNS and route domains
    pub domain: DomainOptions,
    /// Length bounds for generated fixture strings
    pub random_string: RandomStringOptions,
    /// Initial values of the setup-key form
    pub setup_key: SetupKeyDefaults,
}

impl Config {
    /// Loads configuration from the default config file location
    ///
    /// # Returns
    /// - `Ok(Config)` with the loaded configuration, or the defaults if the file doesn't exist
    /// - `Err` if the file exists but cannot be read or parsed
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads configuration from an explicit path
    ///
    /// # Errors
    /// Returns an error if the file exists but is malformed or unreadable.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        Self::from_yaml(&contents)
    }

    /// Parses configuration from YAML text
    pub fn from_yaml(contents: &str) -> Result<Self> {
        if contents.trim().is_empty() {
            return Ok(Config::default());
        }
        serde_yaml::from_str(contents).with_context(|| "Failed to parse config file")
    }

    /// Saves the configuration to the default config file location
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created or the file cannot be written.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Saves the configuration to an explicit path
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {:?}", parent))?;
        }

        let contents = serde_yaml::to_string(self)?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    /// Returns the platform-specific configuration file path
    ///
    /// Falls back to `~/.config/netconsole/config.yaml` if platform detection fails.
    ///
    /// # Errors
    /// Returns an error if the HOME environment variable is not set (fallback case only).
    pub fn config_path() -> Result<PathBuf> {
        if let Some(proj_dirs) = ProjectDirs::from("", "", "netconsole") {
            Ok(proj_dirs.config_dir().join("config.yaml"))
        } else {
            let home = std::env::var("HOME").context("HOME not set")?;
            Ok(PathBuf::from(home).join(".config/netconsole/config.yaml"))
        }
    }
}
