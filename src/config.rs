//! Configuration management
//!
//! Loads the host-supplied localization table and formatting defaults from
//! a YAML file. The library only ever reads configuration; it never writes
//! it back.
//!
//! Configuration files are looked up in platform-specific directories:
//! - macOS: `~/Library/Application Support/valuefmt/config.yaml`
//! - Linux: `~/.config/valuefmt/config.yaml`
//! - Windows: `%APPDATA%\valuefmt\config.yaml`
//!
//! ```yaml
//! strings:
//!   mainPageTitle: "메인"
//! count_style: file
//! metrics:
//!   advance_ratio: 0.6
//!   line_height_ratio: 1.2
//! ```

use crate::stores::{FixedAdvanceMetrics, MapStringTable};
use crate::utils::formatting::{format_byte_count, AllowedUnits, CountStyle};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Formatting configuration
///
/// Every field is optional in the file; missing fields take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Localization table, key to display string
    pub strings: MapStringTable,
    /// Kilobyte size used by [`Config::format_byte_count`]
    pub count_style: CountStyle,
    /// Ratios for the built-in text metrics
    pub metrics: FixedAdvanceMetrics,
}

impl Config {
    /// Loads configuration from the default config file location
    ///
    /// # Returns
    /// - `Ok(Config)` with the loaded configuration, or the defaults if the file doesn't exist
    /// - `Err` if the file exists but cannot be read or parsed
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            log::debug!("no config at {:?}, using defaults", config_path);
            return Ok(Config::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from a specific file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid YAML.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        Self::from_yaml_str(&contents)
            .with_context(|| format!("Failed to parse config file {:?}", path))
    }

    /// Parses configuration from YAML text
    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        if contents.trim().is_empty() {
            return Ok(Config::default());
        }
        let config: Config = serde_yaml::from_str(contents).context("Invalid config YAML")?;
        Ok(config)
    }

    /// Returns the platform-specific configuration file path
    ///
    /// Falls back to `~/.config/valuefmt/config.yaml` if platform detection fails.
    ///
    /// # Errors
    /// Returns an error if the HOME environment variable is not set (fallback case only).
    pub fn config_path() -> Result<PathBuf> {
        if let Some(proj_dirs) = ProjectDirs::from("", "", "valuefmt") {
            Ok(proj_dirs.config_dir().join("config.yaml"))
        } else {
            let home = std::env::var("HOME").context("HOME not set")?;
            Ok(PathBuf::from(home).join(".config/valuefmt/config.yaml"))
        }
    }

    /// The configured localization table
    pub fn string_table(&self) -> &MapStringTable {
        &self.strings
    }

    /// Text metrics built from the configured ratios
    pub fn text_metrics(&self) -> FixedAdvanceMetrics {
        self.metrics
    }

    /// Formats a byte count using the configured count style
    pub fn format_byte_count(&self, count: u64, units: AllowedUnits) -> String {
        format_byte_count(count, units, self.count_style)
    }
}
