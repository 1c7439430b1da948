//! Configuration file handling.
//!
//! This module provides loading and saving of osv-viewer configuration
//! from a TOML file.
//!
//! # Configuration Location
//!
//! The configuration file is stored at:
//! - Linux: `~/.config/osv-viewer/config.toml`
//! - macOS: `~/Library/Application Support/osv-viewer/config.toml`
//! - Windows: `%APPDATA%\osv-viewer\config.toml`
//!
//! # Example Configuration
//!
//! ```toml
//! report = "/home/me/scans/osv.json"
//! default_format = "table"
//! color = true
//! ```

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Application configuration.
///
/// Command-line flags take precedence over every value here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Report to read when `--in` is not given.
    ///
    /// Default: none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<PathBuf>,

    /// Default output format when no `--format` flag is provided.
    ///
    /// Valid values: "table", "json"
    /// Default: "table"
    pub default_format: String,

    /// Whether advisory headlines and details are highlighted with ANSI colors.
    ///
    /// Default: true
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            report: None,
            default_format: "table".to_string(),
            color: true,
        }
    }
}

impl Config {
    /// Loads configuration from the config file.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Saves the configuration to the config file.
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    /// Returns the path to the configuration file.
    ///
    /// # Example
    ///
    /// ```
    /// use osv_viewer::Config;
    ///
    /// let path = Config::config_path();
    /// assert!(path.ends_with("osv-viewer/config.toml"));
    /// ```
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("osv-viewer")
            .join("config.toml")
    }

    /// Generates a string containing the default configuration.
    pub fn generate_default_config() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();

        assert_eq!(config.report, None);
        assert_eq!(config.default_format, "table");
        assert!(config.color);
    }

    #[test]
    fn test_config_partial_toml() {
        let config = Config::from_toml(r#"report = "/tmp/osv.json""#).unwrap();

        assert_eq!(config.report, Some(PathBuf::from("/tmp/osv.json")));
        assert_eq!(config.default_format, "table");
        assert!(config.color);
    }

    #[test]
    fn test_config_full_toml() {
        let config = Config::from_toml(
            r#"
            report = "scan.json"
            default_format = "json"
            color = false
            "#,
        )
        .unwrap();

        assert_eq!(config.report, Some(PathBuf::from("scan.json")));
        assert_eq!(config.default_format, "json");
        assert!(!config.color);
    }

    #[test]
    fn test_config_invalid_toml() {
        assert!(Config::from_toml("color = \"maybe\"").is_err());
    }

    #[test]
    fn test_generate_default_config_round_trips() {
        let text = Config::generate_default_config();
        assert!(text.contains("default_format"));
        assert_eq!(Config::from_toml(&text).unwrap(), Config::default());
    }
}
