//! Configuration management for zaiko-manager
//!
//! Config stored at: ~/.config/zaiko-manager/config.json

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use zaiko_types::{ConfigError, OutputFormat, Result};

const APP_DIR: &str = "zaiko-manager";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Inventory file override (optional)
    #[serde(default)]
    pub inventory_path: Option<PathBuf>,

    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inventory_path: None,
            output_format: default_output_format(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join(APP_DIR);
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Resolve the inventory file path: the configured override, or the
    /// platform data directory default
    pub fn inventory_path(&self) -> Result<PathBuf> {
        if let Some(ref path) = self.inventory_path {
            return Ok(path.clone());
        }

        let data_dir = dirs::data_dir()
            .ok_or(ConfigError::NotFound)?
            .join(APP_DIR);
        Ok(data_dir.join("inventory.csv"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Zaiko Manager Configuration")?;
        writeln!(f, "===========================")?;
        writeln!(f)?;
        writeln!(
            f,
            "Inventory file: {}",
            self.inventory_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "(error)".to_string())
        )?;
        writeln!(f, "Output format:  {}", self.output_format)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.inventory_path.is_none());
        assert_eq!(config.output_format, OutputFormat::Table);
    }

    #[test]
    fn test_inventory_path_prefers_override() {
        let config = Config {
            inventory_path: Some(PathBuf::from("/tmp/lot.csv")),
            ..Config::default()
        };
        assert_eq!(config.inventory_path().unwrap(), PathBuf::from("/tmp/lot.csv"));
    }

    #[test]
    fn test_config_json_round_trip() {
        let config = Config {
            inventory_path: Some(PathBuf::from("/tmp/lot.csv")),
            output_format: OutputFormat::Json,
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.inventory_path, config.inventory_path);
        assert_eq!(parsed.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_config_tolerates_missing_fields() {
        let parsed: Config = serde_json::from_str("{}").unwrap();
        assert!(parsed.inventory_path.is_none());
        assert_eq!(parsed.output_format, OutputFormat::Table);
    }
}
