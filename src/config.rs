//! Configuration management for chantier-ciment
//!
//! Config stored at: ~/.config/chantier-ciment/config.json

use crate::cli::OutputFormat;
use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Ledger storage directory override
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Default output format (table, json)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            output_format: default_output_format(),
        }
    }
}

impl Config {
    /// Configuration directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("chantier-ciment");
        Ok(config_dir)
    }

    /// Configuration file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Directory holding the ledger storage.
    ///
    /// The override wins; otherwise the platform data dir is used.
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(ref dir) = self.data_dir {
            return Ok(dir.clone());
        }
        let data_dir = dirs::data_dir()
            .ok_or(ConfigError::NotFound)?
            .join("chantier-ciment");
        Ok(data_dir)
    }

    /// Load configuration from file, or defaults if no file exists
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        let config: Config =
            serde_json::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)?;
        let content = serde_json::to_string_pretty(self)?;
        fs::write(Self::config_path()?, content)?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Chantier Ciment Configuration")?;
        writeln!(f, "=============================")?;
        writeln!(f)?;
        match self.data_dir() {
            Ok(dir) => writeln!(f, "Data dir:       {}", dir.display())?,
            Err(_) => writeln!(f, "Data dir:       (unavailable)")?,
        }
        writeln!(f, "Output format:  {}", self.output_format)?;
        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }
        Ok(())
    }
}
