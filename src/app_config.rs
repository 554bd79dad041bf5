use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::file_utils::FileManager;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Directory holding the source markdown documents
    #[serde(default = "default_content_dir")]
    pub content_dir: String,

    /// Output file for the composed page, stdout when absent
    #[serde(default)]
    pub output: Option<String>,

    /// Pretty-print the JSON output
    #[serde(default)]
    pub pretty: bool,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log level setting
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    // @level: Errors only
    Error,
    // @level: Errors and warnings
    Warn,
    // @level: Default verbosity
    #[default]
    Info,
    // @level: Developer diagnostics
    Debug,
    // @level: Everything
    Trace,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            content_dir: default_content_dir(),
            output: None,
            pretty: false,
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Load a configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = FileManager::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        config.validate()?;
        Ok(config)
    }

    /// Save the configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .context("Failed to serialize configuration")?;
        FileManager::write_to_file(path, &content)
    }

    // @validates: Structural sanity of the configuration
    pub fn validate(&self) -> Result<()> {
        if self.content_dir.trim().is_empty() {
            return Err(anyhow!("content_dir must not be empty"));
        }
        if let Some(output) = &self.output {
            if output.trim().is_empty() {
                return Err(anyhow!("output path must not be empty when set"));
            }
        }
        Ok(())
    }
}

fn default_content_dir() -> String {
    "content".to_string()
}
