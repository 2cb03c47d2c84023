//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use typespeak_core::SegmenterConfig;

/// Default log file, created in the working directory
pub const DEFAULT_LOG_FILE: &str = "typespeak.log";

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Segmentation engine configuration
    #[serde(default)]
    pub segmenter: SegmenterSection,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingSection,
}

/// Segmentation-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct SegmenterSection {
    /// Quiet period after punctuation before a sentence is dispatched (ms)
    pub debounce_ms: u64,

    /// Dispatch the unfinished sentence when input ends
    pub flush_on_eof: bool,
}

impl Default for SegmenterSection {
    fn default() -> Self {
        let defaults = SegmenterConfig::default();
        Self {
            debounce_ms: defaults.debounce.as_millis() as u64,
            flush_on_eof: defaults.flush_on_eof,
        }
    }
}

/// Logging-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LoggingSection {
    /// Log file path
    pub file: PathBuf,

    /// Default level when neither `-v` nor `RUST_LOG` is given
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_LOG_FILE),
            level: "info".to_string(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file, or defaults when no file is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to load config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let config: CliConfig =
            toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))?;
        config.segmenter_config()?;
        Ok(config)
    }

    /// Build the engine configuration
    pub fn segmenter_config(&self) -> Result<SegmenterConfig> {
        SegmenterConfig::builder()
            .debounce_ms(self.segmenter.debounce_ms)
            .flush_on_eof(self.segmenter.flush_on_eof)
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.segmenter.debounce_ms, 360);
        assert!(!config.segmenter.flush_on_eof);
        assert_eq!(config.logging.file, PathBuf::from("typespeak.log"));
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_without_file() {
        assert_eq!(CliConfig::load(None).unwrap(), CliConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = CliConfig::parse("[segmenter]\ndebounce_ms = 500\n").unwrap();
        assert_eq!(config.segmenter.debounce_ms, 500);
        assert!(!config.segmenter.flush_on_eof);
        assert_eq!(config.logging, LoggingSection::default());

        let engine = config.segmenter_config().unwrap();
        assert_eq!(engine.debounce, Duration::from_millis(500));
    }

    #[test]
    fn test_invalid_debounce_rejected() {
        let err = CliConfig::parse("[segmenter]\ndebounce_ms = 0\n").unwrap_err();
        assert!(err.to_string().contains("debounce"));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = CliConfig::parse("[segmenter\n").unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("typespeak.toml");
        fs::write(
            &path,
            "[segmenter]\nflush_on_eof = true\n\n[logging]\nfile = \"session.log\"\nlevel = \"debug\"\n",
        )
        .unwrap();

        let config = CliConfig::load(Some(&path)).unwrap();
        assert!(config.segmenter.flush_on_eof);
        assert_eq!(config.logging.file, PathBuf::from("session.log"));
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_load_missing_file() {
        let err = CliConfig::load(Some(Path::new("/nonexistent/typespeak.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
