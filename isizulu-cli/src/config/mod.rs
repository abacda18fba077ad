//! Configuration module
//!
//! Settings are read from a TOML file passed with `--config`. Command-line
//! flags override the file; missing sections take their defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::CliError;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Processing configuration
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Processing-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Rule-table file replacing the built-in tables
    pub rules: Option<PathBuf>,

    /// sequential, parallel or adaptive
    pub execution_mode: String,

    /// Number of worker threads (0 = auto)
    pub threads: usize,

    /// Text size at which adaptive mode goes parallel (KB)
    pub parallel_threshold_kb: usize,

    /// Largest input file accepted (MB)
    pub max_file_mb: u64,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            rules: None,
            execution_mode: "adaptive".to_string(),
            threads: 0,
            parallel_threshold_kb: 64,
            max_file_mb: 50,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Format used when `--format` is not given
    pub default_format: String,

    /// Keep extracted text in JSON output
    pub include_text: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "annotated".to_string(),
            include_text: true,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())).into())
    }

    /// Load from `path`, or defaults when no file is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}
