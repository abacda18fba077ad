//! Configuration types for the engine

use isizulu_core::{AnalyzerConfig, ExecutionMode};

use crate::error::{EngineError, Result};

/// Engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// How lines within one text are scheduled
    pub execution_mode: ExecutionMode,
    /// Number of worker threads (None = auto)
    pub threads: Option<usize>,
    /// Text size at which adaptive mode goes parallel, in bytes
    pub parallel_threshold: usize,
    /// Process batch items concurrently
    pub parallel_items: bool,
    /// Largest file accepted for extraction, in bytes
    pub max_file_bytes: u64,
    /// Keep the extracted text on each record
    pub include_text: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            execution_mode: ExecutionMode::Adaptive,
            threads: None,
            parallel_threshold: 64 * 1024, // 64KB
            parallel_items: true,
            max_file_bytes: 50 * 1024 * 1024, // 50MB
            include_text: true,
        }
    }
}

impl EngineConfig {
    /// Single-threaded configuration
    pub fn sequential() -> Self {
        Self {
            execution_mode: ExecutionMode::Sequential,
            threads: Some(1),
            parallel_items: false,
            ..Default::default()
        }
    }

    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::default()
    }

    /// Analyzer settings derived from this configuration
    pub fn analyzer_config(&self) -> AnalyzerConfig {
        AnalyzerConfig {
            mode: self.execution_mode,
            threads: self.threads,
            parallel_threshold: self.parallel_threshold,
        }
    }
}

/// Builder for EngineConfig
#[derive(Debug, Default)]
pub struct EngineConfigBuilder {
    config: EngineConfig,
}

impl EngineConfigBuilder {
    /// Set the execution mode
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.config.execution_mode = mode;
        self
    }

    /// Set the thread count
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.config.threads = count;
        self
    }

    /// Set the adaptive threshold
    pub fn parallel_threshold_kb(mut self, threshold: usize) -> Self {
        self.config.parallel_threshold = threshold * 1024;
        self
    }

    pub fn parallel_items(mut self, enabled: bool) -> Self {
        self.config.parallel_items = enabled;
        self
    }

    pub fn max_file_bytes(mut self, bytes: u64) -> Self {
        self.config.max_file_bytes = bytes;
        self
    }

    pub fn include_text(mut self, include: bool) -> Self {
        self.config.include_text = include;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<EngineConfig> {
        if self.config.threads == Some(0) {
            return Err(EngineError::Config(
                "thread count must be at least 1".to_string(),
            ));
        }
        if self.config.max_file_bytes == 0 {
            return Err(EngineError::Config(
                "max_file_bytes must be greater than zero".to_string(),
            ));
        }
        Ok(self.config)
    }
}
