//! High-level configuration API

use crate::error::{ApiError, Result};

/// Default number of words above which adaptive mode goes parallel
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 10_000;

/// How a batch of words is distributed over threads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ExecutionMode {
    /// Single-threaded, in input order
    Sequential,
    /// Data-parallel over words
    Parallel,
    /// Sequential below the parallel threshold, parallel above it
    #[default]
    Adaptive,
}

/// Configuration for batch stemming
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Execution strategy
    pub execution_mode: ExecutionMode,
    /// Worker threads for parallel mode (`None` uses the global pool)
    pub threads: Option<usize>,
    /// Word count at which adaptive mode switches to parallel
    pub parallel_threshold: usize,
    /// Emit an empty entry for blank input lines instead of skipping them
    pub keep_blank_lines: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            execution_mode: ExecutionMode::Adaptive,
            threads: None,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            keep_blank_lines: false,
        }
    }
}

impl Config {
    /// Always stem on the calling thread
    pub fn sequential() -> Self {
        Self {
            execution_mode: ExecutionMode::Sequential,
            ..Self::default()
        }
    }

    /// Always stem in parallel
    pub fn parallel() -> Self {
        Self {
            execution_mode: ExecutionMode::Parallel,
            ..Self::default()
        }
    }

    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the execution mode
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.config.execution_mode = mode;
        self
    }

    /// Set thread count
    pub fn threads(mut self, threads: Option<usize>) -> Self {
        self.config.threads = threads;
        self
    }

    /// Set the adaptive threshold, in words
    pub fn parallel_threshold(mut self, words: usize) -> Self {
        self.config.parallel_threshold = words;
        self
    }

    /// Keep blank input lines as empty entries
    pub fn keep_blank_lines(mut self, keep: bool) -> Self {
        self.config.keep_blank_lines = keep;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        if self.config.parallel_threshold == 0 {
            return Err(ApiError::Config(
                "parallel threshold must be at least 1 word".to_string(),
            ));
        }

        if self.config.threads == Some(0) {
            return Err(ApiError::Config(
                "thread count must be at least 1".to_string(),
            ));
        }

        Ok(self.config)
    }
}

impl From<Config> for ConfigBuilder {
    fn from(config: Config) -> Self {
        Self { config }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.execution_mode, ExecutionMode::Adaptive);
        assert_eq!(config.threads, None);
        assert_eq!(config.parallel_threshold, DEFAULT_PARALLEL_THRESHOLD);
        assert!(!config.keep_blank_lines);
    }

    #[test]
    fn test_presets() {
        assert_eq!(
            Config::sequential().execution_mode,
            ExecutionMode::Sequential
        );
        assert_eq!(Config::parallel().execution_mode, ExecutionMode::Parallel);
    }

    #[test]
    fn test_builder_rejects_zero_threshold() {
        let result = Config::builder().parallel_threshold(0).build();
        assert!(matches!(result, Err(ApiError::Config(_))));
    }

    #[test]
    fn test_builder_rejects_zero_threads() {
        let result = Config::builder().threads(Some(0)).build();
        assert!(matches!(result, Err(ApiError::Config(_))));
    }

    #[test]
    fn test_builder_sets_fields() {
        let config = Config::builder()
            .execution_mode(ExecutionMode::Parallel)
            .threads(Some(2))
            .parallel_threshold(50)
            .keep_blank_lines(true)
            .build()
            .unwrap();

        assert_eq!(config.execution_mode, ExecutionMode::Parallel);
        assert_eq!(config.threads, Some(2));
        assert_eq!(config.parallel_threshold, 50);
        assert!(config.keep_blank_lines);
    }
}
