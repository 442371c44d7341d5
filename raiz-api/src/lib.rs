//! Batch stemming API for raiz
//!
//! Wraps the single-word stemmer from `raiz-core` with input handling,
//! configuration and sequential or parallel execution over a vocabulary
//! (one word per line).

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;
pub mod executor;

use executor::{Executor, SequentialExecutor};
use log::debug;
use std::sync::Arc;
use std::time::Instant;

// Re-export key types
pub use config::{Config, ConfigBuilder, ExecutionMode, DEFAULT_PARALLEL_THRESHOLD};
pub use dto::{decode_text, Input, Metadata, Output, StemEntry};
pub use error::{ApiError, Result};
pub use raiz_core::{stem, trim_word, try_stem, CoreError, SpanishStemmer};

/// Main entry point for batch stemming
pub struct Stemmer {
    algorithm: Arc<dyn raiz_core::Stemmer>,
    config: Config,
    #[cfg(feature = "parallel")]
    parallel: executor::ParallelExecutor,
}

impl Stemmer {
    /// Create a Spanish stemmer with default configuration (adaptive mode)
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Create a Spanish stemmer with custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        Self::with_algorithm(Arc::new(SpanishStemmer::new()), config)
    }

    /// Create a batch stemmer around any word-level algorithm
    pub fn with_algorithm(algorithm: Arc<dyn raiz_core::Stemmer>, config: Config) -> Result<Self> {
        // Configs assembled by hand have not been through the builder checks
        let config = ConfigBuilder::from(config).build()?;

        Ok(Self {
            algorithm,
            #[cfg(feature = "parallel")]
            parallel: executor::ParallelExecutor::new(config.threads)?,
            config,
        })
    }

    /// Read a vocabulary and stem every word in it
    pub fn process(&self, input: Input) -> Result<Output> {
        let start = Instant::now();

        let text = input.read_text()?;
        let words = split_vocabulary(&text, self.config.keep_blank_lines);

        Ok(self.collect(&words, text.len(), start))
    }

    /// Stem a list of words, one entry per word
    ///
    /// Unlike [`Stemmer::process`], the words are taken as given: an empty
    /// word still yields an entry and no word is split at line breaks.
    pub fn process_words(&self, words: &[&str]) -> Output {
        let start = Instant::now();
        let total_bytes = words.iter().map(|word| word.len()).sum();
        self.collect(words, total_bytes, start)
    }

    fn collect(&self, words: &[&str], total_bytes: usize, start: Instant) -> Output {
        let (stems, mode, thread_count) = self.run(words);
        let elapsed = start.elapsed();

        let entries = words
            .iter()
            .zip(stems)
            .map(|(word, stem)| StemEntry::new(*word, stem))
            .collect::<Vec<_>>();

        let metadata = Metadata::new(
            entries.len(),
            total_bytes,
            elapsed.as_millis() as u64,
            format!("{mode:?}"),
            thread_count,
        );

        Output { entries, metadata }
    }

    /// Stem already-split words, preserving order
    pub fn stem_words(&self, words: &[&str]) -> Vec<String> {
        self.run(words).0
    }

    /// Process text directly (convenience method)
    pub fn process_text(&self, text: &str) -> Result<Output> {
        self.process(Input::from_text(text))
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Language handled by the underlying algorithm
    pub fn language_code(&self) -> &'static str {
        self.algorithm.language_code()
    }

    fn run(&self, words: &[&str]) -> (Vec<String>, ExecutionMode, usize) {
        let mode = executor::resolve(
            self.config.execution_mode,
            words.len(),
            self.config.parallel_threshold,
        );
        debug!(
            "stemming {} words in {:?} mode (configured {:?})",
            words.len(),
            mode,
            self.config.execution_mode
        );

        let algorithm = self.algorithm.as_ref();
        match mode {
            #[cfg(feature = "parallel")]
            ExecutionMode::Parallel => (
                self.parallel.process(words, algorithm),
                mode,
                self.parallel.thread_count(),
            ),
            _ => (
                SequentialExecutor.process(words, algorithm),
                ExecutionMode::Sequential,
                SequentialExecutor.thread_count(),
            ),
        }
    }
}

impl std::fmt::Debug for Stemmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stemmer")
            .field("language", &self.language_code())
            .field("config", &self.config)
            .finish()
    }
}

/// Split a vocabulary into trimmed words, one per line
pub fn split_vocabulary(text: &str, keep_blank_lines: bool) -> Vec<&str> {
    text.lines()
        .map(trim_word)
        .filter(|line| keep_blank_lines || !line.is_empty())
        .collect()
}

/// Number of logical CPUs, for reporting and sizing worker pools
pub fn available_threads() -> usize {
    num_cpus::get()
}

// Convenience functions

/// Stem a vocabulary given as text with default configuration
pub fn stem_text(text: &str) -> Result<Output> {
    let stemmer = Stemmer::new()?;
    stemmer.process(Input::from_text(text))
}

/// Stem a vocabulary file with default configuration
pub fn stem_file<P: AsRef<std::path::Path>>(path: P) -> Result<Output> {
    let stemmer = Stemmer::new()?;
    stemmer.process(Input::from_file(path.as_ref().to_path_buf()))
}

/// Stem each word of an iterator, in order
pub fn stem_words<I, T>(words: I) -> Vec<String>
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    words.into_iter().map(|word| stem(word.as_ref())).collect()
}
