//! Execution strategies for batch stemming

use crate::config::ExecutionMode;
use raiz_core::Stemmer as Algorithm;

#[cfg(feature = "parallel")]
pub mod parallel;
pub mod sequential;

#[cfg(feature = "parallel")]
pub use parallel::ParallelExecutor;
pub use sequential::SequentialExecutor;

/// Trait for execution strategies
pub trait Executor: Send + Sync {
    /// Stem every word, preserving input order
    fn process<A: Algorithm + ?Sized>(&self, words: &[&str], algorithm: &A) -> Vec<String>;

    /// Get the execution mode
    fn mode(&self) -> ExecutionMode;

    /// Number of threads this executor stems on
    fn thread_count(&self) -> usize;
}

/// Automatically select execution mode based on the number of words
pub fn auto_select(word_count: usize, threshold: usize) -> ExecutionMode {
    if word_count < threshold {
        ExecutionMode::Sequential
    } else {
        #[cfg(feature = "parallel")]
        return ExecutionMode::Parallel;

        #[cfg(not(feature = "parallel"))]
        ExecutionMode::Sequential
    }
}

/// Turn a configured mode into the concrete one for this batch
pub fn resolve(mode: ExecutionMode, word_count: usize, threshold: usize) -> ExecutionMode {
    match mode {
        ExecutionMode::Adaptive => auto_select(word_count, threshold),
        #[cfg(not(feature = "parallel"))]
        ExecutionMode::Parallel => ExecutionMode::Sequential,
        concrete => concrete,
    }
}
