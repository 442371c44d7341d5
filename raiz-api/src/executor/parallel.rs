//! Parallel execution strategy

use crate::{
    config::ExecutionMode,
    error::{ApiError, Result},
    executor::Executor,
};
use rayon::prelude::*;
use raiz_core::Stemmer as Algorithm;

/// Parallel multi-threaded executor
///
/// Stems on a dedicated pool when a thread count is given, otherwise on
/// rayon's global pool.
#[derive(Debug)]
pub struct ParallelExecutor {
    pool: Option<rayon::ThreadPool>,
}

impl ParallelExecutor {
    /// Create a new parallel executor
    pub fn new(threads: Option<usize>) -> Result<Self> {
        let pool = match threads {
            Some(count) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(count)
                    .build()
                    .map_err(|e| ApiError::Config(e.to_string()))?,
            ),
            None => None,
        };

        Ok(Self { pool })
    }

    fn stem_all<A: Algorithm + ?Sized>(words: &[&str], algorithm: &A) -> Vec<String> {
        words.par_iter().map(|word| algorithm.stem(word)).collect()
    }
}

impl Executor for ParallelExecutor {
    fn process<A: Algorithm + ?Sized>(&self, words: &[&str], algorithm: &A) -> Vec<String> {
        match &self.pool {
            Some(pool) => pool.install(|| Self::stem_all(words, algorithm)),
            None => Self::stem_all(words, algorithm),
        }
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Parallel
    }

    fn thread_count(&self) -> usize {
        self.pool
            .as_ref()
            .map_or_else(rayon::current_num_threads, |pool| pool.current_num_threads())
    }
}
