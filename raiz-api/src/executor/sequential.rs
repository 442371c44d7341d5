//! Sequential execution strategy

use crate::{config::ExecutionMode, executor::Executor};
use raiz_core::Stemmer as Algorithm;

/// Sequential single-threaded executor
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialExecutor;

impl Executor for SequentialExecutor {
    fn process<A: Algorithm + ?Sized>(&self, words: &[&str], algorithm: &A) -> Vec<String> {
        words.iter().map(|word| algorithm.stem(word)).collect()
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Sequential
    }

    fn thread_count(&self) -> usize {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raiz_core::SpanishStemmer;

    #[test]
    fn test_preserves_order() {
        let stems = SequentialExecutor.process(&["gatos", "caminando", ""], &SpanishStemmer);
        assert_eq!(stems, vec!["gat", "camin", ""]);
        assert_eq!(SequentialExecutor.thread_count(), 1);
    }
}
