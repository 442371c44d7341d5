//! Check command implementation
//!
//! Stems a vocabulary and compares each stem with the line at the same
//! position in an expected-stems file.

use crate::error::CliError;
use crate::input::FileReader;
use anyhow::Result;
use clap::Args;
use raiz_api::{trim_word, Config, Stemmer};
use std::path::PathBuf;

/// Arguments for the check command
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Vocabulary file, one word per line
    #[arg(short = 'w', long, value_name = "FILE", required = true)]
    pub vocabulary: PathBuf,

    /// Expected stems, one per line, aligned with the vocabulary
    #[arg(short, long, value_name = "FILE", required = true)]
    pub expected: PathBuf,

    /// Maximum number of mismatches to print
    #[arg(long, value_name = "N", default_value_t = 10)]
    pub show: usize,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// A word whose stem differs from the expected one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    /// 1-based line number
    pub line: usize,
    /// Vocabulary word
    pub word: String,
    /// Stem produced
    pub actual: String,
    /// Stem expected
    pub expected: String,
}

/// Result of comparing a vocabulary against expected stems
#[derive(Debug, Default)]
pub struct CheckReport {
    /// Number of line pairs compared
    pub compared: usize,
    /// Pairs that differ
    pub mismatches: Vec<Mismatch>,
}

impl CheckReport {
    /// Whether every compared stem matched
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Compare stems of `words` with `expected`, position by position
pub fn compare(stemmer: &Stemmer, words: &[&str], expected: &[&str]) -> CheckReport {
    let stems = stemmer.stem_words(words);

    let mismatches = words
        .iter()
        .zip(expected)
        .zip(stems)
        .enumerate()
        .filter(|(_, ((_, expected), actual))| trim_word(expected) != actual.as_str())
        .map(|(idx, ((word, expected), actual))| Mismatch {
            line: idx + 1,
            word: word.to_string(),
            actual,
            expected: trim_word(expected).to_string(),
        })
        .collect();

    CheckReport {
        compared: words.len().min(expected.len()),
        mismatches,
    }
}

impl CheckArgs {
    /// Execute the check command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.verbose, false);

        println!(
            "Checking {} against {}",
            self.vocabulary.display(),
            self.expected.display()
        );

        let vocabulary = FileReader::read_lines(&self.vocabulary)?;
        let expected = FileReader::read_lines(&self.expected)?;

        if vocabulary.len() != expected.len() {
            return Err(CliError::LineCountMismatch {
                vocabulary: vocabulary.len(),
                expected: expected.len(),
            }
            .into());
        }

        let stemmer = Stemmer::with_config(Config::default())?;
        let words: Vec<&str> = vocabulary.iter().map(String::as_str).collect();
        let expected: Vec<&str> = expected.iter().map(String::as_str).collect();
        let report = compare(&stemmer, &words, &expected);

        if report.passed() {
            println!("✓ All {} stems match", report.compared);
            return Ok(());
        }

        println!(
            "✗ {} of {} stems differ",
            report.mismatches.len(),
            report.compared
        );
        for mismatch in report.mismatches.iter().take(self.show) {
            println!(
                "  line {}: {} -> {} (expected {})",
                mismatch.line, mismatch.word, mismatch.actual, mismatch.expected
            );
        }
        if report.mismatches.len() > self.show {
            println!("  ... {} more", report.mismatches.len() - self.show);
        }

        Err(CliError::CheckFailed {
            mismatches: report.mismatches.len(),
            total: report.compared,
        }
        .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_pair(vocabulary: &str, expected: &str) -> (TempDir, CheckArgs) {
        let temp_dir = TempDir::new().unwrap();
        let vocabulary_path = temp_dir.path().join("voc.txt");
        let expected_path = temp_dir.path().join("output.txt");
        fs::write(&vocabulary_path, vocabulary).unwrap();
        fs::write(&expected_path, expected).unwrap();

        let args = CheckArgs {
            vocabulary: vocabulary_path,
            expected: expected_path,
            show: 10,
            verbose: 0,
        };
        (temp_dir, args)
    }

    #[test]
    fn test_compare_reports_positions() {
        let stemmer = Stemmer::new().unwrap();
        let report = compare(
            &stemmer,
            &["gatos", "caminando", "niños"],
            &["\u{feff}gat", "caminand", "niñ "],
        );

        assert_eq!(report.compared, 3);
        assert_eq!(
            report.mismatches,
            vec![Mismatch {
                line: 2,
                word: "caminando".to_string(),
                actual: "camin".to_string(),
                expected: "caminand".to_string(),
            }]
        );
    }

    #[test]
    fn test_execute_passes() {
        let (_dir, args) = write_pair("gatos\nhaciéndola\n", "gat\nhac\n");
        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_execute_mismatch() {
        let (_dir, args) = write_pair("gatos\ncasas\n", "gato\ncas\n");
        let err = args.execute().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::CheckFailed {
                mismatches: 1,
                total: 2
            })
        ));
    }

    #[test]
    fn test_execute_line_count_mismatch() {
        let (_dir, args) = write_pair("gatos\ncasas\n", "gat\n");
        let err = args.execute().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::LineCountMismatch {
                vocabulary: 2,
                expected: 1
            })
        ));
    }
}
