//! Rule-based Spanish stemmer
//!
//! Reduces an inflected Spanish word to its stem by stripping suffixes in a
//! fixed sequence of steps (a Porter-family algorithm). Every step only
//! deletes characters inside one of three word-final regions:
//!
//! - **R1**: the part after the first non-vowel that follows a vowel
//! - **R2**: R1 of R1
//! - **RV**: a vowel-driven region specific to Spanish
//!
//! The pipeline is: enclitic pronoun removal, standard suffix removal (or,
//! failing that, verb suffix removal), residual vowel removal, and finally
//! acute accent stripping. Regions are recomputed before each of the three
//! suffix steps.
//!
//! # Example
//!
//! ```rust
//! use raiz_core::stem;
//!
//! assert_eq!(stem("gatos"), "gat");
//! assert_eq!(stem("caminando"), "camin");
//! assert_eq!(stem("  Haciéndola "), "hac");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod accent;
pub mod error;
pub mod pipeline;
pub mod region;
pub mod tables;

use alloc::string::String;

pub use accent::strip_accents;
pub use error::{CoreError, Result};
pub use pipeline::StepOutcome;
pub use region::{Region, Regions};

/// Trim the characters that may surround a word
///
/// Strips Unicode whitespace and the byte order mark (U+FEFF) from both
/// ends. NEL (U+0085) is kept.
pub fn trim_word(word: &str) -> &str {
    word.trim_matches(|c: char| c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}'))
}

/// Stem a single word
///
/// Trims the input with [`trim_word`] and lower-cases it before stemming.
/// Total: empty input, short words and non-Spanish text simply pass through
/// with no rule firing.
pub fn stem(word: &str) -> String {
    let word = trim_word(word).to_lowercase();

    let word = {
        let regions = Regions::new(&word);
        pipeline::remove_pronoun(&regions).into_word(&word)
    };

    let word = {
        let regions = Regions::new(&word);
        pipeline::remove_suffix(&regions).into_word(&word)
    };

    let word = {
        let regions = Regions::new(&word);
        pipeline::remove_residual_suffix(&regions).into_word(&word)
    };

    strip_accents(&word)
}

/// Stem a word given as raw bytes
///
/// Fails with [`CoreError::InvalidInput`] if the bytes are not UTF-8.
pub fn try_stem(bytes: &[u8]) -> Result<String> {
    let word = core::str::from_utf8(bytes)?;
    Ok(stem(word))
}

/// A word-level stemming algorithm
pub trait Stemmer: Send + Sync {
    /// Stem one word
    fn stem(&self, word: &str) -> String;

    /// ISO 639-1 code of the language handled
    fn language_code(&self) -> &'static str;
}

/// The Spanish stemmer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpanishStemmer;

impl SpanishStemmer {
    /// Create the stemmer
    pub fn new() -> Self {
        SpanishStemmer
    }
}

impl Stemmer for SpanishStemmer {
    fn stem(&self, word: &str) -> String {
        stem(word)
    }

    fn language_code(&self) -> &'static str {
        "es"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_to_end() {
        assert_eq!(stem("gatos"), "gat");
        assert_eq!(stem("caminando"), "camin");
        assert_eq!(stem("haciéndola"), "hac");
    }

    #[test]
    fn test_normalization() {
        assert_eq!(stem("   GATOS  "), "gat");
        assert_eq!(stem(""), "");
        assert_eq!(stem("á"), "a");
    }

    #[test]
    fn test_trim_word() {
        assert_eq!(trim_word("\u{feff}gatos\r\n"), "gatos");
        assert_eq!(trim_word("\u{a0}casa\u{3000}"), "casa");
        assert_eq!(trim_word("gatos\u{85}"), "gatos\u{85}");
        assert_eq!(trim_word("\u{feff}"), "");
    }

    #[test]
    fn test_byte_order_mark_trimmed() {
        assert_eq!(stem("gatos\u{feff}"), "gat");
        assert_eq!(stem("\u{feff}Gatos"), "gat");
        assert_eq!(stem("gatos\u{85}"), "gatos\u{85}");
    }

    #[test]
    fn test_try_stem() {
        assert_eq!(try_stem("casas".as_bytes()), Ok(String::from("cas")));
        assert_eq!(
            try_stem(&[b'c', 0xc3]),
            Err(CoreError::InvalidInput { position: 1 })
        );
    }

    #[test]
    fn test_trait_object() {
        let stemmer: &dyn Stemmer = &SpanishStemmer::new();
        assert_eq!(stemmer.stem("niños"), "niñ");
        assert_eq!(stemmer.language_code(), "es");
    }
}
