//! Region segmentation (R1, R2, RV)
//!
//! A region is a suffix of the word inside which a suffix rule is allowed to
//! fire. Regions are stored as byte offsets into the word they were computed
//! from and are only ever handed out as borrowed views of that word, so a
//! region set can never be applied to a different word state.

use crate::accent::is_vowel;

/// Names of the three suffix-legal regions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    /// Region after the first non-vowel following a vowel
    R1,
    /// R1 of R1
    R2,
    /// Spanish-specific vowel-driven region
    RV,
}

/// The three regions of one word state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Regions<'a> {
    word: &'a str,
    r1: usize,
    r2: usize,
    rv: usize,
}

impl<'a> Regions<'a> {
    /// Segment a lower-cased word
    ///
    /// Never fails: positions that do not exist collapse to the empty region
    /// anchored at the end of the word.
    pub fn new(word: &'a str) -> Self {
        let r1 = after_vowel_then_non_vowel(word, 0);
        let r2 = after_vowel_then_non_vowel(word, r1);
        let rv = rv_start(word);

        Self { word, r1, r2, rv }
    }

    /// The word these regions were computed from
    pub fn word(&self) -> &'a str {
        self.word
    }

    /// R1 text
    pub fn r1(&self) -> &'a str {
        &self.word[self.r1..]
    }

    /// R2 text
    pub fn r2(&self) -> &'a str {
        &self.word[self.r2..]
    }

    /// RV text
    pub fn rv(&self) -> &'a str {
        &self.word[self.rv..]
    }

    /// Text of a named region
    pub fn get(&self, region: Region) -> &'a str {
        &self.word[self.start(region)..]
    }

    /// Byte offset where a named region begins
    pub fn start(&self, region: Region) -> usize {
        match region {
            Region::R1 => self.r1,
            Region::R2 => self.r2,
            Region::RV => self.rv,
        }
    }
}

/// Offset just past the first non-vowel that follows a vowel, scanning from `from`
fn after_vowel_then_non_vowel(word: &str, from: usize) -> usize {
    let mut prev_is_vowel = false;

    for (idx, ch) in word[from..].char_indices() {
        let vowel = is_vowel(ch);
        if prev_is_vowel && !vowel {
            return from + idx + ch.len_utf8();
        }
        prev_is_vowel = vowel;
    }

    word.len()
}

/// Offset where RV begins
fn rv_start(word: &str) -> usize {
    let mut chars = word.char_indices();
    let (Some((_, first)), Some((_, second))) = (chars.next(), chars.next()) else {
        return word.len();
    };

    let anchor = if !is_vowel(second) {
        // Second letter is a consonant: after the next vowel
        chars.find(|&(_, ch)| is_vowel(ch))
    } else if is_vowel(first) {
        // Two leading vowels: after the next consonant
        chars.find(|&(_, ch)| !is_vowel(ch))
    } else {
        // Consonant-vowel: after the third letter
        chars.next()
    };

    anchor.map_or(word.len(), |(idx, ch)| idx + ch.len_utf8())
}
