//! Accent table and vowel classification
//!
//! Spanish orthography marks stress with an acute accent on one of the five
//! vowels. The diaeresis (`ü`) is not a stress mark and is never removed.

use alloc::string::String;

/// Acute-accented vowels and their plain counterparts
pub const ACCENT_TABLE: [(char, char); 5] = [
    ('á', 'a'),
    ('é', 'e'),
    ('í', 'i'),
    ('ó', 'o'),
    ('ú', 'u'),
];

/// Classification used by region segmentation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LetterClass {
    /// a, e, i, o, u, their acute forms, and ü
    Vowel,
    /// Any other character
    NonVowel,
}

impl LetterClass {
    /// Classify a (lower-case) character
    pub fn of(ch: char) -> Self {
        match ch {
            'a' | 'e' | 'i' | 'o' | 'u' | 'á' | 'é' | 'í' | 'ó' | 'ú' | 'ü' => LetterClass::Vowel,
            _ => LetterClass::NonVowel,
        }
    }
}

/// Check if a character is a vowel for segmentation purposes
#[inline]
pub fn is_vowel(ch: char) -> bool {
    LetterClass::of(ch) == LetterClass::Vowel
}

/// Map an acute-accented vowel to its plain form; other characters pass through
#[inline]
pub fn unaccent(ch: char) -> char {
    ACCENT_TABLE
        .iter()
        .find(|(accented, _)| *accented == ch)
        .map_or(ch, |&(_, plain)| plain)
}

/// Replace every á, é, í, ó, ú with a, e, i, o, u
pub fn strip_accents(text: &str) -> String {
    text.chars().map(unaccent).collect()
}

/// Check if text carries any acute accent from the table
pub fn has_acute_accent(text: &str) -> bool {
    text.chars().any(|ch| unaccent(ch) != ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vowel_classification() {
        for ch in "aeiouáéíóúü".chars() {
            assert!(is_vowel(ch), "{ch} should be a vowel");
        }
        for ch in "bcdñyzw ?1".chars() {
            assert!(!is_vowel(ch), "{ch} should not be a vowel");
        }
    }

    #[test]
    fn test_strip_accents() {
        assert_eq!(strip_accents("iéndo"), "iendo");
        assert_eq!(strip_accents("árbol"), "arbol");
        assert_eq!(strip_accents("canción"), "cancion");
        assert_eq!(strip_accents("ÁÉ"), "ÁÉ"); // upper case is not in the table
    }

    #[test]
    fn test_diaeresis_preserved() {
        assert_eq!(strip_accents("pingüino"), "pingüino");
        assert!(!has_acute_accent("averigüen"));
    }

    #[test]
    fn test_has_acute_accent() {
        assert!(has_acute_accent("está"));
        assert!(!has_acute_accent("esta"));
        assert!(!has_acute_accent(""));
    }
}
