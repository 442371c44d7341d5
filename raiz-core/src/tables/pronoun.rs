//! Enclitic pronouns and the verb endings that may host them

use super::longest_suffix;

/// Gerund and infinitive endings an enclitic pronoun may follow
///
/// `yendo` is only a verb ending after `u`; the `u` may sit outside RV, which
/// is why both spellings are listed.
pub const PRONOUN_HOST_ENDINGS: &[&str] = &[
    "iéndo", "iendo", "ándo", "ando", "ár", "ar", "ér", "er", "ír", "ir", "uyendo", "yendo",
];

/// Enclitic pronouns
pub const ENCLITIC_PRONOUNS: &[&str] = &[
    "me", "se", "sela", "selo", "selas", "selos", "la", "le", "lo", "las", "les", "los", "nos",
];

/// A verb ending followed by an enclitic pronoun
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PronounMatch {
    /// Verb ending, kept by the pronoun step
    pub ending: &'static str,
    /// Pronoun, deleted by the pronoun step
    pub pronoun: &'static str,
}

impl PronounMatch {
    /// Byte length of ending plus pronoun
    pub fn byte_len(&self) -> usize {
        self.ending.len() + self.pronoun.len()
    }

    /// Find the longest `{ending}{pronoun}` suffix of `text`
    pub fn longest_in(text: &str) -> Option<Self> {
        ENCLITIC_PRONOUNS
            .iter()
            .copied()
            .filter_map(|pronoun| {
                let host = text.strip_suffix(pronoun)?;
                let ending = longest_suffix(host, PRONOUN_HOST_ENDINGS)?;
                Some(PronounMatch { ending, pronoun })
            })
            .max_by_key(PronounMatch::byte_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gerund_with_pronoun() {
        let found = PronounMatch::longest_in("iéndola").unwrap();
        assert_eq!(found.ending, "iéndo");
        assert_eq!(found.pronoun, "la");
        assert_eq!(found.byte_len(), "iéndola".len());
    }

    #[test]
    fn test_longest_pronoun_wins() {
        let found = PronounMatch::longest_in("iendoselos").unwrap();
        assert_eq!(found.ending, "iendo");
        assert_eq!(found.pronoun, "selos");
    }

    #[test]
    fn test_infinitive_with_pronoun() {
        let found = PronounMatch::longest_in("tarlas").unwrap();
        assert_eq!(found.ending, "ar");
        assert_eq!(found.pronoun, "las");
    }

    #[test]
    fn test_uyendo_preferred_over_yendo() {
        let found = PronounMatch::longest_in("uyendolo").unwrap();
        assert_eq!(found.ending, "uyendo");
        assert_eq!(PronounMatch::longest_in("yendolo").unwrap().ending, "yendo");
    }

    #[test]
    fn test_no_host_ending() {
        assert_eq!(PronounMatch::longest_in("melo"), None);
        assert_eq!(PronounMatch::longest_in("casa"), None);
        assert_eq!(PronounMatch::longest_in(""), None);
    }
}
