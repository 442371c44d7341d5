//! Static suffix tables, one per pipeline step
//!
//! Every table is plain ordered data. Within one set of alternatives the
//! longest suffix that fits inside the region wins; across rules the order of
//! the table decides.

pub mod pronoun;
pub mod residual;
pub mod standard;
pub mod verb;

use crate::region::{Region, Regions};

pub use pronoun::{PronounMatch, ENCLITIC_PRONOUNS, PRONOUN_HOST_ENDINGS};
pub use residual::{RESIDUAL_E_SUFFIXES, RESIDUAL_SUFFIXES};
pub use standard::STANDARD_RULES;
pub use verb::{OTHER_VERB_SUFFIX_GROUPS, PLAIN_E_VERB_SUFFIXES, Y_VERB_SUFFIXES};

/// A suffix rule: alternatives, the region they must lie in, and replacement text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixRule {
    /// Literal alternatives recognised by this rule
    pub suffixes: &'static [&'static str],
    /// Region the matched suffix must be contained in
    pub region: Region,
    /// Text appended after the suffix is deleted
    pub replacement: &'static str,
}

impl SuffixRule {
    /// Longest alternative that is a suffix of this rule's region
    pub fn longest_match(&self, regions: &Regions<'_>) -> Option<&'static str> {
        longest_suffix(regions.get(self.region), self.suffixes)
    }
}

/// Longest member of `suffixes` that `text` ends with
///
/// All candidates are suffixes of the same text, so the longest in bytes is
/// also the longest in characters.
pub fn longest_suffix(text: &str, suffixes: &'static [&'static str]) -> Option<&'static str> {
    suffixes
        .iter()
        .copied()
        .filter(|suffix| text.ends_with(suffix))
        .max_by_key(|suffix| suffix.len())
}
