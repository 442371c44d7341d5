//! Suffix-stripping steps
//!
//! Each step looks at one region set and either produces a new word or
//! reports that nothing applied. Steps never mutate the word in place.
//!
//! Outer steps (pronoun, standard/verb, residual) each get regions computed
//! from the word as it stands when the step starts. The two verb sub-steps
//! share the region set of the standard step they fall back from.

use alloc::borrow::ToOwned;
use alloc::string::String;

use crate::accent::strip_accents;
use crate::region::Regions;
use crate::tables::{
    longest_suffix, PronounMatch, OTHER_VERB_SUFFIX_GROUPS, PLAIN_E_VERB_SUFFIXES,
    RESIDUAL_E_SUFFIXES, RESIDUAL_SUFFIXES, STANDARD_RULES, Y_VERB_SUFFIXES,
};

/// Result of running one step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The step rewrote the word
    Applied(String),
    /// No rule of the step fired
    NotApplied,
}

impl StepOutcome {
    /// Check if the step rewrote the word
    pub fn is_applied(&self) -> bool {
        matches!(self, StepOutcome::Applied(_))
    }

    /// Run `next` only if this step did not apply
    pub fn or_else<F>(self, next: F) -> StepOutcome
    where
        F: FnOnce() -> StepOutcome,
    {
        match self {
            StepOutcome::Applied(word) => StepOutcome::Applied(word),
            StepOutcome::NotApplied => next(),
        }
    }

    /// The rewritten word, or `current` unchanged
    pub fn into_word(self, current: &str) -> String {
        match self {
            StepOutcome::Applied(word) => word,
            StepOutcome::NotApplied => current.to_owned(),
        }
    }
}

/// Drop `removed` trailing bytes of `word` and append `replacement`
fn replace_tail(word: &str, removed: usize, replacement: &str) -> String {
    let keep = &word[..word.len() - removed];
    let mut out = String::with_capacity(keep.len() + replacement.len());
    out.push_str(keep);
    out.push_str(replacement);
    out
}

/// Step 0: remove an enclitic pronoun after a gerund or infinitive
///
/// The verb ending stays but loses its acute accent
/// (`haciéndola` -> `haciendo`).
pub fn remove_pronoun(regions: &Regions<'_>) -> StepOutcome {
    let word = regions.word();
    let Some(found) = PronounMatch::longest_in(regions.rv()) else {
        return StepOutcome::NotApplied;
    };

    let head = &word[..word.len() - found.byte_len()];
    if found.ending == "yendo" && !head.ends_with('u') {
        return StepOutcome::NotApplied;
    }

    let mut out = String::from(head);
    out.push_str(&strip_accents(found.ending));
    StepOutcome::Applied(out)
}

/// Step 1: standard suffixes, first matching rule in table order
pub fn remove_standard_suffix(regions: &Regions<'_>) -> StepOutcome {
    let word = regions.word();

    STANDARD_RULES
        .iter()
        .find_map(|rule| {
            rule.longest_match(regions)
                .map(|suffix| replace_tail(word, suffix.len(), rule.replacement))
        })
        .map_or(StepOutcome::NotApplied, StepOutcome::Applied)
}

/// Step 2a: verb suffixes beginning with `y`, deleted only after `u`
///
/// The `u` itself may lie outside RV.
pub fn remove_y_verb_suffix(regions: &Regions<'_>) -> StepOutcome {
    let word = regions.word();
    let Some(suffix) = longest_suffix(regions.rv(), Y_VERB_SUFFIXES) else {
        return StepOutcome::NotApplied;
    };

    let head = &word[..word.len() - suffix.len()];
    if head.ends_with('u') {
        StepOutcome::Applied(String::from(head))
    } else {
        StepOutcome::NotApplied
    }
}

/// Step 2b: remaining verb suffixes
///
/// Length classes are tried longest first. Failing those, `en`, `es`, `éis`
/// and `emos` are removed, together with the `u` of a now-final `gu`
/// (the `gu` need not be in RV).
pub fn remove_other_verb_suffix(regions: &Regions<'_>) -> StepOutcome {
    let word = regions.word();
    let rv = regions.rv();

    if let Some(suffix) = OTHER_VERB_SUFFIX_GROUPS
        .iter()
        .find_map(|group| longest_suffix(rv, group))
    {
        return StepOutcome::Applied(replace_tail(word, suffix.len(), ""));
    }

    let Some(suffix) = longest_suffix(rv, PLAIN_E_VERB_SUFFIXES) else {
        return StepOutcome::NotApplied;
    };

    let head = &word[..word.len() - suffix.len()];
    let head = if head.ends_with("gu") {
        &head[..head.len() - 1]
    } else {
        head
    };
    StepOutcome::Applied(String::from(head))
}

/// Steps 2a then 2b on one shared region set
pub fn remove_verb_suffix(regions: &Regions<'_>) -> StepOutcome {
    remove_y_verb_suffix(regions).or_else(|| remove_other_verb_suffix(regions))
}

/// Step 1, falling back to the verb steps when no standard suffix matched
pub fn remove_suffix(regions: &Regions<'_>) -> StepOutcome {
    remove_standard_suffix(regions).or_else(|| remove_verb_suffix(regions))
}

/// Step 3: residual vowels
///
/// A final `e` preceded by `gu`, with the `u` in RV, takes the `u` with it.
pub fn remove_residual_suffix(regions: &Regions<'_>) -> StepOutcome {
    let word = regions.word();
    let rv = regions.rv();

    if let Some(suffix) = longest_suffix(rv, RESIDUAL_SUFFIXES) {
        return StepOutcome::Applied(replace_tail(word, suffix.len(), ""));
    }

    let Some(suffix) = longest_suffix(rv, RESIDUAL_E_SUFFIXES) else {
        return StepOutcome::NotApplied;
    };

    let head = &word[..word.len() - suffix.len()];
    let removed = if suffix.starts_with('u') && head.ends_with('g') {
        suffix.len()
    } else {
        suffix.trim_start_matches('u').len()
    };
    StepOutcome::Applied(replace_tail(word, removed, ""))
}
