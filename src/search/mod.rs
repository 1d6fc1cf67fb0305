//! Word search algorithms
//!
//! Every search scans an immutable [`WordStore`](crate::dictionary::WordStore),
//! keeps no state between calls and returns a sorted, deduplicated `Vec`.

pub mod anagram;
pub mod anchor;
pub mod category;
mod engine;
pub mod filtered;
pub mod matcher;
pub mod subset;

pub use engine::Finder;
pub use filtered::Filters;
pub use matcher::can_form;

use crate::core::Word;
use std::cmp::Ordering;
use std::fmt;

/// Ceiling for searches that can otherwise return most of the vocabulary
pub const RESULT_CAP: usize = 200;

/// Tunable bounds for the exponential searches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Letters considered by rack-only subset search; extra letters are ignored
    pub max_subset_letters: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_subset_letters: crate::core::Rack::MAX_TILES,
        }
    }
}

/// A word found by a search
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatchResult {
    pub word: String,
    /// Value of the full word
    pub points: u32,
    /// Pattern slot of the first letter, for pattern-anchored results only
    pub start_offset: Option<usize>,
}

impl MatchResult {
    #[must_use]
    pub fn from_word(word: &Word) -> Self {
        Self {
            word: word.text().to_string(),
            points: word.points(),
            start_offset: None,
        }
    }

    #[must_use]
    pub fn anchored(word: &Word, start_offset: usize) -> Self {
        Self {
            start_offset: Some(start_offset),
            ..Self::from_word(word)
        }
    }

    /// Points descending, then length descending, then alphabetical
    #[must_use]
    pub fn cmp_rank(&self, other: &Self) -> Ordering {
        other
            .points
            .cmp(&self.points)
            .then_with(|| other.word.len().cmp(&self.word.len()))
            .then_with(|| self.word.cmp(&other.word))
    }

    /// Points descending, then alphabetical; no length tie-break
    #[must_use]
    pub fn cmp_points_then_word(&self, other: &Self) -> Ordering {
        other
            .points
            .cmp(&self.points)
            .then_with(|| self.word.cmp(&other.word))
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.word, self.points)?;
        if let Some(offset) = self.start_offset {
            write!(f, " @{offset}")?;
        }
        Ok(())
    }
}

/// Sort in rack/filter search order
pub fn sort_by_rank(results: &mut [MatchResult]) {
    results.sort_unstable_by(MatchResult::cmp_rank);
}

/// Sort in pattern search order
pub fn sort_by_points_then_word(results: &mut [MatchResult]) {
    results.sort_unstable_by(MatchResult::cmp_points_then_word);
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::core::Word;
    use crate::dictionary::WordStore;

    pub fn store(words: &[&str]) -> WordStore {
        WordStore::from_words(words.iter().map(|w| Word::new(*w).unwrap()))
    }

    pub fn words(results: &[super::MatchResult]) -> Vec<&str> {
        results.iter().map(|r| r.word.as_str()).collect()
    }
}
