//! Word list views
//!
//! Single-pass scans over the store for the study lists: words of a given
//! length, words holding certain letters, Q without U, and vowel-heavy words.

use super::{MatchResult, RESULT_CAP};
use crate::core::{LetterBag, Word};
use crate::dictionary::WordStore;
use log::debug;
use std::cmp::Ordering;

const VOWELS: &[u8] = b"AEIOU";

/// Share of a word's letters that are vowels (Y excluded)
#[must_use]
pub fn vowel_ratio(word: &Word) -> f64 {
    let vowels = word.bytes().iter().filter(|b| VOWELS.contains(b)).count();
    vowels as f64 / word.len() as f64
}

/// Shorter first, then alphabetical
fn by_length_then_word(a: &MatchResult, b: &MatchResult) -> Ordering {
    a.word
        .len()
        .cmp(&b.word.len())
        .then_with(|| a.word.cmp(&b.word))
}

fn collect(store: &WordStore, keep: impl Fn(&Word) -> bool) -> Vec<MatchResult> {
    if !store.is_loaded() {
        debug!("category query on unloaded store");
        return Vec::new();
    }
    store
        .iter()
        .filter(|w| keep(w))
        .map(MatchResult::from_word)
        .collect()
}

/// Words of exactly `length` letters, alphabetical
#[must_use]
pub fn by_length(store: &WordStore, length: usize) -> Vec<MatchResult> {
    let mut results = collect(store, |w| w.len() == length);
    results.sort_unstable_by(|a, b| a.word.cmp(&b.word));
    results
}

/// Words holding every letter of `letters` (with multiplicity), optionally
/// no longer than `max_length`; shortest first, then alphabetical
///
/// An empty letter set yields nothing.
#[must_use]
pub fn containing_letters(
    store: &WordStore,
    letters: &str,
    max_length: Option<usize>,
) -> Vec<MatchResult> {
    let wanted = LetterBag::from_letters(letters);
    if wanted.is_empty() {
        return Vec::new();
    }
    let mut results = collect(store, |w| {
        max_length.is_none_or(|max| w.len() <= max) && w.letters().contains_all(&wanted)
    });
    results.sort_unstable_by(by_length_then_word);
    results
}

/// Words with a Q that is never followed by U; shortest first, then alphabetical
#[must_use]
pub fn q_without_u(store: &WordStore) -> Vec<MatchResult> {
    let mut results = collect(store, |w| w.has_letter(b'Q') && !w.text().contains("QU"));
    results.sort_unstable_by(by_length_then_word);
    results
}

/// Words of at least `min_length` letters whose vowel share is at least
/// `min_ratio`
///
/// Highest ratio first, then shorter, then alphabetical; capped at
/// [`RESULT_CAP`].
#[must_use]
pub fn vowel_heavy(store: &WordStore, min_ratio: f64, min_length: usize) -> Vec<MatchResult> {
    if !store.is_loaded() {
        debug!("category query on unloaded store");
        return Vec::new();
    }

    let mut scored: Vec<(f64, &Word)> = store
        .iter()
        .filter(|w| w.len() >= min_length)
        .map(|w| (vowel_ratio(w), w))
        .filter(|(ratio, _)| *ratio >= min_ratio)
        .collect();

    scored.sort_unstable_by(|(ra, a), (rb, b)| {
        rb.total_cmp(ra)
            .then_with(|| a.len().cmp(&b.len()))
            .then_with(|| a.text().cmp(b.text()))
    });
    scored.truncate(RESULT_CAP);

    scored
        .into_iter()
        .map(|(_, w)| MatchResult::from_word(w))
        .collect()
}
