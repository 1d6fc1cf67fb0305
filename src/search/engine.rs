//! Main word finder interface

use super::{Filters, MatchResult, SearchLimits, anagram, anchor, category, filtered, subset};
use crate::core::{Pattern, Rack};
use crate::dictionary::WordStore;

/// Word finder over a loaded vocabulary
///
/// Borrows the store and holds no other state, so one `Finder` can serve any
/// number of concurrent callers.
#[derive(Debug, Clone, Copy)]
pub struct Finder<'a> {
    store: &'a WordStore,
    limits: SearchLimits,
}

impl<'a> Finder<'a> {
    /// Create a finder with default limits
    #[must_use]
    pub fn new(store: &'a WordStore) -> Self {
        Self::with_limits(store, SearchLimits::default())
    }

    #[must_use]
    pub const fn with_limits(store: &'a WordStore, limits: SearchLimits) -> Self {
        Self { store, limits }
    }

    #[must_use]
    pub const fn store(&self) -> &'a WordStore {
        self.store
    }

    #[must_use]
    pub const fn limits(&self) -> SearchLimits {
        self.limits
    }

    /// Whether the vocabulary is available; searches return nothing until it is
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.store.is_loaded()
    }

    /// Membership test
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.store.contains(word)
    }

    /// Point value of any string
    #[must_use]
    pub fn score_of(&self, word: &str) -> u32 {
        self.store.score_of(word)
    }

    /// Words spelled from the rack's literal letters; blanks are not used
    ///
    /// The letter count is bounded by [`SearchLimits::max_subset_letters`]
    /// rather than the tile limit of a game rack.
    #[must_use]
    pub fn find_words(&self, rack: &str, min_length: usize) -> Vec<MatchResult> {
        subset::find_words(self.store, rack, min_length, self.limits)
    }

    /// Dictionary scan with prefix/suffix/substring filters and an optional rack
    #[must_use]
    pub fn find_with_filters(
        &self,
        rack: &str,
        min_length: usize,
        filters: &Filters,
    ) -> Vec<MatchResult> {
        filtered::find_with_filters(self.store, &Rack::parse(rack), min_length, filters)
    }

    /// Words that fit the slot pattern using the rack
    #[must_use]
    pub fn find_pattern_matches(&self, pattern: &Pattern, rack: &str) -> Vec<MatchResult> {
        anchor::find_pattern_matches(self.store, pattern, &Rack::parse(rack))
    }

    /// One random word from the pattern's full candidate set
    #[must_use]
    pub fn random_pattern_match(&self, pattern: &Pattern, rack: &str) -> Option<MatchResult> {
        self.random_pattern_match_with(pattern, rack, &mut rand::rng())
    }

    /// As [`Finder::random_pattern_match`], with a caller-supplied generator
    pub fn random_pattern_match_with<R: rand::Rng + ?Sized>(
        &self,
        pattern: &Pattern,
        rack: &str,
        rng: &mut R,
    ) -> Option<MatchResult> {
        anchor::random_pattern_match(self.store, pattern, &Rack::parse(rack), rng)
    }

    #[must_use]
    pub fn find_anagrams(&self, word: &str) -> Vec<MatchResult> {
        anagram::find_anagrams(self.store, word)
    }

    #[must_use]
    pub fn find_extensions(&self, base: &str, available: &str) -> Vec<MatchResult> {
        anagram::find_extensions(self.store, base, available)
    }

    #[must_use]
    pub fn words_of_length(&self, length: usize) -> Vec<MatchResult> {
        category::by_length(self.store, length)
    }

    #[must_use]
    pub fn words_containing(&self, letters: &str, max_length: Option<usize>) -> Vec<MatchResult> {
        category::containing_letters(self.store, letters, max_length)
    }

    #[must_use]
    pub fn q_without_u(&self) -> Vec<MatchResult> {
        category::q_without_u(self.store)
    }

    #[must_use]
    pub fn vowel_heavy(&self, min_ratio: f64, min_length: usize) -> Vec<MatchResult> {
        category::vowel_heavy(self.store, min_ratio, min_length)
    }
}
