//! Prefix / suffix / substring search, with or without a rack
//!
//! Without rack tiles this is a plain dictionary filter, capped at
//! [`RESULT_CAP`]. With tiles, letters matched by a filter count as already on
//! the board: they form the free pool of [`can_form`], so they are never
//! charged to the rack.

use super::{MatchResult, RESULT_CAP, can_form, sort_by_rank};
use crate::core::{LetterBag, MIN_WORD_LENGTH, Rack, Word};
use crate::dictionary::WordStore;
use log::debug;

/// Optional literal constraints on a word's spelling
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    starts_with: Option<String>,
    ends_with: Option<String>,
    contains: Option<String>,
}

/// Uppercase a filter, treating blank input as absent
fn normalize(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_ascii_uppercase)
}

impl Filters {
    /// Build filters; empty strings count as unset
    ///
    /// # Examples
    /// ```
    /// use scrabbler::search::Filters;
    ///
    /// let filters = Filters::new(Some("qu"), None, Some(""));
    /// assert_eq!(filters.starts_with(), Some("QU"));
    /// assert_eq!(filters.contains(), None);
    /// ```
    #[must_use]
    pub fn new(starts_with: Option<&str>, ends_with: Option<&str>, contains: Option<&str>) -> Self {
        Self {
            starts_with: normalize(starts_with),
            ends_with: normalize(ends_with),
            contains: normalize(contains),
        }
    }

    #[must_use]
    pub fn starts_with(&self) -> Option<&str> {
        self.starts_with.as_deref()
    }

    #[must_use]
    pub fn ends_with(&self) -> Option<&str> {
        self.ends_with.as_deref()
    }

    #[must_use]
    pub fn contains(&self) -> Option<&str> {
        self.contains.as_deref()
    }

    /// True when no filter is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.starts_with.is_none() && self.ends_with.is_none() && self.contains.is_none()
    }

    /// Does `text` (uppercase) satisfy every set filter?
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        self.starts_with.as_deref().is_none_or(|p| text.starts_with(p))
            && self.ends_with.as_deref().is_none_or(|s| text.ends_with(s))
            && self.contains.as_deref().is_none_or(|c| text.contains(c))
    }

    /// Letters of every set filter, counted as already placed
    #[must_use]
    pub fn free_letters(&self) -> LetterBag {
        let mut bag = LetterBag::new();
        for part in [&self.starts_with, &self.ends_with, &self.contains]
            .into_iter()
            .flatten()
        {
            for b in part.bytes() {
                bag.add(b);
            }
        }
        bag
    }
}

/// Search the dictionary with filters and an optional rack
///
/// - Empty rack, some filter set: every word passing the filters, best
///   [`RESULT_CAP`] kept.
/// - Rack present: words passing the filters that the rack (plus blanks and
///   the filter letters) can spell.
///
/// Sorted by points, then length, then alphabetically.
#[must_use]
pub fn find_with_filters(
    store: &WordStore,
    rack: &Rack,
    min_length: usize,
    filters: &Filters,
) -> Vec<MatchResult> {
    if !store.is_loaded() {
        debug!("filtered search on unloaded store");
        return Vec::new();
    }

    let min_length = min_length.max(MIN_WORD_LENGTH);
    let fits = |w: &&Word| w.len() >= min_length && filters.matches(w.text());

    if rack.is_empty() {
        if filters.is_empty() {
            return Vec::new();
        }
        let mut results: Vec<MatchResult> =
            store.iter().filter(fits).map(MatchResult::from_word).collect();
        sort_by_rank(&mut results);
        if results.len() > RESULT_CAP {
            debug!("filter-only search truncated from {} words", results.len());
            results.truncate(RESULT_CAP);
        }
        return results;
    }

    if filters.is_empty() && rack.len() < min_length {
        return Vec::new();
    }

    let free = filters.free_letters();
    let mut results: Vec<MatchResult> = store
        .iter()
        .filter(fits)
        .filter(|w| can_form(w.bytes(), rack.letters(), rack.wildcards(), &free))
        .map(MatchResult::from_word)
        .collect();
    sort_by_rank(&mut results);
    debug!("filtered search {rack}: {} words", results.len());
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::test_support::{store, words};

    #[test]
    fn filters_normalize_and_match() {
        let filters = Filters::new(Some("c"), Some("s"), Some("at"));
        assert!(filters.matches("CATS"));
        assert!(!filters.matches("CAT"));
        assert!(!filters.matches("COTS"));
        assert!(Filters::new(None, Some("  "), None).is_empty());
    }

    #[test]
    fn free_letters_combines_all_filters() {
        let filters = Filters::new(Some("qu"), Some("z"), Some("i"));
        assert_eq!(filters.free_letters(), LetterBag::from_letters("QUZI"));
    }

    #[test]
    fn filter_only_mode() {
        let store = store(&["QUIZ", "QUA", "QI", "AQUA", "ZA"]);
        let results = find_with_filters(&store, &Rack::default(), 2, &Filters::new(Some("qu"), None, None));
        assert_eq!(words(&results), vec!["QUIZ", "QUA"]);
    }

    #[test]
    fn filter_only_no_match_is_empty() {
        let store = store(&["CAT", "ACT", "QUIZ"]);
        let results = find_with_filters(&store, &Rack::default(), 2, &Filters::new(Some("qi"), None, None));
        assert!(results.is_empty());
    }

    fn every_word_of(prefix: &[u8]) -> WordStore {
        let mut all = Vec::new();
        for a in b'A'..=b'Z' {
            for b in b'A'..=b'Z' {
                let mut text = prefix.to_vec();
                text.extend([a, b]);
                all.push(Word::new(String::from_utf8(text).unwrap()).unwrap());
            }
        }
        WordStore::from_words(all)
    }

    #[test]
    fn filter_only_under_cap_returns_all() {
        let store = every_word_of(b"");
        // A? and ?A, with AA counted once
        let results = find_with_filters(&store, &Rack::default(), 2, &Filters::new(None, None, Some("a")));
        assert_eq!(results.len(), 51);
    }

    #[test]
    fn filter_only_is_capped() {
        let store = every_word_of(b"S");
        let capped = find_with_filters(&store, &Rack::default(), 2, &Filters::new(Some("s"), None, None));
        assert_eq!(capped.len(), RESULT_CAP);
        // The cap keeps the best-ranked words: SQQ, SQZ, SZQ and SZZ are worth 21
        assert_eq!(words(&capped[..4]), vec!["SQQ", "SQZ", "SZQ", "SZZ"]);
    }

    #[test]
    fn empty_rack_and_filters_is_empty() {
        let store = store(&["CAT"]);
        assert!(find_with_filters(&store, &Rack::default(), 2, &Filters::default()).is_empty());
    }

    #[test]
    fn short_rack_without_filters_is_empty() {
        let store = store(&["CAT", "A"]);
        assert!(find_with_filters(&store, &Rack::parse("c"), 2, &Filters::default()).is_empty());
    }

    #[test]
    fn combined_mode_uses_wildcards() {
        let store = store(&["CAT", "CATS", "ACT", "TACT"]);
        let results = find_with_filters(&store, &Rack::parse("CA?"), 2, &Filters::default());
        assert_eq!(words(&results), vec!["ACT", "CAT"]);
        for r in &results {
            assert!(can_form(&r.word, &LetterBag::from_letters("CA"), 1, &LetterBag::new()));
        }
    }

    #[test]
    fn combined_mode_filter_letters_are_free() {
        let store = store(&["CATS", "CAT", "SCAT"]);
        // The S comes from the suffix filter, not from the rack
        let results = find_with_filters(&store, &Rack::parse("CAT"), 2, &Filters::new(None, Some("s"), None));
        assert_eq!(words(&results), vec!["CATS"]);
    }

    #[test]
    fn combined_mode_respects_min_length() {
        let store = store(&["AT", "CAT"]);
        let results = find_with_filters(&store, &Rack::parse("CAT"), 3, &Filters::default());
        assert_eq!(words(&results), vec!["CAT"]);
    }

    #[test]
    fn unloaded_store_is_empty() {
        let store = WordStore::new();
        let results = find_with_filters(&store, &Rack::default(), 2, &Filters::new(Some("a"), None, None));
        assert!(results.is_empty());
    }
}
