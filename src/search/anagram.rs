//! Anagrams and extensions of a known word

use super::{MatchResult, sort_by_points_then_word};
use crate::core::LetterBag;
use crate::dictionary::WordStore;
use log::debug;

/// Other words using exactly the letters of `word`
///
/// The input itself is excluded. All anagrams share a point value, so the
/// order is effectively alphabetical.
#[must_use]
pub fn find_anagrams(store: &WordStore, word: &str) -> Vec<MatchResult> {
    if !store.is_loaded() {
        debug!("anagram search on unloaded store");
        return Vec::new();
    }

    let target = word.trim().to_ascii_uppercase();
    let letters = LetterBag::from_letters(&target);

    let mut results: Vec<MatchResult> = store
        .iter()
        .filter(|w| w.len() == target.len() && *w.letters() == letters && w.text() != target)
        .map(MatchResult::from_word)
        .collect();
    sort_by_points_then_word(&mut results);
    results
}

/// Longer words that contain `base` and whose other letters come from
/// `available`
///
/// Literal letters only; blanks in `available` are ignored. An empty base
/// yields nothing.
///
/// # Examples
/// ```
/// use scrabbler::dictionary::loader::load_from_str;
/// use scrabbler::search::anagram::find_extensions;
///
/// let store = load_from_str("cat\ncats\nscat\ncatty\nact").unwrap();
/// let words: Vec<String> = find_extensions(&store, "cat", "st")
///     .into_iter()
///     .map(|r| r.word)
///     .collect();
/// assert_eq!(words, vec!["CATS", "SCAT"]);
/// ```
#[must_use]
pub fn find_extensions(store: &WordStore, base: &str, available: &str) -> Vec<MatchResult> {
    if !store.is_loaded() {
        debug!("extension search on unloaded store");
        return Vec::new();
    }

    let base = base.trim().to_ascii_uppercase();
    if base.is_empty() {
        return Vec::new();
    }
    let pool = LetterBag::from_letters(available);

    let mut results: Vec<MatchResult> = store
        .iter()
        .filter(|w| w.len() > base.len() && w.text().contains(base.as_str()))
        .filter(|w| {
            let rest = w.text().replacen(base.as_str(), "", 1);
            pool.contains_all(&LetterBag::from_letters(&rest))
        })
        .map(MatchResult::from_word)
        .collect();
    sort_by_points_then_word(&mut results);
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::test_support::{store, words};

    #[test]
    fn anagrams_exclude_input() {
        let store = store(&["CAT", "ACT", "TAC", "CATS", "AT"]);
        assert_eq!(words(&find_anagrams(&store, "cat")), vec!["ACT", "TAC"]);
    }

    #[test]
    fn anagrams_respect_multiplicity() {
        let store = store(&["TACT", "CATS", "SCAT"]);
        assert_eq!(find_anagrams(&store, "TACS").len(), 2);
        assert!(find_anagrams(&store, "TACC").is_empty());
    }

    #[test]
    fn anagrams_of_unknown_word() {
        let store = store(&["STAR", "RATS", "ARTS"]);
        assert_eq!(words(&find_anagrams(&store, "tsar")), vec!["ARTS", "RATS", "STAR"]);
    }

    #[test]
    fn extensions_need_available_letters() {
        let store = store(&["CAT", "CATS", "SCAT", "CATTY", "TACT"]);
        assert_eq!(words(&find_extensions(&store, "cat", "st")), vec!["CATS", "SCAT"]);
        // CATTY scores 10 and sorts first
        assert_eq!(
            words(&find_extensions(&store, "cat", "sty")),
            vec!["CATTY", "CATS", "SCAT"]
        );
        assert!(find_extensions(&store, "cat", "").is_empty());
    }

    #[test]
    fn extensions_ignore_wildcards() {
        let store = store(&["CATS"]);
        assert!(find_extensions(&store, "cat", "?").is_empty());
    }

    #[test]
    fn extensions_must_be_longer() {
        let store = store(&["CAT"]);
        assert!(find_extensions(&store, "cat", "xyz").is_empty());
        assert!(find_extensions(&store, "", "cat").is_empty());
    }

    #[test]
    fn unloaded_store_is_empty() {
        let store = WordStore::new();
        assert!(find_anagrams(&store, "cat").is_empty());
        assert!(find_extensions(&store, "cat", "s").is_empty());
    }
}
