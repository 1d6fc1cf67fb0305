//! Rack-only word finding
//!
//! Enumerates every sub-multiset of the rack, then every distinct ordering of
//! each, and keeps the orderings the dictionary knows. Work is exponential in
//! rack size, so the letter count is capped by [`SearchLimits`] and repeated
//! letters are collapsed before permuting.

use super::{MatchResult, SearchLimits, sort_by_rank};
use crate::core::{MIN_WORD_LENGTH, Word};
use crate::dictionary::WordStore;
use log::{debug, warn};
use rustc_hash::FxHashSet;

/// Advance `v` to the next lexicographic permutation
///
/// Returns `false` (leaving `v` sorted descending) once the last ordering is
/// passed. Starting from sorted input, every distinct ordering is visited once
/// even with repeated letters.
fn next_permutation(v: &mut [u8]) -> bool {
    if v.len() < 2 {
        return false;
    }
    let mut i = v.len() - 1;
    while i > 0 && v[i - 1] >= v[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }
    let mut j = v.len() - 1;
    while v[j] <= v[i - 1] {
        j -= 1;
    }
    v.swap(i - 1, j);
    v[i..].reverse();
    true
}

/// Visit every `k`-element index combination of `0..n` in lexicographic order
fn for_each_combination(n: usize, k: usize, mut visit: impl FnMut(&[usize])) {
    if k == 0 || k > n {
        return;
    }
    let mut idx: Vec<usize> = (0..k).collect();
    loop {
        visit(&idx);

        let mut i = k;
        while i > 0 && idx[i - 1] == i - 1 + n - k {
            i -= 1;
        }
        if i == 0 {
            return;
        }
        idx[i - 1] += 1;
        for j in i..k {
            idx[j] = idx[j - 1] + 1;
        }
    }
}

/// Stream each dictionary word formable from `letters`, shortest subsets first
///
/// Only literal letters count; blanks and other symbols are dropped. Each word
/// is reported once, as soon as it is found, so callers can stop early or show
/// partial results.
pub fn for_each_rack_word<'a>(
    store: &'a WordStore,
    letters: &str,
    min_length: usize,
    limits: SearchLimits,
    mut visit: impl FnMut(&'a Word),
) {
    if !store.is_loaded() {
        debug!("subset search on unloaded store");
        return;
    }

    let mut tiles: Vec<u8> = letters
        .bytes()
        .filter(u8::is_ascii_alphabetic)
        .map(|b| b.to_ascii_uppercase())
        .collect();
    if tiles.len() > limits.max_subset_letters {
        warn!(
            "subset search capped at {} letters, ignoring {}",
            limits.max_subset_letters,
            tiles.len() - limits.max_subset_letters
        );
        tiles.truncate(limits.max_subset_letters);
    }
    // Sorted tiles make every combination come out already sorted
    tiles.sort_unstable();

    let min_length = min_length.max(MIN_WORD_LENGTH);
    let max_length = tiles.len().min(store.longest());

    let mut seen_subsets: FxHashSet<Vec<u8>> = FxHashSet::default();
    let mut seen_words: FxHashSet<&'a str> = FxHashSet::default();
    let mut perm: Vec<u8> = Vec::with_capacity(tiles.len());

    for size in min_length..=max_length {
        for_each_combination(tiles.len(), size, |idx| {
            perm.clear();
            perm.extend(idx.iter().map(|&i| tiles[i]));
            if !seen_subsets.insert(perm.clone()) {
                return;
            }
            loop {
                if let Ok(candidate) = std::str::from_utf8(&perm)
                    && let Some(word) = store.get(candidate)
                    && seen_words.insert(word.text())
                {
                    visit(word);
                }
                if !next_permutation(&mut perm) {
                    break;
                }
            }
        });
    }
}

/// Find all words spelled from a subset of `letters`
///
/// Results are sorted by points, then length, then alphabetically.
///
/// # Examples
/// ```
/// use scrabbler::dictionary::loader::load_from_str;
/// use scrabbler::search::{SearchLimits, subset::find_words};
///
/// let store = load_from_str("cat\ncats\nact\ntact\ncatty").unwrap();
/// let words: Vec<String> = find_words(&store, "cat", 2, SearchLimits::default())
///     .into_iter()
///     .map(|r| r.word)
///     .collect();
/// assert_eq!(words, vec!["ACT", "CAT"]);
/// ```
#[must_use]
pub fn find_words(
    store: &WordStore,
    letters: &str,
    min_length: usize,
    limits: SearchLimits,
) -> Vec<MatchResult> {
    let mut results = Vec::new();
    for_each_rack_word(store, letters, min_length, limits, |word| {
        results.push(MatchResult::from_word(word));
    });
    sort_by_rank(&mut results);
    debug!("subset search {letters:?}: {} words", results.len());
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LetterBag, Rack};
    use crate::search::can_form;
    use crate::search::test_support::{store, words};

    #[test]
    fn next_permutation_visits_distinct_orderings() {
        let mut v = b"AAB".to_vec();
        let mut seen = vec![v.clone()];
        while next_permutation(&mut v) {
            seen.push(v.clone());
        }
        assert_eq!(seen, vec![b"AAB".to_vec(), b"ABA".to_vec(), b"BAA".to_vec()]);
    }

    #[test]
    fn combinations_count() {
        let mut count = 0;
        for_each_combination(5, 3, |_| count += 1);
        assert_eq!(count, 10);

        let mut empty = 0;
        for_each_combination(2, 3, |_| empty += 1);
        assert_eq!(empty, 0);
    }

    #[test]
    fn rack_cat_finds_act_and_cat() {
        let store = store(&["CAT", "CATS", "ACT", "TACT", "CATTY"]);
        let results = find_words(&store, "CAT", 2, SearchLimits::default());
        assert_eq!(words(&results), vec!["ACT", "CAT"]);
        assert!(results.iter().all(|r| r.points == 5 && r.start_offset.is_none()));
    }

    #[test]
    fn shorter_words_found_and_ranked() {
        let store = store(&["AT", "TA", "CAT", "ACT", "A"]);
        let results = find_words(&store, "cat", 1, SearchLimits::default());
        // Min length clamps to 2, so the single A never shows
        assert_eq!(words(&results), vec!["ACT", "CAT", "AT", "TA"]);
    }

    #[test]
    fn repeated_letters_need_repeated_tiles() {
        let store = store(&["TACT", "TAT", "CAT"]);
        let results = find_words(&store, "TACT", 2, SearchLimits::default());
        assert_eq!(words(&results), vec!["TACT", "CAT", "TAT"]);

        let results = find_words(&store, "TAC", 2, SearchLimits::default());
        assert_eq!(words(&results), vec!["CAT"]);
    }

    #[test]
    fn wildcards_are_ignored() {
        let store = store(&["CAT", "AT"]);
        let results = find_words(&store, "CA?", 2, SearchLimits::default());
        assert!(results.is_empty());
    }

    #[test]
    fn too_few_letters_is_empty() {
        let store = store(&["CAT"]);
        assert!(find_words(&store, "C", 2, SearchLimits::default()).is_empty());
        assert!(find_words(&store, "", 2, SearchLimits::default()).is_empty());
    }

    #[test]
    fn unloaded_store_is_empty() {
        let store = WordStore::new();
        assert!(find_words(&store, "CAT", 2, SearchLimits::default()).is_empty());
    }

    #[test]
    fn letter_cap_limits_search() {
        let store = store(&["AB", "CD"]);
        let limits = SearchLimits {
            max_subset_letters: 2,
        };
        let results = find_words(&store, "ABCD", 2, limits);
        assert_eq!(words(&results), vec!["AB"]);
    }

    #[test]
    fn streaming_reports_each_word_once() {
        let store = store(&["AA", "AAA"]);
        let mut seen = Vec::new();
        for_each_rack_word(&store, "AAAA", 2, SearchLimits::default(), |w| {
            seen.push(w.text().to_string());
        });
        assert_eq!(seen, vec!["AA", "AAA"]);
    }

    #[test]
    fn results_are_members_and_formable() {
        let store = store(&["QUIZ", "QI", "ZA", "AZ", "QUA", "AQUA", "ZIT"]);
        let rack = Rack::parse("QUIZAT");
        let results = find_words(&store, rack.literals(), 2, SearchLimits::default());
        assert!(!results.is_empty());
        for r in &results {
            assert!(store.contains(&r.word));
            assert!(can_form(&r.word, rack.letters(), 0, &LetterBag::new()));
        }
        let mut unique = words(&results);
        unique.dedup();
        assert_eq!(unique.len(), results.len());
    }

    #[test]
    fn deterministic() {
        let store = store(&["CAT", "ACT", "AT", "TA", "TACT"]);
        let first = find_words(&store, "TACT", 2, SearchLimits::default());
        let second = find_words(&store, "TACT", 2, SearchLimits::default());
        assert_eq!(first, second);
    }
}
