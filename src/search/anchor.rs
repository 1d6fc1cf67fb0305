//! Pattern-anchored search
//!
//! Fits dictionary words onto a row of slots. A word must cover every pinned
//! slot with the pinned letter, stay off forbidden slots, and draw the letters
//! for its free slots from the rack. Each word is tried at every start offset
//! from the first open slot up to the first pinned slot; the first offset that
//! works is kept.

use super::{MatchResult, can_form, sort_by_points_then_word};
use crate::core::{Anchors, LetterBag, Pattern, Rack, Slot, Word};
use crate::dictionary::WordStore;
use log::{debug, trace};
use rand::Rng;
use rand::prelude::IndexedRandom;

/// First start offset at which `word` fits `pattern` with `rack`
///
/// `needed` is scratch space for the letters the rack must supply.
fn place(
    word: &Word,
    slots: &[Slot],
    anchors: &Anchors,
    rack: &Rack,
    needed: &mut Vec<u8>,
) -> Option<usize> {
    let no_free = LetterBag::new();

    'offsets: for start in anchors.first_open..=anchors.first_pinned {
        let end = start + word.len() - 1;
        if end < anchors.last_pinned || end > anchors.last_open {
            continue;
        }

        needed.clear();
        for (i, &letter) in word.bytes().iter().enumerate() {
            match slots[start + i] {
                Slot::Forbidden => continue 'offsets,
                Slot::Pinned(pin) if pin != letter => continue 'offsets,
                Slot::Pinned(_) => {}
                Slot::Free => needed.push(letter),
            }
        }

        // Pinned letters never reach `needed`, so there is no free pool here
        if can_form(needed.as_slice(), rack.letters(), rack.wildcards(), &no_free) {
            return Some(start);
        }
    }
    None
}

/// Every word that fits the pattern, unsorted, one entry per word
///
/// Single pass over the vocabulary. Empty when the store is unloaded or the
/// pattern pins nothing.
#[must_use]
pub fn pattern_candidates(store: &WordStore, pattern: &Pattern, rack: &Rack) -> Vec<MatchResult> {
    if !store.is_loaded() {
        debug!("pattern search on unloaded store");
        return Vec::new();
    }
    let Some(anchors) = pattern.anchors() else {
        debug!("pattern {pattern} has no pinned slot");
        return Vec::new();
    };

    let min_length = anchors.min_length();
    let max_length = anchors.max_length();
    let mut needed = Vec::with_capacity(max_length);

    store
        .iter()
        .filter(|w| (min_length..=max_length).contains(&w.len()))
        .filter_map(|w| {
            let start = place(w, pattern.slots(), &anchors, rack, &mut needed)?;
            trace!("{} fits {pattern} at {start}", w.text());
            Some(MatchResult::anchored(w, start))
        })
        .collect()
}

/// All words that fit `pattern` using tiles from `rack`
///
/// Sorted by points descending, then alphabetically (no length tie-break).
///
/// # Examples
/// ```
/// use scrabbler::core::{Pattern, Rack};
/// use scrabbler::dictionary::loader::load_from_str;
/// use scrabbler::search::anchor::find_pattern_matches;
///
/// let store = load_from_str("cat").unwrap();
/// let pattern = Pattern::parse("..A..").unwrap();
/// let results = find_pattern_matches(&store, &pattern, &Rack::parse("ctbt"));
/// assert_eq!(results[0].word, "CAT");
/// assert_eq!(results[0].start_offset, Some(1));
/// ```
#[must_use]
pub fn find_pattern_matches(store: &WordStore, pattern: &Pattern, rack: &Rack) -> Vec<MatchResult> {
    let mut results = pattern_candidates(store, pattern, rack);
    sort_by_points_then_word(&mut results);
    debug!("pattern search {pattern} / {rack}: {} words", results.len());
    results
}

/// One uniformly random word from the same candidates as [`find_pattern_matches`]
#[must_use]
pub fn random_pattern_match<R: Rng + ?Sized>(
    store: &WordStore,
    pattern: &Pattern,
    rack: &Rack,
    rng: &mut R,
) -> Option<MatchResult> {
    pattern_candidates(store, pattern, rack).choose(rng).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::test_support::{store, words};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn pattern(text: &str) -> Pattern {
        Pattern::parse(text).unwrap()
    }

    /// Every pinned slot matches and no forbidden slot is covered
    fn assert_fidelity(pattern: &Pattern, results: &[MatchResult]) {
        for r in results {
            let start = r.start_offset.unwrap();
            let end = start + r.word.len() - 1;
            for (p, slot) in pattern.slots().iter().enumerate() {
                match slot {
                    Slot::Pinned(letter) => {
                        assert!(p >= start && p <= end, "{} misses pin {p}", r.word);
                        assert_eq!(r.word.as_bytes()[p - start], *letter);
                    }
                    Slot::Forbidden => {
                        assert!(p < start || p > end, "{} covers forbidden {p}", r.word);
                    }
                    Slot::Free => {}
                }
            }
        }
    }

    #[test]
    fn single_pin_anchor() {
        let store = store(&["CAT"]);
        let results = find_pattern_matches(&store, &pattern("..A.."), &Rack::parse("CTBT"));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].word, "CAT");
        assert_eq!(results[0].points, 5);
        assert_eq!(results[0].start_offset, Some(1));
    }

    #[test]
    fn no_pins_is_empty() {
        let store = store(&["CAT"]);
        assert!(find_pattern_matches(&store, &pattern("....."), &Rack::parse("CAT")).is_empty());
    }

    #[test]
    fn unloaded_store_is_empty() {
        let store = WordStore::new();
        assert!(find_pattern_matches(&store, &pattern(".A."), &Rack::parse("CT")).is_empty());
    }

    #[test]
    fn pinned_letters_are_not_charged_to_rack() {
        let store = store(&["TACT"]);
        // Rack has one T; the pinned T supplies the other
        let results = find_pattern_matches(&store, &pattern("...T"), &Rack::parse("TAC"));
        assert_eq!(words(&results), vec!["TACT"]);
        assert_eq!(results[0].start_offset, Some(0));
    }

    #[test]
    fn pin_mismatch_rejected() {
        let store = store(&["CAT"]);
        assert!(find_pattern_matches(&store, &pattern(".O."), &Rack::parse("CT")).is_empty());
    }

    #[test]
    fn forbidden_slot_blocks_placement() {
        let store = store(&["CAT", "AT"]);
        // C would have to land on the forbidden slot
        let results = find_pattern_matches(&store, &pattern("#A.."), &Rack::parse("CT"));
        assert_eq!(words(&results), vec!["AT"]);
        assert_eq!(results[0].start_offset, Some(1));
    }

    #[test]
    fn forbidden_slot_inside_span() {
        let store = store(&["CATS"]);
        assert!(find_pattern_matches(&store, &pattern(".A#S"), &Rack::parse("CT")).is_empty());
    }

    #[test]
    fn word_must_span_all_pins() {
        let store = store(&["AT", "CAT", "CATS"]);
        let results = find_pattern_matches(&store, &pattern(".A.S."), &Rack::parse("CT"));
        assert_eq!(words(&results), vec!["CATS"]);
        assert_eq!(results[0].start_offset, Some(0));
    }

    #[test]
    fn word_cannot_overrun_open_span() {
        let store = store(&["CATTY"]);
        assert!(find_pattern_matches(&store, &pattern(".A..#"), &Rack::parse("CTTY")).is_empty());
    }

    #[test]
    fn first_valid_offset_wins() {
        let store = store(&["AA"]);
        // AA fits at 0 (A free, A pinned) and at 1 (A pinned, A free)
        let results = find_pattern_matches(&store, &pattern(".A."), &Rack::parse("A"));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].start_offset, Some(0));
    }

    #[test]
    fn wildcards_cover_free_slots() {
        let store = store(&["QUIZ"]);
        let results = find_pattern_matches(&store, &pattern("Q..."), &Rack::parse("UI?"));
        assert_eq!(words(&results), vec!["QUIZ"]);
        assert_eq!(results[0].points, 22);
        assert!(find_pattern_matches(&store, &pattern("Q..."), &Rack::parse("UI")).is_empty());
    }

    #[test]
    fn sorted_by_points_then_word_without_length_tiebreak() {
        // AD and EAT are both worth 3; alphabetical order puts AD first
        let store = store(&["EAT", "AD", "ZA"]);
        let results = find_pattern_matches(&store, &pattern("..A.."), &Rack::parse("DETZ"));
        assert_eq!(words(&results), vec!["ZA", "AD", "EAT"]);
        assert_fidelity(&pattern("..A.."), &results);
    }

    #[test]
    fn fidelity_over_mixed_pattern() {
        let store = store(&["CAT", "CATS", "SCAT", "TACT", "ACT", "AT", "TA", "CATTY"]);
        let p = pattern("#.A..T#..");
        let results = find_pattern_matches(&store, &p, &Rack::parse("CTSY??"));
        assert_fidelity(&p, &results);
        for r in &results {
            assert!(store.contains(&r.word));
        }
    }

    #[test]
    fn random_match_comes_from_candidates() {
        let store = store(&["CAT", "BAT", "HAT", "RAT"]);
        let p = pattern(".A.");
        let rack = Rack::parse("??");
        let all = find_pattern_matches(&store, &p, &rack);
        assert_eq!(all.len(), 4);

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let pick = random_pattern_match(&store, &p, &rack, &mut rng).unwrap();
            assert!(all.contains(&pick));
        }
    }

    #[test]
    fn random_match_none_without_candidates() {
        let store = store(&["CAT"]);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(random_pattern_match(&store, &pattern("..."), &Rack::parse("CAT"), &mut rng).is_none());
    }
}
