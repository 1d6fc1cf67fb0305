//! Multiset formability
//!
//! The single primitive every rack-aware search reduces to.

use crate::core::LetterBag;

/// Can `target` be spelled from a free pool, a rack and some blanks?
///
/// Each letter is taken from `free` first, then from `rack`, and only then
/// paid for with a blank. The pools are copied, so the caller's bags are
/// untouched. Returns `false` as soon as a letter cannot be covered.
///
/// # Examples
/// ```
/// use scrabbler::core::LetterBag;
/// use scrabbler::search::can_form;
///
/// let rack = LetterBag::from_letters("CA");
/// let none = LetterBag::new();
/// assert!(can_form("CAT", &rack, 1, &none));
/// assert!(!can_form("CAT", &rack, 0, &none));
/// ```
#[must_use]
pub fn can_form(
    target: impl AsRef<[u8]>,
    rack: &LetterBag,
    wildcards: usize,
    free: &LetterBag,
) -> bool {
    let mut free = *free;
    let mut rack = *rack;
    let mut wildcards = wildcards;

    for &letter in target.as_ref() {
        if free.take(letter) || rack.take(letter) {
            continue;
        }
        if wildcards == 0 {
            return false;
        }
        wildcards -= 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bag(s: &str) -> LetterBag {
        LetterBag::from_letters(s)
    }

    #[test]
    fn empty_target_always_formable() {
        assert!(can_form("", &LetterBag::new(), 0, &LetterBag::new()));
    }

    #[test]
    fn wildcard_fills_missing_letter() {
        assert!(can_form("CAT", &bag("CA"), 1, &LetterBag::new()));
        assert!(!can_form("CAT", &bag("CA"), 0, &LetterBag::new()));
    }

    #[test]
    fn letters_are_not_reused() {
        assert!(!can_form("TACT", &bag("TAC"), 0, &LetterBag::new()));
        assert!(can_form("TACT", &bag("TAC"), 1, &LetterBag::new()));
    }

    #[test]
    fn free_pool_consumed_before_rack() {
        // The free Q covers the Q; the rack's U, I, Z cover the rest with no blank
        assert!(can_form("QUIZ", &bag("UIZ"), 0, &bag("Q")));
        // Free letters are single-use too
        assert!(!can_form("ZZ", &LetterBag::new(), 0, &bag("Z")));
    }

    #[test]
    fn free_first_keeps_rack_for_later_letters() {
        // Drawing the first A from the rack would strand the second A
        assert!(can_form("AA", &bag("A"), 0, &bag("A")));
    }

    #[test]
    fn lowercase_target_matches() {
        assert!(can_form("cat", &bag("CAT"), 0, &LetterBag::new()));
    }

    #[test]
    fn non_letters_need_a_blank() {
        assert!(!can_form("A-B", &bag("AB"), 0, &LetterBag::new()));
        assert!(can_form("A-B", &bag("AB"), 1, &LetterBag::new()));
    }

    #[test]
    fn caller_pools_untouched() {
        let rack = bag("CAT");
        let free = bag("S");
        assert!(can_form("CATS", &rack, 0, &free));
        assert_eq!(rack, bag("CAT"));
        assert_eq!(free, bag("S"));
    }
}
