//! Letter point values
//!
//! Standard tile values. Blanks are worth nothing; since results are scored
//! from the full spelling, the table only ever sees real letters.

/// Point value for each letter A-Z, indexed by `letter - b'A'`
pub const LETTER_POINTS: [u32; 26] = [
    1, 3, 3, 2, 1, 4, 2, 4, 1, 8, 5, 1, 3, // A-M
    1, 1, 3, 10, 1, 1, 1, 1, 4, 4, 8, 4, 10, // N-Z
];

/// Value of a single symbol; anything that is not a letter scores 0
#[inline]
#[must_use]
pub fn letter_points(symbol: u8) -> u32 {
    let upper = symbol.to_ascii_uppercase();
    if upper.is_ascii_uppercase() {
        LETTER_POINTS[usize::from(upper - b'A')]
    } else {
        0
    }
}

/// Sum of letter values for an arbitrary string
///
/// Works on any candidate string, not only dictionary members.
///
/// # Examples
/// ```
/// use scrabbler::core::score_of;
///
/// assert_eq!(score_of("cat"), 5);
/// assert_eq!(score_of("CA?"), 4);
/// ```
#[must_use]
pub fn score_of(text: &str) -> u32 {
    text.bytes().map(letter_points).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_values() {
        assert_eq!(letter_points(b'A'), 1);
        assert_eq!(letter_points(b'D'), 2);
        assert_eq!(letter_points(b'K'), 5);
        assert_eq!(letter_points(b'Q'), 10);
        assert_eq!(letter_points(b'X'), 8);
        assert_eq!(letter_points(b'Z'), 10);
    }

    #[test]
    fn all_letters_positive() {
        assert!(LETTER_POINTS.iter().all(|&p| p > 0));
    }

    #[test]
    fn blank_and_symbols_score_zero() {
        assert_eq!(letter_points(b'?'), 0);
        assert_eq!(letter_points(b' '), 0);
        assert_eq!(score_of(""), 0);
    }

    #[test]
    fn score_is_case_insensitive() {
        assert_eq!(score_of("Jazz"), score_of("JAZZ"));
        assert_eq!(score_of("jazz"), 29);
    }
}
