//! Dictionary word representation
//!
//! A Word stores an uppercase A-Z spelling along with its letter multiset and point value.

use super::letters::LetterBag;
use super::scoring::score_of;
use std::fmt;

/// A validated dictionary word
///
/// Words are normalized to uppercase on construction and are immutable afterwards.
/// The letter multiset and point value are computed once so searches never recount them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: LetterBag,
    points: u32,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must contain at least one letter"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The string is empty
    /// - Contains non-ASCII characters
    /// - Contains anything other than letters A-Z
    ///
    /// # Examples
    /// ```
    /// use scrabbler::core::Word;
    ///
    /// let word = Word::new("quiz").unwrap();
    /// assert_eq!(word.text(), "QUIZ");
    /// assert_eq!(word.points(), 22);
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("qu1z").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_ascii_uppercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let letters = LetterBag::from_letters(&text);
        let points = score_of(&text);

        Ok(Self {
            text,
            letters,
            points,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as uppercase ASCII bytes
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; a Word holds at least one letter
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Sum of the letter values of the full word
    #[inline]
    #[must_use]
    pub const fn points(&self) -> u32 {
        self.points
    }

    /// The word's letter multiset
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &LetterBag {
        &self.letters
    }

    /// Check if the word contains a specific letter (uppercase byte)
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.letters.count(letter) > 0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("CAT").unwrap();
        assert_eq!(word.text(), "CAT");
        assert_eq!(word.bytes(), b"CAT");
        assert_eq!(word.len(), 3);
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        let word = Word::new("cat").unwrap();
        assert_eq!(word.text(), "CAT");

        let word2 = Word::new("CaT").unwrap();
        assert_eq!(word2, word);
    }

    #[test]
    fn word_creation_invalid() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert_eq!(Word::new("café"), Err(WordError::NonAscii));
        assert_eq!(Word::new("ca t"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("c4t"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cat!"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn word_points_precomputed() {
        assert_eq!(Word::new("cat").unwrap().points(), 5);
        assert_eq!(Word::new("quiz").unwrap().points(), 22);
        assert_eq!(Word::new("a").unwrap().points(), 1);
    }

    #[test]
    fn word_letters() {
        let word = Word::new("catty").unwrap();
        assert_eq!(word.letters().count(b'T'), 2);
        assert!(word.has_letter(b'Y'));
        assert!(!word.has_letter(b'Z'));
    }

    #[test]
    fn word_display() {
        let word = Word::new("quay").unwrap();
        assert_eq!(format!("{word}"), "QUAY");
    }
}
