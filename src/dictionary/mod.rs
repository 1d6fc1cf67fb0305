//! Vocabulary storage and loading
//!
//! Provides the immutable [`WordStore`] plus loaders for word list text and
//! the starter list compiled into the binary.

mod embedded;
pub mod loader;
mod store;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::LoadError;
pub use store::WordStore;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in WORDS {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn embedded_words_are_unique() {
        let unique: std::collections::HashSet<_> = WORDS.iter().collect();
        assert_eq!(unique.len(), WORDS.len());
    }
}
