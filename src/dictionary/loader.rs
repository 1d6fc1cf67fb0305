//! Vocabulary loading utilities
//!
//! Turns newline-delimited word lists into a [`WordStore`].

use super::WordStore;
use crate::core::Word;
use log::{debug, info};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Error type for vocabulary loading
#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
    /// The source held no usable word
    Empty,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Failed to read word list: {e}"),
            Self::Empty => write!(f, "Word list contains no valid words"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Empty => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Parse newline-delimited text into words
///
/// Lines are trimmed and uppercased; empty lines are skipped, as are lines
/// with anything other than letters.
///
/// # Examples
/// ```
/// use scrabbler::dictionary::loader::parse_words;
///
/// let words = parse_words("cat\n\n  act \nn0pe\n");
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[1].text(), "ACT");
/// ```
#[must_use]
pub fn parse_words(text: &str) -> Vec<Word> {
    let mut skipped = 0usize;
    let words: Vec<Word> = text
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            Word::new(trimmed)
                .inspect_err(|_| skipped += 1)
                .ok()
        })
        .collect();

    if skipped > 0 {
        debug!("skipped {skipped} malformed word list lines");
    }
    words
}

/// Build a store from word list text
///
/// # Errors
///
/// Returns `LoadError::Empty` if no line yields a valid word.
pub fn load_from_str(text: &str) -> Result<WordStore, LoadError> {
    let store = WordStore::from_words(parse_words(text));
    if store.is_loaded() {
        Ok(store)
    } else {
        Err(LoadError::Empty)
    }
}

/// Load a store from a file
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, or `LoadError::Empty`
/// if it holds no valid word.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordStore, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    info!("loading word list from {}", path.display());
    load_from_str(&content)
}

/// Build a store from an embedded string slice
///
/// # Examples
/// ```
/// use scrabbler::dictionary::loader::store_from_slice;
/// use scrabbler::dictionary::WORDS;
///
/// let store = store_from_slice(WORDS);
/// assert!(store.is_loaded());
/// ```
#[must_use]
pub fn store_from_slice(slice: &[&str]) -> WordStore {
    WordStore::from_words(slice.iter().filter_map(|&s| Word::new(s).ok()))
}
