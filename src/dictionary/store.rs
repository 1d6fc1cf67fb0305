//! Immutable vocabulary container

use crate::core::{Word, score_of};
use log::info;
use rustc_hash::FxHashMap;

/// The set of valid words
///
/// Built once, read-only afterwards. Membership is a hash lookup; iteration
/// follows insertion order, which is stable for the life of the store.
/// An empty store counts as "not loaded" and every search over it returns nothing.
#[derive(Debug, Clone, Default)]
pub struct WordStore {
    words: Vec<Word>,
    index: FxHashMap<String, usize>,
    longest: usize,
}

impl WordStore {
    /// An empty, not-yet-loaded store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from words, dropping duplicates
    ///
    /// # Examples
    /// ```
    /// use scrabbler::core::Word;
    /// use scrabbler::dictionary::WordStore;
    ///
    /// let words = ["cat", "act", "CAT"].into_iter().filter_map(|w| Word::new(w).ok());
    /// let store = WordStore::from_words(words);
    /// assert_eq!(store.len(), 2);
    /// assert!(store.contains("Cat"));
    /// ```
    pub fn from_words<I: IntoIterator<Item = Word>>(words: I) -> Self {
        let mut store = Self::new();
        for word in words {
            if !store.index.contains_key(word.text()) {
                store.index.insert(word.text().to_string(), store.words.len());
                store.longest = store.longest.max(word.len());
                store.words.push(word);
            }
        }
        info!("word store built with {} words", store.words.len());
        store
    }

    /// Whether the store holds a usable vocabulary
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        !self.words.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Length of the longest stored word, 0 when empty
    #[must_use]
    pub const fn longest(&self) -> usize {
        self.longest
    }

    /// True iff the uppercased `word` is in the vocabulary
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.get(word).is_some()
    }

    /// Look up a stored word, case-insensitively
    #[must_use]
    pub fn get(&self, word: &str) -> Option<&Word> {
        let position = if word.bytes().any(|b| b.is_ascii_lowercase()) {
            self.index.get(word.to_ascii_uppercase().as_str())
        } else {
            self.index.get(word)
        };
        position.map(|&i| &self.words[i])
    }

    /// Point value of any string, member or not
    #[must_use]
    pub fn score_of(&self, word: &str) -> u32 {
        score_of(word)
    }

    /// Every stored word in stable order
    #[must_use]
    pub fn all_words(&self) -> &[Word] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }
}

impl<'a> IntoIterator for &'a WordStore {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
