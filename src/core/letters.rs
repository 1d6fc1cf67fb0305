//! Letter multisets
//!
//! A `LetterBag` counts how many of each letter A-Z it holds. It is the
//! currency of every formability check: racks, free pools and word spellings
//! all reduce to one.

use std::fmt;

const ALPHABET: usize = 26;

/// A multiset over the letters A-Z
///
/// Stored as a fixed array of counts, so copies are cheap and a bag can be
/// consumed locally inside a single check without touching the caller's copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterBag {
    counts: [u8; ALPHABET],
}

/// Map an ASCII letter (either case) to its 0-25 slot
#[inline]
fn slot(letter: u8) -> Option<usize> {
    let upper = letter.to_ascii_uppercase();
    upper
        .is_ascii_uppercase()
        .then(|| usize::from(upper - b'A'))
}

impl LetterBag {
    /// An empty bag
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counts: [0; ALPHABET],
        }
    }

    /// Count the letters of `text`, case-insensitively
    ///
    /// Anything that is not an ASCII letter is ignored.
    ///
    /// # Examples
    /// ```
    /// use scrabbler::core::LetterBag;
    ///
    /// let bag = LetterBag::from_letters("tact");
    /// assert_eq!(bag.count(b'T'), 2);
    /// assert_eq!(bag.len(), 4);
    /// ```
    #[must_use]
    pub fn from_letters(text: &str) -> Self {
        let mut bag = Self::new();
        for b in text.bytes() {
            bag.add(b);
        }
        bag
    }

    /// Add one copy of `letter`; non-letters are ignored
    pub fn add(&mut self, letter: u8) {
        if let Some(i) = slot(letter) {
            self.counts[i] = self.counts[i].saturating_add(1);
        }
    }

    /// Remove one copy of `letter`, returning whether it was present
    pub fn take(&mut self, letter: u8) -> bool {
        match slot(letter) {
            Some(i) if self.counts[i] > 0 => {
                self.counts[i] -= 1;
                true
            }
            _ => false,
        }
    }

    /// How many copies of `letter` the bag holds
    #[inline]
    #[must_use]
    pub fn count(&self, letter: u8) -> u8 {
        slot(letter).map_or(0, |i| self.counts[i])
    }

    /// Total number of letters
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.iter().map(|&c| usize::from(c)).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// True if every letter of `other` is available in `self` (literal subtraction)
    #[must_use]
    pub fn contains_all(&self, other: &Self) -> bool {
        self.counts
            .iter()
            .zip(other.counts.iter())
            .all(|(have, need)| have >= need)
    }

    /// Letters in alphabetical order, repeated by multiplicity
    #[must_use]
    pub fn sorted_letters(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.len());
        for (i, &c) in self.counts.iter().enumerate() {
            for _ in 0..c {
                out.push(b'A' + i as u8);
            }
        }
        out
    }
}

impl fmt::Display for LetterBag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.sorted_letters() {
            write!(f, "{}", char::from(b))?;
        }
        Ok(())
    }
}
