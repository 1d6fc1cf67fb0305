//! Positional slot patterns
//!
//! A pattern is the current state of the letter wheel: a row of slots, each
//! pinned to a letter, locked empty, or open for tiles from the rack.
//!
//! Text form, one character per slot:
//! - a letter = pinned
//! - `.` (or `_`, space) = free
//! - `#` = forbidden

use log::warn;
use std::fmt;

/// Width of the letter wheel in the game
pub const WHEEL_WIDTH: usize = 10;

/// State of a single pattern position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Must hold this uppercase letter
    Pinned(u8),
    /// Locked empty; no letter may land here
    Forbidden,
    /// Open for any letter the rack can supply
    Free,
}

impl Slot {
    /// Anything but `Forbidden` can be covered by a word
    #[inline]
    #[must_use]
    pub const fn is_open(self) -> bool {
        !matches!(self, Self::Forbidden)
    }
}

/// Error type for unparseable pattern text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    InvalidSymbol { position: usize, symbol: char },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSymbol { position, symbol } => write!(
                f,
                "Invalid pattern symbol {symbol:?} at position {position} (use A-Z, '.', or '#')"
            ),
        }
    }
}

impl std::error::Error for PatternError {}

/// Bounds derived from a pattern, computed once per search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchors {
    pub first_pinned: usize,
    pub last_pinned: usize,
    pub first_open: usize,
    pub last_open: usize,
}

impl Anchors {
    /// Shortest word that can cover every pinned slot (never below 2)
    #[must_use]
    pub const fn min_length(&self) -> usize {
        let span = self.last_pinned - self.first_pinned + 1;
        if span < 2 { 2 } else { span }
    }

    /// Longest word that fits between the outermost open slots
    #[must_use]
    pub const fn max_length(&self) -> usize {
        self.last_open - self.first_open + 1
    }
}

/// An ordered row of slots
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    slots: Vec<Slot>,
}

impl Pattern {
    #[must_use]
    pub const fn new(slots: Vec<Slot>) -> Self {
        Self { slots }
    }

    /// Build a pattern from parallel arrays: letters (pinned or empty) and
    /// forbidden flags for the empty slots
    ///
    /// Missing flags default to not forbidden and extra flags are ignored.
    /// A pinned slot is never forbidden.
    ///
    /// # Examples
    /// ```
    /// use scrabbler::core::{Pattern, Slot};
    ///
    /// let pattern = Pattern::from_parts(&[None, Some('a'), None], &[true, false, false]);
    /// assert_eq!(pattern.slots(), &[Slot::Forbidden, Slot::Pinned(b'A'), Slot::Free]);
    /// ```
    #[must_use]
    pub fn from_parts(letters: &[Option<char>], forbidden: &[bool]) -> Self {
        if letters.len() != forbidden.len() {
            warn!(
                "pattern has {} slots but {} forbidden flags",
                letters.len(),
                forbidden.len()
            );
        }

        let slots = letters
            .iter()
            .enumerate()
            .map(|(i, letter)| match letter {
                Some(c) if c.is_ascii_alphabetic() => Slot::Pinned(c.to_ascii_uppercase() as u8),
                _ if forbidden.get(i).copied().unwrap_or(false) => Slot::Forbidden,
                _ => Slot::Free,
            })
            .collect();

        Self { slots }
    }

    /// Parse the text form (`..A.#`)
    ///
    /// # Errors
    /// Returns `PatternError::InvalidSymbol` for any character that is not a
    /// letter, `.`, `_`, space, or `#`.
    pub fn parse(text: &str) -> Result<Self, PatternError> {
        text.chars()
            .enumerate()
            .map(|(position, symbol)| match symbol {
                c if c.is_ascii_alphabetic() => Ok(Slot::Pinned(c.to_ascii_uppercase() as u8)),
                '.' | '_' | ' ' => Ok(Slot::Free),
                '#' => Ok(Slot::Forbidden),
                _ => Err(PatternError::InvalidSymbol { position, symbol }),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }

    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn slot(&self, index: usize) -> Option<Slot> {
        self.slots.get(index).copied()
    }

    /// Pinned/open bounds, or `None` when nothing is pinned
    #[must_use]
    pub fn anchors(&self) -> Option<Anchors> {
        let pinned = |s: &Slot| matches!(s, Slot::Pinned(_));
        let first_pinned = self.slots.iter().position(pinned)?;
        let last_pinned = self.slots.iter().rposition(pinned)?;
        // A pinned slot is open, so both searches succeed whenever one is pinned
        let first_open = self.slots.iter().position(|s| s.is_open())?;
        let last_open = self.slots.iter().rposition(|s| s.is_open())?;

        Some(Anchors {
            first_pinned,
            last_pinned,
            first_open,
            last_open,
        })
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            let c = match slot {
                Slot::Pinned(b) => char::from(*b),
                Slot::Forbidden => '#',
                Slot::Free => '.',
            };
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
