//! Player racks
//!
//! A rack is up to ten tiles, each a letter or a blank. Order is irrelevant.

use super::letters::LetterBag;
use log::warn;
use std::fmt;

/// The symbol that marks a blank tile in rack strings
pub const WILDCARD: char = '?';

/// A parsed rack: literal letters plus a number of blanks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rack {
    literals: String,
    letters: LetterBag,
    wildcards: usize,
}

impl Rack {
    /// Largest rack the game hands out
    pub const MAX_TILES: usize = 10;

    /// Parse a rack string
    ///
    /// Letters are case-insensitive and `?` is a blank. Any other symbol is
    /// skipped, and tiles past [`Rack::MAX_TILES`] are dropped with a warning.
    ///
    /// # Examples
    /// ```
    /// use scrabbler::core::Rack;
    ///
    /// let rack = Rack::parse("ca?");
    /// assert_eq!(rack.literals(), "CA");
    /// assert_eq!(rack.wildcards(), 1);
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let mut literals = String::new();
        let mut wildcards = 0;
        let mut tiles = 0;
        let mut dropped = 0;

        for c in input.chars() {
            let is_tile = c == WILDCARD || c.is_ascii_alphabetic();
            if !is_tile {
                continue;
            }
            if tiles == Self::MAX_TILES {
                dropped += 1;
                continue;
            }
            tiles += 1;
            if c == WILDCARD {
                wildcards += 1;
            } else {
                literals.push(c.to_ascii_uppercase());
            }
        }

        if dropped > 0 {
            warn!(
                "rack {input:?} exceeds {} tiles; ignored {dropped} extra",
                Self::MAX_TILES
            );
        }

        let letters = LetterBag::from_letters(&literals);
        Self {
            literals,
            letters,
            wildcards,
        }
    }

    /// The literal letters, uppercase, in input order
    #[must_use]
    pub fn literals(&self) -> &str {
        &self.literals
    }

    /// The literal letters as a multiset
    #[must_use]
    pub const fn letters(&self) -> &LetterBag {
        &self.letters
    }

    /// Number of blank tiles
    #[must_use]
    pub const fn wildcards(&self) -> usize {
        self.wildcards
    }

    /// Total tiles, letters and blanks
    #[must_use]
    pub fn len(&self) -> usize {
        self.literals.len() + self.wildcards
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Rack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.literals)?;
        for _ in 0..self.wildcards {
            write!(f, "{WILDCARD}")?;
        }
        Ok(())
    }
}
