//! Core domain types for the word finder
//!
//! This module contains the fundamental domain types: words, letter multisets,
//! racks, slot patterns and tile values. Everything here is pure and testable.

mod letters;
mod pattern;
mod rack;
mod scoring;
mod word;

pub use letters::LetterBag;
pub use pattern::{Anchors, Pattern, PatternError, Slot, WHEEL_WIDTH};
pub use rack::{Rack, WILDCARD};
pub use scoring::{LETTER_POINTS, letter_points, score_of};
pub use word::{Word, WordError};

/// Shortest word any search will return
pub const MIN_WORD_LENGTH: usize = 2;
