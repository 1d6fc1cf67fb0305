//! Scrabbler
//!
//! Word-game assistant: finds dictionary words that can be built from a rack of
//! tiles (blanks included), filtered by prefix/suffix/substring, or anchored
//! onto a row of pinned, free and locked slots.
//!
//! # Quick Start
//!
//! ```rust
//! use scrabbler::core::Pattern;
//! use scrabbler::dictionary::loader::load_from_str;
//! use scrabbler::search::Finder;
//!
//! let store = load_from_str("cat\nact\ncats\ntact").unwrap();
//! let finder = Finder::new(&store);
//!
//! // Rack-only search
//! let words = finder.find_words("cat", 2);
//! assert_eq!(words[0].word, "ACT");
//!
//! // Anchor onto a pinned A in slot 2
//! let pattern = Pattern::parse("..A..").unwrap();
//! let placed = finder.find_pattern_matches(&pattern, "ct");
//! assert_eq!(placed[0].word, "ACT");
//! assert_eq!(placed[0].start_offset, Some(2));
//! assert_eq!(placed[1].word, "CAT");
//! assert_eq!(placed[1].start_offset, Some(1));
//! ```

// Core domain types
pub mod core;

// Vocabulary storage and loading
pub mod dictionary;

// Search algorithms
pub mod search;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Logger setup
pub mod log;
