//! Formatting utilities for terminal output

use crate::core::{Pattern, Slot};
use crate::search::MatchResult;
use std::time::Duration;

/// Draw a word placed on the pattern row
///
/// Pinned slots the word covers show the letter in brackets, letters from the
/// rack are plain, uncovered free slots are `·` and locked slots are `#`.
#[must_use]
pub fn placement(pattern: &Pattern, result: &MatchResult) -> String {
    let start = result.start_offset.unwrap_or(0);
    let word = result.word.as_bytes();

    pattern
        .slots()
        .iter()
        .enumerate()
        .map(|(i, slot)| {
            let covered = i
                .checked_sub(start)
                .and_then(|offset| word.get(offset))
                .map(|&b| char::from(b));
            match (slot, covered) {
                (Slot::Pinned(_), Some(c)) => format!("[{c}]"),
                (Slot::Pinned(b), None) => format!("({})", char::from(*b)),
                (Slot::Free, Some(c)) => format!(" {c} "),
                (Slot::Free, None) => " · ".to_string(),
                (Slot::Forbidden, _) => " # ".to_string(),
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Short human duration: µs below a millisecond, ms below a second
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let micros = duration.as_micros();
    if micros < 1_000 {
        format!("{micros}µs")
    } else if micros < 1_000_000 {
        format!("{:.1}ms", duration.as_secs_f64() * 1_000.0)
    } else {
        format!("{:.2}s", duration.as_secs_f64())
    }
}
