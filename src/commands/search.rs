//! Search command
//!
//! Routes a parsed request to the matching search family and times it.

use crate::core::{Pattern, Rack};
use crate::search::{Filters, Finder, MatchResult};
use std::time::{Duration, Instant};

/// Category list selectors
#[derive(Debug, Clone, PartialEq)]
pub enum CategoryQuery {
    Length(usize),
    Letters {
        letters: String,
        max_length: Option<usize>,
    },
    QWithoutU,
    Vowels {
        min_ratio: f64,
        min_length: usize,
    },
}

/// A single search invocation
#[derive(Debug, Clone, PartialEq)]
pub enum SearchRequest {
    /// Words from a rack; blanks switch to a full dictionary scan
    Rack { rack: String, min_length: usize },
    Filter {
        rack: String,
        min_length: usize,
        filters: Filters,
    },
    Pattern {
        pattern: Pattern,
        rack: String,
        random: bool,
    },
    Anagrams { word: String },
    Extensions { base: String, letters: String },
    Category(CategoryQuery),
}

/// Result of running a search
pub struct SearchOutcome {
    pub title: String,
    pub results: Vec<MatchResult>,
    /// Set for pattern searches so output can draw the placement
    pub pattern: Option<Pattern>,
    pub duration: Duration,
}

fn describe(request: &SearchRequest) -> String {
    match request {
        SearchRequest::Rack { rack, min_length } => {
            format!("Rack {} (min {min_length})", Rack::parse(rack))
        }
        SearchRequest::Filter {
            rack,
            min_length,
            filters,
        } => {
            let mut parts = Vec::new();
            if let Some(p) = filters.starts_with() {
                parts.push(format!("starts {p}"));
            }
            if let Some(s) = filters.ends_with() {
                parts.push(format!("ends {s}"));
            }
            if let Some(c) = filters.contains() {
                parts.push(format!("contains {c}"));
            }
            format!(
                "Filter [{}] rack {} (min {min_length})",
                parts.join(", "),
                Rack::parse(rack)
            )
        }
        SearchRequest::Pattern {
            pattern,
            rack,
            random,
        } => {
            let kind = if *random { "Random fit" } else { "Pattern" };
            format!("{kind} {pattern} rack {}", Rack::parse(rack))
        }
        SearchRequest::Anagrams { word } => format!("Anagrams of {}", word.to_uppercase()),
        SearchRequest::Extensions { base, letters } => format!(
            "Extensions of {} with {}",
            base.to_uppercase(),
            letters.to_uppercase()
        ),
        SearchRequest::Category(query) => match query {
            CategoryQuery::Length(n) => format!("{n}-letter words"),
            CategoryQuery::Letters {
                letters,
                max_length,
            } => match max_length {
                Some(max) => format!("Words with {} (max {max})", letters.to_uppercase()),
                None => format!("Words with {}", letters.to_uppercase()),
            },
            CategoryQuery::QWithoutU => "Q without U".to_string(),
            CategoryQuery::Vowels {
                min_ratio,
                min_length,
            } => format!("Vowel share >= {min_ratio:.2}, length >= {min_length}"),
        },
    }
}

/// Run a search request against the finder
#[must_use]
pub fn run_search(finder: &Finder<'_>, request: &SearchRequest) -> SearchOutcome {
    let start = Instant::now();
    let mut pattern_used = None;

    let results = match request {
        SearchRequest::Rack { rack, min_length } => {
            if Rack::parse(rack).wildcards() > 0 {
                finder.find_with_filters(rack, *min_length, &Filters::default())
            } else {
                finder.find_words(rack, *min_length)
            }
        }
        SearchRequest::Filter {
            rack,
            min_length,
            filters,
        } => finder.find_with_filters(rack, *min_length, filters),
        SearchRequest::Pattern {
            pattern,
            rack,
            random,
        } => {
            pattern_used = Some(pattern.clone());
            if *random {
                finder
                    .random_pattern_match(pattern, rack)
                    .into_iter()
                    .collect()
            } else {
                finder.find_pattern_matches(pattern, rack)
            }
        }
        SearchRequest::Anagrams { word } => finder.find_anagrams(word),
        SearchRequest::Extensions { base, letters } => finder.find_extensions(base, letters),
        SearchRequest::Category(query) => match query {
            CategoryQuery::Length(n) => finder.words_of_length(*n),
            CategoryQuery::Letters {
                letters,
                max_length,
            } => finder.words_containing(letters, *max_length),
            CategoryQuery::QWithoutU => finder.q_without_u(),
            CategoryQuery::Vowels {
                min_ratio,
                min_length,
            } => finder.vowel_heavy(*min_ratio, *min_length),
        },
    };

    SearchOutcome {
        title: describe(request),
        results,
        pattern: pattern_used,
        duration: start.elapsed(),
    }
}

/// Result of checking a single word
pub struct CheckResult {
    pub word: String,
    pub valid: bool,
    pub points: u32,
}

/// Look up a word and score it
#[must_use]
pub fn check_word(finder: &Finder<'_>, word: &str) -> CheckResult {
    CheckResult {
        word: word.trim().to_uppercase(),
        valid: finder.contains(word.trim()),
        points: finder.score_of(word.trim()),
    }
}
