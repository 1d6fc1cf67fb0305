//! Benchmark command
//!
//! Runs rack, filtered and pattern searches for random racks and reports timing.

use crate::core::{Pattern, Rack, Slot, WHEEL_WIDTH, WILDCARD};
use crate::search::{Filters, Finder};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Letters weighted roughly like a standard tile bag
const TILE_BAG: &[u8] = b"AAAAAAAAABBCCDDDDEEEEEEEEEEEEFFGGGHHIIIIIIIIIJKLLLLMMNNNNNNOOOOOOOOPPQRRRRRRSSSSTTTTTTUUUUVVWWXYYZ";

/// One random benchmark case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkCase {
    pub rack: String,
    pub pattern: Pattern,
}

/// Timing for one case
#[derive(Debug, Clone)]
pub struct CaseTiming {
    pub rack: String,
    pub subset: Duration,
    pub filtered: Duration,
    pub pattern: Duration,
    pub words_found: usize,
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_cases: usize,
    pub total_words: usize,
    pub mean_subset: Duration,
    pub mean_filtered: Duration,
    pub mean_pattern: Duration,
    pub slowest: Option<CaseTiming>,
    pub duration: Duration,
    pub cases_per_second: f64,
}

/// Draw a rack of `size` tiles with up to two blanks, and a wheel pattern
/// with one or two pinned letters
pub fn random_case<R: Rng>(rng: &mut R, size: usize) -> BenchmarkCase {
    let blanks = rng.random_range(0..=size.min(2));
    let mut rack: String = (0..size - blanks)
        .map(|_| char::from(TILE_BAG[rng.random_range(0..TILE_BAG.len())]))
        .collect();
    rack.extend(std::iter::repeat_n(WILDCARD, blanks));

    let mut slots = vec![Slot::Free; WHEEL_WIDTH];
    let pins = rng.random_range(1..=2);
    for _ in 0..pins {
        let at = rng.random_range(0..WHEEL_WIDTH);
        slots[at] = Slot::Pinned(TILE_BAG[rng.random_range(0..TILE_BAG.len())]);
    }
    if rng.random_bool(0.5) {
        let edge = if rng.random_bool(0.5) { 0 } else { WHEEL_WIDTH - 1 };
        if slots[edge] == Slot::Free {
            slots[edge] = Slot::Forbidden;
        }
    }

    BenchmarkCase {
        rack,
        pattern: Pattern::new(slots),
    }
}

/// Generate `count` reproducible cases from `seed`
#[must_use]
pub fn generate_cases(count: usize, seed: u64) -> Vec<BenchmarkCase> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let size = rng.random_range(5..=Rack::MAX_TILES.min(8));
            random_case(&mut rng, size)
        })
        .collect()
}

fn time_case(finder: &Finder<'_>, case: &BenchmarkCase) -> CaseTiming {
    let literals = Rack::parse(&case.rack).literals().to_string();

    let start = Instant::now();
    let subset = finder.find_words(&literals, 2);
    let subset_time = start.elapsed();

    let start = Instant::now();
    let filtered = finder.find_with_filters(&case.rack, 2, &Filters::default());
    let filtered_time = start.elapsed();

    let start = Instant::now();
    let anchored = finder.find_pattern_matches(&case.pattern, &case.rack);
    let pattern_time = start.elapsed();

    CaseTiming {
        rack: case.rack.clone(),
        subset: subset_time,
        filtered: filtered_time,
        pattern: pattern_time,
        words_found: subset.len() + filtered.len() + anchored.len(),
    }
}

fn mean(total: Duration, count: usize) -> Duration {
    u32::try_from(count)
        .ok()
        .filter(|&n| n > 0)
        .map_or(Duration::ZERO, |n| total / n)
}

/// Run all cases in parallel
///
/// # Panics
///
/// Panics if the progress bar template is malformed (it is a constant).
pub fn run_benchmark(finder: &Finder<'_>, cases: &[BenchmarkCase]) -> BenchmarkResult {
    let pb = ProgressBar::new(cases.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let timings: Vec<CaseTiming> = cases
        .par_iter()
        .map(|case| {
            let timing = time_case(finder, case);
            pb.inc(1);
            timing
        })
        .collect();
    let duration = start.elapsed();
    pb.finish_with_message("done");

    let total_cases = timings.len();
    let total_words = timings.iter().map(|t| t.words_found).sum();
    let sum = |f: fn(&CaseTiming) -> Duration| timings.iter().map(f).sum::<Duration>();

    BenchmarkResult {
        total_cases,
        total_words,
        mean_subset: mean(sum(|t| t.subset), total_cases),
        mean_filtered: mean(sum(|t| t.filtered), total_cases),
        mean_pattern: mean(sum(|t| t.pattern), total_cases),
        slowest: timings
            .iter()
            .max_by_key(|t| t.subset + t.filtered + t.pattern)
            .cloned(),
        duration,
        cases_per_second: total_cases as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
