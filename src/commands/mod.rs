//! Command implementations

pub mod benchmark;
pub mod search;
pub mod simple;

pub use benchmark::{BenchmarkCase, BenchmarkResult, generate_cases, run_benchmark};
pub use search::{CategoryQuery, CheckResult, SearchOutcome, SearchRequest, check_word, run_search};
pub use simple::run_simple;
