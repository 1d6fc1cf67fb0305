//! Scrabbler - CLI
//!
//! Word finder for rack, filter and pattern-anchored searches.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use scrabbler::{
    commands::{
        CategoryQuery, SearchRequest, check_word, generate_cases, run_benchmark, run_search,
        run_simple,
    },
    core::{MIN_WORD_LENGTH, Pattern},
    dictionary::{WORDS, WordStore, loader},
    output::{print_benchmark_result, print_check_result, print_search_outcome},
    search::{Filters, Finder, SearchLimits},
};

#[derive(Parser)]
#[command(
    name = "scrabbler",
    about = "Find words from a rack, with filters, or anchored onto pinned letters",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default starter list) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Maximum number of results to print
    #[arg(short = 'n', long, global = true, default_value = "50")]
    limit: usize,

    /// Letters considered by rack-only search
    #[arg(long, global = true, default_value_t = SearchLimits::default().max_subset_letters)]
    max_letters: usize,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default)
    Simple,

    /// Words spelled from a rack (? is a blank)
    Words {
        rack: String,

        /// Minimum word length
        #[arg(short, long, default_value_t = MIN_WORD_LENGTH)]
        min: usize,
    },

    /// Dictionary search with prefix/suffix/substring filters and an optional rack
    Filter {
        #[arg(default_value = "")]
        rack: String,

        #[arg(short, long)]
        starts_with: Option<String>,

        #[arg(short, long)]
        ends_with: Option<String>,

        #[arg(short, long)]
        contains: Option<String>,

        /// Minimum word length
        #[arg(short, long, default_value_t = MIN_WORD_LENGTH)]
        min: usize,
    },

    /// Fit words onto a slot row: A-Z pinned, '.' free, '#' locked
    Pattern {
        pattern: String,

        #[arg(default_value = "")]
        rack: String,

        /// Return one random fit instead of all
        #[arg(short, long)]
        random: bool,
    },

    /// Other words with the same letters
    Anagrams { word: String },

    /// Longer words containing BASE whose other letters come from LETTERS
    Extend { base: String, letters: String },

    /// Word lists by category
    Category {
        #[command(subcommand)]
        query: CategoryCommand,
    },

    /// Check whether a word is valid and score it
    Check { word: String },

    /// Time searches on random racks
    Benchmark {
        /// Number of random racks
        #[arg(short = 'c', long, default_value = "200")]
        count: usize,

        /// Seed for reproducible racks
        #[arg(short, long, default_value = "2024")]
        seed: u64,
    },
}

#[derive(Subcommand)]
enum CategoryCommand {
    /// All words of exactly N letters
    Length { length: usize },

    /// Words holding all of LETTERS
    Letters {
        letters: String,

        #[arg(short, long)]
        max_len: Option<usize>,
    },

    /// Words with Q but no QU
    QWithoutU,

    /// Words with a high share of vowels
    Vowels {
        #[arg(short, long, default_value = "0.6")]
        ratio: f64,

        #[arg(short, long, default_value = "4")]
        min_len: usize,
    },
}

impl From<CategoryCommand> for CategoryQuery {
    fn from(command: CategoryCommand) -> Self {
        match command {
            CategoryCommand::Length { length } => Self::Length(length),
            CategoryCommand::Letters { letters, max_len } => Self::Letters {
                letters,
                max_length: max_len,
            },
            CategoryCommand::QWithoutU => Self::QWithoutU,
            CategoryCommand::Vowels { ratio, min_len } => Self::Vowels {
                min_ratio: ratio,
                min_length: min_len,
            },
        }
    }
}

/// Load the vocabulary based on the -w flag
fn load_store(wordlist: &str) -> Result<WordStore> {
    match wordlist {
        "embedded" => Ok(loader::store_from_slice(WORDS)),
        path => loader::load_from_file(path)
            .with_context(|| format!("could not load word list from {path}")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    scrabbler::log::init_logger(cli.debug);

    let store = load_store(&cli.wordlist)?;
    let limits = SearchLimits {
        max_subset_letters: cli.max_letters,
    };
    let finder = Finder::with_limits(&store, limits);

    // Default to interactive mode if no command given
    let command = cli.command.unwrap_or(Commands::Simple);

    let request = match command {
        Commands::Simple => {
            return run_simple(&finder, cli.limit).map_err(|e| anyhow::anyhow!(e));
        }
        Commands::Check { word } => {
            print_check_result(&check_word(&finder, &word));
            return Ok(());
        }
        Commands::Benchmark { count, seed } => {
            println!("Running benchmark on {count} random racks (seed {seed})...");
            let cases = generate_cases(count, seed);
            print_benchmark_result(&run_benchmark(&finder, &cases));
            return Ok(());
        }
        Commands::Words { rack, min } => SearchRequest::Rack {
            rack,
            min_length: min,
        },
        Commands::Filter {
            rack,
            starts_with,
            ends_with,
            contains,
            min,
        } => SearchRequest::Filter {
            rack,
            min_length: min,
            filters: Filters::new(
                starts_with.as_deref(),
                ends_with.as_deref(),
                contains.as_deref(),
            ),
        },
        Commands::Pattern {
            pattern,
            rack,
            random,
        } => SearchRequest::Pattern {
            pattern: Pattern::parse(&pattern)?,
            rack,
            random,
        },
        Commands::Anagrams { word } => SearchRequest::Anagrams { word },
        Commands::Extend { base, letters } => SearchRequest::Extensions { base, letters },
        Commands::Category { query } => SearchRequest::Category(query.into()),
    };

    print_search_outcome(&run_search(&finder, &request), cli.limit);
    Ok(())
}
