//! Simple interactive CLI mode
//!
//! Line-oriented word finder: type a rack, or a command, and get ranked words.

use super::search::{CategoryQuery, SearchRequest, check_word, run_search};
use crate::core::{MIN_WORD_LENGTH, Pattern};
use crate::output::{print_check_result, print_search_outcome};
use crate::search::{Filters, Finder};
use std::io::{self, Write};

/// A parsed line of input
#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    Search(SearchRequest),
    Check(String),
    Help,
    Quit,
    Empty,
}

const HELP: &str = "\
Commands:
  <rack>                       words from a rack (use ? for a blank)
  start <prefix> [rack]        words starting with prefix
  end <suffix> [rack]          words ending with suffix
  has <text> [rack]            words containing text
  pattern <slots> <rack>       fit words onto slots (A-Z pinned, . free, # locked)
  random <slots> <rack>        one random fit
  anagram <word>               anagrams of a word
  extend <base> <letters>      longer words built around base
  length <n>                   all words of n letters
  letters <letters> [max]      words holding the letters
  qnou                         Q without U
  vowels [ratio] [min]         vowel-heavy words
  check <word>                 is it a word, and what is it worth
  help, quit";

fn parse_number<T: std::str::FromStr>(value: &str, what: &str) -> Result<T, String> {
    value
        .parse()
        .map_err(|_| format!("Invalid {what}: {value}"))
}

fn filter_request(filters: Filters, rack: Option<&&str>) -> SearchRequest {
    SearchRequest::Filter {
        rack: rack.map_or_else(String::new, |r| (*r).to_string()),
        min_length: MIN_WORD_LENGTH,
        filters,
    }
}

/// Parse one line of REPL input
///
/// # Errors
///
/// Returns a message for unknown commands, missing arguments, bad numbers or
/// bad pattern text.
pub fn parse_command(line: &str) -> Result<ReplCommand, String> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some((&head, args)) = parts.split_first() else {
        return Ok(ReplCommand::Empty);
    };
    let need = |n: usize| {
        if args.len() < n {
            Err(format!("'{head}' needs {n} argument(s); try 'help'"))
        } else {
            Ok(())
        }
    };

    let command = match head.to_lowercase().as_str() {
        "quit" | "q" | "exit" => ReplCommand::Quit,
        "help" | "h" | "?" => ReplCommand::Help,
        "check" => {
            need(1)?;
            ReplCommand::Check(args[0].to_string())
        }
        "start" => {
            need(1)?;
            ReplCommand::Search(filter_request(Filters::new(Some(args[0]), None, None), args.get(1)))
        }
        "end" => {
            need(1)?;
            ReplCommand::Search(filter_request(Filters::new(None, Some(args[0]), None), args.get(1)))
        }
        "has" => {
            need(1)?;
            ReplCommand::Search(filter_request(Filters::new(None, None, Some(args[0])), args.get(1)))
        }
        kind @ ("pattern" | "random") => {
            need(2)?;
            let pattern = Pattern::parse(args[0]).map_err(|e| e.to_string())?;
            ReplCommand::Search(SearchRequest::Pattern {
                pattern,
                rack: args[1].to_string(),
                random: kind == "random",
            })
        }
        "anagram" => {
            need(1)?;
            ReplCommand::Search(SearchRequest::Anagrams {
                word: args[0].to_string(),
            })
        }
        "extend" => {
            need(2)?;
            ReplCommand::Search(SearchRequest::Extensions {
                base: args[0].to_string(),
                letters: args[1].to_string(),
            })
        }
        "length" => {
            need(1)?;
            let n = parse_number(args[0], "length")?;
            ReplCommand::Search(SearchRequest::Category(CategoryQuery::Length(n)))
        }
        "letters" => {
            need(1)?;
            let max_length = args
                .get(1)
                .map(|v| parse_number(v, "max length"))
                .transpose()?;
            ReplCommand::Search(SearchRequest::Category(CategoryQuery::Letters {
                letters: args[0].to_string(),
                max_length,
            }))
        }
        "qnou" => ReplCommand::Search(SearchRequest::Category(CategoryQuery::QWithoutU)),
        "vowels" => {
            let min_ratio = args
                .first()
                .map(|v| parse_number(v, "ratio"))
                .transpose()?
                .unwrap_or(0.6);
            let min_length = args
                .get(1)
                .map(|v| parse_number(v, "min length"))
                .transpose()?
                .unwrap_or(4);
            ReplCommand::Search(SearchRequest::Category(CategoryQuery::Vowels {
                min_ratio,
                min_length,
            }))
        }
        _ if args.is_empty() => ReplCommand::Search(SearchRequest::Rack {
            rack: head.to_string(),
            min_length: MIN_WORD_LENGTH,
        }),
        _ => return Err(format!("Unknown command '{head}'; try 'help'")),
    };
    Ok(command)
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(finder: &Finder<'_>, limit: usize) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Scrabbler - Interactive Mode                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!(
        "{} words loaded. Type a rack to find words, or 'help'.\n",
        finder.store().len()
    );

    loop {
        let Some(line) = get_user_input("scrabbler")? else {
            println!("\n👋 Bye!\n");
            return Ok(());
        };

        match parse_command(&line) {
            Ok(ReplCommand::Quit) => {
                println!("\n👋 Bye!\n");
                return Ok(());
            }
            Ok(ReplCommand::Help) => println!("{HELP}\n"),
            Ok(ReplCommand::Empty) => {}
            Ok(ReplCommand::Check(word)) => print_check_result(&check_word(finder, &word)),
            Ok(ReplCommand::Search(request)) => {
                print_search_outcome(&run_search(finder, &request), limit);
            }
            Err(message) => println!("❌ {message}\n"),
        }
    }
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}> ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok((read > 0).then(|| input.trim().to_string()))
}
