// autocomplete-check: Check whether words are in the word list.
//
// Prints one line per word:
//   word: yes    (in the word list)
//   word: no     (not in the word list)
//
// Usage:
//   autocomplete-check [-w WORDS] [WORD...]
//
// Options:
//   -w, --words PATH   Word list file (or directory with words.txt)
//   -h, --help         Print help

use std::io::{self, BufRead, Write};

fn main() {
    autocomplete_cli::init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (words_path, args) = autocomplete_cli::parse_words_path(&args);

    if autocomplete_cli::wants_help(&args) {
        println!("autocomplete-check: Check whether words are in the word list.");
        println!();
        println!("Usage: autocomplete-check [-w WORDS] [WORD...]");
        println!();
        println!("If WORD arguments are given, checks each of them.");
        println!("Otherwise reads words from stdin (one per line, taken verbatim).");
        println!();
        println!("Options:");
        println!("  -w, --words PATH   Word list file (or directory with words.txt)");
        println!("  -h, --help         Print this help");
        return;
    }

    let ac = autocomplete_cli::load_autocompleter(words_path.as_deref())
        .unwrap_or_else(|e| autocomplete_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut check = |word: &str| {
        let answer = if ac.contains(word) { "yes" } else { "no" };
        let _ = writeln!(out, "{word}: {answer}");
    };

    if args.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(word) => check(&word),
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            }
        }
    } else {
        for word in &args {
            check(word);
        }
    }
}
