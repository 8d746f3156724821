// autocomplete-suggest: Suggest completions for the last word of each input.
//
// For every TEXT argument (or every stdin line when no arguments are given)
// the trailing whitespace-delimited token is completed against the word
// list. If no word starts with the token, the closest words by edit
// distance are printed instead.
//
// Usage:
//   autocomplete-suggest [-w WORDS] [OPTIONS] [TEXT...]
//
// Options:
//   -w, --words PATH           Word list file (or directory with words.txt)
//   -n, --max-corrections N    Closest words shown when nothing matches (default: 10)
//   -v, --verbose              Mark each suggestion as completion or correction
//   -h, --help                 Print help

use std::io::{self, BufRead, Write};

use autocomplete_engine::Autocompleter;

fn main() {
    autocomplete_cli::init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (words_path, args) = autocomplete_cli::parse_words_path(&args);

    if autocomplete_cli::wants_help(&args) {
        println!("autocomplete-suggest: Suggest completions for the last word of each input.");
        println!();
        println!("Usage: autocomplete-suggest [-w WORDS] [OPTIONS] [TEXT...]");
        println!();
        println!("If TEXT arguments are given, suggests for each of them.");
        println!("Otherwise reads text from stdin (one input per line).");
        println!();
        println!("Options:");
        println!("  -w, --words PATH          Word list file (or directory with words.txt)");
        println!("  -n, --max-corrections N   Closest words shown when nothing matches (default: 10)");
        println!("  -v, --verbose             Mark each suggestion as completion or correction");
        println!("  -h, --help                Print this help");
        println!();
        println!("Word lists are also searched via ${}.", autocomplete_cli::WORDS_ENV);
        return;
    }

    let mut max_corrections: Option<usize> = None;
    let mut verbose = false;
    let mut inputs: Vec<String> = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if arg == "-n" || arg == "--max-corrections" {
            let Some(value) = args.get(i + 1) else {
                autocomplete_cli::fatal("--max-corrections requires a value");
            };
            max_corrections = Some(value.parse().unwrap_or_else(|_| {
                autocomplete_cli::fatal("invalid number for --max-corrections")
            }));
            skip_next = true;
        } else if arg == "-v" || arg == "--verbose" {
            verbose = true;
        } else {
            inputs.push(arg.clone());
        }
    }

    let mut ac = autocomplete_cli::load_autocompleter(words_path.as_deref())
        .unwrap_or_else(|e| autocomplete_cli::fatal(&e));
    if let Some(n) = max_corrections {
        ac.set_max_corrections(n);
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let suggest_text = |text: &str, ac: &Autocompleter, out: &mut io::BufWriter<io::StdoutLock<'_>>| {
        let token = autocomplete_core::trailing_token(text);
        let suggestions = ac.suggest_detailed(token);
        if suggestions.is_empty() {
            let _ = writeln!(out, "{token}: (no suggestions)");
            return;
        }
        let _ = writeln!(out, "{token}:");
        for s in &suggestions {
            if verbose {
                let _ = writeln!(out, "  {} ({}, distance {})", s.word, s.kind, s.distance);
            } else {
                let _ = writeln!(out, "  {}", s.word);
            }
        }
    };

    if inputs.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            suggest_text(&line, &ac, &mut out);
        }
    } else {
        for text in &inputs {
            suggest_text(text, &ac, &mut out);
        }
    }
}
