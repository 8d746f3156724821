// autocomplete-apply: Replace the last word of a text with a suggestion.
//
// Prints the text with its trailing whitespace-delimited token replaced by
// SUGGESTION. Everything before the token, whitespace included, is kept.
// No word list is needed.
//
// Usage:
//   autocomplete-apply TEXT SUGGESTION
//
// Options:
//   -c, --cursor   Also print the resulting cursor position (in characters)
//   -h, --help     Print help

fn main() {
    autocomplete_cli::init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();

    if autocomplete_cli::wants_help(&args) {
        println!("autocomplete-apply: Replace the last word of a text with a suggestion.");
        println!();
        println!("Usage: autocomplete-apply [-c] TEXT SUGGESTION");
        println!();
        println!("Options:");
        println!("  -c, --cursor   Also print the resulting cursor position");
        println!("  -h, --help     Print this help");
        return;
    }

    let show_cursor = args.iter().any(|a| a == "-c" || a == "--cursor");
    let positional: Vec<&String> = args
        .iter()
        .filter(|a| *a != "-c" && *a != "--cursor")
        .collect();

    let [text, suggestion] = positional.as_slice() else {
        autocomplete_cli::fatal("expected exactly two arguments: TEXT SUGGESTION");
    };

    let applied = autocomplete_core::apply_suggestion(text, suggestion);
    println!("{}", applied.text);
    if show_cursor {
        println!("cursor: {}", applied.cursor);
    }
}
