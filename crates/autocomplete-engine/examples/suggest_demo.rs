// Full pipeline demo: read a word list → Autocompleter → suggestions for sample inputs
use std::fs;

use autocomplete_engine::Autocompleter;

fn main() {
    let words_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "words.txt".to_string());

    let data = fs::read(&words_path).expect("Failed to read word list");
    let ac = Autocompleter::from_bytes(&data).expect("Failed to build autocompleter");
    println!(
        "Read {} words ({} distinct) from {}",
        ac.entry_count(),
        ac.len(),
        words_path
    );
    let sample: Vec<String> = ac.words().into_iter().take(10).collect();
    println!("Sample words: {sample:?}\n");

    let inputs = ["", "a", "the qu", "xyzzy", "hello wrld", "trailing "];
    for text in inputs {
        let detailed = ac.suggest_detailed(autocomplete_core::trailing_token(text));
        let shown: Vec<String> = detailed
            .iter()
            .take(10)
            .map(|s| format!("{} ({}, {})", s.word, s.kind, s.distance))
            .collect();
        println!("{text:?} -> {} suggestions", detailed.len());
        for line in shown {
            println!("  {line}");
        }
        if let Some(first) = detailed.first() {
            let applied = Autocompleter::apply_suggestion(text, &first.word);
            println!("  apply first: {:?} (cursor {})", applied.text, applied.cursor);
        }
    }
}
