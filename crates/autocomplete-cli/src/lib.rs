// autocomplete-cli: shared utilities for CLI tools.

use std::path::{Path, PathBuf};
use std::process;

use autocomplete_engine::{AutocompleteError, Autocompleter};

/// Word list file name looked up inside directories.
const WORDS_FILE: &str = "words.txt";

/// Per-user directory holding a word list.
const USER_DIR: &str = ".autocomplete";

/// Environment variable naming a word list file or its directory.
pub const WORDS_ENV: &str = "AUTOCOMPLETE_WORDS";

/// Initialise logging for a CLI tool. Verbosity is controlled by `RUST_LOG`
/// (default: warnings only).
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

/// Search for a word list and build an Autocompleter from it.
///
/// Search order:
/// 1. `words_path` argument (if provided)
/// 2. `AUTOCOMPLETE_WORDS` environment variable
/// 3. `~/.autocomplete/words.txt`
/// 4. `/usr/share/dict/words`
/// 5. `words.txt` in the current working directory
///
/// Directories are searched for `words.txt`. The first existing file is
/// used; failing to read or decode it is an error, not a reason to keep
/// searching.
pub fn load_autocompleter(words_path: Option<&str>) -> Result<Autocompleter, String> {
    let search_paths = build_search_paths(words_path);

    for path in &search_paths {
        if path.is_file() {
            return load_file(path);
        }
    }

    Err(format!(
        "could not find a word list in any of the search paths:\n{}",
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Read one word list file and build an Autocompleter from it.
pub fn load_file(path: &Path) -> Result<Autocompleter, String> {
    let data =
        std::fs::read(path).map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    let ac = Autocompleter::from_bytes(&data).map_err(|e: AutocompleteError| {
        format!("failed to load {}: {}", path.display(), e)
    })?;
    log::info!(
        "read {} words ({} distinct) from {}",
        ac.entry_count(),
        ac.len(),
        path.display()
    );
    Ok(ac)
}

/// Build the list of candidate word list files.
fn build_search_paths(words_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // 1. Explicit path from argument
    if let Some(p) = words_path {
        push_file_or_dir(&mut paths, PathBuf::from(p));
    }

    // 2. Environment variable
    if let Ok(env_path) = std::env::var(WORDS_ENV) {
        push_file_or_dir(&mut paths, PathBuf::from(env_path));
    }

    // 3. Home directory
    if let Some(home) = home_dir() {
        paths.push(home.join(USER_DIR).join(WORDS_FILE));
    }

    // 4. System dictionary
    paths.push(PathBuf::from("/usr/share/dict/words"));

    // 5. Current directory
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(WORDS_FILE));
    }

    paths
}

/// A directory contributes its `words.txt`; anything else is taken as a file.
fn push_file_or_dir(paths: &mut Vec<PathBuf>, path: PathBuf) {
    if path.is_dir() {
        paths.push(path.join(WORDS_FILE));
    } else {
        paths.push(path);
    }
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Parse a `--words=PATH` or `-w PATH` argument from command line args.
///
/// Returns `(words_path, remaining_args)`.
pub fn parse_words_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut words_path = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--words=") {
            words_path = Some(val.to_string());
        } else if arg == "--words" || arg == "-w" {
            match args.get(i + 1) {
                Some(val) => {
                    words_path = Some(val.clone());
                    skip_next = true;
                }
                None => fatal(&format!("{arg} requires a value")),
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (words_path, remaining)
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
