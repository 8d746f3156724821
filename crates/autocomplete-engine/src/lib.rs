//! Suggestion engine for word completion.
//!
//! Given a prefix, [`Autocompleter::suggest`] returns every vocabulary word
//! starting with it. When nothing matches, the vocabulary is ranked by
//! Levenshtein distance to the prefix and the closest words are returned
//! instead.
//!
//! - [`distance`] -- Levenshtein distance over characters
//! - [`suggestion`] -- generators, status tracking and strategy orchestration
//! - [`handle`] -- [`Autocompleter`], the build-once, read-many entry point

pub mod distance;
pub mod handle;
pub mod suggestion;

pub use handle::{AutocompleteError, Autocompleter};
pub use suggestion::{DEFAULT_MAX_CORRECTIONS, Suggestion};
