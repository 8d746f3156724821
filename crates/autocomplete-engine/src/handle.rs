// Autocompleter: top-level entry point for suggestion queries.
//
// Owns the prefix index and the suggestion strategy. The handle has two
// phases: it is built once from a vocabulary, then only read. Queries take
// `&self` and there is no interior mutability, so a built handle can be
// shared across threads (e.g. behind an `Arc`) without locking.

use autocomplete_core::text::{self, AppliedSuggestion};
use autocomplete_core::vocabulary::{self, VocabularyError};
use autocomplete_trie::Trie;

use crate::suggestion::status::{Suggestion, SuggestionStatus};
use crate::suggestion::strategy::{
    DEFAULT_MAX_CORRECTIONS, SuggestionStrategy, completion_strategy,
};

/// Error type for Autocompleter construction failures.
#[derive(Debug, thiserror::Error)]
pub enum AutocompleteError {
    /// The vocabulary resource could not be decoded.
    #[error("failed to load vocabulary: {0}")]
    Vocabulary(#[from] VocabularyError),
}

/// Word completion over a fixed vocabulary.
pub struct Autocompleter {
    /// The prefix index, filled once at construction.
    trie: Trie,

    /// Prefix completion with edit-distance fallback.
    strategy: SuggestionStrategy,

    /// Fallback size the strategy was built with.
    max_corrections: usize,

    /// Number of vocabulary entries supplied, duplicates included.
    entry_count: usize,
}

impl Autocompleter {
    /// Build an autocompleter from an ordered word sequence.
    ///
    /// Duplicates are absorbed; the first occurrence of a word fixes its
    /// position for fallback tie-breaking. Empty strings are indexed as-is.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Trie::new();
        let mut entry_count = 0;
        for word in words {
            trie.insert(word.as_ref());
            entry_count += 1;
        }
        log::debug!(
            "built prefix index: {} distinct words from {} entries",
            trie.len(),
            entry_count
        );

        Self {
            trie,
            strategy: completion_strategy(DEFAULT_MAX_CORRECTIONS),
            max_corrections: DEFAULT_MAX_CORRECTIONS,
            entry_count,
        }
    }

    /// Build an autocompleter from line-delimited vocabulary text.
    pub fn from_text(text: &str) -> Self {
        Self::from_words(vocabulary::lines(text))
    }

    /// Build an autocompleter from a line-delimited UTF-8 vocabulary resource.
    ///
    /// Decoding fails as a whole; no autocompleter is built from a partial
    /// vocabulary.
    pub fn from_bytes(data: &[u8]) -> Result<Self, AutocompleteError> {
        let words = vocabulary::parse(data)?;
        Ok(Self::from_words(words))
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Suggestions for `prefix`.
    ///
    /// If any vocabulary word starts with `prefix`, every such word is
    /// returned in lexicographic order, without a cap. Otherwise the closest
    /// words by edit distance are returned (at most `max_corrections`, ties
    /// in vocabulary order).
    pub fn suggest(&self, prefix: &str) -> Vec<String> {
        self.suggest_detailed(prefix)
            .into_iter()
            .map(|s| s.word)
            .collect()
    }

    /// Like [`suggest`](Self::suggest), with the branch and distance of each
    /// candidate.
    pub fn suggest_detailed(&self, prefix: &str) -> Vec<Suggestion> {
        let mut status = SuggestionStatus::new(prefix);
        self.strategy.generate(&self.trie, &mut status);
        status.into_suggestions()
    }

    /// Suggestions for the trailing whitespace-delimited token of `text`.
    pub fn suggest_for_text(&self, text: &str) -> Vec<String> {
        self.suggest(text::trailing_token(text))
    }

    /// Replace the trailing token of `text` with `suggestion`.
    pub fn apply_suggestion(text: &str, suggestion: &str) -> AppliedSuggestion {
        text::apply_suggestion(text, suggestion)
    }

    /// Whether `word` is in the vocabulary.
    pub fn contains(&self, word: &str) -> bool {
        self.trie.contains(word)
    }

    /// Vocabulary words starting with `prefix`, without fallback.
    pub fn completions(&self, prefix: &str) -> Vec<String> {
        self.trie.enumerate_with_prefix(prefix)
    }

    /// All distinct vocabulary words in lexicographic order.
    pub fn words(&self) -> Vec<String> {
        self.trie.enumerate_all()
    }

    /// Number of distinct vocabulary words.
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    /// Whether the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// Number of vocabulary entries supplied at construction, duplicates
    /// included.
    pub fn entry_count(&self) -> usize {
        self.entry_count
    }

    /// The underlying prefix index.
    pub fn index(&self) -> &Trie {
        &self.trie
    }

    // =========================================================================
    // Options
    // =========================================================================

    /// Set how many closest words the fallback returns (default 10).
    ///
    /// The prefix-match branch is never capped.
    pub fn set_max_corrections(&mut self, value: usize) {
        self.max_corrections = value;
        self.strategy = completion_strategy(value);
    }

    /// Current fallback size.
    pub fn max_corrections(&self) -> usize {
        self.max_corrections
    }

    /// Library version.
    pub fn get_version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::sync::Arc;

    use autocomplete_core::SuggestionKind;

    use super::*;

    const VOCABULARY: [&str; 4] = ["cat", "car", "cart", "dog"];

    fn sample() -> Autocompleter {
        Autocompleter::from_words(VOCABULARY)
    }

    #[test]
    fn contains_vocabulary_words() {
        let ac = sample();
        assert!(ac.contains("cat"));
        assert!(!ac.contains("ca"));
    }

    #[test]
    fn suggest_prefix_branch() {
        let ac = sample();
        assert_eq!(ac.suggest("ca"), vec!["car", "cart", "cat"]);
        assert_eq!(ac.suggest("do"), vec!["dog"]);
    }

    #[test]
    fn suggest_fallback_branch() {
        let ac = sample();
        assert_eq!(ac.suggest("xy"), vec!["cat", "car", "dog", "cart"]);
    }

    #[test]
    fn suggest_empty_prefix_returns_vocabulary() {
        let ac = sample();
        let got: BTreeSet<String> = ac.suggest("").into_iter().collect();
        let expected: BTreeSet<String> = VOCABULARY.iter().map(|s| s.to_string()).collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn suggest_detailed_reports_branch() {
        let ac = sample();
        let completions = ac.suggest_detailed("car");
        assert!(completions.iter().all(|s| s.kind == SuggestionKind::Completion));
        assert_eq!(completions[0].distance, 0);

        let corrections = ac.suggest_detailed("cas");
        assert!(corrections.iter().all(|s| s.kind == SuggestionKind::Correction));
        assert_eq!(corrections[0].word, "cat");
        assert_eq!(corrections[0].distance, 1);
    }

    #[test]
    fn empty_vocabulary_returns_nothing() {
        let ac = Autocompleter::from_words(Vec::<String>::new());
        assert!(ac.is_empty());
        assert!(ac.suggest("").is_empty());
        assert!(ac.suggest("abc").is_empty());
    }

    #[test]
    fn duplicates_are_absorbed() {
        let ac = Autocompleter::from_words(["dog", "cat", "dog"]);
        assert_eq!(ac.len(), 2);
        assert_eq!(ac.entry_count(), 3);
        // "dog" keeps its first position for tie-breaking.
        assert_eq!(ac.suggest("xyz"), vec!["dog", "cat"]);
    }

    #[test]
    fn from_text_keeps_interior_empty_lines() {
        let ac = Autocompleter::from_text("cat\n\ndog\n");
        assert_eq!(ac.len(), 3);
        assert!(ac.contains(""));
    }

    #[test]
    fn from_bytes_rejects_invalid_utf8() {
        let err = Autocompleter::from_bytes(b"cat\n\xc3\x28\n").err().unwrap();
        assert!(matches!(
            err,
            AutocompleteError::Vocabulary(VocabularyError::InvalidUtf8 { line: 2, .. })
        ));
    }

    #[test]
    fn suggest_for_text_uses_trailing_token() {
        let ac = sample();
        assert_eq!(ac.suggest_for_text("my ca"), vec!["car", "cart", "cat"]);
        assert_eq!(ac.suggest_for_text("hot do"), vec!["dog"]);
    }

    #[test]
    fn suggest_for_text_with_trailing_whitespace_returns_vocabulary() {
        let ac = sample();
        let got = ac.suggest_for_text("my cat ");
        assert_eq!(got, vec!["car", "cart", "cat", "dog"]);
    }

    #[test]
    fn apply_suggestion_replaces_trailing_token() {
        let applied = Autocompleter::apply_suggestion("my ca", "cart");
        assert_eq!(applied.text, "my cart");
        assert_eq!(applied.cursor, 7);
    }

    #[test]
    fn set_max_corrections_changes_fallback_only() {
        let mut ac = sample();
        ac.set_max_corrections(2);
        assert_eq!(ac.max_corrections(), 2);
        assert_eq!(ac.suggest("xy"), vec!["cat", "car"]);
        assert_eq!(ac.suggest("ca").len(), 3);
    }

    #[test]
    fn shared_across_threads() {
        let ac = Arc::new(sample());
        std::thread::scope(|scope| {
            for _ in 0..4 {
                let ac = Arc::clone(&ac);
                scope.spawn(move || {
                    for _ in 0..100 {
                        assert_eq!(ac.suggest("ca"), vec!["car", "cart", "cat"]);
                        assert_eq!(ac.suggest("xy"), vec!["cat", "car", "dog", "cart"]);
                    }
                });
            }
        });
    }

    #[test]
    fn get_version_returns_cargo_version() {
        assert_eq!(Autocompleter::get_version(), env!("CARGO_PKG_VERSION"));
    }
}
