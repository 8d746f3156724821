// Suggestion status: the query being completed and the candidates found so far

use std::collections::HashSet;

use autocomplete_core::SuggestionKind;

/// A suggestion candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// The suggested word.
    pub word: String,
    /// Which branch produced it.
    pub kind: SuggestionKind,
    /// Levenshtein distance from the query to `word`.
    pub distance: usize,
}

/// Tracks one suggestion request: the query and the collected candidates,
/// in the order generators produced them. A word is kept only once.
pub struct SuggestionStatus<'a> {
    /// The prefix for which suggestions are being generated.
    query: &'a str,
    /// Query length in characters.
    query_len: usize,
    /// Collected suggestions.
    suggestions: Vec<Suggestion>,
    /// Words already collected, for deduplication.
    seen: HashSet<String>,
}

impl<'a> SuggestionStatus<'a> {
    /// Create a new status for the given query.
    pub fn new(query: &'a str) -> Self {
        Self {
            query,
            query_len: query.chars().count(),
            suggestions: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Append a candidate.
    ///
    /// A word that was already collected is ignored; the first occurrence
    /// keeps its position, kind and distance.
    pub fn add_suggestion(&mut self, word: String, kind: SuggestionKind, distance: usize) {
        if !self.seen.insert(word.clone()) {
            return; // duplicate
        }
        self.suggestions.push(Suggestion {
            word,
            kind,
            distance,
        });
    }

    /// Return the current suggestion count.
    pub fn suggestion_count(&self) -> usize {
        self.suggestions.len()
    }

    /// Return the query.
    pub fn query(&self) -> &'a str {
        self.query
    }

    /// Return the query length in characters.
    pub fn query_len(&self) -> usize {
        self.query_len
    }

    /// Consume the status and return the collected suggestions.
    pub fn into_suggestions(self) -> Vec<Suggestion> {
        self.suggestions
    }

    /// Return a reference to the collected suggestions.
    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }
}
