// Suggestion generators: each produces candidates for the query tracked by a
// SuggestionStatus, reading the vocabulary through a PrefixIndex.

use autocomplete_core::SuggestionKind;
use autocomplete_trie::PrefixIndex;

use super::status::SuggestionStatus;
use crate::distance::Levenshtein;

/// Trait for individual suggestion generators.
///
/// Generators only read the index, so one strategy can serve concurrent
/// queries.
pub trait SuggestionGenerator: Send + Sync {
    /// Generate suggestions for the query tracked by `status`.
    fn generate(&self, index: &dyn PrefixIndex, status: &mut SuggestionStatus<'_>);
}

/// Every indexed word that starts with the query, in index traversal order.
///
/// No cap is applied: a short prefix against a large vocabulary yields every
/// match.
pub struct PrefixCompletion;

impl SuggestionGenerator for PrefixCompletion {
    fn generate(&self, index: &dyn PrefixIndex, status: &mut SuggestionStatus<'_>) {
        let query_len = status.query_len();
        for word in index.enumerate_with_prefix(status.query()) {
            // The query is a prefix, so the distance is the suffix length.
            let distance = word.chars().count() - query_len;
            status.add_suggestion(word, SuggestionKind::Completion, distance);
        }
    }
}

/// The `limit` indexed words closest to the query by edit distance.
///
/// Ties are broken by vocabulary order (insertion ordinal), not by index
/// traversal order.
pub struct ClosestWords {
    pub limit: usize,
}

impl SuggestionGenerator for ClosestWords {
    fn generate(&self, index: &dyn PrefixIndex, status: &mut SuggestionStatus<'_>) {
        if self.limit == 0 {
            return;
        }
        let mut calc = Levenshtein::new(status.query());
        let mut ranked: Vec<(usize, usize, String)> = index
            .enumerate_all()
            .into_iter()
            .map(|word| {
                let distance = calc.distance(&word);
                let ordinal = index.ordinal(&word).unwrap_or(usize::MAX);
                (distance, ordinal, word)
            })
            .collect();
        ranked.sort_by_key(|&(distance, ordinal, _)| (distance, ordinal));

        for (distance, _, word) in ranked.into_iter().take(self.limit) {
            status.add_suggestion(word, SuggestionKind::Correction, distance);
        }
    }
}
