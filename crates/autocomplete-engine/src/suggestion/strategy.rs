// Suggestion strategy orchestration: prefix completion first, edit-distance
// ranking only when no completion exists.

use autocomplete_trie::PrefixIndex;

use super::generators::{ClosestWords, PrefixCompletion, SuggestionGenerator};
use super::status::SuggestionStatus;

/// Number of closest words returned when no vocabulary word has the prefix.
pub const DEFAULT_MAX_CORRECTIONS: usize = 10;

/// A suggestion strategy holds primary and secondary generator lists.
pub struct SuggestionStrategy {
    /// Primary generators -- run first; if any produce suggestions, secondaries are skipped.
    primary_generators: Vec<Box<dyn SuggestionGenerator>>,
    /// Secondary generators -- run only if primaries produced nothing.
    generators: Vec<Box<dyn SuggestionGenerator>>,
}

impl SuggestionStrategy {
    /// Build a strategy from explicit generator lists.
    pub fn new(
        primary_generators: Vec<Box<dyn SuggestionGenerator>>,
        generators: Vec<Box<dyn SuggestionGenerator>>,
    ) -> Self {
        Self {
            primary_generators,
            generators,
        }
    }

    /// Run the strategy: execute primary generators, then secondary ones if
    /// the primaries found nothing.
    pub fn generate(&self, index: &dyn PrefixIndex, status: &mut SuggestionStatus<'_>) {
        for generator in &self.primary_generators {
            generator.generate(index, status);
        }
        if status.suggestion_count() > 0 {
            return;
        }

        log::trace!(
            "no completions for {:?}; ranking vocabulary by edit distance",
            status.query()
        );
        for generator in &self.generators {
            generator.generate(index, status);
        }
    }
}

/// Create the completion strategy: all prefix matches, else the
/// `max_corrections` closest words.
pub fn completion_strategy(max_corrections: usize) -> SuggestionStrategy {
    let primary_generators: Vec<Box<dyn SuggestionGenerator>> = vec![Box::new(PrefixCompletion)];
    let generators: Vec<Box<dyn SuggestionGenerator>> = vec![Box::new(ClosestWords {
        limit: max_corrections,
    })];
    SuggestionStrategy::new(primary_generators, generators)
}

/// Completion strategy with the default fallback size (10).
pub fn default_completion_strategy() -> SuggestionStrategy {
    completion_strategy(DEFAULT_MAX_CORRECTIONS)
}
