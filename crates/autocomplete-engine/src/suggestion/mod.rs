// Suggestion generation
//
// Architecture:
//   - `generators`: candidate sources (SuggestionGenerator trait)
//   - `status`: collects candidates for one query
//   - `strategy`: runs primary generators, falling back to secondary ones
//     only when the primaries found nothing

pub mod generators;
pub mod status;
pub mod strategy;

pub use generators::{ClosestWords, PrefixCompletion, SuggestionGenerator};
pub use status::{Suggestion, SuggestionStatus};
pub use strategy::{
    DEFAULT_MAX_CORRECTIONS, SuggestionStrategy, completion_strategy, default_completion_strategy,
};
