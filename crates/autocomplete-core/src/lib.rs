//! Shared types for the autocomplete workspace.
//!
//! - [`enums`] -- suggestion classification
//! - [`vocabulary`] -- line-delimited word list format
//! - [`text`] -- trailing-token extraction and suggestion application

pub mod enums;
pub mod text;
pub mod vocabulary;

pub use enums::SuggestionKind;
pub use text::{AppliedSuggestion, apply_suggestion, trailing_token};
pub use vocabulary::VocabularyError;
