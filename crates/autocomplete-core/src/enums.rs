// Shared enums

/// Which branch of the suggestion algorithm produced a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SuggestionKind {
    /// The word starts with the query (prefix-match branch).
    Completion,
    /// The word was ranked by edit distance because nothing matched the prefix.
    Correction,
}

impl SuggestionKind {
    /// Stable lowercase name, used by the bindings and CLI output.
    pub fn as_str(self) -> &'static str {
        match self {
            SuggestionKind::Completion => "completion",
            SuggestionKind::Correction => "correction",
        }
    }
}

impl std::fmt::Display for SuggestionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
