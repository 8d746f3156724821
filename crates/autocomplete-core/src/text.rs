// Trailing-token extraction and suggestion application
//
// The text-entry surface asks for suggestions for the last
// whitespace-delimited token of its current text, and splices a chosen
// suggestion back in place of that token. Both halves of that contract live
// here so every front end (CLI, WASM, FFI) behaves the same.

/// Result of applying a suggestion to a piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedSuggestion {
    /// The new text.
    pub text: String,
    /// Cursor position in characters; always the end of `text`.
    pub cursor: usize,
}

/// Byte offset where the trailing token of `text` begins.
fn token_start(text: &str) -> usize {
    text.char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace())
        .map_or(0, |(i, c)| i + c.len_utf8())
}

/// Return the trailing whitespace-delimited token of `text`.
///
/// The token is everything after the last whitespace character, so it is
/// empty when `text` is empty or ends in whitespace.
pub fn trailing_token(text: &str) -> &str {
    &text[token_start(text)..]
}

/// Replace the trailing token of `text` with `suggestion`.
///
/// Everything before the token, including whitespace, is kept verbatim. When
/// the text ends in whitespace the token is empty and the suggestion is
/// appended.
pub fn apply_suggestion(text: &str, suggestion: &str) -> AppliedSuggestion {
    let start = token_start(text);
    let mut new_text = String::with_capacity(start + suggestion.len());
    new_text.push_str(&text[..start]);
    new_text.push_str(suggestion);
    let cursor = new_text.chars().count();
    AppliedSuggestion {
        text: new_text,
        cursor,
    }
}
