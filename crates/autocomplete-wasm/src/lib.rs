// WASM bindings for autocomplete.
//
// Provides a `WasmAutocompleter` class exported via wasm-bindgen that wraps
// the `Autocompleter` from autocomplete-engine. Structured return values
// (detailed suggestions, applied suggestions) are serialized to JavaScript
// values using serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const ac = new WasmAutocompleter("cat\ncar\ncart\ndog\n");
//   ac.suggest("ca");                  // => ["car", "cart", "cat"]
//   ac.suggest("xy");                  // => ["cat", "car", "dog", "cart"]
//   ac.suggestForText("my do");        // => ["dog"]
//   ac.applySuggestion("my do", "dog") // => { text: "my dog", cursor: 6 }
//   ac.suggestDetailed("xy");          // => [{ word: "cat", kind: "correction", distance: 3 }, ...]
//   ac.terminate();                    // optional cleanup

use serde::Serialize;
use wasm_bindgen::prelude::*;

use autocomplete_core::AppliedSuggestion;
use autocomplete_engine::{AutocompleteError, Autocompleter, Suggestion};

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// Serializable representation of a suggestion.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsSuggestion {
    word: String,
    kind: &'static str,
    distance: usize,
}

impl From<Suggestion> for JsSuggestion {
    fn from(s: Suggestion) -> Self {
        Self {
            word: s.word,
            kind: s.kind.as_str(),
            distance: s.distance,
        }
    }
}

/// Serializable representation of an applied suggestion.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsAppliedSuggestion {
    text: String,
    cursor: usize,
}

impl From<AppliedSuggestion> for JsAppliedSuggestion {
    fn from(a: AppliedSuggestion) -> Self {
        Self {
            text: a.text,
            cursor: a.cursor,
        }
    }
}

fn autocomplete_error_to_js(e: AutocompleteError) -> JsError {
    JsError::new(&e.to_string())
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

// ============================================================================
// WasmAutocompleter
// ============================================================================

/// Word completion engine for WebAssembly.
///
/// Built once from a word list, then queried on every input change.
#[wasm_bindgen]
pub struct WasmAutocompleter {
    handle: Autocompleter,
}

#[wasm_bindgen]
impl WasmAutocompleter {
    /// Create an instance from word list text (one word per line).
    #[wasm_bindgen(constructor)]
    pub fn new(words_text: &str) -> WasmAutocompleter {
        WasmAutocompleter {
            handle: Autocompleter::from_text(words_text),
        }
    }

    /// Create an instance from raw UTF-8 word list bytes.
    #[wasm_bindgen(js_name = "fromBytes")]
    pub fn from_bytes(data: &[u8]) -> Result<WasmAutocompleter, JsError> {
        let handle = Autocompleter::from_bytes(data).map_err(autocomplete_error_to_js)?;
        Ok(WasmAutocompleter { handle })
    }

    /// Create an instance from a JavaScript array of strings.
    ///
    /// Fails if any element is not a string.
    #[wasm_bindgen(js_name = "fromArray")]
    pub fn from_array(words: &js_sys::Array) -> Result<WasmAutocompleter, JsError> {
        let mut list = Vec::with_capacity(words.length() as usize);
        for (i, value) in words.iter().enumerate() {
            match value.as_string() {
                Some(word) => list.push(word),
                None => return Err(JsError::new(&format!("element {i} is not a string"))),
            }
        }
        Ok(WasmAutocompleter {
            handle: Autocompleter::from_words(list),
        })
    }

    /// Check whether a word is in the vocabulary.
    pub fn contains(&self, word: &str) -> bool {
        self.handle.contains(word)
    }

    /// Suggestions for a prefix: every completion, or the closest words by
    /// edit distance when nothing starts with the prefix.
    pub fn suggest(&self, prefix: &str) -> Vec<String> {
        self.handle.suggest(prefix)
    }

    /// Suggestions with their branch and edit distance.
    ///
    /// Returns a JavaScript array of objects with fields `word`, `kind`
    /// ("completion" or "correction") and `distance`.
    #[wasm_bindgen(js_name = "suggestDetailed")]
    pub fn suggest_detailed(&self, prefix: &str) -> Result<JsValue, JsError> {
        let detailed: Vec<JsSuggestion> = self
            .handle
            .suggest_detailed(prefix)
            .into_iter()
            .map(JsSuggestion::from)
            .collect();
        to_js(&detailed)
    }

    /// Suggestions for the last whitespace-delimited token of `text`.
    #[wasm_bindgen(js_name = "suggestForText")]
    pub fn suggest_for_text(&self, text: &str) -> Vec<String> {
        self.handle.suggest_for_text(text)
    }

    /// Vocabulary words starting with `prefix`, without fallback.
    pub fn completions(&self, prefix: &str) -> Vec<String> {
        self.handle.completions(prefix)
    }

    /// Replace the last token of `text` with `suggestion`.
    ///
    /// Returns `{ text, cursor }`, cursor in characters at the end of text.
    #[wasm_bindgen(js_name = "applySuggestion")]
    pub fn apply_suggestion(&self, text: &str, suggestion: &str) -> Result<JsValue, JsError> {
        let applied = JsAppliedSuggestion::from(Autocompleter::apply_suggestion(text, suggestion));
        to_js(&applied)
    }

    /// Number of distinct vocabulary words.
    pub fn size(&self) -> usize {
        self.handle.len()
    }

    /// Set how many closest words are returned when nothing matches.
    #[wasm_bindgen(js_name = "setMaxCorrections")]
    pub fn set_max_corrections(&mut self, value: usize) {
        self.handle.set_max_corrections(value);
    }

    /// Get the library version string.
    #[wasm_bindgen(js_name = "getVersion")]
    pub fn get_version() -> String {
        Autocompleter::get_version().to_string()
    }

    /// Release resources held by this instance.
    ///
    /// After calling this method, the instance should not be used.
    pub fn terminate(self) {
        // Drop self, releasing all resources.
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestion_dto_uses_kind_name() {
        let dto = JsSuggestion::from(Suggestion {
            word: "cat".to_string(),
            kind: autocomplete_core::SuggestionKind::Correction,
            distance: 3,
        });
        assert_eq!(dto.kind, "correction");
        assert_eq!(dto.distance, 3);
    }

    #[test]
    fn constructor_and_queries() {
        let ac = WasmAutocompleter::new("cat\ncar\ncart\ndog\n");
        assert_eq!(ac.size(), 4);
        assert!(ac.contains("dog"));
        assert_eq!(ac.suggest("ca"), vec!["car", "cart", "cat"]);
        assert_eq!(ac.suggest_for_text("hot do"), vec!["dog"]);
    }

    #[test]
    fn max_corrections_setter() {
        let mut ac = WasmAutocompleter::new("cat\ncar\ncart\ndog\n");
        ac.set_max_corrections(1);
        assert_eq!(ac.suggest("xy"), vec!["cat"]);
    }
}
