// Line-delimited vocabulary format
//
// A vocabulary resource is UTF-8 text with one word per line. Words are kept
// exactly as written: no trimming, no case folding, no filtering of empty
// lines. Reading the resource is the caller's job; this module only turns
// bytes into an ordered word sequence.

/// Error type for vocabulary decoding failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VocabularyError {
    /// The resource is not valid UTF-8.
    #[error("vocabulary is not valid UTF-8 (line {line}, byte offset {offset})")]
    InvalidUtf8 {
        /// 1-based line containing the first invalid byte.
        line: usize,
        /// Byte offset of the first invalid byte.
        offset: usize,
    },
}

/// Whether `c` ends a vocabulary line.
///
/// Besides `\n` and `\r` this accepts the other Unicode line and paragraph
/// separators, so word lists from any platform split the same way.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0b}' | '\u{0c}' | '\u{1c}'..='\u{1e}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Iterator over the words of vocabulary text. See [`lines`].
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        let Some((idx, c)) = self.rest.char_indices().find(|&(_, c)| is_line_break(c)) else {
            let line = self.rest;
            self.rest = "";
            return Some(line);
        };
        let line = &self.rest[..idx];
        let mut end = idx + c.len_utf8();
        if c == '\r' && self.rest[end..].starts_with('\n') {
            end += 1;
        }
        self.rest = &self.rest[end..];
        Some(line)
    }
}

impl std::iter::FusedIterator for Lines<'_> {}

/// Split vocabulary text into words.
///
/// Lines end at `\n`, `\r\n` or a bare `\r`, and also at the remaining
/// Unicode line separators (`\x0b`, `\x0c`, `\x1c`..`\x1e`, `\u{85}`,
/// `\u{2028}`, `\u{2029}`). A terminator after the last word does not
/// produce an extra empty word, but empty lines in between are yielded as
/// `""`.
pub fn lines(text: &str) -> Lines<'_> {
    Lines { rest: text }
}

/// 1-based line number of the position just past `prefix`.
fn line_at_end(prefix: &str) -> usize {
    let complete = lines(prefix).count();
    match prefix.chars().next_back() {
        Some(c) if !is_line_break(c) => complete,
        _ => complete + 1,
    }
}

/// Decode a vocabulary resource into its ordered word sequence.
pub fn parse(data: &[u8]) -> Result<Vec<String>, VocabularyError> {
    let text = std::str::from_utf8(data).map_err(|e| {
        let offset = e.valid_up_to();
        let valid = std::str::from_utf8(&data[..offset]).unwrap_or_default();
        VocabularyError::InvalidUtf8 {
            line: line_at_end(valid),
            offset,
        }
    })?;
    Ok(lines(text).map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_word_per_line() {
        let words = parse(b"cat\ncar\ncart\ndog\n").unwrap();
        assert_eq!(words, vec!["cat", "car", "cart", "dog"]);
    }

    #[test]
    fn missing_final_newline() {
        let words = parse(b"cat\ndog").unwrap();
        assert_eq!(words, vec!["cat", "dog"]);
    }

    #[test]
    fn crlf_line_endings() {
        let words = parse(b"cat\r\ndog\r\n").unwrap();
        assert_eq!(words, vec!["cat", "dog"]);
    }

    #[test]
    fn bare_cr_line_endings() {
        let words = parse(b"cat\rdog\r").unwrap();
        assert_eq!(words, vec!["cat", "dog"]);
    }

    #[test]
    fn mixed_line_endings() {
        let words = parse(b"cat\r\ndog\rcar\ncart").unwrap();
        assert_eq!(words, vec!["cat", "dog", "car", "cart"]);
    }

    #[test]
    fn unicode_line_separators() {
        let words = parse("cat\u{2028}dog\u{85}car\u{0c}cart\u{2029}".as_bytes()).unwrap();
        assert_eq!(words, vec!["cat", "dog", "car", "cart"]);
    }

    #[test]
    fn cr_then_empty_line() {
        let words = parse(b"cat\r\rdog").unwrap();
        assert_eq!(words, vec!["cat", "", "dog"]);
    }

    #[test]
    fn interior_empty_lines_are_kept() {
        let words = parse(b"cat\n\ndog\n").unwrap();
        assert_eq!(words, vec!["cat", "", "dog"]);
    }

    #[test]
    fn words_are_not_trimmed_or_folded() {
        let words = parse(" Cat \nDOG\n".as_bytes()).unwrap();
        assert_eq!(words, vec![" Cat ", "DOG"]);
    }

    #[test]
    fn empty_resource_is_empty_vocabulary() {
        assert!(parse(b"").unwrap().is_empty());
    }

    #[test]
    fn non_ascii_words() {
        let words = parse("kissa\nkoira\nhäkki\n".as_bytes()).unwrap();
        assert_eq!(words[2], "häkki");
    }

    #[test]
    fn invalid_utf8_reports_line() {
        let err = parse(b"cat\ndog\nb\xffd\n").unwrap_err();
        assert_eq!(err, VocabularyError::InvalidUtf8 { line: 3, offset: 9 });
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn invalid_utf8_line_counts_bare_cr() {
        let err = parse(b"cat\rdog\r\xff\n").unwrap_err();
        assert_eq!(err, VocabularyError::InvalidUtf8 { line: 3, offset: 8 });
        let err = parse(b"\xff").unwrap_err();
        assert_eq!(err, VocabularyError::InvalidUtf8 { line: 1, offset: 0 });
    }
}
