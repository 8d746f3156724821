// Depth-first enumeration on an explicit stack
//
// Enumeration never recurses, so arbitrarily long words or deep tries cannot
// overflow the call stack. The traversal keeps one reusable path buffer and
// a stack of pending frames; each frame remembers how much of the path
// belongs to its parent so the buffer can be truncated on backtrack.

use std::iter::FusedIterator;

use crate::node::TrieNode;

/// A pending node on the traversal stack.
struct Frame<'a> {
    node: &'a TrieNode,
    /// Byte length of the path up to (not including) this node's edge.
    base_len: usize,
    /// Edge character leading to `node`; `None` for the start node.
    edge: Option<char>,
}

/// Lazy iterator over the words below a trie node.
///
/// Words are yielded in pre-order with children visited in ascending
/// character order, i.e. lexicographically by code point. Each yielded word
/// is the query prefix followed by the traversed suffix.
pub struct Completions<'a> {
    stack: Vec<Frame<'a>>,
    path: String,
}

impl<'a> Completions<'a> {
    /// Start a traversal at `start`, whose path from the root spells `prefix`.
    pub(crate) fn new(start: &'a TrieNode, prefix: &str) -> Self {
        Self {
            stack: vec![Frame {
                node: start,
                base_len: prefix.len(),
                edge: None,
            }],
            path: prefix.to_string(),
        }
    }

    /// A traversal that yields nothing (the prefix path does not exist).
    pub(crate) fn empty() -> Self {
        Self {
            stack: Vec::new(),
            path: String::new(),
        }
    }
}

impl Iterator for Completions<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while let Some(frame) = self.stack.pop() {
            self.path.truncate(frame.base_len);
            if let Some(ch) = frame.edge {
                self.path.push(ch);
            }

            // Push in reverse so the smallest character is popped first.
            let base_len = self.path.len();
            for (ch, child) in frame.node.children().rev() {
                self.stack.push(Frame {
                    node: child,
                    base_len,
                    edge: Some(ch),
                });
            }

            if frame.node.is_end_of_word() {
                return Some(self.path.clone());
            }
        }
        None
    }
}

impl FusedIterator for Completions<'_> {}
