// Trie node: sorted child edges plus an end-of-word marker

/// A single trie node.
///
/// Children are stored in a vector sorted by edge character, so lookups are
/// a binary search and iteration order is ascending by code point no matter
/// in which order words were inserted. Each node is owned by its parent;
/// there are no back-references.
pub struct TrieNode {
    /// Outgoing edges, sorted by character, keys unique.
    pub(crate) children: Vec<(char, TrieNode)>,
    /// Insertion ordinal of the word ending here, if any.
    pub(crate) ordinal: Option<usize>,
}

impl TrieNode {
    /// Create an empty node with no children that ends no word.
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            ordinal: None,
        }
    }

    /// Whether the path from the root to this node spells an indexed word.
    #[inline]
    pub fn is_end_of_word(&self) -> bool {
        self.ordinal.is_some()
    }

    /// Insertion ordinal of the word ending at this node.
    #[inline]
    pub fn ordinal(&self) -> Option<usize> {
        self.ordinal
    }

    /// Child reached by the edge labelled `ch`.
    #[inline]
    pub fn child(&self, ch: char) -> Option<&TrieNode> {
        self.children
            .binary_search_by_key(&ch, |(c, _)| *c)
            .ok()
            .map(|i| &self.children[i].1)
    }

    /// Child reached by `ch`, created if missing.
    pub(crate) fn child_or_insert(&mut self, ch: char) -> &mut TrieNode {
        let idx = match self.children.binary_search_by_key(&ch, |(c, _)| *c) {
            Ok(i) => i,
            Err(i) => {
                self.children.insert(i, (ch, TrieNode::new()));
                i
            }
        };
        &mut self.children[idx].1
    }

    /// Outgoing edges in ascending character order.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = (char, &TrieNode)> {
        self.children.iter().map(|(c, n)| (*c, n))
    }

    /// Number of outgoing edges.
    #[inline]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}

impl Default for TrieNode {
    fn default() -> Self {
        Self::new()
    }
}
