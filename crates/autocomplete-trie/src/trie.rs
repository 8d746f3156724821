// Owning trie: insertion, membership and prefix enumeration

use std::fmt;

use crate::PrefixIndex;
use crate::node::TrieNode;
use crate::traversal::Completions;

/// A character trie over a vocabulary.
///
/// The trie is meant to be filled once and then only read. All read
/// operations take `&self` and the type has no interior mutability, so a
/// built trie can be shared between threads without locking.
///
/// Every distinct word gets an ordinal: its position among distinct words
/// in insertion order. Re-inserting a word keeps the original ordinal.
pub struct Trie {
    root: TrieNode,
    len: usize,
}

impl Trie {
    /// Create an empty trie.
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(),
            len: 0,
        }
    }

    /// Insert a word.
    ///
    /// Inserting a word that is already present is a no-op. The empty string
    /// marks the root node.
    pub fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node.child_or_insert(ch);
        }
        if node.ordinal.is_none() {
            node.ordinal = Some(self.len);
            self.len += 1;
        }
    }

    /// Whether `word` was inserted.
    ///
    /// Stops at the first character without a matching edge.
    pub fn contains(&self, word: &str) -> bool {
        self.node(word).is_some_and(TrieNode::is_end_of_word)
    }

    /// Node reached by following `prefix` from the root.
    pub fn node(&self, prefix: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for ch in prefix.chars() {
            node = node.child(ch)?;
        }
        Some(node)
    }

    /// Root node (the empty prefix).
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Lazily enumerate the words starting with `prefix`.
    ///
    /// If the prefix path breaks, the iterator is empty and no part of the
    /// trie beyond the break is visited.
    pub fn completions(&self, prefix: &str) -> Completions<'_> {
        match self.node(prefix) {
            Some(node) => Completions::new(node, prefix),
            None => Completions::empty(),
        }
    }

    /// All words starting with `prefix`, lexicographically by code point.
    pub fn enumerate_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.completions(prefix).collect()
    }

    /// All words, lexicographically by code point.
    pub fn enumerate_all(&self) -> Vec<String> {
        self.enumerate_with_prefix("")
    }

    /// Insertion ordinal of `word` among distinct words.
    pub fn ordinal(&self, word: &str) -> Option<usize> {
        self.node(word).and_then(TrieNode::ordinal)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no word (not even the empty string) was inserted.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Trie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trie").field("len", &self.len).finish_non_exhaustive()
    }
}

// The default drop glue recurses once per trie level; dismantle iteratively
// instead so deep tries cannot overflow the stack.
impl Drop for Trie {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.root.children);
        while let Some((_, mut node)) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

impl PrefixIndex for Trie {
    fn contains(&self, word: &str) -> bool {
        Trie::contains(self, word)
    }

    fn enumerate_with_prefix(&self, prefix: &str) -> Vec<String> {
        Trie::enumerate_with_prefix(self, prefix)
    }

    fn enumerate_all(&self) -> Vec<String> {
        Trie::enumerate_all(self)
    }

    fn ordinal(&self, word: &str) -> Option<usize> {
        Trie::ordinal(self, word)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    const VOCABULARY: [&str; 4] = ["cat", "car", "cart", "dog"];

    fn sample() -> Trie {
        VOCABULARY.into_iter().collect()
    }

    #[test]
    fn contains_inserted_words() {
        let trie = sample();
        for word in VOCABULARY {
            assert!(trie.contains(word), "{word} should be present");
        }
    }

    #[test]
    fn prefix_of_word_is_not_contained() {
        let trie = sample();
        assert!(!trie.contains("ca"));
        assert!(!trie.contains("c"));
        assert!(!trie.contains(""));
    }

    #[test]
    fn unknown_words_are_not_contained() {
        let trie = sample();
        assert!(!trie.contains("cats"));
        assert!(!trie.contains("xyz"));
        assert!(!trie.contains("Cat"));
    }

    #[test]
    fn empty_string_marks_root() {
        let mut trie = sample();
        trie.insert("");
        assert!(trie.contains(""));
        assert!(trie.root().is_end_of_word());
        assert_eq!(trie.len(), 5);
    }

    #[test]
    fn enumerate_with_prefix_is_lexicographic() {
        let trie = sample();
        assert_eq!(trie.enumerate_with_prefix("ca"), vec!["car", "cart", "cat"]);
        assert_eq!(trie.enumerate_with_prefix("do"), vec!["dog"]);
    }

    #[test]
    fn enumerate_with_exact_word_includes_it() {
        let trie = sample();
        assert_eq!(trie.enumerate_with_prefix("car"), vec!["car", "cart"]);
    }

    #[test]
    fn broken_prefix_path_yields_nothing() {
        let trie = sample();
        assert!(trie.enumerate_with_prefix("xy").is_empty());
        assert!(trie.enumerate_with_prefix("cab").is_empty());
        assert!(trie.enumerate_with_prefix("carts").is_empty());
    }

    #[test]
    fn enumerate_all_equals_empty_prefix() {
        let trie = sample();
        let all = trie.enumerate_all();
        assert_eq!(all, trie.enumerate_with_prefix(""));
        let set: BTreeSet<&str> = all.iter().map(String::as_str).collect();
        let expected: BTreeSet<&str> = VOCABULARY.into_iter().collect();
        assert_eq!(set, expected);
    }

    #[test]
    fn duplicate_insert_is_idempotent() {
        let once = sample();
        let mut twice = sample();
        twice.insert("cat");
        twice.insert("dog");
        assert_eq!(twice.len(), once.len());
        assert_eq!(twice.enumerate_all(), once.enumerate_all());
        assert_eq!(twice.ordinal("dog"), Some(3));
    }

    #[test]
    fn ordinals_follow_first_insertion() {
        let trie: Trie = ["b", "a", "b", "c"].into_iter().collect();
        assert_eq!(trie.ordinal("b"), Some(0));
        assert_eq!(trie.ordinal("a"), Some(1));
        assert_eq!(trie.ordinal("c"), Some(2));
        assert_eq!(trie.ordinal("d"), None);
        assert_eq!(trie.len(), 3);
    }

    #[test]
    fn independent_builds_are_identical() {
        let a = sample();
        let b = sample();
        for prefix in ["", "c", "ca", "car", "d", "x"] {
            assert_eq!(a.enumerate_with_prefix(prefix), b.enumerate_with_prefix(prefix));
        }
    }

    #[test]
    fn insertion_order_does_not_change_enumeration() {
        let forward: Trie = VOCABULARY.into_iter().collect();
        let backward: Trie = VOCABULARY.into_iter().rev().collect();
        assert_eq!(forward.enumerate_all(), backward.enumerate_all());
    }

    #[test]
    fn empty_trie() {
        let trie = Trie::new();
        assert!(trie.is_empty());
        assert!(trie.enumerate_all().is_empty());
        assert!(!trie.contains(""));
    }

    #[test]
    fn words_are_case_sensitive() {
        let trie: Trie = ["Apple", "apple"].into_iter().collect();
        assert_eq!(trie.len(), 2);
        assert_eq!(trie.enumerate_with_prefix("A"), vec!["Apple"]);
    }

    #[test]
    fn extend_adds_words() {
        let mut trie = sample();
        trie.extend(vec![String::from("door"), String::from("cat")]);
        assert_eq!(trie.len(), 5);
        assert_eq!(trie.enumerate_with_prefix("do"), vec!["dog", "door"]);
    }

    #[test]
    fn deep_trie_drops_without_overflow() {
        let long: String = std::iter::repeat_n('z', 500_000).collect();
        let mut trie = Trie::new();
        trie.insert(&long);
        assert!(trie.contains(&long));
        drop(trie);
    }

    #[test]
    fn debug_output_is_shallow() {
        let trie = sample();
        assert_eq!(format!("{trie:?}"), "Trie { len: 4, .. }");
    }

    #[test]
    fn usable_through_trait_object() {
        let trie = sample();
        let index: &dyn PrefixIndex = &trie;
        assert!(index.contains("cart"));
        assert_eq!(index.enumerate_all().len(), 4);
        assert_eq!(index.ordinal("car"), Some(1));
    }
}
