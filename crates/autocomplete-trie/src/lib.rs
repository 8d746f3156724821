//! Prefix index over a fixed vocabulary.
//!
//! This crate provides a character trie that is built once from an ordered
//! word sequence and then queried read-only: exact membership, prefix-bounded
//! enumeration and full enumeration.
//!
//! # Architecture
//!
//! - [`node`] -- Trie nodes with children kept sorted by code point
//! - [`trie`] -- The owning [`Trie`] and its insert / lookup operations
//! - [`traversal`] -- Depth-first enumeration on an explicit stack
//!
//! Enumeration order is lexicographic by code point: children are visited in
//! ascending character order and a word is yielded before its extensions.

pub mod node;
pub mod traversal;
pub mod trie;

pub use node::TrieNode;
pub use traversal::Completions;
pub use trie::Trie;

/// Read-only prefix index interface, abstracting over the index
/// implementation so suggestion generators can take `&dyn PrefixIndex`.
pub trait PrefixIndex {
    /// Whether `word` is in the index.
    fn contains(&self, word: &str) -> bool;

    /// Every indexed word starting with `prefix`, in traversal order.
    ///
    /// Returns an empty vector as soon as the prefix path breaks.
    fn enumerate_with_prefix(&self, prefix: &str) -> Vec<String>;

    /// Every indexed word, in traversal order.
    fn enumerate_all(&self) -> Vec<String> {
        self.enumerate_with_prefix("")
    }

    /// Position of `word` in insertion order among distinct words, or `None`
    /// if it is not indexed.
    fn ordinal(&self, word: &str) -> Option<usize>;
}
