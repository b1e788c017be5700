//! Read-only dictionary trie access for the spellsearch engine.
//!
//! The suggestion search only ever walks a dictionary; it never builds or
//! mutates one. [`TrieView`] captures exactly the operations the search
//! needs, so any prebuilt structure (a DAWG, a memory-mapped trie, ...) can be
//! plugged in. [`Trie`] is a small arena-backed implementation used for
//! in-memory word lists and tests.
//!
//! # Architecture
//!
//! - [`TrieView`] -- navigation contract consumed by the search
//! - [`trie`] -- immutable in-memory trie and its builder

pub mod trie;

use std::fmt::Debug;
use std::hash::Hash;

pub use trie::{NodeId, Trie, TrieBuilder};

/// Error type for building a trie from a word list.
#[derive(Debug, thiserror::Error)]
pub enum TrieError {
    #[error("line {line}: entry has no word characters")]
    EmptyWord { line: usize },
}

/// Navigable, read-only view of a dictionary trie.
///
/// Implementations must be immutable for as long as a search borrows them;
/// a single view may be shared by any number of concurrent searches.
pub trait TrieView {
    /// Node handle. Cheap to copy and usable as a hash key.
    type Node: Copy + Eq + Hash + Debug;

    /// The root node (empty prefix).
    fn root(&self) -> Self::Node;

    /// Follow the edge labeled `ch`, if any.
    fn child(&self, node: Self::Node, ch: char) -> Option<Self::Node>;

    /// All outgoing edges of `node`, in a deterministic order.
    fn edges(&self, node: Self::Node) -> impl Iterator<Item = (char, Self::Node)> + '_;

    /// Returns `true` if the path to `node` spells a dictionary word.
    fn is_word(&self, node: Self::Node) -> bool;

    /// Returns `true` if another word may begin after the word ending at `node`.
    fn is_compound_boundary(&self, node: Self::Node) -> bool;
}

impl<T: TrieView + ?Sized> TrieView for &T {
    type Node = T::Node;

    #[inline]
    fn root(&self) -> Self::Node {
        (**self).root()
    }

    #[inline]
    fn child(&self, node: Self::Node, ch: char) -> Option<Self::Node> {
        (**self).child(node, ch)
    }

    fn edges(&self, node: Self::Node) -> impl Iterator<Item = (char, Self::Node)> + '_ {
        (**self).edges(node)
    }

    #[inline]
    fn is_word(&self, node: Self::Node) -> bool {
        (**self).is_word(node)
    }

    #[inline]
    fn is_compound_boundary(&self, node: Self::Node) -> bool {
        (**self).is_compound_boundary(node)
    }
}
