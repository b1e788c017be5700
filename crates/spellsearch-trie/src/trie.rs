// Immutable arena-backed dictionary trie

use crate::{TrieError, TrieView};

/// Index of a node in a [`Trie`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    const ROOT: NodeId = NodeId(0);

    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Default)]
struct Node {
    /// Outgoing edges, sorted by label.
    edges: Vec<(char, NodeId)>,
    is_word: bool,
    compound_boundary: bool,
}

impl Node {
    fn find(&self, ch: char) -> Result<usize, usize> {
        self.edges.binary_search_by(|&(c, _)| c.cmp(&ch))
    }
}

/// A dictionary trie with sorted edges.
///
/// Built once through [`TrieBuilder`] and never mutated afterwards, so a
/// `&Trie` can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<Node>,
    word_count: usize,
}

impl Trie {
    /// Build a trie where every word may take part in compounds.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = TrieBuilder::new();
        for word in words {
            builder.insert(word.as_ref());
        }
        builder.build()
    }

    /// Build a trie from a plain-text word list.
    ///
    /// One entry per line. Blank lines and lines starting with `#` are
    /// skipped. A trailing `!` marks a standalone word, one that cannot be
    /// followed by another compound segment.
    pub fn from_word_list(text: &str) -> Result<Self, TrieError> {
        let mut builder = TrieBuilder::new();
        for (i, line) in text.lines().enumerate() {
            let entry = line.trim();
            if entry.is_empty() || entry.starts_with('#') {
                continue;
            }
            match entry.strip_suffix('!') {
                Some("") => return Err(TrieError::EmptyWord { line: i + 1 }),
                Some(word) => builder.insert_standalone(word),
                None => builder.insert(entry),
            }
        }
        Ok(builder.build())
    }

    /// Number of distinct words stored.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Number of nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Walk `word` from the root.
    pub fn find(&self, word: &str) -> Option<NodeId> {
        word.chars()
            .try_fold(NodeId::ROOT, |node, ch| self.child(node, ch))
    }

    /// Returns `true` if `word` is stored in the trie.
    pub fn contains(&self, word: &str) -> bool {
        self.find(word).is_some_and(|n| self.is_word(n))
    }

    #[inline]
    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }
}

impl TrieView for Trie {
    type Node = NodeId;

    #[inline]
    fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    fn child(&self, node: NodeId, ch: char) -> Option<NodeId> {
        let n = self.node(node);
        n.find(ch).ok().map(|i| n.edges[i].1)
    }

    fn edges(&self, node: NodeId) -> impl Iterator<Item = (char, NodeId)> + '_ {
        self.node(node).edges.iter().copied()
    }

    #[inline]
    fn is_word(&self, node: NodeId) -> bool {
        self.node(node).is_word
    }

    #[inline]
    fn is_compound_boundary(&self, node: NodeId) -> bool {
        self.node(node).compound_boundary
    }
}

/// Incremental builder for [`Trie`].
#[derive(Debug, Clone)]
pub struct TrieBuilder {
    nodes: Vec<Node>,
    word_count: usize,
}

impl Default for TrieBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TrieBuilder {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
            word_count: 0,
        }
    }

    /// Insert a word that may be followed by further compound segments.
    ///
    /// Empty words are ignored.
    pub fn insert(&mut self, word: &str) {
        if let Some(id) = self.insert_path(word) {
            self.nodes[id.index()].compound_boundary = true;
        }
    }

    /// Insert a word that ends any compound it appears in.
    ///
    /// A word inserted both ways keeps its compound boundary.
    pub fn insert_standalone(&mut self, word: &str) {
        self.insert_path(word);
    }

    /// Chainable form of [`insert`](Self::insert).
    pub fn word(mut self, word: &str) -> Self {
        self.insert(word);
        self
    }

    /// Chainable form of [`insert_standalone`](Self::insert_standalone).
    pub fn standalone(mut self, word: &str) -> Self {
        self.insert_standalone(word);
        self
    }

    pub fn build(self) -> Trie {
        Trie {
            nodes: self.nodes,
            word_count: self.word_count,
        }
    }

    fn insert_path(&mut self, word: &str) -> Option<NodeId> {
        if word.is_empty() {
            return None;
        }
        let mut current = NodeId::ROOT;
        for ch in word.chars() {
            current = match self.nodes[current.index()].find(ch) {
                Ok(i) => self.nodes[current.index()].edges[i].1,
                Err(pos) => {
                    let next = NodeId(self.nodes.len() as u32);
                    self.nodes.push(Node::default());
                    self.nodes[current.index()].edges.insert(pos, (ch, next));
                    next
                }
            };
        }
        let node = &mut self.nodes[current.index()];
        if !node.is_word {
            node.is_word = true;
            self.word_count += 1;
        }
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(trie: &Trie, node: NodeId) -> String {
        trie.edges(node).map(|(c, _)| c).collect()
    }

    #[test]
    fn empty_trie_has_only_root() {
        let trie = TrieBuilder::new().build();
        assert_eq!(trie.node_count(), 1);
        assert_eq!(trie.word_count(), 0);
        assert!(!trie.is_word(trie.root()));
        assert_eq!(trie.edges(trie.root()).count(), 0);
    }

    #[test]
    fn words_share_prefixes() {
        let trie = Trie::from_words(["joy", "joyful", "joyfully"]);
        assert_eq!(trie.word_count(), 3);
        // root + j o y f u l l y
        assert_eq!(trie.node_count(), 9);
        assert!(trie.contains("joy"));
        assert!(trie.contains("joyful"));
        assert!(!trie.contains("joyfu"));
        assert!(!trie.contains("joyfull"));
        assert!(trie.find("joyfull").is_some());
    }

    #[test]
    fn edges_are_sorted() {
        let trie = Trie::from_words(["zebra", "apple", "mango", "Apple"]);
        assert_eq!(labels(&trie, trie.root()), "Aamz");
    }

    #[test]
    fn child_lookup() {
        let trie = Trie::from_words(["cat", "car"]);
        let ca = trie.find("ca").unwrap();
        assert_eq!(labels(&trie, ca), "rt");
        assert!(trie.child(ca, 't').is_some());
        assert!(trie.child(ca, 'x').is_none());
    }

    #[test]
    fn duplicate_words_counted_once() {
        let trie = Trie::from_words(["one", "one", "one"]);
        assert_eq!(trie.word_count(), 1);
    }

    #[test]
    fn empty_word_is_ignored() {
        let trie = Trie::from_words(["", "a"]);
        assert_eq!(trie.word_count(), 1);
        assert!(!trie.is_word(trie.root()));
    }

    #[test]
    fn compound_boundaries() {
        let trie = TrieBuilder::new().word("one").standalone("two").build();
        let one = trie.find("one").unwrap();
        let two = trie.find("two").unwrap();
        assert!(trie.is_compound_boundary(one));
        assert!(trie.is_word(two));
        assert!(!trie.is_compound_boundary(two));
    }

    #[test]
    fn standalone_does_not_clear_boundary() {
        let trie = TrieBuilder::new().word("one").standalone("one").build();
        assert!(trie.is_compound_boundary(trie.find("one").unwrap()));
    }

    #[test]
    fn word_list_parsing() {
        let text = "# fixture\nhello\n\n  don't! \ncategory\n";
        let trie = Trie::from_word_list(text).unwrap();
        assert_eq!(trie.word_count(), 3);
        assert!(trie.contains("don't"));
        assert!(!trie.is_compound_boundary(trie.find("don't").unwrap()));
        assert!(trie.is_compound_boundary(trie.find("hello").unwrap()));
    }

    #[test]
    fn word_list_rejects_bare_marker() {
        let err = Trie::from_word_list("ok\n!\n").unwrap_err();
        assert!(matches!(err, TrieError::EmptyWord { line: 2 }));
    }

    #[test]
    fn view_through_reference() {
        fn count_root_edges<T: TrieView>(view: T) -> usize {
            view.edges(view.root()).count()
        }
        let trie = Trie::from_words(["a", "b"]);
        assert_eq!(count_root_edges(&trie), 2);
    }

    #[test]
    fn trie_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Trie>();
    }
}
