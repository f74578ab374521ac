//! Prefix Tree Implementation
//!
//! This module provides a byte-keyed trie that associates borrowed values with
//! words and answers exact lookups, prefix checks and auto-complete queries.
//!
//! # Ordering
//!
//! Every enumeration ([`PrefixTree::iter`], [`PrefixTree::iter_prefix`],
//! [`PrefixTree::collect_with_prefix`], [`PrefixTree::traverse_all`] and
//! [`PrefixTree::entries_with_prefix`]) walks depth-first. A node's own value
//! is emitted before its children, and children are visited in ascending byte
//! order. For ASCII words this is plain lexicographic order of the words.
//!
//! # Ownership
//!
//! The tree owns its nodes and nothing else. Values are held as `&'a V`, so the
//! caller keeps them alive for as long as the tree exists and the tree never
//! creates, clones or drops a `V`. Mutating the tree while one of its iterators
//! is alive is rejected at compile time.

mod iter;
mod node;

#[cfg(test)]
mod tests;

pub use iter::{Entries, Iter};
use node::TrieNode;

/// A prefix tree (trie) mapping byte strings to borrowed values.
///
/// Key features:
/// * One node per symbol (byte), created lazily on insert
/// * Exact lookup, prefix existence and prefix enumeration in `O(len(word))`
///   plus the size of the enumerated subtree
/// * Deterministic enumeration order (see the [module docs](self))
///
/// The type is deliberately not `Clone`. There is no way to remove a single
/// word; [`PrefixTree::clear`] drops the whole tree.
///
/// The tree has no internal synchronization. Shared reads from several threads
/// are fine when `V: Sync`; mutation needs `&mut self` and therefore exclusive
/// access.
#[derive(Debug)]
pub struct PrefixTree<'a, V> {
    /// The root node, standing for the empty word
    root: TrieNode<'a, V>,

    /// Number of complete words stored
    words: usize,

    /// Number of nodes, root included
    nodes: usize,
}

impl<'a, V> PrefixTree<'a, V> {
    /// Creates a new empty `PrefixTree`.
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(),
            words: 0,
            nodes: 1,
        }
    }

    /// Associates `value` with `word`.
    ///
    /// Missing nodes along the path are created. An existing association for
    /// the same word is replaced; the previously held reference is returned and
    /// its referent is left untouched. The empty word is legal and attaches the
    /// value to the root.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to insert.
    /// * `value` - The value to associate with the word.
    ///
    /// # Returns
    ///
    /// The reference previously associated with `word`, if there was one.
    pub fn insert<K>(&mut self, word: K, value: &'a V) -> Option<&'a V>
    where
        K: AsRef<[u8]>,
    {
        let word = word.as_ref();
        let mut created = 0;
        let mut node = &mut self.root;
        for &symbol in word {
            node = node.children.entry(symbol).or_insert_with(|| {
                created += 1;
                TrieNode::new()
            });
        }

        let previous = node.value.replace(value);
        self.nodes += created;
        if previous.is_none() {
            self.words += 1;
        }

        tracing::trace!(
            word_len = word.len(),
            new_nodes = created,
            replaced = previous.is_some(),
            "Inserted word"
        );

        previous
    }

    /// Returns the value associated with `word`.
    ///
    /// Returns `None` when the path does not exist, or when it exists only as
    /// the prefix of longer words.
    pub fn lookup<K>(&self, word: K) -> Option<&'a V>
    where
        K: AsRef<[u8]>,
    {
        self.root.descend(word.as_ref()).and_then(|node| node.value)
    }

    /// Checks whether `prefix` is a prefix of some stored word.
    ///
    /// The empty prefix always matches, even on an empty tree.
    pub fn has_prefix<P>(&self, prefix: P) -> bool
    where
        P: AsRef<[u8]>,
    {
        self.root.descend(prefix.as_ref()).is_some()
    }

    /// Collects every value whose word starts with `prefix`.
    ///
    /// The result is empty when no stored word has that prefix. A word equal
    /// to `prefix` is included, and comes first.
    pub fn collect_with_prefix<P>(&self, prefix: P) -> Vec<&'a V>
    where
        P: AsRef<[u8]>,
    {
        self.iter_prefix(prefix).collect()
    }

    /// Like [`collect_with_prefix`](Self::collect_with_prefix), but pairs
    /// each value with the full word it is stored under.
    pub fn entries_with_prefix<P>(&self, prefix: P) -> Vec<(Vec<u8>, &'a V)>
    where
        P: AsRef<[u8]>,
    {
        let prefix = prefix.as_ref();
        Entries::new(prefix, self.root.descend(prefix)).collect()
    }

    /// Applies `visit` to every stored value, in enumeration order.
    ///
    /// Equivalent to visiting `collect_with_prefix("")` one by one.
    pub fn traverse_all<F>(&self, visit: F)
    where
        F: FnMut(&'a V),
    {
        self.iter().for_each(visit);
    }

    /// Returns a lazy iterator over every stored value.
    pub fn iter(&self) -> Iter<'_, 'a, V> {
        Iter::new(Some(&self.root))
    }

    /// Returns a lazy iterator over the values whose word starts with `prefix`.
    pub fn iter_prefix<P>(&self, prefix: P) -> Iter<'_, 'a, V>
    where
        P: AsRef<[u8]>,
    {
        Iter::new(self.root.descend(prefix.as_ref()))
    }

    /// Drops every node, returning the tree to its empty state.
    ///
    /// Referenced values are not affected. Clearing an empty tree is a no-op.
    /// Nodes are released iteratively, so arbitrarily long words are safe.
    pub fn clear(&mut self) {
        if self.nodes == 1 && self.words == 0 {
            return;
        }

        tracing::debug!(
            words = self.words,
            nodes = self.nodes,
            "Clearing prefix tree"
        );

        self.root = TrieNode::new();
        self.words = 0;
        self.nodes = 1;
    }

    /// Returns the number of complete words stored.
    pub fn len(&self) -> usize {
        self.words
    }

    /// Returns `true` if no word is stored.
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Returns the number of nodes in the tree, root included.
    ///
    /// An empty tree has exactly one node. Re-inserting an existing word never
    /// changes this count.
    pub fn node_count(&self) -> usize {
        self.nodes
    }
}

impl<'a, V> Default for PrefixTree<'a, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'t, 'a, V> IntoIterator for &'t PrefixTree<'a, V> {
    type Item = &'a V;
    type IntoIter = Iter<'t, 'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, V, K> Extend<(K, &'a V)> for PrefixTree<'a, V>
where
    K: AsRef<[u8]>,
{
    fn extend<I: IntoIterator<Item = (K, &'a V)>>(&mut self, iter: I) {
        for (word, value) in iter {
            self.insert(word, value);
        }
    }
}

impl<'a, V, K> FromIterator<(K, &'a V)> for PrefixTree<'a, V>
where
    K: AsRef<[u8]>,
{
    fn from_iter<I: IntoIterator<Item = (K, &'a V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
