//! Node implementation for the prefix tree.
//!
//! Each node stands for one position in the symbol-sequence space. Nodes own
//! their children outright and only borrow the value associated with them.

use std::collections::BTreeMap;
use std::mem;

/// A node in the prefix tree.
///
/// A node carries a value iff the symbol sequence leading to it was inserted as
/// a complete word. Children are keyed by symbol and iterate in ascending order.
#[derive(Debug)]
pub(crate) struct TrieNode<'a, V> {
    /// Child nodes keyed by the next symbol
    pub(crate) children: BTreeMap<u8, TrieNode<'a, V>>,

    /// Borrowed value for the word ending at this node
    pub(crate) value: Option<&'a V>,
}

impl<'a, V> TrieNode<'a, V> {
    /// Creates a new empty node.
    pub(crate) fn new() -> Self {
        Self {
            children: BTreeMap::new(),
            value: None,
        }
    }

    /// Follows `symbols` from this node, returning the node reached, if any.
    pub(crate) fn descend(&self, symbols: &[u8]) -> Option<&Self> {
        symbols
            .iter()
            .try_fold(self, |node, symbol| node.children.get(symbol))
    }
}

impl<'a, V> Default for TrieNode<'a, V> {
    fn default() -> Self {
        Self::new()
    }
}

// Children are released through a heap-allocated worklist, so freeing a long
// chain of nodes takes constant stack space whatever the word length.
impl<'a, V> Drop for TrieNode<'a, V> {
    fn drop(&mut self) {
        if self.children.is_empty() {
            return;
        }

        let mut pending: Vec<Self> = mem::take(&mut self.children).into_values().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(mem::take(&mut node.children).into_values());
        }
    }
}
