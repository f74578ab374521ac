//! Lazy traversal over the values of a subtree.

use std::iter::FusedIterator;

use super::node::TrieNode;

/// Iterator over the values stored below (and at) a node.
///
/// Values come out depth-first: a node's own value first, then each child
/// subtree in ascending symbol order. The walk uses an explicit stack, so
/// arbitrarily long words do not grow the call stack.
#[derive(Debug)]
pub struct Iter<'t, 'a, V> {
    stack: Vec<&'t TrieNode<'a, V>>,
}

impl<'t, 'a, V> Iter<'t, 'a, V> {
    pub(crate) fn new(start: Option<&'t TrieNode<'a, V>>) -> Self {
        Self {
            stack: start.into_iter().collect(),
        }
    }
}

impl<'t, 'a, V> Iterator for Iter<'t, 'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            // Reversed so the smallest symbol is popped first
            self.stack.extend(node.children.values().rev());
            if let Some(value) = node.value {
                return Some(value);
            }
        }
        None
    }
}

impl<'t, 'a, V> FusedIterator for Iter<'t, 'a, V> {}

/// Iterator over `(word, value)` pairs below a node, in the same order as [`Iter`].
#[derive(Debug)]
pub struct Entries<'t, 'a, V> {
    stack: Vec<(Vec<u8>, &'t TrieNode<'a, V>)>,
}

impl<'t, 'a, V> Entries<'t, 'a, V> {
    pub(crate) fn new(prefix: &[u8], start: Option<&'t TrieNode<'a, V>>) -> Self {
        Self {
            stack: start.map(|node| (prefix.to_vec(), node)).into_iter().collect(),
        }
    }
}

impl<'t, 'a, V> Iterator for Entries<'t, 'a, V> {
    type Item = (Vec<u8>, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((word, node)) = self.stack.pop() {
            for (symbol, child) in node.children.iter().rev() {
                let mut child_word = Vec::with_capacity(word.len() + 1);
                child_word.extend_from_slice(&word);
                child_word.push(*symbol);
                self.stack.push((child_word, child));
            }
            if let Some(value) = node.value {
                return Some((word, value));
            }
        }
        None
    }
}

impl<'t, 'a, V> FusedIterator for Entries<'t, 'a, V> {}
