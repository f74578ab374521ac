//! Dictionary built on the prefix tree.
//!
//! A [`WordList`] owns the entries; a [`Dictionary`] indexes them by word
//! without copying. Queries are normalized the same way the words were.

mod word_list;

use std::borrow::Cow;

pub use word_list::{DictionaryResult, Entry, WordList};

use crate::config::DictionaryConfig;
use crate::data_structures::PrefixTree;

/// A searchable index over a borrowed [`WordList`].
#[derive(Debug)]
pub struct Dictionary<'a> {
    tree: PrefixTree<'a, Entry>,
    case_sensitive: bool,
    max_suggestions: usize,
}

impl<'a> Dictionary<'a> {
    /// Indexes every entry of `words`.
    ///
    /// When the same word appears more than once, the last entry wins.
    ///
    /// # Arguments
    ///
    /// * `words` - The entries to index. They must outlive the dictionary.
    /// * `config` - Case handling and suggestion limits.
    pub fn index(words: &'a WordList, config: &DictionaryConfig) -> Self {
        let mut dictionary = Self {
            tree: PrefixTree::new(),
            case_sensitive: config.case_sensitive,
            max_suggestions: config.max_suggestions,
        };

        for entry in words.entries() {
            let key = dictionary.normalize(&entry.word);
            if let Some(previous) = dictionary.tree.insert(key.as_bytes(), entry) {
                tracing::debug!(
                    word = %entry.word,
                    replaced = %previous.word,
                    "Duplicate word, keeping the later entry"
                );
            }
        }

        tracing::debug!(
            entries = words.len(),
            words = dictionary.tree.len(),
            nodes = dictionary.tree.node_count(),
            "Indexed word list"
        );

        dictionary
    }

    fn normalize<'w>(&self, word: &'w str) -> Cow<'w, str> {
        if self.case_sensitive {
            Cow::Borrowed(word)
        } else {
            Cow::Owned(word.to_ascii_lowercase())
        }
    }

    /// Returns the entry stored under exactly `word`.
    pub fn lookup(&self, word: &str) -> Option<&'a Entry> {
        self.tree.lookup(self.normalize(word).as_bytes())
    }

    /// Checks whether any indexed word starts with `prefix`.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.tree.has_prefix(self.normalize(prefix).as_bytes())
    }

    /// Returns up to `max_suggestions` entries starting with `prefix`.
    pub fn suggest(&self, prefix: &str) -> Vec<&'a Entry> {
        self.suggest_at_most(prefix, self.max_suggestions)
    }

    /// Returns up to `limit` entries starting with `prefix`.
    pub fn suggest_at_most(&self, prefix: &str, limit: usize) -> Vec<&'a Entry> {
        self.tree
            .iter_prefix(self.normalize(prefix).as_bytes())
            .take(limit)
            .collect()
    }

    /// Returns every entry starting with `prefix`.
    pub fn complete(&self, prefix: &str) -> Vec<&'a Entry> {
        self.tree.collect_with_prefix(self.normalize(prefix).as_bytes())
    }

    /// Returns every indexed entry.
    pub fn all(&self) -> Vec<&'a Entry> {
        let mut entries = Vec::with_capacity(self.tree.len());
        self.tree.traverse_all(|entry| entries.push(entry));
        entries
    }

    /// Returns the number of distinct indexed words.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if nothing is indexed.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Returns the underlying prefix tree.
    pub(crate) fn tree(&self) -> &PrefixTree<'a, Entry> {
        &self.tree
    }
}
