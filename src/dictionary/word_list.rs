//! Word lists: the storage the dictionary index borrows from.

use std::fmt::{Display, Formatter};
use std::fs;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::WordListFormat;
use crate::error::dictionary::DictionaryError;

/// Result type for word list operations.
pub type DictionaryResult<T> = Result<T, DictionaryError>;

/// A word with an optional definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// The word itself
    pub word: String,

    /// Free-form description shown next to the word
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
}

impl Entry {
    /// Creates an entry without a definition.
    pub fn new<W: Into<String>>(word: W) -> Self {
        Self {
            word: word.into(),
            definition: None,
        }
    }

    /// Creates an entry with a definition.
    pub fn with_definition<W: Into<String>, D: Into<String>>(word: W, definition: D) -> Self {
        Self {
            word: word.into(),
            definition: Some(definition.into()),
        }
    }
}

impl Display for Entry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.definition {
            Some(definition) => write!(f, "{} - {}", self.word, definition),
            None => write!(f, "{}", self.word),
        }
    }
}

/// An owned, ordered collection of entries.
///
/// A [`Dictionary`](super::Dictionary) borrows from a `WordList`, so the list
/// has to outlive every dictionary built on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    entries: Vec<Entry>,
}

impl WordList {
    /// Creates an empty word list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a word list from `reader` in the given format.
    ///
    /// `WordListFormat::Auto` cannot be resolved without a file name and is
    /// rejected here; use [`WordList::load`] for extension-based detection.
    pub fn from_reader<R: Read>(reader: R, format: WordListFormat) -> DictionaryResult<Self> {
        let entries = match format {
            WordListFormat::Lines => parse_lines(BufReader::new(reader))?,
            WordListFormat::Tsv => parse_tsv(BufReader::new(reader))?,
            WordListFormat::Json => serde_json::from_reader(BufReader::new(reader))?,
            WordListFormat::Auto => {
                return Err(DictionaryError::UnsupportedFormat(
                    "auto detection needs a file path".to_string(),
                ))
            }
        };

        Ok(Self { entries })
    }

    /// Loads a word list from a file.
    ///
    /// # Arguments
    ///
    /// * `path` - The file to read.
    /// * `format` - The file format, or `Auto` to pick it from the extension.
    pub fn load<P: AsRef<Path>>(path: P, format: WordListFormat) -> DictionaryResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DictionaryError::FileNotFound(path.to_path_buf()));
        }

        let format = format
            .resolve(path)
            .ok_or_else(|| DictionaryError::UnsupportedFormat(format!("{path:?}")))?;
        let list = Self::from_reader(fs::File::open(path)?, format)?;

        tracing::info!(
            path = %path.display(),
            format = ?format,
            entries = list.len(),
            "Loaded word list"
        );

        Ok(list)
    }

    /// Appends an entry.
    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Returns the entries in file order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Returns the number of entries, duplicates included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the list has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<Entry> for WordList {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

// Blank lines and `#` comments carry no entry
fn is_skipped(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#')
}

fn parse_lines<R: BufRead>(reader: R) -> DictionaryResult<Vec<Entry>> {
    let mut entries = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if is_skipped(&line) {
            continue;
        }
        let word = line.trim();
        if word.contains('\t') {
            return Err(DictionaryError::InvalidLine {
                line: index + 1,
                reason: "tab in a plain word list; use the tsv format".to_string(),
            });
        }
        entries.push(Entry::new(word));
    }
    Ok(entries)
}

fn parse_tsv<R: BufRead>(reader: R) -> DictionaryResult<Vec<Entry>> {
    let mut entries = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if is_skipped(&line) {
            continue;
        }
        let line = line.trim_end_matches('\r');
        let entry = match line.split_once('\t') {
            Some((word, definition)) => {
                if definition.contains('\t') {
                    return Err(DictionaryError::InvalidLine {
                        line: index + 1,
                        reason: "expected at most two tab-separated columns".to_string(),
                    });
                }
                let definition = definition.trim();
                if definition.is_empty() {
                    Entry::new(word.trim())
                } else {
                    Entry::with_definition(word.trim(), definition)
                }
            }
            None => Entry::new(line.trim()),
        };
        entries.push(entry);
    }
    Ok(entries)
}
