//! Dictionary configuration module.
//!
//! This module defines where the word list comes from, how it is parsed, and
//! how queries against it are normalized and capped.

use super::ConfigResult;
use super::Validate;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Upper bound for `max_suggestions`.
const MAX_SUGGESTIONS_LIMIT: usize = 10_000;

/// On-disk format of a word list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum WordListFormat {
    /// Pick the format from the file extension
    #[default]
    Auto,
    /// One word per line
    Lines,
    /// `word<TAB>definition` per line
    Tsv,
    /// JSON array of `{ "word": ..., "definition": ... }` objects
    Json,
}

impl WordListFormat {
    /// Resolves `Auto` against the extension of `path`.
    ///
    /// Returns `None` when the format is `Auto` and the extension is unknown.
    pub fn resolve(self, path: &Path) -> Option<Self> {
        match self {
            Self::Auto => match path.extension().and_then(|ext| ext.to_str()) {
                Some("txt" | "lst") => Some(Self::Lines),
                Some("tsv") => Some(Self::Tsv),
                Some("json") => Some(Self::Json),
                _ => None,
            },
            explicit => Some(explicit),
        }
    }
}

/// Dictionary configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryConfig {
    /// Path to the word list (None to start with an empty dictionary)
    pub path: Option<PathBuf>,

    /// Format of the word list
    pub format: WordListFormat,

    /// Whether words and queries keep their ASCII case
    pub case_sensitive: bool,

    /// Maximum number of suggestions returned by auto-complete
    pub max_suggestions: usize,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            path: None,
            format: WordListFormat::default(),
            case_sensitive: true,
            max_suggestions: 50,
        }
    }
}

impl Validate for DictionaryConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_suggestions == 0 || self.max_suggestions > MAX_SUGGESTIONS_LIMIT {
            return Err(ConfigError::ValueOutOfRange {
                key: "dictionary.max_suggestions".to_string(),
                message: format!("must be between 1 and {MAX_SUGGESTIONS_LIMIT}"),
            });
        }

        if let Some(path) = &self.path {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::ValidationError(
                    "dictionary.path cannot be empty".to_string(),
                ));
            }
            if self.format.resolve(path).is_none() {
                return Err(ConfigError::ValidationError(format!(
                    "Cannot infer word list format from {path:?}; set dictionary.format"
                )));
            }
        }

        Ok(())
    }
}
