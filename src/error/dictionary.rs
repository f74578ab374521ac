//! Dictionary error module.
//!
//! This module defines error types that may occur while reading word lists.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a word list.
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// Error when the word list file is missing.
    #[error("Word list not found: {0}")]
    FileNotFound(PathBuf),

    /// Error when reading the word list fails.
    #[error("Failed to read word list: {0}")]
    Io(#[from] std::io::Error),

    /// Error when a line of a text word list is malformed.
    #[error("Invalid word list entry on line {line}: {reason}")]
    InvalidLine {
        /// One-based line number
        line: usize,
        /// What was wrong with the line
        reason: String,
    },

    /// Error when a JSON word list cannot be decoded.
    #[error("Invalid JSON word list: {0}")]
    Json(#[from] serde_json::Error),

    /// Error when the word list format cannot be determined.
    #[error("Unsupported word list format: {0}")]
    UnsupportedFormat(String),
}
