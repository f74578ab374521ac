//! Console input error module.

use thiserror::Error;

/// Errors that can occur while reading validated console input.
#[derive(Error, Debug)]
pub enum InputError {
    /// Input ended before a valid value was entered.
    #[error("Input ended before a valid value was entered")]
    UnexpectedEof,

    /// Reading from or writing to the console failed.
    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),
}
