//! Huaolelo Library
//!
//! This library contains the components of Huaolelo: a byte-keyed prefix tree,
//! the dictionary built on it, and the console front end used by the binary.
//! The library is designed to be used by the binary crate, but can also
//! be used as a dependency by other projects.
//!
//! # Architecture
//!
//! - [`data_structures::PrefixTree`] indexes borrowed values by word
//! - [`dictionary::WordList`] owns entries; [`dictionary::Dictionary`] indexes them
//! - [`console`] reads validated input and runs the interactive session
//! - [`config`] and [`error`] provide layered configuration and error types

pub mod config;
pub mod console;
pub mod data_structures;
pub mod dictionary;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Huaolelo.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
