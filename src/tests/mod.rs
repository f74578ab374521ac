//! Test modules for Huaolelo.
//!
//! This module contains the crate-internal test suites:
//! - Configuration loading and validation
//! - Error types and reporting
//! - Word list loading and dictionary queries
//! - Console input and the interactive session
//!
//! Prefix tree unit and property tests live next to the tree in
//! `data_structures::prefix_tree::tests`.


pub use test_utils::{sample_word_list, word_strategy, TestFixture};
