//! Data structures for Huaolelo.
//!
//! This module contains the in-memory index structures the dictionary is
//! built on. All implementations adhere to the project requirements:
//! - No unsafe code
//! - Borrowed, non-owning value associations
//! - Deterministic enumeration order

pub mod prefix_tree;

// Re-export common data structures
pub use prefix_tree::PrefixTree;
