//! Data structures for Kupu.
//!
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Owned node graphs with no shared mutable state
//! - Traversals bounded by an explicit work stack rather than recursion

pub mod kupu_trie;

// Re-export common data structures
pub use kupu_trie::{Trie, TrieNode};
