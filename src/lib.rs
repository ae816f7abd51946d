//! Kupu Library
//!
//! An in-memory prefix tree for word lookup and auto-completion, plus the
//! configuration, logging and command plumbing used by the `kupu` binary.
//!
//! The core is [`data_structures::kupu_trie::Trie`]. It has no I/O and no
//! failure modes; everything else in this crate exists to feed it words and
//! present its results.

pub mod cli;
pub mod config;
pub mod data_structures;
pub mod error;
pub mod logging;
pub mod words;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Kupu.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
