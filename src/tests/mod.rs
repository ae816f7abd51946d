//! Test modules for Kupu.
//!
//! This module contains the crate-internal test suites:
//! - Scenario tests over the seed dataset
//! - Property-based tests using proptest
//! - Configuration loading tests
//! - Shared strategies and fixtures


pub use test_utils::{seeded_trie, sorted, word_strategy, words_strategy};
