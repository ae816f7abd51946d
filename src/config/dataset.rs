//! Dataset configuration module.
//!
//! Defines which words the trie is seeded with before a command runs.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Words used when no other list is configured.
pub const SEED_WORDS: [&str; 9] = [
    "macaco",
    "macaroni",
    "macaroon",
    "machinable",
    "machine",
    "macromolecular",
    "macroscopic",
    "macronuclear",
    "macro",
];

/// Dataset configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Words inserted inline
    pub words: Vec<String>,

    /// Optional newline-separated word list inserted after `words`
    pub words_file: Option<PathBuf>,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            words: SEED_WORDS.iter().map(|w| w.to_string()).collect(),
            words_file: None,
        }
    }
}

impl Validate for DatasetConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.words.iter().any(|w| w.trim().is_empty()) {
            return Err(ConfigError::ValidationError(
                "dataset.words must not contain empty words".to_string(),
            ));
        }
        Ok(())
    }
}
