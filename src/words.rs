//! Word-list loading and trie seeding.

use std::fs;
use std::path::Path;

use crate::config::DatasetConfig;
use crate::data_structures::kupu_trie::Trie;
use crate::error::{KupuError, KupuResult};

/// Reads a newline-separated word list.
///
/// Lines are trimmed; blank lines and lines starting with `#` are skipped.
pub fn load_words<P: AsRef<Path>>(path: P) -> KupuResult<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| KupuError::WordList {
        path: path.to_path_buf(),
        source,
    })?;

    let words: Vec<String> = parse_words(&content).map(str::to_owned).collect();
    tracing::debug!(?path, count = words.len(), "loaded word list");
    Ok(words)
}

fn parse_words(content: &str) -> impl Iterator<Item = &str> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}

/// Builds a trie holding the configured inline words and word file.
pub fn seed_trie(dataset: &DatasetConfig) -> KupuResult<Trie> {
    let mut trie: Trie = dataset.words.iter().collect();
    if let Some(path) = &dataset.words_file {
        trie.extend(load_words(path)?);
    }
    tracing::info!(words = trie.len(), nodes = trie.node_count(), "trie seeded");
    Ok(trie)
}
