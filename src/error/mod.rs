//! Error module for Kupu.
//!
//! The trie itself is infallible. Errors only arise on the surfaces around
//! it: loading configuration, reading word lists, and writing output.

use thiserror::Error;

pub mod config;

/// Result type alias used throughout Kupu.
pub type KupuResult<T> = Result<T, KupuError>;

/// Core error enum for Kupu.
#[derive(Error, Debug)]
pub enum KupuError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// IO errors that may occur while reading word lists or writing output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors when rendering JSON output.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A word list could not be read.
    #[error("Failed to load word list {path:?}: {source}")]
    WordList {
        /// Path of the word list
        path: std::path::PathBuf,
        /// Underlying IO failure
        #[source]
        source: std::io::Error,
    },

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}
