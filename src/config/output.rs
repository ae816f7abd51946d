//! Output configuration module.

use super::{ConfigResult, Validate};
use serde::{Deserialize, Serialize};

/// Rendering used for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One entry per line
    Text,
    /// A single JSON document
    Json,
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: OutputFormat,

    /// Whether word lists are sorted before printing
    pub sorted: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            sorted: true,
        }
    }
}

impl Validate for OutputConfig {
    fn validate(&self) -> ConfigResult<()> {
        Ok(())
    }
}
