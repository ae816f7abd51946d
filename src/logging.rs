//! Logging setup for the `kupu` binary.

use crate::config::LogConfig;
use crate::error::{KupuError, KupuResult};
use tracing_subscriber::EnvFilter;

/// Builds the event filter: `RUST_LOG` when set, otherwise the configured level.
pub fn env_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Install the global tracing subscriber described by `config`.
///
/// Events go to stderr so command results on stdout stay machine-readable.
pub fn init(config: &LogConfig) -> KupuResult<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .with_line_number(config.source_location)
        .with_file(config.source_location);

    let result = if config.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.pretty().finish())
    };

    result.map_err(|e| KupuError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_filter_uses_configured_level() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let config = LogConfig {
            level: "debug".to_string(),
            ..LogConfig::default()
        };
        assert_eq!(env_filter(&config).to_string(), "debug");
    }
}
