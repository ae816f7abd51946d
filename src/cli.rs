//! Command-line surface of the `kupu` binary.
//!
//! Commands seed a trie from the configured dataset and print their results
//! as text or JSON Lines. Execution is separated from argument parsing so
//! that commands can be driven against any writer.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use crate::config::{KupuConfig, OutputConfig, OutputFormat};
use crate::error::{KupuError, KupuResult};
use crate::words::seed_trie;

/// Word checked and deleted by the demo when none is given.
pub const DEMO_WORD: &str = "macronuclear";

/// Prefix completed by the demo when none is given.
pub const DEMO_PREFIX: &str = "macro";

/// Command line arguments for Kupu.
#[derive(Parser, Debug)]
#[clap(name = "kupu", version, author, about)]
pub struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    pub config: Option<PathBuf>,

    /// Override the configured output format
    #[clap(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Command to execute
    #[clap(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Walk through insert, lookup, completion and delete on the dataset
    Demo {
        /// Word to check and then delete
        #[clap(long, default_value = DEMO_WORD)]
        word: String,

        /// Prefix to complete before and after the delete
        #[clap(long, default_value = DEMO_PREFIX)]
        prefix: String,
    },

    /// Print every word in the dataset
    List,

    /// Print the words that extend a prefix
    Complete {
        /// Prefix to complete
        prefix: String,

        /// Print only the part after the prefix
        #[clap(long)]
        suffixes: bool,
    },

    /// Report whether a word is in the dataset
    Check {
        /// Word to look up
        word: String,
    },

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Demo {
            word: DEMO_WORD.to_string(),
            prefix: DEMO_PREFIX.to_string(),
        }
    }
}

/// A single printable result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Report {
    /// A list of words, optionally headed by a label
    Words {
        #[serde(skip_serializing_if = "Option::is_none")]
        label: Option<String>,
        words: Vec<String>,
    },
    /// Outcome of a membership check
    Membership { word: String, member: bool },
    /// Outcome of a delete
    Deleted { word: String, removed: bool },
}

impl Report {
    fn words(label: Option<String>, mut words: Vec<String>, output: &OutputConfig) -> Self {
        if output.sorted {
            words.sort();
        }
        Report::Words { label, words }
    }
}

/// Writes `report` to `out` in the configured format.
pub fn render<W: Write>(report: &Report, output: &OutputConfig, out: &mut W) -> KupuResult<()> {
    if output.format == OutputFormat::Json {
        serde_json::to_writer(&mut *out, report)?;
        writeln!(out)?;
        return Ok(());
    }

    match report {
        Report::Words { label: None, words } => {
            for word in words {
                writeln!(out, "{word}")?;
            }
        }
        Report::Words {
            label: Some(label),
            words,
        } => {
            writeln!(out, "{label}:")?;
            for word in words {
                writeln!(out, "  {word}")?;
            }
        }
        Report::Membership { word, member } => {
            writeln!(out, "Does {word} exist in the trie?: {member}")?;
        }
        Report::Deleted { word, removed } => {
            writeln!(out, "Delete {word}: {removed}")?;
        }
    }
    Ok(())
}

/// Runs `command` against the configured dataset, writing results to `out`.
pub fn run<W: Write>(command: Command, config: &KupuConfig, out: &mut W) -> KupuResult<()> {
    let output = &config.output;

    let reports = match command {
        Command::GenConfig { output: path } => return write_default_config(&path),
        Command::Demo { word, prefix } => {
            let mut trie = seed_trie(&config.dataset)?;
            let completions = format!("Completions of {prefix}");

            let mut reports = vec![
                Report::words(Some("Before".to_string()), trie.enumerate_all(), output),
                Report::Membership {
                    member: trie.is_member(&word),
                    word: word.clone(),
                },
                Report::words(
                    Some(completions.clone()),
                    trie.find_prefix_matches(&prefix),
                    output,
                ),
            ];

            let removed = trie.delete(&word);
            reports.push(Report::Deleted { word, removed });
            reports.push(Report::words(
                Some("After".to_string()),
                trie.enumerate_all(),
                output,
            ));
            reports.push(Report::words(
                Some(completions),
                trie.find_prefix_matches(&prefix),
                output,
            ));
            reports
        }
        Command::List => {
            let trie = seed_trie(&config.dataset)?;
            vec![Report::words(None, trie.enumerate_all(), output)]
        }
        Command::Complete { prefix, suffixes } => {
            let trie = seed_trie(&config.dataset)?;
            let words = if suffixes {
                trie.find_postfixes(&prefix)
            } else {
                trie.find_prefix_matches(&prefix)
            };
            vec![Report::words(None, words, output)]
        }
        Command::Check { word } => {
            let trie = seed_trie(&config.dataset)?;
            vec![Report::Membership {
                member: trie.is_member(&word),
                word,
            }]
        }
    };

    for report in &reports {
        render(report, output, out)?;
    }
    Ok(())
}

fn write_default_config(path: &Path) -> KupuResult<()> {
    info!("Generating default configuration");

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let toml = toml::to_string_pretty(&KupuConfig::default())
        .map_err(|e| KupuError::Custom(format!("Failed to serialize config: {e}")))?;
    fs::write(path, toml)?;

    info!("Default configuration written to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_string(command: Command, config: &KupuConfig) -> String {
        let mut out = Vec::new();
        run(command, config, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_args_default_to_demo() {
        let args = Args::parse_from(["kupu"]);
        assert_eq!(args.command.unwrap_or_default(), Command::default());

        let args = Args::parse_from(["kupu", "complete", "mach", "--suffixes"]);
        assert_eq!(
            args.command,
            Some(Command::Complete {
                prefix: "mach".to_string(),
                suffixes: true
            })
        );
    }

    #[test]
    fn test_complete_text_output() {
        let config = KupuConfig::default();
        let command = Command::Complete {
            prefix: "mach".to_string(),
            suffixes: false,
        };
        assert_eq!(run_to_string(command, &config), "machinable\nmachine\n");

        let command = Command::Complete {
            prefix: "mach".to_string(),
            suffixes: true,
        };
        assert_eq!(run_to_string(command, &config), "inable\nine\n");
    }

    #[test]
    fn test_check_json_output() {
        let mut config = KupuConfig::default();
        config.output.format = OutputFormat::Json;

        let output = run_to_string(
            Command::Check {
                word: "macro".to_string(),
            },
            &config,
        );
        assert_eq!(
            output,
            "{\"kind\":\"membership\",\"word\":\"macro\",\"member\":true}\n"
        );
    }

    #[test]
    fn test_demo_output() {
        let output = run_to_string(Command::default(), &KupuConfig::default());

        assert!(output.starts_with("Before:\n  macaco\n"));
        assert!(output.contains("Does macronuclear exist in the trie?: true\n"));
        assert!(output.contains(
            "Completions of macro:\n  macromolecular\n  macronuclear\n  macroscopic\n"
        ));
        assert!(output.contains("Delete macronuclear: true\n"));
        assert!(output.ends_with("Completions of macro:\n  macromolecular\n  macroscopic\n"));
    }

    #[test]
    fn test_gen_config_round_trips_through_loader() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("kupu.toml");

        run(
            Command::GenConfig {
                output: path.clone(),
            },
            &KupuConfig::default(),
            &mut Vec::new(),
        )
        .unwrap();

        let loaded = crate::config::ConfigLoader::new(Some(&path), "KUPU_TEST_GEN")
            .load()
            .unwrap();
        assert_eq!(loaded.dataset.words, KupuConfig::default().dataset.words);
    }
}
