//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`Source`] - Supported export sources
//! - [`OutputFormat`] - Corpus format options
//!
//! # Using Source and OutputFormat in Libraries
//!
//! ```rust
//! use chatcorpus::cli::{OutputFormat, Source};
//! use chatcorpus::parser::{Platform, create_parser};
//!
//! let parser = create_parser(Platform::from(Source::Discord));
//! assert_eq!(parser.name(), "Discord");
//!
//! let format = OutputFormat::Jsonl;
//! assert_eq!(format.to_string(), "JSONL");
//! ```

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

/// Default output path; its extension follows `--format` when left unchanged.
pub const DEFAULT_OUTPUT: &str = "corpus.txt";

/// Turn exported chat logs into (reply, parent) training pairs.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatcorpus")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatcorpus discord general.json
    chatcorpus dc general.json -o pairs.jsonl -f jsonl --ids
    chatcorpus dc general.json --since-first-quote --gap 45
    chatcorpus jsonl messages.jsonl --config corpus.json --sort
    chatcorpus --dump-config > corpus.json

Set RUST_LOG=debug for per-stage diagnostics.")]
pub struct Args {
    /// Export source type
    #[arg(value_enum, required_unless_present = "dump_config")]
    pub source: Option<Source>,

    /// Path to input file
    #[arg(required_unless_present = "dump_config")]
    pub input: Option<String>,

    /// Path to output file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// JSON file overriding the built-in vocabulary and thresholds
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,

    /// Inactivity gap in minutes that opens a new thread
    #[arg(long, value_name = "MINUTES")]
    pub gap: Option<u32>,

    /// Additional mention tag to strip (repeatable)
    #[arg(long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Keep only messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Keep only messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Drop everything older than the first quote-reply
    #[arg(long)]
    pub since_first_quote: bool,

    /// Sort messages by timestamp before segmenting
    #[arg(long)]
    pub sort: bool,

    /// Include group ids in JSONL/CSV output
    #[arg(long)]
    pub ids: bool,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    pub dump_config: bool,
}

/// Supported export sources.
///
/// - [`Discord`](Source::Discord) - JSON export from DiscordChatExporter
/// - [`Jsonl`](Source::Jsonl) - one message record per line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// DiscordChatExporter JSON export
    #[value(alias = "dc")]
    #[serde(alias = "dc")]
    Discord,

    /// JSON Lines message records
    #[value(alias = "ndjson")]
    #[serde(alias = "ndjson")]
    Jsonl,
}

impl Source {
    /// Returns the default file extension for this source.
    pub fn default_extension(&self) -> &'static str {
        match self {
            Source::Discord => "json",
            Source::Jsonl => "jsonl",
        }
    }

    /// Returns all supported source names (including aliases).
    pub fn all_names() -> &'static [&'static str] {
        &["discord", "dc", "jsonl", "ndjson"]
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Discord => write!(f, "Discord"),
            Source::Jsonl => write!(f, "JSONL"),
        }
    }
}

impl std::str::FromStr for Source {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "discord" | "dc" => Ok(Source::Discord),
            "jsonl" | "ndjson" => Ok(Source::Jsonl),
            _ => Err(format!(
                "Unknown source: '{}'. Expected one of: {}",
                s,
                Source::all_names().join(", ")
            )),
        }
    }
}

/// Corpus format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Reply line then parent line (default)
    #[default]
    #[value(alias = "txt")]
    Text,

    /// JSON Lines - one object per pair
    Jsonl,

    /// CSV with semicolon delimiter
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::format::OutputFormat::from(*self))
    }
}

// Conversion to library format type
impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Text => crate::format::OutputFormat::Text,
            OutputFormat::Jsonl => crate::format::OutputFormat::Jsonl,
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
        }
    }
}
