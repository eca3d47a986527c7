//! Output format types for the chatcorpus library.
//!
//! This module provides library-first format types that don't depend on CLI
//! frameworks.
//!
//! # Example
//!
//! ```rust,no_run
//! # fn example() -> chatcorpus::Result<()> {
//! use chatcorpus::format::{OutputFormat, write_to_format};
//! use chatcorpus::core::models::OutputConfig;
//!
//! // Write using format enum
//! write_to_format(&[], "corpus.txt", OutputFormat::Text, &OutputConfig::new())?;
//!
//! // Or use format detection from extension
//! let format = OutputFormat::from_path("corpus.jsonl")?;
//! assert_eq!(format, OutputFormat::Jsonl);
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

use crate::core::models::{OutputConfig, ReplyPair};
use crate::error::CorpusError;

/// Output format for the corpus.
///
/// - [`Text`](OutputFormat::Text) - Reply line then parent line (default)
/// - [`Jsonl`](OutputFormat::Jsonl) - One JSON object per pair
/// - [`Csv`](OutputFormat::Csv) - Semicolon-delimited table
///
/// # Example
///
/// ```rust
/// use chatcorpus::format::OutputFormat;
/// use std::str::FromStr;
///
/// let format = OutputFormat::from_str("jsonl").unwrap();
/// assert_eq!(format, OutputFormat::Jsonl);
/// assert_eq!(format.extension(), "jsonl");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Two lines per pair: reply, then parent
    #[default]
    Text,

    /// JSON Lines - one `{"reply","parent"}` object per line
    ///
    /// Also known as NDJSON.
    Jsonl,

    /// CSV with semicolon delimiter and a `Reply;Parent` header
    Csv,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatcorpus::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::Text.extension(), "txt");
    /// assert_eq!(OutputFormat::Jsonl.extension(), "jsonl");
    /// assert_eq!(OutputFormat::Csv.extension(), "csv");
    /// ```
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Jsonl => "jsonl",
            OutputFormat::Csv => "csv",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["text", "txt", "jsonl", "ndjson", "csv"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Text, OutputFormat::Jsonl, OutputFormat::Csv]
    }

    /// Returns the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text/plain",
            OutputFormat::Jsonl => "application/x-ndjson",
            OutputFormat::Csv => "text/csv",
        }
    }

    /// Detects format from a file path based on extension.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatcorpus::format::OutputFormat;
    ///
    /// let format = OutputFormat::from_path("corpus.jsonl").unwrap();
    /// assert_eq!(format, OutputFormat::Jsonl);
    /// ```
    pub fn from_path(path: &str) -> Result<Self, CorpusError> {
        let ext = path.rsplit('.').next().unwrap_or("").to_lowercase();

        match ext.as_str() {
            "txt" | "text" => Ok(OutputFormat::Text),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(CorpusError::invalid_format(
                "output",
                format!(
                    "Unknown file extension: '.{}'. Expected one of: txt, jsonl, csv",
                    ext
                ),
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "Text"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
            OutputFormat::Csv => write!(f, "CSV"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

/// Writes pairs to a file in the specified format.
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The file cannot be written
#[allow(unused_variables)]
pub fn write_to_format(
    pairs: &[ReplyPair],
    path: &str,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<(), CorpusError> {
    match format {
        OutputFormat::Text => crate::core::output::write_text(pairs, path),
        OutputFormat::Jsonl => crate::core::output::write_jsonl(pairs, path, config),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(pairs, path, config),
        #[allow(unreachable_patterns)]
        _ => Err(feature_disabled(format)),
    }
}

/// Converts pairs to a string in the specified format.
#[allow(unused_variables)]
pub fn to_format_string(
    pairs: &[ReplyPair],
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<String, CorpusError> {
    match format {
        OutputFormat::Text => Ok(crate::core::output::to_text(pairs)),
        OutputFormat::Jsonl => crate::core::output::to_jsonl(pairs, config),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(pairs, config),
        #[allow(unreachable_patterns)]
        _ => Err(feature_disabled(format)),
    }
}

#[allow(dead_code)]
fn feature_disabled(format: OutputFormat) -> CorpusError {
    CorpusError::invalid_format(
        "output",
        format!("Output format {format} requires the 'csv-output' feature to be enabled"),
    )
}
