//! Unified error types for chatcorpus.
//!
//! This module provides a single [`CorpusError`] enum that covers every fatal
//! condition in the library. Filtering a message out of the corpus (bot author,
//! quote, command, empty after normalization) is *not* an error: those are
//! counted in [`ProcessingStats`](crate::core::ProcessingStats) instead.
//!
//! # Error Handling Philosophy
//!
//! - **Malformed input** fails fast, before any pipeline stage runs
//! - **Expected rejections** are silent and tallied
//! - **Broken invariants** that can be recovered from are logged and excluded

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatcorpus operations.
///
/// # Example
///
/// ```rust
/// use chatcorpus::error::Result;
/// use chatcorpus::Message;
///
/// fn load() -> Result<Vec<Message>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, CorpusError>;

/// The error type for all chatcorpus operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CorpusError {
    /// An I/O error occurred while reading an export or writing the corpus.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Failed to decode the input file.
    #[error("Failed to parse {format} export{}: {source}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    Parse {
        /// The format being parsed (e.g., "Discord JSON")
        format: &'static str,
        /// The underlying parse error
        #[source]
        source: ParseErrorKind,
        /// The file path, if available
        path: Option<PathBuf>,
    },

    /// A message record lacks a required field.
    ///
    /// Partial records are never coerced; the whole run is rejected.
    #[error("Message #{index} is missing required field '{field}'")]
    MissingField {
        /// Zero-based position of the record in the source
        index: usize,
        /// Name of the missing field
        field: &'static str,
    },

    /// A message record has a field that could not be interpreted.
    #[error("Message #{index} has an invalid '{field}': {value}")]
    InvalidField {
        /// Zero-based position of the record in the source
        index: usize,
        /// Name of the offending field
        field: &'static str,
        /// The raw value that was rejected
        value: String,
    },

    /// The file format doesn't match the expected structure.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// Invalid date format in filter configuration.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// The corpus configuration would break a vocabulary invariant.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// What is wrong with the configuration
        message: String,
    },

    /// JSON parsing/serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Kinds of parse errors that can occur.
#[derive(Debug, Error)]
pub enum ParseErrorKind {
    /// JSON parsing error
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    /// Generic parsing error
    #[error("{0}")]
    Other(String),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl CorpusError {
    /// Creates a parse error for DiscordChatExporter JSON.
    pub fn discord_parse(source: serde_json::Error, path: Option<PathBuf>) -> Self {
        CorpusError::Parse {
            format: "Discord JSON",
            source: ParseErrorKind::Json(source),
            path,
        }
    }

    /// Creates a parse error for a JSONL message record file.
    pub fn jsonl_parse(line: usize, source: serde_json::Error, path: Option<PathBuf>) -> Self {
        CorpusError::Parse {
            format: "JSONL",
            source: ParseErrorKind::Other(format!("line {}: {}", line, source)),
            path,
        }
    }

    /// Creates a missing-field error for the record at `index`.
    pub fn missing_field(index: usize, field: &'static str) -> Self {
        CorpusError::MissingField { index, field }
    }

    /// Creates an invalid-field error for the record at `index`.
    pub fn invalid_field(index: usize, field: &'static str, value: impl Into<String>) -> Self {
        CorpusError::InvalidField {
            index,
            field,
            value: value.into(),
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        CorpusError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        CorpusError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        CorpusError::InvalidConfig {
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, CorpusError::Io(_))
    }

    /// Returns `true` if this is a parse error.
    pub fn is_parse(&self) -> bool {
        matches!(self, CorpusError::Parse { .. })
    }

    /// Returns `true` if a message record was malformed.
    pub fn is_schema_violation(&self) -> bool {
        matches!(
            self,
            CorpusError::MissingField { .. } | CorpusError::InvalidField { .. }
        )
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, CorpusError::InvalidDate { .. })
    }

    /// Returns `true` if this is a configuration error.
    pub fn is_invalid_config(&self) -> bool {
        matches!(self, CorpusError::InvalidConfig { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
