//! Unified parser trait for chat exports.
//!
//! Parsers turn an export file into the ordered [`Message`] collection the
//! pipeline starts from. Every record must carry the full message schema; a
//! record missing a field fails the whole parse with the record's index, so
//! no stage ever sees a partial message.
//!
//! # Example
//!
//! ```rust,no_run
//! # fn main() -> chatcorpus::Result<()> {
//! use chatcorpus::parser::{Parser, Platform, create_parser};
//! use std::path::Path;
//!
//! let parser = create_parser(Platform::Discord);
//! let messages = parser.parse(Path::new("channel_export.json"))?;
//! println!("{} messages", messages.len());
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Message;
use crate::error::CorpusError;

/// Supported export sources.
///
/// # Example
///
/// ```rust
/// use chatcorpus::parser::Platform;
/// use std::str::FromStr;
///
/// let platform = Platform::from_str("dc").unwrap();
/// assert_eq!(platform, Platform::Discord);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum Platform {
    /// JSON exports from DiscordChatExporter
    #[serde(alias = "dc")]
    Discord,

    /// One serialized [`Message`] per line
    #[serde(alias = "ndjson")]
    Jsonl,
}

impl Platform {
    /// Returns the default file extension for exports from this platform.
    pub fn default_extension(&self) -> &'static str {
        match self {
            Platform::Discord => "json",
            Platform::Jsonl => "jsonl",
        }
    }

    /// Returns all platform names including aliases.
    pub fn all_names() -> &'static [&'static str] {
        &["discord", "dc", "jsonl", "ndjson"]
    }

    /// Returns all available platforms.
    pub fn all() -> &'static [Platform] {
        &[Platform::Discord, Platform::Jsonl]
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::Discord => write!(f, "Discord"),
            Platform::Jsonl => write!(f, "JSONL"),
        }
    }
}

impl std::str::FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "discord" | "dc" => Ok(Platform::Discord),
            "jsonl" | "ndjson" => Ok(Platform::Jsonl),
            _ => Err(format!(
                "Unknown platform: '{}'. Expected one of: {}",
                s,
                Platform::all_names().join(", ")
            )),
        }
    }
}

// Conversion from CLI Source to Platform (only with cli feature)
#[cfg(feature = "cli")]
impl From<crate::cli::Source> for Platform {
    fn from(source: crate::cli::Source) -> Self {
        match source {
            crate::cli::Source::Discord => Platform::Discord,
            crate::cli::Source::Jsonl => Platform::Jsonl,
        }
    }
}

/// Trait for parsing chat exports into messages.
///
/// # Implementation Notes
///
/// Parsers must implement:
/// - [`name`](Parser::name) - Parser identifier
/// - [`platform`](Parser::platform) - Platform this parser handles
/// - [`parse_str`](Parser::parse_str) - Parse from a string
///
/// [`parse`](Parser::parse) reads the file and delegates to `parse_str`,
/// attaching the path to decode errors.
pub trait Parser: Send + Sync {
    /// Returns the human-readable name of this parser.
    fn name(&self) -> &'static str;

    /// Returns the platform this parser handles.
    fn platform(&self) -> Platform;

    /// Parses an export file and returns all messages in source order.
    ///
    /// # Errors
    ///
    /// Returns [`CorpusError`] if:
    /// - File cannot be read ([`CorpusError::Io`])
    /// - Content cannot be decoded ([`CorpusError::Parse`])
    /// - A record violates the message schema ([`CorpusError::MissingField`],
    ///   [`CorpusError::InvalidField`])
    fn parse(&self, path: &Path) -> Result<Vec<Message>, CorpusError> {
        let content = std::fs::read_to_string(path)?;
        self.parse_str(&content).map_err(|err| match err {
            CorpusError::Parse { format, source, .. } => CorpusError::Parse {
                format,
                source,
                path: Some(path.to_path_buf()),
            },
            other => other,
        })
    }

    /// Parses export content from a string.
    fn parse_str(&self, content: &str) -> Result<Vec<Message>, CorpusError>;

    /// Parses an export file (convenience method accepting &str path).
    fn parse_file(&self, path: &str) -> Result<Vec<Message>, CorpusError> {
        self.parse(Path::new(path))
    }
}

/// Creates a parser for the specified platform.
///
/// # Example
///
/// ```rust
/// use chatcorpus::parser::{Platform, create_parser};
///
/// let parser = create_parser(Platform::Discord);
/// assert_eq!(parser.name(), "Discord");
/// ```
pub fn create_parser(platform: Platform) -> Box<dyn Parser> {
    match platform {
        Platform::Discord => Box::new(crate::parsers::DiscordParser::new()),
        Platform::Jsonl => Box::new(crate::parsers::JsonlParser::new()),
    }
}
