//! # Chatcorpus
//!
//! A Rust library for turning exported chat logs into a conversational
//! training corpus of (reply, parent) pairs.
//!
//! ## Overview
//!
//! A chat log is a flat, time-ordered list of messages. Chatcorpus recovers
//! the conversational structure it implies:
//!
//! 1. **Normalize** every message into a canonical token stream (URLs and
//!    mentions removed, emoji and punctuation tokenized, diacritics folded,
//!    lower-cased, whitelist-filtered), dropping bots, quote-replies and
//!    bot commands
//! 2. **Segment** the stream into threads wherever the silence between two
//!    messages exceeds a threshold (30 minutes by default)
//! 3. **Group** consecutive same-author messages of a thread into one turn,
//!    joined by the `¤newmsg¤` boundary token
//! 4. **Link** every turn that did not open a thread to the turn before it
//! 5. **Write** one (reply, parent) pair per linked turn
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatcorpus::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let parser = create_parser(Platform::Discord);
//!     let messages = parser.parse("general.json".as_ref())?;
//!
//!     let corpus = build_corpus(&messages, &CorpusConfig::default(), &FilterConfig::new())?;
//!     write_text(&corpus.pairs, "corpus.txt")?;
//!
//!     println!("{} pairs", corpus.stats.pair_count);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`message`] - [`Message`], the raw unit handed over by parsers
//! - [`config`] - [`CorpusConfig`](config::CorpusConfig), every tunable constant
//! - [`vocab`] - built-in emoji, diacritic and tag tables
//! - [`core`] - the pipeline stages
//!   - [`core::normalizer`] - [`Normalizer`](core::Normalizer)
//!   - [`core::segmenter`] - [`segment_threads`](core::segment_threads)
//!   - [`core::grouper`] - [`build_groups`](core::build_groups)
//!   - [`core::linker`] - [`link_replies`](core::link_replies), [`extract_pairs`](core::extract_pairs)
//!   - [`core::filter`] - [`FilterConfig`](core::FilterConfig), [`apply_filters`](core::apply_filters)
//!   - [`core::processor`] - [`build_corpus`](core::build_corpus), [`ProcessingStats`](core::ProcessingStats)
//!   - [`core::output`] - text, JSONL and CSV writers
//! - [`parser`] / [`parsers`] - [`Parser`](parser::Parser) trait, Discord and JSONL parsers
//! - [`format`] - [`OutputFormat`](format::OutputFormat) and [`write_to_format`](format::write_to_format)
//! - [`error`] - [`CorpusError`], [`Result`]
//! - [`prelude`] - Convenient re-exports
//!
//! ## Logging
//!
//! The library logs through the [`log`] facade: `debug` per stage, `info` for
//! the run summary, `warn` for dangling parents and out-of-order timestamps.
//! Install any logger (the binary uses `env_logger`) to see them.

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod message;
pub mod parser;
pub mod parsers;
pub mod vocab;

// Re-export the main types at the crate root for convenience
pub use error::{CorpusError, Result};
pub use message::Message;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatcorpus::prelude::*;
/// ```
pub mod prelude {
    // Core message type
    pub use crate::Message;

    // Error types
    pub use crate::error::{CorpusError, Result};

    // Configuration
    pub use crate::config::CorpusConfig;

    // Parsers
    pub use crate::parser::{Parser, Platform, create_parser};
    pub use crate::parsers::{DiscordParser, JsonlParser};

    // Models
    pub use crate::core::models::{GroupId, MessageGroup, OutputConfig, ReplyPair, ThreadId};

    // Filtering
    pub use crate::core::filter::{FilterConfig, apply_filters};

    // Processing
    pub use crate::core::processor::{Corpus, ProcessingStats, build_corpus};

    // Output (file writers and string converters)
    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    pub use crate::core::output::{to_jsonl, to_text, write_jsonl, write_text};

    // Format selection
    pub use crate::format::{OutputFormat, write_to_format};
}
