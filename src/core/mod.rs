//! Core corpus pipeline for chatcorpus.
//!
//! This module contains:
//! - [`models`] - Data structures passed between stages
//! - [`roster`] - Author names used for mention stripping
//! - [`normalizer`] - Rejection rules and token normalization
//! - [`segmenter`] - Thread segmentation by inactivity gap
//! - [`grouper`] - Same-author run grouping
//! - [`linker`] - Parent linking and pair extraction
//! - [`filter`] - Message window filtering by date and first quote
//! - [`processor`] - The whole pipeline and its statistics
//! - [`output`] - Corpus writers (text, JSONL, CSV)
//!
//! # Quick Start
//!
//! ```rust
//! use chatcorpus::config::CorpusConfig;
//! use chatcorpus::core::{FilterConfig, OutputConfig, build_corpus, to_text};
//!
//! # fn main() -> chatcorpus::Result<()> {
//! let corpus = build_corpus(&[], &CorpusConfig::default(), &FilterConfig::new())?;
//! assert_eq!(to_text(&corpus.pairs), "");
//! # let _ = OutputConfig::new();
//! # Ok(())
//! # }
//! ```

pub mod filter;
pub mod grouper;
pub mod linker;
pub mod models;
pub mod normalizer;
pub mod output;
pub mod processor;
pub mod roster;
pub mod segmenter;

// Re-export main types for convenience
pub use filter::{FilterConfig, apply_filters};
pub use grouper::build_groups;
pub use linker::{Extraction, extract_pairs, link_replies};
pub use models::{
    GroupId, MessageGroup, NormalizedMessage, OutputConfig, ReplyPair, ThreadId, ThreadedMessage,
};
pub use normalizer::{DropCounts, DropReason, Normalized, Normalizer};
pub use processor::{Corpus, ProcessingStats, build_corpus};
pub use roster::Roster;
pub use segmenter::{Segmentation, segment_threads, sort_by_timestamp};

// Re-export Message from the crate root
pub use crate::Message;

pub use output::{to_jsonl, to_text, write_jsonl, write_text};
// Conditionally re-export output writers
#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
