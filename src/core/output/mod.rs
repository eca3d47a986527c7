//! Corpus writers.
//!
//! This module provides writers for the finished list of [`ReplyPair`](crate::core::ReplyPair)s:
//! - [`write_text`] / [`to_text`] - two lines per pair, reply then parent (default)
//! - [`write_jsonl`] / [`to_jsonl`] - one `{"reply","parent"}` object per line
//! - [`write_csv`] / [`to_csv`] - `Reply;Parent` table - requires `csv-output` feature
//!
//! # Choosing a Format
//!
//! | Format | Use Case |
//! |--------|----------|
//! | Text | Seq2seq trainers that read line pairs |
//! | JSONL | Dataset tooling, streaming loaders |
//! | CSV | Spreadsheets, quick inspection |
//!
//! # Example
//!
//! ```rust,no_run
//! # fn main() -> chatcorpus::Result<()> {
//! use chatcorpus::core::output::{write_text, write_jsonl};
//! use chatcorpus::core::models::{GroupId, OutputConfig, ReplyPair};
//!
//! let pairs = vec![ReplyPair {
//!     reply_group_id: GroupId(2),
//!     parent_group_id: GroupId(1),
//!     reply: "yo".into(),
//!     parent: "hi".into(),
//! }];
//!
//! write_text(&pairs, "corpus.txt")?;
//! write_jsonl(&pairs, "corpus.jsonl", &OutputConfig::new().with_ids())?;
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
mod jsonl_writer;
mod text_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
pub use jsonl_writer::{to_jsonl, write_jsonl};
pub use text_writer::{to_text, write_text, write_text_to};
