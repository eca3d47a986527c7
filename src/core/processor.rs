//! End-to-end corpus construction.
//!
//! [`build_corpus`] chains every stage:
//!
//! ```text
//! messages ─► window filter ─► normalizer ─► (sort) ─► segmenter
//!          ─► group builder ─► reply linker ─► pair extraction ─► Corpus
//! ```
//!
//! Each stage fully consumes the previous stage's output; no stage reaches
//! back into an earlier one.

use log::info;
use serde::Serialize;

use super::filter::{FilterConfig, apply_filters};
use super::grouper::build_groups;
use super::linker::{extract_pairs, link_replies};
use super::models::{MessageGroup, ReplyPair};
use super::normalizer::{DropCounts, Normalizer};
use super::roster::Roster;
use super::segmenter::{segment_threads, sort_by_timestamp};
use crate::Message;
use crate::config::CorpusConfig;
use crate::error::Result;

/// Counters collected while building a corpus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProcessingStats {
    /// Messages handed to the pipeline
    pub input_count: usize,
    /// Messages left after the window filter
    pub filtered_count: usize,
    /// Messages rejected by the normalizer, per reason
    pub dropped: DropCounts,
    /// Messages that survived normalization
    pub normalized_count: usize,
    /// Threads opened by the segmenter
    pub thread_count: usize,
    /// Message groups built
    pub group_count: usize,
    /// Groups without a parent because they opened a thread
    pub orphan_groups: usize,
    /// Groups whose parent id resolved to nothing
    pub dangling_parents: usize,
    /// Pairs in the corpus
    pub pair_count: usize,
    /// Adjacent messages whose timestamps go backwards
    pub out_of_order: usize,
}

impl ProcessingStats {
    /// Fraction of surviving messages absorbed into an earlier group, in percent.
    pub fn grouping_ratio(&self) -> f64 {
        if self.normalized_count == 0 {
            return 0.0;
        }
        (1.0 - (self.group_count as f64 / self.normalized_count as f64)) * 100.0
    }

    /// Messages removed by either the window filter or the normalizer.
    pub fn discarded(&self) -> usize {
        self.input_count - self.filtered_count + self.dropped.total()
    }
}

/// The finished corpus along with the groups it was cut from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    /// Every message group, in group-id order, with parents linked.
    pub groups: Vec<MessageGroup>,
    /// One pair per group with an existing parent, in group-id order.
    pub pairs: Vec<ReplyPair>,
    /// Diagnostics for the run.
    pub stats: ProcessingStats,
}

impl Corpus {
    /// Returns `true` if no pair was produced.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }
}

/// Runs the whole pipeline over a message collection.
///
/// The mention roster is taken from `messages` before the window filter
/// applies, so authors outside the window are still stripped as mentions.
///
/// # Errors
///
/// Returns [`CorpusError::InvalidConfig`](crate::CorpusError::InvalidConfig)
/// if `config` does not validate. Nothing else in the pipeline can fail.
///
/// # Example
///
/// ```rust
/// use chatcorpus::Message;
/// use chatcorpus::config::CorpusConfig;
/// use chatcorpus::core::{FilterConfig, build_corpus};
/// use chrono::{Duration, TimeZone, Utc};
///
/// # fn main() -> chatcorpus::Result<()> {
/// let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
/// let messages = vec![
///     Message::new(1, t0, "a", "hi").with_author_name("Alice"),
///     Message::new(2, t0 + Duration::minutes(20), "b", "hello").with_author_name("Bob"),
/// ];
///
/// let corpus = build_corpus(&messages, &CorpusConfig::default(), &FilterConfig::new())?;
/// assert_eq!(corpus.len(), 1);
/// assert_eq!(corpus.pairs[0].reply, "hello");
/// assert_eq!(corpus.pairs[0].parent, "hi");
/// # Ok(())
/// # }
/// ```
pub fn build_corpus(
    messages: &[Message],
    config: &CorpusConfig,
    filter: &FilterConfig,
) -> Result<Corpus> {
    let roster = Roster::from_messages(messages);
    let normalizer = Normalizer::new(config, &roster)?;

    let mut stats = ProcessingStats {
        input_count: messages.len(),
        ..ProcessingStats::default()
    };

    let window = if filter.is_active() {
        apply_filters(messages.to_vec(), filter)
    } else {
        messages.to_vec()
    };
    stats.filtered_count = window.len();

    let (mut normalized, dropped) = normalizer.normalize_all(&window);
    stats.dropped = dropped;
    stats.normalized_count = normalized.len();

    if config.sort_by_timestamp {
        sort_by_timestamp(&mut normalized);
    }

    let segmentation = segment_threads(normalized, config.thread_gap());
    stats.thread_count = segmentation.thread_count;
    stats.out_of_order = segmentation.out_of_order;

    let groups = build_groups(&segmentation.messages, &config.boundary_separator());
    let groups = link_replies(groups);
    stats.group_count = groups.len();

    let extraction = extract_pairs(&groups);
    stats.orphan_groups = extraction.orphans;
    stats.dangling_parents = extraction.dangling;
    stats.pair_count = extraction.pairs.len();

    info!(
        "{} messages -> {} in window -> {} normalized -> {} threads -> {} groups -> {} pairs",
        stats.input_count,
        stats.filtered_count,
        stats.normalized_count,
        stats.thread_count,
        stats.group_count,
        stats.pair_count
    );

    Ok(Corpus {
        groups,
        pairs: extraction.pairs,
        stats,
    })
}
