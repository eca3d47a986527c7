//! Data structures flowing between pipeline stages.
//!
//! Each stage consumes the previous stage's collection in full and produces a
//! new one; nothing here is mutated after construction.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of a thread, counted from 1 in order of appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThreadId(pub u64);

/// Identifier of a message group, counted from [`GroupId::FIRST`] with no gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(pub u64);

impl ThreadId {
    /// Id of the thread opened by the first message.
    pub const FIRST: ThreadId = ThreadId(1);
}

impl GroupId {
    /// Id of the first group.
    pub const FIRST: GroupId = GroupId(1);

    /// The id directly before this one. Below [`GroupId::FIRST`] it names no group.
    pub fn preceding(self) -> GroupId {
        GroupId(self.0.saturating_sub(1))
    }
}

impl fmt::Display for ThreadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A message that survived normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedMessage {
    /// Position of the message in the source collection.
    pub index: usize,
    /// Source message id.
    pub id: u64,
    /// Original send time.
    pub timestamp: DateTime<Utc>,
    /// Original author identity.
    pub author_id: String,
    /// Canonical token form of the content. Never empty.
    pub content: String,
}

/// A normalized message annotated by the thread segmenter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadedMessage {
    /// The underlying message.
    pub message: NormalizedMessage,
    /// Whether this message opened `thread_id`.
    pub started_new_thread: bool,
    /// Thread the message belongs to.
    pub thread_id: ThreadId,
}

/// A run of same-author messages inside one thread: one conversational turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageGroup {
    /// Group id, strictly increasing in sequence order.
    pub group_id: GroupId,
    /// Thread every member belongs to.
    pub thread_id: ThreadId,
    /// Author of every member.
    pub author_id: String,
    /// True iff the first member opened a thread.
    pub started_new_thread: bool,
    /// Member contents joined by the boundary separator.
    pub content: String,
    /// Number of merged messages.
    pub message_count: usize,
    /// Parent turn; `None` when the group opened a thread.
    pub replying_to: Option<GroupId>,
}

/// A (reply, parent) turn pair, the unit of the output corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyPair {
    /// Id of the replying group.
    pub reply_group_id: GroupId,
    /// Id of the group being replied to.
    pub parent_group_id: GroupId,
    /// Content of the replying group.
    pub reply: String,
    /// Content of the group being replied to.
    pub parent: String,
}

/// Configuration for corpus output.
/// Controls which metadata fields the structured formats include.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Include group ids in JSONL/CSV output
    pub include_ids: bool,
}

impl OutputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_ids(mut self) -> Self {
        self.include_ids = true;
        self
    }
}
