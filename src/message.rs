//! Raw chat message as handed over by an export parser.
//!
//! This module provides [`Message`], the unit every pipeline stage starts from.
//! Messages are immutable once ingested: the normalizer never edits them, it
//! either produces a [`NormalizedMessage`](crate::core::NormalizedMessage) or
//! drops them.
//!
//! # Examples
//!
//! ```
//! use chatcorpus::Message;
//! use chrono::{TimeZone, Utc};
//!
//! let ts = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
//! let msg = Message::new(1, ts, "42", "hello there")
//!     .with_author_name("Alice");
//!
//! assert_eq!(msg.author_id(), "42");
//! assert_eq!(msg.author_name(), "Alice");
//! assert!(!msg.is_bot());
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single message of an exported chat log.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `id` | `u64` | Source-provided unique identifier |
/// | `timestamp` | `DateTime<Utc>` | When the message was sent |
/// | `author_id` | `String` | Stable author identity used for grouping |
/// | `author_name` | `String` | Display name, feeds the mention roster |
/// | `author_is_bot` | `bool` | Bot authored messages never reach the corpus |
/// | `content` | `String` | Raw text |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Source-provided unique identifier.
    pub id: u64,

    /// When the message was sent.
    pub timestamp: DateTime<Utc>,

    /// Identity of the author. Two messages belong to the same speaker iff
    /// their `author_id`s are equal.
    pub author_id: String,

    /// Display name of the author.
    #[serde(default)]
    pub author_name: String,

    /// Whether the author is a bot account.
    pub author_is_bot: bool,

    /// Raw text content.
    pub content: String,
}

impl Message {
    /// Creates a message from a human author with an empty display name.
    pub fn new(
        id: u64,
        timestamp: DateTime<Utc>,
        author_id: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id,
            timestamp,
            author_id: author_id.into(),
            author_name: String::new(),
            author_is_bot: false,
            content: content.into(),
        }
    }

    /// Builder method to set the author's display name.
    #[must_use]
    pub fn with_author_name(mut self, name: impl Into<String>) -> Self {
        self.author_name = name.into();
        self
    }

    /// Builder method to mark the author as a bot.
    #[must_use]
    pub fn with_bot(mut self, is_bot: bool) -> Self {
        self.author_is_bot = is_bot;
        self
    }

    /// Returns the source identifier.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the send time.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Returns the author identity.
    pub fn author_id(&self) -> &str {
        &self.author_id
    }

    /// Returns the author display name.
    pub fn author_name(&self) -> &str {
        &self.author_name
    }

    /// Returns `true` if the author is a bot.
    pub fn is_bot(&self) -> bool {
        self.author_is_bot
    }

    /// Returns the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }
}
