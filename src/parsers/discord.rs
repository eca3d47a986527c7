//! DiscordChatExporter JSON parser.
//!
//! Reads the channel export written by DiscordChatExporter:
//!
//! ```json
//! {
//!   "guild": { "name": "..." },
//!   "channel": { "name": "..." },
//!   "messages": [
//!     {
//!       "id": "267022385227300865",
//!       "timestamp": "2017-01-03T19:12:45.123+00:00",
//!       "content": "ahoj",
//!       "author": { "id": "1234", "name": "Alice", "isBot": false }
//!     }
//!   ]
//! }
//! ```
//!
//! Attachments, embeds, reactions and the reply `reference` are ignored: the
//! corpus infers reply structure from turn order alone.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::Message;
use crate::error::CorpusError;
use crate::parser::{Parser, Platform};

/// Raw Discord message structure for deserialization.
///
/// Every field is optional here so that an absent field becomes a
/// [`CorpusError::MissingField`] naming the record, not an opaque decode error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DiscordRawMessage {
    id: Option<String>,
    timestamp: Option<String>,
    content: Option<String>,
    author: Option<DiscordAuthor>,
}

/// Discord author structure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DiscordAuthor {
    id: Option<String>,
    name: Option<String>,
    is_bot: Option<bool>,
}

/// Discord export wrapper.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DiscordExport {
    messages: Option<Vec<DiscordRawMessage>>,
}

/// Parser for DiscordChatExporter JSON exports.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscordParser;

impl DiscordParser {
    pub fn new() -> Self {
        Self
    }
}

impl Parser for DiscordParser {
    fn name(&self) -> &'static str {
        "Discord"
    }

    fn platform(&self) -> Platform {
        Platform::Discord
    }

    fn parse_str(&self, content: &str) -> Result<Vec<Message>, CorpusError> {
        let export: DiscordExport =
            serde_json::from_str(content).map_err(|e| CorpusError::discord_parse(e, None))?;

        let raw = export.messages.ok_or_else(|| {
            CorpusError::invalid_format("Discord JSON", "top-level 'messages' array is missing")
        })?;

        raw.into_iter()
            .enumerate()
            .map(|(index, msg)| convert(index, msg))
            .collect()
    }
}

/// Converts one raw record, failing on the first missing or malformed field.
fn convert(index: usize, msg: DiscordRawMessage) -> Result<Message, CorpusError> {
    let id_raw = msg
        .id
        .ok_or_else(|| CorpusError::missing_field(index, "id"))?;
    // Discord snowflake
    let id = id_raw
        .parse::<u64>()
        .map_err(|_| CorpusError::invalid_field(index, "id", id_raw.as_str()))?;

    let ts_raw = msg
        .timestamp
        .ok_or_else(|| CorpusError::missing_field(index, "timestamp"))?;
    let timestamp = parse_timestamp(&ts_raw)
        .ok_or_else(|| CorpusError::invalid_field(index, "timestamp", ts_raw.as_str()))?;

    let content = msg
        .content
        .ok_or_else(|| CorpusError::missing_field(index, "content"))?;

    let author = msg
        .author
        .ok_or_else(|| CorpusError::missing_field(index, "author"))?;
    let author_id = author
        .id
        .ok_or_else(|| CorpusError::missing_field(index, "author.id"))?;
    let author_name = author
        .name
        .ok_or_else(|| CorpusError::missing_field(index, "author.name"))?;
    let is_bot = author
        .is_bot
        .ok_or_else(|| CorpusError::missing_field(index, "author.isBot"))?;

    Ok(Message::new(id, timestamp, author_id, content)
        .with_author_name(author_name)
        .with_bot(is_bot))
}

/// Parses an ISO 8601 / RFC 3339 timestamp into UTC.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.to_utc())
}
