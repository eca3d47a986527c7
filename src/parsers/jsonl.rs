//! Line-delimited message records.
//!
//! Each non-blank line holds one message in the crate's own record layout:
//!
//! ```jsonl
//! {"id":1,"timestamp":"2024-01-01T12:00:00Z","author_id":"a","author_name":"Alice","author_is_bot":false,"content":"hi"}
//! ```
//!
//! `author_name` may be omitted (no mention stripping for that author); every
//! other field is required.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::Message;
use crate::error::CorpusError;
use crate::parser::{Parser, Platform};

#[derive(Debug, Deserialize)]
struct JsonlRecord {
    id: Option<u64>,
    timestamp: Option<DateTime<Utc>>,
    author_id: Option<String>,
    author_name: Option<String>,
    author_is_bot: Option<bool>,
    content: Option<String>,
}

/// Parser for one-message-per-line JSONL files.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonlParser;

impl JsonlParser {
    pub fn new() -> Self {
        Self
    }
}

impl Parser for JsonlParser {
    fn name(&self) -> &'static str {
        "JSONL"
    }

    fn platform(&self) -> Platform {
        Platform::Jsonl
    }

    fn parse_str(&self, content: &str) -> Result<Vec<Message>, CorpusError> {
        let mut messages = Vec::new();

        for (line_no, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let record: JsonlRecord = serde_json::from_str(line)
                .map_err(|e| CorpusError::jsonl_parse(line_no + 1, e, None))?;
            messages.push(convert(messages.len(), record)?);
        }

        Ok(messages)
    }
}

fn convert(index: usize, record: JsonlRecord) -> Result<Message, CorpusError> {
    let id = record
        .id
        .ok_or_else(|| CorpusError::missing_field(index, "id"))?;
    let timestamp = record
        .timestamp
        .ok_or_else(|| CorpusError::missing_field(index, "timestamp"))?;
    let author_id = record
        .author_id
        .ok_or_else(|| CorpusError::missing_field(index, "author_id"))?;
    let is_bot = record
        .author_is_bot
        .ok_or_else(|| CorpusError::missing_field(index, "author_is_bot"))?;
    let content = record
        .content
        .ok_or_else(|| CorpusError::missing_field(index, "content"))?;

    Ok(Message::new(id, timestamp, author_id, content)
        .with_author_name(record.author_name.unwrap_or_default())
        .with_bot(is_bot))
}
