//! JSON Lines (JSONL) corpus writer.
//!
//! One object per pair, reply first:
//!
//! ```jsonl
//! {"reply":"yo","parent":"hi ¤newmsg¤ there"}
//! ```
//!
//! With [`OutputConfig::with_ids`] the group ids are added as
//! `reply_id` / `parent_id`.

use std::fs::File;
use std::io::{BufWriter, Write};

use serde::Serialize;

use crate::core::models::{OutputConfig, ReplyPair};
use crate::error::CorpusError;

/// Minimal pair structure for JSONL output.
/// Only includes fields enabled in `OutputConfig`.
#[derive(Serialize)]
struct JsonlPair<'a> {
    reply: &'a str,
    parent: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent_id: Option<u64>,
}

impl<'a> JsonlPair<'a> {
    fn from_pair(pair: &'a ReplyPair, config: &OutputConfig) -> Self {
        Self {
            reply: &pair.reply,
            parent: &pair.parent,
            reply_id: config.include_ids.then_some(pair.reply_group_id.0),
            parent_id: config.include_ids.then_some(pair.parent_group_id.0),
        }
    }
}

/// Writes pairs to JSONL (JSON Lines) format.
pub fn write_jsonl(
    pairs: &[ReplyPair],
    output_path: &str,
    config: &OutputConfig,
) -> Result<(), CorpusError> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);

    for pair in pairs {
        let line = serde_json::to_string(&JsonlPair::from_pair(pair, config))?;
        writeln!(writer, "{line}")?;
    }

    writer.flush()?;
    Ok(())
}

/// Converts pairs to a JSONL string.
pub fn to_jsonl(pairs: &[ReplyPair], config: &OutputConfig) -> Result<String, CorpusError> {
    let mut out = String::new();
    for pair in pairs {
        out.push_str(&serde_json::to_string(&JsonlPair::from_pair(pair, config))?);
        out.push('\n');
    }
    Ok(out)
}
