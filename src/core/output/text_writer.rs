//! Plain text corpus writer.
//!
//! Two lines per pair, reply first, each terminated by `\n`:
//!
//! ```text
//! yo
//! hi ¤newmsg¤ there
//! ```
//!
//! Contents never contain a newline (the whitelist has no line breaks), so
//! line `2k` is always a reply and line `2k + 1` its parent.

use std::fs::File;
use std::io::{BufWriter, Write};

use crate::core::models::ReplyPair;
use crate::error::CorpusError;

/// Writes pairs to `output_path` in the plain text layout.
pub fn write_text(pairs: &[ReplyPair], output_path: &str) -> Result<(), CorpusError> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_text_to(&mut writer, pairs)?;
    writer.flush()?;
    Ok(())
}

/// Writes pairs in the plain text layout to any writer.
pub fn write_text_to<W: Write>(writer: &mut W, pairs: &[ReplyPair]) -> Result<(), CorpusError> {
    for pair in pairs {
        writeln!(writer, "{}", pair.reply)?;
        writeln!(writer, "{}", pair.parent)?;
    }
    Ok(())
}

/// Renders pairs as a string in the plain text layout.
pub fn to_text(pairs: &[ReplyPair]) -> String {
    let mut out = String::with_capacity(
        pairs
            .iter()
            .map(|p| p.reply.len() + p.parent.len() + 2)
            .sum(),
    );
    for pair in pairs {
        out.push_str(&pair.reply);
        out.push('\n');
        out.push_str(&pair.parent);
        out.push('\n');
    }
    out
}
