//! CSV corpus writer.

use std::fs::File;
use std::io::Write;

use crate::core::models::{OutputConfig, ReplyPair};
use crate::error::CorpusError;

/// Writes pairs to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: Depends on OutputConfig
///   - Basic: `Reply`, `Parent`
///   - With IDs: `ReplyID`, `ParentID`, `Reply`, `Parent`
/// - Encoding: UTF-8
pub fn write_csv(
    pairs: &[ReplyPair],
    output_path: &str,
    config: &OutputConfig,
) -> Result<(), CorpusError> {
    let file = File::create(output_path)?;
    write_csv_to(file, pairs, config)
}

/// Converts pairs to a CSV string.
pub fn to_csv(pairs: &[ReplyPair], config: &OutputConfig) -> Result<String, CorpusError> {
    let mut buf = Vec::new();
    write_csv_to(&mut buf, pairs, config)?;
    String::from_utf8(buf).map_err(|e| CorpusError::invalid_format("CSV", e.to_string()))
}

fn write_csv_to<W: Write>(
    sink: W,
    pairs: &[ReplyPair],
    config: &OutputConfig,
) -> Result<(), CorpusError> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(sink);

    writer.write_record(build_header(config))?;
    for pair in pairs {
        writer.write_record(build_record(pair, config))?;
    }

    writer.flush()?;
    Ok(())
}

/// Build CSV header based on output configuration.
fn build_header(config: &OutputConfig) -> Vec<&'static str> {
    let mut header = Vec::new();
    if config.include_ids {
        header.push("ReplyID");
        header.push("ParentID");
    }
    header.push("Reply");
    header.push("Parent");
    header
}

/// Build CSV record for a single pair.
fn build_record(pair: &ReplyPair, config: &OutputConfig) -> Vec<String> {
    let mut record = Vec::new();
    if config.include_ids {
        record.push(pair.reply_group_id.to_string());
        record.push(pair.parent_group_id.to_string());
    }
    record.push(pair.reply.clone());
    record.push(pair.parent.clone());
    record
}
