use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::ecs::resources::EventLog;

/// Write an iterator of serializable items to a JSONL file (one JSON object per line).
fn write_jsonl<T: Serialize>(path: &Path, items: impl Iterator<Item = T>) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for item in items {
        serde_json::to_writer(&mut writer, &item)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// Flush the accumulated event log to JSONL files in `output_dir`.
///
/// Creates the directory if needed and writes:
/// - `events.jsonl`: one applied event per line
/// - `event_participants.jsonl`: one participant row per line
/// - `bounties.jsonl`: one credited bounty per line
pub fn flush_event_log(log: &EventLog, output_dir: &Path) -> io::Result<()> {
    fs::create_dir_all(output_dir)?;

    write_jsonl(&output_dir.join("events.jsonl"), log.events.iter())?;
    write_jsonl(
        &output_dir.join("event_participants.jsonl"),
        log.participants.iter(),
    )?;
    write_jsonl(&output_dir.join("bounties.jsonl"), log.awards.iter())?;

    tracing::debug!(
        events = log.events.len(),
        awards = log.awards.len(),
        dir = %output_dir.display(),
        "flushed event log"
    );
    Ok(())
}
