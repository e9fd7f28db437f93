use anyhow::Result;

use convlog::config::ConvlogConfig;
use convlog::store::{JsonFileStore, RecordRepository};
use convlog::summary::primary_tag;
use convlog::RecordKind;

const TITLE_CHARS: usize = 40;

/// Print one line per record, newest first.
pub fn list(config: &ConvlogConfig, limit: usize) -> Result<()> {
    let store = JsonFileStore::new(config.resolved_store_path());
    let records = store.load()?;

    if records.is_empty() {
        println!("No conversations logged yet.");
        return Ok(());
    }

    for record in records.iter().rev().take(limit) {
        let text = match record.kind {
            RecordKind::Qa => &record.question,
            RecordKind::Transcript => &record.answer,
        };
        let first_line = text.lines().next().unwrap_or("");
        println!(
            "{:>4}  {}  {:<8}  {}",
            record.id,
            record.timestamp,
            primary_tag(&record.tags).unwrap_or("-"),
            convlog::render::entry::preview(first_line, TITLE_CHARS)
        );
    }

    if records.len() > limit {
        println!("({} older conversations not shown)", records.len() - limit);
    }
    Ok(())
}
