use anyhow::Result;

use convlog::config::ConvlogConfig;
use convlog::conversation::stats::conversation_stats;
use convlog::store::{JsonFileStore, RecordRepository};

/// Display conversation statistics in the terminal, or as JSON on stdout.
pub fn stats(config: &ConvlogConfig, json: bool) -> Result<()> {
    let store = JsonFileStore::new(config.resolved_store_path());
    let records = store.load()?;
    let response = conversation_stats(&records);

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    println!("Conversation Statistics");
    println!("{}", "=".repeat(40));
    println!("  Total conversations: {}", response.total_records);
    println!("  Q&A:                 {}", response.qa_records);
    println!("  Transcripts:         {}", response.transcript_records);
    println!();

    println!("By Tag:");
    for entry in &response.by_tag {
        println!("  {:<12} {}", entry.tag, entry.count);
    }
    println!("  {:<12} {}", "(untagged)", response.untagged);
    println!();

    println!("Store:                 {}", store.path().display());
    if let Some(ref oldest) = response.oldest {
        println!("Oldest conversation:   {oldest}");
    }
    if let Some(ref newest) = response.newest {
        println!("Newest conversation:   {newest}");
    }

    Ok(())
}
