use anyhow::Result;

use convlog::config::ConvlogConfig;
use convlog::store::{JsonFileStore, RecordRepository};

/// Print a stored record as pretty JSON.
pub fn show(config: &ConvlogConfig, id: u64) -> Result<()> {
    let store = JsonFileStore::new(config.resolved_store_path());
    let record = store.get(id)?;
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}
