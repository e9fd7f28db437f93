//! CLI `render` command — re-run only the rendering step for a stored record.

use anyhow::Result;

use convlog::config::ConvlogConfig;
use convlog::ConversationManager;

pub fn render(config: &ConvlogConfig, id: u64) -> Result<()> {
    let manager = ConversationManager::from_config(config);
    let record = manager.rerender(id)?;
    println!(
        "Conversation #{} rendered into {}",
        record.id,
        config.resolved_log_path().display()
    );
    Ok(())
}
