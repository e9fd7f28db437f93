pub mod list;
pub mod log;
pub mod render;
pub mod show;
pub mod stats;

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use convlog::ConversationRecord;

/// Print `label`, then read one line from stdin without its trailing newline.
fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    std::io::stdout().flush()?;

    let mut input = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut input)
        .context("failed to read from stdin")?;
    Ok(input.trim_end_matches(['\r', '\n']).to_string())
}

/// Report what was derived for a freshly logged record.
fn print_logged(record: &ConversationRecord, log_path: &std::path::Path) {
    println!("Conversation #{} logged at {}", record.id, record.timestamp);
    println!("  Key points:  {}", record.key_points.len());
    println!("  Tags:        {}", record.tags.len());
    println!("  Follow-ups:  {}", record.follow_up.len());
    println!("See {}", log_path.display());
}
