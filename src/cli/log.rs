//! CLI `log`, `transcript`, and `session` commands — capture input and hand it to the manager.

use anyhow::{Context, Result};
use std::io::{BufRead, Read};
use std::path::Path;

use convlog::config::ConvlogConfig;
use convlog::conversation::types::is_blank_input;
use convlog::{ConversationManager, Error};

use super::{print_logged, prompt};

/// Prefix for each captured line in a session transcript.
const SPEAKER_PREFIX: &str = "👤 您: ";

/// Log one question/answer pair, prompting for whichever is missing.
pub fn log(config: &ConvlogConfig, question: Option<String>, answer: Option<String>) -> Result<()> {
    let question = match question {
        Some(q) => q,
        None => prompt("Question: ")?,
    };
    let answer = match answer {
        Some(a) => a,
        None => prompt("Answer: ")?,
    };

    if is_blank_input(&question, &answer) {
        println!("Nothing to log: question and answer are both empty.");
        return Ok(());
    }

    let manager = ConversationManager::from_config(config);
    let record = manager
        .log_conversation(&question, &answer)
        .map_err(explain)?;
    print_logged(&record, &config.resolved_log_path());
    Ok(())
}

/// Log a pasted transcript read from `file`, or from stdin until EOF.
pub fn transcript(config: &ConvlogConfig, file: Option<&Path>) -> Result<()> {
    let text = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read transcript {}", path.display()))?,
        None => {
            eprintln!("Paste the conversation, then end input with Ctrl+D:");
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read transcript from stdin")?;
            text
        }
    };

    log_transcript_text(config, text.trim())
}

/// Collect lines until one contains `end_word`, then log them as a transcript.
pub fn session(config: &ConvlogConfig, end_word: &str) -> Result<()> {
    println!("Session started. Type a line containing '{end_word}' (or press Ctrl+D) to save.");
    let lines = collect_session(std::io::stdin().lock(), end_word)?;
    if lines.is_empty() {
        println!("Nothing to log: the session was empty.");
        return Ok(());
    }
    log_transcript_text(config, &lines.join("\n"))
}

fn log_transcript_text(config: &ConvlogConfig, text: &str) -> Result<()> {
    if text.trim().is_empty() {
        println!("Nothing to log: the transcript is empty.");
        return Ok(());
    }
    let manager = ConversationManager::from_config(config);
    let record = manager.log_transcript(text).map_err(explain)?;
    print_logged(&record, &config.resolved_log_path());
    Ok(())
}

/// Read lines from `reader` until EOF or a line containing `end_word`.
///
/// The ending line itself is not captured; blank lines are skipped.
fn collect_session(reader: impl BufRead, end_word: &str) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line.context("failed to read session input")?;
        if line.contains(end_word) {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }
        lines.push(format!("{SPEAKER_PREFIX}{line}"));
    }
    Ok(lines)
}

/// Attach a recovery hint to errors the user can act on.
fn explain(err: Error) -> anyhow::Error {
    let hint = match &err {
        Error::LogStale { record, .. } => Some(format!(
            "the record was saved; run `convlog render {}` once the log is writable",
            record.id
        )),
        Error::Locked(path) => Some(format!(
            "another convlog process holds {}; retry once it finishes",
            path.display()
        )),
        _ => None,
    };
    match hint {
        Some(hint) => anyhow::Error::new(err).context(hint),
        None => anyhow::Error::new(err),
    }
}
