//! Log renderer — turns records into Markdown blocks and merges them into the log.
//!
//! [`write_log`] is the only writer of log text. It loads the document (or
//! starts from the template), inserts the rendered entry after the section
//! marker, and saves the result, all under a process-wide mutex.

pub mod document;
pub mod entry;

pub use document::{merge, LogDocument, SECTION_MARKER};
pub use entry::render_entry;

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::conversation::types::ConversationRecord;
use crate::error::{Error, Result};
use crate::store::atomic::write_atomic;

/// Persistence for the rendered log text.
pub trait LogRepository {
    /// Current document text, or `None` if no log exists yet.
    fn load(&self) -> Result<Option<String>>;

    fn save(&self, text: &str) -> Result<()>;
}

static LOG_WRITE: Mutex<()> = Mutex::new(());

/// Render `record` and merge it into the log held by `repo`.
pub fn write_log<L: LogRepository + ?Sized>(
    repo: &L,
    record: &ConversationRecord,
    max_preview_chars: usize,
) -> Result<()> {
    let _guard = LOG_WRITE
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());

    let mut doc = match repo.load()? {
        Some(text) => LogDocument::parse(&text),
        None => {
            tracing::info!("creating log from template");
            LogDocument::template(&chrono::Local::now().format("%Y-%m-%d").to_string())
        }
    };
    if !doc.has_marker() {
        tracing::warn!("log has no section marker, appending entry at the end");
    }

    doc.insert(render_entry(record, max_preview_chars));
    repo.save(&doc.to_text())?;

    tracing::info!(id = record.id, "log updated");
    Ok(())
}

/// Log kept in a Markdown file, replaced atomically on save.
#[derive(Debug, Clone)]
pub struct MarkdownFileLog {
    path: PathBuf,
}

impl MarkdownFileLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogRepository for MarkdownFileLog {
    fn load(&self) -> Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::io("read", &self.path, e)),
        }
    }

    fn save(&self, text: &str) -> Result<()> {
        write_atomic(&self.path, text.as_bytes())
    }
}

/// In-process log, for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryLog {
    text: Mutex<Option<String>>,
}

impl MemoryLog {
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Mutex::new(Some(text.into())),
        }
    }

    pub fn text(&self) -> Option<String> {
        self.text
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl LogRepository for MemoryLog {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.text())
    }

    fn save(&self, text: &str) -> Result<()> {
        *self
            .text
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(text.to_string());
        Ok(())
    }
}
