#![allow(dead_code)]

use std::path::PathBuf;

use convlog::render::{LogRepository, MarkdownFileLog, MemoryLog};
use convlog::store::{JsonFileStore, MemoryRecordStore};
use convlog::ConversationManager;
use tempfile::TempDir;

/// Paths of a file-backed store and log inside `tmp`.
pub fn paths(tmp: &TempDir) -> (PathBuf, PathBuf) {
    (
        tmp.path().join("conversation_data.json"),
        tmp.path().join("AI_Conversation_Log.md"),
    )
}

/// File-backed manager writing into `tmp`, without a lock.
pub fn file_manager(tmp: &TempDir) -> ConversationManager<JsonFileStore, MarkdownFileLog> {
    let (store, log) = paths(tmp);
    ConversationManager::new(JsonFileStore::new(store), MarkdownFileLog::new(log))
}

/// Manager backed entirely by in-memory repositories.
pub fn memory_manager() -> ConversationManager<MemoryRecordStore, MemoryLog> {
    ConversationManager::new(MemoryRecordStore::default(), MemoryLog::default())
}

/// Log repository whose writes always fail.
#[derive(Debug, Default)]
pub struct ReadOnlyLog;

impl LogRepository for ReadOnlyLog {
    fn load(&self) -> convlog::Result<Option<String>> {
        Ok(None)
    }

    fn save(&self, _text: &str) -> convlog::Result<()> {
        Err(convlog::Error::Io {
            action: "write",
            path: PathBuf::from("read-only.md"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        })
    }
}
