//! Error types for the summarize-and-append pipeline.

use std::path::PathBuf;

use thiserror::Error;

use crate::conversation::types::ConversationRecord;

/// Errors raised by the record store, the log renderer, and the manager.
#[derive(Error, Debug)]
pub enum Error {
    /// The structured store exists but is not a valid record sequence.
    #[error("record store at {} is corrupt: {source}", path.display())]
    CorruptStore {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A file could not be read, written, created, or renamed.
    #[error("failed to {action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Records could not be encoded for writing.
    #[error("failed to encode records: {0}")]
    Encode(#[from] serde_json::Error),

    /// The record was stored but the rendered log was not updated.
    #[error("record {} was stored but the log was not updated: {source}", record.id)]
    LogStale {
        record: Box<ConversationRecord>,
        #[source]
        source: Box<Error>,
    },

    /// Another writer holds the advisory lock.
    #[error("another writer holds the lock at {}", .0.display())]
    Locked(PathBuf),

    /// No stored record has the requested id.
    #[error("no record with id {0}")]
    RecordNotFound(u64),
}

impl Error {
    pub(crate) fn io(
        action: &'static str,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
