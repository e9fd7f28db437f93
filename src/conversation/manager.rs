//! Orchestration: append to the record store, then render into the log.
//!
//! The two writes are not transactional. If the append succeeds and the render
//! fails, the store keeps the new record and the caller gets
//! [`Error::LogStale`] carrying it; [`ConversationManager::rerender`] re-runs
//! only the rendering step.

use std::path::PathBuf;

use crate::config::{ConvlogConfig, RenderConfig, SummaryConfig};
use crate::error::{Error, Result};
use crate::render::{write_log, LogRepository, MarkdownFileLog};
use crate::store::{FileLock, JsonFileStore, RecordRepository};

use super::types::{is_blank_input, ConversationRecord};

pub struct ConversationManager<R, L> {
    records: R,
    log: L,
    summary: SummaryConfig,
    render: RenderConfig,
    lock_path: Option<PathBuf>,
}

impl ConversationManager<JsonFileStore, MarkdownFileLog> {
    /// File-backed manager using the configured paths, limits, and lock.
    pub fn from_config(config: &ConvlogConfig) -> Self {
        let mut manager = Self::new(
            JsonFileStore::new(config.resolved_store_path()),
            MarkdownFileLog::new(config.resolved_log_path()),
        )
        .with_summary_config(config.summary.clone())
        .with_render_config(config.render.clone());
        manager.lock_path = config.resolved_lock_path();
        manager
    }
}

impl<R: RecordRepository, L: LogRepository> ConversationManager<R, L> {
    /// Manager with default limits and no cross-process lock.
    pub fn new(records: R, log: L) -> Self {
        Self {
            records,
            log,
            summary: SummaryConfig::default(),
            render: RenderConfig::default(),
            lock_path: None,
        }
    }

    pub fn with_summary_config(mut self, summary: SummaryConfig) -> Self {
        self.summary = summary;
        self
    }

    pub fn with_render_config(mut self, render: RenderConfig) -> Self {
        self.render = render;
        self
    }

    /// Hold an advisory lock at `path` around every append + render.
    pub fn with_lock(mut self, path: impl Into<PathBuf>) -> Self {
        self.lock_path = Some(path.into());
        self
    }

    pub fn records(&self) -> &R {
        &self.records
    }

    pub fn log(&self) -> &L {
        &self.log
    }

    /// Summarize and store a question/answer pair, then add it to the log.
    pub fn log_conversation(&self, question: &str, answer: &str) -> Result<ConversationRecord> {
        if is_blank_input(question, answer) {
            tracing::warn!("logging a conversation with empty question and answer");
        }
        self.append_and_render(|records, limits| records.append(question, answer, limits))
    }

    /// Summarize and store a whole transcript, then add it to the log.
    pub fn log_transcript(&self, transcript: &str) -> Result<ConversationRecord> {
        if transcript.trim().is_empty() {
            tracing::warn!("logging an empty transcript");
        }
        self.append_and_render(|records, limits| records.append_transcript(transcript, limits))
    }

    /// Render an already stored record into the log again.
    pub fn rerender(&self, id: u64) -> Result<ConversationRecord> {
        let _lock = self.acquire_lock()?;
        let record = self.records.get(id)?;
        write_log(&self.log, &record, self.render.max_preview_chars)?;
        Ok(record)
    }

    fn append_and_render<F>(&self, append: F) -> Result<ConversationRecord>
    where
        F: FnOnce(&R, &SummaryConfig) -> Result<ConversationRecord>,
    {
        let _lock = self.acquire_lock()?;
        let record = append(&self.records, &self.summary)?;

        if let Err(e) = write_log(&self.log, &record, self.render.max_preview_chars) {
            tracing::error!(id = record.id, error = %e, "record stored but log not updated");
            return Err(Error::LogStale {
                record: Box::new(record),
                source: Box::new(e),
            });
        }
        Ok(record)
    }

    fn acquire_lock(&self) -> Result<Option<FileLock>> {
        self.lock_path
            .as_ref()
            .map(|path| FileLock::acquire(path))
            .transpose()
    }
}
