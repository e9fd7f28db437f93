//! Record store — append-only conversation records behind [`RecordRepository`].
//!
//! Every append is a whole-document read-modify-write: load all records, push
//! one with `id = len + 1`, save all records. [`JsonFileStore`] persists to a
//! JSON file with an atomic replace; [`MemoryRecordStore`] keeps records in
//! memory for tests and dry runs.

pub mod atomic;
pub mod json;
pub mod lock;
pub mod memory;

pub use json::JsonFileStore;
pub use lock::FileLock;
pub use memory::MemoryRecordStore;

use crate::config::SummaryConfig;
use crate::conversation::types::{current_timestamp, ConversationRecord, RecordKind};
use crate::error::{Error, Result};
use crate::summary::Summary;

/// Persistence for the ordered record sequence.
pub trait RecordRepository {
    /// Read every record; an absent store is empty.
    fn load(&self) -> Result<Vec<ConversationRecord>>;

    /// Replace the persisted sequence with `records`.
    fn save(&self, records: &[ConversationRecord]) -> Result<()>;

    /// Summarize a question/answer pair and append it as a new record.
    fn append(
        &self,
        question: &str,
        answer: &str,
        limits: &SummaryConfig,
    ) -> Result<ConversationRecord> {
        append_record(self, RecordKind::Qa, question, answer, limits, current_timestamp())
    }

    /// Summarize a transcript and append it with an empty question.
    fn append_transcript(
        &self,
        transcript: &str,
        limits: &SummaryConfig,
    ) -> Result<ConversationRecord> {
        append_record(self, RecordKind::Transcript, "", transcript, limits, current_timestamp())
    }

    /// Look up a stored record by id.
    fn get(&self, id: u64) -> Result<ConversationRecord> {
        self.load()?
            .into_iter()
            .find(|r| r.id == id)
            .ok_or(Error::RecordNotFound(id))
    }
}

/// Append one record with an explicit timestamp.
pub fn append_record<R: RecordRepository + ?Sized>(
    repo: &R,
    kind: RecordKind,
    question: &str,
    answer: &str,
    limits: &SummaryConfig,
    timestamp: String,
) -> Result<ConversationRecord> {
    let mut records = repo.load()?;
    let id = records.len() as u64 + 1;

    let summary = Summary::derive(question, answer, limits);
    tracing::debug!(
        id,
        key_points = summary.key_points.len(),
        tags = summary.tags.len(),
        follow_up = summary.follow_up.len(),
        "summary derived"
    );

    let record = ConversationRecord::new(id, timestamp, kind, question, answer, summary);
    records.push(record.clone());
    repo.save(&records)?;

    tracing::info!(id, kind = %kind, "record appended");
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_follow_record_count() {
        let store = MemoryRecordStore::default();
        let limits = SummaryConfig::default();
        for expected in 1..=4 {
            let record = store.append("问", "答", &limits).unwrap();
            assert_eq!(record.id, expected);
        }
        assert_eq!(store.load().unwrap().len(), 4);
    }

    #[test]
    fn transcript_append_has_empty_question() {
        let store = MemoryRecordStore::default();
        let record = store
            .append_transcript("👤 您: 需要整理文件。", &SummaryConfig::default())
            .unwrap();
        assert_eq!(record.kind, RecordKind::Transcript);
        assert!(record.question.is_empty());
        assert_eq!(record.tags, vec!["文件管理"]);
        assert_eq!(record.follow_up, vec!["👤 您: 需要整理文件"]);
    }

    #[test]
    fn get_reports_missing_ids() {
        let store = MemoryRecordStore::default();
        store.append("问", "答", &SummaryConfig::default()).unwrap();
        assert_eq!(store.get(1).unwrap().id, 1);
        assert!(matches!(store.get(9), Err(Error::RecordNotFound(9))));
    }
}
