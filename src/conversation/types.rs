//! Conversation record definitions.
//!
//! Defines [`RecordKind`] (question/answer pair or pasted transcript) and
//! [`ConversationRecord`], the unit persisted in the JSON store and rendered
//! into the Markdown log.

use serde::{Deserialize, Serialize};

use crate::summary::Summary;

/// How a record's text was captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    /// A single question and its answer.
    #[default]
    Qa,
    /// A whole conversation pasted or captured as one block; `question` is empty.
    Transcript,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Qa => "qa",
            Self::Transcript => "transcript",
        }
    }

    fn is_qa(&self) -> bool {
        matches!(self, Self::Qa)
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One logged conversation. Derived fields are fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredRecord")]
pub struct ConversationRecord {
    /// Position in the store, starting at 1.
    pub id: u64,
    /// Local creation time, `%Y-%m-%d %H:%M`.
    pub timestamp: String,
    pub question: String,
    /// Answer text, or the full transcript for [`RecordKind::Transcript`].
    pub answer: String,
    pub key_points: Vec<String>,
    /// De-duplicated, in tag-table order.
    pub tags: Vec<String>,
    pub follow_up: Vec<String>,
    #[serde(skip_serializing_if = "RecordKind::is_qa")]
    pub kind: RecordKind,
}

impl ConversationRecord {
    pub fn new(
        id: u64,
        timestamp: String,
        kind: RecordKind,
        question: &str,
        answer: &str,
        summary: Summary,
    ) -> Self {
        Self {
            id,
            timestamp,
            question: question.to_string(),
            answer: answer.to_string(),
            key_points: summary.key_points,
            tags: summary.tags,
            follow_up: summary.follow_up,
            kind,
        }
    }
}

/// On-disk shape accepted when loading, including the older transcript layout
/// (`conversation` instead of `answer`, no `kind`).
#[derive(Deserialize)]
struct StoredRecord {
    id: u64,
    timestamp: String,
    #[serde(default)]
    question: String,
    answer: Option<String>,
    conversation: Option<String>,
    #[serde(default)]
    key_points: Vec<String>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    follow_up: Vec<String>,
    kind: Option<RecordKind>,
}

impl TryFrom<StoredRecord> for ConversationRecord {
    type Error = String;

    fn try_from(raw: StoredRecord) -> Result<Self, Self::Error> {
        let (answer, kind) = match (raw.answer, raw.conversation) {
            (Some(answer), _) => (answer, raw.kind.unwrap_or_default()),
            (None, Some(transcript)) => (transcript, raw.kind.unwrap_or(RecordKind::Transcript)),
            (None, None) => {
                return Err(format!("record {} has neither `answer` nor `conversation`", raw.id))
            }
        };

        Ok(Self {
            id: raw.id,
            timestamp: raw.timestamp,
            question: raw.question,
            answer,
            key_points: raw.key_points,
            tags: raw.tags,
            follow_up: raw.follow_up,
            kind,
        })
    }
}

pub fn is_blank_input(question: &str, answer: &str) -> bool {
    question.trim().is_empty() && answer.trim().is_empty()
}

/// Minute-granularity local timestamp used for new records.
pub fn current_timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M").to_string()
}
