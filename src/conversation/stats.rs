use serde::Serialize;

use super::types::{ConversationRecord, RecordKind};
use crate::summary::tags::TAG_RULES;

/// Number of records carrying one tag.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct TagCount {
    pub tag: String,
    pub count: u64,
}

/// Summary counts over the record store.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct StatsResponse {
    pub total_records: u64,
    pub qa_records: u64,
    pub transcript_records: u64,
    /// Tag counts: table tags first in table order, then any others by first appearance.
    pub by_tag: Vec<TagCount>,
    pub untagged: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oldest: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub newest: Option<String>,
}

pub fn conversation_stats(records: &[ConversationRecord]) -> StatsResponse {
    let mut by_tag: Vec<TagCount> = Vec::new();
    for rule in TAG_RULES {
        if !by_tag.iter().any(|c| c.tag == rule.tag) {
            by_tag.push(TagCount {
                tag: rule.tag.to_string(),
                count: 0,
            });
        }
    }

    let mut untagged = 0;
    let mut transcripts = 0;
    for record in records {
        if record.kind == RecordKind::Transcript {
            transcripts += 1;
        }
        if record.tags.is_empty() {
            untagged += 1;
        }
        for tag in &record.tags {
            match by_tag.iter_mut().find(|c| &c.tag == tag) {
                Some(c) => c.count += 1,
                None => by_tag.push(TagCount {
                    tag: tag.clone(),
                    count: 1,
                }),
            }
        }
    }

    let total = records.len() as u64;
    StatsResponse {
        total_records: total,
        qa_records: total - transcripts,
        transcript_records: transcripts,
        by_tag,
        untagged,
        oldest: records.first().map(|r| r.timestamp.clone()),
        newest: records.last().map(|r| r.timestamp.clone()),
    }
}
