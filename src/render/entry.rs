use std::fmt::Write;

use crate::conversation::types::{ConversationRecord, RecordKind};
use crate::summary::primary_tag;

/// Heading label for Q&A records without tags.
pub const UNTAGGED_HEADING: &str = "新对话";
/// Heading label for transcript records without tags.
pub const TRANSCRIPT_HEADING: &str = "完整对话";

/// Render one record as a Markdown entry block.
///
/// The answer preview is the first `max_preview_chars` characters followed by
/// `...`; truncation counts characters and ignores word boundaries.
pub fn render_entry(record: &ConversationRecord, max_preview_chars: usize) -> String {
    let fallback = match record.kind {
        RecordKind::Qa => UNTAGGED_HEADING,
        RecordKind::Transcript => TRANSCRIPT_HEADING,
    };
    let heading = primary_tag(&record.tags).unwrap_or(fallback);

    let mut out = String::new();
    // writing into a String cannot fail
    let _ = writeln!(out, "\n### {} - {}", record.timestamp, heading);
    match record.kind {
        RecordKind::Qa => {
            let _ = writeln!(out, "**问题**: {}\n", record.question);
            let _ = writeln!(out, "**回答**: {}...\n", preview(&record.answer, max_preview_chars));
        }
        RecordKind::Transcript => {
            let _ = writeln!(out, "**对话内容**:\n{}\n", record.answer);
        }
    }

    out.push_str("**关键要点**:\n");
    push_bullets(&mut out, &record.key_points);
    out.push_str("\n**后续行动**:\n");
    push_bullets(&mut out, &record.follow_up);

    let tags: Vec<String> = record.tags.iter().map(|t| format!("#{t}")).collect();
    let _ = writeln!(out, "\n**标签**: {}\n", tags.join(" "));
    out.push_str("---\n");
    out
}

fn push_bullets(out: &mut String, items: &[String]) {
    if items.is_empty() {
        out.push('\n');
        return;
    }
    for item in items {
        let _ = writeln!(out, "- {item}");
    }
}

/// First `max_chars` characters of `text`.
pub fn preview(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::Summary;

    fn record(kind: RecordKind, question: &str, answer: &str, tags: &[&str]) -> ConversationRecord {
        ConversationRecord::new(
            1,
            "2024-01-15 10:30".into(),
            kind,
            question,
            answer,
            Summary {
                key_points: vec!["要点一".into(), "要点二".into()],
                tags: tags.iter().map(|t| t.to_string()).collect(),
                follow_up: vec!["需要跟进".into()],
            },
        )
    }

    #[test]
    fn renders_fixed_format_block() {
        let r = record(RecordKind::Qa, "如何做数据分析", "先清洗数据", &["数据分析", "编程"]);
        let expected = "\n### 2024-01-15 10:30 - 数据分析\n\
**问题**: 如何做数据分析\n\n\
**回答**: 先清洗数据...\n\n\
**关键要点**:\n- 要点一\n- 要点二\n\n\
**后续行动**:\n- 需要跟进\n\n\
**标签**: #数据分析 #编程\n\n\
---\n";
        assert_eq!(render_entry(&r, 200), expected);
    }

    #[test]
    fn heading_uses_table_order_for_primary_tag() {
        let r = record(RecordKind::Qa, "q", "a", &["智能功能", "编程"]);
        assert!(render_entry(&r, 200).starts_with("\n### 2024-01-15 10:30 - 编程\n"));
    }

    #[test]
    fn untagged_heading_placeholder() {
        let r = record(RecordKind::Qa, "q", "a", &[]);
        let text = render_entry(&r, 200);
        assert!(text.starts_with("\n### 2024-01-15 10:30 - 新对话\n"));
        assert!(text.contains("**标签**: \n"));
    }

    #[test]
    fn answer_preview_is_truncated_by_characters() {
        let answer = "数".repeat(250);
        let r = record(RecordKind::Qa, "q", &answer, &[]);
        let text = render_entry(&r, 200);
        let expected = format!("**回答**: {}...\n", "数".repeat(200));
        assert!(text.contains(&expected));
    }

    #[test]
    fn transcript_renders_full_text() {
        let transcript = "👤 您: 你好\n👤 您: 再见";
        let r = record(RecordKind::Transcript, "", transcript, &[]);
        let text = render_entry(&r, 5);
        assert!(text.starts_with("\n### 2024-01-15 10:30 - 完整对话\n"));
        assert!(text.contains("**对话内容**:\n👤 您: 你好\n👤 您: 再见\n"));
        assert!(!text.contains("**问题**"));
    }

    #[test]
    fn preview_handles_short_and_exact_lengths() {
        assert_eq!(preview("abc", 5), "abc");
        assert_eq!(preview("abc", 3), "abc");
        assert_eq!(preview("数据分析", 2), "数据");
        assert_eq!(preview("abc", 0), "");
    }
}
