//! Key-point and follow-up extraction.
//!
//! Both passes run over [`segment`] output and keep sentences that contain one
//! of a fixed keyword list (case-sensitive substring match). Key points fall
//! back to the leading sentences when nothing matches; follow-ups never do.

use super::segment::segment;

/// Words marking a sentence as a key point.
pub const KEY_POINT_KEYWORDS: &[&str] = &["关键", "要点", "重要", "主要", "核心", "总结", "自动"];

/// Words marking a sentence as a follow-up action.
pub const FOLLOW_UP_KEYWORDS: &[&str] = &["需要", "应该", "建议", "可以", "下一步", "创建", "运行"];

pub const DEFAULT_MAX_KEY_POINTS: usize = 5;
pub const DEFAULT_FALLBACK_KEY_POINTS: usize = 3;
pub const DEFAULT_MAX_FOLLOW_UP: usize = 3;

/// Extract up to five key points, falling back to the first three sentences.
pub fn extract_key_points(answer: &str) -> Vec<String> {
    key_points_with_limits(answer, DEFAULT_MAX_KEY_POINTS, DEFAULT_FALLBACK_KEY_POINTS)
}

/// Extract up to three follow-up actions.
pub fn extract_follow_up(answer: &str) -> Vec<String> {
    follow_up_with_limit(answer, DEFAULT_MAX_FOLLOW_UP)
}

pub fn key_points_with_limits(answer: &str, max: usize, fallback: usize) -> Vec<String> {
    let sentences = segment(answer);
    let matched = select_matching(&sentences, KEY_POINT_KEYWORDS, max);
    if !matched.is_empty() {
        return matched;
    }

    sentences
        .into_iter()
        .filter(|s| !s.is_empty())
        .take(fallback.min(max))
        .collect()
}

pub fn follow_up_with_limit(answer: &str, max: usize) -> Vec<String> {
    select_matching(&segment(answer), FOLLOW_UP_KEYWORDS, max)
}

fn select_matching(sentences: &[String], keywords: &[&str], max: usize) -> Vec<String> {
    sentences
        .iter()
        .filter(|s| !s.is_empty() && contains_any(s, keywords))
        .take(max)
        .cloned()
        .collect()
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}
