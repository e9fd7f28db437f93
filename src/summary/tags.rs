//! Topic tagging from a fixed, ordered keyword table.
//!
//! Table order is significant: it fixes the order tags are stored in and
//! decides which tag is "primary" when a log heading needs a single label.

/// Which input text a rule is tested against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Question,
    Answer,
}

/// One `(keyword, tag)` pair and the text it applies to.
#[derive(Debug, Clone, Copy)]
pub struct TagRule {
    pub keyword: &'static str,
    pub tag: &'static str,
    pub source: Source,
}

const fn rule(source: Source, keyword: &'static str, tag: &'static str) -> TagRule {
    TagRule {
        keyword,
        tag,
        source,
    }
}

pub const TAG_RULES: &[TagRule] = &[
    rule(Source::Question, "数据", "数据分析"),
    rule(Source::Question, "分析", "数据分析"),
    rule(Source::Question, "系统", "系统建立"),
    rule(Source::Question, "创建", "系统建立"),
    rule(Source::Question, "对话", "对话管理"),
    rule(Source::Question, "记录", "对话管理"),
    rule(Source::Question, "Python", "编程"),
    rule(Source::Question, "脚本", "编程"),
    rule(Source::Question, "自动化", "自动化"),
    rule(Source::Question, "总结", "内容总结"),
    rule(Source::Question, "要点", "内容总结"),
    rule(Source::Answer, "文件", "文件管理"),
    rule(Source::Answer, "搜索", "搜索功能"),
    rule(Source::Answer, "智能", "智能功能"),
];

/// Derive the de-duplicated tag set for a question/answer pair, in table order.
pub fn generate_tags(question: &str, answer: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for rule in TAG_RULES {
        let text = match rule.source {
            Source::Question => question,
            Source::Answer => answer,
        };
        if text.contains(rule.keyword) && !tags.iter().any(|t| t == rule.tag) {
            tags.push(rule.tag.to_string());
        }
    }
    tags
}

/// Pick the heading tag: the first table tag present in `tags`.
///
/// Tags outside the table (hand-edited or older stores) are only used when no
/// table tag is present.
pub fn primary_tag(tags: &[String]) -> Option<&str> {
    TAG_RULES
        .iter()
        .map(|r| r.tag)
        .find(|tag| tags.iter().any(|t| t == tag))
        .or_else(|| tags.first().map(String::as_str))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_rules_only_see_the_question() {
        assert!(generate_tags("", "数据和分析").is_empty());
        assert_eq!(generate_tags("数据", ""), vec!["数据分析"]);
    }

    #[test]
    fn answer_rules_only_see_the_answer() {
        assert!(generate_tags("文件搜索", "").is_empty());
        assert_eq!(generate_tags("", "智能搜索文件"), vec!["文件管理", "搜索功能", "智能功能"]);
    }

    #[test]
    fn tags_are_deduplicated() {
        assert_eq!(generate_tags("数据分析", ""), vec!["数据分析"]);
        assert_eq!(generate_tags("Python脚本", ""), vec!["编程"]);
    }

    #[test]
    fn tags_follow_table_order() {
        assert_eq!(
            generate_tags("写个Python脚本做数据总结", "保存到文件"),
            vec!["数据分析", "编程", "内容总结", "文件管理"]
        );
    }

    #[test]
    fn keyword_match_is_case_sensitive() {
        assert!(generate_tags("python", "").is_empty());
        assert_eq!(generate_tags("Python", ""), vec!["编程"]);
    }

    #[test]
    fn generation_is_idempotent() {
        let q = "如何创建自动化对话记录系统";
        let a = "智能地搜索文件";
        assert_eq!(generate_tags(q, a), generate_tags(q, a));
    }

    #[test]
    fn primary_tag_uses_table_order_not_storage_order() {
        let tags = vec!["智能功能".to_string(), "编程".to_string()];
        assert_eq!(primary_tag(&tags), Some("编程"));
    }

    #[test]
    fn primary_tag_falls_back_to_unknown_tags() {
        assert_eq!(primary_tag(&["misc".to_string()]), Some("misc"));
        assert_eq!(primary_tag(&[]), None);
    }
}
