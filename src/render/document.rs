//! Structured view of the Markdown log.
//!
//! A [`LogDocument`] splits the text at the first [`SECTION_MARKER`]: everything
//! up to and including the marker is the preamble, everything after it is kept
//! verbatim. New entries sit between the two, newest first, so the latest
//! conversation always appears directly under the heading. Documents without
//! a marker get new entries appended at the end.

/// Heading under which entries are inserted. Must stay byte-for-byte stable.
pub const SECTION_MARKER: &str = "## 📝 对话记录";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogDocument {
    preamble: String,
    entries: Vec<String>,
    remainder: String,
    has_marker: bool,
}

impl LogDocument {
    pub fn parse(text: &str) -> Self {
        match text.find(SECTION_MARKER) {
            Some(idx) => {
                let split = idx + SECTION_MARKER.len();
                Self {
                    preamble: text[..split].to_string(),
                    entries: Vec::new(),
                    remainder: text[split..].to_string(),
                    has_marker: true,
                }
            }
            None => Self {
                preamble: text.to_string(),
                entries: Vec::new(),
                remainder: String::new(),
                has_marker: false,
            },
        }
    }

    /// Fresh log with the standard preamble and footer, stamped with `date`.
    pub fn template(date: &str) -> Self {
        Self::parse(&template_text(date))
    }

    pub fn has_marker(&self) -> bool {
        self.has_marker
    }

    pub fn insert(&mut self, entry: impl Into<String>) {
        if self.has_marker {
            self.entries.insert(0, entry.into());
        } else {
            self.entries.push(entry.into());
        }
    }

    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(
            self.preamble.len()
                + self.remainder.len()
                + self.entries.iter().map(String::len).sum::<usize>(),
        );
        out.push_str(&self.preamble);
        for entry in &self.entries {
            out.push_str(entry);
        }
        out.push_str(&self.remainder);
        out
    }
}

/// Insert `entry` into `document` right after the section marker, or at the end.
pub fn merge(document: &str, entry: &str) -> String {
    let mut doc = LogDocument::parse(document);
    doc.insert(entry);
    doc.to_text()
}

fn template_text(date: &str) -> String {
    format!(
        "# 🤖 AI助手对话记录系统

## 📊 对话统计
- **总对话次数**: 0
- **最后更新**: {date}
- **主要话题**: 待更新

## 🏷️ 话题索引
- [待建立](#待建立)

---

{SECTION_MARKER}

---

## 🔍 快速搜索
- 按日期: `Ctrl+F` 搜索日期
- 按话题: `Ctrl+F` 搜索标签
- 按关键词: `Ctrl+F` 搜索内容

---

*最后更新: {date} | 由 convlog {version} 生成*
",
        version = env!("CARGO_PKG_VERSION"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_land_right_after_marker_newest_first() {
        let doc = format!("# Title\n{SECTION_MARKER}\n\n---\nfooter\n");
        let once = merge(&doc, "\nA\n");
        let twice = merge(&once, "\nB\n");
        assert_eq!(twice, format!("# Title\n{SECTION_MARKER}\nB\n\nA\n\n\n---\nfooter\n"));
    }

    #[test]
    fn missing_marker_appends_to_end() {
        let once = merge("plain notes\n", "A\n");
        assert_eq!(merge(&once, "B\n"), "plain notes\nA\nB\n");
    }

    #[test]
    fn only_first_marker_is_used() {
        let doc = format!("{SECTION_MARKER}\nold entry mentioning {SECTION_MARKER}\n");
        let merged = merge(&doc, "\nNEW");
        assert_eq!(
            merged,
            format!("{SECTION_MARKER}\nNEW\nold entry mentioning {SECTION_MARKER}\n")
        );
    }

    #[test]
    fn in_memory_document_keeps_newest_first() {
        let mut doc = LogDocument::parse(&format!("head {SECTION_MARKER} tail"));
        doc.insert("1");
        doc.insert("2");
        doc.insert("3");
        assert_eq!(doc.to_text(), format!("head {SECTION_MARKER}321 tail"));
    }

    #[test]
    fn template_contains_marker_and_date() {
        let doc = LogDocument::template("2024-01-15");
        assert!(doc.has_marker());
        let text = doc.to_text();
        assert!(text.starts_with("# 🤖 AI助手对话记录系统\n"));
        assert!(text.contains("- **最后更新**: 2024-01-15\n"));
        assert!(text.contains("## 🔍 快速搜索"));
    }

    #[test]
    fn parse_and_serialize_is_lossless() {
        let text = LogDocument::template("2024-01-15").to_text();
        assert_eq!(LogDocument::parse(&text).to_text(), text);
    }
}
