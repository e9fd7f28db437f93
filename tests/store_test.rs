mod helpers;

use convlog::config::SummaryConfig;
use convlog::store::{JsonFileStore, RecordRepository};
use convlog::RecordKind;
use tempfile::TempDir;

#[test]
fn missing_store_loads_empty() {
    let tmp = TempDir::new().unwrap();
    let store = JsonFileStore::new(tmp.path().join("absent.json"));
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn n_appends_yield_sequential_ids_and_reload_unchanged() {
    let tmp = TempDir::new().unwrap();
    let (path, _) = helpers::paths(&tmp);
    let store = JsonFileStore::new(&path);
    let limits = SummaryConfig::default();

    let mut appended = Vec::new();
    for i in 0..5 {
        appended.push(
            store
                .append(&format!("问题{i}"), &format!("重要的是第{i}点。需要复查。"), &limits)
                .unwrap(),
        );
    }

    let ids: Vec<u64> = appended.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);

    let reloaded = JsonFileStore::new(&path).load().unwrap();
    assert_eq!(reloaded, appended);
}

#[test]
fn reopened_store_continues_numbering() {
    let tmp = TempDir::new().unwrap();
    let (path, _) = helpers::paths(&tmp);
    let limits = SummaryConfig::default();

    {
        let store = JsonFileStore::new(&path);
        for _ in 0..3 {
            store.append("问", "答", &limits).unwrap();
        }
    }

    let store = JsonFileStore::new(&path);
    let before = store.load().unwrap();
    assert_eq!(before.len(), 3);

    let fourth = store.append("第四个", "答", &limits).unwrap();
    assert_eq!(fourth.id, 4);

    let after = store.load().unwrap();
    assert_eq!(&after[..3], &before[..]);
    assert_eq!(after[3].id, 4);
}

#[test]
fn persisted_fields_match_the_record_schema() {
    let tmp = TempDir::new().unwrap();
    let (path, _) = helpers::paths(&tmp);
    let store = JsonFileStore::new(&path);
    store
        .append("如何做数据分析", "关键是先清洗数据。然后需要可视化。", &SummaryConfig::default())
        .unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    // non-ASCII text is written verbatim
    assert!(raw.contains("如何做数据分析"));

    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let first = value.as_array().unwrap()[0].as_object().unwrap();
    let mut keys: Vec<&str> = first.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec!["answer", "follow_up", "id", "key_points", "question", "tags", "timestamp"]
    );
}

#[test]
fn legacy_records_load_and_numbering_continues() {
    let tmp = TempDir::new().unwrap();
    let (path, _) = helpers::paths(&tmp);
    std::fs::write(
        &path,
        r#"[
  {"timestamp": "2024-01-15 09:00", "question": "旧问题", "answer": "旧回答",
   "key_points": ["旧回答"], "tags": ["编程"], "follow_up": [], "id": 1},
  {"timestamp": "2024-01-15 09:30", "conversation": "👤 您: 旧对话", "id": 2}
]"#,
    )
    .unwrap();

    let store = JsonFileStore::new(&path);
    let records = store.load().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].kind, RecordKind::Qa);
    assert_eq!(records[1].answer, "👤 您: 旧对话");
    assert_eq!(records[1].kind, RecordKind::Transcript);

    let next = store.append("新问题", "新回答", &SummaryConfig::default()).unwrap();
    assert_eq!(next.id, 3);
}

#[test]
fn legacy_transcript_renders_as_transcript() {
    let tmp = TempDir::new().unwrap();
    let (store_path, log_path) = helpers::paths(&tmp);
    std::fs::write(
        &store_path,
        r#"[{"timestamp": "2024-01-15 09:30", "conversation": "👤 您: 旧对话", "id": 1}]"#,
    )
    .unwrap();

    let manager = helpers::file_manager(&tmp);
    let record = manager.rerender(1).unwrap();
    assert_eq!(record.kind, RecordKind::Transcript);

    let text = std::fs::read_to_string(&log_path).unwrap();
    assert!(text.contains("### 2024-01-15 09:30 - 完整对话\n**对话内容**:\n👤 您: 旧对话\n"));
    assert!(!text.contains("**问题**"));
}
