use chrono::{TimeZone, Utc};
use memoboard_core::db::open_db_in_memory;
use memoboard_core::{
    demo_memos, Accent, EditorDraft, KeyValueStore, Language, Memo, MemoCategory, MemoRepository,
    Preferences, RepoError, SqliteKeyValueStore, DRAFT_KEY, MEMOS_KEY, PREFERENCES_KEY,
};
use serde_json::json;

#[test]
fn memo_json_uses_camel_case_and_millisecond_timestamps() {
    let memo = &demo_memos()[0];
    let value = serde_json::to_value(memo).unwrap();

    assert_eq!(
        value,
        json!({
            "id": "1",
            "content": "Ship v1.4 today. Keep the release note tight and highlight the frictionless capture flow.",
            "tags": ["product", "release"],
            "category": "task",
            "pinned": true,
            "createdAt": "2024-05-01T12:00:00.000Z"
        })
    );
}

#[test]
fn memo_json_accepts_offset_timestamps_and_normalizes_to_utc() {
    let memo: Memo = serde_json::from_value(json!({
        "id": "x",
        "content": "offset",
        "tags": [],
        "category": "idea",
        "pinned": false,
        "createdAt": "2024-05-01T20:00:00+08:00"
    }))
    .unwrap();

    assert_eq!(memo.category, MemoCategory::Idea);
    assert_eq!(
        memo.created_at,
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    );
}

#[test]
fn collection_round_trip_preserves_every_field() {
    let conn = open_db_in_memory().unwrap();
    let repo = MemoRepository::new(SqliteKeyValueStore::new(&conn));

    let mut memos = demo_memos();
    memos[1].tags = vec!["dup".to_string(), "dup".to_string(), "Mixed Case".to_string()];
    memos[1].created_at = Utc.timestamp_millis_opt(1_714_470_600_123).unwrap();
    repo.save_memos(&memos).unwrap();

    let loaded = repo.load_memos().unwrap().expect("memos should be stored");
    assert_eq!(loaded, memos);
}

#[test]
fn malformed_or_inconsistent_collections_are_invalid_data() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteKeyValueStore::new(&conn);
    let repo = MemoRepository::new(store);

    store.set(MEMOS_KEY, "{not an array").unwrap();
    assert!(matches!(
        repo.load_memos(),
        Err(RepoError::InvalidData { .. })
    ));

    let mut duplicated = demo_memos();
    duplicated[1].id = "1".to_string();
    store
        .set(MEMOS_KEY, &serde_json::to_string(&duplicated).unwrap())
        .unwrap();
    let err = repo.load_memos().unwrap_err();
    assert!(err.to_string().contains("duplicate memo id"));

    store
        .set(
            MEMOS_KEY,
            r#"[{"id":"1","content":"x","tags":[],"category":"chore","pinned":false,"createdAt":"2024-05-01T12:00:00.000Z"}]"#,
        )
        .unwrap();
    assert!(matches!(
        repo.load_memos(),
        Err(RepoError::InvalidData { .. })
    ));
}

#[test]
fn preferences_and_draft_use_their_own_keys() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteKeyValueStore::new(&conn);
    let repo = MemoRepository::new(store);

    repo.save_preferences(&Preferences {
        accent: Accent::Violet,
        language: Language::Zh,
    })
    .unwrap();
    let stamp = Utc.with_ymd_and_hms(2024, 5, 3, 8, 0, 0).unwrap();
    repo.save_draft(&EditorDraft::new("# hi", stamp)).unwrap();

    assert_eq!(
        store.get(PREFERENCES_KEY).unwrap().as_deref(),
        Some(r#"{"accent":"violet","language":"zh"}"#)
    );
    assert_eq!(
        store.get(DRAFT_KEY).unwrap().as_deref(),
        Some(r##"{"content":"# hi","updatedAt":"2024-05-03T08:00:00.000Z"}"##)
    );
    assert_eq!(store.get(MEMOS_KEY).unwrap(), None);
}
