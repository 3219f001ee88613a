use memoboard_core::db::open_db_in_memory;
use memoboard_core::{KeyValueStore, SqliteKeyValueStore};

#[test]
fn missing_key_reads_as_none() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteKeyValueStore::new(&conn);

    assert_eq!(store.get("memos-demo").unwrap(), None);
}

#[test]
fn set_is_an_upsert_and_remove_reports_presence() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteKeyValueStore::new(&conn);

    store.set("k", "first").unwrap();
    store.set("k", "second").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("second"));

    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM kv_entries;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);

    assert!(store.remove("k").unwrap());
    assert!(!store.remove("k").unwrap());
    assert_eq!(store.get("k").unwrap(), None);
}
