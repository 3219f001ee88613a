use memoboard_core::db::migrations::latest_version;
use memoboard_core::db::{open_db, open_db_in_memory, DbError};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "kv_entries");
}

#[test]
fn reopening_the_same_file_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("memoboard.db");

    let first = open_db(&path).unwrap();
    assert_eq!(schema_version(&first), latest_version());
    first
        .execute(
            "INSERT INTO kv_entries (key, value) VALUES ('sentinel', 'kept');",
            [],
        )
        .unwrap();
    drop(first);

    let second = open_db(&path).unwrap();
    assert_eq!(schema_version(&second), latest_version());
    let value: String = second
        .query_row("SELECT value FROM kv_entries WHERE key = 'sentinel';", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(value, "kept");
}

#[test]
fn open_db_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("board.db");

    open_db(&path).unwrap();
    assert!(path.exists());
}

#[test]
fn newer_schema_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1);",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "expected table `{table_name}` to exist");
}
