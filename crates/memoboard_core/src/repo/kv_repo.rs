//! Key/value storage contract and SQLite implementation.
//!
//! # Responsibility
//! - Model browser-style local storage: string keys mapped to string values.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - `set` is an upsert; the last write for a key wins.
//! - Values are opaque text; callers own their encoding.

use crate::db::DbError;
use log::debug;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for storage access and payload decoding.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Stored payload under `key` cannot be decoded into its typed shape.
    InvalidData { key: String, message: String },
    /// Typed value could not be encoded for storage.
    Encode(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData { key, message } => {
                write!(f, "invalid stored data under `{key}`: {message}")
            }
            Self::Encode(err) => write!(f, "failed to encode stored value: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData { .. } => None,
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Local storage interface.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> RepoResult<Option<String>>;
    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> RepoResult<()>;
    /// Removes `key`; returns whether a value existed.
    fn remove(&self, key: &str) -> RepoResult<bool>;
}

/// SQLite-backed key/value store over the `kv_entries` table.
#[derive(Debug, Clone, Copy)]
pub struct SqliteKeyValueStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteKeyValueStore<'conn> {
    /// Wraps a connection returned by `open_db`/`open_db_in_memory`.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl KeyValueStore for SqliteKeyValueStore<'_> {
    fn get(&self, key: &str) -> RepoResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_entries WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        debug!(
            "event=kv_get module=repo status=ok key={} hit={}",
            key,
            value.is_some()
        );
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO kv_entries (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        debug!(
            "event=kv_set module=repo status=ok key={} bytes={}",
            key,
            value.len()
        );
        Ok(())
    }

    fn remove(&self, key: &str) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM kv_entries WHERE key = ?1;", [key])?;
        Ok(changed > 0)
    }
}
