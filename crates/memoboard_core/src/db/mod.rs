//! Local storage bootstrap for the memo board.
//!
//! # Responsibility
//! - Open the SQLite file that stands in for browser local storage.
//! - Bring its schema up to date before any key is read or written.
//!
//! # Invariants
//! - Schema version lives in `PRAGMA user_version`.
//! - A database written by a newer binary is never opened.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    /// Parent directory of the database file could not be created.
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::CreateDir { path, source } => write!(
                f,
                "failed to create storage directory `{}`: {source}",
                path.display()
            ),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "storage schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::CreateDir { source, .. } => Some(source),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
