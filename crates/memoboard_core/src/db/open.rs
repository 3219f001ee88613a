//! Connection bootstrap for the storage file.
//!
//! # Invariants
//! - Returned connections have `foreign_keys=ON` and a 5s busy timeout.
//! - Returned connections have migrations fully applied.

use super::migrations::apply_migrations;
use super::{DbError, DbResult};
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens (or creates) the storage file at `path` and applies pending migrations.
///
/// Missing parent directories are created.
///
/// # Side effects
/// - Emits `storage_open` events with mode, duration and status.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    let path = path.as_ref();
    let started_at = Instant::now();
    info!("event=storage_open module=db status=start mode=file");

    if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        if let Err(source) = std::fs::create_dir_all(parent) {
            error!(
                "event=storage_open module=db status=error mode=file error_code=create_dir_failed error={}",
                source
            );
            return Err(DbError::CreateDir {
                path: parent.to_path_buf(),
                source,
            });
        }
    }

    finish_open(Connection::open(path), "file", started_at)
}

/// Opens a throwaway in-memory store; used by tests and dry runs.
pub fn open_db_in_memory() -> DbResult<Connection> {
    let started_at = Instant::now();
    info!("event=storage_open module=db status=start mode=memory");
    finish_open(Connection::open_in_memory(), "memory", started_at)
}

fn finish_open(
    opened: rusqlite::Result<Connection>,
    mode: &'static str,
    started_at: Instant,
) -> DbResult<Connection> {
    let mut conn = match opened {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=storage_open module=db status=error mode={} duration_ms={} error_code=open_failed error={}",
                mode,
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    match bootstrap_connection(&mut conn) {
        Ok(()) => {
            info!(
                "event=storage_open module=db status=ok mode={} duration_ms={}",
                mode,
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=storage_open module=db status=error mode={} duration_ms={} error_code=bootstrap_failed error={}",
                mode,
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

fn bootstrap_connection(conn: &mut Connection) -> DbResult<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(BUSY_TIMEOUT)?;
    apply_migrations(conn)?;
    Ok(())
}
