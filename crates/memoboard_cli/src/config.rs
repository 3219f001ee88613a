//! Runtime configuration: flags, then environment, then defaults.

use memoboard_core::{default_log_level, LogLevel, LoggingError};
use std::path::PathBuf;

pub const ENV_DB: &str = "MEMOBOARD_DB";
pub const ENV_LOG_DIR: &str = "MEMOBOARD_LOG_DIR";
pub const ENV_LOG_LEVEL: &str = "MEMOBOARD_LOG_LEVEL";

const DEFAULT_DB_FILE: &str = "memoboard.db";

/// Resolved settings for one CLI invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    pub db_path: PathBuf,
    /// File logging is off when unset.
    pub log_dir: Option<PathBuf>,
    pub log_level: LogLevel,
}

impl BoardConfig {
    /// Merges explicit flags over environment values over defaults.
    pub fn resolve(
        db: Option<PathBuf>,
        log_dir: Option<PathBuf>,
        log_level: Option<String>,
    ) -> Result<Self, LoggingError> {
        Self::resolve_with(db, log_dir, log_level, |key| std::env::var(key).ok())
    }

    fn resolve_with(
        db: Option<PathBuf>,
        log_dir: Option<PathBuf>,
        log_level: Option<String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, LoggingError> {
        let non_empty = |key: &str| env(key).filter(|value| !value.trim().is_empty());

        let db_path = db
            .or_else(|| non_empty(ENV_DB).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE));
        let log_dir = log_dir.or_else(|| non_empty(ENV_LOG_DIR).map(PathBuf::from));
        let log_level = match log_level.or_else(|| non_empty(ENV_LOG_LEVEL)) {
            Some(raw) => raw.parse()?,
            None => default_log_level(),
        };

        Ok(Self {
            db_path,
            log_dir,
            log_level,
        })
    }
}
