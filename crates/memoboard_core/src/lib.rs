//! Core domain logic for the memo board.
//! This crate is the single source of truth for memo invariants, list queries
//! and local persistence.

pub mod db;
pub mod logging;
pub mod model;
pub mod query;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::draft::{EditorDraft, DEFAULT_DRAFT};
pub use model::memo::{
    demo_memos, format_tags_input, parse_tags_input, Memo, MemoCategory, MemoDraft, MemoId,
    MemoValidationError,
};
pub use model::preferences::{Accent, AccentPalette, Language, Preferences};
pub use model::template::MemoTemplate;
pub use query::filter::{filter_memos, sort_newest_first, DateWindow, MemoFilter, MemoQuery};
pub use query::stats::{tag_usage, BoardStats, TagUsage};
pub use repo::kv_repo::{KeyValueStore, RepoError, RepoResult, SqliteKeyValueStore};
pub use repo::memo_repo::{MemoRepository, DRAFT_KEY, MEMOS_KEY, PREFERENCES_KEY};
pub use service::board_service::{BoardError, Clock, EditSession, MemoBoard};
pub use service::draft_service::{derive_markdown_preview, DraftPreview, DraftService};
pub use service::preference_service::PreferenceService;

/// Minimal health-check API for front-end wiring.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
