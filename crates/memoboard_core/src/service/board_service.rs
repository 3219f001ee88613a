//! Memo board use-case service.
//!
//! # Responsibility
//! - Own the in-memory memo collection for one board session.
//! - Apply capture, inline-edit and reset flows, persisting after each one.
//!
//! # Invariants
//! - Captured and edited content is trimmed and never empty.
//! - New memos are prepended; ids are fresh UUIDs.
//! - Inline edit replaces content and tags and refreshes `created_at`.
//! - Reset is the only way memos leave the collection.
//! - A mutation whose write fails leaves the in-memory collection unchanged.

use crate::model::memo::{
    demo_memos, format_tags_input, parse_tags_input, Memo, MemoDraft, MemoId,
};
use crate::query::filter::{filter_memos, MemoQuery};
use crate::query::stats::{tag_usage, BoardStats, TagUsage};
use crate::repo::kv_repo::{KeyValueStore, RepoError};
use crate::repo::memo_repo::MemoRepository;
use chrono::{DateTime, Utc};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Time source used for capture and edit timestamps.
pub type Clock = fn() -> DateTime<Utc>;

/// Service error for board use-cases.
#[derive(Debug)]
pub enum BoardError {
    /// Content is empty after trimming.
    EmptyContent,
    MemoNotFound(MemoId),
    Repo(RepoError),
}

impl Display for BoardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyContent => write!(f, "memo content cannot be empty"),
            Self::MemoNotFound(id) => write!(f, "memo not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for BoardError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for BoardError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Prefilled inline-edit form for one memo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub memo_id: MemoId,
    pub content: String,
    /// Tags joined as `a, b, c`.
    pub tags_input: String,
}

/// View-level state container for the memo collection.
pub struct MemoBoard<S: KeyValueStore> {
    repo: MemoRepository<S>,
    memos: Vec<Memo>,
    clock: Clock,
}

impl<S: KeyValueStore> MemoBoard<S> {
    /// Hydrates the board from storage using the system clock.
    ///
    /// See [`MemoBoard::load_with_clock`].
    pub fn load(repo: MemoRepository<S>) -> Result<Self, BoardError> {
        Self::load_with_clock(repo, Utc::now)
    }

    /// Hydrates the board from storage.
    ///
    /// - Nothing stored: starts from the demo memos and persists them.
    /// - Stored payload is malformed: starts from the demo memos without
    ///   overwriting storage until the next mutation.
    ///
    /// # Errors
    /// - Storage access failures.
    pub fn load_with_clock(repo: MemoRepository<S>, clock: Clock) -> Result<Self, BoardError> {
        let memos = match repo.load_memos() {
            Ok(Some(memos)) => {
                info!(
                    "event=board_load module=service status=ok source=storage count={}",
                    memos.len()
                );
                memos
            }
            Ok(None) => {
                let memos = demo_memos();
                repo.save_memos(&memos)?;
                info!(
                    "event=board_load module=service status=ok source=demo count={}",
                    memos.len()
                );
                memos
            }
            Err(RepoError::InvalidData { key, message }) => {
                warn!(
                    "event=board_load module=service status=fallback source=demo key={} error={}",
                    key, message
                );
                demo_memos()
            }
            Err(err) => return Err(err.into()),
        };

        Ok(Self { repo, memos, clock })
    }

    /// Full collection in stored order (most recently captured first).
    pub fn memos(&self) -> &[Memo] {
        &self.memos
    }

    pub fn get(&self, id: &str) -> Option<&Memo> {
        self.memos.iter().find(|memo| memo.id == id)
    }

    /// Memos matching `query`, newest first.
    pub fn query(&self, query: &MemoQuery) -> Vec<Memo> {
        filter_memos(&self.memos, query)
    }

    pub fn stats(&self) -> BoardStats {
        BoardStats::collect(&self.memos)
    }

    pub fn tag_usage(&self) -> Vec<TagUsage> {
        tag_usage(&self.memos)
    }

    /// Captures a new memo from the capture form and persists the collection.
    ///
    /// Tags from the draft are trimmed and empty ones dropped.
    pub fn create_memo(&mut self, draft: MemoDraft) -> Result<Memo, BoardError> {
        let content = draft.content.trim();
        if content.is_empty() {
            return Err(BoardError::EmptyContent);
        }

        let memo = Memo {
            id: Uuid::new_v4().to_string(),
            content: content.to_string(),
            tags: clean_tags(draft.tags),
            category: draft.category,
            pinned: draft.pinned,
            created_at: (self.clock)(),
        };

        let mut next = Vec::with_capacity(self.memos.len() + 1);
        next.push(memo.clone());
        next.extend(self.memos.iter().cloned());
        self.commit(next)?;
        info!(
            "event=memo_create module=service status=ok memo_id={} category={} tag_count={} pinned={}",
            memo.id,
            memo.category,
            memo.tags.len(),
            memo.pinned
        );
        Ok(memo)
    }

    /// Opens an inline edit prefilled from the stored memo.
    pub fn start_edit(&self, id: &str) -> Result<EditSession, BoardError> {
        let memo = self
            .get(id)
            .ok_or_else(|| BoardError::MemoNotFound(id.to_string()))?;
        Ok(EditSession {
            memo_id: memo.id.clone(),
            content: memo.content.clone(),
            tags_input: format_tags_input(&memo.tags),
        })
    }

    /// Commits an [`EditSession`].
    pub fn save_edit(&mut self, session: &EditSession) -> Result<Memo, BoardError> {
        self.update_memo(&session.memo_id, &session.content, &session.tags_input)
    }

    /// Replaces content and tags of one memo and refreshes its timestamp.
    ///
    /// Category and pin state are kept.
    pub fn update_memo(
        &mut self,
        id: &str,
        content: &str,
        tags_input: &str,
    ) -> Result<Memo, BoardError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(BoardError::EmptyContent);
        }

        let index = self
            .memos
            .iter()
            .position(|memo| memo.id == id)
            .ok_or_else(|| BoardError::MemoNotFound(id.to_string()))?;
        let updated = Memo {
            content: content.to_string(),
            tags: parse_tags_input(tags_input),
            created_at: (self.clock)(),
            ..self.memos[index].clone()
        };

        let mut next = self.memos.clone();
        next[index] = updated.clone();
        self.commit(next)?;
        info!(
            "event=memo_update module=service status=ok memo_id={} tag_count={}",
            updated.id,
            updated.tags.len()
        );
        Ok(updated)
    }

    /// Content to hand to the clipboard for one memo.
    pub fn copy_text(&self, id: &str) -> Result<&str, BoardError> {
        self.get(id)
            .map(|memo| memo.content.as_str())
            .ok_or_else(|| BoardError::MemoNotFound(id.to_string()))
    }

    /// Replaces the whole collection with the demo memos.
    pub fn reset_to_demo(&mut self) -> Result<(), BoardError> {
        let dropped = self.memos.len();
        self.commit(demo_memos())?;
        info!(
            "event=board_reset module=service status=ok dropped={} count={}",
            dropped,
            self.memos.len()
        );
        Ok(())
    }

    /// Writes `next` to storage and adopts it only once the write succeeded.
    fn commit(&mut self, next: Vec<Memo>) -> Result<(), BoardError> {
        if let Err(err) = self.repo.save_memos(&next) {
            warn!(
                "event=board_persist module=service status=error count={} error={}",
                next.len(),
                err
            );
            return Err(err.into());
        }
        self.memos = next;
        Ok(())
    }
}

fn clean_tags(tags: Vec<String>) -> Vec<String> {
    tags.into_iter()
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect()
}
