//! Typed board persistence over a key/value store.
//!
//! # Responsibility
//! - Encode/decode the memo collection, preferences and editor draft as JSON.
//! - Own the storage key names.
//!
//! # Invariants
//! - The memo collection is always written as one JSON array (whole-value
//!   replacement, no partial updates).
//! - A decoded collection never contains invalid memos or duplicate ids.

use crate::model::draft::EditorDraft;
use crate::model::memo::Memo;
use crate::model::preferences::Preferences;
use crate::repo::kv_repo::{KeyValueStore, RepoError, RepoResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashSet;

/// Storage key of the memo array.
pub const MEMOS_KEY: &str = "memos-demo";
/// Storage key of the preference object.
pub const PREFERENCES_KEY: &str = "memos-preferences";
/// Storage key of the editor draft.
pub const DRAFT_KEY: &str = "editor-draft";

/// Board repository bound to one key/value store.
#[derive(Debug, Clone)]
pub struct MemoRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> MemoRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Loads the persisted memo collection.
    ///
    /// Returns `Ok(None)` when nothing has been persisted yet.
    ///
    /// # Errors
    /// - `RepoError::InvalidData` when the payload is not a memo array, a
    ///   memo fails validation, or two memos share an id.
    pub fn load_memos(&self) -> RepoResult<Option<Vec<Memo>>> {
        let Some(memos) = self.load_json::<Vec<Memo>>(MEMOS_KEY)? else {
            return Ok(None);
        };

        let mut seen = HashSet::with_capacity(memos.len());
        for memo in &memos {
            memo.validate().map_err(|err| invalid(MEMOS_KEY, err.to_string()))?;
            if !seen.insert(memo.id.as_str()) {
                return Err(invalid(MEMOS_KEY, format!("duplicate memo id `{}`", memo.id)));
            }
        }
        Ok(Some(memos))
    }

    /// Replaces the persisted memo collection.
    pub fn save_memos(&self, memos: &[Memo]) -> RepoResult<()> {
        self.save_json(MEMOS_KEY, memos)
    }

    /// Loads persisted preferences.
    ///
    /// Fields are decoded leniently; only a payload that is not a JSON object
    /// is reported as `RepoError::InvalidData`.
    pub fn load_preferences(&self) -> RepoResult<Option<Preferences>> {
        let Some(raw) = self.store.get(PREFERENCES_KEY)? else {
            return Ok(None);
        };
        Preferences::from_json_lenient(&raw)
            .map(Some)
            .ok_or_else(|| invalid(PREFERENCES_KEY, "expected a JSON object".to_string()))
    }

    pub fn save_preferences(&self, preferences: &Preferences) -> RepoResult<()> {
        self.save_json(PREFERENCES_KEY, preferences)
    }

    pub fn load_draft(&self) -> RepoResult<Option<EditorDraft>> {
        self.load_json(DRAFT_KEY)
    }

    pub fn save_draft(&self, draft: &EditorDraft) -> RepoResult<()> {
        self.save_json(DRAFT_KEY, draft)
    }

    fn load_json<T: DeserializeOwned>(&self, key: &str) -> RepoResult<Option<T>> {
        let Some(raw) = self.store.get(key)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|err| invalid(key, err.to_string()))
    }

    fn save_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> RepoResult<()> {
        let encoded = serde_json::to_string(value).map_err(RepoError::Encode)?;
        self.store.set(key, &encoded)
    }
}

fn invalid(key: &str, message: String) -> RepoError {
    RepoError::InvalidData {
        key: key.to_string(),
        message,
    }
}
