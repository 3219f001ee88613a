//! Preference use-case service.
//!
//! # Invariants
//! - Loading never fails on bad stored data; defaults are used instead.
//! - Every setter persists the full `{accent, language}` object.
//! - A setter whose write fails keeps the previous preferences.

use crate::model::preferences::{Accent, Language, Preferences};
use crate::repo::kv_repo::{KeyValueStore, RepoError, RepoResult};
use crate::repo::memo_repo::MemoRepository;
use log::{info, warn};

pub struct PreferenceService<S: KeyValueStore> {
    repo: MemoRepository<S>,
    current: Preferences,
}

impl<S: KeyValueStore> PreferenceService<S> {
    /// Loads stored preferences, falling back to defaults.
    ///
    /// # Errors
    /// - Storage access failures only; malformed payloads are logged and ignored.
    pub fn load(repo: MemoRepository<S>) -> RepoResult<Self> {
        let current = match repo.load_preferences() {
            Ok(Some(prefs)) => prefs,
            Ok(None) => Preferences::default(),
            Err(RepoError::InvalidData { key, message }) => {
                warn!(
                    "event=prefs_load module=service status=fallback key={} error={}",
                    key, message
                );
                Preferences::default()
            }
            Err(err) => return Err(err),
        };
        Ok(Self { repo, current })
    }

    pub fn current(&self) -> Preferences {
        self.current
    }

    pub fn set_accent(&mut self, accent: Accent) -> RepoResult<Preferences> {
        self.commit(Preferences {
            accent,
            ..self.current
        })
    }

    pub fn set_language(&mut self, language: Language) -> RepoResult<Preferences> {
        self.commit(Preferences {
            language,
            ..self.current
        })
    }

    fn commit(&mut self, next: Preferences) -> RepoResult<Preferences> {
        if let Err(err) = self.repo.save_preferences(&next) {
            warn!(
                "event=prefs_save module=service status=error accent={} language={} error={}",
                next.accent, next.language, err
            );
            return Err(err);
        }
        self.current = next;
        info!(
            "event=prefs_save module=service status=ok accent={} language={}",
            next.accent, next.language
        );
        Ok(next)
    }
}
