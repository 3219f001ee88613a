use memoboard_core::{
    demo_memos, Accent, BoardError, KeyValueStore, Language, MemoBoard, MemoDraft, MemoQuery,
    MemoRepository, PreferenceService, Preferences, RepoError, RepoResult, MEMOS_KEY,
};
use rusqlite::ffi;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// In-memory store whose writes start failing once `fail_writes` is raised.
#[derive(Clone, Default)]
struct ReadOnlyAfterLoad {
    entries: Rc<RefCell<HashMap<String, String>>>,
    fail_writes: Rc<Cell<bool>>,
}

impl KeyValueStore for ReadOnlyAfterLoad {
    fn get(&self, key: &str) -> RepoResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> RepoResult<()> {
        if self.fail_writes.get() {
            return Err(RepoError::from(rusqlite::Error::SqliteFailure(
                ffi::Error::new(ffi::SQLITE_FULL),
                Some("database or disk is full".to_string()),
            )));
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> RepoResult<bool> {
        Ok(self.entries.borrow_mut().remove(key).is_some())
    }
}

fn stored_memo_count(store: &ReadOnlyAfterLoad) -> usize {
    let raw = store.get(MEMOS_KEY).unwrap().expect("memos should be stored");
    serde_json::from_str::<Vec<serde_json::Value>>(&raw)
        .unwrap()
        .len()
}

#[test]
fn failed_writes_leave_board_collection_unchanged() {
    let store = ReadOnlyAfterLoad::default();
    let mut board = MemoBoard::load(MemoRepository::new(store.clone())).unwrap();
    store.fail_writes.set(true);

    let created = board.create_memo(MemoDraft::new("never saved"));
    assert!(matches!(created, Err(BoardError::Repo(_))));

    let updated = board.update_memo("1", "edited", "x");
    assert!(matches!(updated, Err(BoardError::Repo(_))));

    assert_eq!(board.memos(), demo_memos().as_slice());
    assert_eq!(board.query(&MemoQuery::default()).len(), 4);
    assert_eq!(stored_memo_count(&store), 4);
}

#[test]
fn failed_reset_keeps_current_collection() {
    let store = ReadOnlyAfterLoad::default();
    let mut board = MemoBoard::load(MemoRepository::new(store.clone())).unwrap();
    let kept = board.create_memo(MemoDraft::new("kept")).unwrap();
    store.fail_writes.set(true);

    assert!(matches!(board.reset_to_demo(), Err(BoardError::Repo(_))));
    assert_eq!(board.memos().len(), 5);
    assert_eq!(board.memos()[0], kept);
}

#[test]
fn retry_after_failed_capture_does_not_duplicate() {
    let store = ReadOnlyAfterLoad::default();
    let mut board = MemoBoard::load(MemoRepository::new(store.clone())).unwrap();

    store.fail_writes.set(true);
    assert!(board.create_memo(MemoDraft::new("retry me")).is_err());
    store.fail_writes.set(false);
    board.create_memo(MemoDraft::new("retry me")).unwrap();

    let copies = board
        .memos()
        .iter()
        .filter(|memo| memo.content == "retry me")
        .count();
    assert_eq!(copies, 1);
    assert_eq!(stored_memo_count(&store), 5);
}

#[test]
fn failed_preference_writes_keep_previous_values() {
    let store = ReadOnlyAfterLoad::default();
    let mut prefs = PreferenceService::load(MemoRepository::new(store.clone())).unwrap();
    prefs.set_accent(Accent::Amber).unwrap();
    store.fail_writes.set(true);

    assert!(prefs.set_accent(Accent::Rose).is_err());
    assert!(prefs.set_language(Language::Zh).is_err());
    assert_eq!(
        prefs.current(),
        Preferences {
            accent: Accent::Amber,
            language: Language::En,
        }
    );
}
