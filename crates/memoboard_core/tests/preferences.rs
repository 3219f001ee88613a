use memoboard_core::db::open_db_in_memory;
use memoboard_core::{
    Accent, KeyValueStore, Language, MemoRepository, PreferenceService, Preferences,
    SqliteKeyValueStore, PREFERENCES_KEY,
};

#[test]
fn missing_preferences_load_defaults() {
    let conn = open_db_in_memory().unwrap();
    let service = PreferenceService::load(MemoRepository::new(SqliteKeyValueStore::new(&conn)))
        .unwrap();

    assert_eq!(service.current(), Preferences::default());
    assert_eq!(service.current().accent, Accent::Indigo);
    assert_eq!(service.current().language, Language::En);
}

#[test]
fn setters_persist_full_object() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteKeyValueStore::new(&conn);
    let mut service = PreferenceService::load(MemoRepository::new(store)).unwrap();

    service.set_accent(Accent::Rose).unwrap();
    assert_eq!(
        store.get(PREFERENCES_KEY).unwrap().as_deref(),
        Some(r#"{"accent":"rose","language":"en"}"#)
    );
    service.set_language(Language::Zh).unwrap();

    let reloaded = PreferenceService::load(MemoRepository::new(store)).unwrap();
    assert_eq!(
        reloaded.current(),
        Preferences {
            accent: Accent::Rose,
            language: Language::Zh,
        }
    );
}

#[test]
fn malformed_preferences_are_ignored() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteKeyValueStore::new(&conn);

    store.set(PREFERENCES_KEY, "not json at all").unwrap();
    let service = PreferenceService::load(MemoRepository::new(store)).unwrap();
    assert_eq!(service.current(), Preferences::default());

    store
        .set(PREFERENCES_KEY, r#"{"accent":42,"language":"zh"}"#)
        .unwrap();
    let service = PreferenceService::load(MemoRepository::new(store)).unwrap();
    assert_eq!(service.current().accent, Accent::Indigo);
    assert_eq!(service.current().language, Language::Zh);
}

#[test]
fn every_accent_has_a_palette() {
    for accent in Accent::ALL {
        let palette = accent.palette();
        assert!(palette.primary.starts_with('#'));
        assert!(palette.ring.starts_with('#'));
        assert_eq!(Accent::parse(accent.as_str()), Some(accent));
    }
}
