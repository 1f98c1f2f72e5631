//! Integration tests for the theme store, provider scopes and persistence.

use std::cell::RefCell;
use std::rc::Rc;

use etf_mts_view::{
    use_theme, ClassList, DocumentRoot, FileStorage, MemoryStorage, ThemeError, ThemePreference,
    ThemeProvider, ThemeStore, ThemeStorage, DARK_MODE_CLASS, LIGHT_MODE_CLASS, THEME_STORAGE_KEY,
};
use proptest::prelude::*;

fn marker_for(root: &ClassList) -> Option<ThemePreference> {
    match (root.has_class(DARK_MODE_CLASS), root.has_class(LIGHT_MODE_CLASS)) {
        (true, false) => Some(ThemePreference::Dark),
        (false, true) => Some(ThemePreference::Light),
        _ => None,
    }
}

#[test]
fn first_open_without_storage_is_dark() {
    let store = ThemeStore::builder().storage(MemoryStorage::new()).open();
    assert_eq!(store.current(), ThemePreference::Dark);
}

#[test]
fn first_open_with_light_is_light_and_anything_else_dark() {
    let light = MemoryStorage::with_entry(THEME_STORAGE_KEY, "light");
    assert_eq!(
        ThemeStore::builder().storage(light).open().current(),
        ThemePreference::Light
    );

    for other in ["dark", "Light", "light ", "system", "{}"] {
        let storage = MemoryStorage::with_entry(THEME_STORAGE_KEY, other);
        assert_eq!(
            ThemeStore::builder().storage(storage).open().current(),
            ThemePreference::Dark,
            "stored {other:?}"
        );
    }
}

#[test]
fn consumer_outside_provider_fails_fast() {
    let err = use_theme().unwrap_err();
    assert_eq!(err, ThemeError::OutsideProvider);
    assert!(err.to_string().contains("ThemeProvider"));
}

#[test]
fn mount_toggle_rerender_flow() {
    let storage = MemoryStorage::new();
    let root = ClassList::new();
    let store = ThemeStore::builder()
        .storage(storage.clone())
        .root(root.clone())
        .open();
    let _scope = ThemeProvider::provide(store);

    // Two consumers mount and record what they render.
    let header = Rc::new(RefCell::new(Vec::new()));
    let chart = Rc::new(RefCell::new(Vec::new()));
    for log in [&header, &chart] {
        let theme = use_theme().unwrap();
        log.borrow_mut().push(theme.is_dark_mode());
        let log = Rc::clone(log);
        theme.subscribe(move |pref| log.borrow_mut().push(pref.is_dark()));
    }

    use_theme().unwrap().toggle();

    assert_eq!(*header.borrow(), vec![true, false]);
    assert_eq!(*chart.borrow(), vec![true, false]);
    assert_eq!(storage.value(THEME_STORAGE_KEY).as_deref(), Some("light"));
    assert_eq!(marker_for(&root), Some(ThemePreference::Light));
}

#[test]
fn preference_survives_sessions_in_file_storage() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");

    let first = ThemeStore::builder()
        .storage(FileStorage::new(&path))
        .open();
    assert_eq!(first.current(), ThemePreference::Dark);
    first.toggle();
    drop(first);

    let second = ThemeStore::builder()
        .storage(FileStorage::new(&path))
        .open();
    assert_eq!(second.current(), ThemePreference::Light);
    assert_eq!(
        FileStorage::new(&path).get(THEME_STORAGE_KEY).as_deref(),
        Some("light")
    );
}

#[test]
fn custom_document_root_receives_markers() {
    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<String>>>);

    impl DocumentRoot for Recorder {
        fn add_class(&self, class: &str) {
            self.0.borrow_mut().push(format!("+{class}"));
        }
        fn remove_class(&self, class: &str) {
            self.0.borrow_mut().push(format!("-{class}"));
        }
        fn has_class(&self, class: &str) -> bool {
            self.0
                .borrow()
                .iter()
                .rev()
                .find(|entry| entry.ends_with(class))
                .is_some_and(|entry| entry.starts_with('+'))
        }
    }

    let recorder = Recorder::default();
    let store = ThemeStore::builder().root(recorder.clone()).open();
    store.toggle();

    assert_eq!(
        *recorder.0.borrow(),
        vec!["-light-mode", "+dark-mode", "-dark-mode", "+light-mode"]
    );
    assert!(recorder.has_class(LIGHT_MODE_CLASS));
}

proptest! {
    #[test]
    fn toggle_twice_is_identity(start_light in any::<bool>(), extra in 0usize..6) {
        let storage = if start_light {
            MemoryStorage::with_entry(THEME_STORAGE_KEY, "light")
        } else {
            MemoryStorage::new()
        };
        let store = ThemeStore::builder().storage(storage).open();
        for _ in 0..extra {
            store.toggle();
        }
        let before = store.current();

        store.toggle();
        store.toggle();
        prop_assert_eq!(store.current(), before);
    }

    #[test]
    fn exactly_one_marker_matches_after_each_toggle(toggles in 1usize..20) {
        let root = ClassList::new();
        let storage = MemoryStorage::new();
        let store = ThemeStore::builder()
            .storage(storage.clone())
            .root(root.clone())
            .open();

        for _ in 0..toggles {
            store.toggle();
            prop_assert_eq!(marker_for(&root), Some(store.current()));
            let stored = storage.value(THEME_STORAGE_KEY);
            prop_assert_eq!(
                stored.as_deref(),
                Some(store.current().as_str())
            );
        }
    }

    #[test]
    fn unrecognized_stored_values_resolve_dark(raw in "\\PC*") {
        prop_assume!(raw != "light");
        let storage = MemoryStorage::with_entry(THEME_STORAGE_KEY, &raw);
        let store = ThemeStore::builder().storage(storage).open();
        prop_assert_eq!(store.current(), ThemePreference::Dark);
    }
}
