use devfolio_core::db::open_preferences_db;
use devfolio_core::theme::{PrefError, PrefResult};
use devfolio_core::{
    ColorScheme, FixedSchemeSource, MemoryPreferenceBackend, PreferenceBackend, PreferenceStore,
    SqlitePreferenceBackend, ThemePreference,
};
use std::cell::RefCell;
use std::rc::Rc;

/// Backend double simulating unavailable storage.
struct FailingBackend;

impl PreferenceBackend for FailingBackend {
    fn read(&self, _key: &str) -> PrefResult<Option<String>> {
        Err(PrefError::Backend("storage unavailable".to_string()))
    }

    fn write(&self, _key: &str, _value: &str) -> PrefResult<()> {
        Err(PrefError::Backend("storage unavailable".to_string()))
    }
}

fn memory_store() -> PreferenceStore<MemoryPreferenceBackend, FixedSchemeSource> {
    PreferenceStore::new(
        MemoryPreferenceBackend::new(),
        FixedSchemeSource::new(ColorScheme::Light),
    )
}

#[test]
fn default_preference_is_system() {
    let store = memory_store();
    assert_eq!(store.get(), ThemePreference::System);
}

#[test]
fn toggled_preference_survives_a_fresh_load() {
    let dir = tempfile::tempdir().expect("temp dir should be creatable");
    let db_path = dir.path().join("prefs.sqlite3");

    {
        let conn = open_preferences_db(&db_path).expect("open should succeed");
        let store = PreferenceStore::new(
            SqlitePreferenceBackend::new(&conn),
            FixedSchemeSource::new(ColorScheme::Light),
        );
        assert_eq!(store.get(), ThemePreference::System);
        store.set(ThemePreference::Dark);
    }

    // Fresh load with the OS reporting light: the stored value must win
    // without consulting the system signal.
    let conn = open_preferences_db(&db_path).expect("reopen should succeed");
    let store = PreferenceStore::new(
        SqlitePreferenceBackend::new(&conn),
        FixedSchemeSource::new(ColorScheme::Light),
    );
    assert_eq!(store.get(), ThemePreference::Dark);
    assert!(store.is_dark());
}

#[test]
fn unparseable_stored_value_degrades_to_system() {
    let conn = devfolio_core::db::open_preferences_db_in_memory().expect("open should succeed");
    conn.execute(
        "INSERT INTO preferences (key, value) VALUES ('theme', 'solarized')",
        [],
    )
    .expect("seed row should insert");

    let store = PreferenceStore::new(
        SqlitePreferenceBackend::new(&conn),
        FixedSchemeSource::new(ColorScheme::Light),
    );
    assert_eq!(store.get(), ThemePreference::System);
}

#[test]
fn system_preference_resolves_against_os_signal_at_call_time() {
    let schemes = FixedSchemeSource::new(ColorScheme::Light);
    let store = PreferenceStore::new(MemoryPreferenceBackend::new(), schemes);

    assert!(!store.is_dark());
    assert_eq!(store.resolved_scheme().as_str(), "light");
}

#[test]
fn explicit_preference_ignores_os_signal() {
    let store = PreferenceStore::new(
        MemoryPreferenceBackend::new(),
        FixedSchemeSource::new(ColorScheme::Dark),
    );
    store.set(ThemePreference::Light);
    assert!(!store.is_dark());
}

#[test]
fn unavailable_storage_degrades_silently() {
    let store = PreferenceStore::new(FailingBackend, FixedSchemeSource::new(ColorScheme::Light));

    assert_eq!(store.get(), ThemePreference::System);
    assert!(store.is_degraded());

    store.set(ThemePreference::Dark);
    assert_eq!(store.get(), ThemePreference::Dark);
    assert!(store.is_dark());
}

#[test]
fn subscribers_are_notified_until_unsubscribed() {
    let store = memory_store();
    let seen: Rc<RefCell<Vec<ThemePreference>>> = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&seen);
    let id = store.subscribe(move |value| sink.borrow_mut().push(value));

    store.set(ThemePreference::Dark);
    store.unsubscribe(id);
    store.set(ThemePreference::Light);

    assert_eq!(seen.borrow().as_slice(), &[ThemePreference::Dark]);
}

#[test]
fn cycle_visits_light_dark_system_in_order() {
    let store = memory_store();
    store.set(ThemePreference::Light);

    assert_eq!(store.cycle(), ThemePreference::Dark);
    assert_eq!(store.cycle(), ThemePreference::System);
    assert_eq!(store.cycle(), ThemePreference::Light);
}
