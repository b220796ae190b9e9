//! Preference store, backends and the OS scheme seam.

use crate::db::DbError;
use crate::model::theme::{ColorScheme, ThemePreference};
use log::{info, warn};
use rusqlite::{params, Connection, OptionalExtension};
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage key the preference is persisted under.
pub const DEFAULT_PREFERENCE_KEY: &str = "theme";

pub type PrefResult<T> = Result<T, PrefError>;

/// Backend read/write failures.
///
/// The store consumes these internally and degrades; they never cross the
/// store's public API.
#[derive(Debug)]
pub enum PrefError {
    Db(DbError),
    Backend(String),
}

impl Display for PrefError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Backend(message) => write!(f, "preference backend failure: {message}"),
        }
    }
}

impl Error for PrefError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Backend(_) => None,
        }
    }
}

impl From<DbError> for PrefError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for PrefError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Durable key-value seam for the single persisted preference.
pub trait PreferenceBackend {
    fn read(&self, key: &str) -> PrefResult<Option<String>>;
    fn write(&self, key: &str, value: &str) -> PrefResult<()>;
}

/// SQLite-backed preference storage over the `preferences` table.
pub struct SqlitePreferenceBackend<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePreferenceBackend<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl PreferenceBackend for SqlitePreferenceBackend<'_> {
    fn read(&self, key: &str) -> PrefResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM preferences WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write(&self, key: &str, value: &str) -> PrefResult<()> {
        self.conn.execute(
            "INSERT INTO preferences (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }
}

/// In-memory backend for headless and test use; lost on process exit.
#[derive(Default)]
pub struct MemoryPreferenceBackend {
    values: RefCell<BTreeMap<String, String>>,
}

impl MemoryPreferenceBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceBackend for MemoryPreferenceBackend {
    fn read(&self, key: &str) -> PrefResult<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> PrefResult<()> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Injectable OS-level light/dark signal.
///
/// Shells wire this to the platform media query; headless callers use
/// [`FixedSchemeSource`].
pub trait SystemSchemeSource {
    /// Current OS scheme at call time.
    fn current_scheme(&self) -> ColorScheme;
}

/// Scheme source with an externally settable value.
pub struct FixedSchemeSource {
    scheme: Cell<ColorScheme>,
}

impl FixedSchemeSource {
    pub fn new(scheme: ColorScheme) -> Self {
        Self {
            scheme: Cell::new(scheme),
        }
    }

    /// Simulates an OS scheme change.
    pub fn set_scheme(&self, scheme: ColorScheme) {
        self.scheme.set(scheme);
    }
}

impl SystemSchemeSource for FixedSchemeSource {
    fn current_scheme(&self) -> ColorScheme {
        self.scheme.get()
    }
}

/// Handle for removing one subscriber.
pub type SubscriptionId = u64;

type Subscriber = Box<dyn Fn(ThemePreference)>;

/// Theme preference store.
///
/// Reads the backend once and caches the value for the session; `set`
/// persists, updates the cache and notifies subscribers. A failing backend
/// flips the store into degraded mode where the session value is
/// authoritative for the rest of the process.
pub struct PreferenceStore<B: PreferenceBackend, S: SystemSchemeSource> {
    backend: B,
    schemes: S,
    storage_key: String,
    session: Cell<Option<ThemePreference>>,
    degraded: Cell<bool>,
    subscribers: RefCell<Vec<(SubscriptionId, Subscriber)>>,
    next_subscription: Cell<SubscriptionId>,
}

impl<B: PreferenceBackend, S: SystemSchemeSource> PreferenceStore<B, S> {
    pub fn new(backend: B, schemes: S) -> Self {
        Self::with_storage_key(backend, schemes, DEFAULT_PREFERENCE_KEY)
    }

    pub fn with_storage_key(backend: B, schemes: S, storage_key: impl Into<String>) -> Self {
        Self {
            backend,
            schemes,
            storage_key: storage_key.into(),
            session: Cell::new(None),
            degraded: Cell::new(false),
            subscribers: RefCell::new(Vec::new()),
            next_subscription: Cell::new(1),
        }
    }

    /// Current preference: session value, else the persisted value, else
    /// [`ThemePreference::System`].
    pub fn get(&self) -> ThemePreference {
        if let Some(value) = self.session.get() {
            return value;
        }

        let value = match self.backend.read(&self.storage_key) {
            Ok(Some(raw)) => ThemePreference::parse(&raw).unwrap_or_else(|| {
                warn!(
                    "event=pref_read module=theme status=degraded reason=unparseable value={raw}"
                );
                ThemePreference::System
            }),
            Ok(None) => ThemePreference::System,
            Err(err) => {
                warn!("event=pref_read module=theme status=degraded reason=backend error={err}");
                self.degraded.set(true);
                ThemePreference::System
            }
        };

        self.session.set(Some(value));
        value
    }

    /// Persists a new preference and notifies subscribers.
    ///
    /// Write failures flip the store into degraded in-memory mode; the
    /// session value and subscriber notification are unaffected.
    pub fn set(&self, value: ThemePreference) {
        self.session.set(Some(value));

        if !self.degraded.get() {
            if let Err(err) = self.backend.write(&self.storage_key, value.as_str()) {
                warn!("event=pref_write module=theme status=degraded error={err}");
                self.degraded.set(true);
            }
        }

        info!(
            "event=pref_set module=theme status=ok value={}",
            value.as_str()
        );
        for (_, subscriber) in self.subscribers.borrow().iter() {
            subscriber(value);
        }
    }

    /// Advances the toggle cycle (light -> dark -> system) and persists.
    pub fn cycle(&self) -> ThemePreference {
        let next = self.get().cycled();
        self.set(next);
        next
    }

    /// Resolves the preference to the style-scope marker, consulting the OS
    /// signal at call time when the preference is `system`.
    pub fn resolved_scheme(&self) -> ColorScheme {
        self.get().resolve(self.schemes.current_scheme())
    }

    pub fn is_dark(&self) -> bool {
        self.resolved_scheme().is_dark()
    }

    /// Returns whether the backend has been bypassed for this session.
    pub fn is_degraded(&self) -> bool {
        self.degraded.get()
    }

    /// Registers a change listener; scoped to the caller's lifetime via
    /// [`PreferenceStore::unsubscribe`].
    pub fn subscribe(&self, listener: impl Fn(ThemePreference) + 'static) -> SubscriptionId {
        let id = self.next_subscription.get();
        self.next_subscription.set(id + 1);
        self.subscribers
            .borrow_mut()
            .push((id, Box::new(listener)));
        id
    }

    /// Removes one listener; unknown ids are ignored.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers
            .borrow_mut()
            .retain(|(candidate, _)| *candidate != id);
    }
}
