//! SQLite bootstrap for the durable preference store.
//!
//! # Responsibility
//! - Open and configure the per-profile SQLite database.
//! - Apply schema migrations tracked via `PRAGMA user_version`.
//!
//! # Invariants
//! - Returned connections have all migrations applied.
//! - Core code must not touch the `preferences` table before migrations
//!   succeed.

use log::{error, info};
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;
use std::time::Duration;

pub type DbResult<T> = Result<T, DbError>;

/// Database bootstrap and migration errors.
#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    /// The on-disk schema was written by a newer binary.
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "preference schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

#[derive(Debug, Clone, Copy)]
struct Migration {
    version: u32,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    sql: "CREATE TABLE preferences (
        key   TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );",
}];

/// Latest schema version known by this binary.
pub fn latest_schema_version() -> u32 {
    MIGRATIONS.last().map_or(0, |migration| migration.version)
}

/// Opens the preference database file and applies pending migrations.
pub fn open_preferences_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    let conn = Connection::open(path)?;
    bootstrap(conn, "file")
}

/// Opens an in-memory preference database for headless and test use.
pub fn open_preferences_db_in_memory() -> DbResult<Connection> {
    let conn = Connection::open_in_memory()?;
    bootstrap(conn, "memory")
}

fn bootstrap(mut conn: Connection, mode: &str) -> DbResult<Connection> {
    conn.busy_timeout(Duration::from_secs(5))?;
    match apply_migrations(&mut conn) {
        Ok(()) => {
            info!("event=prefs_db_open module=db status=ok mode={mode}");
            Ok(conn)
        }
        Err(err) => {
            error!("event=prefs_db_open module=db status=error mode={mode} error={err}");
            Err(err)
        }
    }
}

/// Applies all pending migrations atomically.
///
/// # Invariants
/// - Migration versions are strictly increasing.
/// - The applied version is mirrored to `PRAGMA user_version`.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let current: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    let latest = latest_schema_version();

    if current > latest {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: current,
            latest_supported: latest,
        });
    }
    if current == latest {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for migration in MIGRATIONS.iter().filter(|m| m.version > current) {
        tx.execute_batch(migration.sql)?;
        tx.execute_batch(&format!("PRAGMA user_version = {};", migration.version))?;
    }
    tx.commit()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{apply_migrations, latest_schema_version, open_preferences_db_in_memory, DbError};

    #[test]
    fn open_in_memory_applies_latest_schema() {
        let conn = open_preferences_db_in_memory().expect("open should succeed");
        let version: u32 = conn
            .query_row("PRAGMA user_version;", [], |row| row.get(0))
            .expect("user_version should be readable");
        assert_eq!(version, latest_schema_version());
    }

    #[test]
    fn apply_migrations_is_idempotent() {
        let mut conn = open_preferences_db_in_memory().expect("open should succeed");
        apply_migrations(&mut conn).expect("re-applying on latest schema is a no-op");
    }

    #[test]
    fn newer_schema_is_rejected() {
        let mut conn = open_preferences_db_in_memory().expect("open should succeed");
        conn.execute_batch("PRAGMA user_version = 99;")
            .expect("pragma should apply");
        let err = apply_migrations(&mut conn).expect_err("future schema must be rejected");
        assert!(matches!(
            err,
            DbError::UnsupportedSchemaVersion { db_version: 99, .. }
        ));
    }
}
