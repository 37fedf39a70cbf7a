//! Database open helpers and migration setup for the SQLite backend.
//!
//! Schema versions are tracked through SQLite's `user_version` pragma by
//! `rusqlite_migration`; the migration SQL itself is compiled into the
//! binary with `include_str!`.

use rusqlite::Connection;
use rusqlite_migration::{Migrations, M};

use crate::error::StorageError;

/// The ordered migration list. New schema changes append an `M::up(...)`
/// entry; already-applied versions are skipped on open.
fn migrations() -> Migrations<'static> {
    Migrations::new(vec![M::up(include_str!(
        "migrations/001_initial_schema.sql"
    ))])
}

/// Opens (or creates) a SQLite database file at `path`, ready for use:
/// pragmas set and any pending migrations applied.
pub fn open_database(path: &str) -> Result<Connection, StorageError> {
    let mut conn = Connection::open(path)?;
    configure_and_migrate(&mut conn)?;
    Ok(conn)
}

/// Opens a migrated in-memory database. Used by tests and the server's
/// in-memory mode; the WAL pragma has no effect here.
pub fn open_in_memory() -> Result<Connection, StorageError> {
    let mut conn = Connection::open_in_memory()?;
    configure_and_migrate(&mut conn)?;
    Ok(conn)
}

fn configure_and_migrate(conn: &mut Connection) -> Result<(), StorageError> {
    // WAL keeps readers unblocked while a delete cascade commits.
    conn.pragma_update(None, "journal_mode", "WAL")?;
    // With WAL, NORMAL durability is sufficient.
    conn.pragma_update(None, "synchronous", "NORMAL")?;
    // SQLite ships with foreign keys off; the dependent tables rely on them.
    conn.pragma_update(None, "foreign_keys", "ON")?;

    migrations()
        .to_latest(conn)
        .map_err(|e| StorageError::Migration(e.to_string()))?;

    Ok(())
}
