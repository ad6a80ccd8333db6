//! Schema migrations, tracked through SQLite's `user_version` pragma.

use rusqlite::Connection;
use tracing::debug;
use verdict_core::errors::{StorageError, VerdictResult};

/// Current schema version.
const SCHEMA_VERSION: u32 = 1;

/// Bring the database schema up to the current version.
pub fn run_migrations(conn: &Connection) -> VerdictResult<()> {
    let version: u32 = conn
        .query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| StorageError::MigrationFailed {
            version: 0,
            reason: e.to_string(),
        })?;

    if version >= SCHEMA_VERSION {
        return Ok(());
    }

    if version < 1 {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS chunks (
                 collection  TEXT NOT NULL,
                 chunk_id    TEXT NOT NULL,
                 text        TEXT NOT NULL,
                 embedding   BLOB NOT NULL,
                 dimensions  INTEGER NOT NULL,
                 PRIMARY KEY (collection, chunk_id)
             );
             PRAGMA user_version = 1;",
        )
        .map_err(|e| StorageError::MigrationFailed {
            version: 1,
            reason: e.to_string(),
        })?;
        debug!("applied schema migration v1 (chunks table)");
    }

    Ok(())
}
