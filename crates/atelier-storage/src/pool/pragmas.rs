//! PRAGMA configuration applied to every SQLite connection.

use rusqlite::Connection;

use atelier_core::errors::AtelierResult;

use crate::to_store_err;

/// Apply performance and safety pragmas. WAL is only requested for file-backed databases.
pub fn apply_pragmas(conn: &Connection, file_backed: bool) -> AtelierResult<()> {
    if file_backed {
        conn.execute_batch("PRAGMA journal_mode = WAL;")
            .map_err(|e| to_store_err(e.to_string()))?;
    }
    conn.execute_batch(
        "
        PRAGMA synchronous = NORMAL;
        PRAGMA cache_size = -16000;
        PRAGMA busy_timeout = 5000;
        PRAGMA foreign_keys = ON;
        ",
    )
    .map_err(|e| to_store_err(e.to_string()))?;
    Ok(())
}
