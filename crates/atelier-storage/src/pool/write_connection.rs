//! Single connection behind `tokio::sync::Mutex`. Every store call suspends
//! on the lock instead of blocking a thread.

use std::path::Path;

use rusqlite::Connection;
use tokio::sync::Mutex;

use atelier_core::errors::AtelierResult;

use super::pragmas::apply_pragmas;
use crate::{schema, to_store_err};

pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    /// Open a file-backed database, apply pragmas, and bootstrap the schema.
    pub fn open(path: &Path) -> AtelierResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_store_err(e.to_string()))?;
        Self::prepare(conn, true)
    }

    /// Open an in-memory database (for testing and ephemeral runs).
    pub fn open_in_memory() -> AtelierResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_store_err(e.to_string()))?;
        Self::prepare(conn, false)
    }

    // Runs before the connection is shared, so no lock is needed and
    // opening works both inside and outside a runtime.
    fn prepare(conn: Connection, file_backed: bool) -> AtelierResult<Self> {
        apply_pragmas(&conn, file_backed)?;
        schema::bootstrap(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Acquire the lock and run a closure with the connection.
    pub async fn with_conn<F, T>(&self, f: F) -> AtelierResult<T>
    where
        F: FnOnce(&Connection) -> AtelierResult<T>,
    {
        let guard = self.conn.lock().await;
        f(&guard)
    }
}
