//! Opening databases.
//!
//! Both helpers return a migrated connection. The caller owns it and it is
//! closed when dropped.

use std::path::Path;
use std::time::Duration;

use rusqlite::Connection;

use crate::error::{io_err, StoreError};
use crate::schema;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Open (creating if needed) the database file at `path`.
pub fn open_at(path: &Path) -> Result<Connection, StoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
    }
    let conn = Connection::open(path)?;
    conn.busy_timeout(BUSY_TIMEOUT)?;
    schema::migrate(&conn)?;
    tracing::debug!(path = %path.display(), "opened visitor database");
    Ok(conn)
}

/// A private in-memory database, mostly for tests.
pub fn open_in_memory() -> Result<Connection, StoreError> {
    let conn = Connection::open_in_memory()?;
    schema::migrate(&conn)?;
    Ok(conn)
}
