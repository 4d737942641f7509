//! Table layout and migrations.
//!
//! The schema version is tracked in `PRAGMA user_version`; each entry of
//! [`MIGRATIONS`] moves the database one version forward.

use rusqlite::Connection;

use crate::error::StoreError;

pub const TABLE: &str = "visitors";

/// Column list shared by every `SELECT`, in [`VisitorRow`](crate::repository) order.
pub const COLUMNS: &str = "id, name, gender, email, contact, host_employee_details, \
                           company_name, country, registration_id, image_name, registered_at";

const MIGRATIONS: &[&str] = &[
    // 1: visitors table; email uniqueness is also enforced here so two
    // sessions racing past the pre-insert check cannot both succeed.
    "CREATE TABLE IF NOT EXISTS visitors (
        id                    INTEGER PRIMARY KEY AUTOINCREMENT,
        name                  TEXT NOT NULL,
        gender                TEXT NOT NULL,
        email                 TEXT NOT NULL,
        contact               TEXT NOT NULL,
        host_employee_details TEXT NOT NULL,
        company_name          TEXT NOT NULL,
        country               TEXT NOT NULL,
        registration_id       TEXT NOT NULL,
        image_name            TEXT,
        registered_at         TEXT NOT NULL
    );
    CREATE UNIQUE INDEX IF NOT EXISTS visitors_email_unique ON visitors (email);",
];

/// Current schema version.
pub fn version(conn: &Connection) -> Result<usize, StoreError> {
    let v: i64 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
    Ok(usize::try_from(v).unwrap_or_default())
}

/// Bring `conn` up to the latest schema. Safe to call on every open.
pub fn migrate(conn: &Connection) -> Result<(), StoreError> {
    let current = version(conn)?;
    for (idx, sql) in MIGRATIONS.iter().enumerate().skip(current) {
        let next = idx + 1;
        tracing::debug!(version = next, "applying schema migration");
        conn.execute_batch(&format!("BEGIN;\n{sql}\nPRAGMA user_version = {next};\nCOMMIT;"))?;
    }
    Ok(())
}

/// Latest version [`migrate`] produces.
pub fn latest_version() -> usize {
    MIGRATIONS.len()
}
