//! Visitor repository.
//!
//! [`VisitorRepository`] is the seam the workflows talk to;
//! [`SqliteVisitorRepository`] implements it over a borrowed
//! [`rusqlite::Connection`]. Every statement is parameterized: user input is
//! only ever bound, never spliced into SQL text.

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, Connection, ErrorCode, OptionalExtension, Row};

use frontdesk_core::types::{Gender, NewVisitor, Visitor, VisitorId};
use frontdesk_core::RegistrationId;

use crate::error::StoreError;
use crate::schema::{COLUMNS, TABLE};

/// Reads and writes of visitor records.
pub trait VisitorRepository {
    /// `true` iff a visitor with exactly this email is stored.
    fn exists_by_email(&self, email: &str) -> Result<bool, StoreError>;

    /// Persist `visitor` and return its new id.
    ///
    /// Fails with [`StoreError::DuplicateEmail`] when the email is taken,
    /// even if the caller skipped [`exists_by_email`](Self::exists_by_email).
    fn insert(&self, visitor: &NewVisitor) -> Result<VisitorId, StoreError>;

    /// Every visitor, oldest first.
    fn find_all(&self) -> Result<Vec<Visitor>, StoreError>;

    /// Visitors whose name or email contains `term`, ignoring ASCII case.
    /// An empty term returns the same rows as [`find_all`](Self::find_all).
    fn find_by_name_or_email_substring(&self, term: &str) -> Result<Vec<Visitor>, StoreError>;

    fn find_by_id(&self, id: VisitorId) -> Result<Option<Visitor>, StoreError>;
}

/// SQLite-backed [`VisitorRepository`].
#[derive(Debug, Clone, Copy)]
pub struct SqliteVisitorRepository<'c> {
    conn: &'c Connection,
}

impl<'c> SqliteVisitorRepository<'c> {
    /// The connection must already be migrated (see [`crate::open_at`]).
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }

    fn query_visitors(
        &self,
        sql: &str,
        params: impl rusqlite::Params,
    ) -> Result<Vec<Visitor>, StoreError> {
        let mut stmt = self.conn.prepare_cached(sql)?;
        let rows = stmt
            .query_map(params, VisitorRow::from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        rows.into_iter().map(Visitor::try_from).collect()
    }
}

impl VisitorRepository for SqliteVisitorRepository<'_> {
    fn exists_by_email(&self, email: &str) -> Result<bool, StoreError> {
        let sql = format!("SELECT EXISTS(SELECT 1 FROM {TABLE} WHERE email = ?1)");
        let exists: bool = self
            .conn
            .prepare_cached(&sql)?
            .query_row(params![email], |row| row.get(0))?;
        Ok(exists)
    }

    fn insert(&self, visitor: &NewVisitor) -> Result<VisitorId, StoreError> {
        let sql = format!(
            "INSERT INTO {TABLE} (name, gender, email, contact, host_employee_details, \
             company_name, country, registration_id, image_name, registered_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)"
        );
        let result = self.conn.prepare_cached(&sql)?.execute(params![
            visitor.name,
            visitor.gender.as_str(),
            visitor.email,
            visitor.contact,
            visitor.host_employee_details,
            visitor.company_name,
            visitor.country,
            visitor.registration_id.as_str(),
            visitor.image_name,
            visitor.registered_at.to_rfc3339_opts(SecondsFormat::Nanos, true),
        ]);

        match result {
            Ok(_) => {
                let id = VisitorId(self.conn.last_insert_rowid());
                tracing::debug!(%id, email = %visitor.email, "inserted visitor");
                Ok(id)
            }
            Err(err) if is_unique_violation(&err) => Err(StoreError::DuplicateEmail {
                email: visitor.email.clone(),
            }),
            Err(err) => Err(err.into()),
        }
    }

    fn find_all(&self) -> Result<Vec<Visitor>, StoreError> {
        let sql = format!("SELECT {COLUMNS} FROM {TABLE} ORDER BY id");
        self.query_visitors(&sql, [])
    }

    fn find_by_name_or_email_substring(&self, term: &str) -> Result<Vec<Visitor>, StoreError> {
        if term.is_empty() {
            return self.find_all();
        }
        // instr() matches literally, so `%` and `_` in the term need no escaping.
        let sql = format!(
            "SELECT {COLUMNS} FROM {TABLE} \
             WHERE instr(lower(name), lower(?1)) > 0 OR instr(lower(email), lower(?1)) > 0 \
             ORDER BY id"
        );
        tracing::debug!(term, "searching visitors");
        self.query_visitors(&sql, params![term])
    }

    fn find_by_id(&self, id: VisitorId) -> Result<Option<Visitor>, StoreError> {
        let sql = format!("SELECT {COLUMNS} FROM {TABLE} WHERE id = ?1");
        let row = self
            .conn
            .prepare_cached(&sql)?
            .query_row(params![id.0], VisitorRow::from_row)
            .optional()?;
        row.map(Visitor::try_from).transpose()
    }
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == ErrorCode::ConstraintViolation
                && e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}

// ---------------------------------------------------------------------------
// Row mapping
// ---------------------------------------------------------------------------

/// A raw row, before the gender and timestamp text are checked.
struct VisitorRow {
    id: i64,
    name: String,
    gender: String,
    email: String,
    contact: String,
    host_employee_details: String,
    company_name: String,
    country: String,
    registration_id: String,
    image_name: Option<String>,
    registered_at: String,
}

impl VisitorRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            gender: row.get(2)?,
            email: row.get(3)?,
            contact: row.get(4)?,
            host_employee_details: row.get(5)?,
            company_name: row.get(6)?,
            country: row.get(7)?,
            registration_id: row.get(8)?,
            image_name: row.get(9)?,
            registered_at: row.get(10)?,
        })
    }
}

impl TryFrom<VisitorRow> for Visitor {
    type Error = StoreError;

    fn try_from(row: VisitorRow) -> Result<Self, Self::Error> {
        let gender: Gender = row
            .gender
            .parse()
            .map_err(|reason| StoreError::CorruptRow { id: row.id, reason })?;
        let registered_at = DateTime::parse_from_rfc3339(&row.registered_at)
            .map_err(|e| StoreError::CorruptRow {
                id: row.id,
                reason: format!("bad registered_at '{}': {e}", row.registered_at),
            })?
            .with_timezone(&Utc);
        Ok(Visitor {
            id: VisitorId(row.id),
            name: row.name,
            gender,
            email: row.email,
            contact: row.contact,
            host_employee_details: row.host_employee_details,
            company_name: row.company_name,
            country: row.country,
            registration_id: RegistrationId(row.registration_id),
            image_name: row.image_name,
            registered_at,
        })
    }
}
