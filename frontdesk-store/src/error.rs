//! Error types for frontdesk-store.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from visitor storage.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The `email` uniqueness constraint rejected an insert.
    #[error("a visitor with email '{email}' already exists")]
    DuplicateEmail { email: String },

    /// Any other database failure: connectivity, locking, malformed SQL.
    #[error("storage unavailable: {0}")]
    Unavailable(#[from] rusqlite::Error),

    /// Filesystem failure while preparing the database location.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A stored row could not be turned back into a visitor.
    #[error("visitor row {id} is corrupt: {reason}")]
    CorruptRow { id: i64, reason: String },
}

/// Convenience constructor for [`StoreError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> StoreError {
    StoreError::Io {
        path: path.into(),
        source,
    }
}
