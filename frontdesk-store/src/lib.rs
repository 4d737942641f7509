//! # frontdesk-store
//!
//! SQLite persistence for visitor records.
//!
//! Open a database with [`open_at`] (or [`open_in_memory`]), then build a
//! [`SqliteVisitorRepository`] over the borrowed connection. Callers own the
//! connection and decide how long it lives.

pub mod connection;
pub mod error;
pub mod repository;
pub mod schema;

pub use connection::{open_at, open_in_memory};
pub use error::StoreError;
pub use repository::{SqliteVisitorRepository, VisitorRepository};
