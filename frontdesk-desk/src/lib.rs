//! # frontdesk-desk
//!
//! The two visitor workflows a shell drives:
//!
//! - [`Registration`]: validate a [`VisitorForm`](frontdesk_core::VisitorForm),
//!   reject duplicate emails, store the photo, insert the record.
//! - [`Directory`]: list and search visitors, resolve a visitor's photo.
//!
//! Both borrow a [`VisitorRepository`](frontdesk_store::VisitorRepository) and
//! an [`ImageStore`](frontdesk_media::ImageStore) supplied by the caller.

pub mod directory;
pub mod error;
pub mod registration;

pub use directory::{Directory, Photo};
pub use error::DeskError;
pub use registration::Registration;
