//! Error types for frontdesk-desk.
//!
//! These are the outcomes a shell shows to the user; each variant maps to a
//! distinct notice.

use thiserror::Error;

use frontdesk_core::ValidationError;
use frontdesk_media::MediaError;
use frontdesk_store::StoreError;

#[derive(Debug, Error)]
pub enum DeskError {
    /// Bad email/contact format or a missing required field.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Registration aborted: the email is already registered.
    #[error("Duplicate email.")]
    DuplicateEmail { email: String },

    /// The database could not serve the request.
    #[error("Something went wrong.")]
    StorageUnavailable(#[source] StoreError),

    /// The visitor has a photo on record but the file is missing.
    #[error("Either image has been deleted or not found.")]
    ImageNotFound { name: String },

    /// A photo could not be stored or looked up, for a reason other than a
    /// missing file.
    #[error("photo error: {0}")]
    Photo(#[source] MediaError),
}

impl From<StoreError> for DeskError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateEmail { email } => Self::DuplicateEmail { email },
            other => Self::StorageUnavailable(other),
        }
    }
}

impl From<MediaError> for DeskError {
    fn from(err: MediaError) -> Self {
        match err {
            MediaError::NotFound { name } => Self::ImageNotFound { name },
            other => Self::Photo(other),
        }
    }
}
