//! Error types for frontdesk-media.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from photo storage.
#[derive(Debug, Error)]
pub enum MediaError {
    /// The named photo is not in the images directory (deleted or never written).
    #[error("image '{name}' has been deleted or not found")]
    NotFound { name: String },

    /// The extension does not name a format we can write.
    #[error("unsupported image extension '{extension}'")]
    UnsupportedExtension { extension: String },

    /// The derived file name would escape the images directory.
    #[error("invalid image name '{name}'")]
    InvalidName { name: String },

    /// The uploaded bytes are not a readable image.
    #[error("could not decode image: {0}")]
    Decode(#[source] image::ImageError),

    /// The scaled image could not be encoded.
    #[error("could not encode image: {0}")]
    Encode(#[source] image::ImageError),

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`MediaError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> MediaError {
    MediaError::Io {
        path: path.into(),
        source,
    }
}
