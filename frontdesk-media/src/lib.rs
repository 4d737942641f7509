//! # frontdesk-media
//!
//! Visitor photo storage. Photos live in one directory, named
//! `<email>.<extension>`, already scaled to the configured envelope.

pub mod error;
pub mod store;

pub use error::MediaError;
pub use store::{image_name, scaled_dimensions, ImageStore, StagedPhoto};
