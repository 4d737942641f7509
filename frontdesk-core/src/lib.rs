//! Frontdesk core library: visitor domain types, validation, registration
//! ids, configuration and errors.
//!
//! - [`types`]: newtypes and the visitor record shapes
//! - [`validation`]: form rules, applied in a fixed order
//! - [`registration_id`]: [`RegistrationId`] generation
//! - [`config`]: load / save `~/.frontdesk/config.yaml`
//! - [`error`]: [`ValidationError`], [`ConfigError`]

pub mod config;
pub mod error;
pub mod registration_id;
pub mod types;
pub mod validation;

pub use config::{Config, PhotoEnvelope};
pub use error::{ConfigError, ValidationError};
pub use registration_id::RegistrationId;
pub use types::{
    Field, Gender, NewVisitor, PhotoUpload, Visitor, VisitorForm, VisitorId,
};
