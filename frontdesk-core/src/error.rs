//! Error types for frontdesk-core.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::Field;

/// A form submission was rejected before any side effect happened.
///
/// Variants are reported in the order the rules run: email format, then
/// contact format, then completeness.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid Email.")]
    InvalidEmail,

    #[error("Invalid contact number")]
    InvalidContact,

    /// One or more required fields were empty; lists them in form order.
    #[error("One or more fields are empty: {}", join_fields(.0))]
    MissingFields(Vec<Field>),
}

fn join_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// All errors that can arise while loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// YAML parse error on load, with the offending file.
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// `dirs::home_dir()` returned `None`, so we cannot locate `~/.frontdesk/`.
    #[error("cannot determine home directory; set $HOME or equivalent")]
    HomeNotFound,
}
