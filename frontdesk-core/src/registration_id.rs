//! Registration tokens.
//!
//! A [`RegistrationId`] is handed out once per registration and never
//! reused. There is no central sequence: uniqueness comes from the token
//! itself, which concatenates
//!
//! 1. the current UTC time in nanoseconds,
//! 2. a process-wide counter (distinct values within one process), and
//! 3. 64 random bits (distinct values across processes).

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use serde::{Deserialize, Serialize};

static SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Opaque per-registration token, distinct from the storage id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegistrationId(pub String);

impl RegistrationId {
    /// Produce a fresh token. Never empty.
    pub fn generate() -> Self {
        let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();
        let seq = SEQUENCE.fetch_add(1, Ordering::Relaxed);
        let noise: u64 = rand::random();
        Self(format!("{nanos}{seq:06}{noise:016x}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for RegistrationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for RegistrationId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for RegistrationId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}
