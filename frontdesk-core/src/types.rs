//! Domain types for visitor registration.
//!
//! [`VisitorForm`] is what a shell hands over (raw strings, nothing checked
//! yet). [`NewVisitor`] is a validated record waiting for an id, and
//! [`Visitor`] is a stored row.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::registration_id::RegistrationId;

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// Surrogate key assigned by storage on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VisitorId(pub i64);

impl fmt::Display for VisitorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<i64> for VisitorId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// The text stored in the `gender` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            other => Err(format!("unknown gender '{other}'; expected: male, female")),
        }
    }
}

/// A required attribute of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Gender,
    Email,
    Contact,
    HostEmployeeDetails,
    CompanyName,
    Country,
    RegistrationId,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Name => "name",
            Field::Gender => "gender",
            Field::Email => "email",
            Field::Contact => "contact",
            Field::HostEmployeeDetails => "host employee details",
            Field::CompanyName => "company name",
            Field::Country => "country",
            Field::RegistrationId => "registration id",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// Form input
// ---------------------------------------------------------------------------

/// A photo picked by the user, not yet decoded.
#[derive(Clone, PartialEq, Eq)]
pub struct PhotoUpload {
    pub bytes: Vec<u8>,
    /// Extension of the original file, without the dot (e.g. `png`).
    pub extension: String,
}

impl PhotoUpload {
    pub fn new(bytes: Vec<u8>, extension: impl Into<String>) -> Self {
        Self {
            bytes,
            extension: extension.into(),
        }
    }

    /// Text after the last `.` of a file name, if there is any.
    ///
    /// `photo.JPG` gives `Some("JPG")`; `photo` and `photo.` give `None`.
    pub fn extension_of(file_name: &str) -> Option<&str> {
        match file_name.rsplit_once('.') {
            Some((_, ext)) if !ext.is_empty() => Some(ext),
            _ => None,
        }
    }
}

impl fmt::Debug for PhotoUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhotoUpload")
            .field("bytes", &format_args!("<{} bytes>", self.bytes.len()))
            .field("extension", &self.extension)
            .finish()
    }
}

/// Raw registration input exactly as the shell collected it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitorForm {
    pub name: String,
    /// `None` when neither option was selected.
    pub gender: Option<Gender>,
    pub email: String,
    pub contact: String,
    pub host_employee_details: String,
    pub company_name: String,
    pub country: String,
    pub photo: Option<PhotoUpload>,
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// A validated visitor that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVisitor {
    pub name: String,
    pub gender: Gender,
    pub email: String,
    pub contact: String,
    pub host_employee_details: String,
    pub company_name: String,
    pub country: String,
    pub registration_id: RegistrationId,
    pub image_name: Option<String>,
    pub registered_at: DateTime<Utc>,
}

/// A stored visitor row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visitor {
    pub id: VisitorId,
    pub name: String,
    pub gender: Gender,
    pub email: String,
    pub contact: String,
    pub host_employee_details: String,
    pub company_name: String,
    pub country: String,
    pub registration_id: RegistrationId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_name: Option<String>,
    pub registered_at: DateTime<Utc>,
}

impl Visitor {
    /// Attach the storage id to a record that was just inserted.
    pub fn from_new(id: VisitorId, new: NewVisitor) -> Self {
        Self {
            id,
            name: new.name,
            gender: new.gender,
            email: new.email,
            contact: new.contact,
            host_employee_details: new.host_employee_details,
            company_name: new.company_name,
            country: new.country,
            registration_id: new.registration_id,
            image_name: new.image_name,
            registered_at: new.registered_at,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
