//! Registration form rules.
//!
//! The patterns are kept exactly as the form has always applied them: the
//! email rule needs no domain suffix (`a@b` passes) and a contact number is
//! exactly five ASCII digits.
//!
//! [`validate_form`] runs the rules in a fixed order and stops at the first
//! failure:
//!
//! 1. email format
//! 2. contact format
//! 3. completeness of every required field
//!
//! The duplicate-email check comes after all of these and lives with the
//! repository.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::ValidationError;
use crate::registration_id::RegistrationId;
use crate::types::{Field, VisitorForm};

const EMAIL_PATTERN: &str = r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+$";
const CONTACT_PATTERN: &str = r"^[0-9]{5}$";

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

fn contact_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(CONTACT_PATTERN).expect("contact pattern compiles"))
}

/// `true` when `email` matches `^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+$`.
pub fn validate_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// `true` when `contact` is exactly five ASCII digits.
pub fn validate_contact(contact: &str) -> bool {
    contact_regex().is_match(contact)
}

/// Names of the fields whose value is empty, in the order given.
pub fn validate_required(fields: &[(Field, &str)]) -> Vec<Field> {
    fields
        .iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| *field)
        .collect()
}

/// Apply every form rule in order: email, contact, completeness.
///
/// `registration_id` takes part in the completeness sweep because the
/// record cannot be stored without one.
pub fn validate_form(
    form: &VisitorForm,
    registration_id: &RegistrationId,
) -> Result<(), ValidationError> {
    if !validate_email(&form.email) {
        return Err(ValidationError::InvalidEmail);
    }
    if !validate_contact(&form.contact) {
        return Err(ValidationError::InvalidContact);
    }

    let gender = form.gender.map(|g| g.as_str()).unwrap_or_default();
    let missing = validate_required(&[
        (Field::Name, &form.name),
        (Field::Gender, gender),
        (Field::Email, &form.email),
        (Field::Contact, &form.contact),
        (Field::HostEmployeeDetails, &form.host_employee_details),
        (Field::CompanyName, &form.company_name),
        (Field::Country, &form.country),
        (Field::RegistrationId, registration_id.as_str()),
    ]);
    if !missing.is_empty() {
        return Err(ValidationError::MissingFields(missing));
    }
    Ok(())
}
