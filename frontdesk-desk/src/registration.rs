//! Registration workflow.
//!
//! Steps, each one only reached if the previous succeeded:
//!
//! 1. generate a registration id
//! 2. validate the form (email → contact → completeness)
//! 3. duplicate-email check
//! 4. stage the photo, if any
//! 5. insert the record
//! 6. commit the photo under its final name
//!
//! Steps 3 and 5 are separate round trips. Two sessions registering the same
//! email at once can both pass step 3; the storage-level unique index then
//! fails the second insert with the same duplicate outcome, and its staged
//! photo is discarded without touching the first visitor's file.

use chrono::Utc;

use frontdesk_core::validation::validate_form;
use frontdesk_core::{
    Field, NewVisitor, RegistrationId, ValidationError, Visitor, VisitorForm,
};
use frontdesk_media::ImageStore;
use frontdesk_store::VisitorRepository;

use crate::error::DeskError;

/// Registers visitors against a repository and a photo store.
pub struct Registration<'a, R: ?Sized> {
    repo: &'a R,
    images: &'a ImageStore,
}

impl<'a, R: VisitorRepository + ?Sized> Registration<'a, R> {
    pub fn new(repo: &'a R, images: &'a ImageStore) -> Self {
        Self { repo, images }
    }

    /// Run the whole workflow for one submitted form.
    ///
    /// Nothing is written unless validation and the duplicate check pass. If
    /// the insert fails the staged photo is discarded and the error returned.
    pub fn submit(&self, form: VisitorForm) -> Result<Visitor, DeskError> {
        let registration_id = RegistrationId::generate();
        validate_form(&form, &registration_id)?;
        let Some(gender) = form.gender else {
            return Err(ValidationError::MissingFields(vec![Field::Gender]).into());
        };

        if self.repo.exists_by_email(&form.email)? {
            tracing::info!(email = %form.email, "rejected duplicate registration");
            return Err(DeskError::DuplicateEmail { email: form.email });
        }

        let staged = self.images.stage(&form.email, form.photo.as_ref())?;

        let new = NewVisitor {
            name: form.name,
            gender,
            email: form.email,
            contact: form.contact,
            host_employee_details: form.host_employee_details,
            company_name: form.company_name,
            country: form.country,
            registration_id,
            image_name: staged.as_ref().map(|s| s.name().to_string()),
            registered_at: Utc::now(),
        };
        let id = self.repo.insert(&new)?;

        if let Some(staged) = staged {
            if let Err(err) = staged.commit() {
                tracing::error!(%id, error = %err, "visitor stored but photo could not be committed");
                return Err(DeskError::Photo(err));
            }
        }

        tracing::info!(%id, registration_id = %new.registration_id, "visitor registered");
        Ok(Visitor::from_new(id, new))
    }
}
