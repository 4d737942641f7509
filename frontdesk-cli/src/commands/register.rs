//! `frontdesk register --name … --gender … --email … [--photo <path>]`

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Args;
use colored::Colorize;

use frontdesk_core::validation::validate_form;
use frontdesk_core::{Gender, PhotoUpload, RegistrationId, VisitorForm};
use frontdesk_desk::{DeskError, Registration};

/// Register a new visitor.
///
/// Every field is passed through as typed; the registration workflow decides
/// what is valid, so an omitted option behaves like an empty form field.
#[derive(Args, Debug)]
pub struct RegisterArgs {
    #[arg(long, default_value = "")]
    pub name: String,

    /// male | female
    #[arg(long)]
    pub gender: Option<Gender>,

    #[arg(long, default_value = "")]
    pub email: String,

    /// Five-digit contact number.
    #[arg(long, default_value = "")]
    pub contact: String,

    /// Who the visitor is here to see.
    #[arg(long = "host", default_value = "")]
    pub host_employee_details: String,

    #[arg(long = "company", default_value = "")]
    pub company_name: String,

    #[arg(long, default_value = "")]
    pub country: String,

    /// Photo file; its extension decides the stored format.
    #[arg(long, value_name = "PATH")]
    pub photo: Option<PathBuf>,
}

impl RegisterArgs {
    pub fn run(self) -> Result<()> {
        let photo = self.photo.as_deref().map(read_photo).transpose()?;
        let form = VisitorForm {
            name: self.name,
            gender: self.gender,
            email: self.email,
            contact: self.contact,
            host_employee_details: self.host_employee_details,
            company_name: self.company_name,
            country: self.country,
            photo,
        };

        // Reject a bad form before the database is created or opened.
        validate_form(&form, &RegistrationId::generate())?;

        let outcome = super::with_desk(|repo, images| {
            Ok(Registration::new(repo, images).submit(form))
        })?;

        match outcome {
            Ok(visitor) => {
                println!("{} Visitor registered successfully", "✓".green().bold());
                println!("  id:              {}", visitor.id);
                println!("  registration id: {}", visitor.registration_id);
                if let Some(image) = &visitor.image_name {
                    println!("  photo:           {image}");
                }
                Ok(())
            }
            Err(err @ DeskError::DuplicateEmail { .. }) => {
                eprintln!("{} {err}", "!".yellow().bold());
                Err(anyhow!("registration aborted"))
            }
            Err(err) => Err(err.into()),
        }
    }
}

fn read_photo(path: &std::path::Path) -> Result<PhotoUpload> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = PhotoUpload::extension_of(&file_name)
        .ok_or_else(|| anyhow!("photo '{}' has no file extension", path.display()))?
        .to_string();
    let bytes = std::fs::read(path)
        .with_context(|| format!("cannot read photo '{}'", path.display()))?;
    Ok(PhotoUpload::new(bytes, extension))
}
