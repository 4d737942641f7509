//! Subcommands and the helpers they share.

pub mod init;
pub mod list;
pub mod photo;
pub mod register;
pub mod search;

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use frontdesk_core::{config, Visitor};
use frontdesk_media::ImageStore;
use frontdesk_store::SqliteVisitorRepository;

pub(crate) fn home() -> Result<PathBuf> {
    dirs::home_dir().context("could not determine home directory")
}

/// Open the configured database and photo store for the duration of `f`.
///
/// The connection is closed when this returns, whatever `f` did.
pub(crate) fn with_desk<T>(
    f: impl FnOnce(&SqliteVisitorRepository<'_>, &ImageStore) -> Result<T>,
) -> Result<T> {
    let home = home()?;
    let config = config::load_at(&home).context("failed to load frontdesk config")?;
    let conn = frontdesk_store::open_at(&config.database).with_context(|| {
        format!(
            "failed to open visitor database at {}",
            config.database.display()
        )
    })?;
    tracing::debug!(
        database = %config.database.display(),
        images = %config.images_dir.display(),
        "opened desk"
    );
    let repo = SqliteVisitorRepository::new(&conn);
    let images = ImageStore::new(&config.images_dir, config.photo_envelope);
    f(&repo, &images)
}

// ---------------------------------------------------------------------------
// Visitor output
// ---------------------------------------------------------------------------

#[derive(Tabled)]
struct VisitorTableRow {
    #[tabled(rename = "id")]
    id: i64,
    #[tabled(rename = "name")]
    name: String,
    #[tabled(rename = "gender")]
    gender: String,
    #[tabled(rename = "email")]
    email: String,
    #[tabled(rename = "contact")]
    contact: String,
    #[tabled(rename = "host employee")]
    host: String,
    #[tabled(rename = "company")]
    company: String,
    #[tabled(rename = "country")]
    country: String,
    #[tabled(rename = "registration id")]
    registration_id: String,
    #[tabled(rename = "image")]
    image: String,
}

impl From<&Visitor> for VisitorTableRow {
    fn from(v: &Visitor) -> Self {
        Self {
            id: v.id.0,
            name: v.name.clone(),
            gender: v.gender.to_string(),
            email: v.email.clone(),
            contact: v.contact.clone(),
            host: v.host_employee_details.clone(),
            company: v.company_name.clone(),
            country: v.country.clone(),
            registration_id: v.registration_id.to_string(),
            image: v.image_name.clone().unwrap_or_else(|| "-".to_string()),
        }
    }
}

#[derive(Serialize)]
struct VisitorsJson<'a> {
    count: usize,
    visitors: &'a [Visitor],
}

/// Print visitors as a table, or as JSON when `json` is set.
pub(crate) fn print_visitors(visitors: &[Visitor], json: bool, empty_message: &str) -> Result<()> {
    if json {
        let payload = VisitorsJson {
            count: visitors.len(),
            visitors,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&payload).context("failed to serialize visitors JSON")?
        );
        return Ok(());
    }

    if visitors.is_empty() {
        println!("{empty_message}");
        return Ok(());
    }

    let rows: Vec<VisitorTableRow> = visitors.iter().map(VisitorTableRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");
    println!("{} visitor(s)", visitors.len());
    Ok(())
}
