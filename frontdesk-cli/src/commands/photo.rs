//! `frontdesk photo <id>`

use anyhow::{anyhow, Result};
use clap::Args;

use frontdesk_core::VisitorId;
use frontdesk_desk::{Directory, Photo};

/// Arguments for `frontdesk photo`.
#[derive(Args, Debug)]
pub struct PhotoArgs {
    /// Visitor id, as shown by `frontdesk list`.
    pub id: i64,
}

impl PhotoArgs {
    pub fn run(self) -> Result<()> {
        let photo = super::with_desk(|repo, images| {
            let directory = Directory::new(repo, images);
            let visitor = directory
                .select(VisitorId(self.id))?
                .ok_or_else(|| anyhow!("no visitor with id {}", self.id))?;
            Ok(directory.photo(&visitor)?)
        })?;

        match photo {
            Photo::Attached(path) => println!("{}", path.display()),
            Photo::NoneAttached => println!("No image attached."),
        }
        Ok(())
    }
}
