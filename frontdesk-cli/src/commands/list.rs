//! `frontdesk list [--json]`

use anyhow::Result;
use clap::Args;

use frontdesk_desk::Directory;

/// Arguments for `frontdesk list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

impl ListArgs {
    pub fn run(self) -> Result<()> {
        let visitors = super::with_desk(|repo, images| Ok(Directory::new(repo, images).list()?))?;
        super::print_visitors(&visitors, self.json, "No visitors registered.")
    }
}
