//! `frontdesk search <term> [--json]`

use anyhow::Result;
use clap::Args;

use frontdesk_desk::Directory;

/// Arguments for `frontdesk search`.
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Text to look for in visitor names and emails (case-insensitive).
    pub term: String,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

impl SearchArgs {
    pub fn run(self) -> Result<()> {
        let visitors = super::with_desk(|repo, images| {
            Ok(Directory::new(repo, images).search(Some(&self.term))?)
        })?;
        super::print_visitors(
            &visitors,
            self.json,
            &format!("No visitors match '{}'.", self.term),
        )
    }
}
