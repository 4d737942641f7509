//! `frontdesk init`

use anyhow::{Context, Result};
use clap::Args;

use frontdesk_core::config;

/// Write the default config (if none exists) and create the database.
#[derive(Args, Debug)]
pub struct InitArgs {}

impl InitArgs {
    pub fn run(self) -> Result<()> {
        let home = super::home()?;

        let config_path = config::config_path_at(&home);
        let cfg = config::load_at(&home).context("failed to load frontdesk config")?;
        if config_path.exists() {
            println!("✓ Using existing config: {}", config_path.display());
        } else {
            let written = config::save_at(&home, &cfg).context("failed to write frontdesk config")?;
            println!("✓ Wrote config: {}", written.display());
        }

        drop(frontdesk_store::open_at(&cfg.database).with_context(|| {
            format!("failed to create visitor database at {}", cfg.database.display())
        })?);
        println!("✓ Visitor database: {}", cfg.database.display());

        std::fs::create_dir_all(&cfg.images_dir).with_context(|| {
            format!("failed to create images directory {}", cfg.images_dir.display())
        })?;
        println!("✓ Images directory: {}", cfg.images_dir.display());
        Ok(())
    }
}
