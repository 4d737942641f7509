//! Frontdesk: visitor registration from the command line.
//!
//! # Usage
//!
//! ```text
//! frontdesk init
//! frontdesk register --name <N> --gender male|female --email <E> --contact <C>
//!                    --host <H> --company <K> --country <Y> [--photo <PATH>]
//! frontdesk list [--json]
//! frontdesk search <TERM> [--json]
//! frontdesk photo <ID>
//! ```
//!
//! Logs go to stderr; set `RUST_LOG=info` (or `debug`) to see them.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{
    init::InitArgs, list::ListArgs, photo::PhotoArgs, register::RegisterArgs, search::SearchArgs,
};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "frontdesk",
    version,
    about = "Register visitors and browse the visitor directory",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write the default config and create the visitor database.
    Init(InitArgs),

    /// Register a new visitor.
    Register(RegisterArgs),

    /// List every registered visitor.
    List(ListArgs),

    /// Find visitors whose name or email contains a term.
    Search(SearchArgs),

    /// Show where a visitor's photo is stored.
    Photo(PhotoArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Commands::Init(args) => args.run(),
        Commands::Register(args) => args.run(),
        Commands::List(args) => args.run(),
        Commands::Search(args) => args.run(),
        Commands::Photo(args) => args.run(),
    }
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
