//! Command-line surface of the `researchd` binary

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "researchd")]
#[command(about = "Researcher profiles, papers and directory search", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Maintenance command to run (defaults to `init`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Create the database schema and blob root, then report health
    Init,
    /// Insert the demo researchers into an empty database
    Seed,
    /// Print component health as JSON
    Health,
}

impl Cli {
    /// The selected command; no subcommand means `init`.
    pub fn selected(&self) -> Command {
        self.command.unwrap_or(Command::Init)
    }
}
