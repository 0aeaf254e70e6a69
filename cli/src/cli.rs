use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pf-cli", version, about = "Portfolio content maintenance CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse and validate a portfolio content file.
    Check {
        /// JSON content file path.
        #[arg(long)]
        file: PathBuf,
    },
    /// Print entry counts per section.
    Summary {
        /// JSON content file path (defaults to the content built into the
        /// site).
        #[arg(long)]
        file: Option<PathBuf>,
    },
}
