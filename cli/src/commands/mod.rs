pub mod check;
pub mod summary;

use std::path::Path;

use anyhow::{Context, Result};
use portfolio_shared::{Catalog, ContentError};

use crate::cli::{Cli, Commands};

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Check {
            file,
        } => check::run(&file),
        Commands::Summary {
            file,
        } => summary::run(file.as_deref()),
    }
}

/// Read a content file and run it through the catalog rules.
///
/// The outer error is I/O; the inner result carries parse and rule failures.
pub fn load_catalog(path: &Path) -> Result<Result<Catalog, ContentError>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read content file {}", path.display()))?;
    Ok(Catalog::from_json(&raw))
}
