use std::path::Path;

use anyhow::{bail, Result};
use portfolio_shared::{ContentError, ContentProblem};

use super::load_catalog;

pub fn run(file: &Path) -> Result<()> {
    let problems = check_file(file)?;
    if problems.is_empty() {
        tracing::info!("{} is valid", file.display());
        return Ok(());
    }

    for problem in &problems {
        println!("  - {problem}");
    }
    bail!("{} has {} problem(s)", file.display(), problems.len())
}

/// Collect every problem in a content file as printable lines.
///
/// An unreadable file is an error. Malformed JSON becomes a single problem
/// line so it prints the same way as rule violations.
pub fn check_file(file: &Path) -> Result<Vec<String>> {
    match load_catalog(file)? {
        Ok(_) => Ok(Vec::new()),
        Err(ContentError::Parse(err)) => Ok(vec![format!("invalid JSON: {err}")]),
        Err(ContentError::Invalid {
            problems,
        }) => Ok(problems.iter().map(ContentProblem::to_string).collect()),
    }
}
