use std::{fmt::Write as _, path::Path};

use anyhow::Result;
use portfolio_shared::Catalog;

use super::load_catalog;

pub fn run(file: Option<&Path>) -> Result<()> {
    let catalog = match file {
        Some(path) => load_catalog(path)??,
        None => Catalog::builtin()?,
    };
    print!("{}", render(&catalog));
    Ok(())
}

/// Human readable overview of a catalog, one section per line.
pub fn render(catalog: &Catalog) -> String {
    let awarded = catalog
        .projects
        .iter()
        .filter(|project| project.has_award())
        .count();
    let media: usize = catalog
        .projects
        .iter()
        .map(|project| project.detail.media.len())
        .sum();

    let mut out = String::new();
    let _ = writeln!(out, "{}: {}", catalog.profile.name, catalog.profile.headline);
    let _ = writeln!(
        out,
        "projects:   {} ({awarded} awarded, {media} media items)",
        catalog.projects.len()
    );
    let _ = writeln!(out, "skills:     {}", catalog.skills.len());
    let _ = writeln!(out, "experience: {}", catalog.experience.len());
    let _ = writeln!(out, "awards:     {}", catalog.awards.len());
    let _ = writeln!(out, "contacts:   {}", catalog.contacts.len());
    out
}
