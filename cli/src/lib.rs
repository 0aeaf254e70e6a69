//! Content maintenance commands for the portfolio site.

pub mod cli;
pub mod commands;
