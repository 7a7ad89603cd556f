//! Render options for the binary: TOML file first, then command-line overrides.
//!
//! ```toml
//! layout = "single_line"
//!
//! [columns]
//! year = "yr"
//! day = "days"
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use hive_range::{Layout, RenderOptions};
use tracing::debug;

use crate::cli::Cli;

pub fn resolve(cli: &Cli) -> Result<RenderOptions> {
    let mut options = match &cli.config {
        Some(path) => load(path)?,
        None => RenderOptions::default(),
    };

    if cli.single_line {
        options.layout = Layout::SingleLine;
    }
    if let Some(name) = &cli.year_column {
        options.columns.year.clone_from(name);
    }
    if let Some(name) = &cli.month_column {
        options.columns.month.clone_from(name);
    }
    if let Some(name) = &cli.day_column {
        options.columns.day.clone_from(name);
    }
    Ok(options)
}

fn load(path: &Path) -> Result<RenderOptions> {
    debug!(path = %path.display(), "loading render options");
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("failed to parse config {}", path.display()))
}
