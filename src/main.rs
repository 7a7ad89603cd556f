//! `hive-range`: print the partition predicate for a date range.

mod cli;
mod config;
mod logging;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use hive_range::CalendarDate;
use tracing::{debug, info};

use crate::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn run(cli: &Cli) -> Result<()> {
    let options = config::resolve(cli)?;

    let start: CalendarDate = cli
        .start
        .parse()
        .with_context(|| format!("invalid start date '{}'", cli.start))?;
    let end: CalendarDate = cli
        .end
        .parse()
        .with_context(|| format!("invalid end date '{}'", cli.end))?;
    debug!(%start, %end, "compiling partition predicate");

    let predicate = hive_range::compile(start, end)?;
    info!(clauses = predicate.clauses().len(), "predicate compiled");

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&predicate)?);
    } else {
        println!("{}", predicate.render(&options));
    }
    Ok(())
}
