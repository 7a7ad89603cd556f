use std::path::PathBuf;

use clap::Parser;

/// Compile a calendar date range into a year/month/day partition predicate.
#[derive(Parser)]
#[command(name = "hive-range", version, about)]
pub struct Cli {
    /// First day of the range (M/D/YYYY or YYYY-MM-DD).
    pub start: String,

    /// Last day of the range, inclusive.
    pub end: String,

    /// Print the clauses as JSON instead of a WHERE fragment.
    #[arg(long)]
    pub json: bool,

    /// Join clauses on one line.
    #[arg(long)]
    pub single_line: bool,

    /// TOML file with render options (`layout`, `[columns]`).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the year partition column name.
    #[arg(long)]
    pub year_column: Option<String>,

    /// Override the month partition column name.
    #[arg(long)]
    pub month_column: Option<String>,

    /// Override the day partition column name.
    #[arg(long)]
    pub day_column: Option<String>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
