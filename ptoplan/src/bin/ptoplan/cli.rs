use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Plan PTO around public holidays and weekends.
#[derive(Parser)]
#[command(
    name = "ptoplan",
    version,
    about = "Spend a PTO budget where it buys the longest breaks"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Compute the optimal set of breaks.
    Plan(PlanArgs),
    /// List the generated break candidates.
    Candidates(RequestArgs),
}

/// Inputs shared by every subcommand.
#[derive(clap::Args)]
pub struct RequestArgs {
    /// JSON file with the year's holidays (`[{"date", "name", "type"}]`).
    #[arg(long = "holidays", short = 'H')]
    pub holidays: PathBuf,

    /// Planning year (defaults to the current year).
    #[arg(short, long)]
    pub year: Option<u16>,

    /// PTO days available for the year.
    #[arg(short, long, default_value_t = 10, allow_negative_numbers = true)]
    pub budget: i32,

    /// Optional TOML planner configuration.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the minimum desired break length.
    #[arg(long = "min-length")]
    pub min_length: Option<u32>,

    /// Override the PTO cap for a single break.
    #[arg(long = "max-pto-per-break")]
    pub max_pto_per_break: Option<u32>,
}

/// Arguments for the `plan` subcommand.
#[derive(clap::Args)]
pub struct PlanArgs {
    /// Planning inputs.
    #[command(flatten)]
    pub request: RequestArgs,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// How `plan` prints its result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary.
    Text,
    /// The plan serialized as JSON.
    Json,
}
