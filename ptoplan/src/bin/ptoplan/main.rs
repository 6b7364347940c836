mod cli;
mod input;
mod logging;
mod report;

use std::process;

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::Parser;
use tracing::info;

use pto_optimizer::{Planner, PlannerConfig};

use crate::cli::{Cli, Command, OutputFormat, PlanArgs, RequestArgs};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Plan(args) => plan(args),
        Command::Candidates(args) => candidates(args),
    }
}

fn plan(args: PlanArgs) -> Result<()> {
    let planner = build_planner(&args.request)?;
    let year = resolve_year(args.request.year);
    let holidays = input::read_holidays(&args.request.holidays)?;
    info!(year, budget = args.request.budget, holidays = holidays.len(), "planning");

    let plan = planner
        .plan(year, &holidays, args.request.budget)
        .with_context(|| format!("failed to plan {year}"))?;

    match args.format {
        OutputFormat::Text => print!("{}", report::PlanReport::new(year, &plan)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&plan)?),
    }
    Ok(())
}

fn candidates(args: RequestArgs) -> Result<()> {
    let planner = build_planner(&args)?;
    let year = resolve_year(args.year);
    let holidays = input::read_holidays(&args.holidays)?;

    let indexed = planner
        .candidates(year, &holidays, args.budget)
        .with_context(|| format!("failed to generate candidates for {year}"))?;
    let min_len = planner.config().min_desired_length();
    print!("{}", report::CandidateReport::new(&indexed, min_len));
    Ok(())
}

fn build_planner(args: &RequestArgs) -> Result<Planner> {
    let mut config = match &args.config {
        Some(path) => input::read_config(path)?,
        None => PlannerConfig::default(),
    };
    if let Some(min_len) = args.min_length {
        config = config.with_min_desired_length(min_len);
    }
    if let Some(cap) = args.max_pto_per_break {
        config = config.with_max_pto_per_candidate(Some(cap));
    }
    Planner::new(config).context("invalid planner configuration")
}

fn resolve_year(year: Option<u16>) -> u16 {
    year.unwrap_or_else(|| chrono::Local::now().year() as u16)
}
