//! Command-line interface for the Roteiro itinerary engine.
//!
//! `roteiro plan` reads a JSON catalogue of points of interest and
//! restaurants, plans the trip between two dates and prints the itinerary
//! as JSON. `roteiro destinations` lists the built-in curated itineraries
//! and pool overrides.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod destinations;
mod error;
mod plan;

pub use error::CliError;

use destinations::run_destinations;
use plan::{PlanArgs, run_plan};

pub(crate) const ARG_PLAN_CATALOGUE: &str = "catalogue";
pub(crate) const ARG_PLAN_START_DATE: &str = "start-date";
pub(crate) const ARG_PLAN_END_DATE: &str = "end-date";
pub(crate) const ARG_PLAN_SEED: &str = "seed";
pub(crate) const ENV_PLAN_CATALOGUE: &str = "ROTEIRO_CMDS_PLAN_CATALOGUE";

/// Run the Roteiro CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns [`CliError`] when argument parsing, configuration loading,
/// catalogue decoding or output writing fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Plan(args) => run_plan(args),
        Command::Destinations => run_destinations(),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "roteiro",
    about = "Plan day-by-day travel itineraries from POI and restaurant catalogues",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Plan an itinerary from a catalogue and a date range.
    Plan(PlanArgs),
    /// List the built-in curated itineraries and pool overrides.
    Destinations,
}

#[cfg(test)]
mod tests;
