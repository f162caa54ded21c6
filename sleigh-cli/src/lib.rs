//! Command-line interface for the sleigh route planner.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod plan;
mod report;

pub use error::CliError;
use plan::{PlanArgs, run_plan};

pub(crate) const ARG_RECIPIENTS: &str = "recipients";
pub(crate) const ARG_ARTICLES: &str = "articles";
pub(crate) const ARG_SLEIGH_SPECS: &str = "sleigh-specs";
pub(crate) const ARG_OUTPUT: &str = "output";
pub(crate) const ARG_TIME_BUDGET_HOURS: &str = "time-budget-hours";
pub(crate) const ARG_FALLBACK_ITEM: &str = "fallback-item";
pub(crate) const ARG_DEPOT_LATITUDE: &str = "depot-latitude";
pub(crate) const ARG_DEPOT_LONGITUDE: &str = "depot-longitude";
pub(crate) const ARG_DISTANCE_METHOD: &str = "distance-method";
pub(crate) const ENV_TIME_BUDGET_HOURS: &str = "SLEIGH_CMDS_PLAN_TIME_BUDGET_HOURS";
pub(crate) const ENV_DEPOT_LATITUDE: &str = "SLEIGH_CMDS_PLAN_DEPOT_LATITUDE";
pub(crate) const ENV_DEPOT_LONGITUDE: &str = "SLEIGH_CMDS_PLAN_DEPOT_LONGITUDE";

/// Run the sleigh CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns [`CliError`] when argument parsing, configuration, loading,
/// planning or writing the route fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Plan(args) => run_plan(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "sleigh",
    about = "Plan a single-vehicle delivery route with depot reloads",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Plan a route from recipient, article and sleigh files and export it.
    Plan(PlanArgs),
}

#[cfg(test)]
mod tests;
