//! Plan command implementation for the sleigh CLI.

use std::io::Write;
use std::time::Duration;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use geo::Coord;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use sleigh_core::{
    AssignmentResolver, ItemId, PlanRequest, PlanResponse, Planner, RouteStatistics,
};
use sleigh_data::routing::DistanceMethod;
use sleigh_data::{
    ExportSummary, SleighSpecs, load_catalog, load_recipients, load_sleigh_specs, write_route,
};
use sleigh_planner::GreedyPlanner;

use crate::report::write_summary;
use crate::{
    ARG_ARTICLES, ARG_DEPOT_LATITUDE, ARG_DEPOT_LONGITUDE, ARG_DISTANCE_METHOD, ARG_FALLBACK_ITEM,
    ARG_OUTPUT, ARG_RECIPIENTS, ARG_SLEIGH_SPECS, ARG_TIME_BUDGET_HOURS, CliError,
    ENV_DEPOT_LATITUDE, ENV_DEPOT_LONGITUDE, ENV_TIME_BUDGET_HOURS,
};

const DEFAULT_RECIPIENTS: &str = "sample_data/sample_input.csv";
const DEFAULT_ARTICLES: &str = "sample_data/articles.csv";
const DEFAULT_SLEIGH_SPECS: &str = "sample_data/sleigh_specs.csv";
const DEFAULT_OUTPUT: &str = "output/route.csv";
const DEFAULT_TIME_BUDGET_HOURS: f64 = 7.0;
const DEFAULT_FALLBACK_ITEM: u32 = 0;
const DEFAULT_DEPOT_LATITUDE: f64 = 90.0;
const DEFAULT_DEPOT_LONGITUDE: f64 = 0.0;

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "plan",
    long_about = "Plan a delivery route for every recipient in the input \
                 file, reloading at the depot whenever nothing onboard can \
                 be delivered. Paths and parameters can come from CLI flags, \
                 configuration files, or environment variables.",
    about = "Plan and export a delivery route"
)]
#[ortho_config(prefix = "SLEIGH")]
pub(crate) struct PlanArgs {
    /// Recipients file (`child;latitude;longitude;wish;naughty`).
    #[arg(long = ARG_RECIPIENTS, value_name = "path")]
    #[serde(default)]
    pub(crate) recipients: Option<Utf8PathBuf>,
    /// Articles file (`article;weight;volume`).
    #[arg(long = ARG_ARTICLES, value_name = "path")]
    #[serde(default)]
    pub(crate) articles: Option<Utf8PathBuf>,
    /// Sleigh specification file (`meta data;value`).
    #[arg(long = ARG_SLEIGH_SPECS, value_name = "path")]
    #[serde(default)]
    pub(crate) sleigh_specs: Option<Utf8PathBuf>,
    /// Destination of the route CSV; parent directories are created.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
    /// Trip time budget in hours.
    #[arg(long = ARG_TIME_BUDGET_HOURS, value_name = "hours")]
    #[serde(default)]
    pub(crate) time_budget_hours: Option<f64>,
    /// Item given to ineligible recipients.
    #[arg(long = ARG_FALLBACK_ITEM, value_name = "id")]
    #[serde(default)]
    pub(crate) fallback_item: Option<u32>,
    /// Depot latitude in degrees.
    #[arg(long = ARG_DEPOT_LATITUDE, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) depot_latitude: Option<f64>,
    /// Depot longitude in degrees.
    #[arg(long = ARG_DEPOT_LONGITUDE, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) depot_longitude: Option<f64>,
    /// Distance measure: `geodesic` or `haversine`.
    #[arg(long = ARG_DISTANCE_METHOD, value_name = "method")]
    #[serde(default)]
    pub(crate) distance_method: Option<String>,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PlanConfig {
    /// Recipients file.
    pub(crate) recipients: Utf8PathBuf,
    /// Articles file.
    pub(crate) articles: Utf8PathBuf,
    /// Sleigh specification file.
    pub(crate) sleigh_specs: Utf8PathBuf,
    /// Route CSV destination.
    pub(crate) output: Utf8PathBuf,
    /// Trip time budget.
    pub(crate) time_budget: Duration,
    /// Item given to ineligible recipients.
    pub(crate) fallback_item: ItemId,
    /// Depot position (`x = longitude`, `y = latitude`).
    pub(crate) depot: Coord<f64>,
    /// Distance measure for every leg.
    pub(crate) distance_method: DistanceMethod,
}

impl PlanConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.recipients, ARG_RECIPIENTS)?;
        Self::require_existing(&self.articles, ARG_ARTICLES)?;
        Self::require_existing(&self.sleigh_specs, ARG_SLEIGH_SPECS)?;
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match sleigh_data::fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let hours = args.time_budget_hours.unwrap_or(DEFAULT_TIME_BUDGET_HOURS);
        let time_budget = budget_from_hours(hours).ok_or(CliError::InvalidTimeBudget {
            hours,
            field: ARG_TIME_BUDGET_HOURS,
            env: ENV_TIME_BUDGET_HOURS,
        })?;

        let latitude = args.depot_latitude.unwrap_or(DEFAULT_DEPOT_LATITUDE);
        let longitude = args.depot_longitude.unwrap_or(DEFAULT_DEPOT_LONGITUDE);
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(CliError::InvalidDepot {
                latitude,
                longitude,
                lat_env: ENV_DEPOT_LATITUDE,
                lon_env: ENV_DEPOT_LONGITUDE,
            });
        }

        let distance_method = args
            .distance_method
            .as_deref()
            .map(str::parse::<DistanceMethod>)
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            recipients: args
                .recipients
                .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_RECIPIENTS)),
            articles: args
                .articles
                .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_ARTICLES)),
            sleigh_specs: args
                .sleigh_specs
                .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_SLEIGH_SPECS)),
            output: args
                .output
                .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_OUTPUT)),
            time_budget,
            fallback_item: ItemId::new(args.fallback_item.unwrap_or(DEFAULT_FALLBACK_ITEM)),
            depot: Coord {
                x: longitude,
                y: latitude,
            },
            distance_method,
        })
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "the budget is configured in fractional hours"
)]
fn budget_from_hours(hours: f64) -> Option<Duration> {
    if !(hours.is_finite() && hours > 0.0) {
        return None;
    }
    Duration::try_from_secs_f64(hours * 3600.0).ok()
}

/// Everything the summary reports about one planning run.
#[derive(Debug)]
pub(crate) struct PlanOutcome {
    /// Vehicle figures read from the specification file.
    pub(crate) specs: SleighSpecs,
    /// Configured trip budget.
    pub(crate) time_budget: Duration,
    /// Recipients read from the input file.
    pub(crate) recipients: usize,
    /// Route CSV destination.
    pub(crate) output: Utf8PathBuf,
    /// Rows written to the route CSV.
    pub(crate) export: ExportSummary,
    /// Planner result.
    pub(crate) response: PlanResponse,
    /// Figures from replaying the route.
    pub(crate) statistics: RouteStatistics,
}

pub(super) fn run_plan(args: PlanArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_plan_with(args, &mut stdout)
}

pub(super) fn run_plan_with(args: PlanArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_plan_config(args)?;
    let outcome = execute_plan(&config)?;
    write_summary(writer, &outcome).map_err(CliError::WriteSummary)
}

fn resolve_plan_config(args: PlanArgs) -> Result<PlanConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

pub(super) fn execute_plan(config: &PlanConfig) -> Result<PlanOutcome, CliError> {
    let specs = load_sleigh_specs(&config.sleigh_specs)?;
    let catalog = load_catalog(&config.articles)?;
    let recipients = load_recipients(&config.recipients)?;
    let assigned = AssignmentResolver::new(config.fallback_item).resolve(&recipients, &catalog)?;
    log::info!(
        "planning {} recipients from {} using {} distances",
        assigned.len(),
        config.recipients,
        config.distance_method
    );

    let request = PlanRequest {
        depot: config.depot,
        recipients: assigned,
        catalog,
        capacity: specs.capacity_profile(config.time_budget),
    };
    let planner = GreedyPlanner::new(config.distance_method);
    let response = planner
        .plan(&request)
        .map_err(|source| CliError::Plan { source })?;

    let export = write_route(&config.output, &response.route)?;
    let statistics = RouteStatistics::compute(
        &response.route,
        request.depot,
        &request.recipients,
        planner.distance(),
        &request.capacity,
    );

    Ok(PlanOutcome {
        specs,
        time_budget: config.time_budget,
        recipients: recipients.len(),
        output: config.output.clone(),
        export,
        response,
        statistics,
    })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PlanConfig, CliError> {
    let merged = PlanArgs::merge_from_layers(layers).map_err(CliError::from)?;
    PlanConfig::try_from(merged)
}
