//! Error types emitted by the sleigh CLI.
//!
//! Keep this error type reasonably small, as the CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use sleigh_core::{AssignmentError, PlanError};
use sleigh_data::DataError;
use sleigh_data::routing::UnknownDistanceMethod;
use thiserror::Error;

/// Errors emitted by the sleigh CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Flag naming the input.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Flag naming the input.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Flag naming the input.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The trip budget is not a positive, finite number of hours.
    #[error("time budget must be a positive number of hours, got {hours} (set --{field} or {env})")]
    InvalidTimeBudget {
        /// Configured hours.
        hours: f64,
        /// Flag naming the option.
        field: &'static str,
        /// Environment variable naming the option.
        env: &'static str,
    },
    /// The depot coordinate lies outside the valid latitude or longitude range.
    #[error("depot ({latitude}, {longitude}) is not a valid coordinate (set {lat_env} and {lon_env})")]
    InvalidDepot {
        /// Configured latitude.
        latitude: f64,
        /// Configured longitude.
        longitude: f64,
        /// Environment variable for the latitude.
        lat_env: &'static str,
        /// Environment variable for the longitude.
        lon_env: &'static str,
    },
    /// The distance method is not one of the supported names.
    #[error(transparent)]
    UnknownDistanceMethod(#[from] UnknownDistanceMethod),
    /// Reading inputs or writing the route file failed.
    #[error(transparent)]
    Data(#[from] DataError),
    /// Assigning gifts to recipients failed.
    #[error("failed to assign gifts: {0}")]
    Assignment(#[from] AssignmentError),
    /// The planner rejected the request.
    #[error("planner failed: {source}")]
    Plan {
        /// Planner failure.
        source: PlanError,
    },
    /// Writing the summary failed.
    #[error("failed to write plan summary: {0}")]
    WriteSummary(#[source] std::io::Error),
}
