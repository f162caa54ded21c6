//! Data access for the sleigh route planner.
//!
//! Responsibilities:
//! - Load recipients, the item catalog and the vehicle specification from
//!   semicolon-separated files with decimal commas.
//! - Export planned routes in the same dialect.
//! - Provide geographic [`DistanceProvider`](sleigh_core::DistanceProvider)
//!   implementations.
//!
//! Boundaries:
//! - Do not encode planning rules (they live in `sleigh-core` and
//!   `sleigh-planner`).
//! - File access goes through `cap-std` with UTF-8 `camino` paths.

#![forbid(unsafe_code)]

mod error;
mod export;
pub mod fs;
mod ingest;
pub mod routing;

pub use error::DataError;
pub use export::{ExportSummary, write_route, write_route_to};
pub use ingest::{SleighSpecs, load_catalog, load_recipients, load_sleigh_specs};
