//! Facade crate for the sleigh route planner.
//!
//! This crate re-exports the core domain types and exposes the greedy planner
//! and the file collaborators behind feature flags.

#![forbid(unsafe_code)]

pub use sleigh_core::{
    AssignedRecipient, AssignmentError, AssignmentResolver, BudgetReport, CapacityProfile,
    CapacityProfileError, CargoManifest, Catalog, CatalogError, Diagnostics, DistanceProvider,
    Footprint, Item, ItemId, ManifestError, PlanError, PlanRequest, PlanRequestValidationError,
    PlanResponse, PlanWarning, Planner, Recipient, RecipientId, Route, RouteEvent,
    RouteStatistics,
};

#[cfg(feature = "planner-greedy")]
pub use sleigh_planner::{CapacityLoader, GreedyPlanner};

#[cfg(feature = "data")]
pub use sleigh_data::routing::{DistanceMethod, GeodesicDistance, HaversineDistance};
#[cfg(feature = "data")]
pub use sleigh_data::{
    DataError, ExportSummary, SleighSpecs, load_catalog, load_recipients, load_sleigh_specs,
    write_route,
};
