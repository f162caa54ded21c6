//! Core domain types for the sleigh route planner.
//!
//! The crate models a single vehicle delivering one item to each recipient
//! from a fixed depot. It owns the reference data (catalog and capacity
//! profile), the per-recipient gift assignment, the cargo manifest and the
//! route event log, together with the seams the planner plugs into:
//! [`DistanceProvider`] and [`Planner`].
//!
//! Constructors and validators return `Result` so malformed reference data is
//! rejected before planning starts.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod assignment;
pub mod capacity;
pub mod distance;
pub mod item;
pub mod manifest;
pub mod planner;
pub mod recipient;
pub mod route;
pub mod statistics;

#[cfg(any(test, feature = "test-support"))]
#[doc(hidden)]
pub mod test_support;

pub use assignment::{AssignmentError, AssignmentResolver};
pub use capacity::{CapacityProfile, CapacityProfileError};
pub use distance::DistanceProvider;
pub use item::{Catalog, CatalogError, Footprint, Item, ItemId};
pub use manifest::{CargoManifest, ManifestError};
pub use planner::{
    BudgetReport, Diagnostics, PlanError, PlanRequest, PlanRequestValidationError, PlanResponse,
    PlanWarning, Planner,
};
pub use recipient::{AssignedRecipient, Recipient, RecipientId};
pub use route::{Route, RouteEvent};
pub use statistics::RouteStatistics;
