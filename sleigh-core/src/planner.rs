//! Planner contract: request, response, advisories and errors.

use std::collections::HashSet;
use std::time::Duration;

use geo::Coord;
use thiserror::Error;

use crate::{
    AssignedRecipient, CapacityProfile, CapacityProfileError, Catalog, Footprint, ItemId,
    RecipientId, Route,
};

/// Inputs for planning one route.
///
/// # Examples
/// ```rust
/// use std::time::Duration;
/// use geo::Coord;
/// use sleigh_core::{CapacityProfile, Catalog, Item, ItemId, PlanRequest};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let request = PlanRequest {
///     depot: Coord { x: 0.0, y: 90.0 },
///     recipients: Vec::new(),
///     catalog: Catalog::new([Item::new(ItemId::new(0), 1.0, 1.0)])?,
///     capacity: CapacityProfile {
///         max_weight: 10.0,
///         max_volume: 10.0,
///         speed_kmh: 100.0,
///         stop_duration: Duration::from_secs(60),
///         time_budget: Duration::from_secs(3600),
///     },
/// };
/// assert!(request.validate().is_ok());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PlanRequest {
    /// Start and reload location.
    pub depot: Coord<f64>,
    /// Recipients annotated with their assigned item.
    pub recipients: Vec<AssignedRecipient>,
    /// Item reference data.
    pub catalog: Catalog,
    /// Vehicle limits for the run.
    pub capacity: CapacityProfile,
}

/// Detailed reasons a [`PlanRequest`] is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlanRequestValidationError {
    /// The capacity profile is unusable.
    #[error("invalid capacity profile: {0}")]
    Capacity(#[from] CapacityProfileError),
    /// Two recipients share an id.
    #[error("recipient {0} is listed more than once")]
    DuplicateRecipient(RecipientId),
    /// A recipient's assigned item is missing from the catalog.
    #[error("recipient {recipient} is assigned unknown item {item}")]
    UnknownItem {
        /// Recipient carrying the dangling reference.
        recipient: RecipientId,
        /// The missing item.
        item: ItemId,
    },
    /// A recipient's resolved footprint is negative or not finite.
    #[error("recipient {0} has an invalid footprint")]
    InvalidFootprint(RecipientId),
    /// A recipient's footprint differs from its catalog item's footprint.
    #[error("recipient {0} carries a footprint that differs from its catalog item")]
    FootprintMismatch(RecipientId),
    /// The depot coordinate is not finite.
    #[error("depot coordinate must be finite")]
    InvalidDepot,
}

impl PlanRequest {
    /// Check the request before planning.
    pub fn validate(&self) -> Result<(), PlanRequestValidationError> {
        self.capacity.validate()?;
        if !(self.depot.x.is_finite() && self.depot.y.is_finite()) {
            return Err(PlanRequestValidationError::InvalidDepot);
        }
        let mut seen = HashSet::with_capacity(self.recipients.len());
        for recipient in &self.recipients {
            if !seen.insert(recipient.id) {
                return Err(PlanRequestValidationError::DuplicateRecipient(recipient.id));
            }
            let Some(item) = self.catalog.get(recipient.assigned_item) else {
                return Err(PlanRequestValidationError::UnknownItem {
                    recipient: recipient.id,
                    item: recipient.assigned_item,
                });
            };
            if !recipient.footprint.is_valid() {
                return Err(PlanRequestValidationError::InvalidFootprint(recipient.id));
            }
            if recipient.footprint != item.footprint {
                return Err(PlanRequestValidationError::FootprintMismatch(recipient.id));
            }
        }
        Ok(())
    }
}

/// Non-fatal conditions met while planning.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum PlanWarning {
    /// The recipient's item cannot fit into the empty vehicle; it is never served.
    Undeliverable {
        /// Recipient dropped from the route.
        recipient: RecipientId,
        /// Item that does not fit.
        item: ItemId,
        /// Footprint of that item.
        footprint: Footprint,
    },
}

/// Outcome of the post-run time budget check.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BudgetReport {
    /// Total time spent travelling and serving stops.
    pub elapsed: Duration,
    /// Configured trip budget.
    pub budget: Duration,
    /// Whether `elapsed` exceeds `budget`.
    pub exceeded: bool,
    /// Speed that would have kept the trip within budget, when exceeded.
    pub required_speed_kmh: Option<f64>,
}

impl BudgetReport {
    /// Compare `elapsed` with the profile's budget.
    ///
    /// The advisory speed is `elapsed / budget * speed`.
    ///
    /// # Examples
    /// ```
    /// use std::time::Duration;
    /// use sleigh_core::{BudgetReport, CapacityProfile};
    ///
    /// let profile = CapacityProfile {
    ///     max_weight: 1.0,
    ///     max_volume: 1.0,
    ///     speed_kmh: 100.0,
    ///     stop_duration: Duration::ZERO,
    ///     time_budget: Duration::from_secs(3600),
    /// };
    /// let report = BudgetReport::assess(Duration::from_secs(5400), &profile);
    /// assert!(report.exceeded);
    /// assert_eq!(report.required_speed_kmh, Some(150.0));
    /// ```
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "the advisory speed scales the configured speed by the overrun ratio"
    )]
    pub fn assess(elapsed: Duration, capacity: &CapacityProfile) -> Self {
        let budget = capacity.time_budget;
        let exceeded = elapsed > budget;
        let required_speed_kmh = (exceeded && !budget.is_zero()).then(|| {
            elapsed.as_secs_f64() / budget.as_secs_f64() * capacity.speed_kmh
        });
        Self {
            elapsed,
            budget,
            exceeded,
            required_speed_kmh,
        }
    }
}

/// Counters describing a planning run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostics {
    /// Wall-clock time spent planning.
    pub plan_time: Duration,
    /// Reload events appended, including the closing depot return.
    pub reloads: usize,
    /// Delivery events appended.
    pub deliveries: usize,
}

/// Result of a successful planning run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanResponse {
    /// Ordered delivery and reload events.
    pub route: Route,
    /// Time budget assessment; `budget.elapsed` is the total trip time.
    pub budget: BudgetReport,
    /// Non-fatal conditions, in the order they were met.
    pub warnings: Vec<PlanWarning>,
    /// Run counters.
    pub diagnostics: Diagnostics,
}

impl PlanResponse {
    /// Total trip time.
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.budget.elapsed
    }
}

/// Errors returned by [`Planner::plan`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// The request failed validation.
    #[error("invalid plan request: {0}")]
    InvalidRequest(#[from] PlanRequestValidationError),
}

/// Produce a delivery route for a request.
///
/// Planning itself never fails once the request is valid: unfulfillable
/// recipients and budget overruns are reported in the response.
/// Planners must be `Send + Sync` to operate safely across threads.
pub trait Planner: Send + Sync {
    /// Plan a route for `request`.
    fn plan(&self, request: &PlanRequest) -> Result<PlanResponse, PlanError>;
}
