//! `GreedyPlanner` implementation.
//!
//! The planner repeatedly drives to the nearest recipient whose item is
//! onboard, returning to the depot to reload whenever nothing onboard can
//! be delivered.

use std::time::{Duration, Instant};

use sleigh_core::{
    BudgetReport, Diagnostics, DistanceProvider, PlanError, PlanRequest, PlanResponse, Planner,
};

mod state;

use state::RouteWalk;

/// Nearest-neighbour planner with capacity-bounded depot reloads.
///
/// The planner is generic over the distance provider so tests can plan on
/// a plane while production runs use geodesic distances.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use geo::Coord;
/// use sleigh_core::test_support::{PlanarDistance, assigned, capacity, catalog_of};
/// use sleigh_core::{PlanRequest, Planner};
/// use sleigh_planner::GreedyPlanner;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let request = PlanRequest {
///     depot: Coord { x: 0.0, y: 0.0 },
///     recipients: vec![assigned(1, 0.0, 30.0, 1, 1.0, 1.0)],
///     catalog: catalog_of(&[(1, 1.0, 1.0)]),
///     capacity: capacity(10.0, 10.0),
/// };
/// let response = GreedyPlanner::new(PlanarDistance).plan(&request)?;
/// assert_eq!(response.route.len(), 3);
/// assert_eq!(response.elapsed(), Duration::from_secs(3600));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct GreedyPlanner<D> {
    distance: D,
}

impl<D> GreedyPlanner<D>
where
    D: DistanceProvider,
{
    /// Construct a planner over `distance`.
    #[must_use]
    pub const fn new(distance: D) -> Self {
        Self { distance }
    }

    /// The distance provider used for every leg.
    #[must_use]
    pub const fn distance(&self) -> &D {
        &self.distance
    }
}

impl<D> Planner for GreedyPlanner<D>
where
    D: DistanceProvider,
{
    #[expect(
        clippy::float_arithmetic,
        reason = "budget overrun is logged in hours"
    )]
    fn plan(&self, request: &PlanRequest) -> Result<PlanResponse, PlanError> {
        request.validate()?;
        let started_at = Instant::now();

        let outcome = RouteWalk::new(request, &self.distance).run();
        let elapsed = Duration::try_from_secs_f64(outcome.elapsed_secs).unwrap_or(Duration::MAX);
        let budget = BudgetReport::assess(elapsed, &request.capacity);
        if let Some(speed) = budget.required_speed_kmh {
            log::warn!(
                "route takes {:.2} h against a budget of {:.2} h; a speed of {speed:.1} km/h would fit",
                elapsed.as_secs_f64() / 3600.0,
                budget.budget.as_secs_f64() / 3600.0
            );
        }

        let diagnostics = Diagnostics {
            plan_time: started_at.elapsed(),
            reloads: outcome.route.reloads().count(),
            deliveries: outcome.route.deliveries().count(),
        };
        log::info!(
            "planned {} deliveries with {} depot returns in {:?}",
            diagnostics.deliveries,
            diagnostics.reloads,
            diagnostics.plan_time
        );

        Ok(PlanResponse {
            route: outcome.route,
            budget,
            warnings: outcome.warnings,
            diagnostics,
        })
    }
}
