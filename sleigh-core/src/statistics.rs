//! Aggregate figures for a planned route.
//!
//! Statistics replay a finished [`Route`] read-only: every reload event is a
//! leg back to the depot, every delivery a leg to the recipient.

use std::collections::HashMap;
use std::time::Duration;

use geo::Coord;

use crate::{AssignedRecipient, CapacityProfile, DistanceProvider, RecipientId, Route, RouteEvent};

/// Totals derived from replaying a route.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteStatistics {
    /// Distance travelled, including every depot return.
    pub total_distance_km: f64,
    /// Delivery events.
    pub stops: usize,
    /// Reloads that put cargo onboard.
    pub refills: usize,
    /// Deliveries to eligible recipients.
    pub eligible_deliveries: usize,
    /// Deliveries of the fallback item to ineligible recipients.
    pub fallback_deliveries: usize,
    /// Travel time plus per-stop service time.
    pub total_time: Duration,
    /// Whether `total_time` stays within the profile's budget.
    pub within_budget: bool,
}

impl RouteStatistics {
    /// Replay `route` from `depot` and total its distance, stops and time.
    ///
    /// Deliveries to recipients missing from `recipients` are counted as
    /// stops but add no distance.
    #[expect(
        clippy::float_arithmetic,
        reason = "distance and time totals are floating-point accumulations"
    )]
    pub fn compute<D>(
        route: &Route,
        depot: Coord<f64>,
        recipients: &[AssignedRecipient],
        distance: &D,
        capacity: &CapacityProfile,
    ) -> Self
    where
        D: DistanceProvider + ?Sized,
    {
        let by_id: HashMap<RecipientId, &AssignedRecipient> = recipients
            .iter()
            .map(|recipient| (recipient.id, recipient))
            .collect();

        let mut position = depot;
        let mut stats = Self {
            total_distance_km: 0.0,
            stops: 0,
            refills: 0,
            eligible_deliveries: 0,
            fallback_deliveries: 0,
            total_time: Duration::ZERO,
            within_budget: true,
        };

        for event in route.events() {
            match event {
                RouteEvent::Reload { manifest } => {
                    stats.total_distance_km += distance.distance_km(position, depot);
                    position = depot;
                    if !manifest.is_empty() {
                        stats.refills += 1;
                    }
                }
                RouteEvent::Delivery { recipient, .. } => {
                    stats.stops += 1;
                    let Some(target) = by_id.get(recipient) else {
                        log::warn!("recipient {recipient} is not part of the request");
                        continue;
                    };
                    stats.total_distance_km += distance.distance_km(position, target.location);
                    position = target.location;
                    if target.eligible {
                        stats.eligible_deliveries += 1;
                    } else {
                        stats.fallback_deliveries += 1;
                    }
                }
            }
        }

        let travel_hours = stats.total_distance_km / capacity.speed_kmh;
        let travel = Duration::try_from_secs_f64(travel_hours * 3600.0).unwrap_or(Duration::MAX);
        let stop_time = capacity
            .stop_duration
            .saturating_mul(u32::try_from(stats.stops).unwrap_or(u32::MAX));
        stats.total_time = travel.saturating_add(stop_time);
        stats.within_budget = stats.total_time <= capacity.time_budget;
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{PlanarDistance, capacity};
    use crate::{CargoManifest, Footprint, ItemId};
    use rstest::rstest;

    fn recipient(id: u64, x: f64, eligible: bool) -> AssignedRecipient {
        AssignedRecipient {
            id: RecipientId::new(id),
            location: Coord { x, y: 0.0 },
            eligible,
            assigned_item: ItemId::new(u32::from(eligible)),
            footprint: Footprint::new(1.0, 1.0),
        }
    }

    #[rstest]
    fn replays_legs_and_tallies() {
        let recipients = vec![recipient(1, 3.0, true), recipient(2, 6.0, false)];
        let mut route = Route::new();
        route.push_reload([(ItemId::new(1), 1), (ItemId::new(0), 1)].into_iter().collect());
        route.push_delivery(RecipientId::new(1), ItemId::new(1));
        route.push_delivery(RecipientId::new(2), ItemId::new(0));
        route.push_reload(CargoManifest::new());

        let mut profile = capacity(10.0, 10.0);
        profile.stop_duration = Duration::from_secs(60);
        let stats = RouteStatistics::compute(
            &route,
            Coord { x: 0.0, y: 0.0 },
            &recipients,
            &PlanarDistance,
            &profile,
        );

        assert!((stats.total_distance_km - 12.0).abs() < 1e-9);
        assert_eq!(stats.stops, 2);
        assert_eq!(stats.refills, 1);
        assert_eq!(stats.eligible_deliveries, 1);
        assert_eq!(stats.fallback_deliveries, 1);
        // 12 km at 60 km/h plus two one-minute stops.
        assert_eq!(stats.total_time.as_secs(), 12 * 60 + 120);
        assert!(stats.within_budget);
    }

    #[rstest]
    fn empty_route_is_zero() {
        let stats = RouteStatistics::compute(
            &Route::new(),
            Coord { x: 0.0, y: 0.0 },
            &[],
            &PlanarDistance,
            &capacity(1.0, 1.0),
        );
        assert_eq!(stats.total_distance_km, 0.0);
        assert_eq!(stats.total_time, Duration::ZERO);
        assert!(stats.within_budget);
    }
}
