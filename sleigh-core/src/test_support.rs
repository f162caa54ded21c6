//! Test-only doubles and builders used by unit and behaviour tests.

use std::time::Duration;

use geo::Coord;

use crate::{
    AssignedRecipient, CapacityProfile, Catalog, DistanceProvider, Footprint, Item, ItemId,
    Recipient, RecipientId,
};

/// Deterministic `DistanceProvider` treating coordinates as a plane.
///
/// One coordinate unit equals one kilometre, which keeps expected travel
/// times easy to compute by hand.
#[derive(Default, Debug, Copy, Clone)]
pub struct PlanarDistance;

impl DistanceProvider for PlanarDistance {
    #[expect(
        clippy::float_arithmetic,
        reason = "euclidean distance on plane coordinates"
    )]
    fn distance_km(&self, from: Coord<f64>, to: Coord<f64>) -> f64 {
        (to.x - from.x).hypot(to.y - from.y)
    }
}

/// Build a catalog from `(id, weight, volume)` triples.
///
/// # Panics
///
/// Panics when the triples do not form a valid catalog.
#[must_use]
#[expect(clippy::expect_used, reason = "test builders fail loudly on bad fixtures")]
pub fn catalog_of(items: &[(u32, f64, f64)]) -> Catalog {
    Catalog::new(
        items
            .iter()
            .map(|(id, weight, volume)| Item::new(ItemId::new(*id), *weight, *volume)),
    )
    .expect("test catalog must be valid")
}

/// A capacity profile with the given ceilings, 60 km/h, no stop time and a
/// generous budget.
#[must_use]
pub const fn capacity(max_weight: f64, max_volume: f64) -> CapacityProfile {
    CapacityProfile {
        max_weight,
        max_volume,
        speed_kmh: 60.0,
        stop_duration: Duration::ZERO,
        time_budget: Duration::from_secs(24 * 3600),
    }
}

/// An unassigned recipient at plane position `(x, y)`.
#[must_use]
pub const fn recipient(id: u64, x: f64, y: f64, eligible: bool, item: u32) -> Recipient {
    Recipient::new(
        RecipientId::new(id),
        Coord { x, y },
        eligible,
        ItemId::new(item),
    )
}

/// An eligible recipient already assigned `item` with the given footprint.
#[must_use]
pub const fn assigned(
    id: u64,
    x: f64,
    y: f64,
    item: u32,
    weight: f64,
    volume: f64,
) -> AssignedRecipient {
    AssignedRecipient {
        id: RecipientId::new(id),
        location: Coord { x, y },
        eligible: true,
        assigned_item: ItemId::new(item),
        footprint: Footprint::new(weight, volume),
    }
}
