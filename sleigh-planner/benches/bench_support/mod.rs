//! Benchmark support utilities for the greedy planner.
//!
//! Provides deterministic clustered recipient layouts on the plane used by
//! `PlanarDistance`, so benchmark runs are reproducible.

use geo::Coord;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
use sleigh_core::{AssignedRecipient, Footprint, ItemId, RecipientId};

/// Seed for deterministic random number generation in benchmarks.
pub const BENCHMARK_SEED: u64 = 42;

/// `(id, weight, volume)` of the benchmark catalog; id 0 is the fallback.
pub const ITEMS: &[(u32, f64, f64)] = &[(0, 0.5, 0.5), (1, 2.0, 1.5), (2, 4.0, 3.0), (3, 7.5, 6.0)];

/// Number of cluster centres for the recipient distribution.
const CLUSTER_COUNT: usize = 8;

/// Standard deviation of recipients around a cluster centre (km).
const CLUSTER_SPREAD_KM: f64 = 15.0;

/// Half the side of the square holding cluster centres (km).
const AREA_HALF_KM: f64 = 400.0;

/// Share of recipients eligible for their requested item.
const ELIGIBLE_SHARE: f64 = 0.85;

/// Generate `count` recipients spread around seeded cluster centres.
///
/// Ineligible recipients are assigned the fallback item.
#[must_use]
pub fn generate_clustered_recipients(count: u64, seed: u64) -> Vec<AssignedRecipient> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let Ok(spread) = Normal::new(0.0, CLUSTER_SPREAD_KM) else {
        return Vec::new();
    };

    let centres: Vec<Coord<f64>> = (0..CLUSTER_COUNT)
        .map(|_| Coord {
            x: rng.gen_range(-AREA_HALF_KM..AREA_HALF_KM),
            y: rng.gen_range(-AREA_HALF_KM..AREA_HALF_KM),
        })
        .collect();

    (1..=count)
        .map(|id| {
            let centre = centres
                .get(rng.gen_range(0..CLUSTER_COUNT))
                .copied()
                .unwrap_or_default();

            #[expect(clippy::float_arithmetic, reason = "Required for coordinate offset")]
            let location = Coord {
                x: centre.x + spread.sample(&mut rng),
                y: centre.y + spread.sample(&mut rng),
            };

            let eligible = rng.gen_bool(ELIGIBLE_SHARE);
            let requested = ITEMS
                .get(rng.gen_range(1..ITEMS.len()))
                .copied()
                .unwrap_or((0, 0.5, 0.5));
            let (item, weight, volume) = if eligible {
                requested
            } else {
                ITEMS.first().copied().unwrap_or((0, 0.5, 0.5))
            };

            AssignedRecipient {
                id: RecipientId::new(id),
                location,
                eligible,
                assigned_item: ItemId::new(item),
                footprint: Footprint::new(weight, volume),
            }
        })
        .collect()
}
