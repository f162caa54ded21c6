//! Capacity-constrained reload planning.
//!
//! At every depot visit the loader tallies the outstanding demand per item
//! and fills the empty vehicle greedily in ascending item-id order. Each item
//! takes as many units as demand and the remaining weight and volume allow.
//! Items that do not fit are left out of the manifest entirely.

use std::collections::BTreeMap;

use sleigh_core::{
    AssignedRecipient, CapacityProfile, CargoManifest, Catalog, Footprint, ItemId,
};

/// Greedy bin-fill over the empty vehicle.
///
/// The loader is deterministic: the same unserved set always yields the same
/// manifest, whatever order the recipients arrive in.
#[derive(Debug, Clone, Copy)]
pub struct CapacityLoader<'a> {
    catalog: &'a Catalog,
    capacity: &'a CapacityProfile,
}

impl<'a> CapacityLoader<'a> {
    /// Create a loader for the given reference data.
    #[must_use]
    pub const fn new(catalog: &'a Catalog, capacity: &'a CapacityProfile) -> Self {
        Self { catalog, capacity }
    }

    /// Decide how many units of each needed item to load.
    ///
    /// The returned manifest never exceeds the weight or volume ceiling. It
    /// may hold fewer units than demanded; the rest waits for a later reload.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "remaining capacity is tracked in floating-point weight and volume"
    )]
    pub fn load<'r, I>(&self, unserved: I) -> CargoManifest
    where
        I: IntoIterator<Item = &'r AssignedRecipient>,
    {
        let demand = tally_demand(unserved);
        let mut loaded = Footprint::default();
        let mut manifest = CargoManifest::new();

        for (item_id, needed) in demand {
            let Some(item) = self.catalog.get(item_id) else {
                log::warn!("item {item_id} is missing from the catalog; skipping reload");
                debug_assert!(false, "item {item_id} missing from catalog");
                continue;
            };
            let unit = item.footprint;
            let remaining_weight = self.capacity.max_weight - loaded.weight;
            let remaining_volume = self.capacity.max_volume - loaded.volume;
            let mut units = needed
                .min(units_within(remaining_weight, unit.weight, needed))
                .min(units_within(remaining_volume, unit.volume, needed));
            // The floored ratio can overshoot the ceiling by one ulp once multiplied back.
            while units > 0 && !self.capacity.admits(&with_units(loaded, unit, units)) {
                units = units.saturating_sub(1);
            }
            if units == 0 {
                continue;
            }
            loaded = with_units(loaded, unit, units);
            manifest.add(item_id, units);
        }

        log::debug!(
            "planned reload of {} units across {} items",
            manifest.total_units(),
            manifest.len()
        );
        manifest
    }
}

/// Count outstanding units per item, ordered by item id.
fn tally_demand<'r, I>(unserved: I) -> BTreeMap<ItemId, u32>
where
    I: IntoIterator<Item = &'r AssignedRecipient>,
{
    let mut demand = BTreeMap::new();
    for recipient in unserved {
        let needed = demand.entry(recipient.assigned_item).or_insert(0_u32);
        *needed = needed.saturating_add(1);
    }
    demand
}

/// `loaded` plus `units` of `unit`, summed the way [`CargoManifest::footprint`] does.
#[expect(
    clippy::float_arithmetic,
    reason = "running load totals are floating-point weight and volume"
)]
fn with_units(loaded: Footprint, unit: Footprint, units: u32) -> Footprint {
    let count = f64::from(units);
    Footprint::new(
        loaded.weight + unit.weight * count,
        loaded.volume + unit.volume * count,
    )
}

/// Whole units of size `unit` that fit into `remaining`.
///
/// A zero-sized dimension never constrains, so `cap` is returned instead.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "floor of a non-negative ratio clamped to the u32 demand range"
)]
fn units_within(remaining: f64, unit: f64, cap: u32) -> u32 {
    if unit <= 0.0 {
        return cap;
    }
    let fit = (remaining / unit).floor();
    if fit <= 0.0 {
        0
    } else if fit >= f64::from(cap) {
        cap
    } else {
        fit as u32
    }
}
