//! Onboard inventory of the vehicle.
//!
//! Counts are kept in an id-ordered map and an entry exists only while its
//! count is positive.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::{Catalog, Footprint, ItemId};

/// Errors returned by [`CargoManifest::take_one`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ManifestError {
    /// No unit of the item is onboard.
    #[error("no unit of item {0} is onboard")]
    NotOnboard(ItemId),
}

/// Mapping from item id to the number of units onboard.
///
/// # Examples
/// ```
/// use sleigh_core::{CargoManifest, ItemId};
///
/// # fn main() -> Result<(), sleigh_core::ManifestError> {
/// let mut cargo = CargoManifest::new();
/// cargo.add(ItemId::new(2), 2);
/// cargo.add(ItemId::new(5), 0);
/// assert_eq!(cargo.len(), 1);
///
/// assert_eq!(cargo.take_one(ItemId::new(2))?, 1);
/// assert_eq!(cargo.take_one(ItemId::new(2))?, 0);
/// assert!(cargo.is_empty());
/// assert!(cargo.take_one(ItemId::new(2)).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct CargoManifest {
    counts: BTreeMap<ItemId, u32>,
}

impl CargoManifest {
    /// An empty manifest.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counts: BTreeMap::new(),
        }
    }

    /// Add `units` of `item`; adding zero units leaves the manifest unchanged.
    pub fn add(&mut self, item: ItemId, units: u32) {
        if units == 0 {
            return;
        }
        let entry = self.counts.entry(item).or_insert(0);
        *entry = entry.saturating_add(units);
    }

    /// Units of `item` onboard.
    #[must_use]
    pub fn count(&self, item: ItemId) -> u32 {
        self.counts.get(&item).copied().unwrap_or(0)
    }

    /// Whether at least one unit of `item` is onboard.
    #[must_use]
    pub fn has(&self, item: ItemId) -> bool {
        self.counts.contains_key(&item)
    }

    /// Remove one unit of `item`, returning the units left.
    ///
    /// The entry is dropped once its count reaches zero.
    pub fn take_one(&mut self, item: ItemId) -> Result<u32, ManifestError> {
        let Some(count) = self.counts.get_mut(&item) else {
            return Err(ManifestError::NotOnboard(item));
        };
        *count = count.saturating_sub(1);
        let left = *count;
        if left == 0 {
            self.counts.remove(&item);
        }
        Ok(left)
    }

    /// Whether nothing is onboard.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of distinct items onboard.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Total units across all items.
    #[must_use]
    pub fn total_units(&self) -> u64 {
        self.counts.values().map(|count| u64::from(*count)).sum()
    }

    /// Iterate `(item, units)` pairs in ascending item order.
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, u32)> + '_ {
        self.counts.iter().map(|(item, count)| (*item, *count))
    }

    /// Summed weight and volume of the onboard units.
    ///
    /// Items missing from `catalog` contribute nothing.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "load totals multiply unit footprints by counts"
    )]
    pub fn footprint(&self, catalog: &Catalog) -> Footprint {
        self.iter()
            .filter_map(|(id, units)| catalog.get(id).map(|item| (item.footprint, units)))
            .fold(Footprint::default(), |total, (unit, units)| {
                let count = f64::from(units);
                Footprint::new(
                    total.weight + unit.weight * count,
                    total.volume + unit.volume * count,
                )
            })
    }
}

impl FromIterator<(ItemId, u32)> for CargoManifest {
    fn from_iter<T: IntoIterator<Item = (ItemId, u32)>>(iter: T) -> Self {
        let mut manifest = Self::new();
        for (item, units) in iter {
            manifest.add(item, units);
        }
        manifest
    }
}
