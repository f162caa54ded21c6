//! Catalog items and their physical footprint.
//!
//! The catalog is immutable reference data keyed by [`ItemId`]. It is built
//! once from the loaded articles and consulted by id afterwards, so a missing
//! item is an explicit `None` rather than a silent scan miss.

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

/// Identifier of a catalog item.
///
/// # Examples
/// ```
/// use sleigh_core::ItemId;
///
/// let id = ItemId::new(7);
/// assert_eq!(id.get(), 7);
/// assert_eq!(id.to_string(), "7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ItemId(u32);

impl ItemId {
    /// Wrap a raw item number.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Return the raw item number.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for ItemId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-unit weight and volume of an item.
///
/// A footprint is valid when both dimensions are finite and non-negative.
/// A zero dimension never constrains loading on that axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Footprint {
    /// Unit weight.
    pub weight: f64,
    /// Unit volume.
    pub volume: f64,
}

impl Footprint {
    /// Construct a footprint from weight and volume.
    #[must_use]
    pub const fn new(weight: f64, volume: f64) -> Self {
        Self { weight, volume }
    }

    /// Whether both dimensions are finite and non-negative.
    ///
    /// # Examples
    /// ```
    /// use sleigh_core::Footprint;
    ///
    /// assert!(Footprint::new(1.5, 0.0).is_valid());
    /// assert!(!Footprint::new(-1.0, 0.5).is_valid());
    /// assert!(!Footprint::new(f64::NAN, 0.5).is_valid());
    /// ```
    #[must_use]
    pub fn is_valid(&self) -> bool {
        [self.weight, self.volume]
            .iter()
            .all(|value| value.is_finite() && *value >= 0.0)
    }
}

/// A catalog entry.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Unique identifier.
    pub id: ItemId,
    /// Physical size of one unit.
    pub footprint: Footprint,
}

impl Item {
    /// Construct an item from its id and per-unit dimensions.
    #[must_use]
    pub const fn new(id: ItemId, weight: f64, volume: f64) -> Self {
        Self {
            id,
            footprint: Footprint::new(weight, volume),
        }
    }
}

/// Errors returned by [`Catalog::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The same item id appeared more than once.
    #[error("item {0} is listed more than once")]
    DuplicateItem(ItemId),
    /// An item carried a negative or non-finite weight or volume.
    #[error("item {0} has an invalid weight or volume")]
    InvalidFootprint(ItemId),
}

/// Immutable lookup table from [`ItemId`] to [`Item`].
///
/// # Examples
/// ```
/// use sleigh_core::{Catalog, Item, ItemId};
///
/// # fn main() -> Result<(), sleigh_core::CatalogError> {
/// let catalog = Catalog::new([
///     Item::new(ItemId::new(0), 0.5, 0.1),
///     Item::new(ItemId::new(1), 2.0, 1.0),
/// ])?;
/// assert_eq!(catalog.len(), 2);
/// assert!(catalog.get(ItemId::new(1)).is_some());
/// assert!(catalog.get(ItemId::new(9)).is_none());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    items: HashMap<ItemId, Item>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and invalid footprints.
    pub fn new<I>(items: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = Item>,
    {
        let mut table = HashMap::new();
        for item in items {
            if !item.footprint.is_valid() {
                return Err(CatalogError::InvalidFootprint(item.id));
            }
            if table.insert(item.id, item).is_some() {
                return Err(CatalogError::DuplicateItem(item.id));
            }
        }
        Ok(Self { items: table })
    }

    /// Look up an item by id.
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.get(&id)
    }

    /// Whether the catalog contains `id`.
    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.items.contains_key(&id)
    }

    /// Number of catalog entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over items in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> + '_ {
        self.items.values()
    }
}
