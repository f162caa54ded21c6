//! Recipients awaiting exactly one delivered item.

use std::fmt;

use geo::Coord;

use crate::{Footprint, ItemId};

/// Identifier of a recipient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct RecipientId(u64);

impl RecipientId {
    /// Wrap a raw recipient number.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Return the raw recipient number.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for RecipientId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for RecipientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A recipient as loaded from input, before assignment.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use sleigh_core::{ItemId, Recipient, RecipientId};
///
/// let recipient = Recipient::new(
///     RecipientId::new(4),
///     Coord { x: 13.4, y: 52.5 },
///     true,
///     ItemId::new(2),
/// );
/// assert!(recipient.eligible);
/// assert_eq!(recipient.requested_item, ItemId::new(2));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Recipient {
    /// Unique identifier.
    pub id: RecipientId,
    /// Delivery location.
    pub location: Coord<f64>,
    /// Whether the recipient receives the requested item.
    pub eligible: bool,
    /// Item the recipient asked for.
    pub requested_item: ItemId,
}

impl Recipient {
    /// Construct a recipient.
    #[must_use]
    pub const fn new(
        id: RecipientId,
        location: Coord<f64>,
        eligible: bool,
        requested_item: ItemId,
    ) -> Self {
        Self {
            id,
            location,
            eligible,
            requested_item,
        }
    }
}

/// A recipient annotated with the item it will actually receive.
///
/// Produced by [`AssignmentResolver`](crate::AssignmentResolver); the
/// footprint is resolved from the catalog once and never changes afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssignedRecipient {
    /// Unique identifier.
    pub id: RecipientId,
    /// Delivery location.
    pub location: Coord<f64>,
    /// Eligibility flag carried over from input.
    pub eligible: bool,
    /// Item to deliver.
    pub assigned_item: ItemId,
    /// Footprint of one unit of `assigned_item`.
    pub footprint: Footprint,
}
