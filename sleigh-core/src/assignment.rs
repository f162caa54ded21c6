//! Resolve the item every recipient will receive.
//!
//! Eligible recipients get the item they requested; ineligible recipients
//! get the configured fallback item. The fallback id is supplied by the
//! caller rather than baked in, and both lookups go through the
//! [`Catalog`] map so a missing entry surfaces as an [`AssignmentError`].

use thiserror::Error;

use crate::{AssignedRecipient, Catalog, ItemId, Recipient, RecipientId};

/// Errors returned by [`AssignmentResolver::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AssignmentError {
    /// The configured fallback item is not in the catalog.
    #[error("fallback item {0} is missing from the catalog")]
    MissingFallback(ItemId),
    /// An eligible recipient requested an item the catalog does not list.
    #[error("recipient {recipient} requested unknown item {item}")]
    UnknownItem {
        /// Recipient whose request could not be resolved.
        recipient: RecipientId,
        /// The requested item id.
        item: ItemId,
    },
}

/// Maps recipients to the item they will receive.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use sleigh_core::{AssignmentResolver, Catalog, Item, ItemId, Recipient, RecipientId};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let catalog = Catalog::new([
///     Item::new(ItemId::new(0), 1.0, 0.5),
///     Item::new(ItemId::new(3), 4.0, 2.0),
/// ])?;
/// let recipients = [
///     Recipient::new(RecipientId::new(1), Coord { x: 0.0, y: 0.0 }, true, ItemId::new(3)),
///     Recipient::new(RecipientId::new(2), Coord { x: 0.0, y: 0.0 }, false, ItemId::new(3)),
/// ];
/// let assigned = AssignmentResolver::new(ItemId::new(0)).resolve(&recipients, &catalog)?;
/// assert_eq!(assigned[0].assigned_item, ItemId::new(3));
/// assert_eq!(assigned[1].assigned_item, ItemId::new(0));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignmentResolver {
    fallback: ItemId,
}

impl AssignmentResolver {
    /// Create a resolver that redirects ineligible recipients to `fallback`.
    #[must_use]
    pub const fn new(fallback: ItemId) -> Self {
        Self { fallback }
    }

    /// The configured fallback item.
    #[must_use]
    pub const fn fallback(&self) -> ItemId {
        self.fallback
    }

    /// Item a recipient is entitled to, before any catalog lookup.
    #[must_use]
    pub const fn assigned_item(&self, recipient: &Recipient) -> ItemId {
        if recipient.eligible {
            recipient.requested_item
        } else {
            self.fallback
        }
    }

    /// Annotate a single recipient with its item and resolved footprint.
    pub fn resolve_one(
        &self,
        recipient: &Recipient,
        catalog: &Catalog,
    ) -> Result<AssignedRecipient, AssignmentError> {
        let item_id = self.assigned_item(recipient);
        let item = catalog.get(item_id).ok_or(if recipient.eligible {
            AssignmentError::UnknownItem {
                recipient: recipient.id,
                item: item_id,
            }
        } else {
            AssignmentError::MissingFallback(item_id)
        })?;
        Ok(AssignedRecipient {
            id: recipient.id,
            location: recipient.location,
            eligible: recipient.eligible,
            assigned_item: item_id,
            footprint: item.footprint,
        })
    }

    /// Annotate every recipient, preserving input order.
    ///
    /// The fallback must exist in the catalog even when every recipient is
    /// eligible, so a misconfigured fallback is reported up front.
    pub fn resolve(
        &self,
        recipients: &[Recipient],
        catalog: &Catalog,
    ) -> Result<Vec<AssignedRecipient>, AssignmentError> {
        if !catalog.contains(self.fallback) {
            return Err(AssignmentError::MissingFallback(self.fallback));
        }
        recipients
            .iter()
            .map(|recipient| self.resolve_one(recipient, catalog))
            .collect()
    }
}
