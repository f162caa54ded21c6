//! Routes as an ordered log of delivery and reload events.

use crate::{CargoManifest, ItemId, RecipientId};

/// One step of a planned route.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", rename_all = "snake_case")
)]
pub enum RouteEvent {
    /// Hand one unit of `item` to `recipient`.
    Delivery {
        /// Recipient being served.
        recipient: RecipientId,
        /// Item handed over.
        item: ItemId,
    },
    /// Visit the depot and load `manifest`.
    ///
    /// An empty manifest is a plain depot return.
    Reload {
        /// Units loaded at this visit.
        manifest: CargoManifest,
    },
}

impl RouteEvent {
    /// Whether this is a reload that loaded nothing.
    #[must_use]
    pub fn is_depot_return(&self) -> bool {
        matches!(self, Self::Reload { manifest } if manifest.is_empty())
    }
}

/// An append-only sequence of route events.
///
/// # Examples
/// ```
/// use sleigh_core::{CargoManifest, ItemId, RecipientId, Route};
///
/// let mut route = Route::new();
/// route.push_reload([(ItemId::new(1), 1)].into_iter().collect());
/// route.push_delivery(RecipientId::new(4), ItemId::new(1));
/// route.push_reload(CargoManifest::new());
///
/// assert_eq!(route.len(), 3);
/// assert_eq!(route.deliveries().count(), 1);
/// assert_eq!(route.reloads().count(), 2);
/// assert!(route.events().last().is_some_and(|event| event.is_depot_return()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Route {
    events: Vec<RouteEvent>,
}

impl Route {
    /// An empty route.
    #[must_use]
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Append a delivery event.
    pub fn push_delivery(&mut self, recipient: RecipientId, item: ItemId) {
        self.events.push(RouteEvent::Delivery { recipient, item });
    }

    /// Append a reload event.
    pub fn push_reload(&mut self, manifest: CargoManifest) {
        self.events.push(RouteEvent::Reload { manifest });
    }

    /// All events in order.
    #[must_use]
    pub fn events(&self) -> &[RouteEvent] {
        &self.events
    }

    /// Number of events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the route has no events.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// `(recipient, item)` pairs of delivery events in order.
    pub fn deliveries(&self) -> impl Iterator<Item = (RecipientId, ItemId)> + '_ {
        self.events.iter().filter_map(|event| match event {
            RouteEvent::Delivery { recipient, item } => Some((*recipient, *item)),
            RouteEvent::Reload { .. } => None,
        })
    }

    /// Manifests of reload events in order, including depot returns.
    pub fn reloads(&self) -> impl Iterator<Item = &CargoManifest> + '_ {
        self.events.iter().filter_map(|event| match event {
            RouteEvent::Reload { manifest } => Some(manifest),
            RouteEvent::Delivery { .. } => None,
        })
    }

    /// Recipients served, in delivery order.
    pub fn delivered_recipients(&self) -> impl Iterator<Item = RecipientId> + '_ {
        self.deliveries().map(|(recipient, _)| recipient)
    }
}
