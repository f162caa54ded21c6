//! Mutable state of one planning run and its transitions.

use std::collections::BTreeMap;

use geo::Coord;
use sleigh_core::{
    AssignedRecipient, CargoManifest, DistanceProvider, PlanRequest, PlanWarning, RecipientId,
    Route,
};

use crate::loader::CapacityLoader;

/// Phases of the greedy planning loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum PlannerState {
    /// Choose the next delivery from the current position and cargo.
    Selecting,
    /// Nothing onboard is deliverable; go back and reload.
    DepotReturn,
    /// No deliverable recipient remains.
    Terminated,
}

/// Everything the planner mutates while walking the route.
///
/// The unserved set is keyed by recipient id so scans visit candidates in
/// ascending id order; only a strictly nearer candidate replaces the
/// incumbent, so ties go to the lowest id.
pub(super) struct RouteWalk<'a, D: ?Sized> {
    request: &'a PlanRequest,
    distance: &'a D,
    loader: CapacityLoader<'a>,
    unserved: BTreeMap<RecipientId, &'a AssignedRecipient>,
    position: Coord<f64>,
    cargo: CargoManifest,
    elapsed_secs: f64,
    route: Route,
    warnings: Vec<PlanWarning>,
}

/// Final products of a run.
pub(super) struct WalkOutcome {
    pub(super) route: Route,
    pub(super) elapsed_secs: f64,
    pub(super) warnings: Vec<PlanWarning>,
}

impl<'a, D> RouteWalk<'a, D>
where
    D: DistanceProvider + ?Sized,
{
    /// Start at the depot with empty cargo and every recipient unserved.
    pub(super) fn new(request: &'a PlanRequest, distance: &'a D) -> Self {
        let unserved = request
            .recipients
            .iter()
            .map(|recipient| (recipient.id, recipient))
            .collect();
        Self {
            request,
            distance,
            loader: CapacityLoader::new(&request.catalog, &request.capacity),
            unserved,
            position: request.depot,
            cargo: CargoManifest::new(),
            elapsed_secs: 0.0,
            route: Route::new(),
            warnings: Vec::new(),
        }
    }

    /// Drive the state machine to completion and close the route.
    pub(super) fn run(mut self) -> WalkOutcome {
        let mut state = PlannerState::Selecting;
        loop {
            state = match state {
                PlannerState::Selecting => self.select(),
                PlannerState::DepotReturn => self.reload(),
                PlannerState::Terminated => break,
            };
        }
        self.close();
        WalkOutcome {
            route: self.route,
            elapsed_secs: self.elapsed_secs,
            warnings: self.warnings,
        }
    }

    fn select(&mut self) -> PlannerState {
        if self.unserved.is_empty() {
            return PlannerState::Terminated;
        }
        match self.nearest_deliverable() {
            Some((recipient, km)) => {
                self.deliver(recipient, km);
                PlannerState::Selecting
            }
            None => PlannerState::DepotReturn,
        }
    }

    /// Nearest unserved recipient whose item is onboard, with its distance.
    fn nearest_deliverable(&self) -> Option<(&'a AssignedRecipient, f64)> {
        let mut best: Option<(&'a AssignedRecipient, f64)> = None;
        for recipient in self.unserved.values().copied() {
            if !self.cargo.has(recipient.assigned_item) {
                continue;
            }
            let km = self.distance.distance_km(self.position, recipient.location);
            if best.is_none_or(|(_, best_km)| km < best_km) {
                best = Some((recipient, km));
            }
        }
        best
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "elapsed time accumulates travel hours and stop time in seconds"
    )]
    fn deliver(&mut self, recipient: &'a AssignedRecipient, km: f64) {
        if let Err(err) = self.cargo.take_one(recipient.assigned_item) {
            log::warn!("cannot deliver to recipient {}: {err}", recipient.id);
            debug_assert!(false, "selected recipient without cargo");
            return;
        }
        self.route.push_delivery(recipient.id, recipient.assigned_item);
        self.unserved.remove(&recipient.id);
        self.position = recipient.location;
        self.elapsed_secs += self.travel_secs(km);
        self.elapsed_secs += self.request.capacity.stop_duration.as_secs_f64();
    }

    fn reload(&mut self) -> PlannerState {
        self.drop_undeliverable();
        if self.unserved.is_empty() {
            return PlannerState::Terminated;
        }
        self.travel_to_depot();
        let manifest = self.loader.load(self.unserved.values().copied());
        if manifest.is_empty() {
            log::warn!(
                "reload loaded nothing for {} unserved recipients; abandoning them",
                self.unserved.len()
            );
            let stranded: Vec<RecipientId> = self.unserved.keys().copied().collect();
            for id in stranded {
                self.abandon(id);
            }
            return PlannerState::Terminated;
        }
        self.route.push_reload(manifest.clone());
        self.cargo = manifest;
        PlannerState::Selecting
    }

    /// Drop every unserved recipient whose item cannot fit the empty vehicle.
    fn drop_undeliverable(&mut self) {
        let capacity = &self.request.capacity;
        let oversized: Vec<RecipientId> = self
            .unserved
            .values()
            .filter(|recipient| !capacity.admits(&recipient.footprint))
            .map(|recipient| recipient.id)
            .collect();
        for id in oversized {
            self.abandon(id);
        }
    }

    fn abandon(&mut self, id: RecipientId) {
        let Some(recipient) = self.unserved.remove(&id) else {
            return;
        };
        log::warn!(
            "recipient {} cannot be served: item {} (weight {}, volume {}) exceeds vehicle capacity",
            recipient.id,
            recipient.assigned_item,
            recipient.footprint.weight,
            recipient.footprint.volume
        );
        self.warnings.push(PlanWarning::Undeliverable {
            recipient: recipient.id,
            item: recipient.assigned_item,
            footprint: recipient.footprint,
        });
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "elapsed time accumulates travel hours in seconds"
    )]
    fn travel_to_depot(&mut self) {
        let km = self.distance.distance_km(self.position, self.request.depot);
        self.elapsed_secs += self.travel_secs(km);
        self.position = self.request.depot;
    }

    /// Final return leg and the closing empty reload.
    fn close(&mut self) {
        self.travel_to_depot();
        self.cargo = CargoManifest::new();
        self.route.push_reload(CargoManifest::new());
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "travel time is distance over speed"
    )]
    fn travel_secs(&self, km: f64) -> f64 {
        km / self.request.capacity.speed_kmh * 3600.0
    }
}
