//! Multi-leg itineraries through mandatory waypoints.
//!
//! Each leg is an independent, mode-enforced search.  The first unreachable
//! leg fails the whole itinerary: no partial result is returned and no other
//! mode is tried.

use log::debug;

use tp_core::{LocationId, LocationKey, TransportMode};

use crate::{DijkstraRouter, ModeFilter, PathResult, RouteError, RouteGraph, RouteResult, Router};

// ── TripRequest ───────────────────────────────────────────────────────────────

/// An intermediate stop and the mode required to *reach* it.
#[derive(Clone, Debug, PartialEq)]
pub struct Stop {
    pub key:  LocationKey,
    pub mode: TransportMode,
}

/// A complete trip query: origin, ordered stops, destination.
///
/// With no stops and no `final_mode` the trip is a single unconstrained
/// search.  Otherwise every leg is mode-enforced and `final_mode` governs
/// the leg into `destination`.
#[derive(Clone, Debug, PartialEq)]
pub struct TripRequest {
    pub start:       LocationKey,
    pub stops:       Vec<Stop>,
    pub destination: LocationKey,
    pub final_mode:  Option<TransportMode>,
}

impl TripRequest {
    pub fn direct(start: LocationKey, destination: LocationKey) -> Self {
        Self { start, stops: Vec::new(), destination, final_mode: None }
    }

    pub fn via(
        start: LocationKey,
        stops: Vec<Stop>,
        destination: LocationKey,
        final_mode: TransportMode,
    ) -> Self {
        Self { start, stops, destination, final_mode: Some(final_mode) }
    }

    pub fn is_direct(&self) -> bool {
        self.stops.is_empty() && self.final_mode.is_none()
    }

    /// `start`, each stop, `destination`.
    pub fn waypoints(&self) -> Vec<LocationKey> {
        let mut keys = Vec::with_capacity(self.stops.len() + 2);
        keys.push(self.start.clone());
        keys.extend(self.stops.iter().map(|s| s.key.clone()));
        keys.push(self.destination.clone());
        keys
    }

    /// One mode per leg; shorter than `waypoints() - 1` when `final_mode`
    /// is missing.
    pub fn leg_modes(&self) -> Vec<TransportMode> {
        self.stops
            .iter()
            .map(|s| s.mode)
            .chain(self.final_mode)
            .collect()
    }
}

// ── ItineraryPlanner ──────────────────────────────────────────────────────────

/// Composes per-leg [`Router`] searches into one itinerary.
#[derive(Clone, Debug, Default)]
pub struct ItineraryPlanner<R: Router = DijkstraRouter> {
    router: R,
}

impl<R: Router> ItineraryPlanner<R> {
    pub fn new(router: R) -> Self {
        Self { router }
    }

    pub fn router(&self) -> &R {
        &self.router
    }

    /// Plan through `waypoints`, where `leg_modes[i]` is mandatory for the
    /// leg `waypoints[i] → waypoints[i + 1]`.
    ///
    /// All keys are resolved before the first search, so an unknown key
    /// fails with a lookup error and no traversal runs.
    pub fn plan(
        &self,
        graph: &RouteGraph,
        waypoints: &[LocationKey],
        leg_modes: &[TransportMode],
    ) -> RouteResult<PathResult> {
        if waypoints.len() < 2 || leg_modes.len() != waypoints.len() - 1 {
            return Err(RouteError::InvalidItinerary {
                waypoints: waypoints.len(),
                modes:     leg_modes.len(),
            });
        }

        let catalog = graph.catalog();
        let ids = waypoints
            .iter()
            .map(|key| catalog.id_of(key))
            .collect::<Result<Vec<LocationId>, _>>()?;

        let mut itinerary = PathResult::empty();
        for (leg, (pair, &mode)) in ids.windows(2).zip(leg_modes).enumerate() {
            let part = self
                .router
                .find_path(graph, pair[0], pair[1], ModeFilter::Only(mode))?;

            if part.is_empty() {
                return Err(RouteError::RouteNotFound {
                    leg,
                    from: waypoints[leg].clone(),
                    to:   waypoints[leg + 1].clone(),
                    mode,
                });
            }

            debug!(
                "leg {leg}: {} → {} by {mode}, {} segments",
                waypoints[leg],
                waypoints[leg + 1],
                part.len()
            );
            itinerary.append(part);
        }
        Ok(itinerary)
    }

    /// Like [`plan`](Self::plan) with mode names (`"Flight"`, `"train"`, …).
    /// Every name is validated before any key lookup or search.
    pub fn plan_with_mode_names<S: AsRef<str>>(
        &self,
        graph: &RouteGraph,
        waypoints: &[LocationKey],
        leg_modes: &[S],
    ) -> RouteResult<PathResult> {
        let modes = leg_modes
            .iter()
            .map(|name| name.as_ref().parse::<TransportMode>())
            .collect::<Result<Vec<_>, _>>()?;
        self.plan(graph, waypoints, &modes)
    }

    /// Run a [`TripRequest`]: a direct trip is one unconstrained search
    /// (an empty result means no route); anything else goes through
    /// [`plan`](Self::plan).
    pub fn plan_trip(&self, graph: &RouteGraph, trip: &TripRequest) -> RouteResult<PathResult> {
        if trip.is_direct() {
            return self.router.find_path_between(
                graph,
                &trip.start,
                &trip.destination,
                ModeFilter::Any,
            );
        }
        self.plan(graph, &trip.waypoints(), &trip.leg_modes())
    }
}
