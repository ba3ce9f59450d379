//! Routing-subsystem error type.

use thiserror::Error;

use tp_core::{LocationKey, TpError, TransportMode};

/// Errors produced by `tp-network`.
///
/// A single-leg search with no route is *not* an error: it yields an empty
/// [`PathResult`](crate::PathResult).  Only the itinerary planner escalates
/// that condition to [`RouteError::RouteNotFound`].
#[derive(Debug, Error)]
pub enum RouteError {
    /// Lookup and mode-validation failures from `tp-core`.
    #[error(transparent)]
    Core(#[from] TpError),

    #[error("no route found between {from} and {to} using {mode} (leg {leg})")]
    RouteNotFound {
        /// Zero-based index of the failing leg.
        leg:  usize,
        from: LocationKey,
        to:   LocationKey,
        mode: TransportMode,
    },

    #[error("itinerary needs at least 2 waypoints and one mode per leg, got {waypoints} waypoints and {modes} modes")]
    InvalidItinerary { waypoints: usize, modes: usize },
}

pub type RouteResult<T> = Result<T, RouteError>;
