//! `tp-network` — location catalog, route graph, path search, and itineraries.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                 |
//! |----------------|----------------------------------------------------------|
//! | [`catalog`]    | `LocationCatalog` (dense ids, key lookup, text search)   |
//! | [`network`]    | `RouteGraph` (CSR adjacency), `RouteGraphBuilder`, `DirectedEdge` |
//! | [`synth`]      | `RouteSynthesizer`, distance-banded edge generation     |
//! | [`router`]     | `Router` trait, `DijkstraRouter`, `ModeFilter`           |
//! | [`itinerary`]  | `Segment`, `PathResult`                                  |
//! | [`planner`]    | `ItineraryPlanner`, `TripRequest`, `Stop`                |
//! | [`error`]      | `RouteError`, `RouteResult<T>`                           |
//!
//! # Data flow
//!
//! ```text
//! LocationCatalog ──▶ RouteSynthesizer ──▶ RouteGraph ──▶ Router ──▶ PathResult
//!                                                  └────▶ ItineraryPlanner ──┘
//! ```
//!
//! The catalog and graph are built once and are read-only afterwards; every
//! query allocates its own label arrays, so a `&RouteGraph` may be shared
//! freely.

pub mod catalog;
pub mod error;
pub mod itinerary;
pub mod network;
pub mod planner;
pub mod router;
pub mod synth;


pub use catalog::LocationCatalog;
pub use error::{RouteError, RouteResult};
pub use itinerary::{PathResult, Segment};
pub use network::{DirectedEdge, RouteGraph, RouteGraphBuilder};
pub use planner::{ItineraryPlanner, Stop, TripRequest};
pub use router::{DijkstraRouter, ModeFilter, Router};
pub use synth::RouteSynthesizer;
