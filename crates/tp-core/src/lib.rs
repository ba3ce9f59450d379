//! `tp-core` — foundational types for the travel planner.
//!
//! This crate is a dependency of every other `tp-*` crate.  It has no `tp-*`
//! dependencies and minimal external ones (only `thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `LocationId`, `EdgeId`                                |
//! | [`geo`]         | `GeoPoint`, haversine distance in kilometres          |
//! | [`location`]    | `Location`, `LocationKey`                             |
//! | [`transport`]   | `TransportMode` enum and mode-name parsing            |
//! | [`config`]      | `ModeParams`, `ModeTable`, `SynthesisRule`, `PlannerConfig` |
//! | [`error`]       | `TpError`, `TpResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to value and config types.  |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod location;
pub mod transport;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{ModeParams, ModeTable, PlannerConfig, SynthesisRule};
pub use error::{TpError, TpResult};
pub use geo::GeoPoint;
pub use ids::{EdgeId, LocationId};
pub use location::{Location, LocationKey};
pub use transport::TransportMode;
