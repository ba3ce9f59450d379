//! `tp-io` — getting locations in and itineraries out.
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`loader`] | `load_locations_csv`, `load_locations_reader`, `LoadReport` |
//! | [`table`]  | `render_table` (console), `write_itinerary_csv`           |
//! | [`error`]  | `DataError`, `DataResult<T>`                              |
//!
//! Neither side carries algorithmic weight; both are thin wrappers over
//! `tp-network` types.

pub mod error;
pub mod loader;
pub mod table;


pub use error::{DataError, DataResult};
pub use loader::{LoadReport, load_locations_csv, load_locations_reader};
pub use table::{render_table, write_itinerary_csv};
