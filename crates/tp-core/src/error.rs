//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `TpError` as one
//! variant, so lookup and mode-validation failures keep their identity all
//! the way to the caller.

use thiserror::Error;

use crate::{LocationId, LocationKey};

/// The base error type for `tp-core` and a common variant for sub-crates.
#[derive(Debug, Error)]
pub enum TpError {
    #[error("location not found: {0}")]
    LocationNotFound(LocationKey),

    #[error("{0} is out of range")]
    LocationOutOfRange(LocationId),

    #[error("catalog is full: cannot assign an id to location #{0}")]
    CatalogFull(usize),

    #[error("invalid transport mode: {0:?} (expected Flight, Train, Bus, or Car)")]
    InvalidMode(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `tp-core`.
pub type TpResult<T> = Result<T, TpError>;
