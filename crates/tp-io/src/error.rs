//! Error types for tp-io.

use thiserror::Error;

/// Errors that abort a load or an export.  Individual malformed location
/// records are *not* errors; the loader skips them.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Catalog(#[from] tp_core::TpError),
}

/// Alias for `Result<T, DataError>`.
pub type DataResult<T> = Result<T, DataError>;
