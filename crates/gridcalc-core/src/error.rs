//! Error types for gridcalc-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in gridcalc-core
#[derive(Debug, Error)]
pub enum Error {
    /// Error-code string that is not one of the known cell errors
    #[error("Unknown error code: {0}")]
    UnknownErrorCode(String),

    /// Array constructed with a shape that does not match its data
    #[error("Invalid array dimensions: {rows}x{cols} does not hold {len} values")]
    InvalidDimensions {
        rows: usize,
        cols: usize,
        len: usize,
    },

    /// Rows of differing widths passed to a rectangular constructor
    #[error("Ragged array: row {row} has {len} values, expected {expected}")]
    RaggedRows {
        row: usize,
        len: usize,
        expected: usize,
    },
}
