//! Function evaluation error types

use gridcalc_core::CellError;
use thiserror::Error;

/// Result type for function evaluation
pub type FunctionResult<T> = std::result::Result<T, FunctionError>;

/// Fail-fast signal raised while flattening aggregate arguments
///
/// Carries the first error value discovered. It travels to the `invoke`
/// boundary as [`FunctionError::Found`] and is converted back into a plain
/// `CellValue::Error` result there; it never escapes `invoke`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Found error value: {0}")]
pub struct FoundError(pub CellError);

/// Errors that can occur during function invocation
#[derive(Debug, Error)]
pub enum FunctionError {
    /// Function name not present in the registry
    #[error("Function not implemented: {0}")]
    NotImplemented(String),

    /// Wrong number of arguments
    #[error("Wrong number of arguments for {function}: expected {expected}, got {actual}")]
    ArgumentCount {
        function: String,
        expected: String,
        actual: usize,
    },

    /// Array shapes that cannot be broadcast or reconciled
    #[error("Shape mismatch: {left:?} vs {right:?}")]
    ShapeMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    /// Internal fail-fast propagation; caught inside `invoke`
    #[error(transparent)]
    Found(#[from] FoundError),
}
