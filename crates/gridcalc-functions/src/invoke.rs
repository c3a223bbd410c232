//! Registry access and the invocation boundary
//!
//! [`invoke`] is the single interface collaborators call: it resolves the
//! name, runs the function, and converts the internal fail-fast signal
//! back into an ordinary returned error value. The fail-fast signal never
//! escapes this boundary.

use std::sync::OnceLock;

use gridcalc_core::CellValue;

use crate::error::{FunctionError, FunctionResult};
use crate::functions::FunctionRegistry;

/// Global function registry (lazily initialized)
static FUNCTION_REGISTRY: OnceLock<FunctionRegistry> = OnceLock::new();

/// The process-wide registry, built once and read-only afterwards
pub fn registry() -> &'static FunctionRegistry {
    FUNCTION_REGISTRY.get_or_init(FunctionRegistry::new)
}

/// Invoke a spreadsheet function by name
///
/// Returns the function's value, which may itself be an error value.
/// Faults (`NotImplemented`, `ArgumentCount`, `ShapeMismatch`) surface as
/// `Err`; a discovered error value from a strict aggregate surfaces as
/// `Ok(CellValue::Error(..))`.
pub fn invoke(name: &str, args: &[CellValue]) -> FunctionResult<CellValue> {
    match registry().lookup(name).call(args) {
        Err(FunctionError::Found(found)) => Ok(CellValue::Error(found.0)),
        other => other,
    }
}
