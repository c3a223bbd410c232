//! Numeric coercion
//!
//! A single total coercion function shared by the elementwise wrapper, the
//! flatten predicate, and the aggregates. Coercion never panics and never
//! loses an error value: the tri-state result distinguishes "a usable
//! number", "not a number", and "already an error".

use gridcalc_core::{Array, CellError, CellValue};

/// Outcome of coercing a cell value to a float
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumCoercion {
    /// The value coerces to this float
    Number(f64),
    /// The value has no numeric reading (non-numeric text, arrays)
    NotANumber,
    /// The value is an error value; it must propagate, never convert
    AlreadyError(CellError),
}

/// Coerce a cell value to a float
///
/// Booleans coerce (TRUE is 1.0), numeric text parses, empties read as
/// zero. Arrays have no scalar reading.
pub fn coerce_number(value: &CellValue) -> NumCoercion {
    match value {
        CellValue::Number(n) => NumCoercion::Number(*n),
        CellValue::Boolean(true) => NumCoercion::Number(1.0),
        CellValue::Boolean(false) => NumCoercion::Number(0.0),
        CellValue::Empty => NumCoercion::Number(0.0),
        CellValue::Error(e) => NumCoercion::AlreadyError(*e),
        CellValue::String(s) => match s.as_str().trim().parse::<f64>() {
            Ok(n) => NumCoercion::Number(n),
            Err(_) => NumCoercion::NotANumber,
        },
        CellValue::Array(_) => NumCoercion::NotANumber,
    }
}

/// Predicate used by numeric aggregation when flattening
///
/// True for anything that coerces to a float, and for error values. Error
/// values count as "numbers" here so that aggregates see them instead of
/// silently skipping them; each aggregate decides what to do next.
pub fn is_number(value: &CellValue) -> bool {
    !matches!(coerce_number(value), NumCoercion::NotANumber)
}

/// Replace empty values with a substitute, recursing into arrays
pub fn replace_empty(value: &CellValue, substitute: &CellValue) -> CellValue {
    match value {
        CellValue::Empty => substitute.clone(),
        CellValue::Array(a) => CellValue::Array(Array::from_shape_fn(a.rows(), a.cols(), |r, c| {
            replace_empty(&a.values()[r * a.cols() + c], substitute)
        })),
        other => other.clone(),
    }
}
