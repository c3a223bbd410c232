//! Logical and error-inspection functions
//!
//! These operate elementwise over whole values: positions are selected or
//! tested one by one, with broadcasting between the arguments. Scalar-only
//! input collapses back to a scalar result.

use gridcalc_core::{Array, CellError, CellValue};

use crate::broadcast::{broadcast_get, broadcast_shapes, lift};
use crate::error::FunctionResult;

/// Per-element boolean reading of a condition value
fn truthy(value: &CellValue) -> Result<bool, CellError> {
    match value {
        CellValue::Boolean(b) => Ok(*b),
        CellValue::Number(n) => Ok(*n != 0.0),
        CellValue::String(s) => Ok(!s.is_empty()),
        CellValue::Empty => Ok(false),
        CellValue::Error(e) => Err(*e),
        CellValue::Array(_) => Err(CellError::Value),
    }
}

/// Collapse a 1 x 1 result when no argument was an array
fn collapse(result: Array, any_array: bool) -> CellValue {
    if any_array {
        CellValue::Array(result)
    } else {
        result.into_scalar().unwrap_or_default()
    }
}

/// IF(condition, [then], [else]) - elementwise select
///
/// The branch defaults are TRUE and FALSE respectively. An error value in
/// a condition position becomes that position's result.
pub fn fn_if(args: &[CellValue]) -> FunctionResult<CellValue> {
    let condition = args[0].clone();
    let then = args.get(1).cloned().unwrap_or(CellValue::Boolean(true));
    let otherwise = args.get(2).cloned().unwrap_or(CellValue::Boolean(false));

    let any_array =
        condition.is_array() || then.is_array() || otherwise.is_array();
    let arrays = [lift(condition), lift(then), lift(otherwise)];
    let (rows, cols) = broadcast_shapes(&arrays)?;

    let result = Array::from_shape_fn(rows, cols, |r, c| {
        match truthy(broadcast_get(&arrays[0], r, c)) {
            Err(e) => CellValue::Error(e),
            Ok(true) => broadcast_get(&arrays[1], r, c).clone(),
            Ok(false) => broadcast_get(&arrays[2], r, c).clone(),
        }
    });
    Ok(collapse(result, any_array))
}

/// IFERROR(value, fallback) - elementwise error replacement
///
/// Every position holding an error value is replaced by the corresponding
/// fallback position; everything else is left unchanged.
pub fn fn_iferror(args: &[CellValue]) -> FunctionResult<CellValue> {
    let value = args[0].clone();
    let fallback = args[1].clone();

    let any_array = value.is_array() || fallback.is_array();
    let arrays = [lift(value), lift(fallback)];
    let (rows, cols) = broadcast_shapes(&arrays)?;

    let result = Array::from_shape_fn(rows, cols, |r, c| {
        let v = broadcast_get(&arrays[0], r, c);
        if v.is_error() {
            broadcast_get(&arrays[1], r, c).clone()
        } else {
            v.clone()
        }
    });
    Ok(collapse(result, any_array))
}

/// Elementwise error test, preserving array shape
fn map_error_predicate(value: &CellValue, pred: fn(CellError) -> bool) -> CellValue {
    match value {
        CellValue::Array(a) => CellValue::Array(Array::from_shape_fn(
            a.rows(),
            a.cols(),
            |r, c| map_error_predicate(&a.values()[r * a.cols() + c], pred),
        )),
        CellValue::Error(e) => CellValue::Boolean(pred(*e)),
        _ => CellValue::Boolean(false),
    }
}

/// ISERROR(value) - true for any error value
pub fn fn_iserror(args: &[CellValue]) -> FunctionResult<CellValue> {
    Ok(map_error_predicate(&args[0], |_| true))
}

/// ISERR(value) - true for any error value except #N/A
///
/// #N/A marks an expected not-available result, not a failure the formula
/// author should have prevented; ISERR excludes it, ISERROR does not.
pub fn fn_iserr(args: &[CellValue]) -> FunctionResult<CellValue> {
    Ok(map_error_predicate(&args[0], |e| e != CellError::Na))
}
