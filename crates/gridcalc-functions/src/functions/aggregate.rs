//! Aggregate functions
//!
//! Reducers over flattened argument lists. SUM, MAX, MIN and SUMPRODUCT
//! are strict: any error value anywhere in their arguments aborts the
//! reduction through [`raise_errors`] and becomes the function's result
//! at the `invoke` boundary. AVERAGE is not strict and only surfaces
//! errors it meets among its numeric leaves; the asymmetry is preserved
//! deliberately.

use gridcalc_core::{Array, CellError, CellValue};

use crate::broadcast::lift;
use crate::coerce::{coerce_number, is_number, NumCoercion};
use crate::error::{FunctionError, FunctionResult};
use crate::flatten::{flatten, raise_errors};

/// SUM function
pub fn fn_sum(args: &[CellValue]) -> FunctionResult<CellValue> {
    raise_errors(args)?;
    let mut sum = 0.0;
    for leaf in flatten(args, Some(is_number)) {
        if let NumCoercion::Number(n) = coerce_number(leaf) {
            sum += n;
        }
    }
    Ok(CellValue::Number(sum))
}

/// MAX function
pub fn fn_max(args: &[CellValue]) -> FunctionResult<CellValue> {
    raise_errors(args)?;
    let mut max: Option<f64> = None;
    for leaf in flatten(args, Some(is_number)) {
        if let NumCoercion::Number(n) = coerce_number(leaf) {
            max = Some(max.map_or(n, |m| m.max(n)));
        }
    }
    Ok(CellValue::Number(max.unwrap_or(0.0)))
}

/// MIN function
pub fn fn_min(args: &[CellValue]) -> FunctionResult<CellValue> {
    raise_errors(args)?;
    let mut min: Option<f64> = None;
    for leaf in flatten(args, Some(is_number)) {
        if let NumCoercion::Number(n) = coerce_number(leaf) {
            min = Some(min.map_or(n, |m| m.min(n)));
        }
    }
    Ok(CellValue::Number(min.unwrap_or(0.0)))
}

/// AVERAGE function
///
/// Not strict: no up-front error sweep. An error value among the numeric
/// leaves is returned directly as the result.
pub fn fn_average(args: &[CellValue]) -> FunctionResult<CellValue> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for leaf in flatten(args, Some(is_number)) {
        match coerce_number(leaf) {
            NumCoercion::Number(n) => {
                sum += n;
                count += 1;
            }
            NumCoercion::AlreadyError(e) => return Ok(CellValue::Error(e)),
            NumCoercion::NotANumber => {}
        }
    }
    if count == 0 {
        Ok(CellValue::Error(CellError::Div0))
    } else {
        Ok(CellValue::Number(sum / count as f64))
    }
}

/// SUMPRODUCT function
///
/// Every argument must hold the same total number of elements. Non-numeric
/// leaves multiply in as zero rather than being skipped.
pub fn fn_sumproduct(args: &[CellValue]) -> FunctionResult<CellValue> {
    if args.is_empty() {
        return Ok(CellValue::Error(CellError::Value));
    }
    raise_errors(args)?;
    let arrays: Vec<Array> = args.iter().cloned().map(lift).collect();
    let size = arrays[0].len();
    for a in &arrays[1..] {
        if a.len() != size {
            return Err(FunctionError::ShapeMismatch {
                left: arrays[0].shape(),
                right: a.shape(),
            });
        }
    }
    let mut sum = 0.0;
    for i in 0..size {
        let mut product = 1.0;
        for a in &arrays {
            product *= match coerce_number(&a.values()[i]) {
                NumCoercion::Number(n) => n,
                _ => 0.0,
            };
        }
        sum += product;
    }
    Ok(CellValue::Number(sum))
}
