//! Function wrappers
//!
//! Two adapters turn plain operations into registry callables:
//!
//! - [`wrap_ufunc`] adapts a scalar numeric operation into one that
//!   broadcasts elementwise over arrays, with per-position error values
//!   instead of faults (the value-propagating discipline).
//! - [`wrap_fn`] adapts a function taking whole arguments, only
//!   normalizing empty arguments to the canonical substitute first.

use gridcalc_core::{Array, CellError, CellValue};

use crate::broadcast::{broadcast_get, broadcast_shapes, lift};
use crate::coerce::{coerce_number, replace_empty, NumCoercion};
use crate::error::FunctionResult;

/// A scalar numeric operation
///
/// Receives one float per argument and either produces a float or names
/// the error code for a domain failure.
pub type ScalarOp = fn(&[f64]) -> Result<f64, CellError>;

/// The callable type stored in the function registry
pub type FunctionImpl = Box<dyn Fn(&[CellValue]) -> FunctionResult<CellValue> + Send + Sync>;

/// Evaluate a scalar op at one broadcast position
///
/// Coercion failure yields `#VALUE!`, an error value in any input passes
/// through unchanged, and a NaN or infinite result becomes `#NUM!`. An
/// error code returned by the op itself is kept as-is.
fn eval_scalar(op: ScalarOp, leaves: &[&CellValue]) -> CellValue {
    let mut vals = Vec::with_capacity(leaves.len());
    for leaf in leaves {
        match coerce_number(leaf) {
            NumCoercion::Number(n) => vals.push(n),
            NumCoercion::AlreadyError(e) => return CellValue::Error(e),
            NumCoercion::NotANumber => return CellValue::Error(CellError::Value),
        }
    }
    match op(&vals) {
        Err(e) => CellValue::Error(e),
        Ok(n) if n.is_nan() || n.is_infinite() => CellValue::Error(CellError::Num),
        Ok(n) => CellValue::Number(n),
    }
}

/// Adapt a scalar numeric op into an elementwise broadcasting callable
///
/// Empty inputs are substituted with zero. The result is always an array;
/// all-scalar input produces the degenerate 1 x 1 array.
pub fn wrap_ufunc(op: ScalarOp) -> FunctionImpl {
    wrap_ufunc_with(op, Vec::new())
}

/// [`wrap_ufunc`] with per-argument empty substitutes
///
/// Argument `i` uses `substitutes[i]`; arguments beyond the list fall back
/// to numeric zero.
pub fn wrap_ufunc_with(op: ScalarOp, substitutes: Vec<CellValue>) -> FunctionImpl {
    let zero = CellValue::Number(0.0);
    Box::new(move |args: &[CellValue]| {
        let arrays: Vec<Array> = args
            .iter()
            .enumerate()
            .map(|(i, a)| lift(replace_empty(a, substitutes.get(i).unwrap_or(&zero))))
            .collect();
        let (rows, cols) = broadcast_shapes(&arrays)?;
        let mut leaves: Vec<&CellValue> = Vec::with_capacity(arrays.len());
        let result = Array::from_shape_fn(rows, cols, |r, c| {
            leaves.clear();
            leaves.extend(arrays.iter().map(|a| broadcast_get(a, r, c)));
            eval_scalar(op, &leaves)
        });
        Ok(CellValue::Array(result))
    })
}

/// Adapt a whole-argument function into a registry callable
///
/// Each empty argument is replaced with the canonical empty substitute
/// (numeric zero) before delegating; everything else passes through.
pub fn wrap_fn<F>(f: F) -> FunctionImpl
where
    F: Fn(&[CellValue]) -> FunctionResult<CellValue> + Send + Sync + 'static,
{
    let zero = CellValue::Number(0.0);
    Box::new(move |args: &[CellValue]| {
        let args: Vec<CellValue> = args.iter().map(|a| replace_empty(a, &zero)).collect();
        f(&args)
    })
}
