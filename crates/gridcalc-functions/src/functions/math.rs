//! Math and trigonometric functions
//!
//! Most entries are plain library primitives registered straight through
//! the elementwise wrapper; only the operations whose domain failures the
//! underlying primitive does not report correctly live here as named ops.
//! Domain checks run before the primitive, since the primitive's own
//! behavior for these inputs is not authoritative.

use gridcalc_core::{CellError, CellValue};

use crate::coerce::{coerce_number, NumCoercion};
use crate::error::FunctionResult;

/// ATAN2(x, y) scalar op; both arguments zero is the domain failure case
///
/// Spreadsheet argument order is (x, y), the reverse of the usual
/// `atan2(y, x)`.
pub fn op_atan2(v: &[f64]) -> Result<f64, CellError> {
    let (x, y) = (v[0], v[1]);
    if x == 0.0 && y == 0.0 {
        return Err(CellError::Div0);
    }
    Ok(y.atan2(x))
}

/// MOD(x, y) scalar op; floored modulo with a zero-divisor check
pub fn op_mod(v: &[f64]) -> Result<f64, CellError> {
    let (x, y) = (v[0], v[1]);
    if y == 0.0 {
        return Err(CellError::Div0);
    }
    // Result takes the divisor's sign, unlike the `%` operator
    Ok(x - y * (x / y).floor())
}

/// POWER(number, power) scalar op with explicit zero-base domain checks
pub fn op_power(v: &[f64]) -> Result<f64, CellError> {
    let (number, power) = (v[0], v[1]);
    if number == 0.0 {
        if power == 0.0 {
            return Err(CellError::Num);
        }
        if power < 0.0 {
            return Err(CellError::Div0);
        }
    }
    Ok(number.powf(power))
}

/// INT(number) - truncates toward zero
///
/// Operates on a single scalar argument through the generic wrapper, not
/// the elementwise one.
pub fn fn_int(args: &[CellValue]) -> FunctionResult<CellValue> {
    match coerce_number(&args[0]) {
        NumCoercion::Number(n) => Ok(CellValue::Number(n.trunc())),
        NumCoercion::AlreadyError(e) => Ok(CellValue::Error(e)),
        NumCoercion::NotANumber => Ok(CellValue::Error(CellError::Value)),
    }
}

/// PI() - Returns the value of pi (3.14159265358979...)
pub fn fn_pi(_args: &[CellValue]) -> FunctionResult<CellValue> {
    Ok(CellValue::Number(std::f64::consts::PI))
}
