//! Array broadcasting
//!
//! Shapes align per standard broadcasting rules: along each of the two
//! dimensions the extents must be equal, or one of them must be 1, in
//! which case it stretches to the other. Scalars take part as degenerate
//! 1 x 1 arrays.

use gridcalc_core::{Array, CellValue};

use crate::error::{FunctionError, FunctionResult};

/// Lift a value to an array; scalars become 1 x 1
pub fn lift(value: CellValue) -> Array {
    match value {
        CellValue::Array(a) => a,
        scalar => Array::scalar(scalar),
    }
}

/// Broadcast two shapes together
pub fn broadcast_shape(
    left: (usize, usize),
    right: (usize, usize),
) -> FunctionResult<(usize, usize)> {
    let rows = broadcast_dim(left.0, right.0);
    let cols = broadcast_dim(left.1, right.1);
    match (rows, cols) {
        (Some(r), Some(c)) => Ok((r, c)),
        _ => Err(FunctionError::ShapeMismatch { left, right }),
    }
}

fn broadcast_dim(a: usize, b: usize) -> Option<usize> {
    if a == b || b == 1 {
        Some(a)
    } else if a == 1 {
        Some(b)
    } else {
        None
    }
}

/// Broadcast the shapes of every array in the list
pub fn broadcast_shapes(arrays: &[Array]) -> FunctionResult<(usize, usize)> {
    arrays
        .iter()
        .try_fold((1, 1), |acc, a| broadcast_shape(acc, a.shape()))
}

/// Element of `array` at a position of the broadcast result
///
/// Size-1 dimensions repeat their single extent. The position must lie
/// within a shape this array broadcast to.
pub fn broadcast_get(array: &Array, row: usize, col: usize) -> &CellValue {
    let r = if array.rows() == 1 { 0 } else { row };
    let c = if array.cols() == 1 { 0 } else { col };
    &array.values()[r * array.cols() + c]
}
