//! Array constructors
//!
//! ARRAYROW packs its arguments into one row; ARRAY stacks rows into a
//! rectangle. The surrounding parser materializes array literals through
//! these. Error values ride along as ordinary elements.

use gridcalc_core::{Array, CellValue};

use crate::error::{FunctionError, FunctionResult};

/// ARRAYROW(v1, v2, ...) - a single 1 x n row
pub fn fn_arrayrow(args: &[CellValue]) -> FunctionResult<CellValue> {
    Ok(CellValue::Array(Array::from_shape_fn(1, args.len(), |_, c| {
        args[c].clone()
    })))
}

/// ARRAY(row1, row2, ...) - stack rows of equal width
///
/// Scalar arguments count as 1 x 1 rows; a multi-row argument or rows of
/// differing widths cannot form a rectangle.
pub fn fn_array(args: &[CellValue]) -> FunctionResult<CellValue> {
    let mut rows: Vec<Vec<CellValue>> = Vec::with_capacity(args.len());
    for arg in args {
        match arg {
            CellValue::Array(a) if a.rows() == 1 => rows.push(a.values().to_vec()),
            CellValue::Array(a) => {
                return Err(FunctionError::ShapeMismatch {
                    left: (1, a.cols()),
                    right: a.shape(),
                })
            }
            scalar => rows.push(vec![scalar.clone()]),
        }
    }

    let width = rows.first().map_or(0, |r| r.len());
    for row in rows.iter().skip(1) {
        if row.len() != width {
            return Err(FunctionError::ShapeMismatch {
                left: (1, width),
                right: (1, row.len()),
            });
        }
    }

    Ok(CellValue::Array(Array::from_shape_fn(
        rows.len(),
        width,
        |r, c| rows[r][c].clone(),
    )))
}
