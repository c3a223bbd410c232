//! Rectangular arrays of cell values
//!
//! An [`Array`] is a fixed-shape rows x columns container stored row-major.
//! A scalar is represented as the degenerate 1 x 1 array. Elements are
//! themselves [`CellValue`]s, so arrays can nest.

use std::fmt;

use crate::cell::CellValue;
use crate::error::{Error, Result};

/// A rectangular container of cell values with a fixed shape
#[derive(Debug, Clone, PartialEq)]
pub struct Array {
    rows: usize,
    cols: usize,
    data: Vec<CellValue>,
}

impl Array {
    /// Create an array from row-major data
    pub fn new(rows: usize, cols: usize, data: Vec<CellValue>) -> Result<Self> {
        if rows * cols != data.len() {
            return Err(Error::InvalidDimensions {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Array { rows, cols, data })
    }

    /// Create an array from nested rows; every row must have the same width
    pub fn from_rows(rows: Vec<Vec<CellValue>>) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |r| r.len());
        let mut data = Vec::with_capacity(nrows * ncols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != ncols {
                return Err(Error::RaggedRows {
                    row: i,
                    len: row.len(),
                    expected: ncols,
                });
            }
            data.extend(row);
        }
        Ok(Array {
            rows: nrows,
            cols: ncols,
            data,
        })
    }

    /// Create a 1 x 1 array holding a single value
    pub fn scalar(value: CellValue) -> Self {
        Array {
            rows: 1,
            cols: 1,
            data: vec![value],
        }
    }

    /// Build an array by calling `f` for every (row, col) position
    pub fn from_shape_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> CellValue,
    {
        let mut data = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                data.push(f(r, c));
            }
        }
        Array { rows, cols, data }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Shape as (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total number of elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check whether the array has no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the element at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Option<&CellValue> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Row-major slice of all elements
    pub fn values(&self) -> &[CellValue] {
        &self.data
    }

    /// Iterate over elements in row-major (encounter) order
    pub fn iter(&self) -> std::slice::Iter<'_, CellValue> {
        self.data.iter()
    }

    /// Iterate over rows as slices
    pub fn iter_rows(&self) -> impl Iterator<Item = &[CellValue]> {
        self.data.chunks(self.cols.max(1))
    }

    /// Unwrap a degenerate 1 x 1 array into its single value
    pub fn into_scalar(mut self) -> Option<CellValue> {
        if self.rows == 1 && self.cols == 1 {
            self.data.pop()
        } else {
            None
        }
    }
}

impl fmt::Display for Array {
    /// Formats as a brace literal: `{1,2;3,4}`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, row) in self.iter_rows().enumerate() {
            if i > 0 {
                write!(f, ";")?;
            }
            for (j, v) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ",")?;
                }
                write!(f, "{}", v)?;
            }
        }
        write!(f, "}}")
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a CellValue;
    type IntoIter = std::slice::Iter<'a, CellValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
