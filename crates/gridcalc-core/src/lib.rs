//! # gridcalc-core
//!
//! Core data structures for the gridcalc formula engine.
//!
//! This crate provides the fundamental types used throughout gridcalc:
//! - [`CellValue`] - The value union (numbers, strings, booleans, errors,
//!   empties, and rectangular arrays)
//! - [`CellError`] - The closed set of spreadsheet error codes
//! - [`Array`] - Fixed-shape rows x columns containers of cell values
//!
//! ## Example
//!
//! ```rust
//! use gridcalc_core::{Array, CellError, CellValue};
//!
//! let row = Array::from_rows(vec![vec![
//!     CellValue::Number(1.0),
//!     CellValue::Error(CellError::Div0),
//! ]])
//! .unwrap();
//!
//! assert_eq!(row.shape(), (1, 2));
//! assert!(row.get(0, 1).unwrap().is_error());
//! ```

pub mod array;
pub mod cell;
pub mod error;

// Re-exports for convenience
pub use array::Array;
pub use cell::{CellError, CellValue, SharedString};
pub use error::{Error, Result};
