//! # gridcalc-functions
//!
//! The function evaluation layer of the gridcalc formula engine.
//!
//! This crate provides:
//! - A registry of spreadsheet functions with a single [`invoke`] entry point
//! - Elementwise broadcasting of scalar numeric operations over arrays
//! - First-class error values that propagate through computation instead
//!   of aborting it, with strict aggregates as the deliberate exception
//!
//! ## Example
//!
//! ```rust
//! use gridcalc_core::CellValue;
//! use gridcalc_functions::invoke;
//!
//! let out = invoke("MOD", &[CellValue::Number(10.0), CellValue::Number(3.0)]).unwrap();
//! // Elementwise results come back as (possibly 1 x 1) arrays
//! assert_eq!(out.to_string(), "{1}");
//!
//! let out = invoke("MOD", &[CellValue::Number(10.0), CellValue::Number(0.0)]).unwrap();
//! assert_eq!(out.to_string(), "{#DIV/0!}");
//! ```

pub mod broadcast;
pub mod coerce;
pub mod error;
pub mod flatten;
pub mod functions;
pub mod invoke;
pub mod wrap;

pub use coerce::{coerce_number, is_number, replace_empty, NumCoercion};
pub use error::{FoundError, FunctionError, FunctionResult};
pub use flatten::{flatten, raise_errors};
pub use functions::{FunctionDef, FunctionRegistry, ResolvedFunction};
pub use invoke::{invoke, registry};
pub use wrap::{wrap_fn, wrap_ufunc, wrap_ufunc_with, FunctionImpl, ScalarOp};
