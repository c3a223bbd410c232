//! Flattening of nested argument lists
//!
//! Aggregate functions see their arguments as one flat stream of leaves:
//! arrays are descended in row-major order, everything else (including
//! text, which is never split into characters) is a leaf. The iterator is
//! lazy and freshly constructed per call.

use gridcalc_core::CellValue;

use crate::error::FoundError;

/// Leaf predicate for [`flatten`]
pub type Predicate = fn(&CellValue) -> bool;

/// Lazy depth-first iterator over the leaves of an argument list
pub struct Flatten<'a> {
    stack: Vec<std::slice::Iter<'a, CellValue>>,
    check: Option<Predicate>,
}

impl<'a> Iterator for Flatten<'a> {
    type Item = &'a CellValue;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(top) = self.stack.last_mut() {
            match top.next() {
                None => {
                    self.stack.pop();
                }
                Some(CellValue::Array(a)) => {
                    self.stack.push(a.iter());
                }
                Some(leaf) => {
                    if self.check.map_or(true, |check| check(leaf)) {
                        return Some(leaf);
                    }
                }
            }
        }
        None
    }
}

/// Flatten an argument list into its leaves, in encounter order
///
/// With a predicate, only leaves satisfying it are yielded; without one,
/// every leaf is yielded.
pub fn flatten(args: &[CellValue], check: Option<Predicate>) -> Flatten<'_> {
    Flatten {
        stack: vec![args.iter()],
        check,
    }
}

/// Fail fast on the first error value anywhere in the arguments
///
/// Flattens without a predicate and stops at the first error leaf,
/// returning it wrapped in [`FoundError`].
pub fn raise_errors(args: &[CellValue]) -> Result<(), FoundError> {
    for leaf in flatten(args, None) {
        if let CellValue::Error(e) = leaf {
            return Err(FoundError(*e));
        }
    }
    Ok(())
}
