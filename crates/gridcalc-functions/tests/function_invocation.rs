//! Tests for function invocation through the registry boundary

use gridcalc_core::{Array, CellError, CellValue};
use gridcalc_functions::{invoke, FunctionError};

fn num(n: f64) -> CellValue {
    CellValue::Number(n)
}

fn text(s: &str) -> CellValue {
    CellValue::string(s)
}

fn err(e: CellError) -> CellValue {
    CellValue::Error(e)
}

fn grid(rows: Vec<Vec<CellValue>>) -> CellValue {
    CellValue::Array(Array::from_rows(rows).unwrap())
}

/// Unwrap a degenerate 1 x 1 elementwise result to its single value
fn scalar(v: CellValue) -> CellValue {
    match v {
        CellValue::Array(a) => a.into_scalar().expect("expected a 1x1 array"),
        other => other,
    }
}

fn assert_close(v: CellValue, expected: f64) {
    match v {
        CellValue::Number(n) => assert!((n - expected).abs() < 1e-9, "{n} != {expected}"),
        other => panic!("Expected number, got {other:?}"),
    }
}

/// Test ABS over scalars and error passthrough
#[test]
fn test_abs() {
    for x in [-3.5, -1.0, 0.0, 2.0, 1e12] {
        assert_eq!(scalar(invoke("ABS", &[num(x)]).unwrap()), num(x.abs()));
    }

    // An error value in the input passes through unchanged
    assert_eq!(
        scalar(invoke("ABS", &[err(CellError::Na)]).unwrap()),
        err(CellError::Na)
    );
}

/// Test SUM flattening and its strict error discipline
#[test]
fn test_sum() {
    let a = grid(vec![vec![num(1.0), num(2.0)], vec![num(3.0), num(4.0)]]);
    let b = grid(vec![vec![num(10.0), num(20.0)], vec![num(30.0), num(40.0)]]);
    assert_eq!(invoke("SUM", &[a, b]).unwrap(), num(110.0));

    // Any embedded error value becomes the result - returned, never thrown
    let a = grid(vec![vec![num(1.0), num(2.0)], vec![err(CellError::Ref), num(4.0)]]);
    let b = grid(vec![vec![num(10.0), num(20.0)], vec![num(30.0), num(40.0)]]);
    assert_eq!(invoke("SUM", &[a, b]).unwrap(), err(CellError::Ref));

    // Non-numeric text is excluded from the sum
    assert_eq!(
        invoke("SUM", &[num(1.0), text("noise"), num(2.0)]).unwrap(),
        num(3.0)
    );

    // Empty arguments read as zero
    assert_eq!(
        invoke("SUM", &[CellValue::Empty, num(5.0)]).unwrap(),
        num(5.0)
    );
}

/// Test MOD's zero-divisor domain check
#[test]
fn test_mod() {
    assert_eq!(scalar(invoke("MOD", &[num(10.0), num(3.0)]).unwrap()), num(1.0));

    for x in [-7.0, 0.0, 1.0, 1e9] {
        assert_eq!(
            scalar(invoke("MOD", &[num(x), num(0.0)]).unwrap()),
            err(CellError::Div0)
        );
    }
}

/// Test POWER's zero-base domain checks
#[test]
fn test_power() {
    assert_eq!(
        scalar(invoke("POWER", &[num(0.0), num(0.0)]).unwrap()),
        err(CellError::Num)
    );
    assert_eq!(
        scalar(invoke("POWER", &[num(0.0), num(-1.0)]).unwrap()),
        err(CellError::Div0)
    );
    assert_eq!(
        scalar(invoke("POWER", &[num(2.0), num(10.0)]).unwrap()),
        num(1024.0)
    );
}

/// Test ATAN2's argument order and simultaneous-zero check
#[test]
fn test_atan2() {
    assert_eq!(
        scalar(invoke("ATAN2", &[num(0.0), num(0.0)]).unwrap()),
        err(CellError::Div0)
    );
    // Arguments are (x, y), the reverse of the usual atan2(y, x)
    assert_eq!(
        scalar(invoke("ATAN2", &[num(0.0), num(1.0)]).unwrap()),
        num(1.0_f64.atan2(0.0))
    );
}

/// Test the #N/A distinction between ISERR and ISERROR
#[test]
fn test_iserr_iserror() {
    assert_eq!(
        invoke("ISERROR", &[err(CellError::Na)]).unwrap(),
        CellValue::Boolean(true)
    );
    assert_eq!(
        invoke("ISERR", &[err(CellError::Na)]).unwrap(),
        CellValue::Boolean(false)
    );
    assert_eq!(
        invoke("ISERR", &[err(CellError::Value)]).unwrap(),
        CellValue::Boolean(true)
    );
    assert_eq!(
        invoke("ISERROR", &[num(7.0)]).unwrap(),
        CellValue::Boolean(false)
    );
    assert_eq!(
        invoke("ISERR", &[num(7.0)]).unwrap(),
        CellValue::Boolean(false)
    );
}

/// Test IFERROR fallback selection
#[test]
fn test_iferror() {
    assert_eq!(
        invoke("IFERROR", &[err(CellError::Value), num(42.0)]).unwrap(),
        num(42.0)
    );
    assert_eq!(
        invoke("IFERROR", &[num(7.0), num(42.0)]).unwrap(),
        num(7.0)
    );

    // Elementwise over arrays: only error positions are replaced
    let v = grid(vec![vec![num(1.0), err(CellError::Div0)]]);
    let out = invoke("IFERROR", &[v, num(0.0)]).unwrap();
    assert_eq!(out, grid(vec![vec![num(1.0), num(0.0)]]));
}

/// Test IF's defaults and elementwise selection
#[test]
fn test_if() {
    assert_eq!(
        invoke("IF", &[CellValue::Boolean(true), text("y"), text("n")]).unwrap(),
        text("y")
    );
    // Omitted branches default to TRUE and FALSE
    assert_eq!(
        invoke("IF", &[num(1.0)]).unwrap(),
        CellValue::Boolean(true)
    );
    assert_eq!(
        invoke("IF", &[num(0.0)]).unwrap(),
        CellValue::Boolean(false)
    );

    let cond = grid(vec![vec![num(1.0), num(0.0)]]);
    let out = invoke("IF", &[cond, text("a"), text("b")]).unwrap();
    assert_eq!(out, grid(vec![vec![text("a"), text("b")]]));
}

/// Test FIND's zero-based result
#[test]
fn test_find() {
    assert_eq!(invoke("FIND", &[text("b"), text("abc")]).unwrap(), num(1.0));
    assert_eq!(invoke("FIND", &[text("z"), text("abc")]).unwrap(), num(-1.0));
    assert_eq!(
        invoke("FIND", &[text("b"), text("abcb"), num(3.0)]).unwrap(),
        num(3.0)
    );
}

/// Test REPLACE substitution
#[test]
fn test_replace() {
    assert_eq!(
        invoke("REPLACE", &[text("hello"), num(2.0), num(3.0), text("XYZ")]).unwrap(),
        text("hXYZo")
    );
}

/// Test remaining text functions
#[test]
fn test_text_functions() {
    assert_eq!(invoke("LEFT", &[text("hello"), num(2.0)]).unwrap(), text("he"));
    assert_eq!(invoke("RIGHT", &[text("hello"), num(2.0)]).unwrap(), text("lo"));
    assert_eq!(
        invoke("MID", &[text("hello"), num(2.0), num(3.0)]).unwrap(),
        text("ell")
    );
    assert_eq!(invoke("TRIM", &[text("  x  ")]).unwrap(), text("x"));
    assert_eq!(invoke("LEN", &[text("hello")]).unwrap(), num(5.0));
    assert_eq!(invoke("UPPER", &[text("abc")]).unwrap(), text("ABC"));
    assert_eq!(invoke("LOWER", &[text("ABC")]).unwrap(), text("abc"));
}

/// Test elementwise broadcasting with mixed valid/invalid text
#[test]
fn test_broadcasting_mixed_text() {
    let a = grid(vec![
        vec![text("-1"), text("nope")],
        vec![num(-2.5), text("also nope")],
    ]);
    let out = invoke("ABS", &[a]).unwrap();
    assert_eq!(
        out,
        grid(vec![
            vec![num(1.0), err(CellError::Value)],
            vec![num(2.5), err(CellError::Value)],
        ])
    );
}

/// Test broadcasting a row against a column
#[test]
fn test_broadcasting_row_by_column() {
    let row = grid(vec![vec![num(1.0), num(8.0)]]);
    let col = grid(vec![vec![num(2.0)], vec![num(3.0)]]);
    let out = invoke("POWER", &[row, col]).unwrap();
    assert_eq!(
        out,
        grid(vec![
            vec![num(1.0), num(64.0)],
            vec![num(1.0), num(512.0)],
        ])
    );
}

/// Test that incompatible shapes are a fault, not an error value
#[test]
fn test_broadcast_shape_mismatch_fault() {
    let a = grid(vec![vec![num(1.0), num(2.0)]]);
    let b = grid(vec![vec![num(1.0), num(2.0), num(3.0)]]);
    assert!(matches!(
        invoke("POWER", &[a, b]).unwrap_err(),
        FunctionError::ShapeMismatch { .. }
    ));
}

/// Test that re-applying a wrapped function to its own output is stable
///
/// The elementwise wrapper's output (numbers plus per-position error
/// values) feeds back through unchanged: errors pass through and numbers
/// are re-evaluated, so an idempotent op gives identical results.
#[test]
fn test_wrapper_application_is_idempotent() {
    let a = grid(vec![vec![text("-4"), text("bad")], vec![num(9.0), num(-16.0)]]);
    let once = invoke("ABS", &[a]).unwrap();
    let twice = invoke("ABS", &[once.clone()]).unwrap();
    assert_eq!(once, twice);
}

/// Test MAX/MIN strictness and the AVERAGE asymmetry
#[test]
fn test_aggregate_error_disciplines() {
    let a = grid(vec![vec![num(1.0), err(CellError::Num), num(3.0)]]);

    assert_eq!(invoke("MAX", &[a.clone()]).unwrap(), err(CellError::Num));
    assert_eq!(invoke("MIN", &[a.clone()]).unwrap(), err(CellError::Num));

    // AVERAGE is deliberately not strict; it still surfaces the error it
    // meets, but without the fail-fast sweep the strict reducers use.
    assert_eq!(invoke("AVERAGE", &[a]).unwrap(), err(CellError::Num));

    let clean = grid(vec![vec![num(1.0), num(2.0), num(3.0)]]);
    assert_eq!(invoke("MAX", &[clean.clone()]).unwrap(), num(3.0));
    assert_eq!(invoke("MIN", &[clean.clone()]).unwrap(), num(1.0));
    assert_eq!(invoke("AVERAGE", &[clean]).unwrap(), num(2.0));
}

/// Test SUMPRODUCT's size check and zero-fill of non-numeric leaves
#[test]
fn test_sumproduct() {
    let a = grid(vec![vec![num(1.0), num(2.0)], vec![num(3.0), num(4.0)]]);
    let b = grid(vec![vec![num(5.0), num(6.0)], vec![num(7.0), num(8.0)]]);
    assert_eq!(invoke("SUMPRODUCT", &[a, b]).unwrap(), num(70.0));

    // Non-numeric leaves multiply in as zero
    let a = grid(vec![vec![num(2.0), text("two")]]);
    let b = grid(vec![vec![num(10.0), num(10.0)]]);
    assert_eq!(invoke("SUMPRODUCT", &[a, b]).unwrap(), num(20.0));

    // Embedded errors are strict
    let a = grid(vec![vec![num(2.0), err(CellError::Div0)]]);
    let b = grid(vec![vec![num(10.0), num(10.0)]]);
    assert_eq!(invoke("SUMPRODUCT", &[a, b]).unwrap(), err(CellError::Div0));

    // Differing element counts are a fault
    let a = grid(vec![vec![num(1.0), num(2.0), num(3.0)]]);
    let b = grid(vec![vec![num(4.0), num(5.0)]]);
    assert!(matches!(
        invoke("SUMPRODUCT", &[a, b]).unwrap_err(),
        FunctionError::ShapeMismatch { .. }
    ));
}

/// Test the remaining math library entries
#[test]
fn test_math_library() {
    assert_eq!(invoke("PI", &[]).unwrap(), num(std::f64::consts::PI));
    assert_eq!(scalar(invoke("INT", &[num(4.7)]).unwrap()), num(4.0));
    assert_eq!(
        scalar(invoke("SQRT", &[num(9.0)]).unwrap()),
        num(3.0)
    );
    // SQRT of a negative number is #NUM!, via the NaN rule
    assert_eq!(
        scalar(invoke("SQRT", &[num(-1.0)]).unwrap()),
        err(CellError::Num)
    );
    // LOG is base-10; LN is natural
    assert_close(scalar(invoke("LOG", &[num(1000.0)]).unwrap()), 3.0);
    assert_close(scalar(invoke("LN", &[num(std::f64::consts::E)]).unwrap()), 1.0);
    assert_eq!(
        scalar(invoke("LN", &[num(0.0)]).unwrap()),
        err(CellError::Num)
    );
    assert_close(
        scalar(invoke("DEGREES", &[num(std::f64::consts::PI)]).unwrap()),
        180.0,
    );
    assert_close(
        scalar(invoke("RADIANS", &[num(180.0)]).unwrap()),
        std::f64::consts::PI,
    );
    assert_eq!(scalar(invoke("SINH", &[num(0.0)]).unwrap()), num(0.0));
    assert_eq!(scalar(invoke("COSH", &[num(0.0)]).unwrap()), num(1.0));
    assert_eq!(scalar(invoke("ATANH", &[num(0.0)]).unwrap()), num(0.0));
    // ACOS out of domain surfaces as #NUM!
    assert_eq!(
        scalar(invoke("ACOS", &[num(2.0)]).unwrap()),
        err(CellError::Num)
    );
}

/// Test the array constructors
#[test]
fn test_array_constructors() {
    let row1 = invoke("ARRAYROW", &[num(1.0), num(2.0)]).unwrap();
    let row2 = invoke("ARRAYROW", &[num(3.0), num(4.0)]).unwrap();
    let out = invoke("ARRAY", &[row1, row2]).unwrap();
    assert_eq!(
        out,
        grid(vec![vec![num(1.0), num(2.0)], vec![num(3.0), num(4.0)]])
    );
}

/// Test unknown names and arity faults at the invoke boundary
#[test]
fn test_invoke_faults() {
    match invoke("QUUX", &[]).unwrap_err() {
        FunctionError::NotImplemented(name) => assert_eq!(name, "QUUX"),
        other => panic!("Expected NotImplemented, got {other:?}"),
    }

    assert!(matches!(
        invoke("ATAN2", &[num(1.0)]).unwrap_err(),
        FunctionError::ArgumentCount { .. }
    ));
}

/// Test empty-cell substitution in elementwise functions
#[test]
fn test_empty_substitution() {
    // Empty reads as zero: SIN(empty) = 0, COS(empty) = 1
    assert_eq!(scalar(invoke("SIN", &[CellValue::Empty]).unwrap()), num(0.0));
    assert_eq!(scalar(invoke("COS", &[CellValue::Empty]).unwrap()), num(1.0));

    let a = grid(vec![vec![CellValue::Empty, num(2.0)]]);
    let out = invoke("EXP", &[a]).unwrap();
    assert_eq!(out, grid(vec![vec![num(1.0), num(2.0_f64.exp())]]));
}
