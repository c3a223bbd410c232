//! Text functions
//!
//! All of these operate on the display-string coercion of their first
//! argument (numbers lose trailing ".0", booleans read TRUE/FALSE, error
//! values contribute their code string). Positions are in characters, not
//! bytes, and slicing follows the usual sequence-slice conventions:
//! negative indices count back from the end, out-of-range bounds clamp.

use gridcalc_core::{CellError, CellValue};

use crate::coerce::{coerce_number, NumCoercion};
use crate::error::FunctionResult;

/// Normalize a slice bound against a length
fn slice_bound(i: i64, len: usize) -> usize {
    if i < 0 {
        (len as i64 + i).max(0) as usize
    } else {
        (i as usize).min(len)
    }
}

/// Character slice `s[start..end]` with sequence-slice bound handling
fn char_slice(s: &str, start: i64, end: Option<i64>) -> String {
    let len = s.chars().count();
    let a = slice_bound(start, len);
    let b = end.map_or(len, |e| slice_bound(e, len));
    if a >= b {
        return String::new();
    }
    s.chars().skip(a).take(b - a).collect()
}

/// Display-string coercion of an argument
fn text_arg(value: &CellValue) -> String {
    value.to_string()
}

/// Numeric position argument, truncated to an integer
fn int_arg(value: &CellValue) -> Result<i64, CellError> {
    match coerce_number(value) {
        NumCoercion::Number(n) => Ok(n.trunc() as i64),
        NumCoercion::AlreadyError(e) => Err(e),
        NumCoercion::NotANumber => Err(CellError::Value),
    }
}

/// LEFT(text, num_chars)
pub fn fn_left(args: &[CellValue]) -> FunctionResult<CellValue> {
    let s = text_arg(&args[0]);
    let n = match int_arg(&args[1]) {
        Ok(n) => n,
        Err(e) => return Ok(CellValue::Error(e)),
    };
    Ok(CellValue::string(char_slice(&s, 0, Some(n))))
}

/// MID(text, start_num, num_chars) - start_num is 1-based
pub fn fn_mid(args: &[CellValue]) -> FunctionResult<CellValue> {
    let s = text_arg(&args[0]);
    let start = match int_arg(&args[1]) {
        Ok(n) => n,
        Err(e) => return Ok(CellValue::Error(e)),
    };
    let count = match int_arg(&args[2]) {
        Ok(n) => n,
        Err(e) => return Ok(CellValue::Error(e)),
    };
    let start0 = start - 1;
    Ok(CellValue::string(char_slice(&s, start0, Some(start0 + count))))
}

/// RIGHT(text, num_chars)
///
/// The slice starts `num_chars` from the end; zero and out-of-range counts
/// fall out of the bound normalization (RIGHT(x, 0) is the whole string).
pub fn fn_right(args: &[CellValue]) -> FunctionResult<CellValue> {
    let s = text_arg(&args[0]);
    let n = match int_arg(&args[1]) {
        Ok(n) => n,
        Err(e) => return Ok(CellValue::Error(e)),
    };
    Ok(CellValue::string(char_slice(&s, -n, None)))
}

/// FIND(find_text, within_text, [start_num])
///
/// Zero-based character index of the first occurrence, or -1 when absent.
/// The optional start_num is 1-based.
pub fn fn_find(args: &[CellValue]) -> FunctionResult<CellValue> {
    let find_text = text_arg(&args[0]);
    let within_text = text_arg(&args[1]);
    let start0 = match args.get(2) {
        None => 0,
        Some(v) => match int_arg(v) {
            Ok(n) => n - 1,
            Err(e) => return Ok(CellValue::Error(e)),
        },
    };

    let len = within_text.chars().count();
    let from = slice_bound(start0, len);
    let haystack: String = within_text.chars().skip(from).collect();
    let index = match haystack.find(&find_text) {
        Some(byte_pos) => {
            let char_pos = haystack[..byte_pos].chars().count();
            (from + char_pos) as f64
        }
        None => -1.0,
    };
    Ok(CellValue::Number(index))
}

/// TRIM(text) - strips leading and trailing whitespace
pub fn fn_trim(args: &[CellValue]) -> FunctionResult<CellValue> {
    Ok(CellValue::string(text_arg(&args[0]).trim()))
}

/// LEN(text) - length in characters
pub fn fn_len(args: &[CellValue]) -> FunctionResult<CellValue> {
    let s = text_arg(&args[0]);
    Ok(CellValue::Number(s.chars().count() as f64))
}

/// REPLACE(old_text, start_num, num_chars, new_text)
///
/// Substitutes num_chars characters starting at 1-based start_num.
pub fn fn_replace(args: &[CellValue]) -> FunctionResult<CellValue> {
    let old_text = text_arg(&args[0]);
    let start = match int_arg(&args[1]) {
        Ok(n) => n,
        Err(e) => return Ok(CellValue::Error(e)),
    };
    let count = match int_arg(&args[2]) {
        Ok(n) => n,
        Err(e) => return Ok(CellValue::Error(e)),
    };
    let new_text = text_arg(&args[3]);

    let start0 = start - 1;
    let head = char_slice(&old_text, 0, Some(start0));
    let tail = char_slice(&old_text, start0 + count, None);
    Ok(CellValue::string(format!("{head}{new_text}{tail}")))
}

/// UPPER(text)
pub fn fn_upper(args: &[CellValue]) -> FunctionResult<CellValue> {
    Ok(CellValue::string(text_arg(&args[0]).to_uppercase()))
}

/// LOWER(text)
pub fn fn_lower(args: &[CellValue]) -> FunctionResult<CellValue> {
    Ok(CellValue::string(text_arg(&args[0]).to_lowercase()))
}
