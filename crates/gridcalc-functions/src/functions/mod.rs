//! Built-in spreadsheet functions

pub mod aggregate;
pub mod array;
pub mod logical;
pub mod math;
pub mod text;

use ahash::AHashMap;
use gridcalc_core::CellValue;

use crate::error::{FunctionError, FunctionResult};
use crate::wrap::{wrap_fn, wrap_ufunc, FunctionImpl};

/// Function definition
pub struct FunctionDef {
    /// Canonical uppercase spreadsheet name
    pub name: &'static str,
    /// Minimum arguments
    pub min_args: usize,
    /// Maximum arguments (None = unlimited)
    pub max_args: Option<usize>,
    /// Implementation
    pub implementation: FunctionImpl,
}

impl FunctionDef {
    fn expected_args(&self) -> String {
        match (self.min_args, self.max_args) {
            (min, Some(max)) if min == max => format!("{min}"),
            (min, Some(max)) => format!("{min} to {max}"),
            (min, None) => format!("at least {min}"),
        }
    }
}

/// A name resolved against the registry
///
/// Lookup never fails: unknown names resolve to the not-implemented
/// variant, which defers the failure to call time. Registration order is
/// therefore irrelevant and a partially-built registry stays queryable.
pub enum ResolvedFunction<'a> {
    /// A registered function
    Found(&'a FunctionDef),
    /// The designated not-implemented callable for this name
    NotImplemented(String),
}

impl ResolvedFunction<'_> {
    /// Invoke the resolved function
    pub fn call(&self, args: &[CellValue]) -> FunctionResult<CellValue> {
        match self {
            ResolvedFunction::NotImplemented(name) => {
                Err(FunctionError::NotImplemented(name.clone()))
            }
            ResolvedFunction::Found(def) => {
                let arity_ok = args.len() >= def.min_args
                    && def.max_args.map_or(true, |max| args.len() <= max);
                if !arity_ok {
                    return Err(FunctionError::ArgumentCount {
                        function: def.name.to_string(),
                        expected: def.expected_args(),
                        actual: args.len(),
                    });
                }
                (def.implementation)(args)
            }
        }
    }
}

/// Function registry
///
/// Populated once during initialization and read-only afterwards, so it
/// can be shared freely across threads without locking.
pub struct FunctionRegistry {
    functions: AHashMap<&'static str, FunctionDef>,
}

impl FunctionRegistry {
    /// Create a new registry with all built-in functions
    pub fn new() -> Self {
        let mut registry = Self {
            functions: AHashMap::new(),
        };

        registry.register_math_functions();
        registry.register_aggregate_functions();
        registry.register_logical_functions();
        registry.register_text_functions();
        registry.register_array_functions();

        registry
    }

    /// Look up a function by name (case-sensitive)
    pub fn get(&self, name: &str) -> Option<&FunctionDef> {
        self.functions.get(name)
    }

    /// Resolve a name, deferring unknown-name failure to call time
    pub fn lookup(&self, name: &str) -> ResolvedFunction<'_> {
        match self.functions.get(name) {
            Some(def) => ResolvedFunction::Found(def),
            None => ResolvedFunction::NotImplemented(name.to_string()),
        }
    }

    /// Register a function
    pub fn register(&mut self, def: FunctionDef) {
        self.functions.insert(def.name, def);
    }

    fn register_math_functions(&mut self) {
        // ABS
        self.register(FunctionDef {
            name: "ABS",
            min_args: 1,
            max_args: Some(1),
            implementation: wrap_ufunc(|v| Ok(v[0].abs())),
        });

        // ACOS
        self.register(FunctionDef {
            name: "ACOS",
            min_args: 1,
            max_args: Some(1),
            implementation: wrap_ufunc(|v| Ok(v[0].acos())),
        });

        // ACOSH
        self.register(FunctionDef {
            name: "ACOSH",
            min_args: 1,
            max_args: Some(1),
            implementation: wrap_ufunc(|v| Ok(v[0].acosh())),
        });

        // ASIN
        self.register(FunctionDef {
            name: "ASIN",
            min_args: 1,
            max_args: Some(1),
            implementation: wrap_ufunc(|v| Ok(v[0].asin())),
        });

        // ASINH
        self.register(FunctionDef {
            name: "ASINH",
            min_args: 1,
            max_args: Some(1),
            implementation: wrap_ufunc(|v| Ok(v[0].asinh())),
        });

        // ATAN
        self.register(FunctionDef {
            name: "ATAN",
            min_args: 1,
            max_args: Some(1),
            implementation: wrap_ufunc(|v| Ok(v[0].atan())),
        });

        // ATAN2 - both arguments zero is a #DIV/0! domain failure
        self.register(FunctionDef {
            name: "ATAN2",
            min_args: 2,
            max_args: Some(2),
            implementation: wrap_ufunc(math::op_atan2),
        });

        // ATANH
        self.register(FunctionDef {
            name: "ATANH",
            min_args: 1,
            max_args: Some(1),
            implementation: wrap_ufunc(|v| Ok(v[0].atanh())),
        });

        // SIN
        self.register(FunctionDef {
            name: "SIN",
            min_args: 1,
            max_args: Some(1),
            implementation: wrap_ufunc(|v| Ok(v[0].sin())),
        });

        // SINH
        self.register(FunctionDef {
            name: "SINH",
            min_args: 1,
            max_args: Some(1),
            implementation: wrap_ufunc(|v| Ok(v[0].sinh())),
        });

        // COS
        self.register(FunctionDef {
            name: "COS",
            min_args: 1,
            max_args: Some(1),
            implementation: wrap_ufunc(|v| Ok(v[0].cos())),
        });

        // COSH
        self.register(FunctionDef {
            name: "COSH",
            min_args: 1,
            max_args: Some(1),
            implementation: wrap_ufunc(|v| Ok(v[0].cosh())),
        });

        // TAN
        self.register(FunctionDef {
            name: "TAN",
            min_args: 1,
            max_args: Some(1),
            implementation: wrap_ufunc(|v| Ok(v[0].tan())),
        });

        // TANH
        self.register(FunctionDef {
            name: "TANH",
            min_args: 1,
            max_args: Some(1),
            implementation: wrap_ufunc(|v| Ok(v[0].tanh())),
        });

        // SQRT - negative input surfaces as #NUM! via the NaN rule
        self.register(FunctionDef {
            name: "SQRT",
            min_args: 1,
            max_args: Some(1),
            implementation: wrap_ufunc(|v| Ok(v[0].sqrt())),
        });

        // EXP
        self.register(FunctionDef {
            name: "EXP",
            min_args: 1,
            max_args: Some(1),
            implementation: wrap_ufunc(|v| Ok(v[0].exp())),
        });

        // LOG - base-10 logarithm
        self.register(FunctionDef {
            name: "LOG",
            min_args: 1,
            max_args: Some(1),
            implementation: wrap_ufunc(|v| Ok(v[0].log10())),
        });

        // LN
        self.register(FunctionDef {
            name: "LN",
            min_args: 1,
            max_args: Some(1),
            implementation: wrap_ufunc(|v| Ok(v[0].ln())),
        });

        // DEGREES
        self.register(FunctionDef {
            name: "DEGREES",
            min_args: 1,
            max_args: Some(1),
            implementation: wrap_ufunc(|v| Ok(v[0].to_degrees())),
        });

        // RADIANS
        self.register(FunctionDef {
            name: "RADIANS",
            min_args: 1,
            max_args: Some(1),
            implementation: wrap_ufunc(|v| Ok(v[0].to_radians())),
        });

        // MOD
        self.register(FunctionDef {
            name: "MOD",
            min_args: 2,
            max_args: Some(2),
            implementation: wrap_ufunc(math::op_mod),
        });

        // POWER
        self.register(FunctionDef {
            name: "POWER",
            min_args: 2,
            max_args: Some(2),
            implementation: wrap_ufunc(math::op_power),
        });

        // INT - generic wrapper, single scalar argument
        self.register(FunctionDef {
            name: "INT",
            min_args: 1,
            max_args: Some(1),
            implementation: wrap_fn(math::fn_int),
        });

        // PI - plain constant, no wrapper
        self.register(FunctionDef {
            name: "PI",
            min_args: 0,
            max_args: Some(0),
            implementation: Box::new(math::fn_pi),
        });
    }

    fn register_aggregate_functions(&mut self) {
        // SUM
        self.register(FunctionDef {
            name: "SUM",
            min_args: 1,
            max_args: None,
            implementation: wrap_fn(aggregate::fn_sum),
        });

        // MAX
        self.register(FunctionDef {
            name: "MAX",
            min_args: 1,
            max_args: None,
            implementation: wrap_fn(aggregate::fn_max),
        });

        // MIN
        self.register(FunctionDef {
            name: "MIN",
            min_args: 1,
            max_args: None,
            implementation: wrap_fn(aggregate::fn_min),
        });

        // AVERAGE - not strict on embedded errors, unlike SUM/MAX/MIN
        self.register(FunctionDef {
            name: "AVERAGE",
            min_args: 1,
            max_args: None,
            implementation: wrap_fn(aggregate::fn_average),
        });

        // SUMPRODUCT
        self.register(FunctionDef {
            name: "SUMPRODUCT",
            min_args: 1,
            max_args: None,
            implementation: wrap_fn(aggregate::fn_sumproduct),
        });
    }

    fn register_logical_functions(&mut self) {
        // IF
        self.register(FunctionDef {
            name: "IF",
            min_args: 1,
            max_args: Some(3),
            implementation: wrap_fn(logical::fn_if),
        });

        // IFERROR - unwrapped: empty arguments stay empty
        self.register(FunctionDef {
            name: "IFERROR",
            min_args: 2,
            max_args: Some(2),
            implementation: Box::new(logical::fn_iferror),
        });

        // ISERR
        self.register(FunctionDef {
            name: "ISERR",
            min_args: 1,
            max_args: Some(1),
            implementation: Box::new(logical::fn_iserr),
        });

        // ISERROR
        self.register(FunctionDef {
            name: "ISERROR",
            min_args: 1,
            max_args: Some(1),
            implementation: Box::new(logical::fn_iserror),
        });
    }

    fn register_text_functions(&mut self) {
        // LEFT
        self.register(FunctionDef {
            name: "LEFT",
            min_args: 2,
            max_args: Some(2),
            implementation: wrap_fn(text::fn_left),
        });

        // MID
        self.register(FunctionDef {
            name: "MID",
            min_args: 3,
            max_args: Some(3),
            implementation: wrap_fn(text::fn_mid),
        });

        // RIGHT
        self.register(FunctionDef {
            name: "RIGHT",
            min_args: 2,
            max_args: Some(2),
            implementation: wrap_fn(text::fn_right),
        });

        // FIND
        self.register(FunctionDef {
            name: "FIND",
            min_args: 2,
            max_args: Some(3),
            implementation: wrap_fn(text::fn_find),
        });

        // TRIM
        self.register(FunctionDef {
            name: "TRIM",
            min_args: 1,
            max_args: Some(1),
            implementation: wrap_fn(text::fn_trim),
        });

        // LEN - unwrapped: an empty argument reads as the blank string
        self.register(FunctionDef {
            name: "LEN",
            min_args: 1,
            max_args: Some(1),
            implementation: Box::new(text::fn_len),
        });

        // REPLACE
        self.register(FunctionDef {
            name: "REPLACE",
            min_args: 4,
            max_args: Some(4),
            implementation: wrap_fn(text::fn_replace),
        });

        // UPPER
        self.register(FunctionDef {
            name: "UPPER",
            min_args: 1,
            max_args: Some(1),
            implementation: Box::new(text::fn_upper),
        });

        // LOWER
        self.register(FunctionDef {
            name: "LOWER",
            min_args: 1,
            max_args: Some(1),
            implementation: Box::new(text::fn_lower),
        });
    }

    fn register_array_functions(&mut self) {
        // ARRAY
        self.register(FunctionDef {
            name: "ARRAY",
            min_args: 1,
            max_args: None,
            implementation: Box::new(array::fn_array),
        });

        // ARRAYROW
        self.register(FunctionDef {
            name: "ARRAYROW",
            min_args: 1,
            max_args: None,
            implementation: Box::new(array::fn_arrayrow),
        });
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_sensitive() {
        let registry = FunctionRegistry::new();
        assert!(registry.get("SUM").is_some());
        assert!(registry.get("sum").is_none());
    }

    #[test]
    fn test_unknown_name_resolves_and_fails_at_call_time() {
        let registry = FunctionRegistry::new();
        let resolved = registry.lookup("FOURIER");
        let err = resolved.call(&[]).unwrap_err();
        match err {
            FunctionError::NotImplemented(name) => assert_eq!(name, "FOURIER"),
            other => panic!("Expected NotImplemented, got {other:?}"),
        }
    }

    #[test]
    fn test_arity_enforcement() {
        let registry = FunctionRegistry::new();
        let err = registry
            .lookup("MOD")
            .call(&[CellValue::Number(1.0)])
            .unwrap_err();
        match err {
            FunctionError::ArgumentCount {
                function,
                expected,
                actual,
            } => {
                assert_eq!(function, "MOD");
                assert_eq!(expected, "2");
                assert_eq!(actual, 1);
            }
            other => panic!("Expected ArgumentCount, got {other:?}"),
        }
    }
}
