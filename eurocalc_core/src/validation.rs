//! # Input Validation
//!
//! Guards run by every formula before it evaluates. A formula lists the
//! inputs that must be non-negative; zero is accepted.
//!
//! ## Example
//!
//! ```rust
//! use eurocalc_core::raise_if_negative;
//! use eurocalc_core::validation::raise_if_negative;
//!
//! assert!(raise_if_negative(&[("a_s", 100.0), ("n_2", 2.0)]).is_ok());
//!
//! let d = 100.0;
//! let alpha = -5.0;
//! assert!(raise_if_negative!(d, alpha).is_err());
//! ```

use crate::errors::{CalcError, CalcResult};

/// Fail with [`CalcError::NegativeValue`] on the first named value below zero.
///
/// Values are checked in the order given. `NaN` is not negative and passes.
pub fn raise_if_negative(values: &[(&str, f64)]) -> CalcResult<()> {
    match values.iter().find(|(_, value)| *value < 0.0) {
        Some((field, value)) => Err(CalcError::negative_value(*field, *value)),
        None => Ok(()),
    }
}

/// Shorthand for [`raise_if_negative`] that takes the field names from the
/// expressions themselves.
///
/// `raise_if_negative!(self.a_s, self.n_2)` reports `a_s` or `n_2`.
#[macro_export]
macro_rules! raise_if_negative {
    ($($value:expr),+ $(,)?) => {
        $crate::validation::raise_if_negative(&[
            $(($crate::validation::field_name(stringify!($value)), $value)),+
        ])
    };
}

/// Strip a `self.` prefix (and whitespace) from a stringified expression.
#[doc(hidden)]
pub fn field_name(expr: &'static str) -> &'static str {
    let trimmed = expr.trim();
    trimmed.strip_prefix("self.").unwrap_or(trimmed).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_zero_and_positive() {
        assert!(raise_if_negative(&[("a", 0.0), ("b", 1.0), ("c", 1e9)]).is_ok());
        assert!(raise_if_negative(&[]).is_ok());
    }

    #[test]
    fn test_reports_first_negative() {
        let err = raise_if_negative(&[("a", 1.0), ("b", -2.0), ("c", -3.0)]).unwrap_err();
        assert_eq!(err, CalcError::negative_value("b", -2.0));
    }

    #[test]
    fn test_macro_uses_field_names() {
        struct Inputs {
            h_ed: f64,
            v_ed: f64,
        }
        impl Inputs {
            fn check(&self) -> CalcResult<()> {
                raise_if_negative!(self.h_ed, self.v_ed)
            }
        }

        let err = Inputs { h_ed: 1.0, v_ed: -100000.0 }.check().unwrap_err();
        assert_eq!(err, CalcError::negative_value("v_ed", -100000.0));
    }

    #[test]
    fn test_negative_zero_is_allowed() {
        assert!(raise_if_negative(&[("x", -0.0)]).is_ok());
    }
}
