//! LaTeX derivation rendering.
//!
//! A [`LatexFormula`] holds the four pieces of a derivation: the symbol being
//! computed, the symbolic equation, the equation with numbers substituted and
//! the result. It renders two forms:
//!
//! ```text
//! complete:  A_{sv} = 0.25 \cdot A_{s} \cdot n_{2} = 0.25 \cdot 100.00 \cdot 2.00 = 50.00
//! short:     A_{sv} = 50.00
//! ```
//!
//! Check formulas chain with arrows and end in a verdict instead:
//!
//! ```text
//! complete:  \text{CHECK} \to H_{Ed} \geq 0.15 \cdot V_{Ed} \to 50000.00 \geq 0.15 \cdot 100000.00 \to \text{OK}
//! short:     \text{CHECK} \to \text{OK}
//! ```

use serde::{Deserialize, Serialize};

/// Return symbol used by check formulas
pub const CHECK_SYMBOL: &str = r"\text{CHECK}";
/// Verdict for a satisfied check
pub const VERDICT_OK: &str = r"\text{OK}";
/// Verdict for a failed check
pub const VERDICT_NOT_OK: &str = r"\text{Not OK}";

/// Operator joining the terms of a value derivation
const EQUALS: &str = "=";
/// Operator joining the terms of a check derivation
const ARROW: &str = r"\to";

/// Magnitudes below this are printed to significant figures instead of two decimals
const SMALL_MAGNITUDE: f64 = 0.1;
/// Significant figures kept for small magnitudes (angles in rad, reinforcement ratios)
const SMALL_SIGNIFICANT_FIGURES: i32 = 3;
const MAX_DECIMALS: usize = 12;

/// Format a number the way every derivation prints it.
///
/// Two decimals, except for non-zero magnitudes below 0.1, which keep three
/// significant figures (`0.00500` rather than `0.01`).
pub fn fmt_num(value: f64) -> String {
    let magnitude = value.abs();
    if !value.is_finite() || magnitude == 0.0 || magnitude >= SMALL_MAGNITUDE {
        return format!("{:.2}", value);
    }
    let leading_digit = magnitude.log10().floor() as i32;
    let decimals = (SMALL_SIGNIFICANT_FIGURES - 1 - leading_digit).max(2) as usize;
    format!("{:.*}", decimals.min(MAX_DECIMALS), value)
}

/// Textual derivation of a single formula evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LatexFormula {
    /// Symbol on the left-hand side (e.g. `A_{sv}`)
    pub return_symbol: String,
    /// Formatted result (e.g. `50.00`, `\text{OK}`)
    pub result: String,
    /// Symbolic right-hand side
    pub equation: String,
    /// Right-hand side with numeric inputs substituted
    pub numeric_equation: String,
    /// Operator chaining the terms (`=` or `\to`)
    pub comparison_operator: String,
}

impl LatexFormula {
    /// Derivation of a value formula.
    pub fn value(
        return_symbol: impl Into<String>,
        equation: impl Into<String>,
        numeric_equation: impl Into<String>,
        result: f64,
    ) -> Self {
        Self {
            return_symbol: return_symbol.into(),
            result: fmt_num(result),
            equation: equation.into(),
            numeric_equation: numeric_equation.into(),
            comparison_operator: EQUALS.to_string(),
        }
    }

    /// Derivation of a check formula ending in a verdict.
    pub fn check(equation: impl Into<String>, numeric_equation: impl Into<String>, passes: bool) -> Self {
        Self {
            return_symbol: CHECK_SYMBOL.to_string(),
            result: verdict(passes).to_string(),
            equation: equation.into(),
            numeric_equation: numeric_equation.into(),
            comparison_operator: ARROW.to_string(),
        }
    }

    /// Full derivation: symbol, equation, substituted equation and result.
    pub fn complete(&self) -> String {
        let op = &self.comparison_operator;
        format!(
            "{} {op} {} {op} {} {op} {}",
            self.return_symbol, self.equation, self.numeric_equation, self.result
        )
    }

    /// Symbol and result only.
    pub fn short(&self) -> String {
        format!("{} {} {}", self.return_symbol, self.comparison_operator, self.result)
    }

    /// True when this derivation came from a check formula
    pub fn is_check(&self) -> bool {
        self.return_symbol == CHECK_SYMBOL
    }
}

impl std::fmt::Display for LatexFormula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.complete())
    }
}

/// Verdict token for a check result
pub fn verdict(passes: bool) -> &'static str {
    if passes {
        VERDICT_OK
    } else {
        VERDICT_NOT_OK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_rendering() {
        let latex = LatexFormula::value(
            "A_{sv}",
            r"0.25 \cdot A_{s} \cdot n_{2}",
            r"0.25 \cdot 100.00 \cdot 2.00",
            50.0,
        );
        assert_eq!(
            latex.complete(),
            r"A_{sv} = 0.25 \cdot A_{s} \cdot n_{2} = 0.25 \cdot 100.00 \cdot 2.00 = 50.00"
        );
        assert_eq!(latex.short(), "A_{sv} = 50.00");
        assert!(!latex.is_check());
    }

    #[test]
    fn test_check_rendering() {
        let latex = LatexFormula::check(r"H_{Ed} \geq 0.15 \cdot V_{Ed}", r"1.00 \geq 0.15 \cdot 100.00", false);
        assert_eq!(
            latex.complete(),
            r"\text{CHECK} \to H_{Ed} \geq 0.15 \cdot V_{Ed} \to 1.00 \geq 0.15 \cdot 100.00 \to \text{Not OK}"
        );
        assert_eq!(latex.short(), r"\text{CHECK} \to \text{Not OK}");
        assert!(latex.is_check());
    }

    #[test]
    fn test_fmt_num_rounds_to_two_decimals() {
        assert_eq!(fmt_num(81.56164976), "81.56");
        assert_eq!(fmt_num(3.335), "3.33");
        assert_eq!(fmt_num(0.0), "0.00");
        assert_eq!(fmt_num(0.6667), "0.67");
        assert_eq!(fmt_num(0.1), "0.10");
    }

    #[test]
    fn test_fmt_num_keeps_small_values_significant() {
        assert_eq!(fmt_num(1.0 / 200.0), "0.00500");
        assert_eq!(fmt_num(1.0 / 300.0), "0.00333");
        assert_eq!(fmt_num(0.0008), "0.000800");
        assert_eq!(fmt_num(0.05), "0.0500");
        assert_eq!(fmt_num(-0.003), "-0.00300");
    }

    #[test]
    fn test_fmt_num_non_finite() {
        assert_eq!(fmt_num(f64::NAN), "NaN");
        assert_eq!(fmt_num(f64::INFINITY), "inf");
    }
}
