//! # Formula Abstraction
//!
//! Every catalog clause is an input record implementing [`Formula`]. The
//! record only declares its inputs, which of them must be non-negative, the
//! expression and the LaTeX template. [`FormulaResult`] does the rest:
//!
//! - validates the inputs (nothing is evaluated when validation fails)
//! - evaluates once and stores the value next to the inputs
//! - compares against plain numbers (`==`, `<`, [`FormulaResult::approx_eq`])
//! - renders the derivation from the stored inputs and value
//!
//! ## Example
//!
//! ```rust
//! use eurocalc_core::codes::en_1992_1_1::VerticalLargeBarReinforcement;
//! use eurocalc_core::formula::FormulaResult;
//!
//! let a_sv = FormulaResult::new(VerticalLargeBarReinforcement { a_s: 100.0, n_2: 2.0 })?;
//! assert!(a_sv == 50.0);
//! assert_eq!(a_sv.latex().short(), "A_{sv} = 50.00");
//! # Ok::<(), eurocalc_core::CalcError>(())
//! ```

pub mod latex;

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use serde::{Deserialize, Serialize};

use crate::codes::SourceDocument;
use crate::errors::CalcResult;

pub use latex::{fmt_num, LatexFormula};

// ============================================================================
// Formula Values
// ============================================================================

/// Type of value a formula produces: `f64` for value formulas, `bool` for checks.
pub trait FormulaValue: Copy + PartialEq + fmt::Debug + fmt::Display {
    /// Wrap into the type-erased output used by the registry
    fn into_output(self) -> FormulaOutput;
}

impl FormulaValue for f64 {
    fn into_output(self) -> FormulaOutput {
        FormulaOutput::Number(self)
    }
}

impl FormulaValue for bool {
    fn into_output(self) -> FormulaOutput {
        FormulaOutput::Check(self)
    }
}

/// Type-erased formula value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormulaOutput {
    Number(f64),
    Check(bool),
}

impl FormulaOutput {
    /// Numeric value; checks map to 1.0 (pass) and 0.0 (fail)
    pub fn as_f64(&self) -> f64 {
        match self {
            FormulaOutput::Number(value) => *value,
            FormulaOutput::Check(passes) => f64::from(u8::from(*passes)),
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FormulaOutput::Check(passes) => Some(*passes),
            FormulaOutput::Number(_) => None,
        }
    }
}

impl fmt::Display for FormulaOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormulaOutput::Number(value) => write!(f, "{}", value),
            FormulaOutput::Check(passes) => write!(f, "{}", passes),
        }
    }
}

// ============================================================================
// Formula Contract
// ============================================================================

/// Contract implemented by every clause of the catalog.
///
/// Implementors are plain input records. `evaluate` and `latex` must be pure:
/// the same record always yields the same value and the same text.
pub trait Formula: fmt::Debug {
    /// Equation number within the source document (e.g. `"6.58"`)
    const LABEL: &'static str;

    /// Standard the equation comes from
    const SOURCE_DOCUMENT: SourceDocument;

    /// `f64` or `bool`
    type Output: FormulaValue;

    /// Reject invalid inputs. Called before [`Formula::evaluate`].
    fn validate(&self) -> CalcResult<()>;

    /// Compute the result from the stored inputs.
    fn evaluate(&self) -> Self::Output;

    /// Derivation of the calculation for the given result.
    fn latex(&self, result: Self::Output) -> LatexFormula;
}

/// Demand-to-capacity ratio of a check formula.
///
/// Below or equal to 1.0 means the check passes with margin `1 - ratio`,
/// except where a formula documents the inverse orientation.
pub trait UnityCheck {
    fn unity_check(&self) -> f64;
}

// ============================================================================
// Formula Result
// ============================================================================

/// A validated, evaluated formula.
///
/// Fields are private so the stored value can never drift from the inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormulaResult<F: Formula> {
    inputs: F,
    value: F::Output,
}

impl<F: Formula> FormulaResult<F> {
    /// Validate `inputs`, evaluate, and store both.
    pub fn new(inputs: F) -> CalcResult<Self> {
        inputs.validate()?;
        let value = inputs.evaluate();
        tracing::trace!(
            document = %F::SOURCE_DOCUMENT,
            label = F::LABEL,
            value = %value,
            "evaluated formula"
        );
        Ok(Self { inputs, value })
    }

    /// The evaluated result
    pub fn value(&self) -> F::Output {
        self.value
    }

    /// The inputs the result was computed from
    pub fn inputs(&self) -> &F {
        &self.inputs
    }

    pub fn label(&self) -> &'static str {
        F::LABEL
    }

    pub fn source_document(&self) -> SourceDocument {
        F::SOURCE_DOCUMENT
    }

    /// Derivation built from the stored inputs and value.
    pub fn latex(&self) -> LatexFormula {
        self.inputs.latex(self.value)
    }

    /// Type-erased value
    pub fn output(&self) -> FormulaOutput {
        self.value.into_output()
    }
}

impl<F: Formula + UnityCheck> FormulaResult<F> {
    /// Demand-to-capacity ratio of the stored inputs.
    pub fn unity_check(&self) -> f64 {
        self.inputs.unity_check()
    }
}

impl<F: Formula<Output = f64>> FormulaResult<F> {
    /// Relative-tolerance comparison, `|a - b| <= rel_tol * max(|a|, |b|)`.
    pub fn approx_eq(&self, other: f64, rel_tol: f64) -> bool {
        if self.value == other {
            return true;
        }
        (self.value - other).abs() <= rel_tol * self.value.abs().max(other.abs())
    }
}

impl<F: Formula> fmt::Display for FormulaResult<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

// ============================================================================
// Numeric Interoperability
// ============================================================================

impl<F: Formula<Output = f64>> PartialEq<f64> for FormulaResult<F> {
    fn eq(&self, other: &f64) -> bool {
        self.value == *other
    }
}

impl<F: Formula<Output = f64>> PartialOrd<f64> for FormulaResult<F> {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.value.partial_cmp(other)
    }
}

impl<F: Formula<Output = f64>> PartialEq<FormulaResult<F>> for f64 {
    fn eq(&self, other: &FormulaResult<F>) -> bool {
        *self == other.value
    }
}

impl<F: Formula<Output = f64>> PartialOrd<FormulaResult<F>> for f64 {
    fn partial_cmp(&self, other: &FormulaResult<F>) -> Option<Ordering> {
        self.partial_cmp(&other.value)
    }
}

impl<F: Formula<Output = bool>> PartialEq<bool> for FormulaResult<F> {
    fn eq(&self, other: &bool) -> bool {
        self.value == *other
    }
}

impl<F: Formula<Output = f64>> From<FormulaResult<F>> for f64 {
    fn from(result: FormulaResult<F>) -> Self {
        result.value
    }
}

impl<F: Formula<Output = bool>> From<FormulaResult<F>> for bool {
    fn from(result: FormulaResult<F>) -> Self {
        result.value
    }
}

macro_rules! impl_arithmetic {
    ($($trait:ident :: $method:ident),+) => {
        $(
            impl<F: Formula<Output = f64>> $trait<f64> for FormulaResult<F> {
                type Output = f64;
                fn $method(self, rhs: f64) -> f64 {
                    self.value.$method(rhs)
                }
            }

            impl<F: Formula<Output = f64>> $trait<FormulaResult<F>> for f64 {
                type Output = f64;
                fn $method(self, rhs: FormulaResult<F>) -> f64 {
                    self.$method(rhs.value)
                }
            }
        )+
    };
}

impl_arithmetic!(Add::add, Sub::sub, Mul::mul, Div::div);
