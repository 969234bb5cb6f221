//! # eurocalc_core - Eurocode Formula Catalog
//!
//! `eurocalc_core` is a catalog of structural design formulas from the
//! Eurocodes, plus lookup tables of standard steel profiles. Every formula is
//! a small input record that validates its inputs, evaluates once and renders
//! the derivation as LaTeX.
//!
//! ## Design Philosophy
//!
//! - **Pure**: evaluation has no state and no I/O
//! - **Validated**: negative inputs are rejected before anything is computed
//! - **Numeric**: results compare and combine like plain numbers
//! - **Auditable**: every result can render its own substitution
//!
//! ## Quick Start
//!
//! ```rust
//! use eurocalc_core::codes::en_1993_1_1::FrameSwayImperfectionCriterion;
//! use eurocalc_core::FormulaResult;
//!
//! let check = FormulaResult::new(FrameSwayImperfectionCriterion { h_ed: 50000.0, v_ed: 100000.0 })?;
//! assert!(check == true);
//! assert!(check.unity_check() > 3.33);
//! println!("{}", check.latex().complete());
//! # Ok::<(), eurocalc_core::CalcError>(())
//! ```
//!
//! ## Modules
//!
//! - [`codes`] - Formulas, one module per standard and one file per chapter
//! - [`formula`] - The formula contract, results and LaTeX rendering
//! - [`registry`] - Clause lookup, metadata and dynamic evaluation
//! - [`profiles`] - IPE, HEA and HEB section tables
//! - [`validation`] - Input guards
//! - [`units`] - Unit aliases and conversions
//! - [`errors`] - Structured error types

pub mod codes;
pub mod errors;
pub mod formula;
pub mod profiles;
pub mod registry;
pub mod units;
pub mod validation;

// Re-export commonly used types at crate root for convenience
pub use codes::SourceDocument;
pub use errors::{CalcError, CalcResult};
pub use formula::{Formula, FormulaOutput, FormulaResult, LatexFormula, UnityCheck};
pub use profiles::{ProfileSeries, SteelProfile};
pub use registry::{Clause, Evaluation};
