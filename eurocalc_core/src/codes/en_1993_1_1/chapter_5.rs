//! Chapter 5: Structural analysis
//!
//! Global sway imperfections of frames (5.3.2).

use serde::{Deserialize, Serialize};

use crate::codes::SourceDocument;
use crate::errors::CalcResult;
use crate::formula::{fmt_num, Formula, LatexFormula, UnityCheck};
use crate::raise_if_negative;
use crate::units::{Dimensionless, Kn, Rad};

/// Fraction of the vertical load the horizontal load must reach before sway
/// imperfections may be disregarded (5.3.2(4)).
pub const SWAY_IMPERFECTION_LOAD_FRACTION: Dimensionless = 0.15;

/// (5.5) Global initial sway imperfection.
///
/// φ = φ_0 · α_h · α_m, with φ_0 = 1/200.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlobalSwayImperfection {
    /// φ_0, basic value (rad)
    pub phi_0: Rad,
    /// α_h, reduction factor for height
    pub alpha_h: Dimensionless,
    /// α_m, reduction factor for the number of columns in a row
    pub alpha_m: Dimensionless,
}

impl Formula for GlobalSwayImperfection {
    const LABEL: &'static str = "5.5";
    const SOURCE_DOCUMENT: SourceDocument = SourceDocument::En1993_1_1_2005;
    type Output = Rad;

    fn validate(&self) -> CalcResult<()> {
        raise_if_negative!(self.phi_0, self.alpha_h, self.alpha_m)
    }

    fn evaluate(&self) -> Rad {
        self.phi_0 * self.alpha_h * self.alpha_m
    }

    fn latex(&self, result: Rad) -> LatexFormula {
        LatexFormula::value(
            r"\phi",
            r"\phi_{0} \cdot \alpha_{h} \cdot \alpha_{m}",
            format!(
                r"{} \cdot {} \cdot {}",
                fmt_num(self.phi_0),
                fmt_num(self.alpha_h),
                fmt_num(self.alpha_m)
            ),
            result,
        )
    }
}

/// (5.7) Criterion for disregarding sway imperfections in building frames.
///
/// H_Ed ≥ 0.15 · V_Ed
///
/// The result is `true` when the horizontal load is large enough for sway
/// imperfections to be disregarded. The unity check is
/// H_Ed / (0.15 · V_Ed), so values of 1.0 and above pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameSwayImperfectionCriterion {
    /// H_Ed, design value of the total horizontal load (kN)
    pub h_ed: Kn,
    /// V_Ed, design value of the total vertical load (kN)
    pub v_ed: Kn,
}

/// Name used for the same criterion in frame tilt checks.
pub type FrameTiltCriterion = FrameSwayImperfectionCriterion;

impl FrameSwayImperfectionCriterion {
    /// Right-hand side of the criterion, 0.15 · V_Ed
    pub fn limit(&self) -> Kn {
        SWAY_IMPERFECTION_LOAD_FRACTION * self.v_ed
    }
}

impl Formula for FrameSwayImperfectionCriterion {
    const LABEL: &'static str = "5.7";
    const SOURCE_DOCUMENT: SourceDocument = SourceDocument::En1993_1_1_2005;
    type Output = bool;

    fn validate(&self) -> CalcResult<()> {
        raise_if_negative!(self.h_ed, self.v_ed)
    }

    fn evaluate(&self) -> bool {
        self.h_ed >= self.limit()
    }

    fn latex(&self, result: bool) -> LatexFormula {
        LatexFormula::check(
            r"H_{Ed} \geq 0.15 \cdot V_{Ed}",
            format!(r"{} \geq 0.15 \cdot {}", fmt_num(self.h_ed), fmt_num(self.v_ed)),
            result,
        )
    }
}

impl UnityCheck for FrameSwayImperfectionCriterion {
    fn unity_check(&self) -> f64 {
        self.h_ed / self.limit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CalcError;
    use crate::formula::FormulaResult;
    use approx::assert_relative_eq;

    #[test]
    fn test_global_sway_imperfection() {
        let phi = FormulaResult::new(GlobalSwayImperfection {
            phi_0: 1.0 / 200.0,
            alpha_h: 1.0,
            alpha_m: 0.5_f64.sqrt(),
        })
        .unwrap();
        assert_relative_eq!(phi.value(), 0.003_535_533_9, epsilon = 1e-9);
        assert_eq!(
            phi.latex().complete(),
            r"\phi = \phi_{0} \cdot \alpha_{h} \cdot \alpha_{m} = 0.00500 \cdot 1.00 \cdot 0.71 = 0.00354"
        );
    }

    #[test]
    fn test_frame_sway_criterion_passes() {
        let check = FormulaResult::new(FrameSwayImperfectionCriterion {
            h_ed: 50000.0,
            v_ed: 100000.0,
        })
        .unwrap();
        assert!(check == true);
        assert_relative_eq!(check.unity_check(), 50000.0 / (0.15 * 100000.0));
        assert_eq!(
            check.latex().complete(),
            r"\text{CHECK} \to H_{Ed} \geq 0.15 \cdot V_{Ed} \to 50000.00 \geq 0.15 \cdot 100000.00 \to \text{OK}"
        );
        assert_eq!(check.latex().short(), r"\text{CHECK} \to \text{OK}");
    }

    #[test]
    fn test_frame_sway_criterion_fails() {
        let check = FormulaResult::new(FrameTiltCriterion { h_ed: 10.0, v_ed: 100.0 }).unwrap();
        assert!(check == false);
        assert!(check.unity_check() < 1.0);
        assert_eq!(check.latex().short(), r"\text{CHECK} \to \text{Not OK}");
    }

    #[test]
    fn test_frame_sway_criterion_boundary() {
        let check = FormulaResult::new(FrameSwayImperfectionCriterion { h_ed: 15.0, v_ed: 100.0 }).unwrap();
        assert!(check == true);
    }

    #[test]
    fn test_frame_sway_criterion_negative_vertical_load() {
        let err = FormulaResult::new(FrameSwayImperfectionCriterion {
            h_ed: 50000.0,
            v_ed: -100000.0,
        })
        .unwrap_err();
        assert_eq!(err, CalcError::negative_value("v_ed", -100000.0));
    }
}
