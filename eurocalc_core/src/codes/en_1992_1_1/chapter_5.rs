//! Chapter 5: Structural analysis
//!
//! Geometric imperfections (5.2) and the effective creep ratio used in
//! second-order analysis (5.8.4).

use serde::{Deserialize, Serialize};

use crate::codes::SourceDocument;
use crate::errors::CalcResult;
use crate::formula::{fmt_num, Formula, LatexFormula};
use crate::raise_if_negative;
use crate::units::{Dimensionless, Kn, Knm, Mm, Rad};

/// (5.1) Inclination representing geometric imperfections.
///
/// θ_i = θ_0 · α_h · α_m, with the basic value θ_0 = 1/200 recommended.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InclinationImperfection {
    /// θ_0, basic value (rad)
    pub theta_0: Rad,
    /// α_h, reduction factor for length or height
    pub alpha_h: Dimensionless,
    /// α_m, reduction factor for number of members
    pub alpha_m: Dimensionless,
}

impl Formula for InclinationImperfection {
    const LABEL: &'static str = "5.1";
    const SOURCE_DOCUMENT: SourceDocument = SourceDocument::En1992_1_1_2004;
    type Output = Rad;

    fn validate(&self) -> CalcResult<()> {
        raise_if_negative!(self.theta_0, self.alpha_h, self.alpha_m)
    }

    fn evaluate(&self) -> Rad {
        self.theta_0 * self.alpha_h * self.alpha_m
    }

    fn latex(&self, result: Rad) -> LatexFormula {
        LatexFormula::value(
            r"\theta_{i}",
            r"\theta_{0} \cdot \alpha_{h} \cdot \alpha_{m}",
            format!(
                r"{} \cdot {} \cdot {}",
                fmt_num(self.theta_0),
                fmt_num(self.alpha_h),
                fmt_num(self.alpha_m)
            ),
            result,
        )
    }
}

/// (5.2) Eccentricity of an isolated member due to imperfections.
///
/// e_i = θ_i · l_0 / 2
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImperfectionEccentricity {
    /// θ_i, inclination (rad)
    pub theta_i: Rad,
    /// l_0, effective length (mm)
    pub l_0: Mm,
}

impl Formula for ImperfectionEccentricity {
    const LABEL: &'static str = "5.2";
    const SOURCE_DOCUMENT: SourceDocument = SourceDocument::En1992_1_1_2004;
    type Output = Mm;

    fn validate(&self) -> CalcResult<()> {
        raise_if_negative!(self.theta_i, self.l_0)
    }

    fn evaluate(&self) -> Mm {
        self.theta_i * self.l_0 / 2.0
    }

    fn latex(&self, result: Mm) -> LatexFormula {
        LatexFormula::value(
            "e_{i}",
            r"\theta_{i} \cdot \frac{l_{0}}{2}",
            format!(r"{} \cdot \frac{{{}}}{{2}}", fmt_num(self.theta_i), fmt_num(self.l_0)),
            result,
        )
    }
}

/// (5.3a) Transverse force for an unbraced member.
///
/// H_i = θ_i · N
///
/// Only θ_i is validated: N carries the sign convention of the axial force.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImperfectionHorizontalForce {
    /// θ_i, inclination (rad)
    pub theta_i: Rad,
    /// N, axial force (kN)
    pub n: Kn,
}

impl Formula for ImperfectionHorizontalForce {
    const LABEL: &'static str = "5.3a";
    const SOURCE_DOCUMENT: SourceDocument = SourceDocument::En1992_1_1_2004;
    type Output = Kn;

    fn validate(&self) -> CalcResult<()> {
        raise_if_negative!(self.theta_i)
    }

    fn evaluate(&self) -> Kn {
        self.theta_i * self.n
    }

    fn latex(&self, result: Kn) -> LatexFormula {
        LatexFormula::value(
            "H_{i}",
            r"\theta_{i} \cdot N",
            format!(r"{} \cdot {}", fmt_num(self.theta_i), fmt_num(self.n)),
            result,
        )
    }
}

/// (5.19) Effective creep ratio.
///
/// φ_ef = φ(∞,t_0) · M_0Eqp / M_0Ed
///
/// M_0Ed = 0 gives an infinite ratio; the caller decides what that means.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectiveCreepRatio {
    /// φ(∞,t_0), final creep coefficient
    pub phi_inf_t0: Dimensionless,
    /// M_0Eqp, first order moment in the quasi-permanent combination (kNm)
    pub m0_eqp: Knm,
    /// M_0Ed, first order moment in the design combination (kNm)
    pub m0_ed: Knm,
}

impl Formula for EffectiveCreepRatio {
    const LABEL: &'static str = "5.19";
    const SOURCE_DOCUMENT: SourceDocument = SourceDocument::En1992_1_1_2004;
    type Output = Dimensionless;

    fn validate(&self) -> CalcResult<()> {
        raise_if_negative!(self.phi_inf_t0, self.m0_eqp, self.m0_ed)
    }

    fn evaluate(&self) -> Dimensionless {
        self.phi_inf_t0 * self.m0_eqp / self.m0_ed
    }

    fn latex(&self, result: Dimensionless) -> LatexFormula {
        LatexFormula::value(
            r"\varphi_{ef}",
            r"\varphi(\infty,t_{0}) \cdot \frac{M_{0Eqp}}{M_{0Ed}}",
            format!(
                r"{} \cdot \frac{{{}}}{{{}}}",
                fmt_num(self.phi_inf_t0),
                fmt_num(self.m0_eqp),
                fmt_num(self.m0_ed)
            ),
            result,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CalcError;
    use crate::formula::FormulaResult;
    use approx::assert_relative_eq;

    #[test]
    fn test_inclination_imperfection() {
        let theta_i = FormulaResult::new(InclinationImperfection {
            theta_0: 1.0 / 200.0,
            alpha_h: 2.0 / 3.0,
            alpha_m: 1.0,
        })
        .unwrap();
        assert_relative_eq!(theta_i.value(), 1.0 / 300.0, epsilon = 1e-12);
        assert_eq!(
            theta_i.latex().complete(),
            r"\theta_{i} = \theta_{0} \cdot \alpha_{h} \cdot \alpha_{m} = 0.00500 \cdot 0.67 \cdot 1.00 = 0.00333"
        );
        assert_eq!(theta_i.latex().short(), r"\theta_{i} = 0.00333");
    }

    #[test]
    fn test_imperfection_eccentricity() {
        let e_i = FormulaResult::new(ImperfectionEccentricity { theta_i: 0.005, l_0: 4000.0 }).unwrap();
        assert_relative_eq!(e_i.value(), 10.0, epsilon = 1e-9);
        assert_eq!(
            e_i.latex().complete(),
            r"e_{i} = \theta_{i} \cdot \frac{l_{0}}{2} = 0.00500 \cdot \frac{4000.00}{2} = 10.00"
        );
    }

    #[test]
    fn test_imperfection_eccentricity_keeps_small_inclination() {
        let e_i = FormulaResult::new(ImperfectionEccentricity { theta_i: 0.003, l_0: 4000.0 }).unwrap();
        assert_relative_eq!(e_i.value(), 6.0, epsilon = 1e-9);
        assert_eq!(
            e_i.latex().complete(),
            r"e_{i} = \theta_{i} \cdot \frac{l_{0}}{2} = 0.00300 \cdot \frac{4000.00}{2} = 6.00"
        );
    }

    #[test]
    fn test_horizontal_force_accepts_tension() {
        // Only the inclination is validated
        let h_i = FormulaResult::new(ImperfectionHorizontalForce { theta_i: 0.005, n: -200.0 }).unwrap();
        assert_relative_eq!(h_i.value(), -1.0, epsilon = 1e-12);

        let err = FormulaResult::new(ImperfectionHorizontalForce { theta_i: -0.005, n: 200.0 }).unwrap_err();
        assert_eq!(err, CalcError::negative_value("theta_i", -0.005));
    }

    #[test]
    fn test_effective_creep_ratio() {
        let phi_ef = FormulaResult::new(EffectiveCreepRatio {
            phi_inf_t0: 2.5,
            m0_eqp: 60.0,
            m0_ed: 100.0,
        })
        .unwrap();
        assert_relative_eq!(phi_ef.value(), 1.5, epsilon = 1e-12);
        assert_eq!(phi_ef.latex().short(), r"\varphi_{ef} = 1.50");
    }

    #[test]
    fn test_effective_creep_ratio_zero_design_moment() {
        let phi_ef = FormulaResult::new(EffectiveCreepRatio {
            phi_inf_t0: 2.5,
            m0_eqp: 60.0,
            m0_ed: 0.0,
        })
        .unwrap();
        assert!(phi_ef.value().is_infinite());
    }
}
