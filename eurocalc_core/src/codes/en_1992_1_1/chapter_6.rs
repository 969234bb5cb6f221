//! Chapter 6: Ultimate limit states

use serde::{Deserialize, Serialize};

use crate::codes::SourceDocument;
use crate::errors::CalcResult;
use crate::formula::{fmt_num, Formula, LatexFormula};
use crate::raise_if_negative;
use crate::units::{n_to_kn, to_radians, Deg, Dimensionless, Kn, Mm, Mm2, Mpa};

/// (6.6N) Strength reduction factor for concrete cracked in shear.
///
/// ν = 0.6 · (1 − f_ck / 250)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrengthReductionFactor {
    /// f_ck (MPa)
    pub f_ck: Mpa,
}

impl Formula for StrengthReductionFactor {
    const LABEL: &'static str = "6.6N";
    const SOURCE_DOCUMENT: SourceDocument = SourceDocument::En1992_1_1_2004;
    type Output = Dimensionless;

    fn validate(&self) -> CalcResult<()> {
        raise_if_negative!(self.f_ck)
    }

    fn evaluate(&self) -> Dimensionless {
        0.6 * (1.0 - self.f_ck / 250.0)
    }

    fn latex(&self, result: Dimensionless) -> LatexFormula {
        LatexFormula::value(
            r"\nu",
            r"0.6 \cdot \left(1 - \frac{f_{ck}}{250}\right)",
            format!(r"0.6 \cdot \left(1 - \frac{{{}}}{{250}}\right)", fmt_num(self.f_ck)),
            result,
        )
    }
}

/// (6.8) Shear resistance of members with vertical shear reinforcement.
///
/// V_Rd,s = A_sw / s · z · f_ywd · cot θ, returned in kN.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShearReinforcementResistance {
    /// A_sw, cross-sectional area of the shear reinforcement (mm²)
    pub a_sw: Mm2,
    /// s, spacing of the stirrups (mm)
    pub s: Mm,
    /// z, inner lever arm (mm)
    pub z: Mm,
    /// f_ywd, design yield strength of the shear reinforcement (MPa)
    pub f_ywd: Mpa,
    /// θ, strut angle (degrees)
    pub theta: Deg,
}

impl Formula for ShearReinforcementResistance {
    const LABEL: &'static str = "6.8";
    const SOURCE_DOCUMENT: SourceDocument = SourceDocument::En1992_1_1_2004;
    type Output = Kn;

    fn validate(&self) -> CalcResult<()> {
        raise_if_negative!(self.a_sw, self.s, self.z, self.f_ywd, self.theta)
    }

    fn evaluate(&self) -> Kn {
        let cot_theta = 1.0 / to_radians(self.theta).tan();
        n_to_kn(self.a_sw / self.s * self.z * self.f_ywd * cot_theta)
    }

    fn latex(&self, result: Kn) -> LatexFormula {
        LatexFormula::value(
            "V_{Rd,s}",
            r"\frac{A_{sw}}{s} \cdot z \cdot f_{ywd} \cdot \cot(\theta)",
            format!(
                r"\frac{{{}}}{{{}}} \cdot {} \cdot {} \cdot \cot({}) \cdot 10^{{-3}}",
                fmt_num(self.a_sw),
                fmt_num(self.s),
                fmt_num(self.z),
                fmt_num(self.f_ywd),
                fmt_num(self.theta)
            ),
            result,
        )
    }
}

/// (6.58) Transverse tie force in a partial discontinuity region.
///
/// T = ¼ · (h − c) / h · N_Ed
///
/// `h` is the width the force spreads to and `c` the width it enters through
/// (b and a in Figure 6.25). No check that c ≤ h; a wider entry than spread
/// width gives a negative tie force.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PartialDiscontinuityTieForce {
    /// c, width of the loaded area (mm)
    pub c: Mm,
    /// h, width of the spread (mm)
    pub h: Mm,
    /// N_Ed, applied force (kN)
    pub n_ed: Kn,
}

impl Formula for PartialDiscontinuityTieForce {
    const LABEL: &'static str = "6.58";
    const SOURCE_DOCUMENT: SourceDocument = SourceDocument::En1992_1_1_2004;
    type Output = Kn;

    fn validate(&self) -> CalcResult<()> {
        raise_if_negative!(self.c, self.h, self.n_ed)
    }

    fn evaluate(&self) -> Kn {
        0.25 * (self.h - self.c) / self.h * self.n_ed
    }

    fn latex(&self, result: Kn) -> LatexFormula {
        LatexFormula::value(
            "T",
            r"\frac{1}{4} \cdot \frac{h - c}{h} \cdot N_{Ed}",
            format!(
                r"\frac{{1}}{{4}} \cdot \frac{{{h} - {c}}}{{{h}}} \cdot {n}",
                h = fmt_num(self.h),
                c = fmt_num(self.c),
                n = fmt_num(self.n_ed)
            ),
            result,
        )
    }
}

/// Value at an outer fibre from the value at an inner fibre, assuming the
/// linear distribution of plane sections (6.1(2)).
///
/// r_e = r · z_e / z_i
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearFibreExtrapolation {
    /// r, strain, stress or force at the inner fibre
    pub r: f64,
    /// z_e, distance of the outer fibre to the neutral axis (mm)
    pub z_e: Mm,
    /// z_i, distance of the inner fibre to the neutral axis (mm)
    pub z_i: Mm,
}

impl Formula for LinearFibreExtrapolation {
    const LABEL: &'static str = "6.1(2)";
    const SOURCE_DOCUMENT: SourceDocument = SourceDocument::En1992_1_1_2004;
    type Output = f64;

    fn validate(&self) -> CalcResult<()> {
        raise_if_negative!(self.r, self.z_e, self.z_i)
    }

    fn evaluate(&self) -> f64 {
        self.r * self.z_e / self.z_i
    }

    fn latex(&self, result: f64) -> LatexFormula {
        LatexFormula::value(
            "r_{e}",
            r"r \cdot \frac{z_{e}}{z_{i}}",
            format!(
                r"{} \cdot \frac{{{}}}{{{}}}",
                fmt_num(self.r),
                fmt_num(self.z_e),
                fmt_num(self.z_i)
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
    fn test_strength_reduction_factor() {
        let nu = FormulaResult::new(StrengthReductionFactor { f_ck: 30.0 }).unwrap();
        assert_relative_eq!(nu.value(), 0.528, epsilon = 1e-12);
        assert_eq!(nu.latex().short(), r"\nu = 0.53");
    }

    #[test]
    fn test_shear_reinforcement_resistance() {
        // Ø8 two-legged stirrups at 150, z = 450, f_ywd = 435, θ = 45°
        let v_rd_s = FormulaResult::new(ShearReinforcementResistance {
            a_sw: 100.53,
            s: 150.0,
            z: 450.0,
            f_ywd: 435.0,
            theta: 45.0,
        })
        .unwrap();
        assert_relative_eq!(v_rd_s.value(), 131.19165, epsilon = 1e-3);
    }

    #[test]
    fn test_shear_reinforcement_resistance_zero_angle_is_not_trapped() {
        let v_rd_s = FormulaResult::new(ShearReinforcementResistance {
            a_sw: 100.0,
            s: 150.0,
            z: 450.0,
            f_ywd: 435.0,
            theta: 0.0,
        })
        .unwrap();
        assert!(v_rd_s.value().is_infinite());
    }

    #[test]
    fn test_partial_discontinuity_tie_force() {
        let t = FormulaResult::new(PartialDiscontinuityTieForce { c: 50.0, h: 100.0, n_ed: 200.0 }).unwrap();
        assert!(t == 25.0);
        assert_eq!(
            t.latex().complete(),
            r"T = \frac{1}{4} \cdot \frac{h - c}{h} \cdot N_{Ed} = \frac{1}{4} \cdot \frac{100.00 - 50.00}{100.00} \cdot 200.00 = 25.00"
        );
    }

    #[test]
    fn test_partial_discontinuity_tie_force_negative_force() {
        let err = FormulaResult::new(PartialDiscontinuityTieForce { c: 50.0, h: 100.0, n_ed: -200.0 }).unwrap_err();
        assert_eq!(err, CalcError::negative_value("n_ed", -200.0));
    }

    #[test]
    fn test_linear_fibre_extrapolation() {
        let r_e = FormulaResult::new(LinearFibreExtrapolation { r: 100.0, z_e: 50.0, z_i: 20.0 }).unwrap();
        assert!(r_e == 250.0);
        assert_eq!(r_e.latex().short(), "r_{e} = 250.00");
    }
}
