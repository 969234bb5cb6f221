//! Chapter 9: Detailing of members and particular rules

use serde::{Deserialize, Serialize};

use crate::codes::SourceDocument;
use crate::errors::CalcResult;
use crate::formula::{fmt_num, Formula, LatexFormula};
use crate::raise_if_negative;
use crate::units::{to_radians, Deg, Dimensionless, Mm, Mm2, Mpa};

/// (9.1N) Minimum longitudinal tension reinforcement in beams.
///
/// A_s,min = 0.26 · f_ctm / f_yk · b_t · d, but not less than 0.0013 · b_t · d
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MinimumTensileReinforcement {
    /// f_ctm, mean tensile strength (MPa)
    pub f_ctm: Mpa,
    /// f_yk, characteristic yield strength of the reinforcement (MPa)
    pub f_yk: Mpa,
    /// b_t, mean width of the tension zone (mm)
    pub b_t: Mm,
    /// d, effective depth (mm)
    pub d: Mm,
}

impl Formula for MinimumTensileReinforcement {
    const LABEL: &'static str = "9.1N";
    const SOURCE_DOCUMENT: SourceDocument = SourceDocument::En1992_1_1_2004;
    type Output = Mm2;

    fn validate(&self) -> CalcResult<()> {
        raise_if_negative!(self.f_ctm, self.f_yk, self.b_t, self.d)
    }

    fn evaluate(&self) -> Mm2 {
        let strength_based = 0.26 * self.f_ctm / self.f_yk * self.b_t * self.d;
        let lower_bound = 0.0013 * self.b_t * self.d;
        strength_based.max(lower_bound)
    }

    fn latex(&self, result: Mm2) -> LatexFormula {
        let b_t = fmt_num(self.b_t);
        let d = fmt_num(self.d);
        LatexFormula::value(
            "A_{s,min}",
            r"\max\left(0.26 \cdot \frac{f_{ctm}}{f_{yk}} \cdot b_{t} \cdot d, 0.0013 \cdot b_{t} \cdot d\right)",
            format!(
                r"\max\left(0.26 \cdot \frac{{{}}}{{{}}} \cdot {b_t} \cdot {d}, 0.0013 \cdot {b_t} \cdot {d}\right)",
                fmt_num(self.f_ctm),
                fmt_num(self.f_yk),
            ),
            result,
        )
    }
}

/// (9.4) Shear reinforcement ratio.
///
/// ρ_w = A_sw / (s · b_w · sin α)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShearReinforcementRatio {
    /// A_sw, area of shear reinforcement within length s (mm²)
    pub a_sw: Mm2,
    /// s, spacing of the shear reinforcement (mm)
    pub s: Mm,
    /// b_w, breadth of the web (mm)
    pub b_w: Mm,
    /// α, angle between shear reinforcement and longitudinal axis (degrees)
    pub alpha: Deg,
}

impl Formula for ShearReinforcementRatio {
    const LABEL: &'static str = "9.4";
    const SOURCE_DOCUMENT: SourceDocument = SourceDocument::En1992_1_1_2004;
    type Output = Dimensionless;

    fn validate(&self) -> CalcResult<()> {
        raise_if_negative!(self.a_sw, self.s, self.b_w, self.alpha)
    }

    fn evaluate(&self) -> Dimensionless {
        self.a_sw / (self.s * self.b_w * to_radians(self.alpha).sin())
    }

    fn latex(&self, result: Dimensionless) -> LatexFormula {
        LatexFormula::value(
            r"\rho_{w}",
            r"\frac{A_{sw}}{s \cdot b_{w} \cdot \sin(\alpha)}",
            format!(
                r"\frac{{{}}}{{{} \cdot {} \cdot \sin({})}}",
                fmt_num(self.a_sw),
                fmt_num(self.s),
                fmt_num(self.b_w),
                fmt_num(self.alpha)
            ),
            result,
        )
    }
}

/// (9.5N) Minimum shear reinforcement ratio.
///
/// ρ_w,min = 0.08 · √f_ck / f_yk
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MinimumShearReinforcementRatio {
    /// f_ck (MPa)
    pub f_ck: Mpa,
    /// f_yk (MPa)
    pub f_yk: Mpa,
}

impl Formula for MinimumShearReinforcementRatio {
    const LABEL: &'static str = "9.5N";
    const SOURCE_DOCUMENT: SourceDocument = SourceDocument::En1992_1_1_2004;
    type Output = Dimensionless;

    fn validate(&self) -> CalcResult<()> {
        raise_if_negative!(self.f_ck, self.f_yk)
    }

    fn evaluate(&self) -> Dimensionless {
        0.08 * self.f_ck.sqrt() / self.f_yk
    }

    fn latex(&self, result: Dimensionless) -> LatexFormula {
        LatexFormula::value(
            r"\rho_{w,min}",
            r"\frac{0.08 \cdot \sqrt{f_{ck}}}{f_{yk}}",
            format!(r"\frac{{0.08 \cdot \sqrt{{{}}}}}{{{}}}", fmt_num(self.f_ck), fmt_num(self.f_yk)),
            result,
        )
    }
}

/// (9.6N) Maximum longitudinal spacing between shear assemblies.
///
/// s_l,max = 0.75 · d · (1 + cot α)
///
/// α = 0 makes cot α infinite; that is passed through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaximumLongitudinalLinkSpacing {
    /// d, effective depth (mm)
    pub d: Mm,
    /// α, inclination of the shear reinforcement (degrees)
    pub alpha: Deg,
}

impl Formula for MaximumLongitudinalLinkSpacing {
    const LABEL: &'static str = "9.6N";
    const SOURCE_DOCUMENT: SourceDocument = SourceDocument::En1992_1_1_2004;
    type Output = Mm;

    fn validate(&self) -> CalcResult<()> {
        raise_if_negative!(self.d, self.alpha)
    }

    fn evaluate(&self) -> Mm {
        0.75 * self.d * (1.0 + 1.0 / to_radians(self.alpha).tan())
    }

    fn latex(&self, result: Mm) -> LatexFormula {
        LatexFormula::value(
            "s_{l,max}",
            r"0.75 \cdot d \cdot (1 + \cot(\alpha))",
            format!(r"0.75 \cdot {} \cdot (1 + \cot({}))", fmt_num(self.d), fmt_num(self.alpha)),
            result,
        )
    }
}

/// (9.7N) Maximum longitudinal spacing of bent-up bars.
///
/// s_b,max = 0.6 · d · (1 + cot α)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaximumBentUpBarSpacing {
    /// d, effective depth (mm)
    pub d: Mm,
    /// α, inclination of the bent-up bars (degrees)
    pub alpha: Deg,
}

impl Formula for MaximumBentUpBarSpacing {
    const LABEL: &'static str = "9.7N";
    const SOURCE_DOCUMENT: SourceDocument = SourceDocument::En1992_1_1_2004;
    type Output = Mm;

    fn validate(&self) -> CalcResult<()> {
        raise_if_negative!(self.d, self.alpha)
    }

    fn evaluate(&self) -> Mm {
        0.6 * self.d * (1.0 + 1.0 / to_radians(self.alpha).tan())
    }

    fn latex(&self, result: Mm) -> LatexFormula {
        LatexFormula::value(
            "s_{b,max}",
            r"0.6 \cdot d \cdot (1 + \cot(\alpha))",
            format!(r"0.6 \cdot {} \cdot (1 + \cot({}))", fmt_num(self.d), fmt_num(self.alpha)),
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
    fn test_minimum_tensile_reinforcement_strength_governs() {
        // C30/37 (f_ctm = 2.9), B500, 300 x 500 beam
        let a_s_min = FormulaResult::new(MinimumTensileReinforcement {
            f_ctm: 2.9,
            f_yk: 500.0,
            b_t: 300.0,
            d: 450.0,
        })
        .unwrap();
        assert_relative_eq!(a_s_min.value(), 203.58, epsilon = 1e-9);
    }

    #[test]
    fn test_minimum_tensile_reinforcement_lower_bound_governs() {
        let a_s_min = FormulaResult::new(MinimumTensileReinforcement {
            f_ctm: 1.6,
            f_yk: 500.0,
            b_t: 300.0,
            d: 450.0,
        })
        .unwrap();
        assert_relative_eq!(a_s_min.value(), 175.5, epsilon = 1e-9);
    }

    #[test]
    fn test_shear_reinforcement_ratio() {
        let rho_w = FormulaResult::new(ShearReinforcementRatio {
            a_sw: 100.0,
            s: 200.0,
            b_w: 250.0,
            alpha: 90.0,
        })
        .unwrap();
        assert_relative_eq!(rho_w.value(), 0.002, epsilon = 1e-12);
    }

    #[test]
    fn test_minimum_shear_reinforcement_ratio() {
        let rho_w_min = FormulaResult::new(MinimumShearReinforcementRatio { f_ck: 25.0, f_yk: 500.0 }).unwrap();
        assert_relative_eq!(rho_w_min.value(), 0.0008, epsilon = 1e-12);
        assert_eq!(rho_w_min.latex().short(), r"\rho_{w,min} = 0.000800");
    }

    #[test]
    fn test_maximum_longitudinal_link_spacing() {
        let s_l_max = FormulaResult::new(MaximumLongitudinalLinkSpacing { d: 100.0, alpha: 85.0 }).unwrap();
        assert!(s_l_max.approx_eq(81.56164976, 1e-9));
        assert_eq!(s_l_max.latex().short(), "s_{l,max} = 81.56");
    }

    #[test]
    fn test_maximum_longitudinal_link_spacing_vertical_links() {
        let s_l_max = FormulaResult::new(MaximumLongitudinalLinkSpacing { d: 400.0, alpha: 90.0 }).unwrap();
        assert_relative_eq!(s_l_max.value(), 300.0, epsilon = 1e-9);
    }

    #[test]
    fn test_maximum_longitudinal_link_spacing_negative_angle() {
        let err = FormulaResult::new(MaximumLongitudinalLinkSpacing { d: 100.0, alpha: -85.0 }).unwrap_err();
        assert_eq!(err, CalcError::negative_value("alpha", -85.0));
    }

    #[test]
    fn test_maximum_bent_up_bar_spacing() {
        let s_b_max = FormulaResult::new(MaximumBentUpBarSpacing { d: 500.0, alpha: 45.0 }).unwrap();
        assert_relative_eq!(s_b_max.value(), 600.0, epsilon = 1e-9);
    }
}
