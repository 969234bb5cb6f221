//! Chapter 6: Ultimate limit states
//!
//! Cross-section resistances (6.2) and flexural buckling of uniform members
//! in compression (6.3.1). Areas in mm², moduli in mm³, stresses in MPa;
//! resistances are returned in kN and kNm.

use serde::{Deserialize, Serialize};

use crate::codes::SourceDocument;
use crate::errors::CalcResult;
use crate::formula::{fmt_num, Formula, LatexFormula, UnityCheck};
use crate::raise_if_negative;
use crate::units::{n_to_kn, nmm_to_knm, Dimensionless, Kn, Knm, Mm, Mm2, Mm3, Mpa};

/// Slenderness below which flexural buckling has no effect (6.3.1.2(4))
pub const PLATEAU_SLENDERNESS: Dimensionless = 0.2;

/// (6.2) Linear summation of utilization ratios.
///
/// N_Ed / N_Rd + M_y,Ed / M_y,Rd + M_z,Ed / M_z,Rd ≤ 1
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearInteractionCheck {
    /// N_Ed (kN)
    pub n_ed: Kn,
    /// N_Rd (kN)
    pub n_rd: Kn,
    /// M_y,Ed (kNm)
    pub m_y_ed: Knm,
    /// M_y,Rd (kNm)
    pub m_y_rd: Knm,
    /// M_z,Ed (kNm)
    pub m_z_ed: Knm,
    /// M_z,Rd (kNm)
    pub m_z_rd: Knm,
}

impl Formula for LinearInteractionCheck {
    const LABEL: &'static str = "6.2";
    const SOURCE_DOCUMENT: SourceDocument = SourceDocument::En1993_1_1_2005;
    type Output = bool;

    fn validate(&self) -> CalcResult<()> {
        raise_if_negative!(self.n_ed, self.n_rd, self.m_y_ed, self.m_y_rd, self.m_z_ed, self.m_z_rd)
    }

    fn evaluate(&self) -> bool {
        self.unity_check() <= 1.0
    }

    fn latex(&self, result: bool) -> LatexFormula {
        LatexFormula::check(
            r"\frac{N_{Ed}}{N_{Rd}} + \frac{M_{y,Ed}}{M_{y,Rd}} + \frac{M_{z,Ed}}{M_{z,Rd}} \leq 1",
            format!(
                r"\frac{{{}}}{{{}}} + \frac{{{}}}{{{}}} + \frac{{{}}}{{{}}} \leq 1",
                fmt_num(self.n_ed),
                fmt_num(self.n_rd),
                fmt_num(self.m_y_ed),
                fmt_num(self.m_y_rd),
                fmt_num(self.m_z_ed),
                fmt_num(self.m_z_rd)
            ),
            result,
        )
    }
}

impl UnityCheck for LinearInteractionCheck {
    fn unity_check(&self) -> f64 {
        self.n_ed / self.n_rd + self.m_y_ed / self.m_y_rd + self.m_z_ed / self.m_z_rd
    }
}

/// (6.6) Design plastic resistance of the gross cross-section in tension.
///
/// N_pl,Rd = A · f_y / γ_M0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlasticTensionResistance {
    /// A (mm²)
    pub a: Mm2,
    /// f_y (MPa)
    pub f_y: Mpa,
    /// γ_M0
    pub gamma_m0: Dimensionless,
}

impl Formula for PlasticTensionResistance {
    const LABEL: &'static str = "6.6";
    const SOURCE_DOCUMENT: SourceDocument = SourceDocument::En1993_1_1_2005;
    type Output = Kn;

    fn validate(&self) -> CalcResult<()> {
        raise_if_negative!(self.a, self.f_y, self.gamma_m0)
    }

    fn evaluate(&self) -> Kn {
        n_to_kn(self.a * self.f_y / self.gamma_m0)
    }

    fn latex(&self, result: Kn) -> LatexFormula {
        LatexFormula::value(
            "N_{pl,Rd}",
            r"\frac{A \cdot f_{y}}{\gamma_{M0}}",
            format!(
                r"\frac{{{} \cdot {}}}{{{}}} \cdot 10^{{-3}}",
                fmt_num(self.a),
                fmt_num(self.f_y),
                fmt_num(self.gamma_m0)
            ),
            result,
        )
    }
}

/// (6.9) Design compression force against the compression resistance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompressionCheck {
    /// N_Ed (kN)
    pub n_ed: Kn,
    /// N_c,Rd (kN)
    pub n_c_rd: Kn,
}

impl Formula for CompressionCheck {
    const LABEL: &'static str = "6.9";
    const SOURCE_DOCUMENT: SourceDocument = SourceDocument::En1993_1_1_2005;
    type Output = bool;

    fn validate(&self) -> CalcResult<()> {
        raise_if_negative!(self.n_ed, self.n_c_rd)
    }

    fn evaluate(&self) -> bool {
        self.unity_check() <= 1.0
    }

    fn latex(&self, result: bool) -> LatexFormula {
        LatexFormula::check(
            r"\frac{N_{Ed}}{N_{c,Rd}} \leq 1.0",
            format!(r"\frac{{{}}}{{{}}} \leq 1.0", fmt_num(self.n_ed), fmt_num(self.n_c_rd)),
            result,
        )
    }
}

impl UnityCheck for CompressionCheck {
    fn unity_check(&self) -> f64 {
        self.n_ed / self.n_c_rd
    }
}

/// (6.13) Design plastic bending resistance for class 1 and 2 sections.
///
/// M_pl,Rd = W_pl · f_y / γ_M0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlasticMomentResistance {
    /// W_pl (mm³)
    pub w_pl: Mm3,
    /// f_y (MPa)
    pub f_y: Mpa,
    /// γ_M0
    pub gamma_m0: Dimensionless,
}

impl Formula for PlasticMomentResistance {
    const LABEL: &'static str = "6.13";
    const SOURCE_DOCUMENT: SourceDocument = SourceDocument::En1993_1_1_2005;
    type Output = Knm;

    fn validate(&self) -> CalcResult<()> {
        raise_if_negative!(self.w_pl, self.f_y, self.gamma_m0)
    }

    fn evaluate(&self) -> Knm {
        nmm_to_knm(self.w_pl * self.f_y / self.gamma_m0)
    }

    fn latex(&self, result: Knm) -> LatexFormula {
        LatexFormula::value(
            "M_{pl,Rd}",
            r"\frac{W_{pl} \cdot f_{y}}{\gamma_{M0}}",
            format!(
                r"\frac{{{} \cdot {}}}{{{}}} \cdot 10^{{-6}}",
                fmt_num(self.w_pl),
                fmt_num(self.f_y),
                fmt_num(self.gamma_m0)
            ),
            result,
        )
    }
}

/// (6.18) Design plastic shear resistance.
///
/// V_pl,Rd = A_v · (f_y / √3) / γ_M0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlasticShearResistance {
    /// A_v, shear area (mm²)
    pub a_v: Mm2,
    /// f_y (MPa)
    pub f_y: Mpa,
    /// γ_M0
    pub gamma_m0: Dimensionless,
}

impl Formula for PlasticShearResistance {
    const LABEL: &'static str = "6.18";
    const SOURCE_DOCUMENT: SourceDocument = SourceDocument::En1993_1_1_2005;
    type Output = Kn;

    fn validate(&self) -> CalcResult<()> {
        raise_if_negative!(self.a_v, self.f_y, self.gamma_m0)
    }

    fn evaluate(&self) -> Kn {
        n_to_kn(self.a_v * (self.f_y / 3.0_f64.sqrt()) / self.gamma_m0)
    }

    fn latex(&self, result: Kn) -> LatexFormula {
        LatexFormula::value(
            "V_{pl,Rd}",
            r"\frac{A_{v} \cdot (f_{y} / \sqrt{3})}{\gamma_{M0}}",
            format!(
                r"\frac{{{} \cdot ({} / \sqrt{{3}})}}{{{}}} \cdot 10^{{-3}}",
                fmt_num(self.a_v),
                fmt_num(self.f_y),
                fmt_num(self.gamma_m0)
            ),
            result,
        )
    }
}

/// (6.22) Web slenderness limit above which shear buckling must be checked.
///
/// The check passes (`true`) when h_w / t_w ≤ 72 · ε / η, i.e. no shear
/// buckling verification is needed for an unstiffened web.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WebShearBucklingCheck {
    /// h_w, web depth (mm)
    pub h_w: Mm,
    /// t_w, web thickness (mm)
    pub t_w: Mm,
    /// ε = √(235 / f_y)
    pub epsilon: Dimensionless,
    /// η, see EN 1993-1-5 (1.0 is conservative)
    pub eta: Dimensionless,
}

impl WebShearBucklingCheck {
    /// Right-hand side, 72 · ε / η
    pub fn limit(&self) -> Dimensionless {
        72.0 * self.epsilon / self.eta
    }
}

impl Formula for WebShearBucklingCheck {
    const LABEL: &'static str = "6.22";
    const SOURCE_DOCUMENT: SourceDocument = SourceDocument::En1993_1_1_2005;
    type Output = bool;

    fn validate(&self) -> CalcResult<()> {
        raise_if_negative!(self.h_w, self.t_w, self.epsilon, self.eta)
    }

    fn evaluate(&self) -> bool {
        self.h_w / self.t_w <= self.limit()
    }

    fn latex(&self, result: bool) -> LatexFormula {
        LatexFormula::check(
            r"\frac{h_{w}}{t_{w}} \leq 72 \cdot \frac{\varepsilon}{\eta}",
            format!(
                r"\frac{{{}}}{{{}}} \leq 72 \cdot \frac{{{}}}{{{}}}",
                fmt_num(self.h_w),
                fmt_num(self.t_w),
                fmt_num(self.epsilon),
                fmt_num(self.eta)
            ),
            result,
        )
    }
}

impl UnityCheck for WebShearBucklingCheck {
    fn unity_check(&self) -> f64 {
        (self.h_w / self.t_w) / self.limit()
    }
}

/// (6.47) Design buckling resistance of a compression member (class 1-3).
///
/// N_b,Rd = χ · A · f_y / γ_M1
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BucklingResistance {
    /// χ, reduction factor for the relevant buckling mode
    pub chi: Dimensionless,
    /// A (mm²)
    pub a: Mm2,
    /// f_y (MPa)
    pub f_y: Mpa,
    /// γ_M1
    pub gamma_m1: Dimensionless,
}

impl Formula for BucklingResistance {
    const LABEL: &'static str = "6.47";
    const SOURCE_DOCUMENT: SourceDocument = SourceDocument::En1993_1_1_2005;
    type Output = Kn;

    fn validate(&self) -> CalcResult<()> {
        raise_if_negative!(self.chi, self.a, self.f_y, self.gamma_m1)
    }

    fn evaluate(&self) -> Kn {
        n_to_kn(self.chi * self.a * self.f_y / self.gamma_m1)
    }

    fn latex(&self, result: Kn) -> LatexFormula {
        LatexFormula::value(
            "N_{b,Rd}",
            r"\frac{\chi \cdot A \cdot f_{y}}{\gamma_{M1}}",
            format!(
                r"\frac{{{} \cdot {} \cdot {}}}{{{}}} \cdot 10^{{-3}}",
                fmt_num(self.chi),
                fmt_num(self.a),
                fmt_num(self.f_y),
                fmt_num(self.gamma_m1)
            ),
            result,
        )
    }
}

/// (6.49) Reduction factor for flexural buckling.
///
/// χ = 1 / (Φ + √(Φ² − λ̄²)) ≤ 1.0, with Φ = 0.5 · [1 + α · (λ̄ − 0.2) + λ̄²]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BucklingReductionFactor {
    /// α, imperfection factor of the buckling curve (Table 6.1)
    pub alpha: Dimensionless,
    /// λ̄, non-dimensional slenderness
    pub lambda_bar: Dimensionless,
}

impl BucklingReductionFactor {
    /// Φ = 0.5 · [1 + α · (λ̄ − 0.2) + λ̄²]
    pub fn phi(&self) -> Dimensionless {
        0.5 * (1.0 + self.alpha * (self.lambda_bar - PLATEAU_SLENDERNESS) + self.lambda_bar.powi(2))
    }
}

impl Formula for BucklingReductionFactor {
    const LABEL: &'static str = "6.49";
    const SOURCE_DOCUMENT: SourceDocument = SourceDocument::En1993_1_1_2005;
    type Output = Dimensionless;

    fn validate(&self) -> CalcResult<()> {
        raise_if_negative!(self.alpha, self.lambda_bar)
    }

    fn evaluate(&self) -> Dimensionless {
        let phi = self.phi();
        let chi = 1.0 / (phi + (phi.powi(2) - self.lambda_bar.powi(2)).sqrt());
        // f64::min drops NaN, so an imaginary root would read as χ = 1.0
        if chi.is_nan() {
            chi
        } else {
            chi.min(1.0)
        }
    }

    fn latex(&self, result: Dimensionless) -> LatexFormula {
        let phi = fmt_num(self.phi());
        LatexFormula::value(
            r"\chi",
            r"\min\left(\frac{1}{\Phi + \sqrt{\Phi^{2} - \overline{\lambda}^{2}}}, 1.0\right)",
            format!(
                r"\min\left(\frac{{1}}{{{phi} + \sqrt{{{phi}^{{2}} - {lambda}^{{2}}}}}}, 1.0\right)",
                lambda = fmt_num(self.lambda_bar)
            ),
            result,
        )
    }
}

/// (6.50) Non-dimensional slenderness for class 1, 2 and 3 sections.
///
/// λ̄ = √(A · f_y / N_cr), N_cr in kN.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NonDimensionalSlenderness {
    /// A (mm²)
    pub a: Mm2,
    /// f_y (MPa)
    pub f_y: Mpa,
    /// N_cr, elastic critical force (kN)
    pub n_cr: Kn,
}

impl Formula for NonDimensionalSlenderness {
    const LABEL: &'static str = "6.50";
    const SOURCE_DOCUMENT: SourceDocument = SourceDocument::En1993_1_1_2005;
    type Output = Dimensionless;

    fn validate(&self) -> CalcResult<()> {
        raise_if_negative!(self.a, self.f_y, self.n_cr)
    }

    fn evaluate(&self) -> Dimensionless {
        (n_to_kn(self.a * self.f_y) / self.n_cr).sqrt()
    }

    fn latex(&self, result: Dimensionless) -> LatexFormula {
        LatexFormula::value(
            r"\overline{\lambda}",
            r"\sqrt{\frac{A \cdot f_{y}}{N_{cr}}}",
            format!(
                r"\sqrt{{\frac{{{} \cdot {} \cdot 10^{{-3}}}}{{{}}}}}",
                fmt_num(self.a),
                fmt_num(self.f_y),
                fmt_num(self.n_cr)
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
    fn test_linear_interaction() {
        let check = FormulaResult::new(LinearInteractionCheck {
            n_ed: 200.0,
            n_rd: 1000.0,
            m_y_ed: 50.0,
            m_y_rd: 100.0,
            m_z_ed: 5.0,
            m_z_rd: 50.0,
        })
        .unwrap();
        assert!(check == true);
        assert_relative_eq!(check.unity_check(), 0.8, epsilon = 1e-12);
    }

    #[test]
    fn test_linear_interaction_exceeded() {
        let check = FormulaResult::new(LinearInteractionCheck {
            n_ed: 500.0,
            n_rd: 1000.0,
            m_y_ed: 60.0,
            m_y_rd: 100.0,
            m_z_ed: 0.0,
            m_z_rd: 50.0,
        })
        .unwrap();
        assert!(check == false);
        assert_relative_eq!(check.unity_check(), 1.1, epsilon = 1e-12);
    }

    #[test]
    fn test_plastic_tension_resistance() {
        // IPE 300, S235
        let n_pl_rd = FormulaResult::new(PlasticTensionResistance {
            a: 5380.0,
            f_y: 235.0,
            gamma_m0: 1.0,
        })
        .unwrap();
        assert_relative_eq!(n_pl_rd.value(), 1264.3, epsilon = 1e-9);
        assert_eq!(n_pl_rd.latex().short(), "N_{pl,Rd} = 1264.30");
    }

    #[test]
    fn test_compression_check() {
        let check = FormulaResult::new(CompressionCheck { n_ed: 900.0, n_c_rd: 1264.3 }).unwrap();
        assert!(check == true);
        assert!(check.unity_check() < 1.0);
        assert_eq!(
            check.latex().complete(),
            r"\text{CHECK} \to \frac{N_{Ed}}{N_{c,Rd}} \leq 1.0 \to \frac{900.00}{1264.30} \leq 1.0 \to \text{OK}"
        );
    }

    #[test]
    fn test_plastic_moment_resistance() {
        let m_pl_rd = FormulaResult::new(PlasticMomentResistance {
            w_pl: 628.0e3,
            f_y: 235.0,
            gamma_m0: 1.0,
        })
        .unwrap();
        assert_relative_eq!(m_pl_rd.value(), 147.58, epsilon = 1e-9);
    }

    #[test]
    fn test_plastic_shear_resistance() {
        let v_pl_rd = FormulaResult::new(PlasticShearResistance {
            a_v: 1600.0,
            f_y: 235.0,
            gamma_m0: 1.0,
        })
        .unwrap();
        assert_relative_eq!(v_pl_rd.value(), 217.0837012, epsilon = 1e-6);
    }

    #[test]
    fn test_web_shear_buckling() {
        // IPE 300 web: 248.6 / 7.1 = 35.0 < 72
        let check = FormulaResult::new(WebShearBucklingCheck {
            h_w: 248.6,
            t_w: 7.1,
            epsilon: 1.0,
            eta: 1.0,
        })
        .unwrap();
        assert!(check == true);

        let slender = FormulaResult::new(WebShearBucklingCheck {
            h_w: 1000.0,
            t_w: 8.0,
            epsilon: 0.81,
            eta: 1.2,
        })
        .unwrap();
        assert!(slender == false);
        assert!(slender.unity_check() > 1.0);
    }

    #[test]
    fn test_buckling_reduction_factor() {
        // Curve b (α = 0.34), λ̄ = 1.0
        let chi = FormulaResult::new(BucklingReductionFactor {
            alpha: 0.34,
            lambda_bar: 1.0,
        })
        .unwrap();
        assert_relative_eq!(chi.value(), 0.5970232, epsilon = 1e-6);
        assert_eq!(chi.latex().short(), r"\chi = 0.60");
    }

    #[test]
    fn test_buckling_reduction_factor_is_capped() {
        let chi = FormulaResult::new(BucklingReductionFactor {
            alpha: 0.21,
            lambda_bar: 0.0,
        })
        .unwrap();
        assert_eq!(chi.value(), 1.0);
    }

    #[test]
    fn test_buckling_reduction_factor_imaginary_root_is_nan() {
        // Φ = 0.005 < λ̄, so √(Φ² − λ̄²) has no real value
        let chi = FormulaResult::new(BucklingReductionFactor {
            alpha: 10.0,
            lambda_bar: 0.1,
        })
        .unwrap();
        assert!(chi.value().is_nan());
        assert!(chi.latex().short().ends_with("NaN"));
    }

    #[test]
    fn test_buckling_resistance() {
        let n_b_rd = FormulaResult::new(BucklingResistance {
            chi: 0.597,
            a: 5380.0,
            f_y: 235.0,
            gamma_m1: 1.0,
        })
        .unwrap();
        assert_relative_eq!(n_b_rd.value(), 754.7871, epsilon = 1e-6);
    }

    #[test]
    fn test_non_dimensional_slenderness() {
        let lambda = FormulaResult::new(NonDimensionalSlenderness {
            a: 5380.0,
            f_y: 235.0,
            n_cr: 1500.0,
        })
        .unwrap();
        assert_relative_eq!(lambda.value(), 0.9180777, epsilon = 1e-6);
    }

    #[test]
    fn test_negative_gamma_rejected() {
        let err = FormulaResult::new(PlasticTensionResistance {
            a: 5380.0,
            f_y: 235.0,
            gamma_m0: -1.0,
        })
        .unwrap_err();
        assert_eq!(err, CalcError::negative_value("gamma_m0", -1.0));
    }
}
