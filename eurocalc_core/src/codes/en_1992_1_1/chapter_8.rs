//! Chapter 8: Detailing of reinforcement and prestressing tendons
//!
//! Additional reinforcement for large diameter bars (8.8) and the transfer
//! of prestress in pre-tensioned members (8.10.2.2).

use serde::{Deserialize, Serialize};

use crate::codes::SourceDocument;
use crate::errors::CalcResult;
use crate::formula::{fmt_num, Formula, LatexFormula};
use crate::raise_if_negative;
use crate::units::{Dimensionless, Mm, Mm2};

/// Length at the member end over which a pre-tensioned strand is taken as
/// not contributing to the transfer (mm).
pub const TRANSFER_END_ZONE: Mm = 20.0;

/// (8.12) Additional horizontal reinforcement parallel to the lateral face
/// for large diameter bars.
///
/// A_sh = 0.25 · A_s · n_1
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizontalLargeBarReinforcement {
    /// A_s, area of one anchored bar (mm²)
    pub a_s: Mm2,
    /// n_1, number of layers with bars anchored at the same point
    pub n_1: Dimensionless,
}

impl Formula for HorizontalLargeBarReinforcement {
    const LABEL: &'static str = "8.12";
    const SOURCE_DOCUMENT: SourceDocument = SourceDocument::En1992_1_1_2004;
    type Output = Mm2;

    fn validate(&self) -> CalcResult<()> {
        raise_if_negative!(self.a_s, self.n_1)
    }

    fn evaluate(&self) -> Mm2 {
        0.25 * self.a_s * self.n_1
    }

    fn latex(&self, result: Mm2) -> LatexFormula {
        LatexFormula::value(
            "A_{sh}",
            r"0.25 \cdot A_{s} \cdot n_{1}",
            format!(r"0.25 \cdot {} \cdot {}", fmt_num(self.a_s), fmt_num(self.n_1)),
            result,
        )
    }
}

/// (8.13) Additional vertical reinforcement perpendicular to the lateral
/// face for large diameter bars.
///
/// A_sv = 0.25 · A_s · n_2
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VerticalLargeBarReinforcement {
    /// A_s, area of one anchored bar (mm²)
    pub a_s: Mm2,
    /// n_2, number of bars anchored in each layer
    pub n_2: Dimensionless,
}

impl Formula for VerticalLargeBarReinforcement {
    const LABEL: &'static str = "8.13";
    const SOURCE_DOCUMENT: SourceDocument = SourceDocument::En1992_1_1_2004;
    type Output = Mm2;

    fn validate(&self) -> CalcResult<()> {
        raise_if_negative!(self.a_s, self.n_2)
    }

    fn evaluate(&self) -> Mm2 {
        0.25 * self.a_s * self.n_2
    }

    fn latex(&self, result: Mm2) -> LatexFormula {
        LatexFormula::value(
            "A_{sv}",
            r"0.25 \cdot A_{s} \cdot n_{2}",
            format!(r"0.25 \cdot {} \cdot {}", fmt_num(self.a_s), fmt_num(self.n_2)),
            result,
        )
    }
}

/// (8.17) Lower design value of the transmission length, used for local
/// stress checks at release.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LowerTransmissionLength {
    /// l_pt, basic transmission length (mm)
    pub l_pt: Mm,
}

impl Formula for LowerTransmissionLength {
    const LABEL: &'static str = "8.17";
    const SOURCE_DOCUMENT: SourceDocument = SourceDocument::En1992_1_1_2004;
    type Output = Mm;

    fn validate(&self) -> CalcResult<()> {
        raise_if_negative!(self.l_pt)
    }

    fn evaluate(&self) -> Mm {
        0.8 * self.l_pt
    }

    fn latex(&self, result: Mm) -> LatexFormula {
        LatexFormula::value(
            "l_{pt1}",
            r"0.8 \cdot l_{pt}",
            format!(r"0.8 \cdot {}", fmt_num(self.l_pt)),
            result,
        )
    }
}

/// (8.18) Upper design value of the transmission length, used for ultimate
/// limit states.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UpperTransmissionLength {
    /// l_pt, basic transmission length (mm)
    pub l_pt: Mm,
}

impl Formula for UpperTransmissionLength {
    const LABEL: &'static str = "8.18";
    const SOURCE_DOCUMENT: SourceDocument = SourceDocument::En1992_1_1_2004;
    type Output = Mm;

    fn validate(&self) -> CalcResult<()> {
        raise_if_negative!(self.l_pt)
    }

    fn evaluate(&self) -> Mm {
        1.2 * self.l_pt
    }

    fn latex(&self, result: Mm) -> LatexFormula {
        LatexFormula::value(
            "l_{pt2}",
            r"1.2 \cdot l_{pt}",
            format!(r"1.2 \cdot {}", fmt_num(self.l_pt)),
            result,
        )
    }
}

/// (8.19) Dispersion length for rectangular sections with straight tendons
/// near the bottom of the section.
///
/// l_disp = √(l_pt² + d²)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DispersionLength {
    /// l_pt, transmission length (mm)
    pub l_pt: Mm,
    /// d, effective depth (mm)
    pub d: Mm,
}

impl Formula for DispersionLength {
    const LABEL: &'static str = "8.19";
    const SOURCE_DOCUMENT: SourceDocument = SourceDocument::En1992_1_1_2004;
    type Output = Mm;

    fn validate(&self) -> CalcResult<()> {
        raise_if_negative!(self.l_pt, self.d)
    }

    fn evaluate(&self) -> Mm {
        self.l_pt.hypot(self.d)
    }

    fn latex(&self, result: Mm) -> LatexFormula {
        LatexFormula::value(
            "l_{disp}",
            r"\sqrt{l_{pt}^{2} + d^{2}}",
            format!(r"\sqrt{{{}^{{2}} + {}^{{2}}}}", fmt_num(self.l_pt), fmt_num(self.d)),
            result,
        )
    }
}

/// Transmission length effective beyond the end zone (8.10.2.2).
///
/// l_pt,eff = 0.8 · (l_pt − 20), the lower design value of (8.17) applied to
/// the part of the transmission length past [`TRANSFER_END_ZONE`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectiveTransmissionLength {
    /// l_pt, basic transmission length (mm)
    pub l_pt: Mm,
}

impl Formula for EffectiveTransmissionLength {
    const LABEL: &'static str = "8.10.2.2";
    const SOURCE_DOCUMENT: SourceDocument = SourceDocument::En1992_1_1_2004;
    type Output = Mm;

    fn validate(&self) -> CalcResult<()> {
        raise_if_negative!(self.l_pt)
    }

    fn evaluate(&self) -> Mm {
        0.8 * (self.l_pt - TRANSFER_END_ZONE)
    }

    fn latex(&self, result: Mm) -> LatexFormula {
        LatexFormula::value(
            "l_{pt,eff}",
            r"0.8 \cdot (l_{pt} - 20)",
            format!(r"0.8 \cdot ({} - 20)", fmt_num(self.l_pt)),
            result,
        )
    }
}
