//! Chapter 3: Materials

use serde::{Deserialize, Serialize};

use crate::codes::SourceDocument;
use crate::errors::CalcResult;
use crate::formula::{fmt_num, Formula, LatexFormula};
use crate::raise_if_negative;
use crate::units::{Dimensionless, Mpa};

/// (3.15) Design compressive strength of concrete.
///
/// f_cd = α_cc · f_ck / γ_C
///
/// α_cc is a nationally determined parameter (recommended 1.0).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignCompressiveStrength {
    /// α_cc, long-term and loading-effect coefficient
    pub alpha_cc: Dimensionless,
    /// f_ck, characteristic cylinder strength (MPa)
    pub f_ck: Mpa,
    /// γ_C, partial factor for concrete
    pub gamma_c: Dimensionless,
}

impl Formula for DesignCompressiveStrength {
    const LABEL: &'static str = "3.15";
    const SOURCE_DOCUMENT: SourceDocument = SourceDocument::En1992_1_1_2004;
    type Output = Mpa;

    fn validate(&self) -> CalcResult<()> {
        raise_if_negative!(self.alpha_cc, self.f_ck, self.gamma_c)
    }

    fn evaluate(&self) -> Mpa {
        self.alpha_cc * self.f_ck / self.gamma_c
    }

    fn latex(&self, result: Mpa) -> LatexFormula {
        LatexFormula::value(
            "f_{cd}",
            r"\alpha_{cc} \cdot \frac{f_{ck}}{\gamma_{C}}",
            format!(
                r"{} \cdot \frac{{{}}}{{{}}}",
                fmt_num(self.alpha_cc),
                fmt_num(self.f_ck),
                fmt_num(self.gamma_c)
            ),
            result,
        )
    }
}

/// (3.16) Design tensile strength of concrete.
///
/// f_ctd = α_ct · f_ctk,0.05 / γ_C
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignTensileStrength {
    /// α_ct, long-term coefficient (recommended 1.0)
    pub alpha_ct: Dimensionless,
    /// f_ctk,0.05, 5% fractile of the tensile strength (MPa)
    pub f_ctk_0_05: Mpa,
    /// γ_C, partial factor for concrete
    pub gamma_c: Dimensionless,
}

impl Formula for DesignTensileStrength {
    const LABEL: &'static str = "3.16";
    const SOURCE_DOCUMENT: SourceDocument = SourceDocument::En1992_1_1_2004;
    type Output = Mpa;

    fn validate(&self) -> CalcResult<()> {
        raise_if_negative!(self.alpha_ct, self.f_ctk_0_05, self.gamma_c)
    }

    fn evaluate(&self) -> Mpa {
        self.alpha_ct * self.f_ctk_0_05 / self.gamma_c
    }

    fn latex(&self, result: Mpa) -> LatexFormula {
        LatexFormula::value(
            "f_{ctd}",
            r"\alpha_{ct} \cdot \frac{f_{ctk,0.05}}{\gamma_{C}}",
            format!(
                r"{} \cdot \frac{{{}}}{{{}}}",
                fmt_num(self.alpha_ct),
                fmt_num(self.f_ctk_0_05),
                fmt_num(self.gamma_c)
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
    fn test_design_compressive_strength() {
        // C30/37, persistent design situation
        let f_cd = FormulaResult::new(DesignCompressiveStrength {
            alpha_cc: 1.0,
            f_ck: 30.0,
            gamma_c: 1.5,
        })
        .unwrap();
        assert_relative_eq!(f_cd.value(), 20.0);
        assert_eq!(
            f_cd.latex().complete(),
            r"f_{cd} = \alpha_{cc} \cdot \frac{f_{ck}}{\gamma_{C}} = 1.00 \cdot \frac{30.00}{1.50} = 20.00"
        );
        assert_eq!(f_cd.latex().short(), "f_{cd} = 20.00");
    }

    #[test]
    fn test_design_compressive_strength_negative() {
        let err = FormulaResult::new(DesignCompressiveStrength {
            alpha_cc: 1.0,
            f_ck: -30.0,
            gamma_c: 1.5,
        })
        .unwrap_err();
        assert_eq!(err, CalcError::negative_value("f_ck", -30.0));
    }

    #[test]
    fn test_design_tensile_strength() {
        // C30/37: f_ctk,0.05 = 2.0 MPa
        let f_ctd = FormulaResult::new(DesignTensileStrength {
            alpha_ct: 1.0,
            f_ctk_0_05: 2.0,
            gamma_c: 1.5,
        })
        .unwrap();
        assert_relative_eq!(f_ctd.value(), 1.333_333_333, epsilon = 1e-9);
        assert_eq!(f_ctd.latex().short(), "f_{ctd} = 1.33");
    }
}
