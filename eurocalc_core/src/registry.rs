//! # Clause Registry
//!
//! Central list of every formula in the catalog, with the metadata needed to
//! document it and a dynamic entry point that evaluates a clause from named
//! numeric inputs (used by the command line tool).
//!
//! ## Usage
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use eurocalc_core::codes::SourceDocument;
//! use eurocalc_core::registry::Clause;
//!
//! let clause = Clause::find(SourceDocument::En1992_1_1_2004, "8.13")?;
//! let inputs = BTreeMap::from([("a_s".to_string(), 100.0), ("n_2".to_string(), 2.0)]);
//! let evaluation = clause.evaluate(&inputs)?;
//! assert_eq!(evaluation.value.as_f64(), 50.0);
//! # Ok::<(), eurocalc_core::CalcError>(())
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::codes::en_1992_1_1::{
    DesignCompressiveStrength, DesignTensileStrength, DispersionLength, EffectiveCreepRatio,
    EffectiveTransmissionLength, HorizontalLargeBarReinforcement, ImperfectionEccentricity,
    ImperfectionHorizontalForce, InclinationImperfection, LinearFibreExtrapolation, LowerTransmissionLength,
    MaximumBentUpBarSpacing, MaximumLongitudinalLinkSpacing, MinimumShearReinforcementRatio,
    MinimumTensileReinforcement, PartialDiscontinuityTieForce, ShearReinforcementRatio,
    ShearReinforcementResistance, StrengthReductionFactor, UpperTransmissionLength,
    VerticalLargeBarReinforcement,
};
use crate::codes::en_1993_1_1::{
    BucklingReductionFactor, BucklingResistance, CompressionCheck, FrameSwayImperfectionCriterion,
    GlobalSwayImperfection, LinearInteractionCheck, NonDimensionalSlenderness, PlasticMomentResistance,
    PlasticShearResistance, PlasticTensionResistance, WebShearBucklingCheck,
};
use crate::codes::SourceDocument;
use crate::errors::{CalcError, CalcResult};
use crate::formula::{Formula, FormulaOutput, FormulaResult};

/// Named numeric inputs for dynamic evaluation, keyed by field name.
pub type Inputs = BTreeMap<String, f64>;

// ============================================================================
// Clause Categories
// ============================================================================

/// Categories for grouping clauses in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClauseCategory {
    /// Design strengths of materials
    MaterialProperties,
    /// Imperfections and creep in structural analysis
    StructuralAnalysis,
    /// Design resistances of sections and members
    Resistances,
    /// Pass/fail verifications with a unity check
    DesignChecks,
    /// Detailing of reinforcement and prestressing tendons
    Detailing,
}

impl ClauseCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            ClauseCategory::MaterialProperties => "Material Properties",
            ClauseCategory::StructuralAnalysis => "Structural Analysis",
            ClauseCategory::Resistances => "Resistances",
            ClauseCategory::DesignChecks => "Design Checks",
            ClauseCategory::Detailing => "Detailing",
        }
    }

    /// Sort order in the catalog (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            ClauseCategory::MaterialProperties => 1,
            ClauseCategory::StructuralAnalysis => 2,
            ClauseCategory::Resistances => 3,
            ClauseCategory::DesignChecks => 4,
            ClauseCategory::Detailing => 5,
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a formula input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Variable {
    /// Field name used for named inputs (e.g., "n_ed")
    pub name: &'static str,
    /// Symbol as printed in the standard (e.g., "N_Ed")
    pub symbol: &'static str,
    pub description: &'static str,
    /// Units (e.g., "kN", "mm²", "-")
    pub units: &'static str,
}

impl Variable {
    pub const fn new(
        name: &'static str,
        symbol: &'static str,
        description: &'static str,
        units: &'static str,
    ) -> Self {
        Self { name, symbol, description, units }
    }
}

// ============================================================================
// Clause Metadata
// ============================================================================

/// Documentation of a clause.
#[derive(Debug, Clone, Serialize)]
pub struct ClauseMetadata {
    /// Human-readable name (e.g., "Partial Discontinuity Tie Force")
    pub name: &'static str,
    /// What the formula computes
    pub description: &'static str,
    /// The formula in plain text for markdown
    pub formula_plain: &'static str,
    /// Result symbol and units (e.g., "T [kN]")
    pub result: &'static str,
    /// Inputs in the order the formula record declares them
    pub variables: Vec<Variable>,
    /// Assumptions or limitations
    pub assumptions: Vec<&'static str>,
    pub category: ClauseCategory,
    /// Source file implementing the formula
    pub source_module: &'static str,
}

// ============================================================================
// Evaluation
// ============================================================================

/// Type-erased outcome of evaluating a clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub document: SourceDocument,
    pub label: String,
    pub value: FormulaOutput,
    /// Present for check formulas only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unity_check: Option<f64>,
    pub latex_complete: String,
    pub latex_short: String,
}

impl Evaluation {
    fn from_result<F: Formula>(result: &FormulaResult<F>) -> Self {
        let latex = result.latex();
        Self {
            document: result.source_document(),
            label: result.label().to_string(),
            value: result.output(),
            unity_check: None,
            latex_complete: latex.complete(),
            latex_short: latex.short(),
        }
    }

    /// Whether the clause is a check that passed. `None` for value formulas.
    pub fn passes(&self) -> Option<bool> {
        self.value.as_bool()
    }
}

fn input(inputs: &Inputs, name: &'static str) -> CalcResult<f64> {
    inputs
        .get(name)
        .copied()
        .ok_or_else(|| CalcError::missing_input(name))
}

// ============================================================================
// Clause Enum
// ============================================================================

/// Unity ratio of a dispatched result: `None` unless the clause is marked `[unity]`.
macro_rules! unity_check {
    ($result:ident) => {
        None
    };
    ($result:ident, unity) => {
        Some($result.unity_check())
    };
}

/// Declares the clause enum together with everything derived mechanically
/// from the formula records: label, document, input names and dispatch.
/// Check formulas are marked `[unity]` so their evaluation carries the ratio.
macro_rules! clauses {
    ($( $(#[$doc:meta])* $variant:ident => $record:ident { $($field:ident),+ $(,)? } $([$unity:ident])? ),+ $(,)?) => {
        /// Every clause in the catalog.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum Clause {
            $( $(#[$doc])* $variant, )+
        }

        /// All clauses, document by document in equation order.
        pub const ALL_CLAUSES: &[Clause] = &[ $( Clause::$variant, )+ ];

        impl Clause {
            /// Equation number within the source document
            pub fn label(&self) -> &'static str {
                match self {
                    $( Clause::$variant => <$record as Formula>::LABEL, )+
                }
            }

            pub fn document(&self) -> SourceDocument {
                match self {
                    $( Clause::$variant => <$record as Formula>::SOURCE_DOCUMENT, )+
                }
            }

            /// Field names accepted by [`Clause::evaluate`], in declaration order
            pub fn input_names(&self) -> &'static [&'static str] {
                match self {
                    $( Clause::$variant => &[ $( stringify!($field), )+ ], )+
                }
            }

            fn dispatch(&self, inputs: &Inputs) -> CalcResult<Evaluation> {
                match self {
                    $(
                        Clause::$variant => {
                            let result = FormulaResult::new($record {
                                $( $field: input(inputs, stringify!($field))?, )+
                            })?;
                            Ok(Evaluation {
                                unity_check: unity_check!(result $(, $unity)?),
                                ..Evaluation::from_result(&result)
                            })
                        }
                    )+
                }
            }
        }
    };
}

clauses! {
    // -------------------------------------------------------------------------
    // EN 1992-1-1:2004
    // -------------------------------------------------------------------------
    /// (3.15) f_cd = α_cc · f_ck / γ_c
    DesignCompressiveStrength => DesignCompressiveStrength { alpha_cc, f_ck, gamma_c },
    /// (3.16) f_ctd = α_ct · f_ctk,0.05 / γ_c
    DesignTensileStrength => DesignTensileStrength { alpha_ct, f_ctk_0_05, gamma_c },
    /// (5.1) θ_i = θ_0 · α_h · α_m
    InclinationImperfection => InclinationImperfection { theta_0, alpha_h, alpha_m },
    /// (5.2) e_i = θ_i · l_0 / 2
    ImperfectionEccentricity => ImperfectionEccentricity { theta_i, l_0 },
    /// (5.3a) H_i = θ_i · N
    ImperfectionHorizontalForce => ImperfectionHorizontalForce { theta_i, n },
    /// (5.19) φ_ef = φ(∞,t_0) · M_0Eqp / M_0Ed
    EffectiveCreepRatio => EffectiveCreepRatio { phi_inf_t0, m0_eqp, m0_ed },
    /// (6.1(2)) r_e = r · z_e / z_i
    LinearFibreExtrapolation => LinearFibreExtrapolation { r, z_e, z_i },
    /// (6.6N) ν = 0.6 · (1 − f_ck / 250)
    StrengthReductionFactor => StrengthReductionFactor { f_ck },
    /// (6.8) V_Rd,s = A_sw / s · z · f_ywd · cot θ
    ShearReinforcementResistance => ShearReinforcementResistance { a_sw, s, z, f_ywd, theta },
    /// (6.58) T = ¼ · (h − c) / h · N_Ed
    PartialDiscontinuityTieForce => PartialDiscontinuityTieForce { c, h, n_ed },
    /// (8.10.2.2) l_pt,eff = 0.8 · (l_pt − 20)
    EffectiveTransmissionLength => EffectiveTransmissionLength { l_pt },
    /// (8.12) A_sh = 0.25 · A_s · n_1
    HorizontalLargeBarReinforcement => HorizontalLargeBarReinforcement { a_s, n_1 },
    /// (8.13) A_sv = 0.25 · A_s · n_2
    VerticalLargeBarReinforcement => VerticalLargeBarReinforcement { a_s, n_2 },
    /// (8.17) l_pt1 = 0.8 · l_pt
    LowerTransmissionLength => LowerTransmissionLength { l_pt },
    /// (8.18) l_pt2 = 1.2 · l_pt
    UpperTransmissionLength => UpperTransmissionLength { l_pt },
    /// (8.19) l_disp = √(l_pt² + d²)
    DispersionLength => DispersionLength { l_pt, d },
    /// (9.1N) A_s,min = max(0.26 · f_ctm / f_yk · b_t · d, 0.0013 · b_t · d)
    MinimumTensileReinforcement => MinimumTensileReinforcement { f_ctm, f_yk, b_t, d },
    /// (9.4) ρ_w = A_sw / (s · b_w · sin α)
    ShearReinforcementRatio => ShearReinforcementRatio { a_sw, s, b_w, alpha },
    /// (9.5N) ρ_w,min = 0.08 · √f_ck / f_yk
    MinimumShearReinforcementRatio => MinimumShearReinforcementRatio { f_ck, f_yk },
    /// (9.6N) s_l,max = 0.75 · d · (1 + cot α)
    MaximumLongitudinalLinkSpacing => MaximumLongitudinalLinkSpacing { d, alpha },
    /// (9.7N) s_b,max = 0.6 · d · (1 + cot α)
    MaximumBentUpBarSpacing => MaximumBentUpBarSpacing { d, alpha },

    // -------------------------------------------------------------------------
    // EN 1993-1-1:2005
    // -------------------------------------------------------------------------
    /// (5.5) φ = φ_0 · α_h · α_m
    GlobalSwayImperfection => GlobalSwayImperfection { phi_0, alpha_h, alpha_m },
    /// (5.7) H_Ed ≥ 0.15 · V_Ed
    FrameSwayImperfectionCriterion => FrameSwayImperfectionCriterion { h_ed, v_ed } [unity],
    /// (6.2) N_Ed/N_Rd + M_y,Ed/M_y,Rd + M_z,Ed/M_z,Rd ≤ 1
    LinearInteractionCheck => LinearInteractionCheck { n_ed, n_rd, m_y_ed, m_y_rd, m_z_ed, m_z_rd } [unity],
    /// (6.6) N_pl,Rd = A · f_y / γ_M0
    PlasticTensionResistance => PlasticTensionResistance { a, f_y, gamma_m0 },
    /// (6.9) N_Ed / N_c,Rd ≤ 1
    CompressionCheck => CompressionCheck { n_ed, n_c_rd } [unity],
    /// (6.13) M_pl,Rd = W_pl · f_y / γ_M0
    PlasticMomentResistance => PlasticMomentResistance { w_pl, f_y, gamma_m0 },
    /// (6.18) V_pl,Rd = A_v · (f_y / √3) / γ_M0
    PlasticShearResistance => PlasticShearResistance { a_v, f_y, gamma_m0 },
    /// (6.22) h_w / t_w ≤ 72 · ε / η
    WebShearBucklingCheck => WebShearBucklingCheck { h_w, t_w, epsilon, eta } [unity],
    /// (6.47) N_b,Rd = χ · A · f_y / γ_M1
    BucklingResistance => BucklingResistance { chi, a, f_y, gamma_m1 },
    /// (6.49) χ = 1 / (Φ + √(Φ² − λ̄²)) ≤ 1
    BucklingReductionFactor => BucklingReductionFactor { alpha, lambda_bar },
    /// (6.50) λ̄ = √(A · f_y / N_cr)
    NonDimensionalSlenderness => NonDimensionalSlenderness { a, f_y, n_cr },
}

impl Clause {
    /// Find a clause by document and equation number (case-insensitive,
    /// surrounding parentheses ignored, so "(6.6n)" finds "6.6N").
    pub fn find(document: SourceDocument, label: &str) -> CalcResult<Clause> {
        let wanted = label.trim();
        let wanted = wanted
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(wanted);
        ALL_CLAUSES
            .iter()
            .copied()
            .find(|clause| clause.document() == document && clause.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CalcError::clause_not_found(document.citation(), label))
    }

    /// Clauses of one document, in catalog order
    pub fn in_document(document: SourceDocument) -> Vec<Clause> {
        ALL_CLAUSES
            .iter()
            .copied()
            .filter(|clause| clause.document() == document)
            .collect()
    }

    /// Clauses of one category, in catalog order
    pub fn in_category(category: ClauseCategory) -> Vec<Clause> {
        ALL_CLAUSES
            .iter()
            .copied()
            .filter(|clause| clause.metadata().category == category)
            .collect()
    }

    /// Categories that contain at least one clause, by sort order
    pub fn all_categories() -> Vec<ClauseCategory> {
        let mut categories: Vec<ClauseCategory> = Vec::new();
        for clause in ALL_CLAUSES {
            let category = clause.metadata().category;
            if !categories.contains(&category) {
                categories.push(category);
            }
        }
        categories.sort_by_key(|c| c.sort_order());
        categories
    }

    /// Citation of the equation, e.g. "EN 1992-1-1:2004, Eq. (6.58)"
    pub fn reference(&self) -> String {
        format!("{}, Eq. ({})", self.document().citation(), self.label())
    }

    /// Whether the clause produces a pass/fail verdict
    pub fn is_check(&self) -> bool {
        self.metadata().category == ClauseCategory::DesignChecks
    }

    /// Evaluate the clause from named inputs.
    ///
    /// Every input the formula declares must be present and no others may be
    /// given. Validation of the values themselves is left to the formula.
    pub fn evaluate(&self, inputs: &Inputs) -> CalcResult<Evaluation> {
        let expected = self.input_names();
        let unknown = inputs
            .keys()
            .find(|name| !expected.iter().any(|field| *field == name.as_str()));
        if let Some(unknown) = unknown {
            return Err(CalcError::unexpected_input(unknown.as_str()));
        }
        tracing::debug!(
            document = %self.document(),
            label = self.label(),
            inputs = inputs.len(),
            "dispatching clause"
        );
        self.dispatch(inputs)
    }

    /// Get metadata for this clause
    pub fn metadata(&self) -> ClauseMetadata {
        match self {
            // =================================================================
            // EN 1992-1-1: Chapter 3
            // =================================================================
            Clause::DesignCompressiveStrength => ClauseMetadata {
                name: "Design Compressive Strength",
                description: "Design value of the concrete compressive strength.",
                formula_plain: "f_cd = alpha_cc * f_ck / gamma_c",
                result: "f_cd [MPa]",
                variables: vec![
                    Variable::new("alpha_cc", "α_cc", "Coefficient for long term and loading effects", "-"),
                    Variable::new("f_ck", "f_ck", "Characteristic cylinder compressive strength", "MPa"),
                    Variable::new("gamma_c", "γ_c", "Partial factor for concrete", "-"),
                ],
                assumptions: vec!["α_cc is a nationally determined parameter (recommended 1.0)"],
                category: ClauseCategory::MaterialProperties,
                source_module: "eurocalc_core/src/codes/en_1992_1_1/chapter_3.rs",
            },
            Clause::DesignTensileStrength => ClauseMetadata {
                name: "Design Tensile Strength",
                description: "Design value of the concrete tensile strength.",
                formula_plain: "f_ctd = alpha_ct * f_ctk_0_05 / gamma_c",
                result: "f_ctd [MPa]",
                variables: vec![
                    Variable::new("alpha_ct", "α_ct", "Coefficient for long term and loading effects", "-"),
                    Variable::new("f_ctk_0_05", "f_ctk,0.05", "5% fractile characteristic tensile strength", "MPa"),
                    Variable::new("gamma_c", "γ_c", "Partial factor for concrete", "-"),
                ],
                assumptions: vec!["α_ct is a nationally determined parameter (recommended 1.0)"],
                category: ClauseCategory::MaterialProperties,
                source_module: "eurocalc_core/src/codes/en_1992_1_1/chapter_3.rs",
            },

            // =================================================================
            // EN 1992-1-1: Chapter 5
            // =================================================================
            Clause::InclinationImperfection => ClauseMetadata {
                name: "Inclination Imperfection",
                description: "Inclination representing geometric imperfections of members and structures.",
                formula_plain: "theta_i = theta_0 * alpha_h * alpha_m",
                result: "θ_i [rad]",
                variables: vec![
                    Variable::new("theta_0", "θ_0", "Basic value of the inclination", "rad"),
                    Variable::new("alpha_h", "α_h", "Reduction factor for length or height", "-"),
                    Variable::new("alpha_m", "α_m", "Reduction factor for number of members", "-"),
                ],
                assumptions: vec!["θ_0 is a nationally determined parameter (recommended 1/200)"],
                category: ClauseCategory::StructuralAnalysis,
                source_module: "eurocalc_core/src/codes/en_1992_1_1/chapter_5.rs",
            },
            Clause::ImperfectionEccentricity => ClauseMetadata {
                name: "Imperfection Eccentricity",
                description: "Eccentricity of an isolated member due to geometric imperfections.",
                formula_plain: "e_i = theta_i * l_0 / 2",
                result: "e_i [mm]",
                variables: vec![
                    Variable::new("theta_i", "θ_i", "Inclination imperfection", "rad"),
                    Variable::new("l_0", "l_0", "Effective length", "mm"),
                ],
                assumptions: vec!["Isolated member, walls and columns in braced systems"],
                category: ClauseCategory::StructuralAnalysis,
                source_module: "eurocalc_core/src/codes/en_1992_1_1/chapter_5.rs",
            },
            Clause::ImperfectionHorizontalForce => ClauseMetadata {
                name: "Imperfection Horizontal Force",
                description: "Transverse force equivalent to the imperfection of an unbraced member.",
                formula_plain: "H_i = theta_i * N",
                result: "H_i [kN]",
                variables: vec![
                    Variable::new("theta_i", "θ_i", "Inclination imperfection", "rad"),
                    Variable::new("n", "N", "Axial load", "kN"),
                ],
                assumptions: vec!["Only θ_i is required to be non-negative; the sign of N is a convention"],
                category: ClauseCategory::StructuralAnalysis,
                source_module: "eurocalc_core/src/codes/en_1992_1_1/chapter_5.rs",
            },
            Clause::EffectiveCreepRatio => ClauseMetadata {
                name: "Effective Creep Ratio",
                description: "Effective creep ratio for second order analysis.",
                formula_plain: "phi_ef = phi_inf_t0 * M_0Eqp / M_0Ed",
                result: "φ_ef [-]",
                variables: vec![
                    Variable::new("phi_inf_t0", "φ(∞,t_0)", "Final creep coefficient", "-"),
                    Variable::new("m0_eqp", "M_0Eqp", "First order moment, quasi-permanent combination", "kNm"),
                    Variable::new("m0_ed", "M_0Ed", "First order moment, design combination", "kNm"),
                ],
                assumptions: vec!["Moments include imperfections"],
                category: ClauseCategory::StructuralAnalysis,
                source_module: "eurocalc_core/src/codes/en_1992_1_1/chapter_5.rs",
            },

            // =================================================================
            // EN 1992-1-1: Chapter 6
            // =================================================================
            Clause::LinearFibreExtrapolation => ClauseMetadata {
                name: "Linear Fibre Extrapolation",
                description: "Value at an outer fibre from the value at an inner fibre, plane sections remaining plane.",
                formula_plain: "r_e = r * z_e / z_i",
                result: "r_e [units of r]",
                variables: vec![
                    Variable::new("r", "r", "Strain, stress or force at the inner fibre", "any"),
                    Variable::new("z_e", "z_e", "Distance of the outer fibre to the neutral axis", "mm"),
                    Variable::new("z_i", "z_i", "Distance of the inner fibre to the neutral axis", "mm"),
                ],
                assumptions: vec!["Linear strain distribution over the depth"],
                category: ClauseCategory::Resistances,
                source_module: "eurocalc_core/src/codes/en_1992_1_1/chapter_6.rs",
            },
            Clause::StrengthReductionFactor => ClauseMetadata {
                name: "Strength Reduction Factor",
                description: "Strength reduction factor for concrete cracked in shear.",
                formula_plain: "nu = 0.6 * (1 - f_ck / 250)",
                result: "ν [-]",
                variables: vec![Variable::new("f_ck", "f_ck", "Characteristic cylinder compressive strength", "MPa")],
                assumptions: vec!["Recommended value of the nationally determined parameter"],
                category: ClauseCategory::Resistances,
                source_module: "eurocalc_core/src/codes/en_1992_1_1/chapter_6.rs",
            },
            Clause::ShearReinforcementResistance => ClauseMetadata {
                name: "Shear Reinforcement Resistance",
                description: "Shear resistance of members with vertical shear reinforcement.",
                formula_plain: "V_Rd,s = A_sw / s * z * f_ywd * cot(theta)",
                result: "V_Rd,s [kN]",
                variables: vec![
                    Variable::new("a_sw", "A_sw", "Cross-sectional area of the shear reinforcement", "mm²"),
                    Variable::new("s", "s", "Spacing of the stirrups", "mm"),
                    Variable::new("z", "z", "Inner lever arm", "mm"),
                    Variable::new("f_ywd", "f_ywd", "Design yield strength of the shear reinforcement", "MPa"),
                    Variable::new("theta", "θ", "Angle of the compression strut", "deg"),
                ],
                assumptions: vec!["Vertical links", "1 ≤ cot θ ≤ 2.5 is not enforced"],
                category: ClauseCategory::Resistances,
                source_module: "eurocalc_core/src/codes/en_1992_1_1/chapter_6.rs",
            },
            Clause::PartialDiscontinuityTieForce => ClauseMetadata {
                name: "Partial Discontinuity Tie Force",
                description: "Transverse tie force in a region of partial discontinuity.",
                formula_plain: "T = 1/4 * (h - c) / h * N_Ed",
                result: "T [kN]",
                variables: vec![
                    Variable::new("c", "c", "Width of the loaded area", "mm"),
                    Variable::new("h", "h", "Width of the spread", "mm"),
                    Variable::new("n_ed", "N_Ed", "Concentrated force", "kN"),
                ],
                assumptions: vec!["Partial discontinuity, b ≤ H/2"],
                category: ClauseCategory::Resistances,
                source_module: "eurocalc_core/src/codes/en_1992_1_1/chapter_6.rs",
            },

            // =================================================================
            // EN 1992-1-1: Chapter 8
            // =================================================================
            Clause::EffectiveTransmissionLength => ClauseMetadata {
                name: "Effective Transmission Length",
                description: "Lower design transmission length beyond the 20 mm end zone.",
                formula_plain: "l_pt,eff = 0.8 * (l_pt - 20)",
                result: "l_pt,eff [mm]",
                variables: vec![Variable::new("l_pt", "l_pt", "Basic value of the transmission length", "mm")],
                assumptions: vec!["Pre-tensioned tendons"],
                category: ClauseCategory::Detailing,
                source_module: "eurocalc_core/src/codes/en_1992_1_1/chapter_8.rs",
            },
            Clause::HorizontalLargeBarReinforcement => ClauseMetadata {
                name: "Horizontal Large Bar Reinforcement",
                description: "Additional reinforcement parallel to the lateral face for large diameter bars.",
                formula_plain: "A_sh = 0.25 * A_s * n_1",
                result: "A_sh [mm²]",
                variables: vec![
                    Variable::new("a_s", "A_s", "Cross-sectional area of an anchored bar", "mm²"),
                    Variable::new("n_1", "n_1", "Number of layers anchored at the same point", "-"),
                ],
                assumptions: vec!["Bar diameter above φ_large, no transverse compression"],
                category: ClauseCategory::Detailing,
                source_module: "eurocalc_core/src/codes/en_1992_1_1/chapter_8.rs",
            },
            Clause::VerticalLargeBarReinforcement => ClauseMetadata {
                name: "Vertical Large Bar Reinforcement",
                description: "Additional reinforcement perpendicular to the lateral face for large diameter bars.",
                formula_plain: "A_sv = 0.25 * A_s * n_2",
                result: "A_sv [mm²]",
                variables: vec![
                    Variable::new("a_s", "A_s", "Cross-sectional area of an anchored bar", "mm²"),
                    Variable::new("n_2", "n_2", "Number of bars anchored in each layer", "-"),
                ],
                assumptions: vec!["Bar diameter above φ_large, no transverse compression"],
                category: ClauseCategory::Detailing,
                source_module: "eurocalc_core/src/codes/en_1992_1_1/chapter_8.rs",
            },
            Clause::LowerTransmissionLength => ClauseMetadata {
                name: "Lower Transmission Length",
                description: "Lower design value of the transmission length.",
                formula_plain: "l_pt1 = 0.8 * l_pt",
                result: "l_pt1 [mm]",
                variables: vec![Variable::new("l_pt", "l_pt", "Basic value of the transmission length", "mm")],
                assumptions: vec!["Used for local stress verification at release"],
                category: ClauseCategory::Detailing,
                source_module: "eurocalc_core/src/codes/en_1992_1_1/chapter_8.rs",
            },
            Clause::UpperTransmissionLength => ClauseMetadata {
                name: "Upper Transmission Length",
                description: "Upper design value of the transmission length.",
                formula_plain: "l_pt2 = 1.2 * l_pt",
                result: "l_pt2 [mm]",
                variables: vec![Variable::new("l_pt", "l_pt", "Basic value of the transmission length", "mm")],
                assumptions: vec!["Used for ultimate limit states"],
                category: ClauseCategory::Detailing,
                source_module: "eurocalc_core/src/codes/en_1992_1_1/chapter_8.rs",
            },
            Clause::DispersionLength => ClauseMetadata {
                name: "Dispersion Length",
                description: "Length over which concrete stresses spread to a linear distribution.",
                formula_plain: "l_disp = sqrt(l_pt^2 + d^2)",
                result: "l_disp [mm]",
                variables: vec![
                    Variable::new("l_pt", "l_pt", "Transmission length", "mm"),
                    Variable::new("d", "d", "Effective depth", "mm"),
                ],
                assumptions: vec!["Rectangular cross-section with straight tendons near the bottom"],
                category: ClauseCategory::Detailing,
                source_module: "eurocalc_core/src/codes/en_1992_1_1/chapter_8.rs",
            },

            // =================================================================
            // EN 1992-1-1: Chapter 9
            // =================================================================
            Clause::MinimumTensileReinforcement => ClauseMetadata {
                name: "Minimum Tensile Reinforcement",
                description: "Minimum area of longitudinal tension reinforcement in beams.",
                formula_plain: "A_s,min = max(0.26 * f_ctm / f_yk * b_t * d, 0.0013 * b_t * d)",
                result: "A_s,min [mm²]",
                variables: vec![
                    Variable::new("f_ctm", "f_ctm", "Mean axial tensile strength of concrete", "MPa"),
                    Variable::new("f_yk", "f_yk", "Characteristic yield strength of reinforcement", "MPa"),
                    Variable::new("b_t", "b_t", "Mean width of the tension zone", "mm"),
                    Variable::new("d", "d", "Effective depth", "mm"),
                ],
                assumptions: vec!["Recommended value of the nationally determined parameter"],
                category: ClauseCategory::Detailing,
                source_module: "eurocalc_core/src/codes/en_1992_1_1/chapter_9.rs",
            },
            Clause::ShearReinforcementRatio => ClauseMetadata {
                name: "Shear Reinforcement Ratio",
                description: "Ratio of shear reinforcement.",
                formula_plain: "rho_w = A_sw / (s * b_w * sin(alpha))",
                result: "ρ_w [-]",
                variables: vec![
                    Variable::new("a_sw", "A_sw", "Area of shear reinforcement within length s", "mm²"),
                    Variable::new("s", "s", "Spacing of the shear reinforcement", "mm"),
                    Variable::new("b_w", "b_w", "Breadth of the web", "mm"),
                    Variable::new("alpha", "α", "Angle between shear reinforcement and longitudinal axis", "deg"),
                ],
                assumptions: vec![],
                category: ClauseCategory::Detailing,
                source_module: "eurocalc_core/src/codes/en_1992_1_1/chapter_9.rs",
            },
            Clause::MinimumShearReinforcementRatio => ClauseMetadata {
                name: "Minimum Shear Reinforcement Ratio",
                description: "Minimum ratio of shear reinforcement in beams.",
                formula_plain: "rho_w,min = 0.08 * sqrt(f_ck) / f_yk",
                result: "ρ_w,min [-]",
                variables: vec![
                    Variable::new("f_ck", "f_ck", "Characteristic cylinder compressive strength", "MPa"),
                    Variable::new("f_yk", "f_yk", "Characteristic yield strength of reinforcement", "MPa"),
                ],
                assumptions: vec!["Recommended value of the nationally determined parameter"],
                category: ClauseCategory::Detailing,
                source_module: "eurocalc_core/src/codes/en_1992_1_1/chapter_9.rs",
            },
            Clause::MaximumLongitudinalLinkSpacing => ClauseMetadata {
                name: "Maximum Longitudinal Link Spacing",
                description: "Maximum longitudinal spacing between shear assemblies.",
                formula_plain: "s_l,max = 0.75 * d * (1 + cot(alpha))",
                result: "s_l,max [mm]",
                variables: vec![
                    Variable::new("d", "d", "Effective depth", "mm"),
                    Variable::new("alpha", "α", "Inclination of the shear reinforcement", "deg"),
                ],
                assumptions: vec!["Recommended value of the nationally determined parameter"],
                category: ClauseCategory::Detailing,
                source_module: "eurocalc_core/src/codes/en_1992_1_1/chapter_9.rs",
            },
            Clause::MaximumBentUpBarSpacing => ClauseMetadata {
                name: "Maximum Bent-Up Bar Spacing",
                description: "Maximum longitudinal spacing of bent-up bars.",
                formula_plain: "s_b,max = 0.6 * d * (1 + cot(alpha))",
                result: "s_b,max [mm]",
                variables: vec![
                    Variable::new("d", "d", "Effective depth", "mm"),
                    Variable::new("alpha", "α", "Inclination of the bent-up bars", "deg"),
                ],
                assumptions: vec!["Recommended value of the nationally determined parameter"],
                category: ClauseCategory::Detailing,
                source_module: "eurocalc_core/src/codes/en_1992_1_1/chapter_9.rs",
            },

            // =================================================================
            // EN 1993-1-1: Chapter 5
            // =================================================================
            Clause::GlobalSwayImperfection => ClauseMetadata {
                name: "Global Sway Imperfection",
                description: "Global initial sway imperfection of a frame.",
                formula_plain: "phi = phi_0 * alpha_h * alpha_m",
                result: "φ [rad]",
                variables: vec![
                    Variable::new("phi_0", "φ_0", "Basic value", "rad"),
                    Variable::new("alpha_h", "α_h", "Reduction factor for height", "-"),
                    Variable::new("alpha_m", "α_m", "Reduction factor for number of columns in a row", "-"),
                ],
                assumptions: vec!["φ_0 = 1/200"],
                category: ClauseCategory::StructuralAnalysis,
                source_module: "eurocalc_core/src/codes/en_1993_1_1/chapter_5.rs",
            },
            Clause::FrameSwayImperfectionCriterion => ClauseMetadata {
                name: "Frame Sway Imperfection Criterion",
                description: "Whether sway imperfections may be disregarded in a building frame.",
                formula_plain: "H_Ed >= 0.15 * V_Ed",
                result: "OK / Not OK, unity = H_Ed / (0.15 * V_Ed)",
                variables: vec![
                    Variable::new("h_ed", "H_Ed", "Design value of the total horizontal load", "kN"),
                    Variable::new("v_ed", "V_Ed", "Design value of the total vertical load", "kN"),
                ],
                assumptions: vec!["Unity check of 1.0 or more passes"],
                category: ClauseCategory::DesignChecks,
                source_module: "eurocalc_core/src/codes/en_1993_1_1/chapter_5.rs",
            },

            // =================================================================
            // EN 1993-1-1: Chapter 6
            // =================================================================
            Clause::LinearInteractionCheck => ClauseMetadata {
                name: "Linear Interaction Check",
                description: "Conservative linear summation of utilisation ratios for combined axial force and bending.",
                formula_plain: "N_Ed/N_Rd + M_y,Ed/M_y,Rd + M_z,Ed/M_z,Rd <= 1",
                result: "OK / Not OK, unity = sum of ratios",
                variables: vec![
                    Variable::new("n_ed", "N_Ed", "Design axial force", "kN"),
                    Variable::new("n_rd", "N_Rd", "Design axial resistance", "kN"),
                    Variable::new("m_y_ed", "M_y,Ed", "Design moment about y-y", "kNm"),
                    Variable::new("m_y_rd", "M_y,Rd", "Design moment resistance about y-y", "kNm"),
                    Variable::new("m_z_ed", "M_z,Ed", "Design moment about z-z", "kNm"),
                    Variable::new("m_z_rd", "M_z,Rd", "Design moment resistance about z-z", "kNm"),
                ],
                assumptions: vec!["Class 3 or conservative for class 1 and 2"],
                category: ClauseCategory::DesignChecks,
                source_module: "eurocalc_core/src/codes/en_1993_1_1/chapter_6.rs",
            },
            Clause::PlasticTensionResistance => ClauseMetadata {
                name: "Plastic Tension Resistance",
                description: "Design plastic resistance of the gross cross-section in tension.",
                formula_plain: "N_pl,Rd = A * f_y / gamma_M0",
                result: "N_pl,Rd [kN]",
                variables: vec![
                    Variable::new("a", "A", "Gross cross-sectional area", "mm²"),
                    Variable::new("f_y", "f_y", "Yield strength", "MPa"),
                    Variable::new("gamma_m0", "γ_M0", "Partial factor for resistance of cross-sections", "-"),
                ],
                assumptions: vec![],
                category: ClauseCategory::Resistances,
                source_module: "eurocalc_core/src/codes/en_1993_1_1/chapter_6.rs",
            },
            Clause::CompressionCheck => ClauseMetadata {
                name: "Compression Check",
                description: "Design compression force against the compression resistance.",
                formula_plain: "N_Ed / N_c,Rd <= 1",
                result: "OK / Not OK, unity = N_Ed / N_c,Rd",
                variables: vec![
                    Variable::new("n_ed", "N_Ed", "Design compression force", "kN"),
                    Variable::new("n_c_rd", "N_c,Rd", "Design compression resistance", "kN"),
                ],
                assumptions: vec![],
                category: ClauseCategory::DesignChecks,
                source_module: "eurocalc_core/src/codes/en_1993_1_1/chapter_6.rs",
            },
            Clause::PlasticMomentResistance => ClauseMetadata {
                name: "Plastic Moment Resistance",
                description: "Design plastic bending resistance.",
                formula_plain: "M_pl,Rd = W_pl * f_y / gamma_M0",
                result: "M_pl,Rd [kNm]",
                variables: vec![
                    Variable::new("w_pl", "W_pl", "Plastic section modulus", "mm³"),
                    Variable::new("f_y", "f_y", "Yield strength", "MPa"),
                    Variable::new("gamma_m0", "γ_M0", "Partial factor for resistance of cross-sections", "-"),
                ],
                assumptions: vec!["Class 1 or 2 cross-section"],
                category: ClauseCategory::Resistances,
                source_module: "eurocalc_core/src/codes/en_1993_1_1/chapter_6.rs",
            },
            Clause::PlasticShearResistance => ClauseMetadata {
                name: "Plastic Shear Resistance",
                description: "Design plastic shear resistance.",
                formula_plain: "V_pl,Rd = A_v * (f_y / sqrt(3)) / gamma_M0",
                result: "V_pl,Rd [kN]",
                variables: vec![
                    Variable::new("a_v", "A_v", "Shear area", "mm²"),
                    Variable::new("f_y", "f_y", "Yield strength", "MPa"),
                    Variable::new("gamma_m0", "γ_M0", "Partial factor for resistance of cross-sections", "-"),
                ],
                assumptions: vec!["No torsion"],
                category: ClauseCategory::Resistances,
                source_module: "eurocalc_core/src/codes/en_1993_1_1/chapter_6.rs",
            },
            Clause::WebShearBucklingCheck => ClauseMetadata {
                name: "Web Shear Buckling Check",
                description: "Web slenderness below which shear buckling need not be verified.",
                formula_plain: "h_w / t_w <= 72 * epsilon / eta",
                result: "OK / Not OK, unity = (h_w / t_w) / (72 * epsilon / eta)",
                variables: vec![
                    Variable::new("h_w", "h_w", "Web depth", "mm"),
                    Variable::new("t_w", "t_w", "Web thickness", "mm"),
                    Variable::new("epsilon", "ε", "Material factor sqrt(235 / f_y)", "-"),
                    Variable::new("eta", "η", "Factor from EN 1993-1-5 (1.0 conservative)", "-"),
                ],
                assumptions: vec!["Unstiffened web"],
                category: ClauseCategory::DesignChecks,
                source_module: "eurocalc_core/src/codes/en_1993_1_1/chapter_6.rs",
            },
            Clause::BucklingResistance => ClauseMetadata {
                name: "Buckling Resistance",
                description: "Design buckling resistance of a compression member.",
                formula_plain: "N_b,Rd = chi * A * f_y / gamma_M1",
                result: "N_b,Rd [kN]",
                variables: vec![
                    Variable::new("chi", "χ", "Reduction factor for the buckling mode", "-"),
                    Variable::new("a", "A", "Cross-sectional area", "mm²"),
                    Variable::new("f_y", "f_y", "Yield strength", "MPa"),
                    Variable::new("gamma_m1", "γ_M1", "Partial factor for resistance of members", "-"),
                ],
                assumptions: vec!["Class 1, 2 or 3 cross-section"],
                category: ClauseCategory::Resistances,
                source_module: "eurocalc_core/src/codes/en_1993_1_1/chapter_6.rs",
            },
            Clause::BucklingReductionFactor => ClauseMetadata {
                name: "Buckling Reduction Factor",
                description: "Reduction factor for flexural buckling.",
                formula_plain: "chi = 1 / (Phi + sqrt(Phi^2 - lambda^2)) <= 1, Phi = 0.5 * (1 + alpha * (lambda - 0.2) + lambda^2)",
                result: "χ [-]",
                variables: vec![
                    Variable::new("alpha", "α", "Imperfection factor (Table 6.1)", "-"),
                    Variable::new("lambda_bar", "λ̄", "Non-dimensional slenderness", "-"),
                ],
                assumptions: vec!["Flexural buckling of uniform members"],
                category: ClauseCategory::Resistances,
                source_module: "eurocalc_core/src/codes/en_1993_1_1/chapter_6.rs",
            },
            Clause::NonDimensionalSlenderness => ClauseMetadata {
                name: "Non-Dimensional Slenderness",
                description: "Non-dimensional slenderness for flexural buckling.",
                formula_plain: "lambda = sqrt(A * f_y / N_cr)",
                result: "λ̄ [-]",
                variables: vec![
                    Variable::new("a", "A", "Cross-sectional area", "mm²"),
                    Variable::new("f_y", "f_y", "Yield strength", "MPa"),
                    Variable::new("n_cr", "N_cr", "Elastic critical force", "kN"),
                ],
                assumptions: vec!["Class 1, 2 or 3 cross-section"],
                category: ClauseCategory::Resistances,
                source_module: "eurocalc_core/src/codes/en_1993_1_1/chapter_6.rs",
            },
        }
    }
}

// ============================================================================
// Catalog Generation
// ============================================================================

/// Generate the markdown catalog of every clause.
///
/// Output of the `gen-catalog` binary, committed as `CATALOG.md`.
pub fn generate_catalog_markdown() -> String {
    let mut output = String::with_capacity(32_000);

    output.push_str(
        r#"# Eurocalc Formula Catalog

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-catalog`

Every formula implemented by Eurocalc, with its equation number, symbols and
the file it lives in. Inputs are validated as non-negative unless an
assumption says otherwise.

## Units

| Quantity | Unit |
|----------|------|
| Length | mm |
| Area | mm² |
| Stress, strength | MPa (N/mm²) |
| Force | kN |
| Moment | kNm |
| Angle | deg, rad where marked |

---

"#,
    );

    let categories = Clause::all_categories();

    for category in &categories {
        output.push_str(&format!("## {}\n\n", category.display_name()));

        for clause in Clause::in_category(*category) {
            let meta = clause.metadata();

            output.push_str(&format!("### ({}) {}\n\n", clause.label(), meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));
            output.push_str(&format!("**Result:** {}\n\n", meta.result));

            output.push_str("**Variables:**\n\n");
            output.push_str("| Input | Symbol | Description | Units |\n");
            output.push_str("|-------|--------|-------------|-------|\n");
            for var in &meta.variables {
                output.push_str(&format!(
                    "| `{}` | {} | {} | {} |\n",
                    var.name, var.symbol, var.description, var.units
                ));
            }
            output.push('\n');

            output.push_str(&format!("**Reference:** {}\n\n", clause.reference()));
            output.push_str(&format!("**Source:** [`{:?}`]({})\n\n", clause, meta.source_module));

            if !meta.assumptions.is_empty() {
                output.push_str("**Assumptions:**\n");
                for assumption in &meta.assumptions {
                    output.push_str(&format!("- {}\n", assumption));
                }
                output.push('\n');
            }

            output.push_str("---\n\n");
        }
    }

    output.push_str("## Steel Profiles\n\n| Series | Profiles | Range |\n|--------|----------|-------|\n");
    for series in crate::profiles::ProfileSeries::ALL {
        let profiles = series.profiles();
        let first = profiles.first().map(|p| p.name).unwrap_or_default();
        let last = profiles.last().map(|p| p.name).unwrap_or_default();
        output.push_str(&format!("| {} | {} | {} to {} |\n", series, profiles.len(), first, last));
    }
    output.push('\n');

    output.push_str(&format!(
        "## Statistics\n\n- **Total Clauses:** {}\n- **Documents:** {}\n- **Categories:** {}\n\n",
        ALL_CLAUSES.len(),
        SourceDocument::ALL.len(),
        categories.len()
    ));

    output.push_str(
        r#"## How to Audit

1. Find the clause in the sections above
2. Compare the **Formula** with the equation number in the cited standard
3. Follow the **Source** link to the implementation and its unit tests
4. Run `eurocalc eval <document> <label> name=value...` to see the full derivation

"#,
    );

    output
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn inputs(pairs: &[(&str, f64)]) -> Inputs {
        pairs.iter().map(|(name, value)| (name.to_string(), *value)).collect()
    }

    #[test]
    fn test_all_clauses_have_metadata() {
        assert_eq!(ALL_CLAUSES.len(), 32);
        assert_eq!(Clause::in_document(SourceDocument::En1992_1_1_2004).len(), 21);
        assert_eq!(Clause::in_document(SourceDocument::En1993_1_1_2005).len(), 11);

        for clause in ALL_CLAUSES {
            let meta = clause.metadata();
            assert!(!meta.name.is_empty(), "{:?} has no name", clause);
            assert!(!meta.formula_plain.is_empty(), "{:?} has no formula", clause);
            let names: Vec<&str> = meta.variables.iter().map(|v| v.name).collect();
            assert_eq!(names, clause.input_names(), "{:?} variables out of sync", clause);
        }
    }

    #[test]
    fn test_labels_unique_per_document() {
        for (i, a) in ALL_CLAUSES.iter().enumerate() {
            for b in &ALL_CLAUSES[i + 1..] {
                assert!(
                    a.document() != b.document() || a.label() != b.label(),
                    "{:?} and {:?} share a label",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn test_find() {
        let doc = SourceDocument::En1992_1_1_2004;
        assert_eq!(Clause::find(doc, "6.58").unwrap(), Clause::PartialDiscontinuityTieForce);
        assert_eq!(Clause::find(doc, "(6.6n)").unwrap(), Clause::StrengthReductionFactor);

        let err = Clause::find(SourceDocument::En1993_1_1_2005, "6.58").unwrap_err();
        assert_eq!(err, CalcError::clause_not_found("EN 1993-1-1:2005", "6.58"));
    }

    #[test]
    fn test_evaluate_check_clause() {
        let evaluation = Clause::FrameSwayImperfectionCriterion
            .evaluate(&inputs(&[("h_ed", 50000.0), ("v_ed", 100000.0)]))
            .unwrap();
        assert_eq!(evaluation.passes(), Some(true));
        assert_relative_eq!(evaluation.unity_check.unwrap(), 10.0 / 3.0, epsilon = 1e-12);
        assert_eq!(evaluation.latex_short, r"\text{CHECK} \to \text{OK}");
    }

    #[test]
    fn test_evaluate_value_clause() {
        let evaluation = Clause::PartialDiscontinuityTieForce
            .evaluate(&inputs(&[("c", 50.0), ("h", 100.0), ("n_ed", 200.0)]))
            .unwrap();
        assert_eq!(evaluation.value, FormulaOutput::Number(25.0));
        assert_eq!(evaluation.unity_check, None);
        assert_eq!(evaluation.passes(), None);
        assert!(evaluation.latex_complete.ends_with("= 25.00"));
    }

    #[test]
    fn test_evaluate_rejects_bad_inputs() {
        let clause = Clause::VerticalLargeBarReinforcement;

        let missing = clause.evaluate(&inputs(&[("a_s", 100.0)])).unwrap_err();
        assert_eq!(missing, CalcError::missing_input("n_2"));

        let unexpected = clause
            .evaluate(&inputs(&[("a_s", 100.0), ("n_2", 2.0), ("n_1", 1.0)]))
            .unwrap_err();
        assert_eq!(unexpected, CalcError::unexpected_input("n_1"));

        let negative = clause.evaluate(&inputs(&[("a_s", -100.0), ("n_2", 2.0)])).unwrap_err();
        assert_eq!(negative, CalcError::negative_value("a_s", -100.0));
    }

    #[test]
    fn test_every_clause_evaluates_with_unit_inputs() {
        for clause in ALL_CLAUSES {
            let all_ones: Inputs = clause.input_names().iter().map(|n| (n.to_string(), 1.0)).collect();
            let evaluation = clause.evaluate(&all_ones).unwrap();
            assert_eq!(evaluation.label, clause.label());
            assert_eq!(evaluation.unity_check.is_some(), clause.is_check(), "{:?}", clause);
        }
    }

    #[test]
    fn test_evaluation_serialization() {
        let check = Clause::CompressionCheck
            .evaluate(&inputs(&[("n_ed", 50.0), ("n_c_rd", 100.0)]))
            .unwrap();
        let json = serde_json::to_value(&check).unwrap();
        assert_eq!(json["value"], serde_json::json!(true));
        assert_eq!(json["unity_check"], serde_json::json!(0.5));
        assert_eq!(json["document"], serde_json::json!("En1993_1_1_2005"));

        let value = Clause::LowerTransmissionLength.evaluate(&inputs(&[("l_pt", 100.0)])).unwrap();
        let json = serde_json::to_value(&value).unwrap();
        assert!(json.get("unity_check").is_none());
        let back: Evaluation = serde_json::from_value(json).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn test_categories_sorted() {
        let orders: Vec<u8> = Clause::all_categories().iter().map(|c| c.sort_order()).collect();
        let mut sorted = orders.clone();
        sorted.sort();
        assert_eq!(orders, sorted);
        assert_eq!(orders.len(), 5);
    }

    #[test]
    fn test_generate_catalog_markdown() {
        let md = generate_catalog_markdown();
        assert!(md.contains("# Eurocalc Formula Catalog"));
        assert!(md.contains("### (6.58) Partial Discontinuity Tie Force"));
        assert!(md.contains("**Reference:** EN 1993-1-1:2005, Eq. (5.7)"));
        assert!(md.contains("| `n_ed` | N_Ed |"));
        assert!(md.contains("| IPE | 18 | IPE 80 to IPE 600 |"));
        assert!(md.contains("**Total Clauses:** 32"));
    }
}
