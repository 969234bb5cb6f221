//! # EN 1992-1-1:2004
//!
//! Eurocode 2: Design of concrete structures - Part 1-1: General rules and
//! rules for buildings.
//!
//! Units follow the standard: mm, mm², MPa, kN, kNm; angles in degrees.
//! Recommended values of nationally determined parameters are not applied
//! implicitly, they are inputs.

pub mod chapter_3;
pub mod chapter_5;
pub mod chapter_6;
pub mod chapter_8;
pub mod chapter_9;

pub use chapter_3::{DesignCompressiveStrength, DesignTensileStrength};
pub use chapter_5::{
    EffectiveCreepRatio, ImperfectionEccentricity, ImperfectionHorizontalForce, InclinationImperfection,
};
pub use chapter_6::{
    LinearFibreExtrapolation, PartialDiscontinuityTieForce, ShearReinforcementResistance,
    StrengthReductionFactor,
};
pub use chapter_8::{
    DispersionLength, EffectiveTransmissionLength, HorizontalLargeBarReinforcement, LowerTransmissionLength,
    UpperTransmissionLength, VerticalLargeBarReinforcement,
};
pub use chapter_9::{
    MaximumBentUpBarSpacing, MaximumLongitudinalLinkSpacing, MinimumShearReinforcementRatio,
    MinimumTensileReinforcement, ShearReinforcementRatio,
};
