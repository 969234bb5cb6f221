//! # EN 1993-1-1:2005
//!
//! Eurocode 3: Design of steel structures - Part 1-1: General rules and
//! rules for buildings.

pub mod chapter_5;
pub mod chapter_6;

pub use chapter_5::{FrameSwayImperfectionCriterion, FrameTiltCriterion, GlobalSwayImperfection};
pub use chapter_6::{
    BucklingReductionFactor, BucklingResistance, CompressionCheck, LinearInteractionCheck,
    NonDimensionalSlenderness, PlasticMomentResistance, PlasticShearResistance, PlasticTensionResistance,
    WebShearBucklingCheck,
};
