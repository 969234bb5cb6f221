//! # Unit Types
//!
//! Semantic aliases for the physical quantities that appear in formula
//! signatures. They are plain `f64` aliases: they document what a field
//! means, they do not enforce dimensions.
//!
//! ## SI Units
//!
//! Eurocode clauses are written in SI units and the catalog follows the
//! usual design-office conventions:
//! - Length: millimetres (mm)
//! - Force: kilonewtons (kN)
//! - Moment: kilonewton-metres (kNm)
//! - Stress: megapascals (MPa = N/mm²)
//! - Angle: degrees (converted to radians inside the formulas)
//!
//! A handful of formulas are unit-agnostic (ratios, forces scaled by
//! factors); for those the output simply carries the unit of the input.
//!
//! ## Example
//!
//! ```rust
//! use eurocalc_core::units::{Deg, Mm, to_radians};
//!
//! let d: Mm = 450.0;
//! let alpha: Deg = 90.0;
//! assert!((to_radians(alpha) - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
//! # let _ = d;
//! ```

// ============================================================================
// Geometry
// ============================================================================

/// Length in millimetres
pub type Mm = f64;

/// Area in square millimetres
pub type Mm2 = f64;

/// Section modulus in cubic millimetres
pub type Mm3 = f64;

// ============================================================================
// Forces and Stresses
// ============================================================================

/// Force in kilonewtons
pub type Kn = f64;

/// Force in newtons
pub type N = f64;

/// Moment in kilonewton-metres
pub type Knm = f64;

/// Stress in megapascals (N/mm²)
pub type Mpa = f64;

/// Mass per length in kilograms per metre
pub type KgM = f64;

// ============================================================================
// Dimensionless
// ============================================================================

/// Angle in degrees
pub type Deg = f64;

/// Angle in radians
pub type Rad = f64;

/// Dimensionless ratio, factor or coefficient
pub type Dimensionless = f64;

// ============================================================================
// Constants and Conversions
// ============================================================================

/// Density of structural steel (kg/m³), EN 1991-1-1 Table A.4
pub const STEEL_DENSITY_KG_M3: f64 = 7850.0;

/// Convert degrees to radians
#[inline]
pub fn to_radians(angle: Deg) -> Rad {
    angle.to_radians()
}

/// Convert N to kN
#[inline]
pub fn n_to_kn(force: N) -> Kn {
    force / 1000.0
}

/// Convert Nmm to kNm
#[inline]
pub fn nmm_to_knm(moment: f64) -> Knm {
    moment / 1.0e6
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_radians() {
        assert!((to_radians(180.0) - std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn test_force_and_moment_conversion() {
        assert_eq!(n_to_kn(12_500.0), 12.5);
        assert_eq!(nmm_to_knm(3.0e6), 3.0);
    }
}
