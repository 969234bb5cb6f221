//! European Steel Profiles
//!
//! Nominal dimensions of hot-rolled I and H sections per EN 10365.
//! All dimensions in millimetres.
//!
//! ## Supported Series
//!
//! - **IPE**: Parallel flange I-beams (IPE 80 to IPE 600)
//! - **HEA**: Wide flange H-beams, light series (HE 100 A to HE 600 A)
//! - **HEB**: Wide flange H-beams, standard series (HE 100 B to HE 600 B)
//!
//! Only the tabulated dimensions are stored. Area, shear area and weight are
//! derived from them with the usual root-radius correction, which reproduces
//! the catalogue values to within rounding.

use std::f64::consts::PI;

use serde::Serialize;

use crate::units::{KgM, Mm, Mm2, STEEL_DENSITY_KG_M3};

use super::ProfileSeries::{self, Hea, Heb, Ipe};

/// Hot-rolled I or H section with fixed dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SteelProfile {
    /// Series the profile belongs to
    pub series: ProfileSeries,
    /// Designation (e.g., "IPE 300", "HEB 200")
    pub name: &'static str,
    /// h, overall height (mm)
    pub h: Mm,
    /// b, flange width (mm)
    pub b: Mm,
    /// t_w, web thickness (mm)
    pub t_w: Mm,
    /// t_f, flange thickness (mm)
    pub t_f: Mm,
    /// r, root radius between web and flange (mm)
    pub r: Mm,
}

impl SteelProfile {
    const fn new(series: ProfileSeries, name: &'static str, h: Mm, b: Mm, t_w: Mm, t_f: Mm, r: Mm) -> Self {
        Self { series, name, h, b, t_w, t_f, r }
    }

    /// Cross-sectional area: 2·b·t_f + (h − 2·t_f)·t_w + (4 − π)·r²
    pub fn area(&self) -> Mm2 {
        2.0 * self.b * self.t_f + (self.h - 2.0 * self.t_f) * self.t_w + (4.0 - PI) * self.r.powi(2)
    }

    /// Depth between the flanges, h_w = h − 2·t_f
    pub fn web_height(&self) -> Mm {
        self.h - 2.0 * self.t_f
    }

    /// Straight part of the web, d = h − 2·t_f − 2·r
    pub fn straight_web_depth(&self) -> Mm {
        self.web_height() - 2.0 * self.r
    }

    /// Shear area for load parallel to the web (EN 1993-1-1 6.2.6(3)a):
    /// A − 2·b·t_f + (t_w + 2·r)·t_f, but not less than η·h_w·t_w.
    pub fn shear_area(&self, eta: f64) -> Mm2 {
        let rolled = self.area() - 2.0 * self.b * self.t_f + (self.t_w + 2.0 * self.r) * self.t_f;
        rolled.max(eta * self.web_height() * self.t_w)
    }

    /// Nominal mass per metre
    pub fn weight_per_metre(&self) -> KgM {
        self.area() * 1.0e-6 * STEEL_DENSITY_KG_M3
    }
}

impl std::fmt::Display for SteelProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (h={} mm, b={} mm, tw={} mm, tf={} mm, r={} mm)",
            self.name, self.h, self.b, self.t_w, self.t_f, self.r
        )
    }
}

/// IPE series
pub static IPE: [SteelProfile; 18] = [
    SteelProfile::new(Ipe, "IPE 80", 80.0, 46.0, 3.8, 5.2, 5.0),
    SteelProfile::new(Ipe, "IPE 100", 100.0, 55.0, 4.1, 5.7, 7.0),
    SteelProfile::new(Ipe, "IPE 120", 120.0, 64.0, 4.4, 6.3, 7.0),
    SteelProfile::new(Ipe, "IPE 140", 140.0, 73.0, 4.7, 6.9, 7.0),
    SteelProfile::new(Ipe, "IPE 160", 160.0, 82.0, 5.0, 7.4, 9.0),
    SteelProfile::new(Ipe, "IPE 180", 180.0, 91.0, 5.3, 8.0, 9.0),
    SteelProfile::new(Ipe, "IPE 200", 200.0, 100.0, 5.6, 8.5, 12.0),
    SteelProfile::new(Ipe, "IPE 220", 220.0, 110.0, 5.9, 9.2, 12.0),
    SteelProfile::new(Ipe, "IPE 240", 240.0, 120.0, 6.2, 9.8, 15.0),
    SteelProfile::new(Ipe, "IPE 270", 270.0, 135.0, 6.6, 10.2, 15.0),
    SteelProfile::new(Ipe, "IPE 300", 300.0, 150.0, 7.1, 10.7, 15.0),
    SteelProfile::new(Ipe, "IPE 330", 330.0, 160.0, 7.5, 11.5, 18.0),
    SteelProfile::new(Ipe, "IPE 360", 360.0, 170.0, 8.0, 12.7, 18.0),
    SteelProfile::new(Ipe, "IPE 400", 400.0, 180.0, 8.6, 13.5, 21.0),
    SteelProfile::new(Ipe, "IPE 450", 450.0, 190.0, 9.4, 14.6, 21.0),
    SteelProfile::new(Ipe, "IPE 500", 500.0, 200.0, 10.2, 16.0, 21.0),
    SteelProfile::new(Ipe, "IPE 550", 550.0, 210.0, 11.1, 17.2, 24.0),
    SteelProfile::new(Ipe, "IPE 600", 600.0, 220.0, 12.0, 19.0, 24.0),
];

/// HEA series
pub static HEA: [SteelProfile; 19] = [
    SteelProfile::new(Hea, "HEA 100", 96.0, 100.0, 5.0, 8.0, 12.0),
    SteelProfile::new(Hea, "HEA 120", 114.0, 120.0, 5.0, 8.0, 12.0),
    SteelProfile::new(Hea, "HEA 140", 133.0, 140.0, 5.5, 8.5, 12.0),
    SteelProfile::new(Hea, "HEA 160", 152.0, 160.0, 6.0, 9.0, 15.0),
    SteelProfile::new(Hea, "HEA 180", 171.0, 180.0, 6.0, 9.5, 15.0),
    SteelProfile::new(Hea, "HEA 200", 190.0, 200.0, 6.5, 10.0, 18.0),
    SteelProfile::new(Hea, "HEA 220", 210.0, 220.0, 7.0, 11.0, 18.0),
    SteelProfile::new(Hea, "HEA 240", 230.0, 240.0, 7.5, 12.0, 21.0),
    SteelProfile::new(Hea, "HEA 260", 250.0, 260.0, 7.5, 12.5, 24.0),
    SteelProfile::new(Hea, "HEA 280", 270.0, 280.0, 8.0, 13.0, 24.0),
    SteelProfile::new(Hea, "HEA 300", 290.0, 300.0, 8.5, 14.0, 27.0),
    SteelProfile::new(Hea, "HEA 320", 310.0, 300.0, 9.0, 15.5, 27.0),
    SteelProfile::new(Hea, "HEA 340", 330.0, 300.0, 9.5, 16.5, 27.0),
    SteelProfile::new(Hea, "HEA 360", 350.0, 300.0, 10.0, 17.5, 27.0),
    SteelProfile::new(Hea, "HEA 400", 390.0, 300.0, 11.0, 19.0, 27.0),
    SteelProfile::new(Hea, "HEA 450", 440.0, 300.0, 11.5, 21.0, 27.0),
    SteelProfile::new(Hea, "HEA 500", 490.0, 300.0, 12.0, 23.0, 27.0),
    SteelProfile::new(Hea, "HEA 550", 540.0, 300.0, 12.5, 24.0, 27.0),
    SteelProfile::new(Hea, "HEA 600", 590.0, 300.0, 13.0, 25.0, 27.0),
];

/// HEB series
pub static HEB: [SteelProfile; 19] = [
    SteelProfile::new(Heb, "HEB 100", 100.0, 100.0, 6.0, 10.0, 12.0),
    SteelProfile::new(Heb, "HEB 120", 120.0, 120.0, 6.5, 11.0, 12.0),
    SteelProfile::new(Heb, "HEB 140", 140.0, 140.0, 7.0, 12.0, 12.0),
    SteelProfile::new(Heb, "HEB 160", 160.0, 160.0, 8.0, 13.0, 15.0),
    SteelProfile::new(Heb, "HEB 180", 180.0, 180.0, 8.5, 14.0, 15.0),
    SteelProfile::new(Heb, "HEB 200", 200.0, 200.0, 9.0, 15.0, 18.0),
    SteelProfile::new(Heb, "HEB 220", 220.0, 220.0, 9.5, 16.0, 18.0),
    SteelProfile::new(Heb, "HEB 240", 240.0, 240.0, 10.0, 17.0, 21.0),
    SteelProfile::new(Heb, "HEB 260", 260.0, 260.0, 10.0, 17.5, 24.0),
    SteelProfile::new(Heb, "HEB 280", 280.0, 280.0, 10.5, 18.0, 24.0),
    SteelProfile::new(Heb, "HEB 300", 300.0, 300.0, 11.0, 19.0, 27.0),
    SteelProfile::new(Heb, "HEB 320", 320.0, 300.0, 11.5, 20.5, 27.0),
    SteelProfile::new(Heb, "HEB 340", 340.0, 300.0, 12.0, 21.5, 27.0),
    SteelProfile::new(Heb, "HEB 360", 360.0, 300.0, 12.5, 22.5, 27.0),
    SteelProfile::new(Heb, "HEB 400", 400.0, 300.0, 13.5, 24.0, 27.0),
    SteelProfile::new(Heb, "HEB 450", 450.0, 300.0, 14.0, 26.0, 27.0),
    SteelProfile::new(Heb, "HEB 500", 500.0, 300.0, 14.5, 28.0, 27.0),
    SteelProfile::new(Heb, "HEB 550", 550.0, 300.0, 15.0, 29.0, 27.0),
    SteelProfile::new(Heb, "HEB 600", 600.0, 300.0, 15.5, 30.0, 27.0),
];

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ipe_300_derived_properties() {
        let ipe = &IPE[10];
        assert_eq!(ipe.name, "IPE 300");
        // Catalogue: A = 53.8 cm², A_vz = 25.7 cm², G = 42.2 kg/m
        assert_relative_eq!(ipe.area(), 5381.1, epsilon = 0.5);
        assert_relative_eq!(ipe.shear_area(1.0), 2568.1, epsilon = 0.5);
        assert_relative_eq!(ipe.weight_per_metre(), 42.2, epsilon = 0.1);
        assert_relative_eq!(ipe.web_height(), 278.6, epsilon = 1e-9);
        assert_relative_eq!(ipe.straight_web_depth(), 248.6, epsilon = 1e-9);
    }

    #[test]
    fn test_heb_200_area() {
        // Catalogue: A = 78.1 cm²
        assert_relative_eq!(HEB[5].area(), 7808.0, epsilon = 1.0);
    }

    #[test]
    fn test_tables_are_sorted_by_height() {
        for table in [&IPE[..], &HEA[..], &HEB[..]] {
            assert!(table.windows(2).all(|w| w[0].h < w[1].h));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(
            HEA[0].to_string(),
            "HEA 100 (h=96 mm, b=100 mm, tw=5 mm, tf=8 mm, r=12 mm)"
        );
    }
}
