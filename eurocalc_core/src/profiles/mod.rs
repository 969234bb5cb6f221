//! # Steel Profiles
//!
//! Static lookup tables of standard European rolled sections, so that the
//! section properties needed by the EN 1993-1-1 formulas can be taken from a
//! designation instead of typed in.
//!
//! ## Example
//!
//! ```
//! use eurocalc_core::profiles::{ProfileSeries, SteelProfile};
//!
//! let ipe = SteelProfile::lookup("ipe300").unwrap();
//! assert_eq!(ipe.series, ProfileSeries::Ipe);
//! assert_eq!(ipe.h, 300.0);
//! ```

pub mod steel;

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

pub use steel::SteelProfile;

/// Standard section series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProfileSeries {
    Ipe,
    Hea,
    Heb,
}

impl ProfileSeries {
    pub const ALL: [ProfileSeries; 3] = [ProfileSeries::Ipe, ProfileSeries::Hea, ProfileSeries::Heb];

    pub fn display_name(&self) -> &'static str {
        match self {
            ProfileSeries::Ipe => "IPE",
            ProfileSeries::Hea => "HEA",
            ProfileSeries::Heb => "HEB",
        }
    }

    /// All profiles of the series, ordered by height
    pub fn profiles(&self) -> &'static [SteelProfile] {
        match self {
            ProfileSeries::Ipe => &steel::IPE,
            ProfileSeries::Hea => &steel::HEA,
            ProfileSeries::Heb => &steel::HEB,
        }
    }
}

impl std::fmt::Display for ProfileSeries {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl std::str::FromStr for ProfileSeries {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_uppercase();
        ProfileSeries::ALL
            .into_iter()
            .find(|series| series.display_name() == wanted)
            .ok_or_else(|| CalcError::invalid_input("series", s, "expected one of IPE, HEA, HEB"))
    }
}

/// Designations are matched without whitespace and case
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase()
}

static PROFILE_INDEX: Lazy<HashMap<String, &'static SteelProfile>> = Lazy::new(|| {
    let index: HashMap<_, _> = all_profiles()
        .map(|profile| (normalize(profile.name), profile))
        .collect();
    tracing::debug!(profiles = index.len(), "built steel profile index");
    index
});

/// Every tabulated profile, series by series
pub fn all_profiles() -> impl Iterator<Item = &'static SteelProfile> {
    ProfileSeries::ALL
        .into_iter()
        .flat_map(|series| series.profiles().iter())
}

impl SteelProfile {
    /// Look up a profile by designation.
    ///
    /// Case and whitespace are ignored, so "IPE 300", "ipe300" and
    /// " Ipe 300 " all resolve to the same profile.
    pub fn lookup(name: &str) -> CalcResult<&'static SteelProfile> {
        PROFILE_INDEX
            .get(&normalize(name))
            .copied()
            .ok_or_else(|| CalcError::profile_not_found(name))
    }

    /// Profiles whose designation contains `query` (case and whitespace ignored)
    pub fn search(query: &str) -> Vec<&'static SteelProfile> {
        let query = normalize(query);
        all_profiles()
            .filter(|profile| normalize(profile.name).contains(&query))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_and_space_insensitive() {
        let a = SteelProfile::lookup("IPE 300").unwrap();
        let b = SteelProfile::lookup("ipe300").unwrap();
        let c = SteelProfile::lookup("  Ipe 300 ").unwrap();
        assert!(std::ptr::eq(a, b));
        assert!(std::ptr::eq(b, c));
        assert_eq!(a.b, 150.0);
        assert_eq!(a.t_w, 7.1);
        assert_eq!(a.t_f, 10.7);
        assert_eq!(a.r, 15.0);
    }

    #[test]
    fn test_profile_not_found() {
        let err = SteelProfile::lookup("IPE 999").unwrap_err();
        assert_eq!(err, CalcError::profile_not_found("IPE 999"));
        assert_eq!(err.error_code(), "PROFILE_NOT_FOUND");
    }

    #[test]
    fn test_every_profile_is_indexed() {
        assert_eq!(PROFILE_INDEX.len(), all_profiles().count());
        assert_eq!(all_profiles().count(), 18 + 19 + 19);
        for profile in all_profiles() {
            assert_eq!(SteelProfile::lookup(profile.name).unwrap(), profile);
        }
    }

    #[test]
    fn test_series_profiles_match_series() {
        for series in ProfileSeries::ALL {
            assert!(series.profiles().iter().all(|p| p.series == series));
            assert!(series.profiles().iter().all(|p| p.name.starts_with(series.display_name())));
        }
    }

    #[test]
    fn test_series_from_str() {
        assert_eq!("heb".parse::<ProfileSeries>().unwrap(), ProfileSeries::Heb);
        assert!("UPN".parse::<ProfileSeries>().is_err());
    }

    #[test]
    fn test_search() {
        let hits = SteelProfile::search("heb 60");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "HEB 600");
        assert_eq!(SteelProfile::search("HE").len(), 38);
    }
}
