// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of EnergyMix.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.
//
// For commercial licensing, please contact: info@solare.cz

use std::collections::BTreeSet;

use crate::interval::Interval;

/// Fuels counted as clean generation unless a different set is injected
pub const DEFAULT_CLEAN_FUELS: [&str; 5] = ["biomass", "nuclear", "hydro", "wind", "solar"];

/// Closed set of fuel names that count toward the clean-energy share.
///
/// Built once and handed to the engine components; it is never read from
/// runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanFuelSet {
    fuels: BTreeSet<String>,
}

impl CleanFuelSet {
    /// Build a set from arbitrary fuel names. Names are lowercased to match
    /// the normalized interval mix keys.
    pub fn new<I, S>(fuels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            fuels: fuels
                .into_iter()
                .map(|fuel| fuel.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn contains(&self, fuel: &str) -> bool {
        self.fuels.contains(fuel)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.fuels.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fuels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fuels.is_empty()
    }

    /// Clean share of one interval: the sum of its clean-fuel percentages,
    /// with unreported fuels contributing nothing.
    pub fn score(&self, interval: &Interval) -> f64 {
        self.iter()
            .map(|fuel| interval.fuel(fuel).unwrap_or(0.0))
            .sum()
    }
}

impl Default for CleanFuelSet {
    fn default() -> Self {
        Self::new(DEFAULT_CLEAN_FUELS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use std::collections::BTreeMap;

    fn interval(mix: &[(&str, f64)]) -> Interval {
        let start: DateTime<Utc> = "2025-01-01T00:00:00Z".parse().unwrap();
        Interval::new(
            start,
            start + crate::interval_duration(),
            mix.iter().map(|(k, v)| ((*k).to_owned(), *v)).collect::<BTreeMap<_, _>>(),
        )
    }

    #[test]
    fn test_default_set_members() {
        let set = CleanFuelSet::default();

        assert_eq!(set.len(), 5);
        for fuel in DEFAULT_CLEAN_FUELS {
            assert!(set.contains(fuel), "{fuel} should be clean");
        }
        assert!(!set.contains("gas"));
        assert!(!set.contains("coal"));
        assert!(!set.contains("imports"));
    }

    #[test]
    fn test_names_are_lowercased() {
        let set = CleanFuelSet::new(["Wind", "SOLAR"]);

        assert!(set.contains("wind"));
        assert!(set.contains("solar"));
        assert!(!set.contains("Wind"));
    }

    #[test]
    fn test_score_ignores_dirty_and_missing_fuels() {
        let set = CleanFuelSet::default();
        let slice = interval(&[("nuclear", 40.0), ("wind", 20.0), ("gas", 10.0)]);

        assert!((set.score(&slice) - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_score_of_empty_mix_is_zero() {
        let set = CleanFuelSet::default();

        assert!(set.score(&interval(&[])).abs() < f64::EPSILON);
    }

    #[test]
    fn test_custom_set_changes_classification() {
        let set = CleanFuelSet::new(["gas"]);
        let slice = interval(&[("nuclear", 40.0), ("gas", 10.0)]);

        assert!((set.score(&slice) - 10.0).abs() < f64::EPSILON);
    }
}
