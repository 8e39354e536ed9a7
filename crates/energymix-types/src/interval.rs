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

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Fixed granularity of the generation-mix series
pub const INTERVAL_MINUTES: i64 = 30;

/// Nominal length of one interval
pub fn interval_duration() -> Duration {
    Duration::minutes(INTERVAL_MINUTES)
}

/// One half-hour slice of the national generation mix.
///
/// `mix` maps a lowercased fuel name to its share of output in percent.
/// Shares are not guaranteed to sum to 100 and a single share may exceed 100
/// because of interconnector accounting. A fuel missing from the map had no
/// reported share for this slice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub mix: BTreeMap<String, f64>,
}

impl Interval {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>, mix: BTreeMap<String, f64>) -> Self {
        Self { start, end, mix }
    }

    /// Share of a single fuel, if the slice reported it
    pub fn fuel(&self, name: &str) -> Option<f64> {
        self.mix.get(name).copied()
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}
