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

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Average generation mix of one UTC calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayAggregate {
    pub date: NaiveDate,

    /// Per-fuel average over the intervals of this day that reported the fuel
    pub average_percents: BTreeMap<String, f64>,

    /// Sum of the clean-fuel averages
    pub clean_percent: f64,
}

impl DayAggregate {
    /// Aggregate for a day without any contributing intervals
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            average_percents: BTreeMap::new(),
            clean_percent: 0.0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.average_percents.is_empty()
    }
}

/// Contiguous block of intervals with the highest average clean share
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimalWindow {
    /// Start of the first interval in the block
    pub start: DateTime<Utc>,
    /// End of the last interval in the block
    pub end: DateTime<Utc>,
    /// Average clean share, rounded to two decimals
    pub average_clean_percent: f64,
}
