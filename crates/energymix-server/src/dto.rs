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

//! JSON shapes returned by the API.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use energymix_types::{DayAggregate, OptimalWindow};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayAggregateDto {
    pub date: NaiveDate,
    pub average_percents: BTreeMap<String, f64>,
    pub clean_percent: f64,
}

impl From<DayAggregate> for DayAggregateDto {
    fn from(day: DayAggregate) -> Self {
        Self {
            date: day.date,
            average_percents: day.average_percents,
            clean_percent: day.clean_percent,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimalWindowDto {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub average_clean_percent: f64,
}

impl From<OptimalWindow> for OptimalWindowDto {
    fn from(window: OptimalWindow) -> Self {
        Self {
            start: window.start,
            end: window.end,
            average_clean_percent: window.average_clean_percent,
        }
    }
}
