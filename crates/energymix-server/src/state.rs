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

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use energymix_carbon::GenerationSource;
use energymix_core::{CleanFuelSet, DayAggregator, WindowOptimizer};

/// Shared request-handling state
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn GenerationSource>,
    pub aggregator: Arc<DayAggregator>,
    pub optimizer: Arc<WindowOptimizer>,
    /// Source of "now" for building the requested day ranges
    pub clock: fn() -> DateTime<Utc>,
}

impl AppState {
    /// State with the standard clean-fuel set and the system clock
    pub fn new(source: Arc<dyn GenerationSource>) -> Self {
        Self::with_clean_fuels(source, CleanFuelSet::default())
    }

    pub fn with_clean_fuels(source: Arc<dyn GenerationSource>, clean_fuels: CleanFuelSet) -> Self {
        Self {
            source,
            aggregator: Arc::new(DayAggregator::new(clean_fuels.clone())),
            optimizer: Arc::new(WindowOptimizer::new(clean_fuels)),
            clock: Utc::now,
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("source", &self.source.name())
            .field("clean_fuels", self.aggregator.clean_fuels())
            .finish_non_exhaustive()
    }
}
