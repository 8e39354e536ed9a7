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

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use energymix_types::Interval;

use crate::client::CarbonIntensityClient;
use crate::errors::CarbonResult;

/// Provider of a sorted generation-mix series for a time range.
///
/// Request handlers depend on this trait only, so the HTTP layer can run
/// against an in-memory series.
#[async_trait]
pub trait GenerationSource: Send + Sync {
    /// Intervals covering `[from, to]`, sorted ascending by start
    async fn fetch_generation(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> CarbonResult<Vec<Interval>>;

    /// Source name for logging
    fn name(&self) -> &str;
}

#[async_trait]
impl GenerationSource for CarbonIntensityClient {
    async fn fetch_generation(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> CarbonResult<Vec<Interval>> {
        CarbonIntensityClient::fetch_generation(self, from, to).await
    }

    fn name(&self) -> &str {
        "carbon-intensity"
    }
}
