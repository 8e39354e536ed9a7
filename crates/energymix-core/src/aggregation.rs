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

use chrono::NaiveDate;
use tracing::debug;

use energymix_types::{CleanFuelSet, DayAggregate, Interval};

/// Buckets intervals by the UTC day of their start and averages each day.
#[derive(Debug, Clone, Default)]
pub struct DayAggregator {
    clean_fuels: CleanFuelSet,
}

impl DayAggregator {
    pub fn new(clean_fuels: CleanFuelSet) -> Self {
        Self { clean_fuels }
    }

    pub fn clean_fuels(&self) -> &CleanFuelSet {
        &self.clean_fuels
    }

    /// Aggregate `intervals` into exactly `day_count` consecutive days starting
    /// at `start_day`, in ascending order.
    ///
    /// Days without any interval are still returned, with an empty mix and a
    /// clean share of zero. Intervals starting outside the requested range are
    /// ignored.
    ///
    /// A fuel's daily average only counts the intervals that reported that
    /// fuel; a missing key is not a zero reading.
    pub fn aggregate_by_days(
        &self,
        intervals: &[Interval],
        day_count: usize,
        start_day: NaiveDate,
    ) -> Vec<DayAggregate> {
        let mut by_day: BTreeMap<NaiveDate, Vec<&Interval>> = start_day
            .iter_days()
            .take(day_count)
            .map(|day| (day, Vec::new()))
            .collect();

        let mut dropped = 0_usize;
        for interval in intervals {
            match by_day.get_mut(&interval.start.date_naive()) {
                Some(bucket) => bucket.push(interval),
                None => dropped += 1,
            }
        }

        if dropped > 0 {
            debug!(
                dropped,
                %start_day,
                day_count,
                "Ignoring intervals outside the aggregation range"
            );
        }

        by_day
            .into_iter()
            .map(|(date, bucket)| self.aggregate_day(date, &bucket))
            .collect()
    }

    fn aggregate_day(&self, date: NaiveDate, bucket: &[&Interval]) -> DayAggregate {
        // fuel -> (sum, contributing intervals)
        let mut totals: BTreeMap<&str, (f64, u32)> = BTreeMap::new();
        for interval in bucket {
            for (fuel, percent) in &interval.mix {
                let entry = totals.entry(fuel.as_str()).or_insert((0.0, 0));
                entry.0 += percent;
                entry.1 += 1;
            }
        }

        if totals.is_empty() {
            return DayAggregate::empty(date);
        }

        let average_percents: BTreeMap<String, f64> = totals
            .into_iter()
            .map(|(fuel, (sum, count))| (fuel.to_owned(), sum / f64::from(count)))
            .collect();

        let clean_percent = self
            .clean_fuels
            .iter()
            .map(|fuel| average_percents.get(fuel).copied().unwrap_or(0.0))
            .sum();

        DayAggregate {
            date,
            average_percents,
            clean_percent,
        }
    }
}
