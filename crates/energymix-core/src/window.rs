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

use tracing::debug;

use energymix_types::{CleanFuelSet, Interval, OptimalWindow};

use crate::error::WindowError;

/// Shortest window the optimizer will search for
pub const MIN_WINDOW_HOURS: u32 = 1;

/// Longest window the optimizer will search for
pub const MAX_WINDOW_HOURS: u32 = 6;

// Half-hour granularity
const INTERVALS_PER_HOUR: u32 = 2;

/// Finds the contiguous run of intervals with the highest average clean share.
///
/// The search slides over positions in the slice, not over wall-clock time.
/// Callers are expected to hand over a series sorted by start and free of
/// gaps; on a gapped series the returned window simply covers more time than
/// requested (see [`crate::series::find_irregularities`]).
#[derive(Debug, Clone, Default)]
pub struct WindowOptimizer {
    clean_fuels: CleanFuelSet,
}

impl WindowOptimizer {
    pub fn new(clean_fuels: CleanFuelSet) -> Self {
        Self { clean_fuels }
    }

    pub fn clean_fuels(&self) -> &CleanFuelSet {
        &self.clean_fuels
    }

    /// Search `intervals` for the best block of `window_hours` hours.
    ///
    /// Runs in a single pass: the window sum is updated by adding the entering
    /// interval and subtracting the leaving one. Ties keep the earliest window.
    pub fn find_optimal_window(
        &self,
        intervals: &[Interval],
        window_hours: u32,
    ) -> Result<OptimalWindow, WindowError> {
        if !(MIN_WINDOW_HOURS..=MAX_WINDOW_HOURS).contains(&window_hours) {
            return Err(WindowError::InvalidWindowHours {
                hours: window_hours,
            });
        }

        let window_len = window_hours * INTERVALS_PER_HOUR;
        let window_size = window_len as usize;
        if intervals.len() < window_size {
            return Err(WindowError::InsufficientData {
                required: window_size,
                available: intervals.len(),
            });
        }

        let scores: Vec<f64> = intervals
            .iter()
            .map(|interval| self.clean_fuels.score(interval))
            .collect();
        let divisor = f64::from(window_len);

        let mut current_sum: f64 = scores[..window_size].iter().sum();
        let mut best_avg = current_sum / divisor;
        let mut best_start = 0;

        for entering in window_size..scores.len() {
            current_sum += scores[entering];
            current_sum -= scores[entering - window_size];
            let avg = current_sum / divisor;
            // Strict comparison keeps the earliest window on ties
            if avg > best_avg {
                best_avg = avg;
                best_start = entering - window_size + 1;
            }
        }

        let window = OptimalWindow {
            start: intervals[best_start].start,
            end: intervals[best_start + window_size - 1].end,
            average_clean_percent: round_to_hundredths(best_avg),
        };

        debug!(
            window_hours,
            candidates = scores.len() - window_size + 1,
            start = %window.start,
            end = %window.end,
            average = window.average_clean_percent,
            "Optimal window found"
        );

        Ok(window)
    }
}

/// Round half up on the value scaled by 100
fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, Utc};

    fn base() -> DateTime<Utc> {
        "2025-01-01T00:00:00Z".parse().unwrap()
    }

    fn at(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    /// Contiguous half-hourly series starting at midnight with one wind value each
    fn wind_series(values: &[f64]) -> Vec<Interval> {
        values
            .iter()
            .enumerate()
            .map(|(i, wind)| {
                let start = base() + Duration::minutes(30 * i as i64);
                Interval::new(
                    start,
                    start + Duration::minutes(30),
                    [("wind".to_owned(), *wind)].into_iter().collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_selects_highest_average_window() {
        let optimizer = WindowOptimizer::default();
        let intervals = wind_series(&[10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 5.0]);

        let window = optimizer.find_optimal_window(&intervals, 3).unwrap();

        assert_eq!(window.start, at("2025-01-01T00:00:00Z"));
        assert_eq!(window.end, at("2025-01-01T03:00:00Z"));
        assert!((window.average_clean_percent - 35.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_window_can_start_mid_series() {
        let optimizer = WindowOptimizer::default();
        let intervals = wind_series(&[1.0, 1.0, 1.0, 80.0, 90.0, 1.0]);

        let window = optimizer.find_optimal_window(&intervals, 1).unwrap();

        assert_eq!(window.start, at("2025-01-01T01:30:00Z"));
        assert_eq!(window.end, at("2025-01-01T02:30:00Z"));
        assert!((window.average_clean_percent - 85.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_last_window_is_reachable() {
        let optimizer = WindowOptimizer::default();
        let intervals = wind_series(&[1.0, 2.0, 3.0, 4.0, 50.0, 60.0]);

        let window = optimizer.find_optimal_window(&intervals, 1).unwrap();

        assert_eq!(window.start, at("2025-01-01T02:00:00Z"));
        assert_eq!(window.end, at("2025-01-01T03:00:00Z"));
    }

    #[test]
    fn test_ties_resolve_to_earliest_window() {
        let optimizer = WindowOptimizer::default();
        let intervals = wind_series(&[30.0, 30.0, 10.0, 30.0, 30.0]);

        let window = optimizer.find_optimal_window(&intervals, 1).unwrap();

        assert_eq!(window.start, at("2025-01-01T00:00:00Z"));
        assert_eq!(window.end, at("2025-01-01T01:00:00Z"));
    }

    #[test]
    fn test_flat_series_returns_first_window() {
        let optimizer = WindowOptimizer::default();
        let intervals = wind_series(&[25.0; 8]);

        let window = optimizer.find_optimal_window(&intervals, 2).unwrap();

        assert_eq!(window.start, base());
        assert!((window.average_clean_percent - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_exact_length_series_uses_whole_series() {
        let optimizer = WindowOptimizer::default();
        let intervals = wind_series(&[10.0, 20.0]);

        let window = optimizer.find_optimal_window(&intervals, 1).unwrap();

        assert_eq!(window.start, at("2025-01-01T00:00:00Z"));
        assert_eq!(window.end, at("2025-01-01T01:00:00Z"));
        assert!((window.average_clean_percent - 15.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_out_of_range_hours_rejected() {
        let optimizer = WindowOptimizer::default();
        let intervals = wind_series(&[50.0; 48]);

        for hours in [0, 7, 24] {
            assert_eq!(
                optimizer.find_optimal_window(&intervals, hours),
                Err(WindowError::InvalidWindowHours { hours })
            );
        }
    }

    #[test]
    fn test_hours_checked_before_data() {
        let optimizer = WindowOptimizer::default();

        assert_eq!(
            optimizer.find_optimal_window(&[], 0),
            Err(WindowError::InvalidWindowHours { hours: 0 })
        );
        assert_eq!(
            optimizer.find_optimal_window(&[], 7),
            Err(WindowError::InvalidWindowHours { hours: 7 })
        );
    }

    #[test]
    fn test_insufficient_data() {
        let optimizer = WindowOptimizer::default();
        let intervals = wind_series(&[50.0; 11]);

        assert_eq!(
            optimizer.find_optimal_window(&intervals, 6),
            Err(WindowError::InsufficientData {
                required: 12,
                available: 11,
            })
        );
        assert!(optimizer.find_optimal_window(&intervals, 5).is_ok());
    }

    #[test]
    fn test_average_rounded_to_two_decimals() {
        let optimizer = WindowOptimizer::default();
        // (10 + 10 + 10 + 10 + 10 + 11) / 6 = 10.1666...
        let intervals = wind_series(&[10.0, 10.0, 10.0, 10.0, 10.0, 11.0]);

        let window = optimizer.find_optimal_window(&intervals, 3).unwrap();

        assert!((window.average_clean_percent - 10.17).abs() < 1e-9);
    }

    #[test]
    fn test_round_half_up() {
        assert!((round_to_hundredths(205.0 / 6.0) - 34.17).abs() < 1e-9);
        assert!((round_to_hundredths(0.125) - 0.13).abs() < 1e-9);
        assert!((round_to_hundredths(35.0) - 35.0).abs() < f64::EPSILON);
        assert!(round_to_hundredths(0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_only_clean_fuels_score() {
        let optimizer = WindowOptimizer::default();
        let start = base();
        let intervals: Vec<Interval> = (0..2)
            .map(|i| {
                let s = start + Duration::minutes(30 * i);
                Interval::new(
                    s,
                    s + Duration::minutes(30),
                    [
                        ("gas".to_owned(), 60.0),
                        ("nuclear".to_owned(), 15.0),
                        ("solar".to_owned(), 5.0),
                    ]
                    .into_iter()
                    .collect(),
                )
            })
            .collect();

        let window = optimizer.find_optimal_window(&intervals, 1).unwrap();

        assert!((window.average_clean_percent - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_injected_clean_set_changes_winner() {
        let start = base();
        let mixes = [[("wind", 50.0), ("gas", 0.0)], [("wind", 0.0), ("gas", 50.0)]];
        let intervals: Vec<Interval> = mixes
            .iter()
            .enumerate()
            .flat_map(|(block, mix)| {
                (0..2).map(move |i| {
                    let s = start + Duration::minutes(60 * block as i64 + 30 * i);
                    Interval::new(
                        s,
                        s + Duration::minutes(30),
                        mix.iter().map(|(k, v)| ((*k).to_owned(), *v)).collect(),
                    )
                })
            })
            .collect();

        let default_pick = WindowOptimizer::default()
            .find_optimal_window(&intervals, 1)
            .unwrap();
        let gas_pick = WindowOptimizer::new(CleanFuelSet::new(["gas"]))
            .find_optimal_window(&intervals, 1)
            .unwrap();

        assert_eq!(default_pick.start, at("2025-01-01T00:00:00Z"));
        assert_eq!(gas_pick.start, at("2025-01-01T01:00:00Z"));
    }

    #[test]
    fn test_gapped_series_slides_over_positions() {
        let optimizer = WindowOptimizer::default();
        let mut intervals = wind_series(&[10.0, 10.0, 90.0, 90.0]);
        // Push the second half of the series three hours later
        for interval in &mut intervals[2..] {
            interval.start += Duration::hours(3);
            interval.end += Duration::hours(3);
        }
        // Window over positions 1..=2 straddles the gap
        let intervals = vec![
            intervals[0].clone(),
            intervals[1].clone(),
            intervals[2].clone(),
        ];

        let window = optimizer.find_optimal_window(&intervals, 1).unwrap();

        assert_eq!(window.start, at("2025-01-01T00:30:00Z"));
        assert_eq!(window.end, at("2025-01-01T04:30:00Z"));
        assert!(window.end - window.start > Duration::hours(1));
        assert!((window.average_clean_percent - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_input_is_not_mutated_and_result_is_stable() {
        let optimizer = WindowOptimizer::default();
        let intervals = wind_series(&[12.3, 45.6, 7.89, 33.3, 21.0, 19.99, 40.01, 3.0]);
        let snapshot = intervals.clone();

        let first = optimizer.find_optimal_window(&intervals, 2).unwrap();
        let second = optimizer.find_optimal_window(&intervals, 2).unwrap();

        assert_eq!(intervals, snapshot);
        assert_eq!(first, second);
        assert_eq!(
            first.average_clean_percent.to_bits(),
            second.average_clean_percent.to_bits()
        );
    }
}
