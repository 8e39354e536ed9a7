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

//! Aggregation and windowing engine over half-hourly generation-mix intervals.
//!
//! Both components are pure functions of their input: they hold only the
//! injected [`CleanFuelSet`] and never mutate the intervals they scan.

pub mod aggregation;
pub mod error;
pub mod series;
pub mod window;

pub use aggregation::DayAggregator;
pub use error::WindowError;
pub use series::{Irregularity, find_irregularities, is_contiguous};
pub use window::{MAX_WINDOW_HOURS, MIN_WINDOW_HOURS, WindowOptimizer};

pub use energymix_types::{CleanFuelSet, DayAggregate, Interval, OptimalWindow};
