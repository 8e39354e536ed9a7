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

//! Shared data model for the generation-mix engine and its collaborators.

pub mod aggregate;
pub mod fuel;
pub mod interval;

pub use aggregate::{DayAggregate, OptimalWindow};
pub use fuel::{CleanFuelSet, DEFAULT_CLEAN_FUELS};
pub use interval::{INTERVAL_MINUTES, Interval, interval_duration};
