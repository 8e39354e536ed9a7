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

use thiserror::Error;

/// Reasons the window optimizer cannot produce a window
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WindowError {
    #[error("window of {hours} hours is outside the supported 1-6 hour range")]
    InvalidWindowHours { hours: u32 },

    #[error("not enough data: window needs {required} intervals, got {available}")]
    InsufficientData { required: usize, available: usize },
}
