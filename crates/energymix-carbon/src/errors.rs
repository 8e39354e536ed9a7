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

#[derive(Debug, Error)]
pub enum CarbonError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Carbon Intensity API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("failed to parse generation response: {0}")]
    Parse(String),

    #[error("client configuration error: {0}")]
    Config(String),
}

pub type CarbonResult<T> = Result<T, CarbonError>;
