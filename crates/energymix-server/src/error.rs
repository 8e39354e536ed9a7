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

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{error, warn};

use energymix_carbon::CarbonError;
use energymix_core::WindowError;

/// Failures of the API handlers, each mapped to a plain-text response
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Failed to fetch generation data")]
    Upstream(#[source] CarbonError),

    #[error(transparent)]
    Window(#[from] WindowError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message.clone()),
            Self::Upstream(source) => {
                error!(error = %source, "Generation data fetch failed");
                (StatusCode::BAD_GATEWAY, self.to_string())
            }
            Self::Window(WindowError::InsufficientData {
                required,
                available,
            }) => {
                warn!(required, available, "Not enough intervals for optimal window");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Not enough data to compute optimal window".to_owned(),
                )
            }
            Self::Window(reason @ WindowError::InvalidWindowHours { .. }) => {
                warn!(%reason, "Optimal window request outside engine range");
                (StatusCode::INTERNAL_SERVER_ERROR, capitalize(&reason.to_string()))
            }
        };

        (status, message).into_response()
    }
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
