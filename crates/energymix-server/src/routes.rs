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

use anyhow::{Context, Result};
use axum::Json;
use axum::Router;
use axum::extract::{Query, State};
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::Deserialize;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::{debug, info};

use energymix_types::Interval;

use crate::config::CorsSettings;
use crate::dto::{DayAggregateDto, OptimalWindowDto};
use crate::error::ApiError;
use crate::state::AppState;

/// Days covered by the current-mix view, starting today
pub const MIX_DAYS: usize = 3;

/// Accepted range of the `hours` query parameter
pub const MIN_REQUEST_HOURS: i32 = 1;
pub const MAX_REQUEST_HOURS: i32 = 24;

#[derive(Debug, Deserialize)]
pub struct OptimalQuery {
    pub hours: i32,
}

/// Build the application router.
///
/// The CORS policy applies to the `/api` routes only.
pub fn router(state: AppState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/mix", get(mix_handler))
        .route("/optimal", get(optimal_handler))
        .layer(cors);

    Router::new()
        .nest("/api", api)
        .route("/health", get(health_handler))
        .with_state(state)
}

/// GET-only CORS policy for the configured origins
pub fn cors_layer(settings: &CorsSettings) -> Result<CorsLayer> {
    let origins = settings
        .allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).with_context(|| format!("Invalid CORS origin: {origin}"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET])
        .allow_headers(Any))
}

/// Range for the current-mix view: today 00:00 until the last slot of the third day
pub fn mix_range(today: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let from = start_of_day(today);
    (from, last_slot_start(from + Duration::days(2)))
}

/// Range for the optimal-window view: tomorrow 00:00 until the last slot of the day after
pub fn optimal_range(today: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let from = start_of_day(today) + Duration::days(1);
    (from, last_slot_start(from + Duration::days(1)))
}

fn start_of_day(day: NaiveDate) -> DateTime<Utc> {
    day.and_time(chrono::NaiveTime::MIN).and_utc()
}

// 23:30 on the day starting at `midnight`
fn last_slot_start(midnight: DateTime<Utc>) -> DateTime<Utc> {
    midnight + Duration::hours(23) + Duration::minutes(30)
}

async fn fetch(
    state: &AppState,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) -> Result<Vec<Interval>, ApiError> {
    debug!(source = state.source.name(), %from, %to, "Fetching generation data");
    state
        .source
        .fetch_generation(from, to)
        .await
        .map_err(ApiError::Upstream)
}

/// Average mix per day for today and the next two days
pub async fn mix_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<DayAggregateDto>>, ApiError> {
    let today = (state.clock)().date_naive();
    let (from, to) = mix_range(today);
    let intervals = fetch(&state, from, to).await?;

    let days = state
        .aggregator
        .aggregate_by_days(&intervals, MIX_DAYS, today);

    info!(
        %today,
        intervals = intervals.len(),
        days = days.len(),
        "Served generation mix"
    );

    Ok(Json(days.into_iter().map(DayAggregateDto::from).collect()))
}

/// Cleanest block of `hours` hours within tomorrow and the day after
pub async fn optimal_handler(
    State(state): State<AppState>,
    Query(query): Query<OptimalQuery>,
) -> Result<Json<OptimalWindowDto>, ApiError> {
    if !(MIN_REQUEST_HOURS..=MAX_REQUEST_HOURS).contains(&query.hours) {
        return Err(ApiError::BadRequest(format!(
            "Hours must be between {MIN_REQUEST_HOURS} and {MAX_REQUEST_HOURS}"
        )));
    }
    let hours = query.hours.unsigned_abs();

    let today = (state.clock)().date_naive();
    let (from, to) = optimal_range(today);
    let intervals = fetch(&state, from, to).await?;

    let window = state.optimizer.find_optimal_window(&intervals, hours)?;

    info!(
        hours,
        start = %window.start,
        end = %window.end,
        average = window.average_clean_percent,
        "Served optimal window"
    );

    Ok(Json(window.into()))
}

#[expect(clippy::unused_async, reason = "axum handler must be async")]
async fn health_handler() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    #[test]
    fn test_mix_range_covers_three_days() {
        let (from, to) = mix_range("2025-01-30".parse().unwrap());

        assert_eq!(from, at("2025-01-30T00:00:00Z"));
        assert_eq!(to, at("2025-02-01T23:30:00Z"));
    }

    #[test]
    fn test_optimal_range_starts_tomorrow() {
        let (from, to) = optimal_range("2024-12-31".parse().unwrap());

        assert_eq!(from, at("2025-01-01T00:00:00Z"));
        assert_eq!(to, at("2025-01-02T23:30:00Z"));
    }

    #[test]
    fn test_cors_layer_rejects_invalid_origin() {
        let settings = CorsSettings {
            allowed_origins: vec!["http://ok.example".to_owned(), "bad\norigin".to_owned()],
        };

        assert!(cors_layer(&settings).is_err());
        assert!(cors_layer(&CorsSettings::default()).is_ok());
    }
}
