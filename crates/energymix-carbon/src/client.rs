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

use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::{Client, header};
use serde_json::Value;
use tracing::{debug, error, info, warn};

use energymix_core::series::{Irregularity, find_irregularities};
use energymix_types::{Interval, interval_duration};

use crate::errors::{CarbonError, CarbonResult};
use crate::normalize;

/// Public GB Carbon Intensity API
pub const DEFAULT_BASE_URL: &str = "https://api.carbonintensity.org.uk";

const URL_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%MZ";

/// Carbon Intensity REST API client
#[derive(Debug, Clone)]
pub struct CarbonIntensityClient {
    base_url: String,
    client: Client,
    max_retries: u32,
    retry_delay: Duration,
}

impl CarbonIntensityClient {
    /// Create a client with the default 10 second request timeout
    pub fn new(base_url: impl Into<String>) -> CarbonResult<Self> {
        Self::with_timeout(base_url, Duration::from_secs(10))
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> CarbonResult<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        if base_url.is_empty() {
            return Err(CarbonError::Config("base URL must not be empty".to_owned()));
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CarbonError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url,
            client,
            max_retries: 3,
            retry_delay: Duration::from_millis(500),
        })
    }

    /// Set custom retry configuration
    #[must_use]
    pub fn with_retry_config(mut self, max_retries: u32, retry_delay: Duration) -> Self {
        self.max_retries = max_retries.max(1);
        self.retry_delay = retry_delay;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the generation-mix endpoint for `[from, to]`
    pub fn generation_url(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> String {
        format!(
            "{}/generation/{}/{}",
            self.base_url,
            from.format(URL_TIMESTAMP_FORMAT),
            to.format(URL_TIMESTAMP_FORMAT)
        )
    }

    /// Fetch the half-hourly generation mix between `from` and `to`.
    ///
    /// Returns the intervals sorted by start. A response without a body or
    /// without a `data` array is an empty series, not an error.
    pub async fn fetch_generation(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> CarbonResult<Vec<Interval>> {
        let url = self.generation_url(from, to);
        debug!(%url, "Requesting generation mix");

        let response = self
            .retry_request(|| async {
                self.client
                    .get(&url)
                    .header(header::ACCEPT, "application/json")
                    .send()
                    .await
            })
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), %message, "Generation request rejected");
            return Err(CarbonError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            debug!(%url, "Generation response has no body");
            return Ok(Vec::new());
        }

        let root: Value = serde_json::from_str(&body)
            .map_err(|e| CarbonError::Parse(format!("invalid JSON body: {e}")))?;
        let intervals = normalize::intervals_from_response(&root);

        report_irregularities(&intervals);
        info!(
            intervals = intervals.len(),
            %from,
            %to,
            "Fetched generation mix"
        );

        Ok(intervals)
    }

    /// Retry a request with exponential backoff
    async fn retry_request<F, Fut>(&self, mut request_fn: F) -> CarbonResult<reqwest::Response>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<reqwest::Response, reqwest::Error>>,
    {
        let mut attempts = 0;
        let mut delay = self.retry_delay;

        loop {
            attempts += 1;
            match request_fn().await {
                Ok(response) => return Ok(response),
                Err(e) if attempts >= self.max_retries => {
                    error!("Request failed after {} attempts: {}", attempts, e);
                    return Err(CarbonError::Http(e));
                }
                Err(e) => {
                    warn!(
                        "Request failed (attempt {}/{}): {}. Retrying in {:?}",
                        attempts, self.max_retries, e, delay
                    );
                    tokio::time::sleep(delay).await;
                    delay *= 2;
                }
            }
        }
    }
}

fn report_irregularities(intervals: &[Interval]) {
    for irregularity in find_irregularities(intervals, interval_duration()) {
        match irregularity {
            Irregularity::Gap {
                previous_end,
                next_start,
            } => warn!(%previous_end, %next_start, "Gap in generation series"),
            Irregularity::Overlap {
                previous_end,
                next_start,
            } => warn!(%previous_end, %next_start, "Overlapping generation intervals"),
            Irregularity::UnexpectedDuration { start, duration } => warn!(
                %start,
                minutes = duration.num_minutes(),
                "Generation interval has unexpected length"
            ),
        }
    }
}
