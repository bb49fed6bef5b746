//! NOAA hourly wind forecast source
//!
//! Fetches hourly forecast periods from a NOAA grid-point endpoint and maps
//! them into [`WindForecastSample`]s. Wind speed and gust arrive as strings
//! of the form "20 mph"; a string that does not parse yields a null field for
//! that sample rather than aborting the fetch. When the endpoint cannot be
//! reached at all, a fixed 6-hour fallback set is substituted.

use crate::app::models::WindForecastSample;
use crate::config::ForecastEndpoint;
use crate::{Error, Result};
use chrono::DateTime;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

/// HTTP timeout for forecast fetches
const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// NOAA hourly forecast payload, limited to the fields the dashboard reads
#[derive(Debug, Deserialize)]
struct HourlyForecastResponse {
    properties: ForecastProperties,
}

#[derive(Debug, Deserialize)]
struct ForecastProperties {
    periods: Vec<ForecastPeriod>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ForecastPeriod {
    start_time: Option<String>,
    wind_speed: Option<String>,
    wind_gust: Option<String>,
    wind_direction: Option<String>,
}

impl ForecastPeriod {
    fn into_sample(self) -> WindForecastSample {
        WindForecastSample {
            start_time: self
                .start_time
                .as_deref()
                .and_then(|s| DateTime::parse_from_rfc3339(s).ok()),
            wind_speed_mph: self.wind_speed.as_deref().and_then(parse_mph),
            wind_gust_mph: self.wind_gust.as_deref().and_then(parse_mph),
            wind_direction: self.wind_direction.unwrap_or_else(|| "N/A".to_string()),
        }
    }
}

/// Parse a wind string of the form "<int> mph" into its integer value
///
/// Returns `None` for empty, missing-unit-only, or non-numeric input.
pub fn parse_mph(value: &str) -> Option<i32> {
    value.split_whitespace().next()?.parse().ok()
}

/// Client for NOAA hourly forecast endpoints
#[derive(Debug, Clone)]
pub struct ForecastClient {
    http: reqwest::Client,
    hours: usize,
}

impl ForecastClient {
    /// Build a client that retains the leading `hours` periods per fetch
    pub fn new(hours: usize) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .user_agent(concat!("liftwatch/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { http, hours })
    }

    /// Fetch an endpoint's hourly periods, substituting the fixed fallback
    /// set when the fetch or payload fails
    pub async fn fetch_or_fallback(&self, endpoint: &ForecastEndpoint) -> Vec<WindForecastSample> {
        match self.fetch(endpoint).await {
            Ok(samples) => samples,
            Err(e) => {
                warn!("forecast fetch failed ({e}), using fallback samples");
                fallback_samples()
            }
        }
    }

    /// Fetch an endpoint's hourly periods
    pub async fn fetch(&self, endpoint: &ForecastEndpoint) -> Result<Vec<WindForecastSample>> {
        let response = self
            .http
            .get(&endpoint.url)
            .send()
            .await
            .map_err(|e| Error::forecast_unavailable(&endpoint.label, format!("request failed: {e}")))?
            .error_for_status()
            .map_err(|e| Error::forecast_unavailable(&endpoint.label, format!("bad status: {e}")))?;

        let payload: HourlyForecastResponse = response
            .json()
            .await
            .map_err(|e| Error::forecast_unavailable(&endpoint.label, format!("bad payload: {e}")))?;

        let samples: Vec<WindForecastSample> = payload
            .properties
            .periods
            .into_iter()
            .take(self.hours)
            .map(ForecastPeriod::into_sample)
            .collect();

        debug!("fetched {} periods from '{}'", samples.len(), endpoint.label);
        Ok(samples)
    }
}

/// The fixed fallback forecast hours used when an endpoint is unavailable
pub fn fallback_samples() -> Vec<WindForecastSample> {
    let sample = |time: &str, speed: i32, direction: &str| WindForecastSample {
        start_time: DateTime::parse_from_rfc3339(time).ok(),
        wind_speed_mph: Some(speed),
        wind_gust_mph: None,
        wind_direction: direction.to_string(),
    };

    vec![
        sample("2025-02-28T08:00:00-07:00", 15, "W"),
        sample("2025-02-28T09:00:00-07:00", 18, "W"),
        sample("2025-02-28T10:00:00-07:00", 20, "NW"),
        sample("2025-02-28T11:00:00-07:00", 22, "NW"),
        sample("2025-02-28T12:00:00-07:00", 19, "NW"),
        sample("2025-02-28T13:00:00-07:00", 16, "W"),
    ]
}
