//! One dashboard refresh cycle
//!
//! Fetch, ingest, categorize, and summarize as a single unit of work. The
//! cycle is synchronous end to end apart from the two external fetches, and
//! never fails: an unreachable source degrades to its fallback dataset and a
//! filtering failure degrades to empty views, so the render stage always has
//! something to draw. No state survives between cycles.

use crate::app::models::{CategorizedLifts, WindForecastSample, WindTrend};
use crate::app::services::{categorizer, ingest, trend};
use crate::app::sources::forecast::ForecastClient;
use crate::app::sources::sheet::SheetClient;
use crate::config::Config;
use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use tracing::info;

/// One forecast panel: a named endpoint's truncated samples and trend
#[derive(Debug, Clone, Serialize)]
pub struct ForecastPanel {
    pub label: String,
    pub samples: Vec<WindForecastSample>,
    pub trend: WindTrend,
}

/// Everything one refresh cycle produces for the render stage
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    /// Display name of the sheet the lift data came from
    pub sheet_name: String,

    /// False when the lift data is the fallback sample set
    pub sheet_connected: bool,

    /// The three categorized lift views
    pub lifts: CategorizedLifts,

    /// One panel per configured forecast endpoint, in configuration order
    pub forecasts: Vec<ForecastPanel>,

    /// Local instant this snapshot was assembled
    pub generated_at: NaiveDateTime,
}

/// Run one full refresh cycle
pub async fn run_cycle(
    sheet: &SheetClient,
    forecast: &ForecastClient,
    config: &Config,
) -> DashboardSnapshot {
    let source = sheet.fetch().await;
    let sheet_connected = source.is_connected();
    let rows = source.records();

    let mut forecasts = Vec::with_capacity(config.forecast_endpoints.len());
    for endpoint in &config.forecast_endpoints {
        let samples = forecast.fetch_or_fallback(endpoint).await;
        let (window, trend) = trend::summarize_trend(&samples, config.trend_hours);
        forecasts.push(ForecastPanel {
            label: endpoint.label.clone(),
            samples: window,
            trend,
        });
    }

    let now = Local::now().naive_local();
    let records = ingest::ingest_rows(&rows);
    let lifts = categorizer::filter_and_categorize(&records, now.date(), now);

    info!(
        "refresh cycle: {} rows -> {} filtered ({} wind holds, {} other holds), {} forecast panels",
        rows.len(),
        lifts.all_filtered.len(),
        lifts.wind_hold.len(),
        lifts.other_hold.len(),
        forecasts.len()
    );

    DashboardSnapshot {
        sheet_name: sheet.sheet_name().to_string(),
        sheet_connected,
        lifts,
        forecasts,
        generated_at: now,
    }
}
