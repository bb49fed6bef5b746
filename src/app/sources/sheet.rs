//! Spreadsheet source for lift status rows
//!
//! Fetches the operational log as a published CSV export over HTTP, or from a
//! local CSV file for development. The fetch result is a tagged variant:
//! either a connected row sequence or an unavailability reason. Consumers
//! always receive a uniform row sequence via [`SheetSource::records`]; when
//! the source is unavailable, the fixed 5-row fallback sample set is
//! substituted so the pipeline and render can proceed.

use crate::app::models::RawStatusRow;
use crate::app::services::ingest;
use crate::config::SheetConfig;
use crate::{Error, Result};
use std::time::Duration;
use tracing::{debug, warn};

/// HTTP timeout for sheet fetches
const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Outcome of a spreadsheet fetch
#[derive(Debug, Clone)]
pub enum SheetSource {
    /// Rows read from the live spreadsheet export
    Connected(Vec<RawStatusRow>),
    /// Source could not be reached or read
    Unavailable { reason: String },
}

impl SheetSource {
    /// The row sequence for this fetch, substituting fallback samples when
    /// the source is unavailable
    pub fn records(&self) -> Vec<RawStatusRow> {
        match self {
            Self::Connected(rows) => rows.clone(),
            Self::Unavailable { reason } => {
                warn!("sheet unavailable ({reason}), using fallback sample rows");
                fallback_rows()
            }
        }
    }

    /// True when the live source supplied the rows
    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected(_))
    }
}

/// Client for the spreadsheet source
///
/// Constructed once at process start and held for the process lifetime;
/// nothing here re-initializes implicitly.
#[derive(Debug, Clone)]
pub struct SheetClient {
    http: reqwest::Client,
    config: SheetConfig,
}

impl SheetClient {
    /// Build a client from the resolved sheet configuration
    pub fn new(config: SheetConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|e| Error::configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Display name of the configured sheet
    pub fn sheet_name(&self) -> &str {
        &self.config.name
    }

    /// Fetch the current row sequence
    ///
    /// Never returns an error: every failure mode collapses into
    /// [`SheetSource::Unavailable`] with a reason.
    pub async fn fetch(&self) -> SheetSource {
        if let Some(path) = &self.config.csv_path {
            return match std::fs::read(path) {
                Ok(bytes) => {
                    let rows = ingest::rows_from_csv(&bytes);
                    debug!("read {} rows from {}", rows.len(), path.display());
                    SheetSource::Connected(rows)
                }
                Err(e) => SheetSource::Unavailable {
                    reason: format!("failed to read {}: {e}", path.display()),
                },
            };
        }

        let Some(url) = &self.config.csv_url else {
            return SheetSource::Unavailable {
                reason: "no sheet source configured".to_string(),
            };
        };

        match self.fetch_csv(url).await {
            Ok(rows) => {
                debug!("fetched {} rows from sheet '{}'", rows.len(), self.config.name);
                SheetSource::Connected(rows)
            }
            Err(e) => SheetSource::Unavailable {
                reason: e.to_string(),
            },
        }
    }

    async fn fetch_csv(&self, url: &str) -> Result<Vec<RawStatusRow>> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| Error::sheet_unavailable(format!("request failed: {e}")))?
            .error_for_status()
            .map_err(|e| Error::sheet_unavailable(format!("bad status: {e}")))?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::sheet_unavailable(format!("body read failed: {e}")))?;

        Ok(ingest::rows_from_csv(&bytes))
    }
}

/// The fixed fallback sample rows used when the sheet is unavailable
pub fn fallback_rows() -> Vec<RawStatusRow> {
    let row = |lift: &str, category: &str, reasoning: &str, time: &str, fault: &str| RawStatusRow {
        lift: lift.to_string(),
        category: category.to_string(),
        reasoning: reasoning.to_string(),
        event_time: time.to_string(),
        resolved: String::new(),
        fault: fault.to_string(),
    };

    vec![
        row(
            "Red Pine Gondola",
            "Hold",
            "High wind",
            "2025-02-28 08:30:00",
            "Wind > 35mph",
        ),
        row(
            "Orange Bubble",
            "Hold",
            "High wind",
            "2025-02-28 08:35:00",
            "Wind > 30mph",
        ),
        row(
            "Eagle",
            "Reduced/Adjust Speed",
            "Wind",
            "2025-02-28 09:15:00",
            "Wind 20-25mph",
        ),
        row(
            "Jupiter",
            "Hold",
            "High wind",
            "2025-02-28 07:45:00",
            "Wind > 40mph",
        ),
        row(
            "Tombstone",
            "Hold",
            "Mechanical issue",
            "2025-02-28 10:10:00",
            "Drive fault",
        ),
    ]
}
