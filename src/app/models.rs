//! Data models for liftwatch
//!
//! This module contains the core data structures for representing lift status
//! log entries and hourly wind forecast samples. Records are constructed fresh
//! on every refresh cycle and never mutated after creation.

use crate::constants;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

// =============================================================================
// Raw Spreadsheet Row
// =============================================================================

/// One spreadsheet row as exported, before any typing
///
/// All values are strings; columns absent from the export deserialize as
/// empty strings rather than failing the row.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RawStatusRow {
    /// Lift name
    #[serde(rename = "Lift", default)]
    pub lift: String,

    /// Operational status classification label
    #[serde(rename = "MEOW Category", default)]
    pub category: String,

    /// Free-text reasoning for the current status
    #[serde(rename = "MEOW Reasoning", default)]
    pub reasoning: String,

    /// Timestamp string for when the status event was logged
    #[serde(rename = "10.60 TIME", default)]
    pub event_time: String,

    /// Resolution marker; non-empty means the event is resolved
    #[serde(rename = "10.63", default)]
    pub resolved: String,

    /// Fault description
    #[serde(rename = "Fault", default)]
    pub fault: String,
}

// =============================================================================
// Lift Category
// =============================================================================

/// Operational status classification of a lift
///
/// Only `ReducedSpeed` and `Hold` are recognized by the category filter;
/// any other label passes through ingestion as `Other` and is dropped later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LiftCategory {
    /// Operation continues at reduced speed
    ReducedSpeed,
    /// Operation fully stopped
    Hold,
    /// Unrecognized label, retained verbatim
    Other(String),
}

impl LiftCategory {
    /// Classify a raw category label
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            constants::CATEGORY_REDUCED_SPEED => Self::ReducedSpeed,
            constants::CATEGORY_HOLD => Self::Hold,
            other => Self::Other(other.to_string()),
        }
    }

    /// True for the two labels recognized by the category filter
    pub fn is_recognized(&self) -> bool {
        matches!(self, Self::ReducedSpeed | Self::Hold)
    }
}

impl std::fmt::Display for LiftCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ReducedSpeed => write!(f, "{}", constants::CATEGORY_REDUCED_SPEED),
            Self::Hold => write!(f, "{}", constants::CATEGORY_HOLD),
            Self::Other(label) => write!(f, "{}", label),
        }
    }
}

// =============================================================================
// Lift Status Record
// =============================================================================

/// A typed lift status log entry
///
/// Produced by record ingestion from a [`RawStatusRow`]. `event_time` is
/// `None` when the timestamp string failed to parse; the record is then
/// dropped by the date filter rather than by ingestion. `duration_hours` is
/// filled in by the categorizer for records that survive filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiftStatusRecord {
    /// Lift name
    pub lift_name: String,

    /// Operational status classification
    pub category: LiftCategory,

    /// Free-text reasoning (may mention "wind")
    pub reasoning: String,

    /// When the status event was logged; `None` if unparseable
    pub event_time: Option<NaiveDateTime>,

    /// Non-empty marker means the event has been resolved
    pub resolved_marker: String,

    /// Fault description, display only
    pub fault_text: String,

    /// Hours elapsed since `event_time`, rounded to 2 decimals
    ///
    /// Negative when `event_time` is in the future relative to the cycle's
    /// `now`; deliberately not clamped.
    pub duration_hours: Option<f64>,
}

impl LiftStatusRecord {
    /// True when the resolution marker is empty (event still open)
    pub fn is_unresolved(&self) -> bool {
        self.resolved_marker.trim().is_empty()
    }

    /// True when the reasoning mentions wind, case-insensitively
    pub fn is_wind_related(&self) -> bool {
        self.reasoning
            .to_lowercase()
            .contains(constants::WIND_REASON_SUBSTRING)
    }

    /// Calendar date of the event, if the timestamp parsed
    pub fn event_date(&self) -> Option<NaiveDate> {
        self.event_time.map(|t| t.date())
    }

    /// Event time formatted for display (e.g. "08:30 AM"), empty if unset
    pub fn event_time_label(&self) -> String {
        self.event_time
            .map(|t| t.format("%I:%M %p").to_string())
            .unwrap_or_default()
    }
}

// =============================================================================
// Categorized Views
// =============================================================================

/// The three output views of the filter & categorize step
///
/// `wind_hold` and `other_hold` are disjoint and together contain every Hold
/// record in `all_filtered`; reduced-speed records appear only in
/// `all_filtered`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategorizedLifts {
    /// All of today's unresolved records with a recognized category
    pub all_filtered: Vec<LiftStatusRecord>,

    /// Holds whose reasoning mentions wind
    pub wind_hold: Vec<LiftStatusRecord>,

    /// Holds for any other reason
    pub other_hold: Vec<LiftStatusRecord>,
}

impl CategorizedLifts {
    /// Empty views with the documented schema
    pub fn empty() -> Self {
        Self::default()
    }

    /// All Hold records (wind-related first, matching partition order)
    pub fn holds_all(&self) -> Vec<&LiftStatusRecord> {
        self.wind_hold.iter().chain(self.other_hold.iter()).collect()
    }

    /// Records retained only in the full filtered set
    pub fn reduced_speed(&self) -> Vec<&LiftStatusRecord> {
        self.all_filtered
            .iter()
            .filter(|r| r.category == LiftCategory::ReducedSpeed)
            .collect()
    }
}

// =============================================================================
// Wind Forecast
// =============================================================================

/// One hourly wind forecast period
///
/// Speed and gust are `None` when the source string was missing or did not
/// parse; a malformed sample never aborts the fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindForecastSample {
    /// Start of the forecast period
    pub start_time: Option<DateTime<FixedOffset>>,

    /// Sustained wind speed in mph
    pub wind_speed_mph: Option<i32>,

    /// Wind gust in mph, where forecast
    pub wind_gust_mph: Option<i32>,

    /// Compass direction label (e.g. "NW")
    pub wind_direction: String,
}

impl WindForecastSample {
    /// Period start formatted for display (e.g. "08:00 AM"), empty if unset
    pub fn hour_label(&self) -> String {
        self.start_time
            .map(|t| t.format("%I:%M %p").to_string())
            .unwrap_or_default()
    }
}

/// Directional summary of near-term forecast wind speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindTrend {
    /// Speed rising across the trend window
    Increasing,
    /// Speed falling across the trend window
    Decreasing,
    /// Within the no-change threshold
    NoChange,
    /// Too few samples or missing speeds
    NotAvailable,
}

impl WindTrend {
    /// Display label matching the dashboard wording
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Increasing => "Increasing",
            Self::Decreasing => "Decreasing",
            Self::NoChange => "No Change",
            Self::NotAvailable => "N/A",
        }
    }
}

impl std::fmt::Display for WindTrend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(category: LiftCategory, reasoning: &str, resolved: &str) -> LiftStatusRecord {
        LiftStatusRecord {
            lift_name: "Jupiter".to_string(),
            category,
            reasoning: reasoning.to_string(),
            event_time: NaiveDate::from_ymd_opt(2025, 2, 28)
                .unwrap()
                .and_hms_opt(7, 45, 0),
            resolved_marker: resolved.to_string(),
            fault_text: "Wind > 40mph".to_string(),
            duration_hours: None,
        }
    }

    mod category_tests {
        use super::*;

        #[test]
        fn test_recognized_labels() {
            assert_eq!(
                LiftCategory::from_label("Reduced/Adjust Speed"),
                LiftCategory::ReducedSpeed
            );
            assert_eq!(LiftCategory::from_label("Hold"), LiftCategory::Hold);
            assert_eq!(LiftCategory::from_label(" Hold "), LiftCategory::Hold);
        }

        #[test]
        fn test_unrecognized_label_passes_through() {
            let cat = LiftCategory::from_label("Scheduled Maintenance");
            assert_eq!(
                cat,
                LiftCategory::Other("Scheduled Maintenance".to_string())
            );
            assert!(!cat.is_recognized());
        }

        #[test]
        fn test_display_round_trips_labels() {
            assert_eq!(LiftCategory::Hold.to_string(), "Hold");
            assert_eq!(
                LiftCategory::ReducedSpeed.to_string(),
                "Reduced/Adjust Speed"
            );
            assert_eq!(
                LiftCategory::Other("Closed".to_string()).to_string(),
                "Closed"
            );
        }
    }

    mod record_tests {
        use super::*;

        #[test]
        fn test_unresolved_marker() {
            assert!(record(LiftCategory::Hold, "High wind", "").is_unresolved());
            assert!(record(LiftCategory::Hold, "High wind", "  ").is_unresolved());
            assert!(!record(LiftCategory::Hold, "High wind", "done").is_unresolved());
        }

        #[test]
        fn test_wind_match_is_case_insensitive() {
            assert!(record(LiftCategory::Hold, "High wind", "").is_wind_related());
            assert!(record(LiftCategory::Hold, "WIND gusts", "").is_wind_related());
            assert!(record(LiftCategory::Hold, "Windy ridge", "").is_wind_related());
            assert!(!record(LiftCategory::Hold, "Mechanical issue", "").is_wind_related());
            assert!(!record(LiftCategory::Hold, "", "").is_wind_related());
        }

        #[test]
        fn test_event_time_label() {
            let r = record(LiftCategory::Hold, "High wind", "");
            assert_eq!(r.event_time_label(), "07:45 AM");

            let mut unparsed = r.clone();
            unparsed.event_time = None;
            assert_eq!(unparsed.event_time_label(), "");
        }
    }

    mod view_tests {
        use super::*;

        #[test]
        fn test_holds_all_spans_both_partitions() {
            let views = CategorizedLifts {
                all_filtered: vec![
                    record(LiftCategory::Hold, "High wind", ""),
                    record(LiftCategory::Hold, "Mechanical issue", ""),
                    record(LiftCategory::ReducedSpeed, "Wind", ""),
                ],
                wind_hold: vec![record(LiftCategory::Hold, "High wind", "")],
                other_hold: vec![record(LiftCategory::Hold, "Mechanical issue", "")],
            };

            assert_eq!(views.holds_all().len(), 2);
            assert_eq!(views.reduced_speed().len(), 1);
        }

        #[test]
        fn test_empty_views() {
            let views = CategorizedLifts::empty();
            assert!(views.all_filtered.is_empty());
            assert!(views.holds_all().is_empty());
            assert!(views.reduced_speed().is_empty());
        }
    }

    mod trend_tests {
        use super::*;

        #[test]
        fn test_trend_labels() {
            assert_eq!(WindTrend::Increasing.to_string(), "Increasing");
            assert_eq!(WindTrend::Decreasing.to_string(), "Decreasing");
            assert_eq!(WindTrend::NoChange.to_string(), "No Change");
            assert_eq!(WindTrend::NotAvailable.to_string(), "N/A");
        }
    }

    #[test]
    fn test_raw_row_deserializes_with_missing_columns() {
        let data = "Lift,MEOW Category\nJupiter,Hold\n";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let row: RawStatusRow = reader.deserialize().next().unwrap().unwrap();
        assert_eq!(row.lift, "Jupiter");
        assert_eq!(row.category, "Hold");
        assert_eq!(row.resolved, "");
        assert_eq!(row.event_time, "");
    }
}
