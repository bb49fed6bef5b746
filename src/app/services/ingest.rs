//! Record ingestion for lift status rows
//!
//! Normalizes a sequence of loosely-typed spreadsheet rows into uniform
//! [`LiftStatusRecord`]s. Ingestion is a pure transform: a timestamp that
//! fails to parse becomes `None` (the record is later dropped by the date
//! filter, not here), and unrecognized category labels pass through for the
//! category filter to reject.

use crate::app::models::{LiftCategory, LiftStatusRecord, RawStatusRow};
use chrono::NaiveDateTime;
use tracing::debug;

/// Timestamp formats accepted for the event-time column
const EVENT_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Normalize raw spreadsheet rows into typed records
///
/// Never fails; rows with malformed fields produce records with null fields
/// rather than being dropped.
pub fn ingest_rows(rows: &[RawStatusRow]) -> Vec<LiftStatusRecord> {
    rows.iter().map(ingest_row).collect()
}

/// Normalize a single raw row
pub fn ingest_row(row: &RawStatusRow) -> LiftStatusRecord {
    LiftStatusRecord {
        lift_name: row.lift.trim().to_string(),
        category: LiftCategory::from_label(&row.category),
        reasoning: row.reasoning.trim().to_string(),
        event_time: parse_event_time(&row.event_time),
        resolved_marker: row.resolved.trim().to_string(),
        fault_text: row.fault.trim().to_string(),
        duration_hours: None,
    }
}

/// Parse an event timestamp string, coercing failures to `None`
pub fn parse_event_time(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    for format in EVENT_TIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(parsed);
        }
    }

    debug!("unparseable event time coerced to null: '{trimmed}'");
    None
}

/// Read raw rows from CSV bytes
///
/// If the bytes cannot be interpreted as tabular data at all, returns an
/// empty sequence rather than failing the pipeline; individual bad rows are
/// skipped the same way.
pub fn rows_from_csv(bytes: &[u8]) -> Vec<RawStatusRow> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(bytes);

    let mut rows = Vec::new();
    for result in reader.deserialize::<RawStatusRow>() {
        match result {
            Ok(row) => rows.push(row),
            Err(err) => debug!("skipping malformed sheet row: {err}"),
        }
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    fn raw_row(event_time: &str) -> RawStatusRow {
        RawStatusRow {
            lift: "Jupiter".to_string(),
            category: "Hold".to_string(),
            reasoning: "High wind".to_string(),
            event_time: event_time.to_string(),
            resolved: String::new(),
            fault: "Wind > 40mph".to_string(),
        }
    }

    #[test]
    fn test_ingest_well_formed_row() {
        let record = ingest_row(&raw_row("2025-02-28 07:45:00"));

        assert_eq!(record.lift_name, "Jupiter");
        assert_eq!(record.category, LiftCategory::Hold);
        let time = record.event_time.unwrap();
        assert_eq!(time.date().day(), 28);
        assert_eq!(time.hour(), 7);
        assert_eq!(time.minute(), 45);
        assert!(record.duration_hours.is_none());
    }

    #[test]
    fn test_bad_timestamp_coerces_to_null() {
        let record = ingest_row(&raw_row("not a time"));
        assert!(record.event_time.is_none());
        // The record itself survives ingestion
        assert_eq!(record.lift_name, "Jupiter");
    }

    #[test]
    fn test_empty_timestamp_coerces_to_null() {
        assert!(parse_event_time("").is_none());
        assert!(parse_event_time("   ").is_none());
    }

    #[test]
    fn test_alternate_timestamp_formats() {
        assert!(parse_event_time("2025-02-28 07:45").is_some());
        assert!(parse_event_time("02/28/2025 07:45:00").is_some());
    }

    #[test]
    fn test_unrecognized_category_passes_through() {
        let mut row = raw_row("2025-02-28 07:45:00");
        row.category = "Closed".to_string();

        let record = ingest_row(&row);
        assert_eq!(record.category, LiftCategory::Other("Closed".to_string()));
    }

    #[test]
    fn test_missing_resolved_marker_is_empty() {
        let record = ingest_row(&raw_row("2025-02-28 07:45:00"));
        assert!(record.is_unresolved());
    }

    #[test]
    fn test_rows_from_csv() {
        let data = "\
Lift,MEOW Category,MEOW Reasoning,10.60 TIME,10.63,Fault
Jupiter,Hold,High wind,2025-02-28 07:45:00,,Wind > 40mph
Tombstone,Hold,Mechanical issue,2025-02-28 10:10:00,,Drive fault
";
        let rows = rows_from_csv(data.as_bytes());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].lift, "Jupiter");
        assert_eq!(rows[1].reasoning, "Mechanical issue");
    }

    #[test]
    fn test_non_tabular_bytes_yield_empty_sequence() {
        let rows = rows_from_csv(&[0xff, 0xfe, 0x00, 0x01]);
        assert!(rows.is_empty());
    }

    #[test]
    fn test_ingest_preserves_row_order() {
        let rows = vec![raw_row("2025-02-28 07:45:00"), {
            let mut r = raw_row("2025-02-28 08:30:00");
            r.lift = "Eagle".to_string();
            r
        }];

        let records = ingest_rows(&rows);
        assert_eq!(records[0].lift_name, "Jupiter");
        assert_eq!(records[1].lift_name, "Eagle");
    }
}
