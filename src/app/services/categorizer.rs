//! Filter & categorize for lift status records
//!
//! The core of the dashboard: keeps today's unresolved records with a
//! recognized category, computes elapsed duration, and splits the survivors
//! into the three output views. The function is pure and total: given the
//! same records, `today`, and `now` it produces identical output, and it
//! cannot fail (upstream fetch/parse failures are absorbed before this
//! point into empty or fallback record sequences).

use crate::app::models::{CategorizedLifts, LiftCategory, LiftStatusRecord};
use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;

/// Apply the date/category/unresolved filter and partition the holds
///
/// Filter steps, in order:
/// 1. `event_time` parses and falls on `today`;
/// 2. category is `ReducedSpeed` or `Hold`;
/// 3. resolution marker is empty.
///
/// Surviving records get `duration_hours = (now − event_time)` in hours,
/// rounded to 2 decimals. A future `event_time` yields a negative duration;
/// this mirrors the operational log's behavior and is deliberately not
/// clamped.
///
/// Hold records are partitioned into wind-related and other holds by a
/// case-insensitive "wind" match on the reasoning text; reduced-speed
/// records are retained only in the full filtered set.
pub fn filter_and_categorize(
    records: &[LiftStatusRecord],
    today: NaiveDate,
    now: NaiveDateTime,
) -> CategorizedLifts {
    let mut views = CategorizedLifts::empty();

    for record in records {
        if !passes_filters(record, today) {
            continue;
        }

        let mut kept = record.clone();
        kept.duration_hours = kept.event_time.map(|t| duration_hours(t, now));

        if kept.category == LiftCategory::Hold {
            if kept.is_wind_related() {
                views.wind_hold.push(kept.clone());
            } else {
                views.other_hold.push(kept.clone());
            }
        }
        views.all_filtered.push(kept);
    }

    debug!(
        "categorized {} records: {} filtered, {} wind holds, {} other holds",
        records.len(),
        views.all_filtered.len(),
        views.wind_hold.len(),
        views.other_hold.len()
    );

    views
}

/// Check whether a record survives the date/category/unresolved filter
fn passes_filters(record: &LiftStatusRecord, today: NaiveDate) -> bool {
    match record.event_date() {
        Some(date) if date == today => {}
        _ => return false,
    }

    if !record.category.is_recognized() {
        return false;
    }

    record.is_unresolved()
}

/// Hours between `event_time` and `now`, rounded to 2 decimals
fn duration_hours(event_time: NaiveDateTime, now: NaiveDateTime) -> f64 {
    let hours = (now - event_time).num_seconds() as f64 / 3600.0;
    (hours * 100.0).round() / 100.0
}
