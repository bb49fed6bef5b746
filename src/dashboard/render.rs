//! HTML rendering for the dashboard page
//!
//! Builds the full auto-refreshing page from a [`DashboardSnapshot`]:
//! village-split tables for reduced-speed lifts and wind holds, per-endpoint
//! forecast panels with a colored trend line, and the non-wind hold table.
//! Rows for feeder and upper-mountain lifts carry highlight classes picked up
//! by the embedded stylesheet.

use crate::app::models::{LiftStatusRecord, WindTrend};
use crate::app::pipeline::{DashboardSnapshot, ForecastPanel};
use crate::app::services::classify::{Highlight, Village};
use std::fmt::Write;

/// Embedded stylesheet
const PAGE_CSS: &str = r#"
    .stApp, body {
        background-color: #F2F1F1;
        font-family: 'Roboto', sans-serif;
    }
    h1, h2, h3, h4, h5, h6 {
        color: #871b0b;
        text-align: center;
    }
    .columns { display: flex; gap: 2em; }
    .columns > div { flex: 1; }
    table {
        width: 100%;
        border-collapse: collapse;
    }
    table th {
        text-align: center;
        background-color: #F8F8F8;
        border-bottom: 2px solid #ddd;
        color: #333333;
    }
    table td {
        text-align: center;
        color: #333333;
    }
    .feeder-lift {
        background-color: #FFCCCC;
    }
    .upper-mountain-lift {
        background-color: #CCE5FF;
    }
    .trend-line { text-align: center; color: #333333; }
"#;

/// Render the complete dashboard page
pub fn render_page(snapshot: &DashboardSnapshot, refresh_secs: u64) -> String {
    let mut page = String::new();

    let _ = write!(
        page,
        "<!DOCTYPE html>\n<html>\n<head>\n\
         <meta charset=\"utf-8\">\n\
         <meta http-equiv=\"refresh\" content=\"{refresh_secs}\">\n\
         <title>Lift Wind Status Dashboard</title>\n\
         <style>{PAGE_CSS}</style>\n\
         </head>\n<body>\n\
         <h1>Lift Wind Status Dashboard</h1>\n"
    );

    if !snapshot.sheet_connected {
        page.push_str("<p style=\"text-align:center;\"><em>Live sheet unavailable; showing sample data.</em></p>\n");
    }

    render_village_columns(&mut page, snapshot);
    render_forecast_columns(&mut page, &snapshot.forecasts);
    render_other_holds(&mut page, snapshot);

    let _ = write!(
        page,
        "<p style=\"text-align:center; color:#888;\">Last updated {}</p>\n</body>\n</html>\n",
        snapshot.generated_at.format("%I:%M:%S %p")
    );

    page
}

/// Side-by-side village sections: reduced-speed and wind-hold tables
fn render_village_columns(page: &mut String, snapshot: &DashboardSnapshot) {
    page.push_str("<div class=\"columns\">\n");

    for village in [Village::MountainVillage, Village::CanyonsVillage] {
        let reduced: Vec<&LiftStatusRecord> = snapshot
            .lifts
            .reduced_speed()
            .into_iter()
            .filter(|r| Village::for_lift(&r.lift_name) == village)
            .collect();
        let wind: Vec<&LiftStatusRecord> = snapshot
            .lifts
            .wind_hold
            .iter()
            .filter(|r| Village::for_lift(&r.lift_name) == village)
            .collect();

        let short = village.as_str();

        page.push_str("<div>\n");
        let _ = write!(page, "<h2>{short} Lifts</h2>\n<h3>Reduced/Adjust Speed</h3>\n");
        if reduced.is_empty() {
            let _ = write!(
                page,
                "<p>No {short} lifts on reduced/adjust speed currently.</p>\n"
            );
        } else {
            render_lift_table(page, &reduced, false);
        }

        page.push_str("<h3>Hold - Wind Related</h3>\n");
        if wind.is_empty() {
            let _ = write!(page, "<p>No {short} lifts on wind-related hold currently.</p>\n");
        } else {
            render_lift_table(page, &wind, false);
        }
        page.push_str("</div>\n");
    }

    page.push_str("</div>\n");
}

/// Per-endpoint forecast panels with the colored trend summary line
fn render_forecast_columns(page: &mut String, panels: &[ForecastPanel]) {
    page.push_str("<h2>NOAA Wind Forecasts</h2>\n<div class=\"columns\">\n");

    for panel in panels {
        page.push_str("<div>\n");
        let _ = write!(page, "<h3>{}</h3>\n", escape(&panel.label));
        let _ = write!(
            page,
            "<p class=\"trend-line\">Wind Speed Trend next 3 hours: \
             <strong style=\"color:{}\">{}</strong></p>\n",
            trend_color(panel.trend),
            panel.trend
        );

        page.push_str(
            "<table>\n<thead><tr><th>Hour</th><th>Wind Speed (mph)</th>\
             <th>Wind Gust (mph)</th><th>Wind Direction</th></tr></thead>\n<tbody>\n",
        );
        for sample in &panel.samples {
            let _ = write!(
                page,
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                sample.hour_label(),
                opt_int(sample.wind_speed_mph),
                opt_int(sample.wind_gust_mph),
                escape(&sample.wind_direction)
            );
        }
        page.push_str("</tbody></table>\n</div>\n");
    }

    page.push_str("</div>\n");
}

/// Full-width table for non-wind holds, with the Village column
fn render_other_holds(page: &mut String, snapshot: &DashboardSnapshot) {
    page.push_str("<h2>Lifts on Hold - Other</h2>\n");

    let other: Vec<&LiftStatusRecord> = snapshot.lifts.other_hold.iter().collect();
    if other.is_empty() {
        page.push_str("<p>No lifts on hold for reasons other than wind currently.</p>\n");
    } else {
        render_lift_table(page, &other, true);
    }
}

/// A lift status table; `with_village` adds Village and Reasoning columns
fn render_lift_table(page: &mut String, records: &[&LiftStatusRecord], with_village: bool) {
    page.push_str("<table>\n<thead><tr><th>Lift</th>");
    if with_village {
        page.push_str("<th>Village</th>");
    }
    page.push_str("<th>10.60 TIME</th><th>Duration</th><th>Fault</th>");
    if with_village {
        page.push_str("<th>MEOW Reasoning</th>");
    }
    page.push_str("</tr></thead>\n<tbody>\n");

    for record in records {
        let class = Highlight::for_lift(&record.lift_name).css_class();
        if class.is_empty() {
            page.push_str("<tr>");
        } else {
            let _ = write!(page, "<tr class=\"{class}\">");
        }

        let _ = write!(page, "<td>{}</td>", escape(&record.lift_name));
        if with_village {
            let _ = write!(page, "<td>{}</td>", Village::for_lift(&record.lift_name));
        }
        let _ = write!(
            page,
            "<td>{}</td><td>{}</td><td>{}</td>",
            record.event_time_label(),
            record
                .duration_hours
                .map(|h| format!("{h:.2}"))
                .unwrap_or_default(),
            escape(&record.fault_text)
        );
        if with_village {
            let _ = write!(page, "<td>{}</td>", escape(&record.reasoning));
        }
        page.push_str("</tr>\n");
    }

    page.push_str("</tbody></table>\n");
}

/// Trend label color: red rising, green falling, grey otherwise
fn trend_color(trend: WindTrend) -> &'static str {
    match trend {
        WindTrend::Increasing => "#FF0000",
        WindTrend::Decreasing => "#008000",
        WindTrend::NoChange | WindTrend::NotAvailable => "#333333",
    }
}

fn opt_int(value: Option<i32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Minimal HTML escaping for text cells
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
