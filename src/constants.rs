//! Application constants for liftwatch
//!
//! This module contains the recognized status category labels, trend
//! thresholds, lift classification membership lists, and default external
//! endpoints used throughout the application.

// =============================================================================
// Status Categories
// =============================================================================

/// Category label for lifts running at reduced speed
pub const CATEGORY_REDUCED_SPEED: &str = "Reduced/Adjust Speed";

/// Category label for lifts fully stopped
pub const CATEGORY_HOLD: &str = "Hold";

/// Substring (matched case-insensitively) that marks a hold as wind-related
pub const WIND_REASON_SUBSTRING: &str = "wind";

// =============================================================================
// Spreadsheet Column Headers
// =============================================================================

/// Column headers as exported by the operational log spreadsheet
pub mod sheet_columns {
    /// Lift name
    pub const LIFT: &str = "Lift";

    /// Operational status classification (MEOW category)
    pub const CATEGORY: &str = "MEOW Category";

    /// Free-text reasoning for the current status
    pub const REASONING: &str = "MEOW Reasoning";

    /// Timestamp the status event was logged (10.60 radio code)
    pub const EVENT_TIME: &str = "10.60 TIME";

    /// Resolution marker; non-empty means the event is resolved (10.63 code)
    pub const RESOLVED: &str = "10.63";

    /// Fault description
    pub const FAULT: &str = "Fault";
}

// =============================================================================
// Wind Trend
// =============================================================================

/// Number of leading forecast samples considered by the trend summarizer
pub const DEFAULT_TREND_HOURS: usize = 5;

/// Number of hourly periods retained from a forecast fetch
pub const DEFAULT_FORECAST_HOURS: usize = 6;

/// Speed difference (mph) below which the trend counts as "No Change"
pub const TREND_THRESHOLD_MPH: f64 = 0.5;

/// Minimum number of samples required to classify a trend
pub const MIN_TREND_SAMPLES: usize = 3;

// =============================================================================
// Dashboard Defaults
// =============================================================================

/// Seconds between automatic page refreshes
pub const DEFAULT_REFRESH_SECS: u64 = 30;

/// Default bind address for the dashboard server
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Default NOAA hourly forecast grid endpoints, one per side of the resort
pub const DEFAULT_FORECAST_ENDPOINTS: &[(&str, &str)] = &[
    (
        "MV Wind Forecast",
        "https://api.weather.gov/gridpoints/SLC/112,168/forecast/hourly",
    ),
    (
        "CV Wind Forecast",
        "https://api.weather.gov/gridpoints/SLC/111,170/forecast/hourly",
    ),
];

// =============================================================================
// Lift Classification Lists
// =============================================================================
//
// Maintained by hand. Names absent from every list classify as Unknown with
// no validation; typos fall through silently.

/// Lifts belonging to the Mountain Village side
pub const MOUNTAIN_VILLAGE_LIFTS: &[&str] = &[
    "First Time",
    "Town",
    "Payday",
    "Crescent",
    "3 Kings",
    "Bonanza",
    "Silverlode",
    "Motherlode",
    "King Con",
    "Eagle",
    "Eaglet",
    "Silver Star",
    "McConkey's",
    "Pioneer",
    "Thaynes",
    "Jupiter",
    "Little Miners",
    "Mine Cart",
    "Tommy Knocker",
    "Mule Train",
];

/// Lifts belonging to the Canyons Village side
pub const CANYONS_VILLAGE_LIFTS: &[&str] = &[
    "Cabriolet",
    "Frostwood",
    "Sunrise",
    "Red Pine Gondola",
    "Orange Bubble",
    "Saddleback",
    "High Meadow",
    "Short Cut",
    "Sun Peak",
    "Condor",
    "9990",
    "Peak 5",
    "Tombstone",
    "Iron Mountain",
    "Timberline",
    "Flat Iron",
    "Sweet Pea",
    "Rip Cord",
    "Day Break",
    "Dreamscape",
    "Dreamcatcher",
    "Quicksilver",
    "Over and Out",
    "Silver Lining",
    "Hang Ten",
    "Magic Carpet",
    "Ripperoo",
];

/// Out-of-base feeder lifts, highlighted first when both lists match
pub const FEEDER_LIFTS: &[&str] = &[
    "Red Pine Gondola",
    "Orange Bubble",
    "Crescent",
    "Payday",
    "Eagle",
];

/// Upper-mountain lifts, highlighted when not already a feeder
pub const UPPER_MOUNTAIN_LIFTS: &[&str] = &["Pioneer", "Thaynes", "McConkey's", "Jupiter"];

// =============================================================================
// Environment Variables
// =============================================================================

/// Environment variable overriding the sheet CSV export URL
pub const ENV_SHEET_URL: &str = "LIFTWATCH_SHEET_URL";

/// Environment variable overriding the sheet display name
pub const ENV_SHEET_NAME: &str = "LIFTWATCH_SHEET_NAME";

/// Environment variable pointing at a config file
pub const ENV_CONFIG_FILE: &str = "LIFTWATCH_CONFIG";
