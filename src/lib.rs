//! Liftwatch Library
//!
//! A Rust library for a lift-status dashboard that merges a spreadsheet-backed
//! operational log of ski-lift status entries with NOAA hourly wind forecasts.
//!
//! This library provides tools for:
//! - Ingesting loosely-typed spreadsheet rows into uniform lift status records
//! - Filtering today's unresolved entries and splitting them into categorized views
//! - Summarizing the short-range wind-speed trend from hourly forecast periods
//! - Classifying lifts into village groups and highlight classes
//! - Rendering the merged result as an auto-refreshing HTML dashboard
//! - Degrading to fixed fallback datasets when an external source is unavailable

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod pipeline;
    pub mod services {
        pub mod categorizer;
        pub mod classify;
        pub mod ingest;
        pub mod trend;
    }
    pub mod sources {
        pub mod forecast;
        pub mod sheet;
    }
}

// Dashboard rendering and HTTP server
pub mod dashboard {
    pub mod render;
    pub mod server;
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{CategorizedLifts, LiftCategory, LiftStatusRecord, WindForecastSample, WindTrend};
pub use config::Config;

/// Result type alias for liftwatch operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for liftwatch operations
///
/// Note that the core pipeline absorbs its own failures (a fetch failure
/// degrades to fallback data, a filter failure degrades to empty views);
/// these variants surface only at the configuration and server boundaries.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Spreadsheet source could not be reached or read
    #[error("Sheet source unavailable: {reason}")]
    SheetUnavailable { reason: String },

    /// Forecast endpoint could not be reached or its payload was malformed
    #[error("Forecast source unavailable for '{endpoint}': {reason}")]
    ForecastUnavailable { endpoint: String, reason: String },

    /// CSV parsing error
    #[error("CSV parsing error: {message}")]
    CsvParsing {
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Dashboard server error
    #[error("Server error: {message}")]
    Server { message: String },

    /// Processing interrupted (e.g. Ctrl-C)
    #[error("Interrupted: {reason}")]
    Interrupted { reason: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a sheet-unavailable error
    pub fn sheet_unavailable(reason: impl Into<String>) -> Self {
        Self::SheetUnavailable {
            reason: reason.into(),
        }
    }

    /// Create a forecast-unavailable error
    pub fn forecast_unavailable(endpoint: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ForecastUnavailable {
            endpoint: endpoint.into(),
            reason: reason.into(),
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(message: impl Into<String>, source: Option<csv::Error>) -> Self {
        Self::CsvParsing {
            message: message.into(),
            source,
        }
    }

    /// Create a server error
    pub fn server(message: impl Into<String>) -> Self {
        Self::Server {
            message: message.into(),
        }
    }

    /// Create an interrupted error
    pub fn interrupted(reason: impl Into<String>) -> Self {
        Self::Interrupted {
            reason: reason.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}
