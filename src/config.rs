//! Configuration management and validation.
//!
//! Provides the explicit configuration object for the dashboard: sheet
//! source identity, forecast endpoints, refresh cadence, and server bind
//! address. The configuration is resolved once at process start (TOML file,
//! then environment overrides, then CLI flags) and passed down explicitly;
//! nothing re-initializes it behind the pipeline's back.

use crate::constants::{
    self, DEFAULT_BIND_ADDR, DEFAULT_FORECAST_ENDPOINTS, DEFAULT_FORECAST_HOURS,
    DEFAULT_REFRESH_SECS, DEFAULT_TREND_HOURS,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Identity and location of the spreadsheet source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetConfig {
    /// Display name of the sheet
    pub name: String,

    /// Published CSV export URL
    pub csv_url: Option<String>,

    /// Local CSV file, used in preference to the URL when set
    pub csv_path: Option<PathBuf>,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            name: "lift status log".to_string(),
            csv_url: None,
            csv_path: None,
        }
    }
}

/// One named NOAA grid-point forecast endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEndpoint {
    /// Panel heading on the dashboard (e.g. "MV Wind Forecast")
    pub label: String,

    /// Hourly forecast URL
    pub url: String,
}

/// Global configuration for the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Spreadsheet source
    pub sheet: SheetConfig,

    /// Forecast endpoints, rendered side by side in declaration order
    pub forecast_endpoints: Vec<ForecastEndpoint>,

    /// Seconds between automatic page refreshes
    pub refresh_secs: u64,

    /// Leading forecast samples considered by the trend summarizer
    pub trend_hours: usize,

    /// Hourly periods retained per forecast fetch
    pub forecast_hours: usize,

    /// Dashboard server bind address
    pub bind_addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sheet: SheetConfig::default(),
            forecast_endpoints: DEFAULT_FORECAST_ENDPOINTS
                .iter()
                .map(|(label, url)| ForecastEndpoint {
                    label: (*label).to_string(),
                    url: (*url).to_string(),
                })
                .collect(),
            refresh_secs: DEFAULT_REFRESH_SECS,
            trend_hours: DEFAULT_TREND_HOURS,
            forecast_hours: DEFAULT_FORECAST_HOURS,
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
        }
    }
}

/// Partial configuration as read from a TOML file; every field optional
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    sheet: Option<SheetConfig>,
    forecast_endpoints: Option<Vec<ForecastEndpoint>>,
    refresh_secs: Option<u64>,
    trend_hours: Option<usize>,
    forecast_hours: Option<usize>,
    bind_addr: Option<String>,
}

impl Config {
    /// Resolve configuration: defaults, then the TOML file (explicit path or
    /// the default location), then environment overrides
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let mut config = Config::default();

        let path = match config_file {
            Some(path) => Some(path.to_path_buf()),
            None => std::env::var(constants::ENV_CONFIG_FILE)
                .ok()
                .map(PathBuf::from)
                .or_else(default_config_path),
        };

        if let Some(path) = path {
            if path.exists() {
                config = config.merge_file(&path)?;
            } else if config_file.is_some() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    path.display()
                )));
            }
        }

        config.apply_env_overrides();
        config.validate()?;
        debug!("resolved configuration: {:?}", config);
        Ok(config)
    }

    fn merge_file(mut self, path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| Error::configuration(format!("cannot read {}: {e}", path.display())))?;
        let file: FileConfig = toml::from_str(&raw)
            .map_err(|e| Error::configuration(format!("invalid TOML in {}: {e}", path.display())))?;

        if let Some(sheet) = file.sheet {
            self.sheet = sheet;
        }
        if let Some(endpoints) = file.forecast_endpoints {
            self.forecast_endpoints = endpoints;
        }
        if let Some(secs) = file.refresh_secs {
            self.refresh_secs = secs;
        }
        if let Some(hours) = file.trend_hours {
            self.trend_hours = hours;
        }
        if let Some(hours) = file.forecast_hours {
            self.forecast_hours = hours;
        }
        if let Some(addr) = file.bind_addr {
            self.bind_addr = addr;
        }

        Ok(self)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var(constants::ENV_SHEET_URL) {
            if !url.trim().is_empty() {
                self.sheet.csv_url = Some(url);
            }
        }
        if let Ok(name) = std::env::var(constants::ENV_SHEET_NAME) {
            if !name.trim().is_empty() {
                self.sheet.name = name;
            }
        }
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<()> {
        if self.refresh_secs == 0 {
            return Err(Error::configuration(
                "refresh_secs must be greater than 0".to_string(),
            ));
        }

        if self.trend_hours == 0 {
            return Err(Error::configuration(
                "trend_hours must be greater than 0".to_string(),
            ));
        }

        if self.forecast_hours == 0 {
            return Err(Error::configuration(
                "forecast_hours must be greater than 0".to_string(),
            ));
        }

        if self.forecast_endpoints.is_empty() {
            return Err(Error::configuration(
                "at least one forecast endpoint is required".to_string(),
            ));
        }

        for endpoint in &self.forecast_endpoints {
            if endpoint.label.trim().is_empty() || endpoint.url.trim().is_empty() {
                return Err(Error::configuration(
                    "forecast endpoints require a label and a URL".to_string(),
                ));
            }
        }

        if self.bind_addr.parse::<std::net::SocketAddr>().is_err() {
            return Err(Error::configuration(format!(
                "invalid bind address: {}",
                self.bind_addr
            )));
        }

        Ok(())
    }

    /// Set the sheet CSV export URL
    pub fn with_sheet_url(mut self, url: impl Into<String>) -> Self {
        self.sheet.csv_url = Some(url.into());
        self
    }

    /// Set a local CSV file as the sheet source
    pub fn with_sheet_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.sheet.csv_path = Some(path.into());
        self
    }

    /// Set the refresh interval in seconds
    pub fn with_refresh_secs(mut self, secs: u64) -> Self {
        self.refresh_secs = secs;
        self
    }

    /// Set the server bind address
    pub fn with_bind_addr(mut self, addr: impl Into<String>) -> Self {
        self.bind_addr = addr.into();
        self
    }
}

/// Default config file location (~/.config/liftwatch/config.toml)
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("liftwatch").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Mutex;

    // Serializes the tests that read or write the LIFTWATCH_* process
    // environment variables
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.refresh_secs, 30);
        assert_eq!(config.trend_hours, 5);
        assert_eq!(config.forecast_endpoints.len(), 2);
        assert_eq!(config.forecast_endpoints[0].label, "MV Wind Forecast");
    }

    #[test]
    fn test_validation_rejects_zero_intervals() {
        assert!(Config::default().with_refresh_secs(0).validate().is_err());

        let mut config = Config::default();
        config.trend_hours = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_bad_bind_addr() {
        let config = Config::default().with_bind_addr("not an address");
        assert!(config.validate().is_err());

        let config = Config::default().with_bind_addr("127.0.0.1:8080");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_empty_endpoints() {
        let mut config = Config::default();
        config.forecast_endpoints.clear();
        assert!(config.validate().is_err());

        config.forecast_endpoints.push(ForecastEndpoint {
            label: String::new(),
            url: "https://example.test/forecast".to_string(),
        });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_builder_methods() {
        let config = Config::default()
            .with_sheet_url("https://example.test/export.csv")
            .with_refresh_secs(60)
            .with_bind_addr("0.0.0.0:8080");

        assert_eq!(
            config.sheet.csv_url.as_deref(),
            Some("https://example.test/export.csv")
        );
        assert_eq!(config.refresh_secs, 60);
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
    }

    #[test]
    fn test_load_from_toml_file() {
        let _guard = ENV_LOCK.lock().unwrap();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
refresh_secs = 45
bind_addr = "127.0.0.1:9000"

[sheet]
name = "ARM_1060_copy"
csv_url = "https://example.test/export.csv"

[[forecast_endpoints]]
label = "Summit Forecast"
url = "https://api.weather.gov/gridpoints/SLC/112,169/forecast/hourly"
"#
        )
        .unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.refresh_secs, 45);
        assert_eq!(config.sheet.name, "ARM_1060_copy");
        assert_eq!(config.forecast_endpoints.len(), 1);
        assert_eq!(config.forecast_endpoints[0].label, "Summit Forecast");
        // Unset file keys keep their defaults
        assert_eq!(config.trend_hours, 5);
    }

    #[test]
    fn test_env_vars_override_file_values() {
        let _guard = ENV_LOCK.lock().unwrap();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[sheet]
name = "file sheet"
csv_url = "https://example.test/file.csv"
"#
        )
        .unwrap();

        unsafe {
            std::env::set_var(constants::ENV_SHEET_URL, "https://example.test/env.csv");
            std::env::set_var(constants::ENV_SHEET_NAME, "env sheet");
        }

        let config = Config::load(Some(file.path()));

        unsafe {
            std::env::remove_var(constants::ENV_SHEET_URL);
            std::env::remove_var(constants::ENV_SHEET_NAME);
        }

        // Environment takes precedence over file values
        let config = config.unwrap();
        assert_eq!(
            config.sheet.csv_url.as_deref(),
            Some("https://example.test/env.csv")
        );
        assert_eq!(config.sheet.name, "env sheet");
    }

    #[test]
    fn test_blank_env_vars_are_ignored() {
        let _guard = ENV_LOCK.lock().unwrap();

        unsafe {
            std::env::set_var(constants::ENV_SHEET_URL, "   ");
            std::env::set_var(constants::ENV_SHEET_NAME, "");
        }

        let mut config = Config::default();
        config.apply_env_overrides();

        unsafe {
            std::env::remove_var(constants::ENV_SHEET_URL);
            std::env::remove_var(constants::ENV_SHEET_NAME);
        }

        assert!(config.sheet.csv_url.is_none());
        assert_eq!(config.sheet.name, "lift status log");
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let result = Config::load(Some(Path::new("/nonexistent/liftwatch.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_invalid_toml_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "refresh_secs = [not toml").unwrap();

        let result = Config::load(Some(file.path()));
        assert!(result.is_err());
    }
}
