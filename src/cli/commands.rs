//! Command implementations for the liftwatch CLI
//!
//! Contains the command execution logic: logging setup, configuration
//! resolution, client construction, and dispatch to the dashboard server or
//! the one-shot snapshot printer.

use crate::app::pipeline::{self, DashboardSnapshot};
use crate::app::sources::forecast::ForecastClient;
use crate::app::sources::sheet::SheetClient;
use crate::cli::args::{Args, Commands, OutputFormat, ServeArgs, SnapshotArgs, SourceArgs};
use crate::config::Config;
use crate::dashboard::server::{self, AppState};
use crate::{Error, Result};
use colored::Colorize;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Main command runner
///
/// Sets up logging, resolves configuration, constructs the source clients
/// once, and runs the requested command until completion or cancellation.
pub async fn run(args: Args, cancellation_token: CancellationToken) -> Result<()> {
    match args.command {
        Some(Commands::Serve(serve_args)) => run_serve(serve_args, cancellation_token).await,
        Some(Commands::Snapshot(snapshot_args)) => run_snapshot(snapshot_args).await,
        None => Err(Error::configuration(
            "No command specified. Use --help for usage.".to_string(),
        )),
    }
}

async fn run_serve(args: ServeArgs, cancellation_token: CancellationToken) -> Result<()> {
    setup_logging(args.source.get_log_level());
    args.validate()?;

    let mut config = load_configuration(&args.source)?;
    if let Some(bind_addr) = &args.bind_addr {
        config = config.with_bind_addr(bind_addr.clone());
    }
    if let Some(refresh_secs) = args.refresh_secs {
        config = config.with_refresh_secs(refresh_secs);
    }
    config.validate()?;

    info!("starting dashboard for sheet '{}'", config.sheet.name);

    let state = Arc::new(AppState {
        sheet: SheetClient::new(config.sheet.clone())?,
        forecast: ForecastClient::new(config.forecast_hours)?,
        config,
    });

    server::serve(state, cancellation_token).await
}

async fn run_snapshot(args: SnapshotArgs) -> Result<()> {
    setup_logging(args.source.get_log_level());
    args.validate()?;

    let config = load_configuration(&args.source)?;
    let sheet = SheetClient::new(config.sheet.clone())?;
    let forecast = ForecastClient::new(config.forecast_hours)?;

    let snapshot = pipeline::run_cycle(&sheet, &forecast, &config).await;

    match args.output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&snapshot)
                .map_err(|e| Error::server(format!("snapshot serialization failed: {e}")))?;
            println!("{json}");
        }
        OutputFormat::Human => print_snapshot(&snapshot),
    }

    Ok(())
}

/// Resolve configuration from file/env and apply CLI source overrides
fn load_configuration(source: &SourceArgs) -> Result<Config> {
    let mut config = Config::load(source.config_file.as_deref())?;

    if let Some(url) = &source.sheet_url {
        config = config.with_sheet_url(url.clone());
    }
    if let Some(path) = &source.sheet_csv {
        config = config.with_sheet_path(path.clone());
    }

    debug!("configuration resolved");
    Ok(config)
}

/// Initialize tracing with the given default level
///
/// RUST_LOG takes precedence when set, matching the usual subscriber setup.
fn setup_logging(level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(format!("liftwatch={level}")));

    // A second init (e.g. in tests) is not an error worth failing over
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}

/// Print a human-readable snapshot summary to stdout
fn print_snapshot(snapshot: &DashboardSnapshot) {
    let source_note = if snapshot.sheet_connected {
        "live".green()
    } else {
        "fallback sample data".yellow()
    };
    println!(
        "{} [{}] ({})",
        "Lift Status Snapshot".bold(),
        snapshot.sheet_name,
        source_note
    );
    println!(
        "  All filtered lifts: {}",
        snapshot.lifts.all_filtered.len()
    );

    println!("  Wind holds: {}", snapshot.lifts.wind_hold.len());
    for record in &snapshot.lifts.wind_hold {
        println!(
            "    {} since {} ({} h)",
            record.lift_name.red(),
            record.event_time_label(),
            record
                .duration_hours
                .map(|h| format!("{h:.2}"))
                .unwrap_or_default()
        );
    }

    println!("  Other holds: {}", snapshot.lifts.other_hold.len());
    for record in &snapshot.lifts.other_hold {
        println!("    {} - {}", record.lift_name, record.reasoning);
    }

    for panel in &snapshot.forecasts {
        let trend = match panel.trend {
            crate::app::models::WindTrend::Increasing => panel.trend.to_string().red(),
            crate::app::models::WindTrend::Decreasing => panel.trend.to_string().green(),
            _ => panel.trend.to_string().normal(),
        };
        let speeds: Vec<String> = panel
            .samples
            .iter()
            .map(|s| {
                s.wind_speed_mph
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "-".to_string())
            })
            .collect();
        println!(
            "  {}: trend {} (speeds: {} mph)",
            panel.label.bold(),
            trend,
            speeds.join(", ")
        );
    }
}
