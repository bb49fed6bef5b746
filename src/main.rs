use clap::Parser;
use liftwatch::cli::{args::Args, commands};
use std::process;
use tokio_util::sync::CancellationToken;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic with signal handling
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        // Create cancellation token for coordinating graceful shutdown
        let cancellation_token = CancellationToken::new();

        // Set up graceful shutdown handling
        let shutdown_signal = async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to install CTRL+C signal handler");

            // Cancel all operations when Ctrl+C is received
            cancellation_token.cancel();
        };

        // Run the main command with cancellation support
        tokio::select! {
            result = commands::run(args, cancellation_token.clone()) => {
                result
            }
            _ = shutdown_signal => {
                eprintln!("\nReceived CTRL+C, shutting down gracefully...");
                Err(liftwatch::Error::interrupted(
                    "Dashboard interrupted by user".to_string()
                ))
            }
        }
    });

    match result {
        Ok(()) => {
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Liftwatch - Lift Status and Wind Forecast Dashboard");
    println!("===================================================");
    println!();
    println!("Merge a spreadsheet-backed lift status log with NOAA hourly wind");
    println!("forecasts into an auto-refreshing web dashboard.");
    println!();
    println!("USAGE:");
    println!("    liftwatch <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    serve       Run the dashboard web server (main command)");
    println!("    snapshot    Run one refresh cycle and print the result");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Serve the dashboard on the default address:");
    println!("    liftwatch serve");
    println!();
    println!("    # Serve against a published sheet CSV export:");
    println!("    liftwatch serve --sheet-url https://example.com/sheet.csv --bind 0.0.0.0:8080");
    println!();
    println!("    # One-shot snapshot from a local CSV, as JSON:");
    println!("    liftwatch snapshot --sheet-csv lifts.csv --format json");
    println!();
    println!("For detailed help on any command, use:");
    println!("    liftwatch <COMMAND> --help");
}
