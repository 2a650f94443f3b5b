//! Attendance CLI Entry Point
//!
//! Uses `anyhow` for startup errors, but command-level errors are
//! `kernel::error::AppError` and are reported with their suggested action.
//!
//! # Usage
//!
//! ```bash
//! attendance login jane --password '...'
//! attendance check-in --photo selfie.png --lat 12.9 --long 77.6 --accuracy 15
//! attendance logs --status "On Time"
//! attendance checkout
//! attendance status
//! attendance logout
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod context;

use commands::check_in::CheckInArgs;
use config::CliConfig;
use context::AppContext;
use kernel::error::app_error::AppResult;

#[derive(Debug, Parser)]
#[command(name = "attendance")]
#[command(author, version, about = "Geotagged photo attendance")]
struct Cli {
    /// Local state file (defaults to ATTENDANCE_STATE_FILE)
    #[arg(long, global = true)]
    state_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Sign in and store the session locally
    Login {
        /// User name or email
        user: String,

        /// Password (falls back to ATTENDANCE_PASSWORD)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Capture today's attendance
    CheckIn {
        /// Image file used as the camera frame
        #[arg(long)]
        photo: PathBuf,

        #[arg(long, allow_hyphen_values = true)]
        lat: Option<f64>,

        #[arg(long, allow_hyphen_values = true)]
        long: Option<f64>,

        /// Fix accuracy in meters
        #[arg(long)]
        accuracy: Option<f64>,
    },
    /// Record a checkout and clear today's capture
    Checkout {
        #[arg(long, allow_hyphen_values = true, requires = "long")]
        lat: Option<f64>,

        #[arg(long, allow_hyphen_values = true, requires = "lat")]
        long: Option<f64>,
    },
    /// Show recent attendance logs
    Logs {
        /// Only show this status (remembered for later calls)
        #[arg(long, conflicts_with = "all")]
        status: Option<String>,

        /// Clear the remembered status filter
        #[arg(long)]
        all: bool,
    },
    /// Show the signed-in employee and today's capture
    Status,
    /// Sign out and clear all local state
    Logout,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "attendance=info,auth=info,attendance_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let ctx = AppContext::open(CliConfig::from_env(cli.state_file))?;

    if let Err(e) = run(cli.command, &ctx).await {
        eprintln!("{}", e.message());
        if let Some(action) = e.action() {
            eprintln!("  → {}", action);
        }
        std::process::exit(1);
    }
    Ok(())
}

async fn run(command: Commands, ctx: &AppContext) -> AppResult<()> {
    match command {
        Commands::Login { user, password } => commands::login::run(ctx, user, password).await,
        Commands::CheckIn {
            photo,
            lat,
            long,
            accuracy,
        } => {
            commands::check_in::run(
                ctx,
                CheckInArgs {
                    photo,
                    latitude: lat,
                    longitude: long,
                    accuracy,
                },
            )
            .await
        }
        Commands::Checkout { lat, long } => commands::checkout::run(ctx, lat, long).await,
        Commands::Logs { status, all } => commands::logs::run(ctx, status, all).await,
        Commands::Status => commands::status::run(ctx).await,
        Commands::Logout => commands::logout::run(ctx).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_in_accepts_negative_coordinates() {
        let cli = Cli::try_parse_from([
            "attendance",
            "check-in",
            "--photo",
            "me.png",
            "--lat",
            "-33.86",
            "--long",
            "151.2",
        ])
        .unwrap();

        match cli.command {
            Commands::CheckIn { lat, long, .. } => {
                assert_eq!(lat, Some(-33.86));
                assert_eq!(long, Some(151.2));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_logs_status_conflicts_with_all() {
        assert!(Cli::try_parse_from(["attendance", "logs", "--status", "Late", "--all"]).is_err());
    }

    #[test]
    fn test_checkout_needs_both_coordinates() {
        assert!(Cli::try_parse_from(["attendance", "checkout", "--lat", "1.0"]).is_err());
        assert!(Cli::try_parse_from(["attendance", "checkout"]).is_ok());
    }
}
