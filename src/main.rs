//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `shop_proximity` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Printing verdicts as JSON on stdout
//!
//! All core functionality is implemented in the library crate.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde_json::json;

use shop_proximity::initialization::init_logger_with;
use shop_proximity::{
    format_coordinates, format_distance, google_maps_link, haversine_distance, run_batch,
    Coordinate, FixedLocationProvider, LogFormat, LogLevel, ProximityConfig, ProximityVerifier,
};

/// Exit code for a verification that ran but did not pass.
const EXIT_NOT_VERIFIED: i32 = 2;

#[derive(Debug, Parser)]
#[command(
    name = "shop_proximity",
    about = "Checks whether a location is close enough to the shop to clock in or out."
)]
struct Cli {
    /// Log level: error|warn|info|debug|trace
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Plain)]
    log_format: LogFormat,

    #[command(flatten)]
    shop: ShopArgs,

    #[command(subcommand)]
    command: Command,
}

/// Reference point overrides. Unset values come from the environment, then defaults.
#[derive(Debug, Args)]
struct ShopArgs {
    /// Shop latitude in degrees (env: SHOP_LATITUDE)
    #[arg(long, global = true, allow_negative_numbers = true)]
    shop_lat: Option<f64>,

    /// Shop longitude in degrees (env: SHOP_LONGITUDE)
    #[arg(long, global = true, allow_negative_numbers = true)]
    shop_lon: Option<f64>,

    /// Shop display name (env: SHOP_NAME)
    #[arg(long, global = true)]
    shop_name: Option<String>,

    /// Allowed radius in meters (env: SHOP_RADIUS_METERS)
    #[arg(long, global = true)]
    radius_meters: Option<f64>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Verify a single reading and print the verdict as JSON
    Verify {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        /// Reported GPS accuracy in meters
        #[arg(long)]
        accuracy: Option<f64>,
    },
    /// Verify `lat,lon[,accuracy]` lines from a file (or `-` for stdin), one JSON verdict per line
    Batch {
        #[arg(value_parser)]
        file: PathBuf,
    },
    /// Print the distance between two points
    Distance {
        #[arg(long, allow_negative_numbers = true)]
        from_lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        from_lon: f64,
        #[arg(long, allow_negative_numbers = true)]
        to_lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        to_lon: f64,
    },
    /// Print formatted coordinates and a map link for a point
    Link {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
    },
}

impl ShopArgs {
    fn apply(&self, config: &mut ProximityConfig) {
        if let Some(lat) = self.shop_lat {
            config.reference_point.latitude = lat;
        }
        if let Some(lon) = self.shop_lon {
            config.reference_point.longitude = lon;
        }
        if let Some(name) = &self.shop_name {
            config.reference_point.name = name.clone();
        }
        if let Some(radius) = self.radius_meters {
            config.radius_meters = radius;
        }
    }
}

fn load_config(shop: &ShopArgs) -> Result<ProximityConfig> {
    let mut config = ProximityConfig::from_env().context("Failed to read configuration")?;
    shop.apply(&mut config);
    config.validate().context("Invalid configuration")?;
    log::debug!("Using configuration: {:?}", config);
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load SHOP_* and BYPASS_LOCATION_CHECK from .env if present
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Failed to load .env: {e}");
        }
    }

    let cli = Cli::parse();

    init_logger_with(cli.log_level.clone().into(), cli.log_format.clone())
        .context("Failed to initialize logger")?;

    match run(cli).await {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("shop_proximity error: {:#}", e);
            process::exit(1);
        }
    }
}

async fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Command::Verify { lat, lon, accuracy } => {
            let verifier = ProximityVerifier::new(load_config(&cli.shop)?);
            let mut reading = Coordinate::new(lat, lon);
            if let Some(accuracy) = accuracy {
                reading = reading.with_accuracy(accuracy);
            }
            let device = FixedLocationProvider::new(reading);
            let verdict = verifier.verify_location(&device).await;
            println!("{}", serde_json::to_string_pretty(&verdict)?);
            Ok(if verdict.verified { 0 } else { EXIT_NOT_VERIFIED })
        }
        Command::Batch { file } => {
            let verifier = ProximityVerifier::new(load_config(&cli.shop)?);
            let mut stdout = std::io::stdout().lock();
            let report = run_batch(&verifier, &file, &mut stdout).await?;
            eprintln!(
                "✅ Verified {} of {} reading{} ({} rejected, {} skipped) in {:.1}s",
                report.verified,
                report.total_readings,
                if report.total_readings == 1 { "" } else { "s" },
                report.rejected,
                report.skipped,
                report.elapsed_seconds
            );
            Ok(0)
        }
        Command::Distance {
            from_lat,
            from_lon,
            to_lat,
            to_lon,
        } => {
            let meters = haversine_distance(from_lat, from_lon, to_lat, to_lon);
            let output = json!({
                "from": format_coordinates(from_lat, from_lon),
                "to": format_coordinates(to_lat, to_lon),
                "distanceMeters": meters,
                "distanceFormatted": format_distance(meters),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(0)
        }
        Command::Link { lat, lon } => {
            let output = json!({
                "coordinates": format_coordinates(lat, lon),
                "mapsLink": google_maps_link(lat, lon),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(0)
        }
    }
}
