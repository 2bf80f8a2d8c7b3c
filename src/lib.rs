//! shop_proximity library: shop proximity verification for clock-in/out
//!
//! This library decides whether a device is close enough to a fixed reference
//! point (the shop) to allow a clock-in or clock-out. It provides Haversine
//! distance, radius classification, coordinate formatting helpers, a
//! timeout-bounded location acquisition adapter, and a configuration-gated
//! bypass for non-production testing.
//!
//! # Example
//!
//! ```no_run
//! use shop_proximity::{Coordinate, FixedLocationProvider, ProximityConfig, ProximityVerifier};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ProximityConfig::from_env()?;
//! let verifier = ProximityVerifier::new(config);
//!
//! let device = FixedLocationProvider::new(Coordinate::new(33.9713, -84.1807));
//! let verdict = verifier.verify_location(&device).await;
//! if !verdict.verified {
//!     eprintln!("{}", verdict.error.unwrap_or_default());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Location acquisition requires a Tokio runtime (it uses `tokio::time::timeout`).

#![warn(missing_docs)]

mod app;
pub mod config;
pub mod error_handling;
mod geo;
pub mod initialization;
mod location;
mod verification;

// Re-export public API
pub use config::{LogFormat, LogLevel, ProximityConfig, ReferencePoint};
pub use error_handling::{
    ConfigError, ConfigValidationError, CoordinateError, LocationError, LocationErrorKind,
    VerificationOutcome, VerificationStats,
};
pub use geo::{format_coordinates, format_distance, google_maps_link, haversine_distance, Coordinate};
pub use location::{
    acquire_location, FixedLocationProvider, LocationProvider, PositionOptions,
    UnsupportedLocationProvider,
};
pub use run::{run_batch, BatchReport};
pub use verification::{LocationVerification, ProximityVerifier, VerificationResult};

// Batch verification of recorded readings
mod run {
    use std::io::Write;
    use std::path::Path;

    use anyhow::{Context, Result};
    use log::{info, warn};
    use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

    use crate::app::{is_skippable, parse_reading_line, print_verification_statistics};
    use crate::error_handling::VerificationStats;
    use crate::verification::ProximityVerifier;

    /// Results of a batch verification run.
    #[derive(Debug, Clone, PartialEq)]
    pub struct BatchReport {
        /// Number of readings verified (valid lines)
        pub total_readings: usize,
        /// Readings that permitted clock-in/out, bypassed ones included
        pub verified: usize,
        /// Readings that were out of range
        pub rejected: usize,
        /// Non-blank, non-comment lines that could not be parsed
        pub skipped: usize,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Verifies every `lat,lon[,accuracy]` line of `input` against the verifier.
    ///
    /// `input` may be `-` to read from stdin. Each verdict is written to `out`
    /// as one JSON object per line, in input order. Blank lines and lines
    /// starting with `#` are ignored; malformed lines are logged and counted
    /// as skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be opened or read, or if writing
    /// to `out` fails.
    pub async fn run_batch<W: Write>(
        verifier: &ProximityVerifier,
        input: &Path,
        out: &mut W,
    ) -> Result<BatchReport> {
        if input.as_os_str() == "-" {
            info!("Reading coordinates from stdin");
            let reader = BufReader::new(tokio::io::stdin());
            verify_lines(verifier, reader, out).await
        } else {
            let file = tokio::fs::File::open(input)
                .await
                .with_context(|| format!("Failed to open input file {}", input.display()))?;
            verify_lines(verifier, BufReader::new(file), out).await
        }
    }

    async fn verify_lines<R, W>(
        verifier: &ProximityVerifier,
        reader: R,
        out: &mut W,
    ) -> Result<BatchReport>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let start_time = std::time::Instant::now();
        let stats = VerificationStats::new();
        let mut skipped = 0usize;

        let mut lines = reader.lines();
        while let Some(line) = lines
            .next_line()
            .await
            .context("Failed to read line from input")?
        {
            if is_skippable(&line) {
                continue;
            }
            let Some(reading) = parse_reading_line(line.trim()) else {
                skipped += 1;
                continue;
            };

            let verdict = verifier.verify_coordinate(reading);
            stats.record(verdict.outcome());

            let json = serde_json::to_string(&verdict).context("Failed to serialize verdict")?;
            writeln!(out, "{json}").context("Failed to write verdict")?;
        }
        out.flush().context("Failed to flush output")?;

        if skipped > 0 {
            warn!("Skipped {} malformed line{}", skipped, if skipped == 1 { "" } else { "s" });
        }
        print_verification_statistics(&stats);

        Ok(BatchReport {
            total_readings: stats.total(),
            verified: stats.total_verified(),
            rejected: stats.total_rejected(),
            skipped,
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }
}
