//! Error type definitions.
//!
//! This module defines the error types used throughout the crate. Location
//! errors render as user-facing guidance because they end up in front of the
//! person trying to clock in.

use log::SetLoggerError;
use strum::IntoEnumIterator;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error reading configuration values from the environment.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A numeric variable was present but could not be parsed.
    #[error("Invalid value for {variable}: '{value}' is not a number")]
    InvalidNumber {
        /// Environment variable name
        variable: &'static str,
        /// Raw value that failed to parse
        value: String,
    },
}

/// A configuration value that parsed correctly but is out of range.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Invalid configuration for {field}: {message}")]
pub struct ConfigValidationError {
    /// Name of the offending field
    pub field: &'static str,
    /// What is wrong and what range is accepted
    pub message: String,
}

/// Failure to obtain a position from the device.
///
/// `Display` yields the message shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocationError {
    /// The user declined location access.
    #[error("Location permission denied. Please enable location access in your browser settings.")]
    PermissionDenied,

    /// The platform could not determine a position.
    #[error("Location information unavailable. Please check your device settings.")]
    PositionUnavailable,

    /// No position was obtained within the time bound.
    #[error("Location request timed out. Please try again.")]
    Timeout,

    /// The platform has no positioning capability at all.
    #[error("Geolocation is not supported by your browser")]
    Unsupported,

    /// Any other acquisition failure. The detail is kept for logs only.
    #[error("Unable to get your location")]
    Other(String),
}

/// Discriminant of [`LocationError`], used for statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum LocationErrorKind {
    /// See [`LocationError::PermissionDenied`]
    PermissionDenied,
    /// See [`LocationError::PositionUnavailable`]
    PositionUnavailable,
    /// See [`LocationError::Timeout`]
    Timeout,
    /// See [`LocationError::Unsupported`]
    Unsupported,
    /// See [`LocationError::Other`]
    Other,
}

impl LocationError {
    /// Returns the kind of this error without its detail.
    pub fn kind(&self) -> LocationErrorKind {
        match self {
            LocationError::PermissionDenied => LocationErrorKind::PermissionDenied,
            LocationError::PositionUnavailable => LocationErrorKind::PositionUnavailable,
            LocationError::Timeout => LocationErrorKind::Timeout,
            LocationError::Unsupported => LocationErrorKind::Unsupported,
            LocationError::Other(_) => LocationErrorKind::Other,
        }
    }
}

impl LocationErrorKind {
    /// Label used in statistics output.
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationErrorKind::PermissionDenied => "Permission denied",
            LocationErrorKind::PositionUnavailable => "Position unavailable",
            LocationErrorKind::Timeout => "Timeout",
            LocationErrorKind::Unsupported => "Geolocation unsupported",
            LocationErrorKind::Other => "Other location error",
        }
    }
}

impl std::fmt::Display for LocationErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one verification, tallied by [`super::VerificationStats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerificationOutcome {
    /// Within the allowed radius
    Verified,
    /// Skipped because the bypass flag is set
    Bypassed,
    /// Position acquired but too far from the reference point
    OutOfRange,
    /// Position could not be acquired
    LocationFailed(LocationErrorKind),
}

impl VerificationOutcome {
    /// Label used in statistics output.
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationOutcome::Verified => "Verified",
            VerificationOutcome::Bypassed => "Bypassed",
            VerificationOutcome::OutOfRange => "Out of range",
            VerificationOutcome::LocationFailed(kind) => kind.as_str(),
        }
    }

    /// Every outcome, including one per location failure kind.
    pub fn all() -> impl Iterator<Item = VerificationOutcome> {
        [
            VerificationOutcome::Verified,
            VerificationOutcome::Bypassed,
            VerificationOutcome::OutOfRange,
        ]
        .into_iter()
        .chain(LocationErrorKind::iter().map(VerificationOutcome::LocationFailed))
    }

    /// True for outcomes that permit the clock-in/out action.
    pub fn is_verified(&self) -> bool {
        matches!(
            self,
            VerificationOutcome::Verified | VerificationOutcome::Bypassed
        )
    }
}

impl From<LocationErrorKind> for VerificationOutcome {
    fn from(kind: LocationErrorKind) -> Self {
        VerificationOutcome::LocationFailed(kind)
    }
}

/// A coordinate outside the physically valid ranges.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoordinateError {
    /// Latitude is not finite or outside [-90, 90]
    #[error("Latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    /// Longitude is not finite or outside [-180, 180]
    #[error("Longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),

    /// Accuracy is not finite or negative
    #[error("Accuracy {0} must be a non-negative number of meters")]
    InvalidAccuracy(f64),
}
