//! Configuration types.
//!
//! This module defines the log options used by the CLI and the immutable
//! proximity configuration injected into the verifier.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::config::constants::{
    BYPASS_ENABLED_VALUE, DEFAULT_ALLOWED_RADIUS_METERS, DEFAULT_SHOP_LATITUDE,
    DEFAULT_SHOP_LONGITUDE, DEFAULT_SHOP_NAME, ENV_BYPASS_LOCATION_CHECK, ENV_SHOP_LATITUDE,
    ENV_SHOP_LONGITUDE, ENV_SHOP_NAME, ENV_SHOP_RADIUS_METERS,
};
use crate::error_handling::{ConfigError, ConfigValidationError};
use crate::geo::Coordinate;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// The fixed location readings are compared against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferencePoint {
    /// Degrees
    pub latitude: f64,
    /// Degrees
    pub longitude: f64,
    /// Display label used in user-facing messages
    pub name: String,
}

impl ReferencePoint {
    /// Creates a reference point.
    pub fn new(latitude: f64, longitude: f64, name: impl Into<String>) -> Self {
        Self {
            latitude,
            longitude,
            name: name.into(),
        }
    }

    /// The point as a [`Coordinate`] without accuracy.
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

impl Default for ReferencePoint {
    fn default() -> Self {
        Self::new(
            DEFAULT_SHOP_LATITUDE,
            DEFAULT_SHOP_LONGITUDE,
            DEFAULT_SHOP_NAME,
        )
    }
}

/// Proximity verification configuration.
///
/// Built once at startup and handed to [`crate::ProximityVerifier`]. Nothing
/// re-reads the environment after construction, so the bypass flag cannot
/// change for the life of the process.
///
/// # Examples
///
/// ```
/// use shop_proximity::{ProximityConfig, ReferencePoint};
///
/// let config = ProximityConfig {
///     reference_point: ReferencePoint::new(40.7128, -74.0060, "yard"),
///     radius_meters: 250.0,
///     ..Default::default()
/// };
/// assert!(!config.bypass_enabled);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProximityConfig {
    /// Location of the shop
    pub reference_point: ReferencePoint,

    /// Maximum distance in meters for a reading to be verified (inclusive)
    pub radius_meters: f64,

    /// Skip acquisition and classification entirely. Never enable in production.
    pub bypass_enabled: bool,
}

impl Default for ProximityConfig {
    fn default() -> Self {
        Self {
            reference_point: ReferencePoint::default(),
            radius_meters: DEFAULT_ALLOWED_RADIUS_METERS,
            bypass_enabled: false,
        }
    }
}

/// Interprets the bypass flag. Only the exact string `"true"` enables it.
pub fn parse_bypass_flag(value: Option<&str>) -> bool {
    value == Some(BYPASS_ENABLED_VALUE)
}

fn parse_number(variable: &'static str, value: Option<String>) -> Result<Option<f64>, ConfigError> {
    match value {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber {
                variable,
                value: raw,
            }),
    }
}

impl ProximityConfig {
    /// Reads the configuration from process environment variables.
    ///
    /// Missing variables fall back to the defaults. See [`Self::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidNumber` if a numeric variable is set but
    /// cannot be parsed. Range checks are left to [`Self::validate`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ReferencePoint::default();

        let latitude = parse_number(ENV_SHOP_LATITUDE, lookup(ENV_SHOP_LATITUDE))?
            .unwrap_or(defaults.latitude);
        let longitude = parse_number(ENV_SHOP_LONGITUDE, lookup(ENV_SHOP_LONGITUDE))?
            .unwrap_or(defaults.longitude);
        let name = lookup(ENV_SHOP_NAME)
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(defaults.name);
        let radius_meters = parse_number(ENV_SHOP_RADIUS_METERS, lookup(ENV_SHOP_RADIUS_METERS))?
            .unwrap_or(DEFAULT_ALLOWED_RADIUS_METERS);
        let bypass_enabled = parse_bypass_flag(lookup(ENV_BYPASS_LOCATION_CHECK).as_deref());

        Ok(Self {
            reference_point: ReferencePoint::new(latitude, longitude, name),
            radius_meters,
            bypass_enabled,
        })
    }

    /// Checks that the configured values are usable.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let point = &self.reference_point;
        if !point.latitude.is_finite() || !(-90.0..=90.0).contains(&point.latitude) {
            return Err(ConfigValidationError {
                field: "latitude",
                message: format!("{} must be between -90 and 90", point.latitude),
            });
        }
        if !point.longitude.is_finite() || !(-180.0..=180.0).contains(&point.longitude) {
            return Err(ConfigValidationError {
                field: "longitude",
                message: format!("{} must be between -180 and 180", point.longitude),
            });
        }
        if point.name.trim().is_empty() {
            return Err(ConfigValidationError {
                field: "name",
                message: "must not be empty".to_string(),
            });
        }
        if !self.radius_meters.is_finite() || self.radius_meters <= 0.0 {
            return Err(ConfigValidationError {
                field: "radius_meters",
                message: format!("{} must be greater than 0", self.radius_meters),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = ProximityConfig::default();
        assert_eq!(config.reference_point.latitude, 33.97121);
        assert_eq!(config.reference_point.longitude, -84.18066);
        assert_eq!(config.reference_point.name, "shop");
        assert_eq!(config.radius_meters, 100.0);
        assert!(!config.bypass_enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_bypass_flag_exact_match_only() {
        assert!(parse_bypass_flag(Some("true")));
        assert!(!parse_bypass_flag(None));
        assert!(!parse_bypass_flag(Some("")));
        assert!(!parse_bypass_flag(Some("TRUE")));
        assert!(!parse_bypass_flag(Some("True")));
        assert!(!parse_bypass_flag(Some("1")));
        assert!(!parse_bypass_flag(Some("yes")));
        assert!(!parse_bypass_flag(Some(" true")));
        assert!(!parse_bypass_flag(Some("false")));
    }

    #[test]
    fn test_from_lookup_empty_uses_defaults() {
        let config = ProximityConfig::from_lookup(|_| None).expect("defaults");
        assert_eq!(config, ProximityConfig::default());
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = ProximityConfig::from_lookup(lookup_from(&[
            ("SHOP_LATITUDE", "40.7128"),
            ("SHOP_LONGITUDE", " -74.0060 "),
            ("SHOP_NAME", "yard"),
            ("SHOP_RADIUS_METERS", "250"),
            ("BYPASS_LOCATION_CHECK", "true"),
        ]))
        .expect("valid overrides");
        assert_eq!(
            config.reference_point,
            ReferencePoint::new(40.7128, -74.0060, "yard")
        );
        assert_eq!(config.radius_meters, 250.0);
        assert!(config.bypass_enabled);
    }

    #[test]
    fn test_from_lookup_blank_name_falls_back() {
        let config =
            ProximityConfig::from_lookup(lookup_from(&[("SHOP_NAME", "  ")])).expect("config");
        assert_eq!(config.reference_point.name, "shop");
    }

    #[test]
    fn test_from_lookup_invalid_number() {
        let err = ProximityConfig::from_lookup(lookup_from(&[("SHOP_RADIUS_METERS", "far")]))
            .expect_err("should reject non-numeric radius");
        assert_eq!(
            err,
            ConfigError::InvalidNumber {
                variable: "SHOP_RADIUS_METERS",
                value: "far".to_string(),
            }
        );
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = ProximityConfig::default();
        config.radius_meters = 0.0;
        assert_eq!(config.validate().unwrap_err().field, "radius_meters");

        let mut config = ProximityConfig::default();
        config.radius_meters = f64::NAN;
        assert_eq!(config.validate().unwrap_err().field, "radius_meters");

        let mut config = ProximityConfig::default();
        config.reference_point.latitude = 91.0;
        assert_eq!(config.validate().unwrap_err().field, "latitude");

        let mut config = ProximityConfig::default();
        config.reference_point.longitude = -181.0;
        assert_eq!(config.validate().unwrap_err().field, "longitude");

        let mut config = ProximityConfig::default();
        config.reference_point.name = String::new();
        assert_eq!(config.validate().unwrap_err().field, "name");
    }
}
