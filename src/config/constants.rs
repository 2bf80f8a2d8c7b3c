//! Configuration constants.
//!
//! This module defines the defaults used when no override is supplied through
//! the environment or the command line, plus the environment variable names
//! the configuration is read from.

use std::time::Duration;

/// Mean Earth radius in meters (spherical approximation used by the Haversine formula)
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Distances at or above this many meters are formatted in kilometers
pub const METERS_PER_KILOMETER: f64 = 1000.0;

// Reference point defaults (the shop)
/// Default shop latitude in degrees
pub const DEFAULT_SHOP_LATITUDE: f64 = 33.97121;
/// Default shop longitude in degrees
pub const DEFAULT_SHOP_LONGITUDE: f64 = -84.18066;
/// Default shop label used in messages
pub const DEFAULT_SHOP_NAME: &str = "shop";

/// Maximum distance from the shop, in meters, for a reading to count as on-site
pub const DEFAULT_ALLOWED_RADIUS_METERS: f64 = 100.0;

// Location acquisition
/// Upper bound on a single position request
pub const LOCATION_TIMEOUT: Duration = Duration::from_secs(10);
/// Maximum age of a position the platform may hand back (zero forces a fresh fix)
pub const LOCATION_MAXIMUM_AGE: Duration = Duration::ZERO;

// Environment variable names
/// Overrides the shop latitude
pub const ENV_SHOP_LATITUDE: &str = "SHOP_LATITUDE";
/// Overrides the shop longitude
pub const ENV_SHOP_LONGITUDE: &str = "SHOP_LONGITUDE";
/// Overrides the shop label
pub const ENV_SHOP_NAME: &str = "SHOP_NAME";
/// Overrides the allowed radius in meters
pub const ENV_SHOP_RADIUS_METERS: &str = "SHOP_RADIUS_METERS";
/// Bypass is active only when this variable is exactly `"true"`
pub const ENV_BYPASS_LOCATION_CHECK: &str = "BYPASS_LOCATION_CHECK";

/// Literal value that enables the location bypass
pub const BYPASS_ENABLED_VALUE: &str = "true";

/// Suffix appended to the formatted distance of a bypassed verification
pub const BYPASS_DISTANCE_MARKER: &str = "(bypass)";

// Map links
/// Base URL for map links; the point is passed as `?q=lat,lon`
pub const GOOGLE_MAPS_BASE_URL: &str = "https://www.google.com/maps";
