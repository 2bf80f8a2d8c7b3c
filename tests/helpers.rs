// Shared test helpers for building configurations and readings.
//
// This module is included by other test files with `mod helpers;`.

use shop_proximity::{Coordinate, ProximityConfig};

pub const SHOP_LAT: f64 = 33.97121;
pub const SHOP_LON: f64 = -84.18066;

/// Meters per degree of latitude on a sphere of radius 6,371 km.
pub const METERS_PER_DEGREE_LAT: f64 = 111_194.93;

/// Builds a configuration from key/value pairs as if they were environment variables.
#[allow(dead_code)] // Used by other test files
pub fn config_from_env_pairs(pairs: &[(&str, &str)]) -> ProximityConfig {
    let owned: Vec<(String, String)> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    ProximityConfig::from_lookup(move |name| {
        owned
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.clone())
    })
    .expect("test configuration should parse")
}

/// A point roughly `meters` due north of the default shop.
#[allow(dead_code)] // Used by other test files
pub fn point_north_of_shop(meters: f64) -> Coordinate {
    Coordinate::new(SHOP_LAT + meters / METERS_PER_DEGREE_LAT, SHOP_LON)
}
