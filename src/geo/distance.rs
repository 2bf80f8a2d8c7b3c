//! Great-circle distance.

use crate::config::EARTH_RADIUS_METERS;

/// Calculates the Haversine distance between two points in meters.
///
/// Uses a spherical Earth of radius [`EARTH_RADIUS_METERS`]. Good to a few
/// tenths of a percent for the short distances this crate deals with. Inputs
/// are not range-checked; see [`crate::Coordinate::validate`].
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    // Clamp so rounding near antipodal points cannot push sqrt(1 - a) to NaN
    let a = ((delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_METERS * c
}
