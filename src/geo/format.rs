//! Human-readable formatting for distances and coordinates.

use crate::config::{GOOGLE_MAPS_BASE_URL, METERS_PER_KILOMETER};

/// Formats a distance for display.
///
/// Under a kilometer the value is rounded to whole meters (`"42m"`); otherwise
/// it is shown in kilometers with two decimals (`"1.23km"`).
pub fn format_distance(meters: f64) -> String {
    if meters < METERS_PER_KILOMETER {
        format!("{:.0}m", meters.round())
    } else {
        // Ties round up at the 10 m place
        let hundredths = (meters / 10.0).round() / 100.0;
        format!("{:.2}km", hundredths)
    }
}

/// Formats a latitude/longitude pair rounded to six decimal places.
pub fn format_coordinates(latitude: f64, longitude: f64) -> String {
    format!("{:.6}, {:.6}", latitude, longitude)
}

/// Builds a Google Maps link for a point. Values are interpolated as-is.
pub fn google_maps_link(latitude: f64, longitude: f64) -> String {
    format!("{}?q={},{}", GOOGLE_MAPS_BASE_URL, latitude, longitude)
}
