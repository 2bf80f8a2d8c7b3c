//! Geographic coordinate type.

use serde::{Deserialize, Serialize};

use super::distance::haversine_distance;
use super::format::{format_coordinates, google_maps_link};
use crate::error_handling::CoordinateError;

/// A point on the Earth's surface as reported by a device.
///
/// `accuracy` is the device's estimated error radius in meters. It is carried
/// for display and diagnostics only and never enters the distance math.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    /// Degrees, nominally in [-90, 90]
    pub latitude: f64,
    /// Degrees, nominally in [-180, 180]
    pub longitude: f64,
    /// Estimated error radius in meters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<f64>,
}

impl Coordinate {
    /// Creates a coordinate without an accuracy estimate.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            accuracy: None,
        }
    }

    /// Placeholder location attached to results that never acquired a position.
    pub fn zeroed() -> Self {
        Self::default()
    }

    /// Attaches an accuracy estimate in meters.
    pub fn with_accuracy(mut self, accuracy: f64) -> Self {
        self.accuracy = Some(accuracy);
        self
    }

    /// Great-circle distance to `other` in meters.
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        haversine_distance(
            self.latitude,
            self.longitude,
            other.latitude,
            other.longitude,
        )
    }

    /// Google Maps link to this point.
    pub fn maps_link(&self) -> String {
        google_maps_link(self.latitude, self.longitude)
    }

    /// Checks that the coordinate lies within physically valid ranges.
    ///
    /// Distance calculation does not require this; it is offered to callers that
    /// accept coordinates from untrusted input.
    pub fn validate(&self) -> Result<(), CoordinateError> {
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(CoordinateError::LatitudeOutOfRange(self.latitude));
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(CoordinateError::LongitudeOutOfRange(self.longitude));
        }
        if let Some(accuracy) = self.accuracy {
            if !accuracy.is_finite() || accuracy < 0.0 {
                return Err(CoordinateError::InvalidAccuracy(accuracy));
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_coordinates(self.latitude, self.longitude))
    }
}
