//! Shop proximity verifier.

use log::{debug, info, warn};

use super::result::{LocationVerification, VerificationResult};
use crate::config::ProximityConfig;
use crate::geo::Coordinate;
use crate::location::{acquire_location, LocationProvider, PositionOptions};

/// Decides whether a device is close enough to the shop to clock in or out.
///
/// Holds only immutable configuration. The positioning capability is passed
/// per call, so one verifier serves any number of devices concurrently.
///
/// # Example
///
/// ```
/// use shop_proximity::{Coordinate, FixedLocationProvider, ProximityConfig, ProximityVerifier};
///
/// # #[tokio::main]
/// # async fn main() {
/// let verifier = ProximityVerifier::new(ProximityConfig::default());
/// let device = FixedLocationProvider::new(Coordinate::new(33.97121, -84.18066));
///
/// let verdict = verifier.verify_location(&device).await;
/// assert!(verdict.verified);
/// assert_eq!(verdict.distance_formatted, "0m");
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ProximityVerifier {
    config: ProximityConfig,
    options: PositionOptions,
}

impl ProximityVerifier {
    /// Creates a verifier with default position options.
    pub fn new(config: ProximityConfig) -> Self {
        if config.bypass_enabled {
            warn!("Location check bypass is ENABLED; every verification will pass");
        }
        Self {
            config,
            options: PositionOptions::default(),
        }
    }

    /// Overrides the position request options (timeout, accuracy, cache age).
    pub fn with_options(mut self, options: PositionOptions) -> Self {
        self.options = options;
        self
    }

    /// The configuration this verifier was built with.
    pub fn config(&self) -> &ProximityConfig {
        &self.config
    }

    /// Distance in meters from `coordinate` to the reference point.
    pub fn distance_from_reference(&self, coordinate: &Coordinate) -> f64 {
        coordinate.distance_to(&self.config.reference_point.coordinate())
    }

    /// Classifies `coordinate` against the reference point and allowed radius.
    pub fn classify(&self, coordinate: &Coordinate) -> VerificationResult {
        let distance = self.distance_from_reference(coordinate);
        let result = VerificationResult::from_distance(distance, self.config.radius_meters);
        debug!(
            "Classified {} at {} from {} (radius {}m): within_range={}",
            coordinate,
            result.distance_formatted,
            self.config.reference_point.name,
            self.config.radius_meters,
            result.is_within_range
        );
        result
    }

    /// Runs the full verification: bypass check, acquisition, classification.
    ///
    /// Never fails; problems are reported through `verified` and `error`.
    pub async fn verify_location<P>(&self, provider: &P) -> LocationVerification
    where
        P: LocationProvider,
    {
        if self.config.bypass_enabled {
            warn!("Location check bypassed");
            return LocationVerification::bypassed();
        }

        let location = match acquire_location(provider, &self.options).await {
            Ok(location) => location,
            Err(e) => {
                info!("Location verification failed: {}", e);
                return LocationVerification::acquisition_failed(&e);
            }
        };

        self.verify_coordinate(location)
    }

    /// Classifies an already-acquired reading into a full verdict.
    ///
    /// Honors the bypass flag the same way [`Self::verify_location`] does.
    pub fn verify_coordinate(&self, location: Coordinate) -> LocationVerification {
        if self.config.bypass_enabled {
            warn!("Location check bypassed");
            return LocationVerification::bypassed();
        }

        let result = self.classify(&location);
        let verdict =
            LocationVerification::classified(location, result, &self.config.reference_point.name);
        if verdict.verified {
            info!(
                "Location verified: {} from {}",
                verdict.distance_formatted, self.config.reference_point.name
            );
        } else {
            info!(
                "Location out of range: {} from {} (allowed {}m)",
                verdict.distance_formatted,
                self.config.reference_point.name,
                self.config.radius_meters
            );
        }
        verdict
    }
}
