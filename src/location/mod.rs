//! Location acquisition.
//!
//! Wraps a [`LocationProvider`] in a single-shot, timeout-bounded request. The
//! timeout is applied here with `tokio::time::timeout` so every provider is
//! bounded the same way regardless of what the platform does internally.

mod options;
mod provider;

use log::{debug, warn};

use crate::error_handling::LocationError;
use crate::geo::Coordinate;

// Re-export public API
pub use options::PositionOptions;
pub use provider::{FixedLocationProvider, LocationProvider, UnsupportedLocationProvider};

/// Obtains the current position from `provider`.
///
/// Makes exactly one request and never retries. Fails immediately with
/// `LocationError::Unsupported` when the provider has no capability, and with
/// `LocationError::Timeout` when no fix arrives within `options.timeout`.
///
/// # Example
///
/// ```
/// use shop_proximity::{acquire_location, Coordinate, FixedLocationProvider, PositionOptions};
///
/// # #[tokio::main]
/// # async fn main() {
/// let provider = FixedLocationProvider::new(Coordinate::new(33.9712, -84.1806));
/// let fix = acquire_location(&provider, &PositionOptions::default()).await;
/// assert_eq!(fix.map(|c| c.latitude), Ok(33.9712));
/// # }
/// ```
pub async fn acquire_location<P>(
    provider: &P,
    options: &PositionOptions,
) -> Result<Coordinate, LocationError>
where
    P: LocationProvider,
{
    if !provider.is_supported() {
        warn!("No positioning capability available");
        return Err(LocationError::Unsupported);
    }

    debug!(
        "Requesting position (high_accuracy={}, timeout={:?}, maximum_age={:?})",
        options.enable_high_accuracy, options.timeout, options.maximum_age
    );

    let result = match tokio::time::timeout(options.timeout, provider.current_position(options)).await
    {
        Ok(result) => result,
        Err(_) => Err(LocationError::Timeout),
    };

    match &result {
        Ok(coordinate) => debug!(
            "Position acquired: {} (accuracy: {:?}m)",
            coordinate, coordinate.accuracy
        ),
        Err(LocationError::Other(detail)) => warn!("Location request failed: {}", detail),
        Err(e) => warn!("Location request failed: {:?}", e),
    }

    result
}
