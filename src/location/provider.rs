//! Positioning capability abstraction and built-in providers.

use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use super::options::PositionOptions;
use crate::error_handling::LocationError;
use crate::geo::Coordinate;

/// A device positioning capability offering "get current position once".
///
/// Implementations make exactly one request per call and must honor
/// `options.maximum_age`. The caller bounds the call with `options.timeout`,
/// so implementations do not need their own timeout plumbing; dropping the
/// returned future cancels the request.
pub trait LocationProvider: Send + Sync {
    /// Requests a single position fix.
    fn current_position(
        &self,
        options: &PositionOptions,
    ) -> impl Future<Output = Result<Coordinate, LocationError>> + Send;

    /// Whether the platform has a positioning capability at all.
    fn is_supported(&self) -> bool {
        true
    }
}

/// Provider that answers every request with a preset reading or error.
///
/// Used when the position arrives out-of-band (the CLI takes it as
/// arguments) and in tests. An optional delay simulates a slow sensor.
#[derive(Debug)]
pub struct FixedLocationProvider {
    response: Result<Coordinate, LocationError>,
    delay: Option<Duration>,
    requests: AtomicUsize,
}

impl FixedLocationProvider {
    /// Always answers with `coordinate`.
    pub fn new(coordinate: Coordinate) -> Self {
        Self {
            response: Ok(coordinate),
            delay: None,
            requests: AtomicUsize::new(0),
        }
    }

    /// Always answers with `error`.
    pub fn failing(error: LocationError) -> Self {
        Self {
            response: Err(error),
            delay: None,
            requests: AtomicUsize::new(0),
        }
    }

    /// Waits `delay` before answering each request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of position requests made so far.
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

impl LocationProvider for FixedLocationProvider {
    async fn current_position(
        &self,
        _options: &PositionOptions,
    ) -> Result<Coordinate, LocationError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.response.clone()
    }
}

/// Provider for platforms with no positioning capability.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedLocationProvider;

impl LocationProvider for UnsupportedLocationProvider {
    async fn current_position(
        &self,
        _options: &PositionOptions,
    ) -> Result<Coordinate, LocationError> {
        Err(LocationError::Unsupported)
    }

    fn is_supported(&self) -> bool {
        false
    }
}
