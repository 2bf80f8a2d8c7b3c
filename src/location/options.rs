//! Position request options.

use std::time::Duration;

use crate::config::{LOCATION_MAXIMUM_AGE, LOCATION_TIMEOUT};

/// Options for a single position request.
///
/// The defaults ask for a high-accuracy fix, wait at most
/// [`LOCATION_TIMEOUT`], and refuse any cached position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionOptions {
    /// Prefer GPS over coarser sources
    pub enable_high_accuracy: bool,
    /// Upper bound on the whole request
    pub timeout: Duration,
    /// Oldest cached position the provider may return
    pub maximum_age: Duration,
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self {
            enable_high_accuracy: true,
            timeout: LOCATION_TIMEOUT,
            maximum_age: LOCATION_MAXIMUM_AGE,
        }
    }
}

impl PositionOptions {
    /// Replaces the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
