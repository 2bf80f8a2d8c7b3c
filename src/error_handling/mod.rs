//! Error handling and verification statistics.
//!
//! This module provides:
//! - Error type definitions (initialization, configuration, location, coordinates)
//! - Verification outcome categorization
//! - Thread-safe outcome statistics

mod stats;
mod types;

// Re-export public API
pub use stats::VerificationStats;
pub use types::{
    ConfigError, ConfigValidationError, CoordinateError, InitializationError, LocationError,
    LocationErrorKind, VerificationOutcome,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_initialization() {
        let stats = VerificationStats::new();
        for outcome in VerificationOutcome::all() {
            assert_eq!(stats.get_count(outcome), 0);
        }
        assert_eq!(stats.total(), 0);
    }

    #[test]
    fn test_stats_record() {
        let stats = VerificationStats::new();
        stats.record(VerificationOutcome::Verified);
        stats.record(VerificationOutcome::Verified);
        stats.record(VerificationOutcome::OutOfRange);
        stats.record(LocationErrorKind::Timeout.into());

        assert_eq!(stats.get_count(VerificationOutcome::Verified), 2);
        assert_eq!(stats.get_count(VerificationOutcome::OutOfRange), 1);
        assert_eq!(
            stats.get_count(VerificationOutcome::LocationFailed(
                LocationErrorKind::Timeout
            )),
            1
        );
        assert_eq!(stats.total(), 4);
    }

    #[test]
    fn test_stats_verified_and_rejected_totals() {
        let stats = VerificationStats::new();
        stats.record(VerificationOutcome::Verified);
        stats.record(VerificationOutcome::Bypassed);
        stats.record(VerificationOutcome::OutOfRange);
        stats.record(LocationErrorKind::PermissionDenied.into());
        stats.record(LocationErrorKind::Other.into());

        assert_eq!(stats.total_verified(), 2);
        assert_eq!(stats.total_rejected(), 3);
    }

    #[test]
    fn test_stats_shared_across_threads() {
        use std::sync::Arc;

        let stats = Arc::new(VerificationStats::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let stats = Arc::clone(&stats);
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        stats.record(VerificationOutcome::Verified);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("thread panicked");
        }
        assert_eq!(stats.get_count(VerificationOutcome::Verified), 400);
    }
}
