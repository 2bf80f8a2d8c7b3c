//! Verification statistics tracking.
//!
//! Thread-safe tally of verification outcomes, used by the batch command to
//! report how many readings were accepted and why the rest were rejected.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::types::VerificationOutcome;

/// Thread-safe verification outcome tracker.
///
/// Every outcome is initialized to zero on creation, so counters can be
/// shared across tasks behind an `Arc` without further locking.
pub struct VerificationStats {
    outcomes: HashMap<VerificationOutcome, AtomicUsize>,
}

impl VerificationStats {
    /// Creates a tally with every outcome at zero.
    pub fn new() -> Self {
        let mut outcomes = HashMap::new();
        for outcome in VerificationOutcome::all() {
            outcomes.insert(outcome, AtomicUsize::new(0));
        }
        VerificationStats { outcomes }
    }

    /// Increment the counter for an outcome.
    pub fn record(&self, outcome: VerificationOutcome) {
        if let Some(counter) = self.outcomes.get(&outcome) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to record outcome {:?} which is not in the map. \
                 This indicates a bug in VerificationStats initialization.",
                outcome
            );
        }
    }

    /// Get the count for an outcome.
    pub fn get_count(&self, outcome: VerificationOutcome) -> usize {
        self.outcomes
            .get(&outcome)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Total number of recorded verifications.
    pub fn total(&self) -> usize {
        VerificationOutcome::all().map(|o| self.get_count(o)).sum()
    }

    /// Number of verifications that permitted the action (including bypassed ones).
    pub fn total_verified(&self) -> usize {
        VerificationOutcome::all()
            .filter(VerificationOutcome::is_verified)
            .map(|o| self.get_count(o))
            .sum()
    }

    /// Number of verifications that blocked the action.
    pub fn total_rejected(&self) -> usize {
        self.total() - self.total_verified()
    }
}

impl Default for VerificationStats {
    fn default() -> Self {
        Self::new()
    }
}
