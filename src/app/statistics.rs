//! Statistics printing.

use log::info;

use crate::error_handling::{VerificationOutcome, VerificationStats};

/// Logs the outcome counts of a batch, skipping outcomes that never occurred.
pub fn print_verification_statistics(stats: &VerificationStats) {
    let total = stats.total();
    if total == 0 {
        info!("No readings verified");
        return;
    }

    info!(
        "Verified {} of {} reading{} ({} rejected)",
        stats.total_verified(),
        total,
        if total == 1 { "" } else { "s" },
        stats.total_rejected()
    );
    for outcome in VerificationOutcome::all() {
        let count = stats.get_count(outcome);
        if count > 0 {
            info!("   {}: {}", outcome.as_str(), count);
        }
    }
}
