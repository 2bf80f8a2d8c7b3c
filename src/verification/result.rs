//! Verification result types.

use serde::Serialize;

use crate::config::BYPASS_DISTANCE_MARKER;
use crate::error_handling::{LocationError, VerificationOutcome};
use crate::geo::{format_distance, Coordinate};

/// Classification of a distance against the allowed radius.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResult {
    /// `distance_meters <= radius`
    pub is_within_range: bool,
    /// Great-circle distance in meters
    pub distance_meters: f64,
    /// Display form of the distance, such as `"42m"` or `"1.23km"`
    pub distance_formatted: String,
}

impl VerificationResult {
    /// Classifies `distance_meters` against `radius_meters`. The boundary is inclusive.
    pub fn from_distance(distance_meters: f64, radius_meters: f64) -> Self {
        Self {
            is_within_range: distance_meters <= radius_meters,
            distance_meters,
            distance_formatted: format_distance(distance_meters),
        }
    }
}

/// End-to-end verdict handed back to the clock-in/out workflow.
///
/// Failures are encoded here rather than returned as `Err`; callers branch on
/// `verified`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationVerification {
    /// Whether the clock-in/out action may proceed
    pub verified: bool,
    /// Acquired position, or a zeroed one when none was obtained
    pub location: Coordinate,
    /// Meters from the reference point
    pub distance: f64,
    /// Display form of `distance`
    pub distance_formatted: String,
    /// User-facing reason when not verified
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip)]
    outcome: VerificationOutcome,
}

impl LocationVerification {
    pub(crate) fn bypassed() -> Self {
        Self {
            verified: true,
            location: Coordinate::zeroed(),
            distance: 0.0,
            distance_formatted: format!("{} {}", format_distance(0.0), BYPASS_DISTANCE_MARKER),
            error: None,
            outcome: VerificationOutcome::Bypassed,
        }
    }

    pub(crate) fn acquisition_failed(error: &LocationError) -> Self {
        Self {
            verified: false,
            location: Coordinate::zeroed(),
            distance: 0.0,
            distance_formatted: format_distance(0.0),
            error: Some(error.to_string()),
            outcome: VerificationOutcome::LocationFailed(error.kind()),
        }
    }

    pub(crate) fn classified(
        location: Coordinate,
        result: VerificationResult,
        reference_name: &str,
    ) -> Self {
        let (error, outcome) = if result.is_within_range {
            (None, VerificationOutcome::Verified)
        } else {
            (
                Some(format!(
                    "You must be at the {} to clock in/out. You are {} away.",
                    reference_name, result.distance_formatted
                )),
                VerificationOutcome::OutOfRange,
            )
        };
        Self {
            verified: result.is_within_range,
            location,
            distance: result.distance_meters,
            distance_formatted: result.distance_formatted,
            error,
            outcome,
        }
    }

    /// How this verdict was reached.
    pub fn outcome(&self) -> VerificationOutcome {
        self.outcome
    }

    /// True when verification was skipped by the bypass flag.
    pub fn is_bypassed(&self) -> bool {
        self.outcome == VerificationOutcome::Bypassed
    }
}
