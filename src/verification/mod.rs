//! Shop proximity verification.
//!
//! Combines the configured reference point, the allowed radius, and a
//! location provider into a single verdict for the clock-in/out workflow.

mod result;
mod verifier;

// Re-export public API
pub use result::{LocationVerification, VerificationResult};
pub use verifier::ProximityVerifier;
