//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (Earth radius, defaults, timeouts, variable names)
//! - Log option types for the CLI
//! - The immutable proximity configuration and its environment loader

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{parse_bypass_flag, LogFormat, LogLevel, ProximityConfig, ReferencePoint};
