//! Batch command helpers.
//!
//! Input parsing and end-of-run statistics used by the batch command.

pub mod input;
pub mod statistics;

// Re-export public API
pub use input::{is_skippable, parse_reading_line};
pub use statistics::print_verification_statistics;
