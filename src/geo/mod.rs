//! Geographic primitives.
//!
//! This module provides:
//! - The [`Coordinate`] type reported by devices
//! - Haversine great-circle distance
//! - Display helpers for distances, coordinate pairs, and map links

mod coordinate;
mod distance;
mod format;

// Re-export public API
pub use coordinate::Coordinate;
pub use distance::haversine_distance;
pub use format::{format_coordinates, format_distance, google_maps_link};
