//! Geographic coordinates and their projection onto the board
//!
//! This module contains:
//! - Validated coordinate and bounds types
//! - The coordinate-to-cell mapping
//! - Haversine distance for proximity checks

/// Validated latitude/longitude and bounds rectangle
pub mod coordinates;
/// Great-circle distance helpers
pub mod distance;
/// Coordinate-to-cell mapping and grid configuration
pub mod mapping;

pub use coordinates::{Bounds, LatLon};
pub use distance::distance_meters;
pub use mapping::{GridCell, GridConfig, map_to_grid};
