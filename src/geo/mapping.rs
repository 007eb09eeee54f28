//! Conversion from geographic coordinates to discrete grid cells
//!
//! The bounds rectangle is split into N equal bands along each axis. Latitude
//! selects the row and longitude selects the column. Points outside the
//! rectangle clamp onto the nearest edge cell, so the mapping never fails.

use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::geo::coordinates::{Bounds, LatLon};
use crate::io::configuration::MAX_GRID_SIZE;
use crate::io::error::{Result, invalid_parameter};

/// A cell on the board, `x` is the column and `y` the row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCell {
    /// Column index
    pub x: usize,
    /// Row index
    pub y: usize,
}

impl GridCell {
    /// Create a cell from column and row
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Index pair in `[row, col]` order for array access
    pub const fn index(self) -> [usize; 2] {
        [self.y, self.x]
    }
}

/// Grid dimension and the real-world rectangle it covers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    size: usize,
    bounds: Bounds,
}

impl GridConfig {
    /// Create a grid configuration
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if `size` is zero or exceeds
    /// `MAX_GRID_SIZE`
    pub fn new(size: usize, bounds: Bounds) -> Result<Self> {
        if size == 0 || size > MAX_GRID_SIZE {
            return Err(invalid_parameter(
                "grid_size",
                &size,
                &format!("must be between 1 and {MAX_GRID_SIZE}"),
            ));
        }

        Ok(Self { size, bounds })
    }

    /// Grid dimension N
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Real-world rectangle covered by the grid
    pub const fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Cell where a new session places the player
    pub const fn start_cell(&self) -> GridCell {
        GridCell::new(self.size / 2, self.size / 2)
    }

    /// Check if a cell lies on the board
    pub const fn contains(&self, cell: GridCell) -> bool {
        cell.x < self.size && cell.y < self.size
    }

    /// Geographic point at the middle of a cell
    ///
    /// Cells beyond the board are clamped first, so the result always maps
    /// back onto a board cell.
    pub fn cell_center(&self, cell: GridCell) -> LatLon {
        let last = self.size - 1;
        let bounds = &self.bounds;
        let band = |index: usize, low: f64, high: f64| {
            let fraction = (index.min(last) as f64 + 0.5) / self.size as f64;
            (high - low).mul_add(fraction, low)
        };

        let latitude = band(cell.y, bounds.south(), bounds.north());
        let longitude = band(cell.x, bounds.west(), bounds.east());
        LatLon::new(latitude, longitude).unwrap_or_else(|_| bounds.center())
    }
}

/// Map a coordinate onto the board
///
/// Normalizes each axis into `[0, 1]` against the bounds, scales by N, floors
/// and clamps to `[0, N-1]`.
pub fn map_to_grid(point: LatLon, config: &GridConfig) -> GridCell {
    let bounds = config.bounds();
    let x = axis_index(point.longitude(), bounds.west(), bounds.east(), config.size());
    let y = axis_index(point.latitude(), bounds.south(), bounds.north(), config.size());
    GridCell::new(x, y)
}

// Band index along one axis, clamped onto the board
fn axis_index(value: f64, low: f64, high: f64, size: usize) -> usize {
    let normalized = (value - low) / (high - low);
    let scaled = (normalized * size as f64).floor();

    if scaled <= 0.0 {
        return 0;
    }

    scaled
        .to_usize()
        .map_or(size - 1, |index| index.min(size - 1))
}
