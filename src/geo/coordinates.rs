//! Validated geographic coordinates and the rectangular play area

use crate::io::error::{Result, Violation, invalid_parameter, precondition};

/// A finite latitude/longitude pair in degrees
///
/// Construction is the only place non-finite input is rejected, so every
/// function taking a `LatLon` can treat its values as plain numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon {
    latitude: f64,
    longitude: f64,
}

impl LatLon {
    /// Build a coordinate pair
    ///
    /// # Errors
    ///
    /// Returns a precondition violation if either value is NaN or infinite
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if latitude.is_finite() && longitude.is_finite() {
            Ok(Self {
                latitude,
                longitude,
            })
        } else {
            Err(precondition(
                "LatLon::new",
                Violation::NonFiniteCoordinate {
                    latitude,
                    longitude,
                },
            ))
        }
    }

    /// Latitude in degrees
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Real-world rectangle spanned by the grid
///
/// Invariant: all edges finite, `north > south` and `east > west`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    north: f64,
    south: f64,
    east: f64,
    west: f64,
}

impl Bounds {
    /// Build bounds from the four edges
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if an edge is not finite or the
    /// rectangle is empty or inverted
    pub fn new(north: f64, south: f64, east: f64, west: f64) -> Result<Self> {
        for (parameter, value) in [
            ("bounds.north", north),
            ("bounds.south", south),
            ("bounds.east", east),
            ("bounds.west", west),
        ] {
            if !value.is_finite() {
                return Err(invalid_parameter(parameter, &value, &"must be finite"));
            }
        }

        if north <= south {
            return Err(invalid_parameter(
                "bounds.north",
                &north,
                &format!("must be greater than south ({south})"),
            ));
        }

        if east <= west {
            return Err(invalid_parameter(
                "bounds.east",
                &east,
                &format!("must be greater than west ({west})"),
            ));
        }

        Ok(Self {
            north,
            south,
            east,
            west,
        })
    }

    /// Square bounds extending `half_span` degrees from a center point
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if `half_span` is not positive
    pub fn centered(center: LatLon, half_span: f64) -> Result<Self> {
        if half_span.is_nan() || half_span <= 0.0 {
            return Err(invalid_parameter(
                "half_span",
                &half_span,
                &"must be positive",
            ));
        }

        Self::new(
            center.latitude + half_span,
            center.latitude - half_span,
            center.longitude + half_span,
            center.longitude - half_span,
        )
    }

    /// Northern edge (maximum latitude)
    pub const fn north(&self) -> f64 {
        self.north
    }

    /// Southern edge (minimum latitude)
    pub const fn south(&self) -> f64 {
        self.south
    }

    /// Eastern edge (maximum longitude)
    pub const fn east(&self) -> f64 {
        self.east
    }

    /// Western edge (minimum longitude)
    pub const fn west(&self) -> f64 {
        self.west
    }

    /// Check if a point lies inside the rectangle, edges included
    pub fn contains(&self, point: LatLon) -> bool {
        (self.south..=self.north).contains(&point.latitude)
            && (self.west..=self.east).contains(&point.longitude)
    }

    /// Point at the middle of the rectangle
    pub fn center(&self) -> LatLon {
        LatLon {
            latitude: f64::midpoint(self.south, self.north),
            longitude: f64::midpoint(self.west, self.east),
        }
    }
}
