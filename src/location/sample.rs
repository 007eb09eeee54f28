//! Location samples, request options and feed failures

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::geo::LatLon;
use crate::io::configuration::{MAXIMUM_AGE_MS, POLL_TIMEOUT_MS, WATCH_TIMEOUT_MS};
use crate::io::error::Result;

/// One position fix delivered by a location feed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationSample {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    /// Reported accuracy radius in meters
    #[serde(default)]
    pub accuracy: f64,
    /// Fix time in unix milliseconds
    pub timestamp: u64,
}

impl LocationSample {
    /// Validated coordinate of this fix
    ///
    /// # Errors
    ///
    /// Returns a precondition violation if the feed produced NaN or infinite
    /// coordinates
    pub fn position(&self) -> Result<LatLon> {
        LatLon::new(self.latitude, self.longitude)
    }
}

/// Options passed with every position request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationOptions {
    /// Ask the sensor for its most precise mode
    pub enable_high_accuracy: bool,
    /// Give up on a fix after this many milliseconds
    pub timeout_ms: u64,
    /// Accept a cached fix no older than this (0 = always fresh)
    pub maximum_age_ms: u64,
}

impl LocationOptions {
    /// Options for a single position request
    pub const fn poll() -> Self {
        Self {
            enable_high_accuracy: true,
            timeout_ms: POLL_TIMEOUT_MS,
            maximum_age_ms: MAXIMUM_AGE_MS,
        }
    }

    /// Options for a continuous watch
    pub const fn watch() -> Self {
        Self {
            enable_high_accuracy: true,
            timeout_ms: WATCH_TIMEOUT_MS,
            maximum_age_ms: MAXIMUM_AGE_MS,
        }
    }
}

impl Default for LocationOptions {
    fn default() -> Self {
        Self::poll()
    }
}

/// Failure reported by a location feed in place of a sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationError {
    /// The device has no location sensor
    Unsupported,
    /// The user refused location access
    PermissionDenied,
    /// The sensor could not determine a position
    PositionUnavailable,
    /// No fix arrived within the requested timeout
    Timeout,
}

impl fmt::Display for LocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::Unsupported => "geolocation is not supported",
            Self::PermissionDenied => "permission denied",
            Self::PositionUnavailable => "position unavailable",
            Self::Timeout => "timed out waiting for a fix",
        };
        f.write_str(message)
    }
}

impl std::error::Error for LocationError {}

/// Current wall-clock time in unix milliseconds
pub fn unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| {
            u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
        })
}
