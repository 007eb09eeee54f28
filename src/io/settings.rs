//! Settings file loading and validation
//!
//! Settings are TOML. Every key is optional and falls back to the deployed
//! defaults; camelCase spellings (`gridSize`, `updateInterval`) are accepted
//! as aliases.
//!
//! ```toml
//! grid_size = 5
//! update_interval = 100
//!
//! [bounds]
//! north = 37.782382
//! south = 37.781982
//! east = -122.391054
//! west = -122.391454
//!
//! [layout]
//! kind = "random"
//! traps = 7
//! seed = 42
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::game::LayoutStrategy;
use crate::geo::{Bounds, GridConfig};
use crate::io::configuration::{
    DEFAULT_CENTER_LATITUDE, DEFAULT_CENTER_LONGITUDE, DEFAULT_GRID_SIZE,
    DEFAULT_HALF_SPAN_DEGREES, DEFAULT_RANDOM_TRAPS, DEFAULT_SEED, DEFAULT_UPDATE_INTERVAL_MS,
};
use crate::io::error::{GameError, Result, file_system_error, invalid_parameter};

/// Top-level settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Grid dimension N
    #[serde(alias = "gridSize")]
    pub grid_size: usize,
    /// Real-world rectangle covered by the grid
    pub bounds: BoundsSettings,
    /// Poll period in milliseconds
    #[serde(alias = "updateInterval")]
    pub update_interval: u64,
    /// Terrain layout
    pub layout: LayoutSettings,
}

/// Raw bounds edges in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundsSettings {
    /// Maximum latitude
    pub north: f64,
    /// Minimum latitude
    pub south: f64,
    /// Maximum longitude
    pub east: f64,
    /// Minimum longitude
    pub west: f64,
}

/// Layout selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LayoutSettings {
    /// The hand-placed 5×5 board
    #[default]
    Classic,
    /// Seeded random traps
    Random {
        /// Number of traps
        #[serde(default = "default_random_traps")]
        traps: usize,
        /// Generator seed
        #[serde(default = "default_seed")]
        seed: u64,
    },
}

const fn default_random_traps() -> usize {
    DEFAULT_RANDOM_TRAPS
}

const fn default_seed() -> u64 {
    DEFAULT_SEED
}

impl Default for BoundsSettings {
    fn default() -> Self {
        Self {
            north: DEFAULT_CENTER_LATITUDE + DEFAULT_HALF_SPAN_DEGREES,
            south: DEFAULT_CENTER_LATITUDE - DEFAULT_HALF_SPAN_DEGREES,
            east: DEFAULT_CENTER_LONGITUDE + DEFAULT_HALF_SPAN_DEGREES,
            west: DEFAULT_CENTER_LONGITUDE - DEFAULT_HALF_SPAN_DEGREES,
        }
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            bounds: BoundsSettings::default(),
            update_interval: DEFAULT_UPDATE_INTERVAL_MS,
            layout: LayoutSettings::default(),
        }
    }
}

impl GameSettings {
    /// Parse settings from TOML text
    ///
    /// # Errors
    ///
    /// Returns a config parse error if the text is not valid settings TOML
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Self::parse(text, PathBuf::from("<inline>"))
    }

    /// Load settings from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| file_system_error(path, "read settings", e))?;
        Self::parse(&text, path.to_path_buf())
    }

    fn parse(text: &str, path: PathBuf) -> Result<Self> {
        toml::from_str(text).map_err(|source| GameError::ConfigParse {
            path,
            source: Box::new(source),
        })
    }

    /// Validated grid configuration
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if the bounds are inverted or not
    /// finite, or the grid size is out of range
    pub fn grid_config(&self) -> Result<GridConfig> {
        let BoundsSettings {
            north,
            south,
            east,
            west,
        } = self.bounds;
        GridConfig::new(self.grid_size, Bounds::new(north, south, east, west)?)
    }

    /// Layout strategy, with an optional seed override for random layouts
    pub const fn layout_strategy(&self, seed_override: Option<u64>) -> LayoutStrategy {
        match self.layout {
            LayoutSettings::Classic => LayoutStrategy::Classic,
            LayoutSettings::Random { traps, seed } => LayoutStrategy::Random {
                traps,
                seed: match seed_override {
                    Some(value) => value,
                    None => seed,
                },
            },
        }
    }

    /// Poll period between location requests
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if the interval is zero
    pub fn update_interval(&self) -> Result<Duration> {
        if self.update_interval == 0 {
            return Err(invalid_parameter(
                "update_interval",
                &self.update_interval,
                &"must be at least 1 millisecond",
            ));
        }
        Ok(Duration::from_millis(self.update_interval))
    }
}
