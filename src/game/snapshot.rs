//! Serializable capture of a session for the single save slot

use serde::{Deserialize, Serialize};

use crate::game::session::GameStatus;
use crate::game::terrain::TerrainKind;
use crate::geo::GridCell;
use crate::io::error::{GameError, Result};

/// Everything needed to rebuild a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Grid dimension N
    pub grid_size: usize,
    /// Terrain rows, row 0 first
    pub terrain: Vec<Vec<TerrainKind>>,
    /// Player cell
    pub player: GridCell,
    /// Score at capture time
    pub score: u32,
    /// Status at capture time
    pub status: GameStatus,
    /// Level at capture time
    pub level: u32,
    /// Last move or reset in unix milliseconds
    pub last_update_ms: u64,
}

impl SessionSnapshot {
    /// Encode as a JSON value for a backend row
    ///
    /// # Errors
    ///
    /// Returns a serialization error if encoding fails
    pub fn to_json(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(|e| GameError::Serialization {
            operation: "encode snapshot",
            source: e,
        })
    }

    /// Decode from a backend row's JSON value
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the value does not have the snapshot
    /// shape
    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        Self::deserialize(value).map_err(|e| GameError::Serialization {
            operation: "decode snapshot",
            source: e,
        })
    }
}
