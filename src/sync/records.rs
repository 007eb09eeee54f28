//! Row types mirrored to the backend, one row per user and table

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::game::{GameSession, SessionSnapshot};
use crate::geo::GridCell;
use crate::io::error::Result;
use crate::location::{LocationSample, unix_millis};

/// Backend table a row lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Table {
    /// Last known position per user
    UserLocations,
    /// Saved game per user
    UserGames,
}

impl Table {
    /// Table name as stored by the backend
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UserLocations => "user_locations",
            Self::UserGames => "user_games",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether an upsert created or replaced the row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    /// No row existed for the user
    Insert,
    /// The user's row was replaced
    Update,
}

/// Notification delivered to subscribers after a write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    /// Table that changed
    pub table: Table,
    /// Kind of change
    pub kind: ChangeKind,
    /// Owner of the changed row
    pub user_id: String,
}

/// A user's last mapped position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserLocationRecord {
    /// Row key
    pub user_id: String,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    /// Mapped column
    pub grid_x: usize,
    /// Mapped row
    pub grid_y: usize,
    /// Write time in unix milliseconds
    pub updated_at: u64,
}

impl UserLocationRecord {
    /// Row for a sample and the cell it mapped to, stamped now
    pub fn new(user_id: &str, sample: &LocationSample, cell: GridCell) -> Self {
        Self {
            user_id: user_id.to_string(),
            latitude: sample.latitude,
            longitude: sample.longitude,
            grid_x: cell.x,
            grid_y: cell.y,
            updated_at: unix_millis(),
        }
    }

    /// Mapped cell of this row
    pub const fn cell(&self) -> GridCell {
        GridCell::new(self.grid_x, self.grid_y)
    }
}

/// A user's saved game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserGameRecord {
    /// Row key
    pub user_id: String,
    /// Encoded [`SessionSnapshot`]
    pub game_state: serde_json::Value,
    /// Score at save time
    pub score: u32,
    /// Level at save time
    pub level: u32,
    /// Write time in unix milliseconds
    pub updated_at: u64,
}

impl UserGameRecord {
    /// Row capturing a session, stamped now
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the snapshot cannot be encoded
    pub fn from_session(user_id: &str, session: &GameSession) -> Result<Self> {
        Ok(Self {
            user_id: user_id.to_string(),
            game_state: session.snapshot().to_json()?,
            score: session.score(),
            level: session.level(),
            updated_at: unix_millis(),
        })
    }

    /// Decode the stored snapshot
    ///
    /// # Errors
    ///
    /// Returns a serialization error if `game_state` is not a snapshot
    pub fn snapshot(&self) -> Result<SessionSnapshot> {
        SessionSnapshot::from_json(&self.game_state)
    }
}
