//! Recorded location tracks replayed as a location source
//!
//! A track is a JSON array. Each entry is either a sample
//! (`{"latitude": .., "longitude": .., "accuracy": .., "timestamp": ..}`) or a
//! feed failure (`{"error": "timeout"}`).

use std::collections::VecDeque;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::io::error::{GameError, Result, file_system_error};
use crate::location::sample::{LocationError, LocationOptions, LocationSample};
use crate::location::watch::LocationSource;

/// One recorded feed event
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TrackEntry {
    /// A successful fix
    Fix(LocationSample),
    /// The feed reported an error at this point
    Failure {
        /// The reported error
        error: LocationError,
    },
}

/// Location source replaying a recorded track in order
#[derive(Debug, Clone, Default)]
pub struct TrackSource {
    entries: VecDeque<TrackEntry>,
    total: usize,
}

impl TrackSource {
    /// Replay the given entries
    pub fn from_entries(entries: Vec<TrackEntry>) -> Self {
        let total = entries.len();
        Self {
            entries: entries.into(),
            total,
        }
    }

    /// Parse a track from JSON text
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the text is not a JSON array of
    /// samples and failures
    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: Vec<TrackEntry> =
            serde_json::from_str(json).map_err(|e| GameError::Serialization {
                operation: "parse track",
                source: e,
            })?;
        Ok(Self::from_entries(entries))
    }

    /// Load a track file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid track
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| file_system_error(path, "read track", e))?;
        Self::from_json_str(&json)
    }

    /// Number of entries in the recorded track
    pub const fn len(&self) -> usize {
        self.total
    }

    /// Check if the track has no entries
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Entries not yet replayed
    pub fn remaining(&self) -> usize {
        self.entries.len()
    }
}

impl LocationSource for TrackSource {
    fn current_position(
        &mut self,
        _options: &LocationOptions,
    ) -> Option<std::result::Result<LocationSample, LocationError>> {
        self.entries.pop_front().map(|entry| match entry {
            TrackEntry::Fix(sample) => Ok(sample),
            TrackEntry::Failure { error } => Err(error),
        })
    }
}
