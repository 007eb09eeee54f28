//! Glue between the location feed, the mapper, the session and the backend
//!
//! Each sample is mapped to a cell and turned into a move when it lands on a
//! different cell than the player's. Backend writes are best effort: their
//! failures are kept as warnings and never interrupt play.

use crate::game::layout::LayoutStrategy;
use crate::game::session::{GameSession, GameStatus, MoveOutcome};
use crate::geo::{GridCell, GridConfig, LatLon, distance_meters, map_to_grid};
use crate::io::error::{GameError, Result};
use crate::location::LocationSample;
use crate::sync::{StateStore, UserGameRecord, UserLocationRecord};

/// What a single sample did to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackStep {
    /// The player moved and the move was applied
    Moved(MoveOutcome),
    /// The sample mapped onto the player's current cell
    Stationary(GridCell),
    /// The session had already ended, the sample was not applied
    Finished(GameStatus),
}

/// Drives one session from location samples
pub struct Tracker {
    session: GameSession,
    user_id: String,
    store: Option<Box<dyn StateStore>>,
    last_position: Option<LatLon>,
    distance_meters: f64,
    samples_applied: usize,
    warnings: Vec<GameError>,
}

impl Tracker {
    /// Track a session for a user without a backend
    pub fn new(session: GameSession, user_id: impl Into<String>) -> Self {
        Self {
            session,
            user_id: user_id.into(),
            store: None,
            last_position: None,
            distance_meters: 0.0,
            samples_applied: 0,
            warnings: Vec::new(),
        }
    }

    /// Mirror location and game rows into `store`
    #[must_use]
    pub fn with_store(mut self, store: Box<dyn StateStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Continue the user's saved game from `store`, or start a new one
    ///
    /// Returns the tracker and whether a saved game was found.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The layout strategy does not fit the grid
    /// - The store cannot be read
    /// - The saved game cannot be decoded or does not fit the grid
    pub fn resume(
        config: GridConfig,
        strategy: LayoutStrategy,
        user_id: impl Into<String>,
        store: Box<dyn StateStore>,
    ) -> Result<(Self, bool)> {
        let user_id = user_id.into();
        let (session, resumed) = match store.game(&user_id)? {
            Some(record) => (
                GameSession::restore(&record.snapshot()?, config, strategy)?,
                true,
            ),
            None => (GameSession::new(config, strategy)?, false),
        };

        Ok((Self::new(session, user_id).with_store(store), resumed))
    }

    /// Apply one location sample
    ///
    /// # Errors
    ///
    /// Returns a precondition violation if the sample's coordinates are not
    /// finite; the session is left untouched
    pub fn apply(&mut self, sample: &LocationSample) -> Result<TrackStep> {
        let position = sample.position()?;
        let cell = map_to_grid(position, self.session.config());

        if let Some(previous) = self.last_position {
            self.distance_meters += distance_meters(previous, position);
        }
        self.last_position = Some(position);
        self.samples_applied += 1;

        if let Some(store) = self.store.as_mut() {
            let record = UserLocationRecord::new(&self.user_id, sample, cell);
            if let Err(error) = store.upsert_location(record) {
                self.warnings.push(error);
            }
        }

        let status = self.session.status();
        if status.is_terminal() {
            return Ok(TrackStep::Finished(status));
        }

        if cell == self.session.player() {
            return Ok(TrackStep::Stationary(cell));
        }

        let outcome = self.session.move_to(cell)?;
        self.save_game();
        Ok(TrackStep::Moved(outcome))
    }

    /// Reset the session and mirror the fresh game
    pub fn reset(&mut self) {
        self.session.reset();
        self.save_game();
    }

    /// Write the current game row, recording any failure as a warning
    pub fn save_game(&mut self) {
        let Some(store) = self.store.as_mut() else {
            return;
        };

        let written = UserGameRecord::from_session(&self.user_id, &self.session)
            .and_then(|record| store.upsert_game(record));
        if let Err(error) = written {
            self.warnings.push(error);
        }
    }

    /// Backend failures collected since the last call
    pub fn take_warnings(&mut self) -> Vec<GameError> {
        std::mem::take(&mut self.warnings)
    }

    /// Session being driven
    pub const fn session(&self) -> &GameSession {
        &self.session
    }

    /// Owner of the mirrored rows
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Attached backend, if any
    pub fn store(&self) -> Option<&dyn StateStore> {
        self.store.as_deref()
    }

    /// Attached backend for subscriptions, if any
    pub fn store_mut(&mut self) -> Option<&mut (dyn StateStore + 'static)> {
        self.store.as_deref_mut()
    }

    /// Last applied position
    pub const fn last_position(&self) -> Option<LatLon> {
        self.last_position
    }

    /// Path length walked across applied samples, in meters
    pub const fn distance_meters(&self) -> f64 {
        self.distance_meters
    }

    /// Number of samples applied
    pub const fn samples_applied(&self) -> usize {
        self.samples_applied
    }
}
