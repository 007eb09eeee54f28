//! Grid state machine for one game session
//!
//! A session owns the terrain, the player pointer, the score and the status.
//! The only transition is [`GameSession::move_to`]; [`GameSession::reset`]
//! rebuilds everything from the layout generator.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::game::layout::{LayoutGenerator, LayoutStrategy};
use crate::game::snapshot::SessionSnapshot;
use crate::game::terrain::{CellView, Terrain, TerrainKind};
use crate::geo::{GridCell, GridConfig};
use crate::io::configuration::{DEFAULT_LEVEL, MOVE_SCORE};
use crate::io::error::{Result, Violation, precondition};
use crate::location::unix_millis;

/// Lifecycle status of a session
///
/// Once `GameOver` or `Victory` is reached no move is accepted until reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    /// Moves are accepted
    #[default]
    Playing,
    /// The player stepped on a trap
    GameOver,
    /// The player reached the flag
    Victory,
}

impl GameStatus {
    /// Check if the session has ended
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Playing => "playing",
            Self::GameOver => "game over",
            Self::Victory => "victory",
        })
    }
}

/// Why a move ended the way it did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveReason {
    /// Ordinary move onto empty terrain
    Move,
    /// Landed on a trap
    Trap,
    /// Landed on the flag
    Flag,
}

impl MoveReason {
    /// Short machine-readable name
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Move => "move",
            Self::Trap => "trap",
            Self::Flag => "flag",
        }
    }
}

/// Result of an accepted move
///
/// `success` is false whenever the move ended the game, including a win.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// True when play continues
    pub success: bool,
    /// Terrain that decided the outcome
    pub reason: MoveReason,
    /// Cell the player left
    pub from: GridCell,
    /// Cell the player now occupies
    pub to: GridCell,
    /// Score after the move
    pub score: u32,
    /// Status after the move
    pub status: GameStatus,
}

/// One in-memory game from start or reset to the next reset
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GridConfig,
    layout: LayoutGenerator,
    terrain: Terrain,
    player: GridCell,
    score: u32,
    status: GameStatus,
    last_update_ms: u64,
}

impl GameSession {
    /// Start a session with the player on the center cell
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if the layout strategy does not fit
    /// the grid
    pub fn new(config: GridConfig, strategy: LayoutStrategy) -> Result<Self> {
        let mut layout = LayoutGenerator::new(strategy, &config)?;
        let terrain = layout.generate();

        Ok(Self {
            config,
            layout,
            terrain,
            player: config.start_cell(),
            score: 0,
            status: GameStatus::Playing,
            last_update_ms: unix_millis(),
        })
    }

    /// Move the player onto `cell` and apply the terrain's consequences
    ///
    /// # Errors
    ///
    /// Returns a precondition violation, leaving the session unchanged, if:
    /// - `cell` lies outside the grid
    /// - the session has already ended
    pub fn move_to(&mut self, cell: GridCell) -> Result<MoveOutcome> {
        let grid_size = self.config.size();
        let Some(kind) = self.terrain.get(cell) else {
            return Err(precondition(
                "move_to",
                Violation::CellOutOfRange {
                    x: cell.x,
                    y: cell.y,
                    grid_size,
                },
            ));
        };

        if self.status.is_terminal() {
            return Err(precondition(
                "move_to",
                Violation::SessionFinished {
                    status: self.status,
                },
            ));
        }

        let from = self.player;
        self.player = cell;
        self.last_update_ms = unix_millis();

        let reason = match kind {
            TerrainKind::Trap => {
                self.status = GameStatus::GameOver;
                MoveReason::Trap
            }
            TerrainKind::Flag => {
                self.status = GameStatus::Victory;
                MoveReason::Flag
            }
            TerrainKind::Empty => {
                self.score = self.score.saturating_add(MOVE_SCORE);
                MoveReason::Move
            }
        };

        Ok(MoveOutcome {
            success: reason == MoveReason::Move,
            reason,
            from,
            to: cell,
            score: self.score,
            status: self.status,
        })
    }

    /// Return to the initial state with freshly generated terrain
    pub fn reset(&mut self) {
        self.terrain = self.layout.generate();
        self.player = self.config.start_cell();
        self.score = 0;
        self.status = GameStatus::Playing;
        self.last_update_ms = unix_millis();
    }

    /// Current status
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Current score
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Level of the session (the game has a single level)
    pub const fn level(&self) -> u32 {
        DEFAULT_LEVEL
    }

    /// Cell the player occupies
    pub const fn player(&self) -> GridCell {
        self.player
    }

    /// Grid configuration the session was built with
    pub const fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Grid dimension N
    pub const fn grid_size(&self) -> usize {
        self.config.size()
    }

    /// Time of the last move or reset in unix milliseconds
    pub const fn last_update_ms(&self) -> u64 {
        self.last_update_ms
    }

    /// Terrain layer of the board
    pub const fn terrain(&self) -> &Terrain {
        &self.terrain
    }

    /// Terrain at a cell, `None` when off the board
    pub fn terrain_at(&self, cell: GridCell) -> Option<TerrainKind> {
        self.terrain.get(cell)
    }

    /// What a renderer should draw for a cell
    pub fn cell_view(&self, cell: GridCell) -> Option<CellView> {
        let kind = self.terrain.get(cell)?;
        Some(if cell == self.player {
            CellView::Player
        } else {
            CellView::from(kind)
        })
    }

    /// Rendered view of every cell, row 0 first
    pub fn view_rows(&self) -> Vec<Vec<CellView>> {
        let size = self.grid_size();
        (0..size)
            .map(|y| {
                (0..size)
                    .map(|x| {
                        self.cell_view(GridCell::new(x, y))
                            .unwrap_or(CellView::Empty)
                    })
                    .collect()
            })
            .collect()
    }

    /// Capture the session for persistence
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            grid_size: self.grid_size(),
            terrain: self.terrain.to_rows(),
            player: self.player,
            score: self.score,
            status: self.status,
            level: self.level(),
            last_update_ms: self.last_update_ms,
        }
    }

    /// Rebuild a session from a snapshot
    ///
    /// Later resets use `strategy` to generate terrain.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The layout strategy does not fit the grid
    /// - The snapshot's grid differs from `config` or its terrain is not square
    /// - The player is off the board
    /// - The board does not hold exactly one flag
    /// - The status disagrees with the terrain under the player (playing on
    ///   empty ground, game over on a trap, victory on the flag)
    /// - The score is not a multiple of the per-move score
    pub fn restore(
        snapshot: &SessionSnapshot,
        config: GridConfig,
        strategy: LayoutStrategy,
    ) -> Result<Self> {
        let inconsistent =
            |reason| precondition("restore", Violation::InconsistentSnapshot { reason });

        let layout = LayoutGenerator::new(strategy, &config)?;

        if snapshot.grid_size != config.size() {
            return Err(inconsistent("grid size differs from configuration"));
        }

        let terrain = Terrain::from_rows(&snapshot.terrain)
            .filter(|terrain| terrain.size() == config.size())
            .ok_or_else(|| inconsistent("terrain is not a grid of the configured size"))?;

        let Some(under_player) = terrain.get(snapshot.player) else {
            return Err(inconsistent("player is off the board"));
        };

        if terrain.count(TerrainKind::Flag) != 1 {
            return Err(inconsistent("board must hold exactly one flag"));
        }

        let expected_under_player = match snapshot.status {
            GameStatus::Playing => TerrainKind::Empty,
            GameStatus::GameOver => TerrainKind::Trap,
            GameStatus::Victory => TerrainKind::Flag,
        };
        if under_player != expected_under_player {
            return Err(inconsistent("status does not match the terrain under the player"));
        }

        if snapshot.score % MOVE_SCORE != 0 {
            return Err(inconsistent("score is not a whole number of moves"));
        }

        Ok(Self {
            config,
            layout,
            terrain,
            player: snapshot.player,
            score: snapshot.score,
            status: snapshot.status,
            last_update_ms: snapshot.last_update_ms,
        })
    }
}
