//! Game state: terrain, layouts, the session state machine and its driver

/// Terrain layout generation
pub mod layout;
/// Session state machine
pub mod session;
/// Persistable session capture
pub mod snapshot;
/// Terrain layer and rendered cell kinds
pub mod terrain;
/// Sample-driven session driver
pub mod tracker;

pub use layout::{LayoutGenerator, LayoutStrategy};
pub use session::{GameSession, GameStatus, MoveOutcome, MoveReason};
pub use snapshot::SessionSnapshot;
pub use terrain::{CellView, Terrain, TerrainKind};
pub use tracker::{TrackStep, Tracker};
