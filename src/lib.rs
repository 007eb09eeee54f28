//! Location-based grid game mapping real-world GPS coordinates onto a trap-and-flag board
//!
//! A bounded rectangle of the world is split into an N×N grid. Location fixes
//! are mapped to cells, and each move onto a cell applies its terrain: empty
//! cells score, traps end the game, the flag wins it.

#![forbid(unsafe_code)]

/// Session state machine, terrain layouts and the sample-driven tracker
pub mod game;
/// Coordinate validation, grid mapping and distance
pub mod geo;
/// Input/output operations and error handling
pub mod io;
/// Location feed types, ordered watches and recorded tracks
pub mod location;
/// Optional mirroring of state to a persistence backend
pub mod sync;

pub use io::error::{GameError, Result};
