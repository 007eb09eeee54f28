//! Error types and context management for game operations

use std::fmt;
use std::path::PathBuf;

use crate::game::GameStatus;
use crate::location::LocationError;

/// Broken precondition detected by the mapper or the state machine
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Violation {
    /// A move was attempted after the session reached a terminal status
    SessionFinished {
        /// Status the session was in when the move arrived
        status: GameStatus,
    },

    /// A move targeted a cell outside the grid
    CellOutOfRange {
        /// Requested column
        x: usize,
        /// Requested row
        y: usize,
        /// Grid dimension N
        grid_size: usize,
    },

    /// Latitude or longitude was NaN or infinite
    NonFiniteCoordinate {
        /// Offending latitude
        latitude: f64,
        /// Offending longitude
        longitude: f64,
    },

    /// A stored snapshot cannot describe a valid session
    InconsistentSnapshot {
        /// What made the snapshot unusable
        reason: &'static str,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SessionFinished { status } => {
                write!(f, "session already finished ({status})")
            }
            Self::CellOutOfRange { x, y, grid_size } => {
                write!(
                    f,
                    "cell ({x}, {y}) is outside the {grid_size}x{grid_size} grid"
                )
            }
            Self::NonFiniteCoordinate {
                latitude,
                longitude,
            } => {
                write!(f, "coordinate ({latitude}, {longitude}) is not finite")
            }
            Self::InconsistentSnapshot { reason } => {
                write!(f, "inconsistent snapshot: {reason}")
            }
        }
    }
}

/// Main error type for all game operations
#[derive(Debug)]
pub enum GameError {
    /// Configuration parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Operation called in a state where it is not allowed
    ///
    /// The session is left untouched when this is returned.
    PreconditionViolation {
        /// Operation that was rejected
        operation: &'static str,
        /// The precondition that did not hold
        violation: Violation,
    },

    /// Location feed reported a failure instead of a sample
    Location(LocationError),

    /// Persistence or sync backend rejected a request
    Backend {
        /// Backend operation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// Settings file is not valid TOML for the settings schema
    ConfigParse {
        /// Path to the settings file
        path: PathBuf,
        /// Underlying TOML error
        source: Box<toml::de::Error>,
    },

    /// JSON encoding or decoding failed
    Serialization {
        /// What was being encoded or decoded
        operation: &'static str,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// Failed to save the board image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::PreconditionViolation {
                operation,
                violation,
            } => {
                write!(f, "Precondition violated in {operation}: {violation}")
            }
            Self::Location(error) => write!(f, "Location unavailable: {error}"),
            Self::Backend { operation, reason } => {
                write!(f, "Backend error during {operation}: {reason}")
            }
            Self::ConfigParse { path, source } => {
                write!(f, "Failed to parse settings '{}': {source}", path.display())
            }
            Self::Serialization { operation, source } => {
                write!(f, "Serialization error during {operation}: {source}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ConfigParse { source, .. } => Some(source),
            Self::Serialization { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::Location(source) => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for game results
pub type Result<T> = std::result::Result<T, GameError>;

impl From<LocationError> for GameError {
    fn from(err: LocationError) -> Self {
        Self::Location(err)
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GameError {
    GameError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a precondition violation error
pub const fn precondition(operation: &'static str, violation: Violation) -> GameError {
    GameError::PreconditionViolation {
        operation,
        violation,
    }
}

/// Create a backend error
pub fn backend_error(operation: &'static str, reason: &impl ToString) -> GameError {
    GameError::Backend {
        operation,
        reason: reason.to_string(),
    }
}

/// Create a file system error bound to a concrete path
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> GameError {
    GameError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
