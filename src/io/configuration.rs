//! Game constants and runtime configuration defaults

// Board shape used by the deployed game
/// Grid dimension N for the N×N board
pub const DEFAULT_GRID_SIZE: usize = 5;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_SIZE: usize = 1_000;

/// Score awarded for every move onto an empty cell
pub const MOVE_SCORE: u32 = 10;

/// Level recorded in the persisted game row (the game has a single level)
pub const DEFAULT_LEVEL: u32 = 1;

/// Mean Earth radius used by the haversine distance
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

// Default play area: a small square around the deployment site
/// Latitude at the center of the default play area
pub const DEFAULT_CENTER_LATITUDE: f64 = 37.782_182;
/// Longitude at the center of the default play area
pub const DEFAULT_CENTER_LONGITUDE: f64 = -122.391_254;
/// Offset in degrees from the center to each edge of the default bounds
pub const DEFAULT_HALF_SPAN_DEGREES: f64 = 0.0002;

/// Period between location polls
pub const DEFAULT_UPDATE_INTERVAL_MS: u64 = 100;

// Location request options
/// Timeout for a single position request
pub const POLL_TIMEOUT_MS: u64 = 10_000;
/// Timeout between samples of a continuous watch
pub const WATCH_TIMEOUT_MS: u64 = 5_000;
/// Maximum age of a cached position (0 forces a fresh fix)
pub const MAXIMUM_AGE_MS: u64 = 0;

// Classic layout, expressed as [col, row]
/// Trap cells of the classic 5×5 layout
pub const CLASSIC_TRAPS: [[usize; 2]; 7] = [[1, 3], [2, 3], [3, 3], [3, 2], [1, 1], [3, 0], [4, 0]];
/// Flag cell of the classic 5×5 layout
pub const CLASSIC_FLAG: [usize; 2] = [4, 3];

/// Fixed seed for reproducible random layouts
pub const DEFAULT_SEED: u64 = 42;
/// Trap count used by random layouts when none is configured
pub const DEFAULT_RANDOM_TRAPS: usize = 7;

/// User id used when none is supplied
pub const DEFAULT_USER_ID: &str = "local";

// Output settings
/// Side length of one board cell in exported PNGs
pub const PNG_CELL_PIXELS: u32 = 32;
/// Upper limit on the side of an exported PNG; large boards get smaller cells
pub const MAX_PNG_SIDE_PIXELS: u32 = 4_096;
/// Smallest cell side that still leaves room for the grid line
pub const MIN_PNG_CELL_PIXELS: u32 = 2;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
