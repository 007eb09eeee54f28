/// Plain-text board rendering
pub mod board;
/// Command-line interface and replay orchestration
pub mod cli;
/// Game constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// PNG board export
pub mod image;
/// Replay progress display
pub mod progress;
/// TOML settings loading
pub mod settings;
