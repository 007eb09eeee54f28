//! Command-line interface replaying a recorded location track through a game

use std::fmt;
use std::io::Write;
use std::path::PathBuf;

use clap::Parser;

use crate::game::{GameSession, GameStatus, TrackStep, Tracker};
use crate::io::board::render_board;
use crate::io::configuration::DEFAULT_USER_ID;
use crate::io::error::{Result, file_system_error};
use crate::io::image::export_board_png;
use crate::io::progress::TrackProgress;
use crate::io::settings::GameSettings;
use crate::location::{LocationOptions, LocationWatch, TrackSource};
use crate::sync::FileStore;

#[derive(Parser)]
#[command(name = "gridhunt")]
#[command(
    author,
    version,
    about = "Play the location grid game from a recorded GPS track"
)]
/// Command-line arguments for the track replay tool
// Replay needs several independent switches
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// JSON track of location samples to replay
    #[arg(value_name = "TRACK")]
    pub track: PathBuf,

    /// TOML settings file (grid size, bounds, layout, update interval)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// User id owning the mirrored rows
    #[arg(short, long, default_value = DEFAULT_USER_ID)]
    pub user: String,

    /// Directory of the JSON store mirroring location and game rows
    #[arg(short = 'S', long)]
    pub store: Option<PathBuf>,

    /// Continue the user's saved game from the store
    #[arg(long, requires = "store")]
    pub resume: bool,

    /// Start a fresh game, overwriting any saved or resumed one
    #[arg(long)]
    pub restart: bool,

    /// Write the final board to this PNG file
    #[arg(short = 'o', long)]
    pub snapshot: Option<PathBuf>,

    /// Seed overriding the random layout seed from the settings
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Wait the configured update interval between samples
    #[arg(short, long)]
    pub realtime: bool,

    /// Show traps on the printed board even while playing
    #[arg(long)]
    pub reveal: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Counters gathered during one replay
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    /// Final session status
    pub status: GameStatus,
    /// Final score
    pub score: u32,
    /// Moves applied to the session
    pub moves: usize,
    /// Samples mapped onto the board
    pub samples: usize,
    /// Stale samples discarded by the watch
    pub dropped: usize,
    /// Feed failures reported by the track
    pub location_errors: usize,
    /// Path length walked, in meters
    pub distance_meters: f64,
    /// Whether a saved game was continued
    pub resumed: bool,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "status:   {}", self.status)?;
        writeln!(f, "score:    {}", self.score)?;
        writeln!(f, "moves:    {}", self.moves)?;
        writeln!(
            f,
            "samples:  {} applied, {} stale, {} failed",
            self.samples, self.dropped, self.location_errors
        )?;
        write!(f, "distance: {:.1} m", self.distance_meters)?;
        if self.resumed {
            write!(f, "\nresumed saved game")?;
        }
        Ok(())
    }
}

/// Orchestrates one replay: settings, session, feed, mirroring and output
pub struct TrackRunner {
    cli: Cli,
}

impl TrackRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Replay the track and print the final board and summary
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The settings file cannot be loaded or is invalid
    /// - The track file cannot be read or parsed
    /// - The store cannot be opened or the saved game cannot be restored
    /// - The snapshot image or the report cannot be written
    pub fn run(&self) -> Result<RunSummary> {
        let settings = match &self.cli.config {
            Some(path) => GameSettings::load(path)?,
            None => GameSettings::default(),
        };
        let config = settings.grid_config()?;
        let strategy = settings.layout_strategy(self.cli.seed);
        let interval = settings.update_interval()?;

        let (mut tracker, resumed) = match &self.cli.store {
            Some(root) => {
                let store = Box::new(FileStore::open(root)?);
                if self.cli.resume {
                    Tracker::resume(config, strategy, self.cli.user.as_str(), store)?
                } else {
                    let session = GameSession::new(config, strategy)?;
                    (
                        Tracker::new(session, self.cli.user.as_str()).with_store(store),
                        false,
                    )
                }
            }
            None => (
                Tracker::new(
                    GameSession::new(config, strategy)?,
                    self.cli.user.as_str(),
                ),
                false,
            ),
        };

        if self.cli.resume && !resumed {
            self.warn(&format!(
                "no saved game for '{}', starting a new one",
                self.cli.user
            ));
        }

        if self.cli.restart {
            tracker.reset();
            for warning in tracker.take_warnings() {
                self.warn(&warning);
            }
        }

        let source = TrackSource::from_path(&self.cli.track)?;
        let progress = TrackProgress::new(source.len(), self.cli.should_show_progress());
        let mut watch = LocationWatch::new(source, LocationOptions::watch());
        let handle = watch.handle();

        let mut moves = 0;
        let mut location_errors = 0;

        for fix in watch.by_ref() {
            let step = match fix {
                Ok(sample) => match tracker.apply(&sample) {
                    Ok(step) => Some(step),
                    Err(error) => {
                        self.warn(&error);
                        None
                    }
                },
                Err(error) => {
                    // Keep the last known position and wait for the next fix
                    location_errors += 1;
                    self.warn(&error);
                    None
                }
            };

            for warning in tracker.take_warnings() {
                self.warn(&warning);
            }

            progress.record(step.as_ref());
            if let Some(TrackStep::Moved(outcome)) = step {
                moves += 1;
                if outcome.status.is_terminal() {
                    handle.cancel();
                }
            }

            if self.cli.realtime && !handle.is_cancelled() {
                std::thread::sleep(interval);
            }
        }

        let session = tracker.session();
        progress.finish(session.status());

        if let Some(path) = &self.cli.snapshot {
            export_board_png(session, self.reveal_for(session.status()), path)?;
        }

        let summary = RunSummary {
            status: session.status(),
            score: session.score(),
            moves,
            samples: tracker.samples_applied(),
            dropped: watch.dropped(),
            location_errors,
            distance_meters: tracker.distance_meters(),
            resumed,
        };

        let board = render_board(session, self.reveal_for(session.status()));
        let mut out = std::io::stdout().lock();
        writeln!(out, "{board}\n\n{summary}")
            .map_err(|e| file_system_error("<stdout>", "write report", e))?;

        Ok(summary)
    }

    // Traps are revealed once the game is over
    fn reveal_for(&self, status: GameStatus) -> bool {
        self.cli.reveal || status.is_terminal()
    }

    // Allow print for user feedback on non-fatal failures
    #[allow(clippy::print_stderr)]
    fn warn(&self, message: &dyn fmt::Display) {
        if !self.cli.quiet {
            eprintln!("warning: {message}");
        }
    }
}
