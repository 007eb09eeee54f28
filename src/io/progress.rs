//! Progress display while a track is replayed

use std::sync::LazyLock;

use indicatif::{ProgressBar, ProgressStyle};

use crate::game::{GameStatus, TrackStep};
use crate::io::configuration::PROGRESS_BAR_WIDTH;

static TRACK_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar over the entries of a track
///
/// Hidden bars accept the same calls, so callers never branch on `--quiet`.
pub struct TrackProgress {
    bar: ProgressBar,
}

impl TrackProgress {
    /// Create a bar for `entries` feed events
    pub fn new(entries: usize, visible: bool) -> Self {
        let bar = if visible {
            let bar = ProgressBar::new(entries as u64);
            bar.set_style(TRACK_STYLE.clone());
            bar
        } else {
            ProgressBar::hidden()
        };

        Self { bar }
    }

    /// Advance past one feed event and show the latest score
    pub fn record(&self, step: Option<&TrackStep>) {
        self.bar.inc(1);
        if let Some(TrackStep::Moved(outcome)) = step {
            self.bar.set_message(format!(
                "score {} ({})",
                outcome.score,
                outcome.reason.as_str()
            ));
        }
    }

    /// Close the bar with the final status
    pub fn finish(&self, status: GameStatus) {
        self.bar.finish_with_message(format!("{status}"));
    }

    /// Events recorded so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }
}
