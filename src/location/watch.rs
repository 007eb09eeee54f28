//! Ordered, cancelable delivery of samples from a location source

use std::cell::Cell;
use std::rc::Rc;

use crate::location::sample::{LocationError, LocationOptions, LocationSample};

/// Anything that can produce position fixes
pub trait LocationSource {
    /// Request the next position fix
    ///
    /// Returns `None` once the source has nothing more to deliver.
    fn current_position(
        &mut self,
        options: &LocationOptions,
    ) -> Option<Result<LocationSample, LocationError>>;
}

/// Shared cancel flag for a running watch
#[derive(Debug, Clone, Default)]
pub struct WatchHandle {
    cancelled: Rc<Cell<bool>>,
}

impl WatchHandle {
    /// Stop the watch; samples already delivered are unaffected
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    /// Check if the watch has been cancelled
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

/// Iterator over a source that only yields strictly newer samples
///
/// A sample whose timestamp is not later than the last delivered one is
/// dropped, so a stale fix can never overtake a newer one. Feed errors are
/// passed through untouched and do not advance the ordering.
pub struct LocationWatch<S> {
    source: S,
    options: LocationOptions,
    handle: WatchHandle,
    last_timestamp: Option<u64>,
    dropped: usize,
}

impl<S: LocationSource> LocationWatch<S> {
    /// Start watching a source
    pub fn new(source: S, options: LocationOptions) -> Self {
        Self {
            source,
            options,
            handle: WatchHandle::default(),
            last_timestamp: None,
            dropped: 0,
        }
    }

    /// Handle that cancels this watch
    pub fn handle(&self) -> WatchHandle {
        self.handle.clone()
    }

    /// Number of stale or out-of-order samples discarded so far
    pub const fn dropped(&self) -> usize {
        self.dropped
    }

    /// Options forwarded to the source on every request
    pub const fn options(&self) -> &LocationOptions {
        &self.options
    }
}

impl<S: LocationSource> Iterator for LocationWatch<S> {
    type Item = Result<LocationSample, LocationError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.handle.is_cancelled() {
                return None;
            }

            match self.source.current_position(&self.options)? {
                Ok(sample) => {
                    if self
                        .last_timestamp
                        .is_some_and(|last| sample.timestamp <= last)
                    {
                        self.dropped += 1;
                        continue;
                    }
                    self.last_timestamp = Some(sample.timestamp);
                    return Some(Ok(sample));
                }
                Err(error) => return Some(Err(error)),
            }
        }
    }
}
