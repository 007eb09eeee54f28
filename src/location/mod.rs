//! Location feed collaborator
//!
//! Samples arrive from a [`LocationSource`], are ordered by
//! [`LocationWatch`] and handed to the tracker. Failures are plain values so a
//! caller can retry or keep the last known position.

/// Samples, request options and feed errors
pub mod sample;
/// Recorded tracks replayed as a source
pub mod track;
/// Source trait and ordered watch
pub mod watch;

pub use sample::{LocationError, LocationOptions, LocationSample, unix_millis};
pub use track::{TrackEntry, TrackSource};
pub use watch::{LocationSource, LocationWatch, WatchHandle};
