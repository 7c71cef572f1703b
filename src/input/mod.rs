//! Landmark input: the detector boundary and recorded-session playback.

/// JSON-lines landmark recordings.
pub mod replay;

pub use replay::{RecordedFrame, ReplaySource};

use crate::error::HandOrbitError;
use crate::hand::Hand;

/// A hand-landmark detector.
///
/// Called once per frame; an empty list means no hand is visible and is the
/// common case, not an error. Asynchronous detectors must finish the frame
/// before the engine asks for it.
pub trait LandmarkSource {
    /// Hands detected in the frame captured at `timestamp_ms`.
    fn detect(
        &mut self,
        timestamp_ms: f64,
    ) -> Result<Vec<Hand>, HandOrbitError>;
}

impl<F> LandmarkSource for F
where
    F: FnMut(f64) -> Result<Vec<Hand>, HandOrbitError>,
{
    fn detect(
        &mut self,
        timestamp_ms: f64,
    ) -> Result<Vec<Hand>, HandOrbitError> {
        self(timestamp_ms)
    }
}
