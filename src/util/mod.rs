//! Shared utilities.

/// Frame pacing and capture-clock FPS.
pub mod frame_timing;
