//! Gesture recognition over single-hand landmark sets.
//!
//! Pure classifiers live in [`classify`]; the stateful debouncers
//! ([`FrameHysteresis`], [`PinchLatch`], [`ThumbTapDetector`],
//! [`FlickDetector`]) each own their state and expose a `reset()` so callers
//! can drop history whenever the tracked hand disappears.

pub mod classify;
mod hysteresis;
mod tap;

pub use classify::{
    is_finger_gun, is_fist, is_open_hand, is_pointer_gesture, is_pointing,
    pinch_distance, thumb_tap_distance,
};
pub use hysteresis::{FrameHysteresis, PinchLatch, Transition};
pub use tap::{FlickDetector, ThumbTapDetector};
