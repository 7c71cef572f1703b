//! Discrete "click" triggers for selection mode.

use super::classify::{is_pointing, thumb_tap_distance};
use crate::hand::{Hand, INDEX_TIP};
use crate::options::PointerStyle;

/// Fires once when the thumb tip closes onto the index knuckle.
///
/// After firing, the distance must open past the larger exit threshold
/// before another tap can fire, so a thumb resting near the boundary does
/// not repeat.
#[derive(Debug, Clone)]
pub struct ThumbTapDetector {
    enter: f32,
    exit: f32,
    was_tapping: bool,
}

impl ThumbTapDetector {
    /// Create a detector with the given enter (close) and exit (open)
    /// distances.
    #[must_use]
    pub fn new(enter: f32, exit: f32) -> Self {
        Self {
            enter: enter.min(exit),
            exit: exit.max(enter),
            was_tapping: false,
        }
    }

    /// Feed one frame. Returns `true` only on the frame the tap closes.
    pub fn check(&mut self, hand: &Hand) -> bool {
        let Some(dist) = thumb_tap_distance(hand) else {
            return false;
        };
        if !self.was_tapping && dist < self.enter {
            self.was_tapping = true;
            return true;
        }
        if self.was_tapping && dist > self.exit {
            self.was_tapping = false;
        }
        false
    }

    /// Whether the thumb is currently held closed.
    #[must_use]
    pub fn is_tapping(&self) -> bool {
        self.was_tapping
    }

    /// Forget any held tap.
    pub fn reset(&mut self) {
        self.was_tapping = false;
    }
}

/// Fires when the index tip flicks downward in the image while pointing.
///
/// Tracking restarts whenever the pointer pose is lost or no hand is
/// present, so no velocity is ever measured across a gap.
#[derive(Debug, Clone)]
pub struct FlickDetector {
    velocity_threshold: f32,
    cooldown_ms: f64,
    pointer_style: PointerStyle,
    prev_tip_y: Option<f32>,
    last_fired_ms: Option<f64>,
}

impl FlickDetector {
    /// Create a detector. `velocity_threshold` is in normalized image units
    /// per frame.
    #[must_use]
    pub fn new(
        velocity_threshold: f32,
        cooldown_ms: f64,
        pointer_style: PointerStyle,
    ) -> Self {
        Self {
            velocity_threshold,
            cooldown_ms,
            pointer_style,
            prev_tip_y: None,
            last_fired_ms: None,
        }
    }

    /// Feed one frame taken at `now_ms`. Returns `true` on the frame a flick
    /// is detected.
    pub fn check(&mut self, hand: Option<&Hand>, now_ms: f64) -> bool {
        let tip_y = hand
            .filter(|h| is_pointing(h, self.pointer_style))
            .and_then(Hand::landmarks)
            .map(|points| points[INDEX_TIP].y);

        let Some(tip_y) = tip_y else {
            self.lose_track();
            return false;
        };

        let previous = self.prev_tip_y.replace(tip_y);
        let Some(previous) = previous else {
            return false;
        };

        let cooled_down = self
            .last_fired_ms
            .is_none_or(|last| now_ms - last >= self.cooldown_ms);
        if tip_y - previous > self.velocity_threshold && cooled_down {
            self.last_fired_ms = Some(now_ms);
            return true;
        }
        false
    }

    /// Forget the tracked fingertip but keep the cooldown.
    pub fn lose_track(&mut self) {
        self.prev_tip_y = None;
    }

    /// Forget the tracked fingertip and the cooldown.
    pub fn reset(&mut self) {
        self.prev_tip_y = None;
        self.last_fired_ms = None;
    }
}
