//! Debouncing state machines for binary gesture signals.
//!
//! [`FrameHysteresis`] requires a signal to hold (or stay absent) for a
//! number of consecutive frames before the latched state flips.
//! [`PinchLatch`] applies asymmetric distance thresholds to a continuous
//! measurement.

/// Result of feeding one frame to a [`FrameHysteresis`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Latched state did not change.
    Unchanged,
    /// Latched state flipped to active on this frame.
    Entered,
    /// Latched state flipped to inactive on this frame.
    Exited,
}

/// Consecutive-frame debouncer with independent enter/exit counts.
///
/// While inactive, `enter_frames` consecutive frames with the signal present
/// activate it; while active, `exit_frames` consecutive frames without the
/// signal deactivate it. Any frame agreeing with the current state resets
/// the counter.
#[derive(Debug, Clone)]
pub struct FrameHysteresis {
    enter_frames: u32,
    exit_frames: u32,
    count: u32,
    active: bool,
}

impl FrameHysteresis {
    /// Create an inactive debouncer. Zero thresholds are raised to one.
    #[must_use]
    pub fn new(enter_frames: u32, exit_frames: u32) -> Self {
        Self {
            enter_frames: enter_frames.max(1),
            exit_frames: exit_frames.max(1),
            count: 0,
            active: false,
        }
    }

    /// Feed one frame's raw signal.
    pub fn update(&mut self, signal: bool) -> Transition {
        if signal == self.active {
            self.count = 0;
            return Transition::Unchanged;
        }

        self.count += 1;
        let threshold = if self.active {
            self.exit_frames
        } else {
            self.enter_frames
        };
        if self.count < threshold {
            return Transition::Unchanged;
        }

        self.count = 0;
        self.active = signal;
        if signal {
            Transition::Entered
        } else {
            Transition::Exited
        }
    }

    /// Whether the latched state is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Frames counted toward the pending flip.
    #[must_use]
    pub fn pending_frames(&self) -> u32 {
        self.count
    }

    /// Drop to inactive with a cleared counter.
    pub fn reset(&mut self) {
        self.count = 0;
        self.active = false;
    }
}

/// Distance latch: engages below `enter`, releases above `exit`.
#[derive(Debug, Clone)]
pub struct PinchLatch {
    enter: f32,
    exit: f32,
    engaged: bool,
}

impl PinchLatch {
    /// Create a released latch. The thresholds are reordered if `enter` is
    /// larger than `exit`.
    #[must_use]
    pub fn new(enter: f32, exit: f32) -> Self {
        let (enter, exit) = if enter > exit {
            log::warn!(
                "pinch thresholds out of order ({enter} > {exit}); swapping"
            );
            (exit, enter)
        } else {
            (enter, exit)
        };
        Self {
            enter,
            exit,
            engaged: false,
        }
    }

    /// Feed one distance sample. `None` (no measurable hand) releases.
    pub fn update(&mut self, distance: Option<f32>) -> bool {
        self.engaged = match distance {
            None => false,
            Some(d) if self.engaged => d <= self.exit,
            Some(d) => d < self.enter,
        };
        self.engaged
    }

    /// Whether the latch is engaged.
    #[must_use]
    pub fn is_engaged(&self) -> bool {
        self.engaged
    }

    /// Release the latch.
    pub fn reset(&mut self) {
        self.engaged = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enters_exactly_at_threshold() {
        let mut h = FrameHysteresis::new(4, 6);
        for _ in 0..3 {
            assert_eq!(h.update(true), Transition::Unchanged);
            assert!(!h.is_active());
        }
        assert_eq!(h.update(true), Transition::Entered);
        assert!(h.is_active());
    }

    #[test]
    fn exits_exactly_at_threshold() {
        let mut h = FrameHysteresis::new(4, 6);
        for _ in 0..4 {
            let _ = h.update(true);
        }
        for _ in 0..5 {
            assert_eq!(h.update(false), Transition::Unchanged);
            assert!(h.is_active());
        }
        assert_eq!(h.update(false), Transition::Exited);
        assert!(!h.is_active());
    }

    #[test]
    fn alternating_signal_never_flips() {
        let mut h = FrameHysteresis::new(4, 6);
        for i in 0..100 {
            // three on, one off: always one short of the enter count
            let signal = i % 4 != 3;
            assert_eq!(h.update(signal), Transition::Unchanged);
        }
        assert!(!h.is_active());
    }

    #[test]
    fn single_dropout_does_not_exit() {
        let mut h = FrameHysteresis::new(4, 6);
        for _ in 0..4 {
            let _ = h.update(true);
        }
        for _ in 0..20 {
            let _ = h.update(false);
            let _ = h.update(true);
            assert!(h.is_active());
        }
        assert_eq!(h.pending_frames(), 0);
    }

    #[test]
    fn reset_clears_state() {
        let mut h = FrameHysteresis::new(1, 1);
        assert_eq!(h.update(true), Transition::Entered);
        h.reset();
        assert!(!h.is_active());
        assert_eq!(h.pending_frames(), 0);
    }

    #[test]
    fn pinch_latch_holds_between_thresholds() {
        let mut latch = PinchLatch::new(0.06, 0.09);
        assert!(!latch.update(Some(0.07)));
        assert!(latch.update(Some(0.05)));
        assert!(latch.update(Some(0.08)));
        assert!(latch.update(Some(0.09)));
        assert!(!latch.update(Some(0.095)));
        assert!(!latch.update(Some(0.07)));
    }

    #[test]
    fn pinch_latch_releases_without_hand() {
        let mut latch = PinchLatch::new(0.09, 0.06);
        assert!(latch.update(Some(0.01)));
        assert!(!latch.update(None));
        assert!(!latch.is_engaged());
    }
}
