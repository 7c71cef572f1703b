use web_time::{Duration, Instant};

/// Frame timing with FPS calculation and optional frame limiting.
///
/// Frames can be clocked by the wall clock ([`FrameTiming::end_frame`]) or
/// by capture timestamps ([`FrameTiming::end_frame_at`]), which keeps
/// replayed sessions deterministic.
pub struct FrameTiming {
    /// Target FPS (0 = unlimited)
    target_fps: u32,
    /// Minimum frame duration based on target FPS
    min_frame_duration: Duration,
    /// Last wall-clock frame end
    last_frame: Instant,
    /// Last capture timestamp, in milliseconds
    last_timestamp_ms: Option<f64>,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameTiming {
    /// Create a new frame timer with the given FPS target (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };

        Self {
            target_fps,
            min_frame_duration,
            last_frame: Instant::now(),
            last_timestamp_ms: None,
            smoothed_fps: 30.0, // typical webcam rate
            smoothing: 0.05,
        }
    }

    /// Whether enough wall-clock time has passed to run the next frame.
    #[must_use]
    pub fn should_render(&self) -> bool {
        if self.target_fps == 0 {
            return true;
        }
        self.last_frame.elapsed() >= self.min_frame_duration
    }

    /// Wall-clock time left before the next frame is due.
    #[must_use]
    pub fn until_next_frame(&self) -> Duration {
        self.min_frame_duration
            .saturating_sub(self.last_frame.elapsed())
    }

    /// Close a frame on the wall clock. Returns the frame time in seconds.
    pub fn end_frame(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        let frame_time = elapsed.as_secs_f32();
        self.accumulate(frame_time);
        frame_time
    }

    /// Close a frame captured at `timestamp_ms`. Returns the time since the
    /// previous capture in seconds (zero for the first frame or a clock
    /// that ran backwards).
    pub fn end_frame_at(&mut self, timestamp_ms: f64) -> f32 {
        self.last_frame = Instant::now();
        let frame_time = self
            .last_timestamp_ms
            .replace(timestamp_ms)
            .map_or(0.0, |prev| ((timestamp_ms - prev) / 1000.0).max(0.0))
            as f32;
        self.accumulate(frame_time);
        frame_time
    }

    fn accumulate(&mut self, frame_time: f32) {
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}
